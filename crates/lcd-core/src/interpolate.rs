//! # Interpolation Module
//!
//! Maps a scalar input (usually a frame number) through a piecewise curve.
//!
//! ## Key Types
//! - `Extrapolate`: behavior below the first / above the last breakpoint.
//! - `InterpolateOptions`: per-side extrapolation plus the easing applied inside segments.
//! - `CurveMapping`: a validated breakpoint/output table that can be evaluated repeatedly.

use crate::animation::EasingType;
use crate::errors::{AnimationError, InvalidRangeError};
use serde::{Deserialize, Serialize};

/// Out-of-range behavior of a curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the outermost output.
    Clamp,
    /// Continue the outermost segment linearly.
    #[default]
    Extend,
    /// Refuse the input.
    Error,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolateOptions {
    pub extrapolate_left: Extrapolate,
    pub extrapolate_right: Extrapolate,
    pub easing: EasingType,
}

impl InterpolateOptions {
    /// Clamp on both sides.
    pub fn clamped() -> Self {
        Self {
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
            easing: EasingType::Linear,
        }
    }

    pub fn clamp_left(mut self) -> Self {
        self.extrapolate_left = Extrapolate::Clamp;
        self
    }

    pub fn clamp_right(mut self) -> Self {
        self.extrapolate_right = Extrapolate::Clamp;
        self
    }

    pub fn eased(mut self, easing: EasingType) -> Self {
        self.easing = easing;
        self
    }
}

/// A validated curve: strictly increasing breakpoints and one output per breakpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurveMapping {
    breakpoints: Vec<f64>,
    outputs: Vec<f64>,
    options: InterpolateOptions,
}

impl CurveMapping {
    pub fn new(
        breakpoints: Vec<f64>,
        outputs: Vec<f64>,
        options: InterpolateOptions,
    ) -> Result<Self, InvalidRangeError> {
        validate(&breakpoints, &outputs)?;
        Ok(Self {
            breakpoints,
            outputs,
            options,
        })
    }

    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn outputs(&self) -> &[f64] {
        &self.outputs
    }

    pub fn options(&self) -> InterpolateOptions {
        self.options
    }

    pub fn evaluate(&self, input: f64) -> Result<f64, AnimationError> {
        evaluate_validated(input, &self.breakpoints, &self.outputs, self.options)
    }
}

fn validate(breakpoints: &[f64], outputs: &[f64]) -> Result<(), InvalidRangeError> {
    if breakpoints.len() != outputs.len() {
        return Err(InvalidRangeError::LengthMismatch {
            breakpoints: breakpoints.len(),
            outputs: outputs.len(),
        });
    }
    if breakpoints.len() < 2 {
        return Err(InvalidRangeError::TooFewBreakpoints(breakpoints.len()));
    }
    for (index, (b, o)) in breakpoints.iter().zip(outputs).enumerate() {
        if !b.is_finite() || !o.is_finite() {
            return Err(InvalidRangeError::NonFinite { index });
        }
    }
    for (index, pair) in breakpoints.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(InvalidRangeError::NotIncreasing {
                index: index + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}

/// Evaluates `input` against the curve described by `breakpoints` and `outputs`.
///
/// Fails with [`InvalidRangeError`] on a malformed curve, and with
/// [`AnimationError::OutOfRange`] when an `Error` extrapolation side is hit.
pub fn interpolate(
    input: f64,
    breakpoints: &[f64],
    outputs: &[f64],
    options: InterpolateOptions,
) -> Result<f64, AnimationError> {
    validate(breakpoints, outputs)?;
    evaluate_validated(input, breakpoints, outputs, options)
}

/// Two-point, both-sides-clamped ramp: the shape almost every fade in the video uses.
pub fn ramp(input: f64, range: [f64; 2], values: [f64; 2]) -> Result<f64, AnimationError> {
    interpolate(input, &range, &values, InterpolateOptions::clamped())
}

fn evaluate_validated(
    input: f64,
    breakpoints: &[f64],
    outputs: &[f64],
    options: InterpolateOptions,
) -> Result<f64, AnimationError> {
    if input.is_nan() {
        return Err(AnimationError::NonFiniteInput(input));
    }

    let last = breakpoints.len() - 1;
    let (min, max) = (breakpoints[0], breakpoints[last]);

    if input <= min {
        if input == min {
            return Ok(outputs[0]);
        }
        return extrapolate(input, options.extrapolate_left, Side::Left, breakpoints, outputs);
    }
    if input >= max {
        if input == max {
            return Ok(outputs[last]);
        }
        return extrapolate(input, options.extrapolate_right, Side::Right, breakpoints, outputs);
    }

    // First breakpoint strictly above the input; the segment starts one before it.
    let upper = breakpoints.partition_point(|b| *b <= input);
    let segment = upper - 1;
    let (b0, b1) = (breakpoints[segment], breakpoints[segment + 1]);
    let (o0, o1) = (outputs[segment], outputs[segment + 1]);

    let t = options.easing.eval((input - b0) / (b1 - b0));
    Ok(o0 + (o1 - o0) * t)
}

#[derive(Copy, Clone)]
enum Side {
    Left,
    Right,
}

fn extrapolate(
    input: f64,
    policy: Extrapolate,
    side: Side,
    breakpoints: &[f64],
    outputs: &[f64],
) -> Result<f64, AnimationError> {
    let last = breakpoints.len() - 1;
    match policy {
        Extrapolate::Clamp => Ok(match side {
            Side::Left => outputs[0],
            Side::Right => outputs[last],
        }),
        Extrapolate::Extend => {
            let segment = match side {
                Side::Left => 0,
                Side::Right => last - 1,
            };
            let (b0, b1) = (breakpoints[segment], breakpoints[segment + 1]);
            let (o0, o1) = (outputs[segment], outputs[segment + 1]);
            let slope = (o1 - o0) / (b1 - b0);
            Ok(o0 + slope * (input - b0))
        }
        Extrapolate::Error => Err(AnimationError::OutOfRange {
            input,
            min: breakpoints[0],
            max: breakpoints[last],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_continues_outer_segments() {
        let opts = InterpolateOptions::default();
        assert_eq!(interpolate(-30.0, &[0.0, 60.0], &[0.0, 1.0], opts).unwrap(), -0.5);
        let v = interpolate(20.0, &[0.0, 5.0, 10.0], &[0.0, 10.0, 0.0], opts).unwrap();
        assert_eq!(v, -20.0);
    }

    #[test]
    fn clamp_on_single_segment_curves() {
        // With two breakpoints the left and right outer segments are the same one.
        let opts = InterpolateOptions::clamped();
        assert_eq!(interpolate(-1.0, &[0.0, 1.0], &[3.0, 7.0], opts).unwrap(), 3.0);
        assert_eq!(interpolate(2.0, &[0.0, 1.0], &[3.0, 7.0], opts).unwrap(), 7.0);
    }

    #[test]
    fn error_policy_rejects_out_of_range() {
        let opts = InterpolateOptions {
            extrapolate_left: Extrapolate::Error,
            extrapolate_right: Extrapolate::Clamp,
            easing: EasingType::Linear,
        };
        let err = interpolate(-1.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap_err();
        assert_eq!(
            err,
            AnimationError::OutOfRange {
                input: -1.0,
                min: 0.0,
                max: 10.0
            }
        );
        assert_eq!(interpolate(11.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(), 1.0);
    }

    #[test]
    fn nan_input_is_rejected() {
        let err = ramp(f64::NAN, [0.0, 1.0], [0.0, 1.0]).unwrap_err();
        assert!(matches!(err, AnimationError::NonFiniteInput(_)));
    }

    #[test]
    fn eased_segments_keep_their_end_points() {
        let opts = InterpolateOptions::clamped().eased(EasingType::EaseInOut);
        assert_eq!(interpolate(0.0, &[0.0, 10.0], &[2.0, 4.0], opts).unwrap(), 2.0);
        assert_eq!(interpolate(10.0, &[0.0, 10.0], &[2.0, 4.0], opts).unwrap(), 4.0);
        let mid = interpolate(2.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap();
        assert!(mid < 0.2, "ease-in-out should start slower than linear, got {}", mid);
    }
}
