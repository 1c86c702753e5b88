//! Interpolation Tests
//!
//! Curve evaluation: exact end points, monotonicity under clamp, idempotence,
//! and validation of malformed curves.

use lcd_core::{
    interpolate, AnimationError, CurveMapping, EasingType, Extrapolate, InterpolateOptions,
    InvalidRangeError,
};

/// The reference values for a one-second fade at 60 frames.
#[test]
fn clamped_fade_reference_values() {
    let opts = InterpolateOptions::clamped();
    let mid = interpolate(50.0, &[0.0, 60.0], &[0.0, 1.0], opts).unwrap();
    assert!((mid - 0.833_333_333_333).abs() < 1e-9, "got {}", mid);
    assert_eq!(interpolate(-10.0, &[0.0, 60.0], &[0.0, 1.0], opts).unwrap(), 0.0);
    assert_eq!(interpolate(1000.0, &[0.0, 60.0], &[0.0, 1.0], opts).unwrap(), 1.0);
}

/// Evaluating at the first and last breakpoints returns the outputs bit-exactly,
/// whatever the extrapolation policy or easing.
#[test]
fn end_points_are_exact() {
    let breakpoints = [0.1, 0.35, 0.7, 1.3];
    let outputs = [0.1, -0.7, 0.3333, 0.7];
    for policy in [Extrapolate::Clamp, Extrapolate::Extend, Extrapolate::Error] {
        for easing in [EasingType::Linear, EasingType::EaseInOut] {
            let opts = InterpolateOptions {
                extrapolate_left: policy,
                extrapolate_right: policy,
                easing,
            };
            for (b, o) in breakpoints.iter().zip(outputs.iter()) {
                let v = interpolate(*b, &breakpoints, &outputs, opts).unwrap();
                assert_eq!(v.to_bits(), o.to_bits(), "at breakpoint {}", b);
            }
        }
    }
}

/// Monotonic outputs with clamping give a monotonic curve over the whole domain.
#[test]
fn clamped_monotonic_outputs_stay_monotonic() {
    let curve = CurveMapping::new(
        vec![-20.0, 0.0, 7.5, 30.0, 31.0],
        vec![-3.0, 0.0, 0.0, 12.0, 40.0],
        InterpolateOptions::clamped(),
    )
    .unwrap();

    let mut previous = f64::NEG_INFINITY;
    let mut input = -60.0;
    while input <= 60.0 {
        let v = curve.evaluate(input).unwrap();
        assert!(v >= previous, "not monotonic at {}: {} < {}", input, v, previous);
        previous = v;
        input += 0.125;
    }

    let falling = CurveMapping::new(
        vec![220.0, 240.0],
        vec![1.0, 0.0],
        InterpolateOptions::clamped().eased(EasingType::EaseIn),
    )
    .unwrap();
    let mut previous = f64::INFINITY;
    for frame in 200..260 {
        let v = falling.evaluate(frame as f64).unwrap();
        assert!(v <= previous);
        previous = v;
    }
}

/// Same inputs, bit-identical outputs.
#[test]
fn evaluation_is_idempotent() {
    let curve = CurveMapping::new(
        vec![0.0, 13.0, 77.0],
        vec![0.0, 0.31, 1.0],
        InterpolateOptions::default().eased(EasingType::EaseOut),
    )
    .unwrap();
    for frame in -40..120 {
        let a = curve.evaluate(frame as f64 * 0.7).unwrap();
        let b = curve.evaluate(frame as f64 * 0.7).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

/// Malformed curves fail fast with `InvalidRangeError`.
#[test]
fn malformed_curves_are_rejected() {
    let opts = InterpolateOptions::clamped();
    assert_eq!(
        interpolate(0.0, &[0.0, 1.0, 2.0], &[0.0, 1.0], opts),
        Err(AnimationError::InvalidRange(InvalidRangeError::LengthMismatch {
            breakpoints: 3,
            outputs: 2
        }))
    );
    assert_eq!(
        interpolate(0.0, &[0.0], &[0.0], opts),
        Err(AnimationError::InvalidRange(
            InvalidRangeError::TooFewBreakpoints(1)
        ))
    );
    assert_eq!(
        interpolate(0.0, &[0.0, 5.0, 5.0], &[0.0, 1.0, 2.0], opts),
        Err(AnimationError::InvalidRange(InvalidRangeError::NotIncreasing {
            index: 2,
            previous: 5.0,
            current: 5.0
        }))
    );
    assert!(matches!(
        CurveMapping::new(vec![0.0, f64::INFINITY], vec![0.0, 1.0], opts),
        Err(InvalidRangeError::NonFinite { index: 1 })
    ));
}

/// The default options extend linearly on both sides, as the video's untuned fades expect.
#[test]
fn default_options_extend() {
    let opts = InterpolateOptions::default();
    assert_eq!(opts.extrapolate_left, Extrapolate::Extend);
    let v = interpolate(90.0, &[70.0, 90.0], &[1.0, 0.0], opts.clamp_left()).unwrap();
    assert_eq!(v, 0.0);
    let beyond = interpolate(100.0, &[70.0, 90.0], &[1.0, 0.0], opts).unwrap();
    assert!((beyond + 0.5).abs() < 1e-12);
}
