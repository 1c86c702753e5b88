//! # Phase Module
//!
//! Named, possibly overlapping progress windows derived from a frame counter.
//!
//! A phase is `0` before its window, `1` after it and ramps linearly inside it.
//! Consumers flip discrete states on thresholds (`crossed`), which keeps every
//! state a pure function of the frame.

use crate::errors::AnimationError;
use crate::interpolate::{interpolate, ramp, InterpolateOptions};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhaseWindow {
    pub name: String,
    pub start: f64,
    pub end: f64,
}

impl PhaseWindow {
    pub fn new(name: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhaseSequencer {
    windows: Vec<PhaseWindow>,
}

impl PhaseSequencer {
    pub fn new(windows: Vec<PhaseWindow>) -> Result<Self, AnimationError> {
        for (i, window) in windows.iter().enumerate() {
            if !window.start.is_finite() || !window.end.is_finite() {
                return Err(AnimationError::InvalidPhase {
                    name: window.name.clone(),
                    reason: "bounds must be finite".to_string(),
                });
            }
            if window.end <= window.start {
                return Err(AnimationError::InvalidPhase {
                    name: window.name.clone(),
                    reason: format!("end {} must be after start {}", window.end, window.start),
                });
            }
            if windows[..i].iter().any(|w| w.name == window.name) {
                return Err(AnimationError::InvalidPhase {
                    name: window.name.clone(),
                    reason: "duplicate name".to_string(),
                });
            }
        }
        Ok(Self { windows })
    }

    pub fn windows(&self) -> &[PhaseWindow] {
        &self.windows
    }

    pub fn evaluate(&self, frame: f64) -> Result<Phases, AnimationError> {
        let values = self
            .windows
            .iter()
            .map(|w| Ok((w.name.clone(), ramp(frame, [w.start, w.end], [0.0, 1.0])?)))
            .collect::<Result<Vec<_>, AnimationError>>()?;
        Ok(Phases { values })
    }
}

/// Progress of every phase at one frame, in window order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Phases {
    values: Vec<(String, f64)>,
}

impl Phases {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, progress)| *progress)
    }

    /// Progress of `name`, or `0.0` for an unknown phase.
    pub fn progress(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(0.0)
    }

    /// `true` once the phase is strictly past `threshold`.
    pub fn crossed(&self, name: &str, threshold: f64) -> bool {
        self.progress(name) > threshold
    }

    /// Remaps the `[lo, hi]` slice of a phase onto `[0, 1]`, clamped.
    pub fn sub(&self, name: &str, lo: f64, hi: f64) -> Result<f64, AnimationError> {
        interpolate(
            self.progress(name),
            &[lo, hi],
            &[0.0, 1.0],
            InterpolateOptions::clamped(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(n, p)| (n.as_str(), *p))
    }
}
