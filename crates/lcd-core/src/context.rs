use crate::animation::{Spring, SpringOptions};
use crate::errors::AnimationError;
use crate::interpolate::{interpolate, ramp, InterpolateOptions};
use crate::phase::{PhaseSequencer, Phases};
use crate::timeline::Timeline;

/// Everything a scene may know about "now".
///
/// Passed explicitly to every scene and component; the frame is local to the
/// enclosing segment, so scenes render identically at any timeline offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameContext {
    pub frame: i64,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
}

impl FrameContext {
    pub fn new(frame: i64, timeline: &Timeline) -> Self {
        Self {
            frame,
            fps: timeline.fps,
            width: timeline.width,
            height: timeline.height,
        }
    }

    /// Same output settings at another frame.
    pub fn at(&self, frame: i64) -> Self {
        Self { frame, ..*self }
    }

    /// Frame counter shifted so that `offset` becomes frame 0.
    pub fn shifted(&self, offset: i64) -> Self {
        self.at(self.frame - offset)
    }

    pub fn time(&self) -> f64 {
        self.frame as f64
    }

    /// Clamped two-point ramp over the current frame.
    pub fn ramp(&self, range: [f64; 2], values: [f64; 2]) -> Result<f64, AnimationError> {
        ramp(self.time(), range, values)
    }

    pub fn interpolate(
        &self,
        breakpoints: &[f64],
        outputs: &[f64],
        options: InterpolateOptions,
    ) -> Result<f64, AnimationError> {
        interpolate(self.time(), breakpoints, outputs, options)
    }

    pub fn spring(&self, options: SpringOptions) -> Result<f64, AnimationError> {
        Ok(Spring::new(self.fps, options)?.value_at(self.frame))
    }

    pub fn phases(&self, sequencer: &PhaseSequencer) -> Result<Phases, AnimationError> {
        sequencer.evaluate(self.time())
    }
}
