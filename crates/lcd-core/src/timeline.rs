//! # Timeline Module
//!
//! Partitions a fixed-length timeline into sequential segments and resolves which
//! scene is on screen for a global frame.
//!
//! ## Key Types
//! - `Timeline`: frame count, frame rate and output size.
//! - `Segment`: one scene's span of global frames.
//! - `Composition`: validated, ordered segments plus the lookup logic.
//! - `GapPolicy`: what to show for frames no segment covers.

use crate::errors::AnimationError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub duration_frames: u32,
    pub fps: u32,
    pub width: u32,
    pub height: u32,
}

impl Timeline {
    pub fn new(
        duration_frames: u32,
        fps: u32,
        width: u32,
        height: u32,
    ) -> Result<Self, AnimationError> {
        if duration_frames == 0 {
            return Err(AnimationError::InvalidTimeline(
                "duration must be at least one frame".to_string(),
            ));
        }
        if fps == 0 {
            return Err(AnimationError::InvalidTimeline(
                "fps must be positive".to_string(),
            ));
        }
        Ok(Self {
            duration_frames,
            fps,
            width,
            height,
        })
    }

    pub fn duration_secs(&self) -> f64 {
        self.frames_to_secs(self.duration_frames as i64)
    }

    pub fn frames_to_secs(&self, frames: i64) -> f64 {
        frames as f64 / self.fps as f64
    }

    /// Nearest whole frame for a time in seconds.
    pub fn secs_to_frames(&self, secs: f64) -> i64 {
        (secs * self.fps as f64).round() as i64
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment<S> {
    pub scene: S,
    /// First global frame (inclusive).
    pub start: i64,
    pub duration: i64,
}

impl<S> Segment<S> {
    pub fn new(scene: S, start: i64, duration: i64) -> Self {
        Self {
            scene,
            start,
            duration,
        }
    }

    /// One past the last frame. Saturates for segments a [`Composition`] would reject.
    pub fn end(&self) -> i64 {
        self.start.saturating_add(self.duration)
    }

    pub fn contains(&self, global_frame: i64) -> bool {
        global_frame >= self.start && global_frame < self.end()
    }
}

/// Behavior for frames outside every segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// No scene; the host draws only the background.
    Empty,
    /// Hold the boundary frame of the nearest segment.
    #[default]
    Clamp,
}

/// The scene on screen for one global frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveScene<S> {
    pub index: usize,
    pub scene: S,
    pub local_frame: i64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Composition<S> {
    timeline: Timeline,
    segments: Vec<Segment<S>>,
}

impl<S: Clone> Composition<S> {
    pub fn new(timeline: Timeline, segments: Vec<Segment<S>>) -> Result<Self, AnimationError> {
        if segments.is_empty() {
            return Err(AnimationError::InvalidTimeline(
                "a composition needs at least one segment".to_string(),
            ));
        }
        let total = timeline.duration_frames as i64;
        for (index, segment) in segments.iter().enumerate() {
            if segment.duration <= 0 {
                return Err(AnimationError::InvalidSegment {
                    index,
                    reason: format!("duration must be positive, got {}", segment.duration),
                });
            }
            let end = segment.start.checked_add(segment.duration).ok_or_else(|| {
                AnimationError::InvalidSegment {
                    index,
                    reason: format!(
                        "start {} plus duration {} overflows",
                        segment.start, segment.duration
                    ),
                }
            })?;
            if segment.start < 0 || end > total {
                return Err(AnimationError::InvalidSegment {
                    index,
                    reason: format!(
                        "[{}, {}) lies outside the timeline [0, {})",
                        segment.start, end, total
                    ),
                });
            }
            if index > 0 {
                let previous = &segments[index - 1];
                if segment.start < previous.start {
                    return Err(AnimationError::InvalidSegment {
                        index,
                        reason: "segments must be ordered by start frame".to_string(),
                    });
                }
                if segment.start < previous.end() {
                    return Err(AnimationError::InvalidSegment {
                        index,
                        reason: format!(
                            "starts at {} before the previous segment ends at {}",
                            segment.start,
                            previous.end()
                        ),
                    });
                }
            }
        }
        debug!(
            segments = segments.len(),
            frames = timeline.duration_frames,
            "composition built"
        );
        Ok(Self { timeline, segments })
    }

    /// Back-to-back segments starting at frame 0.
    pub fn contiguous(
        timeline: Timeline,
        scenes: impl IntoIterator<Item = (S, i64)>,
    ) -> Result<Self, AnimationError> {
        let mut start = 0;
        let segments = scenes
            .into_iter()
            .map(|(scene, duration)| {
                let segment = Segment::new(scene, start, duration);
                start += duration;
                segment
            })
            .collect();
        Self::new(timeline, segments)
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn segments(&self) -> &[Segment<S>] {
        &self.segments
    }

    pub fn total_frames(&self) -> u32 {
        self.timeline.duration_frames
    }

    /// The segment containing `global_frame`, with its re-based local frame.
    pub fn active_scene(&self, global_frame: i64) -> Option<ActiveScene<S>> {
        // Segments are sorted and disjoint: the candidate is the last one starting at or
        // before the frame.
        let upper = self.segments.partition_point(|s| s.start <= global_frame);
        if upper == 0 {
            return None;
        }
        let index = upper - 1;
        let segment = &self.segments[index];
        segment.contains(global_frame).then(|| ActiveScene {
            index,
            scene: segment.scene.clone(),
            local_frame: global_frame - segment.start,
        })
    }

    /// Like [`Self::active_scene`], applying `policy` when no segment covers the frame.
    pub fn resolve(&self, global_frame: i64, policy: GapPolicy) -> Option<ActiveScene<S>> {
        if let Some(active) = self.active_scene(global_frame) {
            return Some(active);
        }
        match policy {
            GapPolicy::Empty => {
                warn!(frame = global_frame, "frame outside every segment");
                None
            }
            GapPolicy::Clamp => {
                let active = self.nearest_boundary(global_frame);
                debug!(
                    frame = global_frame,
                    segment = active.index,
                    local_frame = active.local_frame,
                    "clamped frame to nearest segment"
                );
                Some(active)
            }
        }
    }

    fn nearest_boundary(&self, global_frame: i64) -> ActiveScene<S> {
        let upper = self.segments.partition_point(|s| s.start <= global_frame);
        let before = upper.checked_sub(1);
        let after = (upper < self.segments.len()).then_some(upper);

        let pick_start = |index: usize| ActiveScene {
            index,
            scene: self.segments[index].scene.clone(),
            local_frame: 0,
        };
        let pick_end = |index: usize| ActiveScene {
            index,
            scene: self.segments[index].scene.clone(),
            local_frame: self.segments[index].duration - 1,
        };

        match (before, after) {
            (Some(b), Some(a)) => {
                let to_before = global_frame - (self.segments[b].end() - 1);
                let to_after = self.segments[a].start - global_frame;
                if to_before <= to_after {
                    pick_end(b)
                } else {
                    pick_start(a)
                }
            }
            (Some(b), None) => pick_end(b),
            (None, Some(a)) => pick_start(a),
            // `new` rejects empty compositions.
            (None, None) => pick_start(0),
        }
    }
}
