//! # Video Configuration
//!
//! Output settings and the segment table, loadable from JSON.
//! Every field has a default, so a config file only needs the keys it overrides.

use crate::comparison::COMPARISON_DURATION;
use crate::errors::ConfigError;
use crate::intro::INTRO_DURATION;
use crate::panel::PANEL_DURATION;
use lcd_core::{AnimationError, Color, GapPolicy, Segment, Timeline};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// The top-level scenes the video can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneKind {
    Intro,
    Tn,
    Va,
    Ips,
    Comparison,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub duration_frames: u32,
    /// Hex color painted behind every scene.
    pub background: String,
    pub gap_policy: GapPolicy,
    pub segments: Vec<Segment<SceneKind>>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        let scenes = [
            (SceneKind::Intro, INTRO_DURATION),
            (SceneKind::Tn, PANEL_DURATION),
            (SceneKind::Va, PANEL_DURATION),
            (SceneKind::Ips, PANEL_DURATION),
            (SceneKind::Comparison, COMPARISON_DURATION),
        ];
        let mut start = 0;
        let segments: Vec<_> = scenes
            .into_iter()
            .map(|(scene, duration)| {
                let segment = Segment::new(scene, start, duration);
                start += duration;
                segment
            })
            .collect();

        Self {
            width: 1920,
            height: 1080,
            fps: 30,
            duration_frames: start as u32,
            background: "#0a0a1a".to_string(),
            gap_policy: GapPolicy::Clamp,
            segments,
        }
    }
}

impl VideoConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading video config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn timeline(&self) -> Result<Timeline, AnimationError> {
        Timeline::new(self.duration_frames, self.fps, self.width, self.height)
    }

    pub fn background_color(&self) -> Result<Color, ConfigError> {
        Color::from_hex(&self.background)
            .ok_or_else(|| ConfigError::InvalidColor(self.background.clone()))
    }
}
