//! # Video
//!
//! The assembled explainer: composition, background and one instance of every scene.
//! [`LcdVideo::render_frame`] is the entry point a host calls once per output frame.

use crate::comparison::ComparisonScene;
use crate::config::{SceneKind, VideoConfig};
use crate::errors::ConfigError;
use crate::intro::IntroScene;
use crate::panel::PanelScene;
use crate::scene::Scene;
use crate::technology::Technology;
use lcd_core::{
    ActiveScene, AnimationError, Color, Composition, FrameContext, GapPolicy, Group, Node, Shape,
};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Builds the scene that renders a given [`SceneKind`].
pub fn scene_for(kind: SceneKind) -> Result<Box<dyn Scene>, AnimationError> {
    Ok(match kind {
        SceneKind::Intro => Box::new(IntroScene),
        SceneKind::Tn => Box::new(PanelScene::new(Technology::Tn)?),
        SceneKind::Va => Box::new(PanelScene::new(Technology::Va)?),
        SceneKind::Ips => Box::new(PanelScene::new(Technology::Ips)?),
        SceneKind::Comparison => Box::new(ComparisonScene),
    })
}

#[derive(Debug)]
pub struct LcdVideo {
    composition: Composition<SceneKind>,
    background: Color,
    gap_policy: GapPolicy,
    scenes: HashMap<SceneKind, Box<dyn Scene>>,
}

impl LcdVideo {
    pub fn new(config: VideoConfig) -> Result<Self, ConfigError> {
        let background = config.background_color()?;
        let composition = Composition::new(config.timeline()?, config.segments)?;

        let mut scenes = HashMap::new();
        for segment in composition.segments() {
            if !scenes.contains_key(&segment.scene) {
                scenes.insert(segment.scene, scene_for(segment.scene)?);
            }
        }
        info!(
            frames = composition.total_frames(),
            fps = composition.timeline().fps,
            scenes = scenes.len(),
            "video ready"
        );

        Ok(Self {
            composition,
            background,
            gap_policy: config.gap_policy,
            scenes,
        })
    }

    pub fn composition(&self) -> &Composition<SceneKind> {
        &self.composition
    }

    pub fn total_frames(&self) -> u32 {
        self.composition.total_frames()
    }

    /// The scene and local frame shown at `global_frame`, after the gap policy.
    pub fn active_scene(&self, global_frame: i64) -> Option<ActiveScene<SceneKind>> {
        self.composition.resolve(global_frame, self.gap_policy)
    }

    /// Visual tree for one global frame: the background, then the active scene if any.
    #[instrument(level = "trace", skip(self))]
    pub fn render_frame(&self, global_frame: i64) -> Result<Node, AnimationError> {
        let timeline = self.composition.timeline();
        let mut root = Group::new().child(
            Shape::rect(0.0, 0.0, timeline.width as f64, timeline.height as f64)
                .fill(self.background),
        );

        if let Some(active) = self.active_scene(global_frame) {
            let ctx = FrameContext::new(active.local_frame, timeline);
            // Every segment's scene was built in `new`.
            if let Some(scene) = self.scenes.get(&active.scene) {
                root = root.child(scene.render(&ctx)?);
            }
        }
        Ok(root.into())
    }

    /// Renders `frames` in parallel, returned in frame order.
    pub fn render_range(
        &self,
        frames: std::ops::Range<i64>,
    ) -> Result<Vec<(i64, Node)>, AnimationError> {
        debug!(from = frames.start, to = frames.end, "rendering frame range");
        frames
            .into_par_iter()
            .map(|frame| Ok((frame, self.render_frame(frame)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcd_core::Segment;

    #[test]
    fn builds_only_the_scenes_in_use() {
        let config = VideoConfig {
            duration_frames: 240,
            segments: vec![Segment::new(SceneKind::Va, 0, 240)],
            ..VideoConfig::default()
        };
        let video = LcdVideo::new(config).unwrap();
        assert_eq!(video.scenes.len(), 1);
    }

    #[test]
    fn gap_with_empty_policy_shows_background_only() {
        let config = VideoConfig {
            duration_frames: 200,
            gap_policy: GapPolicy::Empty,
            segments: vec![
                Segment::new(SceneKind::Intro, 0, 90),
                Segment::new(SceneKind::Comparison, 110, 90),
            ],
            ..VideoConfig::default()
        };
        let video = LcdVideo::new(config).unwrap();
        match video.render_frame(100).unwrap() {
            Node::Group(root) => assert_eq!(root.children.len(), 1),
            other => panic!("expected a group, got {:?}", other),
        }
    }

    #[test]
    fn rejects_overlapping_config() {
        let config = VideoConfig {
            segments: vec![
                Segment::new(SceneKind::Intro, 0, 100),
                Segment::new(SceneKind::Tn, 90, 240),
            ],
            ..VideoConfig::default()
        };
        assert!(matches!(
            LcdVideo::new(config),
            Err(ConfigError::Animation(AnimationError::InvalidSegment { index: 1, .. }))
        ));
    }
}
