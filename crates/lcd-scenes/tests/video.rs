//! Video Tests
//!
//! The assembled explainer: segment lookup through `render_frame`, parallel range
//! rendering and JSON config loading.

use lcd_core::{GapPolicy, Node};
use lcd_scenes::{ConfigError, LcdVideo, SceneKind, VideoConfig};
use std::io::Write;

fn video() -> LcdVideo {
    LcdVideo::new(VideoConfig::default()).unwrap()
}

fn root_children(node: &Node) -> usize {
    match node {
        Node::Group(group) => group.children.len(),
        other => panic!("expected a root group, got {:?}", other),
    }
}

/// Every frame of the shipped video renders, with the background first.
#[test]
fn renders_the_whole_video() {
    let video = video();
    let frames = video.render_range(0..video.total_frames() as i64).unwrap();
    assert_eq!(frames.len(), 900);
    for (i, (frame, tree)) in frames.iter().enumerate() {
        assert_eq!(*frame, i as i64);
        assert_eq!(root_children(tree), 2);
    }
}

/// Each segment shows its own scene.
#[test]
fn segments_map_to_scenes() {
    let video = video();
    let cases = [
        (10, "LCD Panel Technologies"),
        (100, "TN Panel"),
        (400, "VA Panel"),
        (700, "IPS Panel"),
        (850, "Comparison Summary"),
    ];
    for (frame, title) in cases {
        let tree = video.render_frame(frame).unwrap();
        assert!(tree.texts().contains(&title), "frame {} lacks {}", frame, title);
    }
}

/// Past the end the default policy holds the comparison's last frame.
#[test]
fn clamps_past_the_end() {
    let video = video();
    let active = video.active_scene(900).unwrap();
    assert_eq!(active.scene, SceneKind::Comparison);
    assert_eq!(active.local_frame, 89);
    assert_eq!(video.render_frame(900).unwrap(), video.render_frame(899).unwrap());
}

/// The `Empty` policy leaves only the background outside the timeline.
#[test]
fn empty_policy_draws_background_only() {
    let video = LcdVideo::new(VideoConfig {
        gap_policy: GapPolicy::Empty,
        ..VideoConfig::default()
    })
    .unwrap();
    assert_eq!(root_children(&video.render_frame(900).unwrap()), 1);
    assert_eq!(root_children(&video.render_frame(-1).unwrap()), 1);
}

/// Parallel rendering matches frame-by-frame rendering.
#[test]
fn range_matches_single_frames() {
    let video = video();
    for (frame, tree) in video.render_range(300..340).unwrap() {
        assert_eq!(tree, video.render_frame(frame).unwrap());
    }
}

/// Frames serialize to tagged JSON.
#[test]
fn frame_exports_as_json() {
    let json = video().render_frame(200).unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "group");
    assert_eq!(value["children"][0]["fill"], "#0a0a1aff");
}

/// A config file overrides only the keys it names.
#[test]
fn loads_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"{{ "duration_frames": 240, "background": "#000", "segments": [ {{ "scene": "ips", "start": 0, "duration": 240 }} ] }}"##
    )
    .unwrap();

    let config = VideoConfig::load(file.path()).unwrap();
    assert_eq!(config.fps, 30);
    let video = LcdVideo::new(config).unwrap();
    assert!(video.render_frame(0).unwrap().texts().contains(&"IPS Panel"));
}

/// Missing files and bad colors are reported as config errors.
#[test]
fn config_errors() {
    let missing = VideoConfig::load("/definitely/not/here.json");
    assert!(matches!(missing, Err(ConfigError::IoError(_))));

    let bad = LcdVideo::new(VideoConfig {
        background: "dark blue".to_string(),
        ..VideoConfig::default()
    });
    assert!(matches!(bad, Err(ConfigError::InvalidColor(_))));
}

/// A segment whose end does not fit in a frame number is rejected, not wrapped.
#[test]
fn overflowing_segment_is_rejected() {
    let config = VideoConfig::from_json(
        r##"{ "segments": [ { "scene": "intro", "start": 9223372036854775807, "duration": 1 } ] }"##,
    )
    .unwrap();
    assert!(matches!(
        LcdVideo::new(config),
        Err(ConfigError::Animation(
            lcd_core::AnimationError::InvalidSegment { index: 0, .. }
        ))
    ));
}
