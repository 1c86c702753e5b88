//! End-to-End Tests
//!
//! Drives the whole video through the facade crate, the way a host would.

use lcd_explainer::core::tree::Geometry;
use lcd_explainer::{LcdVideo, Node, SceneKind, VideoConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Scene changes happen exactly on the segment boundaries of the shipped video.
#[test]
fn scene_boundaries() {
    init_tracing();
    let video = LcdVideo::new(VideoConfig::default()).unwrap();
    let boundaries = [
        (89, SceneKind::Intro, 89),
        (90, SceneKind::Tn, 0),
        (329, SceneKind::Tn, 239),
        (330, SceneKind::Va, 0),
        (570, SceneKind::Ips, 0),
        (810, SceneKind::Comparison, 0),
        (899, SceneKind::Comparison, 89),
    ];
    for (global, scene, local) in boundaries {
        let active = video.active_scene(global).unwrap();
        assert_eq!((active.scene, active.local_frame), (scene, local), "frame {}", global);
    }
}

/// Each panel plays the same choreography at its own offset.
#[test]
fn panels_share_their_timing() {
    let video = LcdVideo::new(VideoConfig::default()).unwrap();
    let ray_count = |global: i64| {
        video
            .render_frame(global)
            .unwrap()
            .descendants()
            .into_iter()
            .filter(|n| {
                matches!(n, Node::Shape(s) if matches!(s.geometry, Geometry::Polyline { .. }))
            })
            .count()
    };
    for start in [90, 330, 570] {
        assert_eq!(ray_count(start + 50), 0);
        assert_eq!(ray_count(start + 100), 3);
    }
}

/// A full export serializes every frame.
#[test]
fn every_frame_serializes() {
    let video = LcdVideo::new(VideoConfig::default()).unwrap();
    for (frame, tree) in video.render_range(0..900).unwrap() {
        let json = tree.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "group", "frame {}", frame);
    }
}
