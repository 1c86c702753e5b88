//! Sequencing Tests
//!
//! Phase windows and the scene composer's timeline partition.

use lcd_core::{
    Composition, FrameContext, GapPolicy, PhaseSequencer, PhaseWindow, Segment, Timeline,
};

fn video_timeline() -> Timeline {
    Timeline::new(900, 30, 1920, 1080).unwrap()
}

fn video_segments() -> Vec<Segment<&'static str>> {
    vec![
        Segment::new("intro", 0, 90),
        Segment::new("tn", 90, 240),
        Segment::new("va", 330, 240),
        Segment::new("ips", 570, 240),
        Segment::new("comparison", 810, 90),
    ]
}

/// Routes the composer's debug/warn events to the test output.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("lcd_core=debug")
        .try_init();
}

/// Frame 100 is ten frames into the second segment.
#[test]
fn active_scene_rebases_the_frame() {
    let comp = Composition::new(video_timeline(), video_segments()).unwrap();
    let active = comp.active_scene(100).unwrap();
    assert_eq!(active.index, 1);
    assert_eq!(active.scene, "tn");
    assert_eq!(active.local_frame, 10);

    // Segment boundaries are half-open.
    assert_eq!(comp.active_scene(89).unwrap().scene, "intro");
    assert_eq!(comp.active_scene(90).unwrap().local_frame, 0);
    assert_eq!(comp.active_scene(809).unwrap().local_frame, 239);
}

/// Frame 900 is one past the end: no scene is active, and the policy decides.
#[test]
fn one_past_the_end_uses_the_gap_policy() {
    init_tracing();
    let comp = Composition::new(video_timeline(), video_segments()).unwrap();
    assert_eq!(comp.active_scene(900), None);
    assert_eq!(comp.resolve(900, GapPolicy::Empty), None);

    let clamped = comp.resolve(900, GapPolicy::Clamp).unwrap();
    assert_eq!(clamped.scene, "comparison");
    assert_eq!(clamped.local_frame, 89);

    let before = comp.resolve(-5, GapPolicy::Clamp).unwrap();
    assert_eq!((before.scene, before.local_frame), ("intro", 0));
}

/// `contiguous` builds the same partition from durations alone.
#[test]
fn contiguous_matches_explicit_segments() {
    let comp = Composition::contiguous(
        video_timeline(),
        [
            ("intro", 90),
            ("tn", 240),
            ("va", 240),
            ("ips", 240),
            ("comparison", 90),
        ],
    )
    .unwrap();
    assert_eq!(comp.segments(), video_segments().as_slice());
    assert_eq!(comp.total_frames(), 900);
}

/// Every covered frame maps to exactly one scene.
#[test]
fn every_frame_has_exactly_one_scene() {
    let comp = Composition::new(video_timeline(), video_segments()).unwrap();
    for frame in 0..900 {
        let owners = comp
            .segments()
            .iter()
            .filter(|s| s.contains(frame))
            .count();
        assert_eq!(owners, 1, "frame {}", frame);
        assert!(comp.active_scene(frame).is_some());
    }
}

/// Overlapping phases progress independently, and threshold flips are pure.
#[test]
fn phases_overlap_and_flip_without_hysteresis() {
    let seq = PhaseSequencer::new(vec![
        PhaseWindow::new("build", 0.0, 60.0),
        PhaseWindow::new("light", 60.0, 120.0),
        PhaseWindow::new("fade", 40.0, 80.0),
    ])
    .unwrap();

    let at_70 = seq.evaluate(70.0).unwrap();
    assert_eq!(at_70.progress("build"), 1.0);
    assert!((at_70.progress("light") - 1.0 / 6.0).abs() < 1e-12);
    assert!((at_70.progress("fade") - 0.75).abs() < 1e-12);
    assert!(!at_70.crossed("light", 0.5));

    // Walk forwards and backwards: the flip happens at the same frame both ways.
    let flip_frame = |frames: Vec<i64>| {
        frames
            .into_iter()
            .find(|f| seq.evaluate(*f as f64).unwrap().crossed("light", 0.5) != (*f > 90))
    };
    assert_eq!(flip_frame((0..150).collect()), None);
    assert_eq!(flip_frame((0..150).rev().collect()), None);

    let before = seq.evaluate(-30.0).unwrap();
    assert!(before.iter().all(|(_, p)| p == 0.0));
    assert_eq!(seq.evaluate(33.0).unwrap(), seq.evaluate(33.0).unwrap());
}

/// The frame context carries output settings and evaluates against its own frame.
#[test]
fn frame_context_is_explicit() {
    let timeline = video_timeline();
    let ctx = FrameContext::new(120, &timeline);
    assert_eq!(ctx.fps, 30);
    let local = ctx.shifted(90);
    assert_eq!(local.frame, 30);
    assert!((local.ramp([0.0, 60.0], [0.0, 1.0]).unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(ctx.at(0).frame, 0);
}
