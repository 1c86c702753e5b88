//! # LCD Core
//!
//! `lcd-core` is the frame-driven animation engine behind the LCD panel explainer video.
//!
//! Every value on screen is a pure function of a frame number. The crate provides the
//! building blocks for computing those values and for describing the resulting picture:
//!
//! *   **Interpolation**: piecewise-linear or eased curves with clamp/extend/error extrapolation.
//! *   **Springs**: closed-form damped oscillators for entrance motion.
//! *   **Phases**: named, overlapping progress windows that gate sub-animations.
//! *   **Timeline**: sequential segments with a locally re-based frame counter per scene.
//! *   **Visual tree**: shapes, groups and text for the host to paint.
//!
//! ## Usage
//!
//! ```rust
//! use lcd_core::interpolate::{interpolate, InterpolateOptions};
//!
//! let options = InterpolateOptions::clamped();
//! let opacity = interpolate(50.0, &[0.0, 60.0], &[0.0, 1.0], options).unwrap();
//! assert!((opacity - 50.0 / 60.0).abs() < 1e-12);
//! ```

/// Easing curves and spring physics.
pub mod animation;

/// Explicit per-frame context handed to scenes.
pub mod context;

pub mod errors;

/// Curve mapping with extrapolation policies.
pub mod interpolate;

/// Named progress windows.
pub mod phase;

/// Timeline partitioning and active-scene lookup.
pub mod timeline;

/// The declarative visual tree.
pub mod tree;

/// Shared value types (colors, points).
pub mod types;

pub use animation::{spring, EasingType, Spring, SpringConfig, SpringOptions};
pub use context::FrameContext;
pub use errors::{AnimationError, InvalidRangeError};
pub use interpolate::{interpolate, ramp, CurveMapping, Extrapolate, InterpolateOptions};
pub use phase::{PhaseSequencer, PhaseWindow, Phases};
pub use timeline::{ActiveScene, Composition, GapPolicy, Segment, Timeline};
pub use tree::{Group, Node, Shape, Text};
pub use types::{Color, Point};
