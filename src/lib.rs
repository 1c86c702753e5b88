//! # LCD Explainer
//!
//! Facade over the workspace crates:
//!
//! *   [`core`] (`lcd-core`): interpolation, springs, phase windows, the scene composer
//!     and the visual tree.
//! *   [`scenes`] (`lcd-scenes`): the explainer's scenes, configuration and the
//!     [`LcdVideo`] entry point.
//!
//! The `lcd-explainer` binary in `crates/lcd-cli` exports frames as JSON.

pub use lcd_core as core;
pub use lcd_scenes as scenes;

pub use lcd_core::{AnimationError, FrameContext, Node};
pub use lcd_scenes::{ConfigError, LcdVideo, SceneKind, VideoConfig};
