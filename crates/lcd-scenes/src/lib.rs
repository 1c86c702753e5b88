//! # LCD Scenes
//!
//! The LCD panel technology explainer built on `lcd-core`: an intro card, one
//! cross-section scene per panel technology (TN, VA, IPS) and a closing comparison.
//!
//! ## Usage
//!
//! ```rust
//! use lcd_scenes::{LcdVideo, VideoConfig};
//!
//! let video = LcdVideo::new(VideoConfig::default()).unwrap();
//! let frame = video.render_frame(100).unwrap();
//! assert!(frame.texts().contains(&"TN Panel"));
//! ```

/// Reusable visual pieces (titles, light rays, molecules, ...).
pub mod components;

pub mod comparison;

/// Video configuration and the scene table.
pub mod config;

pub mod errors;
pub mod intro;

/// The parameterized panel cross-section scene.
pub mod panel;

pub mod scene;

/// Per-technology panel data.
pub mod technology;

pub mod video;

pub use comparison::ComparisonScene;
pub use config::{SceneKind, VideoConfig};
pub use errors::ConfigError;
pub use intro::IntroScene;
pub use panel::{PanelScene, PanelState};
pub use scene::Scene;
pub use technology::{PanelSpec, Technology};
pub use video::{scene_for, LcdVideo};
