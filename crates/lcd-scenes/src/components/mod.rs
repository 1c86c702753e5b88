//! Reusable pieces shared by the scenes.
//!
//! Each component is a pure function of a [`FrameContext`](lcd_core::FrameContext)
//! (when it animates on its own) and its props.

pub mod explanation;
pub mod light_ray;
pub mod molecule;
pub mod polarization;
pub mod title;
pub mod viewing_angle;

pub use explanation::{explanation_box, ExplanationLine};
pub use light_ray::{light_ray, LightRay};
pub use molecule::{molecule, Molecule};
pub use polarization::polarization_arrow;
pub use title::section_title;
pub use viewing_angle::viewing_angle;

use lcd_core::{Color, Point, Shape};

/// Filled triangular arrow head with its tip at `tip`, pointing along `angle` (radians).
pub fn arrow_head(tip: Point, angle: f64, length: f64, width: f64, color: Color) -> Shape {
    let (sin, cos) = angle.sin_cos();
    let base = Point::new(tip.x - length * cos, tip.y - length * sin);
    let half = width / 2.0;
    Shape::polygon(vec![
        tip,
        Point::new(base.x - half * sin, base.y + half * cos),
        Point::new(base.x + half * sin, base.y - half * cos),
    ])
    .fill(color)
}
