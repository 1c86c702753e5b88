use lcd_core::tree::{PathCommand, TextAnchor};
use lcd_core::{Color, Group, Node, Point, Shape, Text};

const RADIUS: f64 = 80.0;

/// A monitor outline with a cone showing how wide the panel can be viewed.
///
/// The cone opens with `progress`, which also drives the diagram's opacity.
pub fn viewing_angle(
    x: f64,
    y: f64,
    angle_range: f64,
    color: Color,
    label: &str,
    progress: f64,
) -> Node {
    let half = angle_range / 2.0 * progress;
    let start = (270.0 - half).to_radians();
    let end = (270.0 + half).to_radians();
    let p1 = Point::new(x + RADIUS * start.cos(), y + RADIUS * start.sin());
    let p2 = Point::new(x + RADIUS * end.cos(), y + RADIUS * end.sin());

    let cone = Shape::path(vec![
        PathCommand::MoveTo {
            to: Point::new(x, y),
        },
        PathCommand::LineTo { to: p1 },
        PathCommand::Arc {
            radius: RADIUS,
            large_arc: half > 90.0,
            sweep: true,
            to: p2,
        },
        PathCommand::Close,
    ])
    .fill(color)
    .stroke(color, 1.0)
    .opacity(0.15);

    Group::new()
        .opacity(progress)
        .child(
            Shape::rect(x - 40.0, y - 50.0, 80.0, 55.0)
                .rounded(4.0)
                .stroke(color, 2.0)
                .opacity(0.6),
        )
        .child(cone)
        .child(
            Text::new(
                x,
                y + RADIUS + 25.0,
                format!("{}: {}°", label, angle_range),
                14.0,
            )
            .anchor(TextAnchor::Middle)
            .color(color),
        )
        .into()
}
