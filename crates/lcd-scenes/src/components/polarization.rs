use super::arrow_head;
use lcd_core::tree::TextAnchor;
use lcd_core::{Color, Group, Node, Point, Shape, Text};

/// Circle with a double-length arrow showing a polarizer's transmission axis.
pub fn polarization_arrow(
    x: f64,
    y: f64,
    angle: f64,
    label: Option<&str>,
    color: Color,
    size: f64,
) -> Node {
    let rad = angle.to_radians();
    let (sin, cos) = rad.sin_cos();
    let reach = size * 0.8;

    let mut group = Group::new()
        .translate(x, y)
        .child(Shape::circle(0.0, 0.0, size).stroke(color, 1.5).opacity(0.4))
        .child(Shape::line(-reach * cos, -reach * sin, reach * cos, reach * sin).stroke(color, 2.0))
        .child(arrow_head(
            Point::new(reach * cos, reach * sin),
            rad,
            10.0,
            7.0,
            color,
        ));

    if let Some(label) = label {
        group = group.child(
            Text::new(0.0, size + 18.0, label, 12.0)
                .anchor(TextAnchor::Middle)
                .color(color),
        );
    }
    group.into()
}
