use lcd_core::{Color, Group, Node, Shape};

/// One liquid crystal molecule: an ellipse with its long axis drawn through it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Molecule {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    /// Orientation in degrees, clockwise from the x axis.
    pub angle: f64,
    /// Half length of the drawn axis.
    pub axis: f64,
    pub fill: Color,
    pub outline: Color,
    pub axis_color: Color,
}

pub fn molecule(m: &Molecule) -> Node {
    let (sin, cos) = m.angle.to_radians().sin_cos();
    let body = Shape::ellipse(m.cx, m.cy, m.rx, m.ry)
        .fill(m.fill)
        .stroke(m.outline, 0.8);

    Group::new()
        .child(Node::from(body).rotated(m.angle, m.cx, m.cy))
        .child(
            Shape::line(
                m.cx - m.axis * cos,
                m.cy - m.axis * sin,
                m.cx + m.axis * cos,
                m.cy + m.axis * sin,
            )
            .stroke(m.axis_color, 1.0),
        )
        .into()
}
