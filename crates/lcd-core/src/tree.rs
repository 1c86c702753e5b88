//! # Visual Tree
//!
//! The declarative output of a frame: nested groups of shapes and text.
//! The host walks this tree and paints it; nothing here touches a canvas.

use crate::types::{Color, Point};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Shape(Shape),
    Group(Group),
    Text(Text),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
    },
    Line {
        from: Point,
        to: Point,
    },
    Polyline {
        points: Vec<Point>,
    },
    Polygon {
        points: Vec<Point>,
    },
    Path {
        commands: Vec<PathCommand>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo {
        to: Point,
    },
    LineTo {
        to: Point,
    },
    /// Circular arc with SVG flag semantics.
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Stroke {
    #[serde(serialize_with = "as_hex")]
    pub color: Color,
    pub width: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<Vec<f64>>,
    pub round_cap: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Shape {
    pub geometry: Geometry,
    #[serde(serialize_with = "opt_as_hex")]
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

impl Shape {
    fn with_geometry(geometry: Geometry) -> Self {
        Self {
            geometry,
            fill: None,
            stroke: None,
            opacity: 1.0,
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::with_geometry(Geometry::Rect {
            x,
            y,
            width,
            height,
            corner_radius: 0.0,
        })
    }

    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self::with_geometry(Geometry::Circle { cx, cy, r })
    }

    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self::with_geometry(Geometry::Ellipse { cx, cy, rx, ry })
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::with_geometry(Geometry::Line {
            from: Point::new(x1, y1),
            to: Point::new(x2, y2),
        })
    }

    pub fn polyline(points: Vec<Point>) -> Self {
        Self::with_geometry(Geometry::Polyline { points })
    }

    pub fn polygon(points: Vec<Point>) -> Self {
        Self::with_geometry(Geometry::Polygon { points })
    }

    pub fn path(commands: Vec<PathCommand>) -> Self {
        Self::with_geometry(Geometry::Path { commands })
    }

    /// Rounds the corners of a rect; no effect on other geometry.
    pub fn rounded(mut self, radius: f64) -> Self {
        if let Geometry::Rect { corner_radius, .. } = &mut self.geometry {
            *corner_radius = radius;
        }
        self
    }

    pub fn fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(Stroke {
            color,
            width,
            dash: None,
            round_cap: false,
        });
        self
    }

    /// Dash pattern for the stroke set by [`Shape::stroke`].
    pub fn dashed(mut self, pattern: &[f64]) -> Self {
        if let Some(stroke) = &mut self.stroke {
            stroke.dash = Some(pattern.to_vec());
        }
        self
    }

    pub fn round_cap(mut self) -> Self {
        if let Some(stroke) = &mut self.stroke {
            stroke.round_cap = true;
        }
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rotation {
    pub degrees: f64,
    pub cx: f64,
    pub cy: f64,
}

/// Applied in order: translate, then rotate about `(cx, cy)`, then scale about the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotation: Option<Rotation>,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate_x: 0.0,
            translate_y: 0.0,
            rotation: None,
            scale: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Group {
    pub transform: Transform,
    pub opacity: f64,
    pub children: Vec<Node>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    pub fn new() -> Self {
        Self {
            transform: Transform::default(),
            opacity: 1.0,
            children: Vec::new(),
        }
    }

    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.transform.translate_x = x;
        self.transform.translate_y = y;
        self
    }

    pub fn rotate(mut self, degrees: f64, cx: f64, cy: f64) -> Self {
        self.transform.rotation = Some(Rotation { degrees, cx, cy });
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font_size: f64,
    pub weight: FontWeight,
    pub anchor: TextAnchor,
    #[serde(serialize_with = "as_hex")]
    pub color: Color,
    pub opacity: f64,
    /// Width at which the host should wrap the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_width: Option<f64>,
}

impl Text {
    pub fn new(x: f64, y: f64, content: impl Into<String>, font_size: f64) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font_size,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Start,
            color: Color::WHITE,
            opacity: 1.0,
            wrap_width: None,
        }
    }

    pub fn wrap(mut self, width: f64) -> Self {
        self.wrap_width = Some(width);
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

impl From<Shape> for Node {
    fn from(shape: Shape) -> Self {
        Node::Shape(shape)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text)
    }
}

impl Node {
    /// Wraps the node in a group rotated about `(cx, cy)`.
    pub fn rotated(self, degrees: f64, cx: f64, cy: f64) -> Node {
        Group::new().rotate(degrees, cx, cy).child(self).into()
    }

    /// Every node in the tree, depth-first, parents before children.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            if let Node::Group(group) = node {
                stack.extend(group.children.iter().rev());
            }
        }
        out
    }

    /// All text content in the tree, in paint order.
    pub fn texts(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.content.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn as_hex<S: serde::Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex())
}

fn opt_as_hex<S: serde::Serializer>(
    color: &Option<Color>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match color {
        Some(c) => serializer.serialize_some(&c.to_hex()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descendants_visit_in_paint_order() {
        let tree: Node = Group::new()
            .child(Text::new(0.0, 0.0, "first", 10.0))
            .child(Group::new().child(Text::new(0.0, 0.0, "nested", 10.0)))
            .child(Text::new(0.0, 0.0, "last", 10.0))
            .into();
        assert_eq!(tree.texts(), vec!["first", "nested", "last"]);
        assert_eq!(tree.descendants().len(), 5);
    }

    #[test]
    fn serializes_tagged_variants() {
        let node: Node = Shape::rect(1.0, 2.0, 3.0, 4.0)
            .rounded(6.0)
            .fill(Color::WHITE)
            .into();
        let json: serde_json::Value = serde_json::from_str(&node.to_json().unwrap()).unwrap();
        assert_eq!(json["type"], "shape");
        assert_eq!(json["geometry"]["kind"], "rect");
        assert_eq!(json["geometry"]["corner_radius"], 6.0);
        assert_eq!(json["fill"], "#ffffffff");
    }
}
