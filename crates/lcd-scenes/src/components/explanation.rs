use lcd_core::{AnimationError, Color, FrameContext, Group, Node, Shape, Text};

const FONT_SIZE: f64 = 17.0;
const LINE_HEIGHT: f64 = FONT_SIZE * 1.6;
const PARAGRAPH_GAP: f64 = 12.0;
const INDENT: f64 = 16.0;
/// Average glyph advance as a fraction of the font size, used to estimate wrapping.
const GLYPH_ADVANCE: f64 = 0.5;
const FADE_FRAMES: f64 = 20.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExplanationLine {
    pub text: &'static str,
    /// Local frame at which the paragraph starts fading in.
    pub start: i64,
}

impl ExplanationLine {
    pub const fn new(text: &'static str, start: i64) -> Self {
        Self { text, start }
    }
}

fn estimated_lines(text: &str, width: f64) -> f64 {
    let per_line = ((width - INDENT) / (FONT_SIZE * GLYPH_ADVANCE)).max(1.0);
    (text.chars().count() as f64 / per_line).ceil().max(1.0)
}

/// Column of paragraphs, each fading in and rising 15px over 20 frames from its start.
pub fn explanation_box(
    ctx: &FrameContext,
    lines: &[ExplanationLine],
    x: f64,
    y: f64,
    width: f64,
    color: Color,
) -> Result<Node, AnimationError> {
    let mut column = Group::new().translate(x, y);
    let mut top = 0.0;

    for line in lines {
        let start = line.start as f64;
        let opacity = ctx.ramp([start, start + FADE_FRAMES], [0.0, 1.0])?;
        let rise = ctx.ramp([start, start + FADE_FRAMES], [15.0, 0.0])?;
        let height = estimated_lines(line.text, width) * LINE_HEIGHT;

        column = column.child(
            Group::new()
                .translate(0.0, top + rise)
                .opacity(opacity)
                .child(
                    Shape::line(1.5, 0.0, 1.5, height)
                        .stroke(color.with_alpha(0x44 as f32 / 255.0), 3.0),
                )
                .child(
                    Text::new(INDENT, FONT_SIZE, line.text, FONT_SIZE)
                        .color(color)
                        .wrap(width - INDENT),
                ),
        );
        top += height + PARAGRAPH_GAP;
    }

    Ok(column.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_takes_one_line() {
        assert_eq!(estimated_lines("V+", 440.0), 1.0);
        assert!(estimated_lines(&"x".repeat(200), 440.0) > 3.0);
    }
}
