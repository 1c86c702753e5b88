use lcd_core::{AnimationError, Color, FrameContext, Group, Node, SpringOptions, Text};

const LEFT: f64 = 60.0;
const TOP: f64 = 40.0;

/// Scene heading: the title springs in from the left while fading in, the subtitle follows.
pub fn section_title(
    ctx: &FrameContext,
    title: &str,
    subtitle: &str,
    color: Color,
) -> Result<Node, AnimationError> {
    let slide = ctx.spring(SpringOptions::damped(15.0).range(-100.0, 0.0))?;
    let title_opacity = ctx.ramp([0.0, 15.0], [0.0, 1.0])?;
    let subtitle_opacity = ctx.ramp([15.0, 30.0], [0.0, 1.0])?;

    Ok(Group::new()
        .translate(LEFT, TOP)
        .child(
            Text::new(slide, 52.0, title, 52.0)
                .bold()
                .color(color)
                .opacity(title_opacity),
        )
        .child(
            Text::new(0.0, 88.0, subtitle, 20.0)
                .color(Color::rgba(0x88, 0x99, 0xbb, 1.0))
                .opacity(subtitle_opacity),
        )
        .into())
}
