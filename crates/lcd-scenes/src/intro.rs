use crate::scene::Scene;
use lcd_core::tree::TextAnchor;
use lcd_core::{AnimationError, Color, FrameContext, Group, Node, Shape, SpringOptions, Text};

pub const INTRO_DURATION: i64 = 90;

const TITLE: &str = "LCD Panel Technologies";
const SUBTITLE: &str = "TN • VA • IPS — How They Work";
const CHIPS: [&str; 4] = ["Backlight", "Polarizer", "Liquid Crystals", "Color Filter"];
const CHIP_FONT: f64 = 18.0;
const CHIP_PADDING: (f64, f64) = (24.0, 12.0);
const CHIP_GAP: f64 = 40.0;

/// Title card: the heading springs up to full size, then the layer names appear one by one.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntroScene;

impl IntroScene {
    fn chip_width(label: &str) -> f64 {
        label.chars().count() as f64 * CHIP_FONT * 0.55 + CHIP_PADDING.0 * 2.0
    }

    fn chips(&self, ctx: &FrameContext) -> Result<Group, AnimationError> {
        let widths: Vec<f64> = CHIPS.iter().map(|label| Self::chip_width(label)).collect();
        let total = widths.iter().sum::<f64>() + CHIP_GAP * (CHIPS.len() - 1) as f64;
        let height = CHIP_FONT + CHIP_PADDING.1 * 2.0;
        let tint = Color::rgba(100, 150, 255, 1.0);

        let mut row = Group::new().translate(-total / 2.0, 120.0);
        let mut x = 0.0;
        for (i, (label, width)) in CHIPS.iter().zip(&widths).enumerate() {
            let delay = 30.0 + i as f64 * 8.0;
            let opacity = ctx.ramp([delay, delay + 15.0], [0.0, 1.0])?;
            let rise = ctx.ramp([delay, delay + 15.0], [20.0, 0.0])?;
            row = row.child(
                Group::new()
                    .translate(x, rise)
                    .opacity(opacity)
                    .child(
                        Shape::rect(0.0, 0.0, *width, height)
                            .rounded(8.0)
                            .fill(tint.with_alpha(0.15))
                            .stroke(tint.with_alpha(0.3), 1.0),
                    )
                    .child(
                        Text::new(width / 2.0, CHIP_PADDING.1 + CHIP_FONT * 0.85, *label, CHIP_FONT)
                            .anchor(TextAnchor::Middle)
                            .color(Color::rgba(0xaa, 0xbb, 0xdd, 1.0)),
                    ),
            );
            x += width + CHIP_GAP;
        }
        Ok(row)
    }
}

impl Scene for IntroScene {
    fn render(&self, ctx: &FrameContext) -> Result<Node, AnimationError> {
        let scale = ctx.spring(SpringOptions::damped(12.0))?;
        let subtitle = ctx.ramp([20.0, 40.0], [0.0, 1.0])?;
        let exit = ctx.ramp([70.0, 90.0], [1.0, 0.0])?;
        let center = (ctx.width as f64 / 2.0, ctx.height as f64 / 2.0);

        Ok(Group::new()
            .opacity(exit)
            .child(
                Group::new()
                    .translate(center.0, center.1 - 60.0)
                    .scale(scale)
                    .child(
                        Text::new(0.0, 0.0, TITLE, 72.0)
                            .bold()
                            .anchor(TextAnchor::Middle),
                    )
                    .child(
                        Group::new()
                            .opacity(subtitle)
                            .child(
                                Text::new(0.0, 60.0, SUBTITLE, 32.0)
                                    .anchor(TextAnchor::Middle)
                                    .color(Color::rgba(0x88, 0x99, 0xbb, 1.0)),
                            )
                            .child(self.chips(ctx)?),
                    ),
            )
            .into())
    }
}
