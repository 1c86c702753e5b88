use crate::scene::Scene;
use crate::technology::Technology;
use lcd_core::tree::TextAnchor;
use lcd_core::{AnimationError, Color, FrameContext, Group, Node, Shape, SpringOptions, Text};

pub const COMPARISON_DURATION: i64 = 90;

const CARD_WIDTH: f64 = 350.0;
const CARD_GAP: f64 = 40.0;
const CARD_PADDING: f64 = 30.0;
const ROW_HEIGHT: f64 = 37.0;
const ROW_LABELS: [&str; 4] = ["Viewing Angle", "Response Time", "Contrast", "Color Accuracy"];

/// One technology's column in the summary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonCard {
    pub technology: Technology,
    pub color: Color,
    /// Viewing angle, response time, contrast and color accuracy, in [`ROW_LABELS`] order.
    pub ratings: [&'static str; 4],
    pub delay: i64,
}

pub const CARDS: [ComparisonCard; 3] = [
    ComparisonCard {
        technology: Technology::Tn,
        color: Color::new(1.0, 0.420, 0.420, 1.0),
        ratings: ["Narrow", "★★★★★", "★★★☆☆", "★★☆☆☆"],
        delay: 10,
    },
    ComparisonCard {
        technology: Technology::Va,
        color: Color::new(0.306, 0.804, 0.769, 1.0),
        ratings: ["Medium", "★★★☆☆", "★★★★★", "★★★★☆"],
        delay: 18,
    },
    ComparisonCard {
        technology: Technology::Ips,
        color: Color::new(0.271, 0.718, 0.820, 1.0),
        ratings: ["Wide", "★★★★☆", "★★★☆☆", "★★★★★"],
        delay: 26,
    },
];

fn card_height() -> f64 {
    CARD_PADDING * 2.0 + 56.0 + ROW_HEIGHT * ROW_LABELS.len() as f64
}

/// Card scale at the current frame, never negative.
pub fn card_scale(ctx: &FrameContext, card: &ComparisonCard) -> Result<f64, AnimationError> {
    let scale = ctx.spring(SpringOptions::damped(12.0).delayed(card.delay))?;
    Ok(scale.max(0.0))
}

fn card(card: &ComparisonCard, scale: f64) -> Group {
    let height = card_height();
    let (left, top) = (-CARD_WIDTH / 2.0, -height / 2.0);
    let muted = Color::rgba(0x88, 0x99, 0xbb, 1.0);

    let mut group = Group::new()
        .scale(scale)
        .child(
            Shape::rect(left, top, CARD_WIDTH, height)
                .rounded(16.0)
                .fill(Color::WHITE.with_alpha(0.05))
                .stroke(card.color.with_alpha(0x44 as f32 / 255.0), 2.0),
        )
        .child(
            Text::new(0.0, top + CARD_PADDING + 36.0, card.technology.label(), 36.0)
                .bold()
                .anchor(TextAnchor::Middle)
                .color(card.color),
        );

    let inner = (left + CARD_PADDING, -left - CARD_PADDING);
    for (i, (label, value)) in ROW_LABELS.iter().zip(card.ratings).enumerate() {
        let y = top + CARD_PADDING + 56.0 + i as f64 * ROW_HEIGHT;
        group = group
            .child(Text::new(inner.0, y + 24.0, *label, 16.0).color(muted))
            .child(
                Text::new(inner.1, y + 24.0, value, 16.0)
                    .bold()
                    .anchor(TextAnchor::End),
            )
            .child(
                Shape::line(inner.0, y + ROW_HEIGHT, inner.1, y + ROW_HEIGHT)
                    .stroke(Color::WHITE.with_alpha(0.1), 1.0),
            );
    }
    group
}

/// Closing summary of the three technologies side by side.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComparisonScene;

impl Scene for ComparisonScene {
    fn render(&self, ctx: &FrameContext) -> Result<Node, AnimationError> {
        let title_opacity = ctx.ramp([0.0, 15.0], [0.0, 1.0])?;
        let center_x = ctx.width as f64 / 2.0;
        let cards_y = ctx.height as f64 / 2.0 + 50.0;
        let row_width = CARD_WIDTH * CARDS.len() as f64 + CARD_GAP * (CARDS.len() - 1) as f64;
        let first_x = center_x - row_width / 2.0 + CARD_WIDTH / 2.0;

        let mut root = Group::new().child(
            Text::new(center_x, cards_y - card_height() / 2.0 - 50.0, "Comparison Summary", 48.0)
                .bold()
                .anchor(TextAnchor::Middle)
                .opacity(title_opacity),
        );
        for (i, item) in CARDS.iter().enumerate() {
            let x = first_x + i as f64 * (CARD_WIDTH + CARD_GAP);
            let scale = card_scale(ctx, item)?;
            root = root.child(Group::new().translate(x, cards_y).child(card(item, scale)));
        }
        Ok(root.into())
    }
}
