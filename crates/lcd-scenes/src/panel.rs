//! # Panel Scene
//!
//! Cross-section of an LCD sub-pixel: backlight, polarizers, the liquid crystal
//! layer and the color filter, with light rays that pass or get blocked once
//! voltage is applied. One scene renders all three technologies from their
//! [`PanelSpec`].

use crate::components::{
    arrow_head, explanation_box, light_ray, molecule, polarization_arrow, section_title,
    viewing_angle, LightRay, Molecule,
};
use crate::scene::Scene;
use crate::technology::{MoleculeMotion, PanelSpec, StateBadge, Technology, PASS_BADGE};
use lcd_core::tree::TextAnchor;
use lcd_core::{
    AnimationError, Color, FrameContext, Group, Node, PhaseSequencer, PhaseWindow, Phases, Point,
    Shape, Text,
};

pub const PANEL_DURATION: i64 = 240;

/// Frame after which the voltage is on.
const VOLTAGE_FRAME: i64 = 140;

// Layout of the layer stack, relative to the stack group.
const ORIGIN: (f64, f64) = (70.0, 130.0);
const CENTER_X: f64 = 300.0;
const TOP_Y: f64 = 60.0;
const BOTTOM_Y: f64 = 580.0;
const SPACING: f64 = (BOTTOM_Y - TOP_Y) / 6.0;
const BACKLIGHT_Y: f64 = TOP_Y;
const POLARIZER1_Y: f64 = TOP_Y + SPACING;
const LC_TOP_Y: f64 = TOP_Y + SPACING * 2.0;
const LC_BOTTOM_Y: f64 = TOP_Y + SPACING * 4.0;
const POLARIZER2_Y: f64 = TOP_Y + SPACING * 5.0;
const COLOR_FILTER_Y: f64 = BOTTOM_Y;
const LAYER_WIDTH: f64 = 220.0;
const LAYER_HEIGHT: f64 = 34.0;
const LAYER_LEFT: f64 = CENTER_X - LAYER_WIDTH / 2.0;
const LAYER_RIGHT: f64 = CENTER_X + LAYER_WIDTH / 2.0;
const LABEL_X: f64 = LAYER_RIGHT + 12.0;
const GRID: usize = 5;
const GRID_MARGIN: f64 = 25.0;

const EXPLANATION_ORIGIN: (f64, f64) = (820.0, 160.0);
const EXPLANATION_WIDTH: f64 = 440.0;
const VIEWING_ANGLE_CENTER: (f64, f64) = (1730.0, 970.0);

const RAY_PASS: Color = Color::new(1.0, 0.867, 0.267, 1.0);
const RAY_BLOCKED: Color = Color::new(1.0, 0.267, 0.267, 1.0);

/// Build, light and switch windows shared by every panel.
pub fn panel_phases() -> Result<PhaseSequencer, AnimationError> {
    PhaseSequencer::new(vec![
        PhaseWindow::new("build", 0.0, 60.0),
        PhaseWindow::new("light", 60.0, 120.0),
        PhaseWindow::new("switch", 140.0, 200.0),
    ])
}

#[derive(Clone, Debug)]
pub struct PanelScene {
    spec: &'static PanelSpec,
    phases: PhaseSequencer,
}

/// Discrete and continuous state of a panel at one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
    pub phases: Phases,
    pub voltage_applied: bool,
    pub blocked: bool,
    /// Twist, tilt or in-plane rotation in degrees, depending on the technology.
    pub molecule_drive: f64,
    pub light_progress: f64,
    pub voltage_indicator: f64,
    pub exit_opacity: f64,
}

impl PanelScene {
    pub fn new(technology: Technology) -> Result<Self, AnimationError> {
        Ok(Self {
            spec: technology.spec(),
            phases: panel_phases()?,
        })
    }

    pub fn spec(&self) -> &'static PanelSpec {
        self.spec
    }

    pub fn state(&self, ctx: &FrameContext) -> Result<PanelState, AnimationError> {
        let phases = ctx.phases(&self.phases)?;
        let voltage_applied = ctx.frame > VOLTAGE_FRAME;
        let motion = &self.spec.motion;
        let molecule_drive = if voltage_applied {
            ctx.ramp(
                [VOLTAGE_FRAME as f64, motion.end_frame()],
                [motion.rest(), motion.switched()],
            )?
        } else {
            motion.rest()
        };

        Ok(PanelState {
            phases,
            voltage_applied,
            blocked: self.spec.is_blocked(voltage_applied),
            molecule_drive,
            light_progress: ctx.ramp([70.0, 120.0], [0.0, 1.0])?,
            voltage_indicator: ctx.ramp([130.0, 145.0], [0.0, 1.0])?,
            exit_opacity: ctx.ramp([220.0, 240.0], [1.0, 0.0])?,
        })
    }

    fn layer_stack(
        &self,
        ctx: &FrameContext,
        state: &PanelState,
    ) -> Result<Group, AnimationError> {
        let build = |lo, hi| state.phases.sub("build", lo, hi);
        let spec = self.spec;

        let mut stack = Group::new()
            .translate(ORIGIN.0, ORIGIN.1)
            .child(backlight(ctx, spec).opacity(build(0.0, 0.3)?))
            .child(first_polarizer(spec).opacity(build(0.1, 0.4)?))
            .child(self.lc_layer(state).opacity(build(0.2, 0.5)?))
            .children(self.molecules(state))
            .child(second_polarizer(spec).opacity(build(0.3, 0.6)?))
            .child(color_filter().opacity(build(0.4, 0.7)?));

        if state.phases.progress("light") > 0.0 {
            stack = stack.children(self.light_rays(ctx, state)?);
        }
        if spec.voltage_plates {
            stack = stack.child(self.voltage_plates().opacity(state.voltage_indicator));
        }
        stack = stack.children(self.state_badge(state));

        if spec.in_plane_electrodes && state.phases.crossed("build", 0.8) {
            let opacity = build(0.8, 1.0)?;
            stack = stack.child(in_plane_callout(spec.accent).opacity(opacity));
        }
        Ok(stack)
    }

    fn lc_layer(&self, state: &PanelState) -> Group {
        let spec = self.spec;
        let mid_y = (LC_TOP_Y + LC_BOTTOM_Y) / 2.0;
        let status = if state.voltage_applied {
            spec.lc_status_on
        } else {
            spec.lc_status_off
        };

        let mut layer = Group::new()
            .child(
                Shape::rect(
                    LAYER_LEFT,
                    LC_TOP_Y,
                    LAYER_WIDTH,
                    LC_BOTTOM_Y - LC_TOP_Y + LAYER_HEIGHT,
                )
                .rounded(8.0)
                .fill(spec.lc_fill)
                .stroke(spec.lc_stroke, 1.0)
                .dashed(&[5.0, 5.0]),
            )
            .child(
                Text::new(LABEL_X, mid_y + 15.0, "Liquid Crystal Layer", 11.0)
                    .color(spec.lc_label_color),
            )
            .child(Text::new(LABEL_X, mid_y + 30.0, status, 10.0).color(spec.lc_status_color));

        if spec.in_plane_electrodes {
            layer = layer.child(electrodes(spec.accent, state.voltage_applied));
            if state.voltage_applied {
                layer = layer.child(field_lines(spec.accent).opacity(state.voltage_indicator));
            }
        }
        layer
    }

    fn molecules(&self, state: &PanelState) -> Vec<Node> {
        let spec = self.spec;
        let col_step = (LAYER_WIDTH - 2.0 * GRID_MARGIN) / (GRID - 1) as f64;
        let row_step =
            (LC_BOTTOM_Y - LC_TOP_Y + LAYER_HEIGHT - 2.0 * GRID_MARGIN) / (GRID - 1) as f64;

        let mut nodes = Vec::with_capacity(GRID * GRID);
        for row in 0..GRID {
            let row_fraction = row as f64 / (GRID - 1) as f64;
            for col in 0..GRID {
                let cx = LAYER_LEFT + GRID_MARGIN + col as f64 * col_step;
                let cy = LC_TOP_Y + GRID_MARGIN + row as f64 * row_step;
                let m = molecule_at(spec, state.molecule_drive, row_fraction, cx, cy);
                nodes.push(molecule(&m));
            }
        }
        nodes
    }

    fn light_rays(
        &self,
        ctx: &FrameContext,
        state: &PanelState,
    ) -> Result<Vec<Node>, AnimationError> {
        let spec = self.spec;
        let (color, end_y) = if state.blocked {
            (RAY_BLOCKED, POLARIZER2_Y)
        } else {
            (RAY_PASS, COLOR_FILTER_Y + LAYER_HEIGHT + 15.0)
        };

        [-spec.ray_spacing, 0.0, spec.ray_spacing]
            .iter()
            .map(|dx| {
                light_ray(
                    ctx,
                    &LightRay {
                        x: CENTER_X + dx,
                        start_y: BACKLIGHT_Y - 10.0,
                        end_y,
                        color,
                        progress: state.light_progress,
                        wave_amplitude: spec.ray_amplitude,
                        polarization_angle: 0.0,
                        blocked: state.blocked,
                    },
                )
            })
            .collect()
    }

    fn voltage_plates(&self) -> Group {
        let accent = self.spec.accent;
        let x = LAYER_LEFT - 45.0;
        let mut plates = Group::new()
            .child(
                Shape::rect(
                    LAYER_LEFT - 65.0,
                    LC_TOP_Y + 20.0,
                    40.0,
                    LC_BOTTOM_Y - LC_TOP_Y - 10.0,
                )
                .rounded(6.0)
                .stroke(accent, 2.0),
            )
            .child(
                Text::new(x, LC_TOP_Y + 12.0, "V+", 11.0)
                    .anchor(TextAnchor::Middle)
                    .color(accent),
            )
            .child(
                Text::new(x, LC_BOTTOM_Y + LAYER_HEIGHT + 2.0, "V−", 11.0)
                    .anchor(TextAnchor::Middle)
                    .color(accent),
            );

        if self.spec.field_arrows {
            let arrow_x = LAYER_LEFT - 55.0;
            for i in 0..4 {
                let y = LC_TOP_Y + 40.0 + i as f64 * 35.0;
                plates = plates.child(
                    Group::new()
                        .opacity(0.6)
                        .child(Shape::line(arrow_x, y, arrow_x, y + 15.0).stroke(accent, 2.0))
                        .child(arrow_head(
                            Point::new(arrow_x, y + 15.0),
                            std::f64::consts::FRAC_PI_2,
                            10.0,
                            7.0,
                            RAY_PASS,
                        )),
                );
            }
        }
        plates
    }

    /// Off-state badge while the light phase plays, on-state badge once switching is underway.
    fn state_badge(&self, state: &PanelState) -> Option<Node> {
        let phase = if state.voltage_applied { "switch" } else { "light" };
        if !state.phases.crossed(phase, 0.5) {
            return None;
        }
        let opacity = state.phases.progress(phase);

        let node = if state.blocked {
            badge(
                &self.spec.blocked_badge,
                POLARIZER2_Y + LAYER_HEIGHT + 12.0,
                Color::rgba(255, 50, 50, 1.0),
                Color::rgba(0xff, 0x66, 0x66, 1.0),
            )
        } else {
            badge(
                &PASS_BADGE,
                COLOR_FILTER_Y + LAYER_HEIGHT + 12.0,
                Color::rgba(50, 200, 50, 1.0),
                Color::rgba(0x66, 0xff, 0x66, 1.0),
            )
        };
        Some(node.opacity(opacity).into())
    }
}

impl Scene for PanelScene {
    fn render(&self, ctx: &FrameContext) -> Result<Node, AnimationError> {
        let state = self.state(ctx)?;
        let spec = self.spec;
        let cone = ctx.ramp([190.0, 220.0], [0.0, 1.0])?;

        Ok(Group::new()
            .opacity(state.exit_opacity)
            .child(section_title(ctx, spec.title, spec.subtitle, spec.accent)?)
            .child(self.layer_stack(ctx, &state)?)
            .child(explanation_box(
                ctx,
                &spec.explanation,
                EXPLANATION_ORIGIN.0,
                EXPLANATION_ORIGIN.1,
                EXPLANATION_WIDTH,
                spec.text_color,
            )?)
            .child(viewing_angle(
                VIEWING_ANGLE_CENTER.0,
                VIEWING_ANGLE_CENTER.1,
                spec.viewing_angle,
                spec.accent,
                spec.label,
                cone,
            ))
            .into())
    }
}

fn molecule_at(spec: &PanelSpec, drive: f64, row_fraction: f64, cx: f64, cy: f64) -> Molecule {
    match spec.motion {
        MoleculeMotion::Twist { .. } => {
            let angle = row_fraction * drive;
            Molecule {
                cx,
                cy,
                rx: 15.0,
                ry: 4.0 + angle.to_radians().cos() * 2.0,
                angle,
                axis: 11.0,
                fill: Color::rgba(100, 170, 255, (0.6 + row_fraction * 0.3) as f32),
                outline: Color::rgba(130, 190, 255, 0.8),
                axis_color: Color::rgba(200, 230, 255, 0.6),
            }
        }
        MoleculeMotion::Tilt { .. } => {
            // Seen end-on when vertical; the ellipse lengthens as the molecule tilts.
            let rx = 4.0 + drive.to_radians().sin() * 11.0;
            Molecule {
                cx,
                cy,
                rx,
                ry: 4.0,
                angle: 90.0 - drive,
                axis: rx - 2.0,
                fill: Color::rgba(78, 205, 196, (0.5 + drive / 150.0) as f32),
                outline: Color::rgba(78, 205, 196, 0.8),
                axis_color: Color::rgba(130, 235, 225, 0.6),
            }
        }
        MoleculeMotion::InPlane { .. } => Molecule {
            cx,
            cy,
            rx: 18.0,
            ry: 5.0,
            angle: drive,
            axis: 14.0,
            fill: Color::rgba(69, 183, 209, 0.6),
            outline: Color::rgba(100, 200, 230, 0.8),
            axis_color: Color::rgba(150, 220, 240, 0.6),
        },
    }
}

fn layer_label(y: f64, text: &str, color: Color) -> Text {
    Text::new(LABEL_X, y + LAYER_HEIGHT / 2.0 + 4.0, text, 11.0).color(color)
}

fn backlight(ctx: &FrameContext, spec: &PanelSpec) -> Group {
    let pulse = 0.6 + (ctx.time() * 0.1).sin() * 0.2;
    Group::new()
        .child(
            Shape::rect(LAYER_LEFT, BACKLIGHT_Y, LAYER_WIDTH, LAYER_HEIGHT)
                .rounded(6.0)
                .fill(Color::rgba(0xff, 0xff, 0xee, 0.8))
                .stroke(Color::rgba(0xdd, 0xdd, 0xaa, 1.0), 1.0),
        )
        .child(layer_label(
            BACKLIGHT_Y,
            spec.backlight_label,
            Color::rgba(0xcc, 0xcc, 0xaa, 1.0),
        ))
        .child(
            Shape::circle(CENTER_X, BACKLIGHT_Y + LAYER_HEIGHT / 2.0, 7.0)
                .fill(Color::rgba(0xff, 0xee, 0x00, 1.0))
                .opacity(pulse),
        )
}

fn first_polarizer(spec: &PanelSpec) -> Group {
    let line_color = Color::rgba(150, 150, 255, 0.5);
    let mut group = Group::new().child(
        Shape::rect(LAYER_LEFT, POLARIZER1_Y, LAYER_WIDTH, LAYER_HEIGHT)
            .rounded(6.0)
            .fill(Color::rgba(100, 100, 200, 0.4))
            .stroke(Color::rgba(100, 100, 200, 0.6), 1.0),
    );
    for i in 0..7 {
        let y = POLARIZER1_Y + 5.0 + i as f64 * (LAYER_HEIGHT / 8.0);
        group = group
            .child(Shape::line(LAYER_LEFT + 8.0, y, LAYER_RIGHT - 8.0, y).stroke(line_color, 1.0));
    }
    group = group.child(layer_label(
        POLARIZER1_Y,
        "Polarizer (Horizontal ↔)",
        Color::rgba(0x88, 0x88, 0xcc, 1.0),
    ));
    if spec.polarization_arrows {
        group = group.child(polarization_arrow(
            LAYER_LEFT - 35.0,
            POLARIZER1_Y + LAYER_HEIGHT / 2.0,
            0.0,
            None,
            Color::rgba(0x88, 0x88, 0xff, 1.0),
            15.0,
        ));
    }
    group
}

fn second_polarizer(spec: &PanelSpec) -> Group {
    let line_color = Color::rgba(100, 200, 100, 0.5);
    let step = (LAYER_WIDTH - 16.0) / 9.0;
    let mut group = Group::new().child(
        Shape::rect(LAYER_LEFT, POLARIZER2_Y, LAYER_WIDTH, LAYER_HEIGHT)
            .rounded(6.0)
            .fill(Color::rgba(100, 200, 100, 0.3))
            .stroke(line_color, 1.0),
    );
    for i in 0..10 {
        let x = LAYER_LEFT + 8.0 + i as f64 * step;
        group = group.child(
            Shape::line(x, POLARIZER2_Y + 4.0, x, POLARIZER2_Y + LAYER_HEIGHT - 4.0)
                .stroke(line_color, 1.0),
        );
    }
    group = group.child(layer_label(
        POLARIZER2_Y,
        "Polarizer (Vertical ↕)",
        Color::rgba(0x88, 0xcc, 0x88, 1.0),
    ));
    if spec.polarization_arrows {
        group = group.child(polarization_arrow(
            LAYER_LEFT - 35.0,
            POLARIZER2_Y + LAYER_HEIGHT / 2.0,
            90.0,
            None,
            Color::rgba(0x88, 0xff, 0x88, 1.0),
            15.0,
        ));
    }
    group
}

fn color_filter() -> Group {
    let subpixels = [
        Color::rgba(0xff, 0x44, 0x44, 1.0),
        Color::rgba(0x44, 0xff, 0x44, 1.0),
        Color::rgba(0x44, 0x44, 0xff, 1.0),
    ];
    let width = (LAYER_WIDTH - 16.0) / 9.0;
    let mut group = Group::new().child(
        Shape::rect(LAYER_LEFT, COLOR_FILTER_Y, LAYER_WIDTH, LAYER_HEIGHT)
            .rounded(6.0)
            .fill(Color::rgba(0, 0, 0, 0.2))
            .stroke(Color::rgba(200, 200, 200, 0.3), 1.0),
    );
    for (i, color) in subpixels.iter().cycle().take(9).enumerate() {
        group = group.child(
            Shape::rect(
                LAYER_LEFT + 8.0 + i as f64 * width,
                COLOR_FILTER_Y + 4.0,
                width - 2.0,
                LAYER_HEIGHT - 8.0,
            )
            .rounded(2.0)
            .fill(*color)
            .opacity(0.5),
        );
    }
    group.child(layer_label(
        COLOR_FILTER_Y,
        "Color Filter (RGB)",
        Color::rgba(0xcc, 0xaa, 0xaa, 1.0),
    ))
}

fn electrodes(accent: Color, voltage_applied: bool) -> Group {
    let idle = Color::rgba(0x66, 0x66, 0x66, 1.0);
    let (left, right) = if voltage_applied {
        (Color::rgba(0xff, 0x88, 0x44, 1.0), Color::rgba(0x44, 0x88, 0xff, 1.0))
    } else {
        (idle, idle)
    };
    let y = LC_BOTTOM_Y + LAYER_HEIGHT - 8.0;
    let width = LAYER_WIDTH / 2.0 - 15.0;

    Group::new()
        .opacity(0.6)
        .child(
            Shape::rect(LAYER_LEFT + 5.0, y, width, 6.0)
                .rounded(2.0)
                .fill(left)
                .opacity(0.7),
        )
        .child(
            Shape::rect(CENTER_X + 10.0, y, width, 6.0)
                .rounded(2.0)
                .fill(right)
                .opacity(0.7),
        )
        .child(
            Text::new(
                CENTER_X,
                LC_BOTTOM_Y + LAYER_HEIGHT + 15.0,
                "Electrodes (Same Substrate)",
                10.0,
            )
            .anchor(TextAnchor::Middle)
            .color(accent),
        )
}

fn field_lines(accent: Color) -> Group {
    let mut group = Group::new();
    for i in 0..3 {
        let y = LC_TOP_Y + 50.0 + i as f64 * 55.0;
        group = group
            .child(
                Shape::line(CENTER_X - 80.0, y, CENTER_X + 60.0, y)
                    .stroke(accent, 1.5)
                    .dashed(&[4.0, 3.0])
                    .opacity(0.5),
            )
            .child(
                Shape::polygon(vec![
                    Point::new(CENTER_X + 60.0, y - 4.0),
                    Point::new(CENTER_X + 70.0, y),
                    Point::new(CENTER_X + 60.0, y + 4.0),
                ])
                .fill(accent)
                .opacity(0.5),
            )
            .child(
                Text::new(CENTER_X + 75.0, y + 4.0, "E", 9.0)
                    .color(accent)
                    .opacity(0.6),
            );
    }
    let x = LAYER_LEFT - 60.0;
    let mid_y = (LC_TOP_Y + LC_BOTTOM_Y) / 2.0;
    group
        .child(
            Text::new(x, mid_y + 20.0, "Horizontal", 11.0)
                .anchor(TextAnchor::Middle)
                .color(accent),
        )
        .child(
            Text::new(x, mid_y + 35.0, "E-Field", 11.0)
                .anchor(TextAnchor::Middle)
                .color(accent),
        )
}

fn in_plane_callout(accent: Color) -> Group {
    let y = LC_BOTTOM_Y + LAYER_HEIGHT + 25.0;
    Group::new()
        .child(
            Shape::rect(LAYER_LEFT - 10.0, y, LAYER_WIDTH + 20.0, 30.0)
                .rounded(6.0)
                .fill(accent.with_alpha(0.15))
                .stroke(accent.with_alpha(0.4), 1.0),
        )
        .child(
            Text::new(
                CENTER_X,
                y + 20.0,
                "↔ Molecules rotate in-plane (parallel to surface)",
                12.0,
            )
            .anchor(TextAnchor::Middle)
            .color(accent),
        )
}

fn badge(badge: &StateBadge, y: f64, tint: Color, text_color: Color) -> Group {
    Group::new()
        .child(
            Shape::rect(CENTER_X - badge.width / 2.0, y, badge.width, 30.0)
                .rounded(8.0)
                .fill(tint.with_alpha(0.2))
                .stroke(tint.with_alpha(0.5), 1.0),
        )
        .child(
            Text::new(CENTER_X, y + 20.0, badge.text, 14.0)
                .bold()
                .anchor(TextAnchor::Middle)
                .color(text_color),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcd_core::Timeline;

    fn ctx(frame: i64) -> FrameContext {
        FrameContext::new(frame, &Timeline::new(900, 30, 1920, 1080).unwrap())
    }

    #[test]
    fn voltage_switches_strictly_after_frame_140() {
        let scene = PanelScene::new(Technology::Tn).unwrap();
        assert!(!scene.state(&ctx(140)).unwrap().voltage_applied);
        assert!(scene.state(&ctx(141)).unwrap().voltage_applied);
    }

    #[test]
    fn twist_unwinds_under_voltage() {
        let scene = PanelScene::new(Technology::Tn).unwrap();
        assert_eq!(scene.state(&ctx(100)).unwrap().molecule_drive, 90.0);
        assert!((scene.state(&ctx(160)).unwrap().molecule_drive - 45.0).abs() < 1e-9);
        assert_eq!(scene.state(&ctx(200)).unwrap().molecule_drive, 0.0);
    }

    #[test]
    fn tilt_and_rotation_reach_their_maximum() {
        let va = PanelScene::new(Technology::Va).unwrap();
        assert_eq!(va.state(&ctx(0)).unwrap().molecule_drive, 0.0);
        assert_eq!(va.state(&ctx(185)).unwrap().molecule_drive, 75.0);
        let ips = PanelScene::new(Technology::Ips).unwrap();
        assert_eq!(ips.state(&ctx(230)).unwrap().molecule_drive, 45.0);
    }

    #[test]
    fn vertical_va_molecule_is_seen_end_on() {
        let m = molecule_at(&crate::technology::VA, 0.0, 0.0, 10.0, 20.0);
        assert_eq!((m.rx, m.ry, m.angle, m.axis), (4.0, 4.0, 90.0, 2.0));
        let tilted = molecule_at(&crate::technology::VA, 75.0, 0.0, 10.0, 20.0);
        assert!(tilted.rx > 14.0 && tilted.angle == 15.0);
    }

    #[test]
    fn twist_scales_with_row() {
        let top = molecule_at(&crate::technology::TN, 90.0, 0.0, 0.0, 0.0);
        let bottom = molecule_at(&crate::technology::TN, 90.0, 1.0, 0.0, 0.0);
        assert_eq!(top.angle, 0.0);
        assert_eq!(bottom.angle, 90.0);
    }

    #[test]
    fn exit_fade_reaches_zero_at_the_end() {
        let scene = PanelScene::new(Technology::Ips).unwrap();
        assert_eq!(scene.state(&ctx(219)).unwrap().exit_opacity, 1.0);
        assert!(scene.state(&ctx(239)).unwrap().exit_opacity < 0.1);
    }
}
