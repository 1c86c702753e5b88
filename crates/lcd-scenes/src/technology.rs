//! # Panel Technologies
//!
//! The per-technology data behind the panel scene. The three panels share one
//! layout and one timeline; everything that differs between them lives in a
//! [`PanelSpec`].

use crate::components::ExplanationLine;
use lcd_core::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    Tn,
    Va,
    Ips,
}

impl Technology {
    pub const ALL: [Technology; 3] = [Technology::Tn, Technology::Va, Technology::Ips];

    pub fn spec(self) -> &'static PanelSpec {
        match self {
            Technology::Tn => &TN,
            Technology::Va => &VA,
            Technology::Ips => &IPS,
        }
    }

    /// Short name used in labels.
    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

/// How the liquid crystal molecules respond to the applied voltage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoleculeMotion {
    /// Each row is rotated by its row fraction of a twist that unwinds under voltage.
    Twist { from: f64, to: f64, end_frame: f64 },
    /// Molecules stand vertical and tilt over when switched.
    Tilt { max: f64, end_frame: f64 },
    /// Molecules lie flat and rotate within the glass plane.
    InPlane { max: f64, end_frame: f64 },
}

impl MoleculeMotion {
    pub fn end_frame(&self) -> f64 {
        match *self {
            MoleculeMotion::Twist { end_frame, .. }
            | MoleculeMotion::Tilt { end_frame, .. }
            | MoleculeMotion::InPlane { end_frame, .. } => end_frame,
        }
    }

    /// Value of the driving quantity (twist, tilt or rotation) before voltage is applied.
    pub fn rest(&self) -> f64 {
        match *self {
            MoleculeMotion::Twist { from, .. } => from,
            MoleculeMotion::Tilt { .. } | MoleculeMotion::InPlane { .. } => 0.0,
        }
    }

    /// Value of the driving quantity once fully switched.
    pub fn switched(&self) -> f64 {
        match *self {
            MoleculeMotion::Twist { to, .. } => to,
            MoleculeMotion::Tilt { max, .. } | MoleculeMotion::InPlane { max, .. } => max,
        }
    }
}

/// Text and geometry of a state badge ("light passes" / "light blocked").
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateBadge {
    pub text: &'static str,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelSpec {
    pub technology: Technology,
    pub label: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent: Color,
    pub text_color: Color,
    pub explanation: [ExplanationLine; 4],
    /// Total viewing angle in degrees.
    pub viewing_angle: f64,
    pub backlight_label: &'static str,
    pub lc_label_color: Color,
    pub lc_status_color: Color,
    pub lc_fill: Color,
    pub lc_stroke: Color,
    pub lc_status_off: &'static str,
    pub lc_status_on: &'static str,
    pub motion: MoleculeMotion,
    /// `true` when the panel is dark with no voltage applied (normally black).
    pub blocks_when_off: bool,
    pub blocked_badge: StateBadge,
    pub ray_spacing: f64,
    pub ray_amplitude: f64,
    pub polarization_arrows: bool,
    /// Vertical plate electrodes with the V+/V- markers.
    pub voltage_plates: bool,
    pub field_arrows: bool,
    /// Interdigitated electrodes on one substrate with a horizontal field.
    pub in_plane_electrodes: bool,
}

impl PanelSpec {
    /// Whether light reaches the viewer for a given voltage state.
    pub fn is_blocked(&self, voltage_applied: bool) -> bool {
        voltage_applied != self.blocks_when_off
    }
}

pub const PASS_BADGE: StateBadge = StateBadge {
    text: "✓ Light Passes Through",
    width: 180.0,
};

pub static TN: PanelSpec = PanelSpec {
    technology: Technology::Tn,
    label: "TN",
    title: "TN Panel",
    subtitle: "Twisted Nematic — Fast response, narrow viewing angles",
    accent: Color::new(1.0, 0.420, 0.420, 1.0),
    text_color: Color::new(0.867, 0.733, 0.733, 1.0),
    explanation: [
        ExplanationLine::new(
            "In TN panels, liquid crystal molecules are arranged in a 90° twist between two crossed polarizers.",
            20,
        ),
        ExplanationLine::new(
            "Without voltage, the twisted crystals rotate light polarization by 90°, allowing it to pass through the second polarizer. The pixel appears bright.",
            60,
        ),
        ExplanationLine::new(
            "When voltage is applied, molecules align vertically — the twist is lost, and light is blocked by the crossed polarizer. The pixel goes dark.",
            140,
        ),
        ExplanationLine::new(
            "⚡ TN panels offer the fastest response times (~1ms), making them ideal for competitive gaming, but suffer from poor viewing angles and color shifting.",
            180,
        ),
    ],
    viewing_angle: 170.0,
    backlight_label: "Backlight (White LED)",
    lc_label_color: Color::new(0.400, 0.667, 1.0, 1.0),
    lc_status_color: Color::new(0.333, 0.533, 0.800, 1.0),
    lc_fill: Color::new(0.196, 0.314, 0.471, 0.15),
    lc_stroke: Color::new(0.392, 0.588, 0.784, 0.3),
    lc_status_off: "(No Voltage — 90° Twist)",
    lc_status_on: "(Voltage ON)",
    motion: MoleculeMotion::Twist {
        from: 90.0,
        to: 0.0,
        end_frame: 180.0,
    },
    blocks_when_off: false,
    blocked_badge: StateBadge {
        text: "✗ Light Blocked",
        width: 160.0,
    },
    ray_spacing: 50.0,
    ray_amplitude: 6.0,
    polarization_arrows: true,
    voltage_plates: true,
    field_arrows: true,
    in_plane_electrodes: false,
};

pub static VA: PanelSpec = PanelSpec {
    technology: Technology::Va,
    label: "VA",
    title: "VA Panel",
    subtitle: "Vertical Alignment — Best contrast, deep blacks",
    accent: Color::new(0.306, 0.804, 0.769, 1.0),
    text_color: Color::new(0.710, 0.910, 0.890, 1.0),
    explanation: [
        ExplanationLine::new(
            "VA panels have liquid crystals aligned vertically (perpendicular to the glass) when no voltage is applied.",
            20,
        ),
        ExplanationLine::new(
            "In this state, light passes through the first polarizer but is completely blocked by the perpendicular second polarizer — producing deep, true blacks.",
            60,
        ),
        ExplanationLine::new(
            "When voltage is applied, molecules tilt, rotating the light polarization and allowing it to pass through. More voltage = more light = brighter pixel.",
            140,
        ),
        ExplanationLine::new(
            "🌙 VA panels have the best contrast ratios (3000:1+) and deepest blacks, ideal for movies and dark-room use, but have slower response times.",
            185,
        ),
    ],
    viewing_angle: 178.0,
    backlight_label: "Backlight",
    lc_label_color: Color::new(0.306, 0.804, 0.769, 1.0),
    lc_status_color: Color::new(0.239, 0.659, 0.624, 1.0),
    lc_fill: Color::new(0.196, 0.471, 0.392, 0.1),
    lc_stroke: Color::new(0.306, 0.804, 0.769, 0.3),
    lc_status_off: "(No Voltage — Vertical)",
    lc_status_on: "(Voltage ON — Tilted)",
    motion: MoleculeMotion::Tilt {
        max: 75.0,
        end_frame: 185.0,
    },
    blocks_when_off: true,
    blocked_badge: StateBadge {
        text: "✗ Light Blocked (True Black)",
        width: 200.0,
    },
    ray_spacing: 50.0,
    ray_amplitude: 6.0,
    polarization_arrows: false,
    voltage_plates: true,
    field_arrows: false,
    in_plane_electrodes: false,
};

pub static IPS: PanelSpec = PanelSpec {
    technology: Technology::Ips,
    label: "IPS",
    title: "IPS Panel",
    subtitle: "In-Plane Switching — Best color accuracy and viewing angles",
    accent: Color::new(0.271, 0.718, 0.820, 1.0),
    text_color: Color::new(0.659, 0.863, 0.910, 1.0),
    explanation: [
        ExplanationLine::new(
            "IPS panels have molecules aligned parallel to the glass substrate. The key innovation: electrodes are on the SAME side.",
            20,
        ),
        ExplanationLine::new(
            "Without voltage, molecules stay aligned with the first polarizer — no rotation occurs, and the crossed second polarizer blocks all light.",
            60,
        ),
        ExplanationLine::new(
            "When voltage is applied horizontally across the electrodes, molecules rotate in-plane (staying parallel to the glass), twisting the light polarization to pass through.",
            140,
        ),
        ExplanationLine::new(
            "🎨 Because molecules always stay in-plane, IPS panels maintain consistent colors at wide viewing angles (178°) with excellent color accuracy.",
            185,
        ),
    ],
    viewing_angle: 178.0,
    backlight_label: "Backlight",
    lc_label_color: Color::new(0.271, 0.718, 0.820, 1.0),
    lc_status_color: Color::new(0.227, 0.604, 0.690, 1.0),
    lc_fill: Color::new(0.196, 0.392, 0.549, 0.1),
    lc_stroke: Color::new(0.271, 0.718, 0.820, 0.3),
    lc_status_off: "(No Voltage — Aligned Horizontally)",
    lc_status_on: "(Voltage ON — Rotated In-Plane)",
    motion: MoleculeMotion::InPlane {
        max: 45.0,
        end_frame: 185.0,
    },
    blocks_when_off: true,
    blocked_badge: StateBadge {
        text: "✗ Light Blocked (Black)",
        width: 200.0,
    },
    ray_spacing: 60.0,
    ray_amplitude: 8.0,
    polarization_arrows: false,
    voltage_plates: false,
    field_arrows: false,
    in_plane_electrodes: true,
};
