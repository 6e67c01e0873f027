//! Turn abstract ramp steps into display payloads.

use palette::{Oklch, Srgb};
use serde::Serialize;

use crate::gamut_map::gamut_map;
use crate::oklab::{hue_degrees, srgb_to_hex, srgb_to_u8};
use crate::ramp::RampStep;
use crate::round::{clamp01, round_half_up, round_to};
use crate::wcag::{Badges, black, contrast_ratio, white};

/// Contrast of one text color over the step's swatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastReport {
    pub ratio: f64,
    /// Ratio with two decimals, e.g. `"4.52"`
    pub text: String,
    pub badges: Badges,
}

impl ContrastReport {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio,
            text: format_ratio(ratio),
            badges: Badges::for_ratio(ratio),
        }
    }
}

/// A ramp step after gamut mapping, ready to hand to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedStep {
    pub label: String,
    /// Display name, `"Color {label}"`
    pub name: String,
    /// Step color as built, before gamut mapping
    #[serde(skip)]
    pub requested: Oklch<f64>,
    /// Displayable color, channels in [0, 1]
    #[serde(skip)]
    pub rgb: Srgb<f64>,
    /// Chroma actually used after gamut mapping
    pub chroma: f64,
    /// `#RRGGBB`
    pub hex: String,
    /// `"RRR, GGG, BBB"`
    pub rgb_text: String,
    /// `"oklch(L C h)"`
    pub oklch_text: String,
    /// Fixed-width `"LL%  C.CC  hhh"`
    pub oklch_value: String,
    /// White text over this swatch
    pub contrast_white: ContrastReport,
    /// Black text over this swatch
    pub contrast_black: ContrastReport,
}

/// Gamut-map one step and compute its display values.
pub fn render_step(step: &RampStep) -> RenderedStep {
    let mapped = gamut_map(step.oklch);
    let l = step.oklch.l;
    let h = hue_degrees(&step.oklch);

    RenderedStep {
        label: step.label.clone(),
        name: format!("Color {}", step.label),
        requested: step.oklch,
        rgb: mapped.rgb,
        chroma: mapped.chroma,
        hex: srgb_to_hex(mapped.rgb),
        rgb_text: format_rgb(mapped.rgb),
        oklch_text: format_oklch(l, mapped.chroma, h),
        oklch_value: format_oklch_value(l, mapped.chroma, h),
        contrast_white: ContrastReport::new(contrast_ratio(mapped.rgb, white())),
        contrast_black: ContrastReport::new(contrast_ratio(mapped.rgb, black())),
    }
}

pub fn render_ramp(steps: &[RampStep]) -> Vec<RenderedStep> {
    steps.iter().map(render_step).collect()
}

/// `"RRR, GGG, BBB"`, each channel zero-padded to three digits.
pub fn format_rgb(rgb: Srgb<f64>) -> String {
    let c = srgb_to_u8(rgb);
    format!("{:03}, {:03}, {:03}", c.red, c.green, c.blue)
}

/// CSS-like descriptor with L to 3 places, C to 3 places, h to 1 place.
pub fn format_oklch(l: f64, c: f64, h: f64) -> String {
    format!(
        "oklch({} {} {})",
        round_to(l, 3),
        round_to(c, 3),
        round_to(h, 1)
    )
}

/// Compact fixed-width form: percentage lightness, 2-decimal chroma,
/// 3-digit hue, separated by two spaces.
pub fn format_oklch_value(l: f64, c: f64, h: f64) -> String {
    let lp = round_half_up(clamp01(l) * 100.0) as i64;
    let hp = round_half_up(h) as i64;
    format!("{:02}%  {:.2}  {:03}", lp, round_to(c, 2), hp)
}

pub fn format_ratio(ratio: f64) -> String {
    format!("{:.2}", round_to(ratio, 2))
}
