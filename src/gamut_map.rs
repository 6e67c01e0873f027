//! Chroma-reduction gamut mapping into sRGB.
//!
//! Holds lightness and hue fixed and bisects chroma between zero and the
//! requested value until the converted color fits the sRGB cube. No cusp
//! following or perceptual projection: the bound count and bisection policy
//! are fixed so results stay reproducible.

use float_cmp::approx_eq;
use palette::{Oklch, Srgb};
use tracing::debug;

use crate::oklab::{clamp_srgb, hue_degrees, is_in_gamut, oklch_to_srgb_unclamped};

/// Number of bisection steps on chroma.
///
/// 24 halvings of a chroma interval below 0.5 resolve the boundary far
/// below display precision.
pub const SEARCH_ITERATIONS: usize = 24;

/// Result of mapping an OKLCH color into sRGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GamutMapped {
    /// Displayable sRGB, every channel in [0, 1]
    pub rgb: Srgb<f64>,
    /// Largest chroma found to be in gamut (never above the requested chroma)
    pub chroma: f64,
}

/// Map an OKLCH color into the sRGB gamut by reducing chroma.
///
/// Lightness and hue are preserved. Achromatic input (chroma ≤ 0) skips the
/// search and returns chroma 0 exactly.
///
/// # Example
///
/// ```
/// use palette::Oklch;
/// use okramp::gamut_map::gamut_map;
///
/// let vivid = Oklch::new(0.6, 0.4, 29.0);
/// let mapped = gamut_map(vivid);
/// assert!(mapped.chroma < 0.4);
/// assert!(mapped.rgb.red <= 1.0 && mapped.rgb.green >= 0.0);
/// ```
pub fn gamut_map(color: Oklch<f64>) -> GamutMapped {
    let hue = hue_degrees(&color);
    let at_chroma = |c: f64| oklch_to_srgb_unclamped(Oklch::new(color.l, c, hue));

    if color.chroma <= 0.0 {
        return GamutMapped {
            rgb: clamp_srgb(at_chroma(0.0)),
            chroma: 0.0,
        };
    }

    let mut lo = 0.0;
    let mut hi = color.chroma;
    let mut best = at_chroma(0.0);

    for _ in 0..SEARCH_ITERATIONS {
        let mid = (lo + hi) / 2.0;
        let rgb = at_chroma(mid);
        if is_in_gamut(rgb) {
            best = rgb;
            lo = mid;
        } else {
            hi = mid;
        }
    }

    if !approx_eq!(f64, lo, color.chroma, epsilon = 1e-6) {
        debug!(
            l = color.l,
            hue,
            requested = color.chroma,
            mapped = lo,
            "Chroma reduced to fit sRGB gamut"
        );
    }

    // Clamp absorbs float drift at the boundary
    GamutMapped {
        rgb: clamp_srgb(best),
        chroma: lo,
    }
}
