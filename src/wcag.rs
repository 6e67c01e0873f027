//! WCAG 2.x relative luminance and contrast ratio.
//!
//! Each ramp step is measured against pure white and pure black text; the
//! AA/AAA thresholds decide which accessibility badges the host shows.

use palette::Srgb;
use serde::Serialize;

use crate::oklab::srgb_to_linear;
use crate::round::clamp01;

/// Rec. 709 luminance coefficients used by WCAG
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// Flare term added to both luminances
const FLARE: f64 = 0.05;

/// Pure white text.
pub fn white() -> Srgb<f64> {
    Srgb::new(1.0, 1.0, 1.0)
}

/// Pure black text.
pub fn black() -> Srgb<f64> {
    Srgb::new(0.0, 0.0, 0.0)
}

/// WCAG relative luminance of an encoded sRGB color.
///
/// Channels are clamped to [0, 1] before linearization.
pub fn relative_luminance(color: Srgb<f64>) -> f64 {
    COEF_R * srgb_to_linear(clamp01(color.red))
        + COEF_G * srgb_to_linear(clamp01(color.green))
        + COEF_B * srgb_to_linear(clamp01(color.blue))
}

/// WCAG contrast ratio between two colors, in [1, 21].
///
/// Symmetric: the lighter color always goes in the numerator.
///
/// # Example
///
/// ```
/// use okramp::wcag::{black, contrast_ratio, white};
///
/// let ratio = contrast_ratio(black(), white());
/// assert!((ratio - 21.0).abs() < 1e-9);
/// assert_eq!(ratio, contrast_ratio(white(), black()));
/// ```
pub fn contrast_ratio(a: Srgb<f64>, b: Srgb<f64>) -> f64 {
    contrast_from_luminances(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio from pre-computed relative luminances.
pub fn contrast_from_luminances(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + FLARE) / (darker + FLARE)
}

/// A WCAG conformance threshold for normal-size text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub min_ratio: f64,
    pub description: &'static str,
}

impl Threshold {
    pub fn passes(&self, ratio: f64) -> bool {
        ratio >= self.min_ratio
    }
}

/// Predefined WCAG thresholds
pub mod thresholds {
    use super::Threshold;

    /// Level AA - 4.5:1
    pub const AA: Threshold = Threshold {
        min_ratio: 4.5,
        description: "AA",
    };

    /// Level AAA - 7:1
    pub const AAA: Threshold = Threshold {
        min_ratio: 7.0,
        description: "AAA",
    };
}

/// Badge visibility for one text color over a swatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Badges {
    pub aa: bool,
    pub aaa: bool,
}

impl Badges {
    pub fn for_ratio(ratio: f64) -> Self {
        Self {
            aa: thresholds::AA.passes(ratio),
            aaa: thresholds::AAA.passes(ratio),
        }
    }
}
