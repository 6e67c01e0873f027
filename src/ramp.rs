//! OKLCH ramp construction.
//!
//! Lightness runs linearly from `lightness_max` (step 0) down to
//! `lightness_min` (last step). Chroma follows the base color scaled by
//! `chroma_scale`, tapered toward both ends. Hue is held at the base hue.
//! Steps are descriptive only; gamut mapping happens per step afterwards.

use palette::Oklch;

use crate::error::RampError;
use crate::labels::{LabelScheme, ScaleRange, step_labels};
use crate::oklab::hue_degrees;
use crate::round::clamp01;

/// Chroma reduction at the lightest and darkest steps (18%).
pub const CHROMA_ROLLOFF: f64 = 0.18;

/// Interpolation parameter for step `index` of `steps`.
///
/// Evenly spaced over [0, 1]; a single step sits at 0.
#[inline]
pub fn step_position(index: usize, steps: usize) -> f64 {
    if steps <= 1 {
        0.0
    } else {
        index as f64 / (steps - 1) as f64
    }
}

/// Chroma multiplier at interpolation parameter `t`: 1 at the midpoint,
/// `1 - CHROMA_ROLLOFF` at both ends.
#[inline]
pub fn chroma_rolloff(t: f64) -> f64 {
    let edge = (t - 0.5).abs() * 2.0;
    1.0 - CHROMA_ROLLOFF * edge * edge
}

/// Inputs to ramp construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RampParameters {
    /// Base color; supplies hue and the chroma reference
    pub base: Oklch<f64>,
    /// Number of steps (at least 1)
    pub step_count: usize,
    /// Lightness of the darkest step, clamped to [0, 1]
    pub lightness_min: f64,
    /// Lightness of the lightest step, clamped to [0, 1]
    pub lightness_max: f64,
    /// Multiplier on the base chroma
    pub chroma_scale: f64,
    pub label_scheme: LabelScheme,
    /// Required when `label_scheme` is custom
    pub scale: Option<ScaleRange>,
}

/// One ramp position before gamut mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RampStep {
    pub label: String,
    pub oklch: Oklch<f64>,
}

/// Build the ordered ramp, lightest first.
///
/// Fails if the clamped lightness bounds are not strictly increasing, if
/// there are no steps, or if a custom label scheme lacks its scale.
///
/// # Example
///
/// ```
/// use palette::Oklch;
/// use okramp::labels::LabelScheme;
/// use okramp::ramp::{RampParameters, build_ramp};
///
/// let params = RampParameters {
///     base: Oklch::new(0.57, 0.23, 265.0),
///     step_count: 3,
///     lightness_min: 0.2,
///     lightness_max: 0.9,
///     chroma_scale: 1.0,
///     label_scheme: LabelScheme::Sequential,
///     scale: None,
/// };
/// let ramp = build_ramp(&params).unwrap();
/// assert_eq!(ramp.len(), 3);
/// assert!((ramp[0].oklch.l - 0.9).abs() < 1e-12);
/// assert!((ramp[2].oklch.l - 0.2).abs() < 1e-12);
/// ```
pub fn build_ramp(params: &RampParameters) -> Result<Vec<RampStep>, RampError> {
    let dark = clamp01(params.lightness_min);
    let light = clamp01(params.lightness_max);
    // NaN bounds fail here too
    if !(dark < light) {
        return Err(RampError::LightnessRange {
            min: dark,
            max: light,
        });
    }
    if params.step_count == 0 {
        return Err(RampError::EmptyRamp);
    }

    let labels = step_labels(params.step_count, params.label_scheme, params.scale)?;
    let hue = hue_degrees(&params.base);
    let chroma = params.base.chroma * params.chroma_scale;

    let steps = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            let t = step_position(i, params.step_count);
            let l = light + (dark - light) * t;
            let c = (chroma * chroma_rolloff(t)).max(0.0);
            RampStep {
                label,
                oklch: Oklch::new(l, c, hue),
            }
        })
        .collect();

    Ok(steps)
}
