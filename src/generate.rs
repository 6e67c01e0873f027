//! Ramp generation from a user request.
//!
//! Applies the request defaults and clamps, validates, builds the OKLCH
//! ramp and renders every step.

use palette::Oklch;
use tracing::info;

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::error::RampError;
use crate::labels::{LabelScheme, ScaleRange};
use crate::oklab::{parse_hex, srgb_to_hex, srgb_to_oklch};
use crate::ramp::{RampParameters, build_ramp};
use crate::render::{RenderedStep, render_ramp};
use crate::renderer::RampHeader;

/// Step count used when the request gives none (or zero).
pub const DEFAULT_STEPS: usize = 14;
pub const MIN_STEPS: usize = 2;
pub const MAX_STEPS: usize = 14;

pub const DEFAULT_LIGHTNESS_MIN: f64 = 0.18;
pub const DEFAULT_LIGHTNESS_MAX: f64 = 0.97;
pub const DEFAULT_CHROMA_SCALE: f64 = 1.0;

/// A ramp request as collected from a form, config file or command line.
///
/// Everything except the base color is optional; see the field docs for
/// the defaults applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RampRequest {
    /// `#RRGGBB` or `RRGGBB`
    pub base_hex: String,
    /// Missing or zero means 14; otherwise clamped into [2, 14]
    pub steps: Option<i64>,
    /// Non-finite or missing means 0.18
    pub lightness_min: Option<f64>,
    /// Non-finite or missing means 0.97
    pub lightness_max: Option<f64>,
    /// Non-finite or missing means 1
    pub chroma_scale: Option<f64>,
    /// Missing means `50-950` for 14 steps, `1-14` otherwise
    pub label_scheme: Option<LabelScheme>,
    /// Custom scheme only
    pub scale_start: Option<f64>,
    /// Custom scheme only
    pub scale_end: Option<f64>,
}

/// Missing or zero means [`DEFAULT_STEPS`]; anything else is clamped into
/// [`MIN_STEPS`, `MAX_STEPS`].
pub fn clamp_step_count(steps: Option<i64>) -> usize {
    match steps {
        None | Some(0) => DEFAULT_STEPS,
        Some(n) => n.clamp(MIN_STEPS as i64, MAX_STEPS as i64) as usize,
    }
}

fn finite_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

impl RampRequest {
    pub fn new(base_hex: impl Into<String>) -> Self {
        Self {
            base_hex: base_hex.into(),
            ..Default::default()
        }
    }

    /// Effective step count. Out-of-range values are clamped, not rejected.
    pub fn step_count(&self) -> usize {
        clamp_step_count(self.steps)
    }

    /// Effective label scheme.
    pub fn scheme(&self) -> LabelScheme {
        self.label_scheme
            .unwrap_or_else(|| LabelScheme::default_for_steps(self.step_count()))
    }

    /// Custom scale bounds, when both are present and finite.
    pub fn scale(&self) -> Option<ScaleRange> {
        let start = self.scale_start.filter(|v| v.is_finite())?;
        let end = self.scale_end.filter(|v| v.is_finite())?;
        Some(ScaleRange::new(start, end))
    }

    /// Parse the base color and resolve all defaults.
    ///
    /// Lightness ordering is checked by [`build_ramp`], not here.
    pub fn to_parameters(&self) -> Result<RampParameters, RampError> {
        let base = srgb_to_oklch(parse_hex(&self.base_hex)?);
        let label_scheme = self.scheme();
        let scale = match label_scheme {
            LabelScheme::Custom => Some(self.scale().ok_or(RampError::MissingScaleBounds)?),
            _ => None,
        };

        Ok(RampParameters {
            base,
            step_count: self.step_count(),
            lightness_min: finite_or(self.lightness_min, DEFAULT_LIGHTNESS_MIN),
            lightness_max: finite_or(self.lightness_max, DEFAULT_LIGHTNESS_MAX),
            chroma_scale: finite_or(self.chroma_scale, DEFAULT_CHROMA_SCALE),
            label_scheme,
            scale,
        })
    }
}

/// A fully rendered ramp.
#[derive(Debug, Clone)]
pub struct GeneratedRamp {
    /// Normalized `#RRGGBB` of the base color
    pub base_hex: String,
    pub base: Oklch<f64>,
    pub parameters: RampParameters,
    /// Lightest first
    pub steps: Vec<RenderedStep>,
}

impl GeneratedRamp {
    pub fn header(&self, semantic_name: Option<&str>) -> RampHeader {
        RampHeader::for_base(&self.base_hex, semantic_name)
    }
}

/// Generate and render a ramp.
///
/// Fails fast on invalid input; no partial ramp is returned.
///
/// # Example
///
/// ```
/// use okramp::generate::{RampRequest, generate};
///
/// let ramp = generate(&RampRequest::new("#3366FF")).unwrap();
/// assert_eq!(ramp.steps.len(), 14);
/// assert_eq!(ramp.steps[0].label, "50");
/// assert_eq!(ramp.steps[13].label, "950");
/// ```
#[cfg_attr(debug_assertions, instrument(skip(request), fields(base = %request.base_hex)))]
pub fn generate(request: &RampRequest) -> Result<GeneratedRamp, RampError> {
    let parameters = request.to_parameters()?;
    let steps = build_ramp(&parameters)?;
    let rendered = render_ramp(&steps);

    let base_hex = srgb_to_hex(parse_hex(&request.base_hex)?);
    info!(
        base = %base_hex,
        steps = rendered.len(),
        scheme = %parameters.label_scheme,
        "Generated ramp"
    );

    Ok(GeneratedRamp {
        base_hex,
        base: parameters.base,
        parameters,
        steps: rendered,
    })
}
