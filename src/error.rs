//! Error type for ramp generation requests.

/// Reasons a ramp generation request is rejected.
///
/// Every variant aborts the whole request; no partial ramp is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RampError {
    /// Base color is not a 6-digit hex string
    InvalidHex(String),
    /// Lightness minimum is not strictly below the maximum (after clamping)
    LightnessRange { min: f64, max: f64 },
    /// Custom label scheme requested without both scale bounds
    MissingScaleBounds,
    /// Custom scale bound is too large for integer labels
    ScaleBoundOutOfRange { field: &'static str, value: f64 },
    /// Label scheme name is not one of `1-14`, `50-950`, `custom`
    UnknownLabelScheme(String),
    /// Zero steps requested from the ramp builder
    EmptyRamp,
    /// Target renderer exposes no slots to write into
    NoSlots,
}

impl std::fmt::Display for RampError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex(s) => {
                write!(f, "Invalid hex color \"{}\": expected format #RRGGBB", s)
            }
            Self::LightnessRange { min, max } => write!(
                f,
                "Lightness minimum ({}) must be less than lightness maximum ({})",
                min, max
            ),
            Self::MissingScaleBounds => write!(
                f,
                "Custom label scheme requires both scale start and scale end"
            ),
            Self::ScaleBoundOutOfRange { field, value } => write!(
                f,
                "Custom {} ({}) must lie within \u{b1}{:e}",
                field,
                value,
                crate::labels::MAX_SCALE_BOUND
            ),
            Self::UnknownLabelScheme(s) => write!(
                f,
                "Unknown label scheme \"{}\": expected one of 1-14, 50-950, custom",
                s
            ),
            Self::EmptyRamp => write!(f, "Step count must be at least 1"),
            Self::NoSlots => write!(
                f,
                "No slots found in the target; select the container holding the ramp steps"
            ),
        }
    }
}

impl std::error::Error for RampError {}
