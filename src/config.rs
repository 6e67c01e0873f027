//! TOML configuration file support for ramp generation.

use std::path::Path;

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::error::RampError;
use crate::generate::RampRequest;
use crate::labels::LabelScheme;

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layered extraction failed
    Figment(Box<figment::Error>),
    /// No base color in the file or on the command line
    MissingBase,
    /// Configured values do not form a valid ramp request
    InvalidRamp(RampError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Figment(e) => write!(f, "Configuration error: {}", e),
            Self::MissingBase => write!(f, "No base color given (set [ramp] base or --base)"),
            Self::InvalidRamp(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Figment(Box::new(e))
    }
}

impl From<RampError> for ConfigError {
    fn from(e: RampError) -> Self {
        Self::InvalidRamp(e)
    }
}

/// Root configuration structure for TOML files.
///
/// Every field is optional so the same type can carry a sparse layer of
/// overrides (see [`RampConfig::layered`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RampConfig {
    /// Base color and step count
    pub ramp: RampSection,
    /// Lightness bounds
    pub lightness: LightnessConfig,
    /// Chroma settings
    pub chroma: ChromaConfig,
    /// Label scheme
    pub labels: LabelConfig,
    /// Render target settings
    pub slots: SlotConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RampSection {
    /// Base color, `#RRGGBB`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    /// Number of steps (clamped into 2-14)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<i64>,
    /// Semantic name written into the header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightnessConfig {
    /// OKLCH lightness of the darkest step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// OKLCH lightness of the lightest step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromaConfig {
    /// Multiplier on the base chroma
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// "1-14", "50-950" or "custom"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<LabelScheme>,
    /// Custom scale start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// Custom scale end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotConfig {
    /// Slots in the render target; defaults to the step count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl RampConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Merge an optional TOML file with explicit overrides.
    ///
    /// Precedence: `overrides` > file > empty defaults. Fields left `None`
    /// in `overrides` are not serialized, so they never mask file values.
    pub fn layered(path: Option<&Path>, overrides: &RampConfig) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(RampConfig::default()));
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            figment = figment.merge(Toml::file(path));
        }
        let config = figment.merge(Serialized::defaults(overrides)).extract()?;
        Ok(config)
    }

    /// Convert to a ramp request. Fails only if no base color is set;
    /// the values themselves are validated by [`crate::generate::generate`].
    pub fn to_request(&self) -> Result<RampRequest, ConfigError> {
        let base_hex = self.ramp.base.clone().ok_or(ConfigError::MissingBase)?;

        Ok(RampRequest {
            base_hex,
            steps: self.ramp.steps,
            lightness_min: self.lightness.min,
            lightness_max: self.lightness.max,
            chroma_scale: self.chroma.scale,
            label_scheme: self.labels.scheme,
            scale_start: self.labels.start,
            scale_end: self.labels.end,
        })
    }

    /// Slots in the render target: the configured count, else one per step.
    pub fn slot_count(&self) -> usize {
        self.slots
            .count
            .unwrap_or_else(|| crate::generate::clamp_step_count(self.ramp.steps))
    }

    /// Check that the configuration describes a buildable ramp.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let params = self.to_request()?.to_parameters()?;
        crate::ramp::build_ramp(&params)?;
        Ok(())
    }

    /// Capture a request (and target slot count) as a config.
    pub fn from_request(request: &RampRequest, name: Option<&str>, slots: Option<usize>) -> Self {
        Self {
            ramp: RampSection {
                base: Some(request.base_hex.clone()),
                steps: Some(request.step_count() as i64),
                name: name.map(str::to_string),
            },
            lightness: LightnessConfig {
                min: request.lightness_min,
                max: request.lightness_max,
            },
            chroma: ChromaConfig {
                scale: request.chroma_scale,
            },
            labels: LabelConfig {
                scheme: Some(request.scheme()),
                start: request.scale_start,
                end: request.scale_end,
            },
            slots: SlotConfig { count: slots },
        }
    }
}
