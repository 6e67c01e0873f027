//! CLI argument parsing and command handling.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::{ChromaConfig, LabelConfig, LightnessConfig, RampConfig, RampSection, SlotConfig};
use crate::labels::LabelScheme;
use crate::logging::DEFAULT_LOG_LEVEL;

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered slot sheet as YAML
    #[default]
    Yaml,
    /// Rendered slot sheet as JSON
    Json,
    /// Run log only
    Log,
}

/// CLI-compatible label scheme enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
pub enum LabelSchemeArg {
    /// 1, 2, 3, ...
    #[value(name = "1-14")]
    Sequential,
    /// Tailwind-like 50..950 in steps of 50
    #[value(name = "50-950")]
    Fixed,
    /// Multiples of 10 (or 5) between --scale-start and --scale-end
    Custom,
}

impl From<LabelSchemeArg> for LabelScheme {
    fn from(arg: LabelSchemeArg) -> Self {
        match arg {
            LabelSchemeArg::Sequential => LabelScheme::Sequential,
            LabelSchemeArg::Fixed => LabelScheme::Fixed,
            LabelSchemeArg::Custom => LabelScheme::Custom,
        }
    }
}

/// Perceptual OKLCH color ramp generator with WCAG contrast reporting.
#[derive(Parser, Debug, Serialize)]
#[command(name = "okramp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base color in hex format (#RRGGBB or RRGGBB)
    #[arg(short, long, required_unless_present_any = ["config", "completions", "diagnose"])]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Number of steps, clamped into 2-14 (default: 14)
    #[arg(short, long, allow_negative_numbers = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<i64>,

    /// OKLCH lightness of the darkest step (default: 0.18)
    #[arg(long, value_name = "L")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_min: Option<f64>,

    /// OKLCH lightness of the lightest step (default: 0.97)
    #[arg(long, value_name = "L")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_max: Option<f64>,

    /// Multiplier on the base color's chroma (default: 1)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chroma_scale: Option<f64>,

    /// Label scheme (default: 50-950 for 14 steps, 1-14 otherwise)
    #[arg(long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelSchemeArg>,

    /// First label of a custom scale
    #[arg(long, allow_negative_numbers = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_start: Option<f64>,

    /// Last label of a custom scale
    #[arg(long, allow_negative_numbers = true)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_end: Option<f64>,

    /// Number of slots in the render target (default: step count)
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<usize>,

    /// Semantic name written into the ramp header
    #[arg(long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Output format: yaml, json or log
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    #[serde(skip)]
    pub format: OutputFormat,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    #[serde(skip)]
    pub output: Option<PathBuf>,

    /// Print the render target's slot template and exit
    #[arg(long)]
    #[serde(skip)]
    pub diagnose: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Save current configuration to TOML file
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub save_config: Option<PathBuf>,

    /// Log file path (default: okramp.log); OKRAMP_LOG overrides the level
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    #[serde(skip)]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    #[serde(skip)]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Convert flat CLI args to a nested RampConfig for Figment merging.
    ///
    /// Only flags given on the command line end up set, so the result can be
    /// layered over a TOML file without masking it.
    pub fn to_config_overrides(&self) -> RampConfig {
        RampConfig {
            ramp: RampSection {
                base: self.base.clone(),
                steps: self.steps,
                name: self.name.clone(),
            },
            lightness: LightnessConfig {
                min: self.l_min,
                max: self.l_max,
            },
            chroma: ChromaConfig {
                scale: self.chroma_scale,
            },
            labels: LabelConfig {
                scheme: self.labels.map(Into::into),
                start: self.scale_start,
                end: self.scale_end,
            },
            slots: SlotConfig { count: self.slots },
        }
    }
}
