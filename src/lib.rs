//! OKLCH color ramp generation.
//!
//! Builds perceptual tonal ramps from a single base color: lightness is
//! interpolated in OKLCH at constant hue, chroma rolls off toward the ends,
//! and every step is gamut mapped into sRGB by chroma reduction. Each step is
//! rendered with hex, RGB and OKLCH text plus WCAG 2.x contrast against white
//! and black, then written into a host through [`renderer::RampRenderer`].
//!
//! ```
//! use okramp::generate::{RampRequest, generate};
//! use okramp::renderer::apply_ramp;
//! use okramp::sheet::SlotSheet;
//!
//! let ramp = generate(&RampRequest::new("#3366FF")).unwrap();
//! let mut sheet = SlotSheet::uniform(ramp.steps.len());
//! let report = apply_ramp(&mut sheet, &ramp.header(None), ramp.steps.len(), &ramp.steps).unwrap();
//! assert_eq!(report.applied, 14);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gamut_map;
pub mod generate;
pub mod labels;
pub mod logging;
pub mod oklab;
pub mod ramp;
pub mod render;
pub mod renderer;
pub mod round;
pub mod sheet;
pub mod wcag;

pub use error::RampError;
pub use generate::{GeneratedRamp, RampRequest, generate};
