//! Applying a rendered ramp to an external host.
//!
//! The host (a document tree, a design file, a terminal preview) is reached
//! only through [`RampRenderer`]. Missing fields in a slot are reported, not
//! treated as failures; fewer slots than steps truncates the ramp with a
//! note.

use std::fmt;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::RampError;
use crate::render::RenderedStep;

/// Semantic name written into the header when none is configured.
pub const DEFAULT_SEMANTIC_NAME: &str = "Semantic name";

/// A writable field of one ramp slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotField {
    /// Fill of the swatch frame
    Swatch,
    Name,
    Hex,
    Rgb,
    Oklch,
    /// Contrast text for black text on the swatch
    ContrastBlack,
    /// Contrast text for white text on the swatch
    ContrastWhite,
    /// AA/AAA badges for black text
    BadgesBlack,
    /// AA/AAA badges for white text
    BadgesWhite,
}

impl SlotField {
    pub const ALL: [SlotField; 9] = [
        Self::Swatch,
        Self::Name,
        Self::Hex,
        Self::Rgb,
        Self::Oklch,
        Self::ContrastBlack,
        Self::ContrastWhite,
        Self::BadgesBlack,
        Self::BadgesWhite,
    ];

    pub fn description(self) -> &'static str {
        match self {
            Self::Swatch => "swatch",
            Self::Name => "name",
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Oklch => "oklch",
            Self::ContrastBlack => "contrast on light surface",
            Self::ContrastWhite => "contrast on dark surface",
            Self::BadgesBlack => "badges on light surface",
            Self::BadgesWhite => "badges on dark surface",
        }
    }
}

impl fmt::Display for SlotField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A writable field of the ramp header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    SemanticName,
    RampName,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SemanticName => "semantic name",
            Self::RampName => "ramp name",
        })
    }
}

/// Text for the ramp header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RampHeader {
    pub semantic_name: String,
    pub ramp_name: String,
}

impl RampHeader {
    /// Header for a ramp built from `base_hex`, named `"Ramp {base_hex}"`.
    pub fn for_base(base_hex: &str, semantic_name: Option<&str>) -> Self {
        Self {
            semantic_name: semantic_name.unwrap_or(DEFAULT_SEMANTIC_NAME).to_string(),
            ramp_name: format!("Ramp {}", base_hex),
        }
    }
}

/// What happened when one step was written into one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SlotOutcome {
    /// Swatch painted; `missing` lists fields the slot does not offer
    Applied { missing: Vec<SlotField> },
    /// Nothing written
    Skipped { reason: String },
}

/// Host capability the ramp is written into.
pub trait RampRenderer {
    /// Number of slots available, in ramp order.
    fn slot_count(&self) -> usize;

    /// Display name of a slot, for the run log.
    fn slot_name(&self, index: usize) -> String;

    /// Write one rendered step into slot `index`.
    fn apply_step(&mut self, index: usize, step: &RenderedStep) -> SlotOutcome;

    /// Write the header, returning the fields that were found and updated.
    fn apply_header(&mut self, _header: &RampHeader) -> Vec<HeaderField> {
        Vec::new()
    }
}

/// Per-slot entry in the run log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    /// Zero-based slot index
    pub index: usize,
    pub slot_name: String,
    pub hex: String,
    pub oklch_text: String,
    pub contrast_white: String,
    pub contrast_black: String,
    pub outcome: SlotOutcome,
}

impl StepReport {
    pub fn is_complete(&self) -> bool {
        matches!(&self.outcome, SlotOutcome::Applied { missing } if missing.is_empty())
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.index + 1;
        match &self.outcome {
            SlotOutcome::Applied { missing } if missing.is_empty() => write!(
                f,
                "[OK] Slot {} \"{}\" -> {} | {} | Cw {} | Cb {}",
                n,
                self.slot_name,
                self.hex,
                self.oklch_text,
                self.contrast_white,
                self.contrast_black
            ),
            SlotOutcome::Applied { missing } => {
                let fields: Vec<String> = missing.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "[WARN] Slot {} \"{}\" partially applied, missing: {}",
                    n,
                    self.slot_name,
                    fields.join(", ")
                )
            }
            SlotOutcome::Skipped { reason } => write!(
                f,
                "[WARN] Slot {} \"{}\" not applied: {}",
                n, self.slot_name, reason
            ),
        }
    }
}

/// Fewer slots than requested steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TruncationNote {
    pub slots: usize,
    pub requested: usize,
}

impl fmt::Display for TruncationNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Note: the target only has {} slots but {} steps were requested; add slots to render the full ramp.",
            self.slots, self.requested
        )
    }
}

/// Accumulated log of one apply run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyReport {
    pub slot_count: usize,
    pub requested: usize,
    pub applied: usize,
    pub header_fields: Vec<HeaderField>,
    pub steps: Vec<StepReport>,
    pub truncation: Option<TruncationNote>,
}

impl ApplyReport {
    /// Slots that were skipped or only partially written.
    pub fn warnings(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.is_complete())
    }

    /// Human-readable run log, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Slots detected: {}", self.slot_count),
            format!(
                "Steps requested: {} | Steps applied: {}",
                self.requested, self.applied
            ),
        ];
        if !self.header_fields.is_empty() {
            let fields: Vec<String> = self.header_fields.iter().map(ToString::to_string).collect();
            lines.push(format!("Header updated: {}", fields.join(", ")));
        }
        lines.push(String::new());
        lines.extend(self.steps.iter().map(ToString::to_string));
        if let Some(note) = &self.truncation {
            lines.push(String::new());
            lines.push(note.to_string());
        }
        lines
    }
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

/// Write a rendered ramp into a renderer.
///
/// Applies the header, then `min(slot_count, steps.len())` steps in order.
/// `requested` is the step count the caller asked for, used for the
/// truncation note. Fails only when the renderer has no slots at all.
pub fn apply_ramp<R: RampRenderer + ?Sized>(
    renderer: &mut R,
    header: &RampHeader,
    requested: usize,
    steps: &[RenderedStep],
) -> Result<ApplyReport, RampError> {
    let slot_count = renderer.slot_count();
    if slot_count == 0 {
        return Err(RampError::NoSlots);
    }

    let header_fields = renderer.apply_header(header);
    let used = slot_count.min(steps.len());

    let mut reports = Vec::with_capacity(used);
    for (index, step) in steps.iter().take(used).enumerate() {
        let outcome = renderer.apply_step(index, step);
        let slot_name = renderer.slot_name(index);
        match &outcome {
            SlotOutcome::Applied { missing } if !missing.is_empty() => {
                warn!(slot = index + 1, name = %slot_name, ?missing, "Slot partially applied");
            }
            SlotOutcome::Skipped { reason } => {
                warn!(slot = index + 1, name = %slot_name, reason = %reason, "Slot not applied");
            }
            SlotOutcome::Applied { .. } => {}
        }
        reports.push(StepReport {
            index,
            slot_name,
            hex: step.hex.clone(),
            oklch_text: step.oklch_text.clone(),
            contrast_white: step.contrast_white.text.clone(),
            contrast_black: step.contrast_black.text.clone(),
            outcome,
        });
    }

    let truncation = (slot_count < steps.len()).then_some(TruncationNote {
        slots: slot_count,
        requested,
    });
    if let Some(note) = &truncation {
        warn!(
            slots = note.slots,
            requested = note.requested,
            "Ramp truncated to available slots"
        );
    }

    info!(slot_count, requested, applied = used, "Ramp applied");

    Ok(ApplyReport {
        slot_count,
        requested,
        applied: used,
        header_fields,
        steps: reports,
        truncation,
    })
}
