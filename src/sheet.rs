//! In-memory slot sheet.
//!
//! A minimal host model: an ordered list of slots, each offering some set of
//! writable fields, plus an optional header. Used by the CLI as its render
//! target and by tests to model incomplete slot templates.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::render::RenderedStep;
use crate::renderer::{HeaderField, RampHeader, RampRenderer, SlotField, SlotOutcome};
use crate::wcag::Badges;

/// Values written into one slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rgb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oklch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_black: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contrast_white: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges_black: Option<Badges>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badges_white: Option<Badges>,
}

/// One slot: its template (available fields) and what was written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub name: String,
    #[serde(skip)]
    fields: BTreeSet<SlotField>,
    pub content: SlotContent,
}

impl Slot {
    /// A slot offering every field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: SlotField::ALL.into_iter().collect(),
            content: SlotContent::default(),
        }
    }

    /// Drop a field from the template.
    pub fn without(mut self, field: SlotField) -> Self {
        self.fields.remove(&field);
        self
    }

    pub fn has(&self, field: SlotField) -> bool {
        self.fields.contains(&field)
    }

    fn write(&mut self, step: &RenderedStep) -> SlotOutcome {
        if !self.has(SlotField::Swatch) {
            return SlotOutcome::Skipped {
                reason: "no swatch frame to paint".to_string(),
            };
        }

        let mut missing = Vec::new();
        for field in SlotField::ALL {
            if !self.has(field) {
                missing.push(field);
                continue;
            }
            let c = &mut self.content;
            match field {
                SlotField::Swatch => c.fill = Some(step.hex.clone()),
                SlotField::Name => c.name = Some(step.name.clone()),
                SlotField::Hex => c.hex = Some(step.hex.clone()),
                SlotField::Rgb => c.rgb = Some(step.rgb_text.clone()),
                SlotField::Oklch => c.oklch = Some(step.oklch_value.clone()),
                SlotField::ContrastBlack => {
                    c.contrast_black = Some(step.contrast_black.text.clone())
                }
                SlotField::ContrastWhite => {
                    c.contrast_white = Some(step.contrast_white.text.clone())
                }
                SlotField::BadgesBlack => c.badges_black = Some(step.contrast_black.badges),
                SlotField::BadgesWhite => c.badges_white = Some(step.contrast_white.badges),
            }
        }
        SlotOutcome::Applied { missing }
    }
}

/// Header block of the sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderSlot {
    #[serde(skip)]
    fields: BTreeSet<HeaderField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramp_name: Option<String>,
}

impl HeaderSlot {
    pub fn new(fields: impl IntoIterator<Item = HeaderField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
            semantic_name: None,
            ramp_name: None,
        }
    }
}

impl Default for HeaderSlot {
    fn default() -> Self {
        Self::new([HeaderField::SemanticName, HeaderField::RampName])
    }
}

/// Ordered slots plus an optional header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotSheet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderSlot>,
    pub slots: Vec<Slot>,
}

impl SlotSheet {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self {
            header: None,
            slots,
        }
    }

    /// `count` complete slots named `color-ramp-1`, `color-ramp-2`, ...
    /// with a full header.
    pub fn uniform(count: usize) -> Self {
        Self {
            header: Some(HeaderSlot::default()),
            slots: (1..=count)
                .map(|i| Slot::new(format!("color-ramp-{i}")))
                .collect(),
        }
    }

    pub fn with_header(mut self, header: HeaderSlot) -> Self {
        self.header = Some(header);
        self
    }

    /// Indented outline of the template: header fields, then each slot with
    /// the fields it offers. Stops after `max_lines` entries.
    ///
    /// Used to check a target before writing into it.
    pub fn describe(&self, max_lines: usize) -> Vec<String> {
        let mut entries = vec![format!("- sheet ({} slots)", self.slots.len())];
        if let Some(header) = &self.header {
            entries.push(format!("  - header ({})", join(&header.fields)));
        }
        for slot in &self.slots {
            let fields = if slot.fields.is_empty() {
                "empty".to_string()
            } else {
                join(&slot.fields)
            };
            entries.push(format!("  - slot \"{}\" ({})", slot.name, fields));
        }

        if entries.len() > max_lines {
            let total = entries.len();
            entries.truncate(max_lines);
            entries.push(format!("... truncated ({total} entries, showing {max_lines})"));
        }
        entries
    }

    /// Slots that received a swatch fill.
    pub fn filled(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter().filter(|s| s.content.fill.is_some())
    }
}

fn join<T: std::fmt::Display>(fields: &BTreeSet<T>) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl RampRenderer for SlotSheet {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn slot_name(&self, index: usize) -> String {
        self.slots
            .get(index)
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }

    fn apply_step(&mut self, index: usize, step: &RenderedStep) -> SlotOutcome {
        match self.slots.get_mut(index) {
            Some(slot) => slot.write(step),
            None => SlotOutcome::Skipped {
                reason: format!("slot {} does not exist", index + 1),
            },
        }
    }

    fn apply_header(&mut self, header: &RampHeader) -> Vec<HeaderField> {
        let Some(slot) = self.header.as_mut() else {
            return Vec::new();
        };
        let mut updated = Vec::new();
        if slot.fields.contains(&HeaderField::SemanticName) {
            slot.semantic_name = Some(header.semantic_name.clone());
            updated.push(HeaderField::SemanticName);
        }
        if slot.fields.contains(&HeaderField::RampName) {
            slot.ramp_name = Some(header.ramp_name.clone());
            updated.push(HeaderField::RampName);
        }
        updated
    }
}
