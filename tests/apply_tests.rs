use okramp::RampError;
use okramp::generate::{GeneratedRamp, RampRequest, generate};
use okramp::render::RenderedStep;
use okramp::renderer::{
    HeaderField, RampHeader, RampRenderer, SlotField, SlotOutcome, apply_ramp,
};
use okramp::sheet::{HeaderSlot, Slot, SlotContent, SlotSheet};

fn ramp(steps: i64) -> GeneratedRamp {
    let request = RampRequest {
        steps: Some(steps),
        ..RampRequest::new("#3366FF")
    };
    generate(&request).unwrap()
}

/// Records every call; offers no header.
#[derive(Default)]
struct Recorder {
    slots: usize,
    written: Vec<(usize, String)>,
}

impl RampRenderer for Recorder {
    fn slot_count(&self) -> usize {
        self.slots
    }

    fn slot_name(&self, index: usize) -> String {
        format!("row {index}")
    }

    fn apply_step(&mut self, index: usize, step: &RenderedStep) -> SlotOutcome {
        self.written.push((index, step.hex.clone()));
        SlotOutcome::Applied {
            missing: Vec::new(),
        }
    }
}

#[test]
fn test_full_apply_writes_every_slot() {
    let ramp = ramp(14);
    let mut sheet = SlotSheet::uniform(14);
    let report = apply_ramp(&mut sheet, &ramp.header(None), 14, &ramp.steps).unwrap();

    assert_eq!(report.slot_count, 14);
    assert_eq!(report.applied, 14);
    assert!(report.truncation.is_none());
    assert_eq!(report.warnings().count(), 0);
    assert_eq!(sheet.filled().count(), 14);

    let first = &sheet.slots[0].content;
    assert_eq!(first.fill.as_deref(), Some("#F0F5FF"));
    assert_eq!(first.hex.as_deref(), Some("#F0F5FF"));
    assert_eq!(first.name.as_deref(), Some("Color 50"));
    assert_eq!(first.rgb.as_deref(), Some("240, 245, 255"));
    assert_eq!(first.oklch.as_deref(), Some("97%  0.01  265"));
    assert_eq!(first.contrast_black.as_deref(), Some("19.25"));
    assert_eq!(first.contrast_white.as_deref(), Some("1.09"));
    assert!(first.badges_black.unwrap().aaa);
    assert!(!first.badges_white.unwrap().aa);
}

#[test]
fn test_header_is_written() {
    let ramp = ramp(14);
    let mut sheet = SlotSheet::uniform(14);
    let report = apply_ramp(&mut sheet, &ramp.header(Some("Brand")), 14, &ramp.steps).unwrap();

    assert_eq!(
        report.header_fields,
        [HeaderField::SemanticName, HeaderField::RampName]
    );
    let header = sheet.header.unwrap();
    assert_eq!(header.semantic_name.as_deref(), Some("Brand"));
    assert_eq!(header.ramp_name.as_deref(), Some("Ramp #3366FF"));
}

#[test]
fn test_partial_header() {
    let ramp = ramp(3);
    let mut sheet = SlotSheet::new((1..=3).map(|i| Slot::new(format!("s{i}"))).collect())
        .with_header(HeaderSlot::new([HeaderField::RampName]));
    let report = apply_ramp(&mut sheet, &ramp.header(None), 3, &ramp.steps).unwrap();

    assert_eq!(report.header_fields, [HeaderField::RampName]);
    let header = sheet.header.unwrap();
    assert!(header.semantic_name.is_none());
    assert_eq!(header.ramp_name.as_deref(), Some("Ramp #3366FF"));
}

#[test]
fn test_fewer_slots_truncates_with_note() {
    let ramp = ramp(14);
    let mut sheet = SlotSheet::uniform(10);
    let report = apply_ramp(&mut sheet, &ramp.header(None), 14, &ramp.steps).unwrap();

    assert_eq!(report.applied, 10);
    assert_eq!(report.steps.len(), 10);
    let note = report.truncation.unwrap();
    assert_eq!((note.slots, note.requested), (10, 14));

    let lines = report.lines();
    assert_eq!(lines[0], "Slots detected: 10");
    assert_eq!(lines[1], "Steps requested: 14 | Steps applied: 10");
    assert_eq!(
        lines.last().unwrap(),
        "Note: the target only has 10 slots but 14 steps were requested; add slots to render the full ramp."
    );
}

#[test]
fn test_extra_slots_left_untouched() {
    let ramp = ramp(5);
    let mut sheet = SlotSheet::uniform(8);
    let report = apply_ramp(&mut sheet, &ramp.header(None), 5, &ramp.steps).unwrap();

    assert_eq!(report.applied, 5);
    assert!(report.truncation.is_none());
    assert_eq!(sheet.filled().count(), 5);
    assert_eq!(sheet.slots[5].content, SlotContent::default());
}

#[test]
fn test_missing_fields_are_reported_not_fatal() {
    let ramp = ramp(3);
    let slots = vec![
        Slot::new("a"),
        Slot::new("b")
            .without(SlotField::Rgb)
            .without(SlotField::BadgesWhite),
        Slot::new("c"),
    ];
    let mut sheet = SlotSheet::new(slots);
    let report = apply_ramp(&mut sheet, &ramp.header(None), 3, &ramp.steps).unwrap();

    assert_eq!(report.applied, 3);
    assert_eq!(
        report.steps[1].outcome,
        SlotOutcome::Applied {
            missing: vec![SlotField::Rgb, SlotField::BadgesWhite]
        }
    );
    assert_eq!(
        report.steps[1].to_string(),
        "[WARN] Slot 2 \"b\" partially applied, missing: rgb, badges on dark surface"
    );

    let b = &sheet.slots[1].content;
    assert!(b.fill.is_some());
    assert!(b.rgb.is_none());
    assert!(b.badges_white.is_none());
    assert!(b.badges_black.is_some());
    assert_eq!(report.warnings().count(), 1);
}

#[test]
fn test_slot_without_swatch_is_skipped() {
    let ramp = ramp(2);
    let mut sheet = SlotSheet::new(vec![Slot::new("a").without(SlotField::Swatch), Slot::new("b")]);
    let report = apply_ramp(&mut sheet, &ramp.header(None), 2, &ramp.steps).unwrap();

    assert!(matches!(report.steps[0].outcome, SlotOutcome::Skipped { .. }));
    assert_eq!(
        report.steps[0].to_string(),
        "[WARN] Slot 1 \"a\" not applied: no swatch frame to paint"
    );
    assert_eq!(sheet.slots[0].content, SlotContent::default());
    assert!(report.steps[1].is_complete());
}

#[test]
fn test_ok_line_format() {
    let ramp = ramp(14);
    let mut sheet = SlotSheet::uniform(14);
    let report = apply_ramp(&mut sheet, &ramp.header(None), 14, &ramp.steps).unwrap();
    assert_eq!(
        report.steps[0].to_string(),
        "[OK] Slot 1 \"color-ramp-1\" -> #F0F5FF | oklch(0.97 0.014 265.3) | Cw 1.09 | Cb 19.25"
    );
}

#[test]
fn test_report_layout() {
    let ramp = ramp(3);
    let mut sheet = SlotSheet::uniform(3);
    let report = apply_ramp(&mut sheet, &ramp.header(None), 3, &ramp.steps).unwrap();
    let lines = report.lines();

    assert_eq!(lines[0], "Slots detected: 3");
    assert_eq!(lines[1], "Steps requested: 3 | Steps applied: 3");
    assert_eq!(lines[2], "Header updated: semantic name, ramp name");
    assert_eq!(lines[3], "");
    assert_eq!(lines.len(), 7);
    assert!(lines[4..].iter().all(|l| l.starts_with("[OK] ")));
    assert_eq!(report.to_string(), lines.join("\n"));
}

#[test]
fn test_no_slots_is_an_error() {
    let ramp = ramp(5);
    let mut sheet = SlotSheet::uniform(0);
    assert_eq!(
        apply_ramp(&mut sheet, &ramp.header(None), 5, &ramp.steps).unwrap_err(),
        RampError::NoSlots
    );
    assert!(sheet.header.unwrap().ramp_name.is_none());
}

#[test]
fn test_custom_renderer_without_header() {
    let ramp = ramp(4);
    let mut recorder = Recorder {
        slots: 3,
        ..Default::default()
    };
    let header = RampHeader::for_base("#3366FF", None);
    let report = apply_ramp(&mut recorder, &header, 4, &ramp.steps).unwrap();

    assert!(report.header_fields.is_empty());
    assert_eq!(
        recorder.written.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
        [0, 1, 2]
    );
    assert_eq!(recorder.written[0].1, ramp.steps[0].hex);
    assert_eq!(report.steps[2].slot_name, "row 2");
    assert!(report.truncation.is_some());
}

#[test]
fn test_renderer_as_trait_object() {
    let ramp = ramp(2);
    let mut sheet = SlotSheet::uniform(2);
    let renderer: &mut dyn RampRenderer = &mut sheet;
    let report = apply_ramp(renderer, &ramp.header(None), 2, &ramp.steps).unwrap();
    assert_eq!(report.applied, 2);
}

#[test]
fn test_describe_lists_template_fields() {
    let sheet = SlotSheet::new(vec![
        Slot::new("full"),
        Slot::new("bare")
            .without(SlotField::Name)
            .without(SlotField::Hex)
            .without(SlotField::Rgb)
            .without(SlotField::Oklch)
            .without(SlotField::ContrastBlack)
            .without(SlotField::ContrastWhite)
            .without(SlotField::BadgesBlack)
            .without(SlotField::BadgesWhite),
        Slot::new("ghost")
            .without(SlotField::Swatch)
            .without(SlotField::Name)
            .without(SlotField::Hex)
            .without(SlotField::Rgb)
            .without(SlotField::Oklch)
            .without(SlotField::ContrastBlack)
            .without(SlotField::ContrastWhite)
            .without(SlotField::BadgesBlack)
            .without(SlotField::BadgesWhite),
    ])
    .with_header(HeaderSlot::new([HeaderField::RampName]));

    let lines = sheet.describe(600);
    assert_eq!(lines[0], "- sheet (3 slots)");
    assert_eq!(lines[1], "  - header (ramp name)");
    assert!(lines[2].starts_with("  - slot \"full\" (swatch, name, hex, rgb, oklch, "));
    assert_eq!(lines[3], "  - slot \"bare\" (swatch)");
    assert_eq!(lines[4], "  - slot \"ghost\" (empty)");
    assert_eq!(lines.len(), 5);
}

#[test]
fn test_describe_truncates_long_templates() {
    let lines = SlotSheet::uniform(20).describe(5);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[5], "... truncated (22 entries, showing 5)");
}
