use okramp::RampError;
use okramp::labels::{
    LabelScheme, MAX_SCALE_BOUND, ScaleRange, custom_scale_labels, fixed_scale_labels, sequential_labels,
    step_labels,
};

fn custom(steps: usize, start: f64, end: f64) -> Vec<String> {
    custom_scale_labels(steps, ScaleRange::new(start, end))
}

fn ints(labels: &[String]) -> Vec<i64> {
    labels.iter().map(|l| l.parse().unwrap()).collect()
}

#[test]
fn test_sequential_labels() {
    assert_eq!(sequential_labels(5), ["1", "2", "3", "4", "5"]);
    assert_eq!(sequential_labels(1), ["1"]);
    assert!(sequential_labels(0).is_empty());
}

#[test]
fn test_fixed_scale_fourteen_steps() {
    assert_eq!(
        fixed_scale_labels(14),
        [
            "50", "100", "200", "250", "350", "400", "450", "550", "600", "650", "750", "800",
            "900", "950"
        ]
    );
}

#[test]
fn test_fixed_scale_short_ramps() {
    assert_eq!(fixed_scale_labels(2), ["50", "950"]);
    assert_eq!(fixed_scale_labels(3), ["50", "500", "950"]);
    assert_eq!(fixed_scale_labels(5), ["50", "300", "500", "750", "950"]);
    assert_eq!(
        fixed_scale_labels(7),
        ["50", "200", "350", "500", "650", "800", "950"]
    );
    assert_eq!(
        fixed_scale_labels(12),
        ["50", "150", "200", "300", "400", "450", "550", "600", "700", "800", "850", "950"]
    );
}

#[test]
fn test_fixed_scale_ten_steps_are_even_hundreds() {
    let labels = ints(&fixed_scale_labels(10));
    let expected: Vec<i64> = (0..10).map(|i| 50 + 100 * i).collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_fixed_scale_stays_on_grid() {
    for steps in 2..=14 {
        for v in ints(&fixed_scale_labels(steps)) {
            assert!((50..=950).contains(&v), "{steps} steps: {v} out of range");
            assert_eq!(v % 50, 0, "{steps} steps: {v} not a multiple of 50");
        }
    }
}

#[test]
fn test_custom_even_division_uses_multiples_of_ten() {
    assert_eq!(
        custom(9, 100.0, 900.0),
        ["100", "200", "300", "400", "500", "600", "700", "800", "900"]
    );
}

#[test]
fn test_custom_falls_back_to_multiples_of_five() {
    assert_eq!(
        ints(&custom(14, 0.0, 100.0)),
        [0, 10, 20, 25, 30, 40, 50, 55, 60, 70, 80, 85, 90, 100]
    );
    assert_eq!(ints(&custom(6, 10.0, 40.0)), [10, 20, 25, 30, 35, 40]);
}

#[test]
fn test_custom_descending_scale() {
    assert_eq!(
        ints(&custom(14, 100.0, 0.0)),
        [100, 90, 80, 75, 70, 60, 50, 45, 40, 30, 20, 15, 10, 0]
    );
    assert_eq!(
        ints(&custom(14, 900.0, 100.0)),
        [900, 840, 780, 720, 650, 590, 530, 470, 410, 350, 280, 220, 160, 100]
    );
    assert_eq!(ints(&custom(6, 40.0, 10.0)), [40, 30, 25, 20, 15, 10]);
}

#[test]
fn test_custom_negative_scale() {
    assert_eq!(ints(&custom(6, -50.0, 50.0)), [-50, -30, -10, 10, 30, 50]);
}

#[test]
fn test_custom_dense_range_stays_unique_and_ordered() {
    let expected: Vec<i64> = (0..14).map(|i| 5 * i).collect();
    assert_eq!(ints(&custom(14, 0.0, 20.0)), expected);
    assert_eq!(ints(&custom(14, 0.0, 50.0)), expected);
    assert_eq!(ints(&custom(4, 0.0, 10.0)), [0, 5, 10, 15]);
    assert_eq!(ints(&custom(3, 15.0, 5.0)), [20, 10, 5]);
}

#[test]
fn test_custom_degenerate_range() {
    assert_eq!(ints(&custom(5, 100.0, 100.0)), [100, 105, 110, 115, 120]);
}

#[test]
fn test_custom_single_step() {
    assert_eq!(custom(1, 100.0, 900.0), ["100"]);
}

#[test]
fn test_custom_labels_are_unique_and_monotonic() {
    let ranges = [
        (0.0, 100.0),
        (100.0, 0.0),
        (0.0, 20.0),
        (20.0, 0.0),
        (-35.0, 35.0),
        (1.0, 999.0),
        (7.0, 7.0),
        (12.5, 13.0),
    ];
    for (start, end) in ranges {
        for steps in 1..=14 {
            let labels = ints(&custom(steps, start, end));
            assert_eq!(labels.len(), steps);
            for pair in labels.windows(2) {
                if start > end {
                    assert!(pair[0] > pair[1], "{start}..{end} x{steps}: {labels:?}");
                } else {
                    assert!(pair[0] < pair[1], "{start}..{end} x{steps}: {labels:?}");
                }
            }
            for v in &labels {
                assert_eq!(v % 5, 0, "{start}..{end} x{steps}: {v} not a multiple of 5");
            }
        }
    }
}

#[test]
fn test_step_labels_dispatch() {
    assert_eq!(
        step_labels(3, LabelScheme::Sequential, None).unwrap(),
        ["1", "2", "3"]
    );
    assert_eq!(
        step_labels(3, LabelScheme::Fixed, None).unwrap(),
        ["50", "500", "950"]
    );
    assert_eq!(
        step_labels(3, LabelScheme::Custom, Some(ScaleRange::new(0.0, 200.0))).unwrap(),
        ["0", "100", "200"]
    );
}

#[test]
fn test_step_labels_custom_requires_bounds() {
    assert_eq!(
        step_labels(3, LabelScheme::Custom, None),
        Err(RampError::MissingScaleBounds)
    );
}

#[test]
fn test_step_labels_rejects_bounds_past_integer_domain() {
    let err = step_labels(5, LabelScheme::Custom, Some(ScaleRange::new(1e19, 1e30))).unwrap_err();
    assert_eq!(
        err,
        RampError::ScaleBoundOutOfRange {
            field: "scale start",
            value: 1e19
        }
    );

    let err = step_labels(3, LabelScheme::Custom, Some(ScaleRange::new(0.0, -1e16))).unwrap_err();
    assert!(matches!(
        err,
        RampError::ScaleBoundOutOfRange {
            field: "scale end",
            ..
        }
    ));
    assert!(err.to_string().contains("scale end"));
}

#[test]
fn test_step_labels_accepts_largest_bound() {
    let labels = step_labels(
        3,
        LabelScheme::Custom,
        Some(ScaleRange::new(-MAX_SCALE_BOUND, MAX_SCALE_BOUND)),
    )
    .unwrap();
    assert_eq!(ints(&labels), [-1_000_000_000_000_000, 0, 1_000_000_000_000_000]);
}

#[test]
fn test_huge_bounds_terminate_without_overflow() {
    // Both bounds saturate to i64::MAX; the resolver must still return
    assert_eq!(custom(5, 1e19, 1e19).len(), 5);
    assert_eq!(custom(3, 1e19, 1e30).len(), 3);
    assert_eq!(custom(4, -1e30, -1e19).len(), 4);
}

#[test]
fn test_wide_range_search_is_bounded() {
    // Span far exceeds anything the outward search needs
    let labels = custom(14, 0.0, 1e15);
    let values = ints(&labels);
    assert_eq!(values.len(), 14);
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_scheme_names_round_trip() {
    for scheme in [LabelScheme::Sequential, LabelScheme::Fixed, LabelScheme::Custom] {
        assert_eq!(scheme.name().parse::<LabelScheme>().unwrap(), scheme);
        assert_eq!(scheme.to_string(), scheme.name());
    }
}

#[test]
fn test_unknown_scheme_rejected() {
    assert_eq!(
        "0-100".parse::<LabelScheme>(),
        Err(RampError::UnknownLabelScheme("0-100".to_string()))
    );
}

#[test]
fn test_default_scheme_depends_on_step_count() {
    assert_eq!(LabelScheme::default_for_steps(14), LabelScheme::Fixed);
    assert_eq!(LabelScheme::default_for_steps(10), LabelScheme::Sequential);
    assert_eq!(LabelScheme::default_for_steps(2), LabelScheme::Sequential);
}
