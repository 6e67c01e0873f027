//! Step label schemes.
//!
//! - `1-14`: sequential integers
//! - `50-950`: token-style labels on a fixed 50..950 scale, multiples of 50
//! - `custom`: a caller-supplied numeric range, multiples of 10 where they
//!   stay unique and ordered, multiples of 5 otherwise

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RampError;
use crate::ramp::step_position;
use crate::round::round_to_multiple;

/// Bounds of the fixed token scale.
const FIXED_MIN: f64 = 50.0;
const FIXED_MAX: f64 = 950.0;
const FIXED_STEP: f64 = 50.0;

/// Preferred and fallback granularity for custom scales.
const COARSE_STEP: f64 = 10.0;
const FINE_STEP: i64 = 5;

/// Largest custom scale bound magnitude. Labels are integers; past this
/// an `f64` no longer holds every multiple of 5 exactly.
pub const MAX_SCALE_BOUND: f64 = 1e15;

/// Label scheme, selected by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabelScheme {
    /// `1..=steps`
    #[serde(rename = "1-14")]
    Sequential,
    /// 50..950 in multiples of 50
    #[default]
    #[serde(rename = "50-950")]
    Fixed,
    /// Interpolated between caller-supplied bounds
    #[serde(rename = "custom")]
    Custom,
}

impl LabelScheme {
    /// Scheme used when the request names none.
    ///
    /// A full 14-step ramp gets token labels; shorter ramps get plain indices.
    pub fn default_for_steps(steps: usize) -> Self {
        if steps == 14 {
            Self::Fixed
        } else {
            Self::Sequential
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "1-14",
            Self::Fixed => "50-950",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for LabelScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabelScheme {
    type Err = RampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1-14" => Ok(Self::Sequential),
            "50-950" => Ok(Self::Fixed),
            "custom" => Ok(Self::Custom),
            other => Err(RampError::UnknownLabelScheme(other.to_string())),
        }
    }
}

/// Endpoints of a custom label scale. Either direction is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub start: f64,
    pub end: f64,
}

impl ScaleRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Reject bounds outside the integer label domain.
    pub fn validate(&self) -> Result<(), RampError> {
        for (field, value) in [("scale start", self.start), ("scale end", self.end)] {
            if !(value.abs() <= MAX_SCALE_BOUND) {
                return Err(RampError::ScaleBoundOutOfRange { field, value });
            }
        }
        Ok(())
    }

    pub fn is_descending(&self) -> bool {
        self.start > self.end
    }

    fn span(&self) -> f64 {
        (self.end - self.start).abs()
    }

    fn at(&self, t: f64) -> f64 {
        self.start + (self.end - self.start) * t
    }
}

/// Generate `steps` labels under the given scheme.
///
/// `scale` is only consulted for [`LabelScheme::Custom`], where it is
/// required and each bound must lie within [`MAX_SCALE_BOUND`].
///
/// # Example
///
/// ```
/// use okramp::labels::{LabelScheme, ScaleRange, step_labels};
///
/// let labels = step_labels(5, LabelScheme::Custom, Some(ScaleRange::new(100.0, 500.0))).unwrap();
/// assert_eq!(labels, ["100", "200", "300", "400", "500"]);
/// ```
pub fn step_labels(
    steps: usize,
    scheme: LabelScheme,
    scale: Option<ScaleRange>,
) -> Result<Vec<String>, RampError> {
    match scheme {
        LabelScheme::Sequential => Ok(sequential_labels(steps)),
        LabelScheme::Fixed => Ok(fixed_scale_labels(steps)),
        LabelScheme::Custom => {
            let range = scale.ok_or(RampError::MissingScaleBounds)?;
            range.validate()?;
            Ok(custom_scale_labels(steps, range))
        }
    }
}

/// `"1"`, `"2"`, ... `steps`.
pub fn sequential_labels(steps: usize) -> Vec<String> {
    (1..=steps).map(|i| i.to_string()).collect()
}

/// Labels on the fixed 50..950 scale.
///
/// Each interpolated position is rounded to an integer, then to the nearest
/// multiple of 50, then clamped back into [50, 950]. Short ramps can repeat
/// a label; only custom scales de-duplicate.
pub fn fixed_scale_labels(steps: usize) -> Vec<String> {
    (0..steps)
        .map(|i| {
            let t = step_position(i, steps);
            let v = round_to_multiple(FIXED_MIN + (FIXED_MAX - FIXED_MIN) * t, 1.0);
            let rounded = round_to_multiple(v, FIXED_STEP).clamp(FIXED_MIN, FIXED_MAX);
            (rounded as i64).to_string()
        })
        .collect()
}

/// Labels interpolated across a custom range, unique and in scale order.
///
/// Scanning left to right, each position takes the first candidate that is
/// unused and keeps the sequence monotonic in the scale's direction:
///
/// 1. the interpolated value rounded to a multiple of 10;
/// 2. the interpolated value rounded to a multiple of 5;
/// 3. that multiple of 5 moved outward in steps of 5, up to the smaller of the
///    scale's span and `5 * steps`, trying the scale direction before the
///    opposite one at each offset;
/// 4. the previous label plus 5 in the scale direction.
///
/// The last rule only fires for degenerate or very dense ranges (for example
/// start == end) and always yields a fresh, ordered value.
///
/// Runs in `O(steps^2)` for any finite range. Bounds outside
/// [`MAX_SCALE_BOUND`] still terminate but saturate at the `i64` limits;
/// [`step_labels`] rejects them.
pub fn custom_scale_labels(steps: usize, range: ScaleRange) -> Vec<String> {
    let mut assigner = LabelAssigner::new(range.is_descending(), steps);
    // At most steps - 1 values are taken, so a wider search never finds more
    let limit = range
        .span()
        .min(FINE_STEP.saturating_mul(steps as i64) as f64);

    for i in 0..steps {
        let exact = range.at(step_position(i, steps));

        let coarse = round_to_multiple(exact, COARSE_STEP) as i64;
        if assigner.is_available(coarse) {
            assigner.assign(coarse);
            continue;
        }

        let fine = round_to_multiple(exact, FINE_STEP as f64) as i64;
        if assigner.is_available(fine) {
            assigner.assign(fine);
            continue;
        }

        let value = assigner
            .search_outward(fine, limit)
            .unwrap_or_else(|| {
                let next = assigner.next_after_last();
                debug!(position = i, exact, label = next, "Label search exhausted scale span");
                next
            });
        assigner.assign(value);
    }

    assigner.into_labels()
}

/// Tracks assigned custom labels and the ordering constraint.
struct LabelAssigner {
    assigned: Vec<i64>,
    used: HashSet<i64>,
    direction: i64,
}

impl LabelAssigner {
    fn new(descending: bool, capacity: usize) -> Self {
        Self {
            assigned: Vec::with_capacity(capacity),
            used: HashSet::with_capacity(capacity),
            direction: if descending { -1 } else { 1 },
        }
    }

    /// Unused and not out of order relative to the last label.
    fn is_available(&self, value: i64) -> bool {
        if self.used.contains(&value) {
            return false;
        }
        match self.assigned.last() {
            None => true,
            Some(&last) if self.direction > 0 => value >= last,
            Some(&last) => value <= last,
        }
    }

    fn search_outward(&self, base: i64, limit: f64) -> Option<i64> {
        let mut offset = FINE_STEP;
        while offset as f64 <= limit {
            let delta = offset * self.direction;
            let forward = base.checked_add(delta);
            if let Some(forward) = forward.filter(|&v| self.is_available(v)) {
                return Some(forward);
            }
            let backward = base.checked_sub(delta);
            if let Some(backward) = backward.filter(|&v| self.is_available(v)) {
                return Some(backward);
            }
            offset += FINE_STEP;
        }
        None
    }

    /// Labels are strictly monotonic, so one step past the last is unused.
    fn next_after_last(&self) -> i64 {
        self.assigned
            .last()
            .map_or(0, |&last| last.saturating_add(FINE_STEP * self.direction))
    }

    fn assign(&mut self, value: i64) {
        self.used.insert(value);
        self.assigned.push(value);
    }

    fn into_labels(self) -> Vec<String> {
        self.assigned.into_iter().map(|v| v.to_string()).collect()
    }
}
