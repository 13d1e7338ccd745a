use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum GradeError {
    #[error("invalid grade: {0}")]
    InvalidGrade(f64),
}

//
// ─── SCALE ────────────────────────────────────────────────────────────────────
//

/// Permitted grades in tenths, best first, with their qualitative label.
const SCALE: [(u8, &str); 11] = [
    (10, "Very good"),
    (13, "Very good"),
    (17, "Good"),
    (20, "Good"),
    (23, "Good"),
    (27, "Satisfactory"),
    (30, "Satisfactory"),
    (33, "Satisfactory"),
    (37, "Sufficient"),
    (40, "Sufficient"),
    (50, "Insufficient"),
];

/// A single value of the academic grading scale.
///
/// Lower is better: 1.0 is the best grade, 5.0 is a fail. The inner value is a
/// position in `SCALE`, so holding a `Grade` means holding a valid one and the
/// ordering of grades follows the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grade(u8);

impl Grade {
    /// Looks up a grade on the scale.
    ///
    /// # Errors
    ///
    /// Returns `GradeError::InvalidGrade` if `value` is not one of the permitted grades.
    pub fn new(value: f64) -> Result<Self, GradeError> {
        SCALE
            .iter()
            .position(|(tenths, _)| f64::from(*tenths) / 10.0 == value)
            .and_then(|index| u8::try_from(index).ok())
            .map(Self)
            .ok_or(GradeError::InvalidGrade(value))
    }

    fn entry(self) -> (u8, &'static str) {
        SCALE[usize::from(self.0)]
    }

    /// Numeric value of the grade (e.g. `2.3`).
    #[must_use]
    pub fn value(self) -> f64 {
        f64::from(self.entry().0) / 10.0
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.entry().1
    }

    #[must_use]
    pub fn is_passing(self) -> bool {
        GradingPolicy::is_passing(self)
    }

    pub(crate) fn tenths(self) -> u64 {
        u64::from(self.entry().0)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.value())
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value())
    }
}

//
// ─── POLICY ───────────────────────────────────────────────────────────────────
//

/// Process-wide grading rules: the permitted scale and the pass threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradingPolicy;

impl GradingPolicy {
    /// Worst grade that still counts as a pass (4.0).
    pub const PASS_THRESHOLD: Grade = Grade(9);

    #[must_use]
    pub fn is_passing(grade: Grade) -> bool {
        grade <= Self::PASS_THRESHOLD
    }

    /// Qualitative label for a numeric grade.
    ///
    /// # Errors
    ///
    /// Returns `GradeError::InvalidGrade` for values outside the scale.
    pub fn label_for(value: f64) -> Result<&'static str, GradeError> {
        Grade::new(value).map(Grade::label)
    }

    /// All permitted grades, best first.
    pub fn valid_values() -> impl Iterator<Item = Grade> {
        (0_u8..).zip(SCALE).map(|(index, _)| Grade(index))
    }
}

/// Mean of `sum / count` tenths, rounded half away from zero to whole tenths.
///
/// Works on integers so that e.g. 26.5 tenths rounds to 27 instead of drifting
/// through a binary float.
pub(crate) fn rounded_tenths(sum: u64, count: u64) -> Option<u64> {
    if count == 0 {
        return None;
    }
    Some((2 * sum + count) / (2 * count))
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn tenths_to_value(tenths: u64) -> f64 {
    tenths as f64 / 10.0
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
