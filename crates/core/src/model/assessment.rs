use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::model::grading::{Grade, GradeError};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AssessmentError {
    #[error("unknown assessment kind: {0}")]
    UnknownKind(String),

    #[error(transparent)]
    InvalidGrade(#[from] GradeError),

    #[error("{field} does not apply to {kind}")]
    UnsupportedDetail {
        kind: AssessmentKind,
        field: &'static str,
    },

    #[error("attempt number must be > 0")]
    ZeroAttempt,
}

//
// ─── KIND ─────────────────────────────────────────────────────────────────────
//

/// The three fixed assessment formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentKind {
    WrittenExam,
    AdvancedWorkbook,
    Portfolio,
}

impl AssessmentKind {
    pub const ALL: [Self; 3] = [Self::WrittenExam, Self::AdvancedWorkbook, Self::Portfolio];

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            AssessmentKind::WrittenExam => "Written exam",
            AssessmentKind::AdvancedWorkbook => "Advanced Workbook",
            AssessmentKind::Portfolio => "Portfolio",
        }
    }

    /// Metadata used when an assessment of this kind is created without overrides.
    #[must_use]
    pub fn default_details(self) -> AssessmentDetails {
        match self {
            AssessmentKind::WrittenExam => AssessmentDetails::WrittenExam {
                duration_minutes: 120,
            },
            AssessmentKind::AdvancedWorkbook => AssessmentDetails::AdvancedWorkbook {
                processing_weeks: 4,
            },
            AssessmentKind::Portfolio => AssessmentDetails::Portfolio {
                task_count: 3,
                processing_weeks: 8,
            },
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for AssessmentKind {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "written exam" | "klausur" => Ok(Self::WrittenExam),
            "advanced workbook" => Ok(Self::AdvancedWorkbook),
            "portfolio" => Ok(Self::Portfolio),
            _ => Err(AssessmentError::UnknownKind(s.to_owned())),
        }
    }
}

//
// ─── DETAILS ──────────────────────────────────────────────────────────────────
//

/// Kind-specific metadata. Display only; never used in aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AssessmentDetails {
    WrittenExam { duration_minutes: u32 },
    AdvancedWorkbook { processing_weeks: u32 },
    Portfolio { task_count: u32, processing_weeks: u32 },
}

impl AssessmentDetails {
    #[must_use]
    pub fn kind(&self) -> AssessmentKind {
        match self {
            AssessmentDetails::WrittenExam { .. } => AssessmentKind::WrittenExam,
            AssessmentDetails::AdvancedWorkbook { .. } => AssessmentKind::AdvancedWorkbook,
            AssessmentDetails::Portfolio { .. } => AssessmentKind::Portfolio,
        }
    }

    /// Short human-readable summary, e.g. `Written exam (90 min)`.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            AssessmentDetails::WrittenExam { duration_minutes } => {
                format!("Written exam ({duration_minutes} min)")
            }
            AssessmentDetails::AdvancedWorkbook { processing_weeks } => {
                format!("Advanced Workbook ({processing_weeks} weeks)")
            }
            AssessmentDetails::Portfolio { task_count, .. } => {
                format!("Portfolio ({task_count} tasks)")
            }
        }
    }
}

//
// ─── STATUS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentStatus {
    Open,
    Passed,
    Failed,
}

//
// ─── DRAFT ────────────────────────────────────────────────────────────────────
//

/// Optional inputs for creating an assessment of a given kind.
///
/// Unset detail fields fall back to the kind's defaults. Setting a detail that
/// the kind does not have is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssessmentDraft {
    pub grade: Option<f64>,
    pub taken_on: Option<NaiveDate>,
    pub attempt: Option<u32>,
    pub duration_minutes: Option<u32>,
    pub processing_weeks: Option<u32>,
    pub task_count: Option<u32>,
}

impl AssessmentDraft {
    fn details_for(&self, kind: AssessmentKind) -> Result<AssessmentDetails, AssessmentError> {
        let unsupported = |field: &'static str| AssessmentError::UnsupportedDetail { kind, field };
        match kind.default_details() {
            AssessmentDetails::WrittenExam { duration_minutes } => {
                if self.processing_weeks.is_some() {
                    return Err(unsupported("processing_weeks"));
                }
                if self.task_count.is_some() {
                    return Err(unsupported("task_count"));
                }
                Ok(AssessmentDetails::WrittenExam {
                    duration_minutes: self.duration_minutes.unwrap_or(duration_minutes),
                })
            }
            AssessmentDetails::AdvancedWorkbook { processing_weeks } => {
                if self.duration_minutes.is_some() {
                    return Err(unsupported("duration_minutes"));
                }
                if self.task_count.is_some() {
                    return Err(unsupported("task_count"));
                }
                Ok(AssessmentDetails::AdvancedWorkbook {
                    processing_weeks: self.processing_weeks.unwrap_or(processing_weeks),
                })
            }
            AssessmentDetails::Portfolio {
                task_count,
                processing_weeks,
            } => {
                if self.duration_minutes.is_some() {
                    return Err(unsupported("duration_minutes"));
                }
                Ok(AssessmentDetails::Portfolio {
                    task_count: self.task_count.unwrap_or(task_count),
                    processing_weeks: self.processing_weeks.unwrap_or(processing_weeks),
                })
            }
        }
    }
}

//
// ─── ASSESSMENT ───────────────────────────────────────────────────────────────
//

/// One graded (or not yet graded) attempt at an assessment.
///
/// The kind is fixed by the details it was created with. Only the grade and the
/// date change afterwards; the status is always derived from the grade.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    details: AssessmentDetails,
    grade: Option<Grade>,
    taken_on: Option<NaiveDate>,
    attempt: u32,
}

impl Assessment {
    /// Creates an ungraded first attempt with the kind's default details.
    #[must_use]
    pub fn new(kind: AssessmentKind) -> Self {
        Self::with_details(kind.default_details())
    }

    #[must_use]
    pub fn with_details(details: AssessmentDetails) -> Self {
        Self {
            details,
            grade: None,
            taken_on: None,
            attempt: 1,
        }
    }

    /// Creates an assessment of `kind` from optional inputs.
    ///
    /// # Errors
    ///
    /// Returns `AssessmentError::UnsupportedDetail` if the draft sets metadata the kind lacks.
    /// Returns `AssessmentError::ZeroAttempt` if the attempt number is 0.
    /// Returns `AssessmentError::InvalidGrade` if the initial grade is off the scale.
    pub fn from_draft(kind: AssessmentKind, draft: &AssessmentDraft) -> Result<Self, AssessmentError> {
        let details = draft.details_for(kind)?;
        let attempt = draft.attempt.unwrap_or(1);
        if attempt == 0 {
            return Err(AssessmentError::ZeroAttempt);
        }
        let grade = draft.grade.map(Grade::new).transpose()?;

        Ok(Self {
            details,
            grade,
            taken_on: draft.taken_on,
            attempt,
        })
    }

    /// Sets or clears the grade.
    ///
    /// # Errors
    ///
    /// Returns `GradeError::InvalidGrade` for values off the scale; the previous
    /// grade is kept in that case.
    pub fn set_grade(&mut self, value: Option<f64>) -> Result<(), GradeError> {
        self.grade = value.map(Grade::new).transpose()?;
        Ok(())
    }

    /// Consuming form of [`Assessment::set_grade`].
    ///
    /// # Errors
    ///
    /// Returns `GradeError::InvalidGrade` for values off the scale.
    pub fn apply_grade(mut self, value: Option<f64>) -> Result<Self, GradeError> {
        self.set_grade(value)?;
        Ok(self)
    }

    // Accessors
    #[must_use]
    pub fn kind(&self) -> AssessmentKind {
        self.details.kind()
    }

    #[must_use]
    pub fn details(&self) -> &AssessmentDetails {
        &self.details
    }

    #[must_use]
    pub fn grade(&self) -> Option<Grade> {
        self.grade
    }

    #[must_use]
    pub fn taken_on(&self) -> Option<NaiveDate> {
        self.taken_on
    }

    #[must_use]
    pub fn attempt(&self) -> u32 {
        self.attempt
    }

    #[must_use]
    pub fn status(&self) -> AssessmentStatus {
        match self.grade {
            None => AssessmentStatus::Open,
            Some(grade) if grade.is_passing() => AssessmentStatus::Passed,
            Some(_) => AssessmentStatus::Failed,
        }
    }

    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.grade.is_some_and(Grade::is_passing)
    }

    #[must_use]
    pub fn was_taken(&self) -> bool {
        self.grade.is_some()
    }

    #[must_use]
    pub fn description(&self) -> String {
        self.details.description()
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
