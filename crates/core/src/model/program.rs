use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::model::module::weighted_average;
use crate::model::term::Term;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ProgramError {
    #[error("target grade must be between 1.0 and 5.0, got {0}")]
    InvalidTargetGrade(f64),

    #[error("target duration must be at least one term")]
    ZeroTargetTerms,
}

//
// ─── TYPE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProgramType {
    Bachelor,
    Master,
    #[serde(rename = "MBA")]
    Mba,
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProgramType::Bachelor => "Bachelor",
            ProgramType::Master => "Master",
            ProgramType::Mba => "MBA",
        };
        f.write_str(name)
    }
}

//
// ─── GOALS ────────────────────────────────────────────────────────────────────
//

/// Personal targets for a degree program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgramGoals {
    target_grade: f64,
    target_terms: u32,
}

impl ProgramGoals {
    /// Creates validated goals.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::InvalidTargetGrade` if the grade is outside 1.0..=5.0.
    /// Returns `ProgramError::ZeroTargetTerms` if `target_terms` is 0.
    pub fn new(target_grade: f64, target_terms: u32) -> Result<Self, ProgramError> {
        if !(1.0..=5.0).contains(&target_grade) {
            return Err(ProgramError::InvalidTargetGrade(target_grade));
        }
        if target_terms == 0 {
            return Err(ProgramError::ZeroTargetTerms);
        }
        Ok(Self {
            target_grade,
            target_terms,
        })
    }

    #[must_use]
    pub fn target_grade(&self) -> f64 {
        self.target_grade
    }

    #[must_use]
    pub fn target_terms(&self) -> u32 {
        self.target_terms
    }
}

impl Default for ProgramGoals {
    /// Target grade 2.0 within six terms.
    fn default() -> Self {
        Self {
            target_grade: 2.0,
            target_terms: 6,
        }
    }
}

//
// ─── PROGRAM ──────────────────────────────────────────────────────────────────
//

/// A degree program made of consecutive terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    name: String,
    degree: String,
    program_type: ProgramType,
    starts_on: NaiveDate,
    goals: ProgramGoals,
    terms: Vec<Term>,
}

impl Program {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        degree: impl Into<String>,
        program_type: ProgramType,
        starts_on: NaiveDate,
        goals: ProgramGoals,
    ) -> Self {
        Self {
            name: name.into(),
            degree: degree.into(),
            program_type,
            starts_on,
            goals,
            terms: Vec::new(),
        }
    }

    pub fn add_term(&mut self, term: Term) {
        self.terms.push(term);
    }

    // Accessors
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn degree(&self) -> &str {
        &self.degree
    }

    #[must_use]
    pub fn program_type(&self) -> ProgramType {
        self.program_type
    }

    #[must_use]
    pub fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    #[must_use]
    pub fn goals(&self) -> ProgramGoals {
        self.goals
    }

    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn term_mut(&mut self, index: usize) -> Option<&mut Term> {
        self.terms.get_mut(index)
    }

    /// Number of terms recorded so far.
    #[must_use]
    pub fn current_term(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn total_earned_credits(&self) -> u32 {
        self.terms.iter().map(Term::earned_credits).sum()
    }

    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.terms.iter().map(Term::total_credits).sum()
    }

    /// Credit-weighted average over the passed modules of every term.
    #[must_use]
    pub fn overall_average_grade(&self) -> Option<f64> {
        weighted_average(self.terms.iter().flat_map(Term::modules))
    }

    /// Compares the number of recorded terms against the target duration.
    ///
    /// Calendar dates are not consulted.
    #[must_use]
    pub fn is_on_schedule(&self) -> bool {
        u32::try_from(self.terms.len()).is_ok_and(|count| count <= self.goals.target_terms)
    }

    /// True when an overall grade exists and is at least as good as the target.
    #[must_use]
    pub fn is_goal_met(&self) -> bool {
        self.overall_average_grade()
            .is_some_and(|grade| grade <= self.goals.target_grade)
    }
}

//
// ─── TESTS ────────────────────────────────────────────────────────────────────
//
