use serde::Serialize;
use thiserror::Error;

use crate::model::assessment::Assessment;
use crate::model::grading::{rounded_tenths, tenths_to_value};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModuleError {
    #[error("module title cannot be empty")]
    EmptyTitle,

    #[error("module credits must be > 0")]
    ZeroCredits,
}

/// Progress of a module, derived from its assessments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    NotStarted,
    InProgress,
    Passed,
    Failed,
}

impl ModuleStatus {
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            ModuleStatus::NotStarted => "Not started",
            ModuleStatus::InProgress => "In progress",
            ModuleStatus::Passed => "Passed",
            ModuleStatus::Failed => "Failed",
        }
    }
}

/// A course unit worth a fixed number of credits.
///
/// Assessments are append-only. Every derived value is computed on demand, so a
/// grade entered after the module was attached to a term shows up immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    title: String,
    credits: u32,
    required: bool,
    assessments: Vec<Assessment>,
}

impl Module {
    /// Creates a module without assessments.
    ///
    /// # Errors
    ///
    /// Returns `ModuleError::EmptyTitle` if the title is blank.
    /// Returns `ModuleError::ZeroCredits` if `credits` is 0.
    pub fn new(title: impl Into<String>, credits: u32, required: bool) -> Result<Self, ModuleError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ModuleError::EmptyTitle);
        }
        if credits == 0 {
            return Err(ModuleError::ZeroCredits);
        }

        Ok(Self {
            title: title.trim().to_owned(),
            credits,
            required,
            assessments: Vec::new(),
        })
    }

    pub fn add_assessment(&mut self, assessment: Assessment) {
        self.assessments.push(assessment);
    }

    // Accessors
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn credits(&self) -> u32 {
        self.credits
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }

    pub fn assessment_mut(&mut self, index: usize) -> Option<&mut Assessment> {
        self.assessments.get_mut(index)
    }

    /// True once at least one assessment exists and all of them are passed.
    #[must_use]
    pub fn is_passed(&self) -> bool {
        !self.assessments.is_empty() && self.assessments.iter().all(Assessment::is_passed)
    }

    #[must_use]
    pub fn status(&self) -> ModuleStatus {
        if self.assessments.is_empty() {
            return ModuleStatus::NotStarted;
        }
        if !self.assessments.iter().all(Assessment::was_taken) {
            return ModuleStatus::InProgress;
        }
        if self.is_passed() {
            ModuleStatus::Passed
        } else {
            ModuleStatus::Failed
        }
    }

    #[must_use]
    pub fn earned_credits(&self) -> u32 {
        if self.is_passed() { self.credits } else { 0 }
    }

    /// Mean of all entered grades, rounded to one decimal.
    #[must_use]
    pub fn average_grade(&self) -> Option<f64> {
        self.average_tenths().map(tenths_to_value)
    }

    pub(crate) fn average_tenths(&self) -> Option<u64> {
        let (sum, count) = self
            .assessments
            .iter()
            .filter_map(Assessment::grade)
            .fold((0_u64, 0_u64), |(sum, count), grade| {
                (sum + grade.tenths(), count + 1)
            });
        rounded_tenths(sum, count)
    }
}

/// Credit-weighted mean of the average grades of passed modules.
///
/// Modules that are not passed do not count; `None` when nothing qualifies.
pub(crate) fn weighted_average<'a>(modules: impl IntoIterator<Item = &'a Module>) -> Option<f64> {
    let (weighted, credits) = modules
        .into_iter()
        .filter(|module| module.is_passed())
        .filter_map(|module| {
            module
                .average_tenths()
                .map(|avg| (avg * u64::from(module.credits), u64::from(module.credits)))
        })
        .fold((0_u64, 0_u64), |(weighted, credits), (w, c)| {
            (weighted + w, credits + c)
        });
    rounded_tenths(weighted, credits).map(tenths_to_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::assessment::AssessmentKind;

    fn graded(kind: AssessmentKind, grade: Option<f64>) -> Assessment {
        Assessment::new(kind).apply_grade(grade).unwrap()
    }

    #[test]
    fn module_new_rejects_bad_input() {
        assert_eq!(Module::new("  ", 5, true).unwrap_err(), ModuleError::EmptyTitle);
        assert_eq!(Module::new("E-Health", 0, true).unwrap_err(), ModuleError::ZeroCredits);
    }

    #[test]
    fn empty_module_is_not_started() {
        let module = Module::new("E-Health", 5, true).unwrap();
        assert!(!module.is_passed());
        assert_eq!(module.status(), ModuleStatus::NotStarted);
        assert_eq!(module.earned_credits(), 0);
        assert_eq!(module.average_grade(), None);
    }

    #[test]
    fn single_passed_assessment() {
        let mut module = Module::new("E-Health", 5, true).unwrap();
        module.add_assessment(graded(AssessmentKind::WrittenExam, Some(2.0)));

        assert!(module.is_passed());
        assert_eq!(module.status(), ModuleStatus::Passed);
        assert_eq!(module.earned_credits(), 5);
        assert_eq!(module.average_grade(), Some(2.0));
    }

    #[test]
    fn ungraded_assessment_keeps_module_in_progress() {
        let mut module = Module::new("Projekt", 5, true).unwrap();
        module.add_assessment(graded(AssessmentKind::WrittenExam, Some(2.0)));
        module.add_assessment(graded(AssessmentKind::Portfolio, None));

        assert_eq!(module.status(), ModuleStatus::InProgress);
        assert!(!module.is_passed());
        assert_eq!(module.earned_credits(), 0);
        assert_eq!(module.average_grade(), Some(2.0));
    }

    #[test]
    fn failed_assessment_fails_module() {
        let mut module = Module::new("Statistik", 5, false).unwrap();
        module.add_assessment(graded(AssessmentKind::WrittenExam, Some(5.0)));

        assert_eq!(module.status(), ModuleStatus::Failed);
        assert_eq!(module.earned_credits(), 0);
        assert_eq!(module.average_grade(), Some(5.0));
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let mut module = Module::new("Mathe", 5, true).unwrap();
        module.add_assessment(graded(AssessmentKind::WrittenExam, Some(1.0)));
        module.add_assessment(graded(AssessmentKind::Portfolio, Some(1.3)));
        assert_eq!(module.average_grade(), Some(1.2));

        module.add_assessment(graded(AssessmentKind::AdvancedWorkbook, Some(1.7)));
        assert_eq!(module.average_grade(), Some(1.3));
    }

    #[test]
    fn grade_entered_later_is_reflected() {
        let mut module = Module::new("Projekt", 5, true).unwrap();
        module.add_assessment(Assessment::new(AssessmentKind::Portfolio));
        assert_eq!(module.status(), ModuleStatus::InProgress);

        module.assessment_mut(0).unwrap().set_grade(Some(1.7)).unwrap();
        assert_eq!(module.status(), ModuleStatus::Passed);
        assert_eq!(module.earned_credits(), 5);
        assert!(module.assessment_mut(1).is_none());
    }

    #[test]
    fn derivations_are_idempotent() {
        let mut module = Module::new("E-Health", 5, true).unwrap();
        module.add_assessment(graded(AssessmentKind::WrittenExam, Some(2.3)));

        assert_eq!(module.earned_credits(), module.earned_credits());
        assert_eq!(module.average_grade(), module.average_grade());
        assert_eq!(module.status(), module.status());
    }

    #[test]
    fn weighted_average_skips_unpassed_modules() {
        let mut a = Module::new("A", 5, true).unwrap();
        a.add_assessment(graded(AssessmentKind::WrittenExam, Some(2.0)));
        let mut b = Module::new("B", 5, true).unwrap();
        b.add_assessment(graded(AssessmentKind::WrittenExam, Some(3.3)));
        let mut c = Module::new("C", 10, true).unwrap();
        c.add_assessment(graded(AssessmentKind::WrittenExam, Some(5.0)));

        assert_eq!(weighted_average([&a, &b, &c]), Some(2.7));
        assert_eq!(weighted_average([&c]), None);
    }
}
