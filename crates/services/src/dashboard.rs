//! Read-only snapshot of a student's active program, assembled for reporting.

use chrono::NaiveDate;
use serde::Serialize;
use study_core::model::{
    Assessment, AssessmentDetails, AssessmentKind, AssessmentStatus, Grade, Module, ModuleStatus,
    Program, ProgramType, Student, Term,
};

/// Everything the reporter needs, with all aggregates already computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub student: StudentSnapshot,
    pub program: ProgramSnapshot,
    pub progress: ProgressSummary,
}

impl DashboardData {
    #[must_use]
    pub fn capture(student: &Student, program: &Program) -> Self {
        Self {
            student: StudentSnapshot::from(student),
            program: ProgramSnapshot::from(program),
            progress: ProgressSummary::from(program),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentSnapshot {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl From<&Student> for StudentSnapshot {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name().to_owned(),
            email: student.email().to_owned(),
            role: student.role().to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressSummary {
    pub earned_credits: u32,
    pub overall_grade: Option<f64>,
    pub on_schedule: bool,
    pub goal_met: bool,
}

impl From<&Program> for ProgressSummary {
    fn from(program: &Program) -> Self {
        Self {
            earned_credits: program.total_earned_credits(),
            overall_grade: program.overall_average_grade(),
            on_schedule: program.is_on_schedule(),
            goal_met: program.is_goal_met(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramSnapshot {
    pub name: String,
    pub degree: String,
    pub program_type: ProgramType,
    pub starts_on: NaiveDate,
    pub target_grade: f64,
    pub target_terms: u32,
    pub earned_credits: u32,
    pub total_credits: u32,
    pub overall_grade: Option<f64>,
    pub on_schedule: bool,
    pub goal_met: bool,
    pub terms: Vec<TermSnapshot>,
}

impl From<&Program> for ProgramSnapshot {
    fn from(program: &Program) -> Self {
        let goals = program.goals();
        Self {
            name: program.name().to_owned(),
            degree: program.degree().to_owned(),
            program_type: program.program_type(),
            starts_on: program.starts_on(),
            target_grade: goals.target_grade(),
            target_terms: goals.target_terms(),
            earned_credits: program.total_earned_credits(),
            total_credits: program.total_credits(),
            overall_grade: program.overall_average_grade(),
            on_schedule: program.is_on_schedule(),
            goal_met: program.is_goal_met(),
            terms: program.terms().iter().map(TermSnapshot::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermSnapshot {
    pub number: u32,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub total_credits: u32,
    pub earned_credits: u32,
    pub average_grade: Option<f64>,
    pub modules: Vec<ModuleSnapshot>,
}

impl From<&Term> for TermSnapshot {
    fn from(term: &Term) -> Self {
        Self {
            number: term.number(),
            starts_on: term.starts_on(),
            ends_on: term.ends_on(),
            total_credits: term.total_credits(),
            earned_credits: term.earned_credits(),
            average_grade: term.weighted_average_grade(),
            modules: term.modules().iter().map(ModuleSnapshot::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleSnapshot {
    pub title: String,
    pub credits: u32,
    pub required: bool,
    pub status: ModuleStatus,
    pub earned_credits: u32,
    pub average_grade: Option<f64>,
    pub assessments: Vec<AssessmentSnapshot>,
}

impl From<&Module> for ModuleSnapshot {
    fn from(module: &Module) -> Self {
        Self {
            title: module.title().to_owned(),
            credits: module.credits(),
            required: module.is_required(),
            status: module.status(),
            earned_credits: module.earned_credits(),
            average_grade: module.average_grade(),
            assessments: module
                .assessments()
                .iter()
                .map(AssessmentSnapshot::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentSnapshot {
    pub kind: AssessmentKind,
    pub grade: Option<f64>,
    pub grade_label: Option<&'static str>,
    pub taken_on: Option<NaiveDate>,
    pub attempt: u32,
    pub status: AssessmentStatus,
    pub details: AssessmentDetails,
    pub description: String,
}

impl From<&Assessment> for AssessmentSnapshot {
    fn from(assessment: &Assessment) -> Self {
        Self {
            kind: assessment.kind(),
            grade: assessment.grade().map(Grade::value),
            grade_label: assessment.grade().map(Grade::label),
            taken_on: assessment.taken_on(),
            attempt: assessment.attempt(),
            status: assessment.status(),
            details: *assessment.details(),
            description: assessment.description(),
        }
    }
}
