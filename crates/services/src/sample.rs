//! Bundled demo data: one student in the first term of a bachelor program.

use chrono::NaiveDate;
use study_core::model::{AssessmentDraft, AssessmentKind, Module, ProgramGoals, ProgramType, Term};
use tracing::info;

use crate::Clock;
use crate::error::{RegistryError, SampleDataError};
use crate::registry::{NewStudent, Registry};

pub const SAMPLE_STUDENT_ID: &str = "IU14125513";

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SampleDataError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(SampleDataError::InvalidDate {
        year,
        month,
        day,
    })
}

fn module(
    registry: &Registry,
    title: &str,
    kind: AssessmentKind,
    draft: &AssessmentDraft,
) -> Result<Module, SampleDataError> {
    let mut module = Module::new(title, 5, true)?;
    module.add_assessment(registry.create_assessment(kind, draft)?);
    Ok(module)
}

/// Build a registry with the sample student active and their program populated.
///
/// The first term holds five modules: four graded (2.0, 3.3, 2.0, 2.0) and a
/// portfolio that is still open.
///
/// # Errors
///
/// Returns `SampleDataError` if any of the hardcoded values fail validation.
pub fn sample_registry(clock: Clock) -> Result<Registry, SampleDataError> {
    let mut registry = Registry::new(clock);
    registry.create_student(NewStudent::new(
        SAMPLE_STUDENT_ID,
        "Christine Münzberg",
        "christine_muenzberg@web.de",
    ))?;
    registry.set_active(SAMPLE_STUDENT_ID);

    let mut first_term = Term::new(1, date(2025, 1, 1)?, date(2025, 6, 30)?)?;
    first_term.add_module(module(
        &registry,
        "Einführung in das wissenschaftliche Arbeiten für IT und Technik",
        AssessmentKind::AdvancedWorkbook,
        &AssessmentDraft {
            grade: Some(2.0),
            taken_on: Some(date(2025, 3, 29)?),
            processing_weeks: Some(6),
            ..AssessmentDraft::default()
        },
    )?);
    first_term.add_module(module(
        &registry,
        "Medizin für Nichtmediziner:innen I",
        AssessmentKind::WrittenExam,
        &AssessmentDraft {
            grade: Some(3.3),
            taken_on: Some(date(2024, 12, 10)?),
            duration_minutes: Some(90),
            ..AssessmentDraft::default()
        },
    )?);
    first_term.add_module(module(
        &registry,
        "Einführung in die Programmierung mit Python",
        AssessmentKind::WrittenExam,
        &AssessmentDraft {
            grade: Some(2.0),
            taken_on: Some(date(2025, 3, 1)?),
            duration_minutes: Some(90),
            ..AssessmentDraft::default()
        },
    )?);
    first_term.add_module(module(
        &registry,
        "E-Health",
        AssessmentKind::WrittenExam,
        &AssessmentDraft {
            grade: Some(2.0),
            taken_on: Some(date(2025, 2, 1)?),
            duration_minutes: Some(90),
            ..AssessmentDraft::default()
        },
    )?);
    // Not graded yet.
    first_term.add_module(module(
        &registry,
        "Projekt: Objektorientierte und funktionale Programmierung mit Python",
        AssessmentKind::Portfolio,
        &AssessmentDraft {
            task_count: Some(4),
            processing_weeks: Some(6),
            ..AssessmentDraft::default()
        },
    )?);

    let program = registry
        .create_program(
            "Medizinische Informatik",
            "Bachelor of Science",
            ProgramType::Bachelor,
            date(2025, 1, 1)?,
            ProgramGoals::new(2.0, 8)?,
        )
        .ok_or(RegistryError::NoActiveStudent)?;
    program.add_term(first_term);

    info!(
        "Sample data ready: {} ({} terms)",
        program.name(),
        program.terms().len()
    );
    Ok(registry)
}
