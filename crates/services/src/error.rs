//! Shared error types for the services crate.

use thiserror::Error;

use study_core::model::{
    AssessmentError, GradeError, ModuleError, ProgramError, StudentError, StudentId, TermError,
};

/// Errors emitted by `Registry`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("student {0} already exists")]
    DuplicateStudent(StudentId),
    #[error("no active student")]
    NoActiveStudent,
    #[error("active student has no program")]
    NoActiveProgram,
    #[error("no assessment at term {term}, module {module}, position {assessment}")]
    AssessmentNotFound {
        term: usize,
        module: usize,
        assessment: usize,
    },
    #[error(transparent)]
    Student(#[from] StudentError),
    #[error(transparent)]
    Grade(#[from] GradeError),
}

/// Errors emitted while building the bundled sample data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SampleDataError {
    #[error("invalid sample date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Module(#[from] ModuleError),
    #[error(transparent)]
    Term(#[from] TermError),
    #[error(transparent)]
    Program(#[from] ProgramError),
}
