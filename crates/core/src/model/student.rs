use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::StudentId;
use crate::model::program::Program;

/// Role assigned when none is given.
pub const DEFAULT_ROLE: &str = "Student";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudentError {
    #[error("student id cannot be empty")]
    EmptyId,

    #[error("student name cannot be empty")]
    EmptyName,
}

/// A learner and the degree programs they enrolled in, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    id: StudentId,
    name: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
    programs: Vec<Program>,
}

impl Student {
    /// Creates a student without programs.
    ///
    /// A blank role falls back to [`DEFAULT_ROLE`].
    ///
    /// # Errors
    ///
    /// Returns `StudentError::EmptyName` if the name is blank.
    pub fn new(
        id: StudentId,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, StudentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StudentError::EmptyName);
        }
        let role = role.into();
        let role = match role.trim() {
            "" => DEFAULT_ROLE.to_owned(),
            trimmed => trimmed.to_owned(),
        };

        Ok(Self {
            id,
            name: name.trim().to_owned(),
            email: email.into().trim().to_owned(),
            role,
            created_at,
            programs: Vec::new(),
        })
    }

    pub fn add_program(&mut self, program: Program) {
        self.programs.push(program);
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> &StudentId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// The most recently added program.
    #[must_use]
    pub fn active_program(&self) -> Option<&Program> {
        self.programs.last()
    }

    pub fn active_program_mut(&mut self) -> Option<&mut Program> {
        self.programs.last_mut()
    }
}
