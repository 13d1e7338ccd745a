use chrono::NaiveDate;
use thiserror::Error;

use crate::model::module::{Module, weighted_average};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TermError {
    #[error("term number must be > 0")]
    ZeroNumber,

    #[error("term ends ({ends_on}) before it starts ({starts_on})")]
    EndBeforeStart {
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    },
}

/// A semester: a dated, numbered group of modules.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    number: u32,
    starts_on: NaiveDate,
    ends_on: NaiveDate,
    modules: Vec<Module>,
}

impl Term {
    /// Creates an empty term.
    ///
    /// # Errors
    ///
    /// Returns `TermError::ZeroNumber` if `number` is 0.
    /// Returns `TermError::EndBeforeStart` if `ends_on` precedes `starts_on`.
    pub fn new(number: u32, starts_on: NaiveDate, ends_on: NaiveDate) -> Result<Self, TermError> {
        if number == 0 {
            return Err(TermError::ZeroNumber);
        }
        if ends_on < starts_on {
            return Err(TermError::EndBeforeStart { starts_on, ends_on });
        }

        Ok(Self {
            number,
            starts_on,
            ends_on,
            modules: Vec::new(),
        })
    }

    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[must_use]
    pub fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    #[must_use]
    pub fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module_mut(&mut self, index: usize) -> Option<&mut Module> {
        self.modules.get_mut(index)
    }

    #[must_use]
    pub fn earned_credits(&self) -> u32 {
        self.modules.iter().map(Module::earned_credits).sum()
    }

    /// Nominal credits of all modules, passed or not.
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.modules.iter().map(Module::credits).sum()
    }

    #[must_use]
    pub fn weighted_average_grade(&self) -> Option<f64> {
        weighted_average(&self.modules)
    }
}
