use std::path::{Path, PathBuf};

use chrono::NaiveDate;

/// File the dashboard is written to, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "study_dashboard.html";

/// Credits required for a full bachelor degree.
pub const DEFAULT_CREDIT_TARGET: u32 = 180;

pub const DEFAULT_INSTITUTION: &str = "IU Internationale Hochschule";

/// Fixed inputs of the report that do not come from the student's data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    credit_target: u32,
    output_file: PathBuf,
    institution: String,
    as_of: Option<NaiveDate>,
}

impl ReportConfig {
    /// Stamp the report with the date its data was taken.
    #[must_use]
    pub fn with_as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    #[must_use]
    pub fn credit_target(&self) -> u32 {
        self.credit_target
    }

    #[must_use]
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    #[must_use]
    pub fn institution(&self) -> &str {
        &self.institution
    }

    #[must_use]
    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            credit_target: DEFAULT_CREDIT_TARGET,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            institution: DEFAULT_INSTITUTION.to_owned(),
            as_of: None,
        }
    }
}
