#![forbid(unsafe_code)]

pub mod dashboard;
pub mod error;
pub mod registry;
pub mod sample;

pub use study_core::Clock;

pub use dashboard::{
    AssessmentSnapshot, DashboardData, ModuleSnapshot, ProgramSnapshot, ProgressSummary,
    StudentSnapshot, TermSnapshot,
};
pub use error::{RegistryError, SampleDataError};
pub use registry::{NewStudent, Registry};
pub use sample::sample_registry;
