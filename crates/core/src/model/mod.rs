mod assessment;
mod grading;
mod ids;
mod module;
mod program;
mod student;
mod term;

pub use ids::{ParseIdError, StudentId};

pub use assessment::{
    Assessment, AssessmentDetails, AssessmentDraft, AssessmentError, AssessmentKind,
    AssessmentStatus,
};
pub use grading::{Grade, GradeError, GradingPolicy};
pub use module::{Module, ModuleError, ModuleStatus};
pub use program::{Program, ProgramError, ProgramGoals, ProgramType};
pub use student::{DEFAULT_ROLE, Student, StudentError};
pub use term::{Term, TermError};
