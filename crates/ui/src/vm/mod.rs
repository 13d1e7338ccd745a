mod dashboard_vm;
mod time_fmt;

pub use dashboard_vm::{DashboardVm, ModuleRowVm, TermSummaryVm};
pub use time_fmt::format_date;
