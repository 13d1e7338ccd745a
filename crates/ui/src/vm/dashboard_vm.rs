use services::{DashboardData, ModuleSnapshot, TermSnapshot};
use study_core::model::ModuleStatus;

use crate::config::ReportConfig;
use crate::vm::time_fmt::format_date;

const MISSING: &str = "—";

/// Display-ready values for the whole dashboard page.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardVm {
    pub student_name: String,
    pub program_name: String,
    pub progress_percent: u32,
    pub earned_credits: u32,
    pub credit_target: u32,
    pub grade_display: String,
    pub grade_note: String,
    pub current_term: usize,
    pub schedule_label: &'static str,
    pub schedule_class: &'static str,
    pub term_label: Option<String>,
    pub rows: Vec<ModuleRowVm>,
    pub summary: Option<TermSummaryVm>,
    pub footer: String,
    pub next_assessment: Option<String>,
}

/// One line of the module table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub title: String,
    pub kind_label: &'static str,
    pub credits: u32,
    pub assessment: String,
    pub status_class: &'static str,
    pub status_icon: &'static str,
    pub status_label: &'static str,
    pub grade_display: String,
}

/// Totals row under the module table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermSummaryVm {
    pub total_credits: u32,
    pub earned_credits: u32,
    pub average_display: String,
    pub passed: usize,
    pub module_count: usize,
}

impl DashboardVm {
    #[must_use]
    pub fn from_snapshot(data: &DashboardData, config: &ReportConfig) -> Self {
        let program = &data.program;
        let progress = &data.progress;
        let first_term = program.terms.first();
        let (schedule_label, schedule_class) = if progress.on_schedule {
            ("✓ On schedule", "status-good")
        } else {
            ("✗ Behind schedule", "status-bad")
        };

        Self {
            student_name: data.student.name.clone(),
            program_name: program.name.clone(),
            progress_percent: percent(progress.earned_credits, config.credit_target()),
            earned_credits: progress.earned_credits,
            credit_target: config.credit_target(),
            grade_display: format_grade(progress.overall_grade),
            grade_note: grade_note(progress.overall_grade, program.target_grade),
            current_term: program.terms.len(),
            schedule_label,
            schedule_class,
            term_label: first_term.map(|term| format!("{}. term", term.number)),
            rows: first_term
                .map(|term| term.modules.iter().map(ModuleRowVm::from).collect())
                .unwrap_or_default(),
            summary: first_term.map(TermSummaryVm::from),
            footer: footer(config),
            next_assessment: first_term.and_then(next_assessment),
        }
    }
}

impl From<&ModuleSnapshot> for ModuleRowVm {
    fn from(module: &ModuleSnapshot) -> Self {
        let (status_class, status_icon) = match module.status {
            ModuleStatus::Passed => ("passed", "✓"),
            ModuleStatus::Failed => ("failed", "✗"),
            ModuleStatus::InProgress => ("in-progress", "○"),
            ModuleStatus::NotStarted => ("not-started", "○"),
        };
        Self {
            title: module.title.clone(),
            kind_label: if module.required {
                "Required module"
            } else {
                "Elective module"
            },
            credits: module.credits,
            assessment: module
                .assessments
                .first()
                .map(|a| a.description.clone())
                .unwrap_or_default(),
            status_class,
            status_icon,
            status_label: module.status.display_name(),
            grade_display: format_grade(module.average_grade),
        }
    }
}

impl From<&TermSnapshot> for TermSummaryVm {
    fn from(term: &TermSnapshot) -> Self {
        Self {
            total_credits: term.total_credits,
            earned_credits: term.earned_credits,
            average_display: format_grade(term.average_grade),
            passed: term
                .modules
                .iter()
                .filter(|m| m.status == ModuleStatus::Passed)
                .count(),
            module_count: term.modules.len(),
        }
    }
}

/// `part / whole` as a whole percentage, rounded half up.
fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part), u64::from(whole));
    u32::try_from((part * 200 + whole) / (2 * whole)).unwrap_or(u32::MAX)
}

fn format_grade(grade: Option<f64>) -> String {
    grade.map_or_else(|| MISSING.to_owned(), |g| format!("{g:.1}"))
}

fn grade_note(current: Option<f64>, target: f64) -> String {
    match current {
        Some(grade) if grade < target => format!("▲ {:.1} better than goal", target - grade),
        _ => format!("Goal: {target:.1}"),
    }
}

fn footer(config: &ReportConfig) -> String {
    match config.as_of() {
        Some(date) => format!("Data as of {} | {}", format_date(date), config.institution()),
        None => config.institution().to_owned(),
    }
}

fn next_assessment(term: &TermSnapshot) -> Option<String> {
    term.modules
        .iter()
        .find(|m| m.status == ModuleStatus::InProgress)
        .map(|m| {
            let kind = m
                .assessments
                .iter()
                .find(|a| a.grade.is_none())
                .map_or("Assessment", |a| a.kind.display_name());
            format!("Next assessment: {kind} {} (in progress)", m.title)
        })
}
