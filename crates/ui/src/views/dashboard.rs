use dioxus::prelude::*;

use crate::vm::{DashboardVm, ModuleRowVm, TermSummaryVm};

const REPORT_CSS: &str = "
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: -apple-system, Segoe UI, Roboto, sans-serif; background: #f5f5f5; color: #333; padding: 20px; }
.container { max-width: 1200px; margin: 0 auto; }
.dashboard-header { display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; margin-bottom: 20px; }
.card { background: white; border-radius: 12px; padding: 25px; text-align: center; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1); }
.card h3 { color: #666; font-size: 14px; letter-spacing: 1px; margin-bottom: 15px; }
.progress-value { font-size: 36px; font-weight: bold; color: #4CAF50; }
.credits { color: #666; margin-top: 10px; }
.grade-value { font-size: 48px; font-weight: bold; color: #2196F3; }
.grade-note { color: #4CAF50; font-size: 14px; margin-top: 10px; }
.current-term { font-size: 18px; font-weight: 600; margin-bottom: 10px; }
.status-good { color: #4CAF50; font-weight: 600; }
.status-bad { color: #F44336; font-weight: 600; }
.module-section { background: white; border-radius: 12px; padding: 25px; box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1); }
.section-title { font-size: 20px; margin-bottom: 10px; }
.term-label { color: #666; margin-bottom: 15px; }
.module-table { width: 100%; border-collapse: collapse; }
.module-table th { background: #4CAF50; color: white; padding: 15px; text-align: left; }
.module-table td { padding: 15px; border-bottom: 1px solid #e0e0e0; vertical-align: top; }
.module-title { font-weight: 600; }
.module-subtitle { font-size: 12px; color: #666; }
.status-badge { display: inline-flex; gap: 5px; font-weight: 500; }
.status-badge.passed { color: #4CAF50; }
.status-badge.in-progress { color: #FF9800; }
.status-badge.failed { color: #F44336; }
.status-badge.not-started { color: #999; }
.summary-row { background: #f0f8f0; font-weight: 600; }
.footer { display: flex; justify-content: space-between; margin-top: 20px; padding: 15px 20px; background: #f9f9f9; border-radius: 8px; font-size: 14px; color: #666; }
";

#[derive(Props, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub vm: DashboardVm,
}

/// `head` and `body` of one student's dashboard; the document root is added by
/// `render_dashboard`.
#[component]
pub fn DashboardPage(props: DashboardPageProps) -> Element {
    let vm = props.vm;

    rsx! {
        head {
            meta { charset: "UTF-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
            title { "Study dashboard - {vm.student_name}" }
            style { dangerous_inner_html: REPORT_CSS }
        }
        body {
            div { class: "container",
                div { class: "dashboard-header",
                    ProgressCard {
                        percent: vm.progress_percent,
                        earned: vm.earned_credits,
                        target: vm.credit_target,
                    }
                    GradeCard { grade: vm.grade_display.clone(), note: vm.grade_note.clone() }
                    ScheduleCard {
                        current_term: vm.current_term,
                        label: vm.schedule_label,
                        status_class: vm.schedule_class,
                    }
                }

                div { class: "module-section",
                    h2 { class: "section-title", "Module overview - {vm.program_name}" }
                    {vm.term_label.clone().map(|label| rsx! {
                        p { class: "term-label", "{label}" }
                    })}
                    table { class: "module-table",
                        thead {
                            tr {
                                th { "Module" }
                                th { "ECTS" }
                                th { "Assessment" }
                                th { "Status" }
                            }
                        }
                        tbody {
                            for (index, row) in vm.rows.iter().enumerate() {
                                ModuleRow { key: "{index}", row: row.clone() }
                            }
                            {vm.summary.clone().map(|summary| rsx! {
                                SummaryRow { summary }
                            })}
                        }
                    }
                }

                div { class: "footer",
                    div { "{vm.footer}" }
                    {vm.next_assessment.clone().map(|next| rsx! {
                        div { "{next}" }
                    })}
                }
            }
        }
    }
}

#[component]
fn ProgressCard(percent: u32, earned: u32, target: u32) -> Element {
    rsx! {
        div { class: "card",
            h3 { "OVERALL PROGRESS" }
            div { class: "progress-value", "{percent}%" }
            div { class: "credits", "{earned}/{target} ECTS" }
        }
    }
}

#[component]
fn GradeCard(grade: String, note: String) -> Element {
    rsx! {
        div { class: "card",
            h3 { "GRADE AVERAGE" }
            div { class: "grade-value", "{grade}" }
            div { class: "grade-note", "{note}" }
        }
    }
}

#[component]
fn ScheduleCard(current_term: usize, label: &'static str, status_class: &'static str) -> Element {
    rsx! {
        div { class: "card",
            h3 { "SCHEDULE" }
            div { class: "current-term", "Current: {current_term}. term" }
            div { class: "{status_class}", "{label}" }
        }
    }
}

#[component]
fn ModuleRow(row: ModuleRowVm) -> Element {
    rsx! {
        tr {
            td {
                div { class: "module-title", "{row.title}" }
                div { class: "module-subtitle", "{row.kind_label}" }
            }
            td { "{row.credits}" }
            td { "{row.assessment}" }
            td {
                span { class: "status-badge {row.status_class}", title: "{row.status_label}",
                    span { class: "status-icon", "{row.status_icon}" }
                    " {row.grade_display}"
                }
            }
        }
    }
}

#[component]
fn SummaryRow(summary: TermSummaryVm) -> Element {
    rsx! {
        tr { class: "summary-row",
            td {
                strong { "Total ECTS in term: {summary.total_credits}" }
            }
            td {
                strong { "{summary.earned_credits}" }
            }
            td {
                strong { "Average: {summary.average_display}" }
            }
            td {
                span { class: "status-badge passed",
                    "{summary.passed}/{summary.module_count} passed"
                }
            }
        }
    }
}
