use services::sample::SAMPLE_STUDENT_ID;
use services::{DashboardData, Registry, sample_registry};
use study_core::model::{AssessmentKind, ModuleStatus, ProgramType};
use study_core::time::fixed_clock;

fn sample() -> Registry {
    sample_registry(fixed_clock()).expect("sample data")
}

#[test]
fn sample_program_aggregates() {
    let registry = sample();
    let program = registry.active_program().expect("active program");

    assert_eq!(program.total_credits(), 25);
    assert_eq!(program.total_earned_credits(), 20);
    assert_eq!(program.overall_average_grade(), Some(2.3));
    assert!(program.is_on_schedule());
    assert!(!program.is_goal_met());

    let term = &program.terms()[0];
    assert_eq!(term.total_credits(), 25);
    assert_eq!(term.earned_credits(), 20);
    assert_eq!(term.weighted_average_grade(), Some(2.3));

    let statuses: Vec<ModuleStatus> = term.modules().iter().map(|m| m.status()).collect();
    assert_eq!(
        statuses,
        vec![
            ModuleStatus::Passed,
            ModuleStatus::Passed,
            ModuleStatus::Passed,
            ModuleStatus::Passed,
            ModuleStatus::InProgress,
        ]
    );
}

#[test]
fn snapshot_matches_direct_derivation() {
    let registry = sample();
    let data = registry.dashboard_data().expect("dashboard data");
    let program = registry.active_program().expect("active program");

    assert_eq!(data.student.id, SAMPLE_STUDENT_ID);
    assert_eq!(data.student.role, "Student");
    assert_eq!(data.program.program_type, ProgramType::Bachelor);
    assert_eq!(data.program.target_terms, 8);

    assert_eq!(data.progress.earned_credits, program.total_earned_credits());
    assert_eq!(data.progress.overall_grade, program.overall_average_grade());
    assert_eq!(data.progress.on_schedule, program.is_on_schedule());
    assert_eq!(data.progress.goal_met, program.is_goal_met());
    assert_eq!(data.program.earned_credits, data.progress.earned_credits);

    for (snapshot, term) in data.program.terms.iter().zip(program.terms()) {
        assert_eq!(snapshot.earned_credits, term.earned_credits());
        assert_eq!(snapshot.total_credits, term.total_credits());
        assert_eq!(snapshot.average_grade, term.weighted_average_grade());
        for (module_snapshot, module) in snapshot.modules.iter().zip(term.modules()) {
            assert_eq!(module_snapshot.status, module.status());
            assert_eq!(module_snapshot.average_grade, module.average_grade());
            assert_eq!(module_snapshot.earned_credits, module.earned_credits());
        }
    }
}

#[test]
fn snapshot_is_stable_without_mutation() {
    let registry = sample();
    let first: DashboardData = registry.dashboard_data().expect("dashboard data");
    let second: DashboardData = registry.dashboard_data().expect("dashboard data");
    assert_eq!(first, second);
}

#[test]
fn grading_the_open_portfolio_updates_the_snapshot() {
    let mut registry = sample();
    registry.record_grade(0, 4, 0, Some(1.0)).expect("record grade");

    let data = registry.dashboard_data().expect("dashboard data");
    assert_eq!(data.progress.earned_credits, 25);
    // (2.0 + 3.3 + 2.0 + 2.0 + 1.0) * 5 / 25 = 2.06
    assert_eq!(data.progress.overall_grade, Some(2.1));
    assert!(!data.progress.goal_met);

    let portfolio = &data.program.terms[0].modules[4];
    assert_eq!(portfolio.status, ModuleStatus::Passed);
    assert_eq!(portfolio.assessments[0].kind, AssessmentKind::Portfolio);
}

#[test]
fn snapshot_serializes_to_json_tree() {
    let registry = sample();
    let data = registry.dashboard_data().expect("dashboard data");
    let json = serde_json::to_value(&data).expect("serialize");

    assert_eq!(json["student"]["name"], "Christine Münzberg");
    assert_eq!(json["program"]["program_type"], "Bachelor");
    assert_eq!(json["progress"]["earned_credits"], 20);
    assert_eq!(json["progress"]["overall_grade"], 2.3);

    let modules = &json["program"]["terms"][0]["modules"];
    assert_eq!(modules[1]["status"], "passed");
    assert_eq!(modules[4]["status"], "in_progress");
    assert_eq!(modules[4]["average_grade"], serde_json::Value::Null);

    let portfolio = &modules[4]["assessments"][0];
    assert_eq!(portfolio["kind"], "portfolio");
    assert_eq!(portfolio["details"]["task_count"], 4);
    assert_eq!(portfolio["description"], "Portfolio (4 tasks)");
    assert_eq!(portfolio["status"], "open");
}
