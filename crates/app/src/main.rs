use std::io;
use std::path::PathBuf;

use services::{Clock, DashboardData, SampleDataError, sample_registry};
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::vm::DashboardVm;
use ui::{ReportConfig, render_dashboard};

#[derive(Debug, Error)]
enum AppError {
    #[error("failed to build sample data: {0}")]
    Sample(#[from] SampleDataError),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

fn init_tracing() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(AppError::Subscriber)
}

fn log_summary(data: &DashboardData, config: &ReportConfig) {
    let vm = DashboardVm::from_snapshot(data, config);
    info!("Dashboard written to {}", config.output_file().display());
    info!("Program: {}", data.program.name);
    info!("Student: {}", data.student.name);
    if let Some(term) = data.program.terms.first() {
        info!(
            "ECTS in term {}: {}/{}",
            term.number, term.earned_credits, term.total_credits
        );
    }
    info!("Grade average: {}", vm.grade_display);
    info!("Progress: {}%", vm.progress_percent);
    info!("Schedule: {}", vm.schedule_label);
}

fn run() -> Result<(), AppError> {
    init_tracing()?;

    let clock = Clock::default_clock();
    let registry = sample_registry(clock)?;
    let config = ReportConfig::default().with_as_of(clock.today());

    let data = registry.dashboard_data();
    if data.is_none() {
        warn!("No active student or program, writing placeholder report");
    }
    let html = render_dashboard(data.as_ref(), &config);

    let path = config.output_file();
    std::fs::write(path, html).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    match data {
        Some(data) => log_summary(&data, &config),
        None => info!("Dashboard written to {}", path.display()),
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
