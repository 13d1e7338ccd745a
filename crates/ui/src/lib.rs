#![forbid(unsafe_code)]

pub mod config;
pub mod report;
pub mod views;
pub mod vm;

pub use config::ReportConfig;
pub use report::{NO_DATA_HTML, render_dashboard};
