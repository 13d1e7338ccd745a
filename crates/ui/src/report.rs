use dioxus::prelude::*;
use services::DashboardData;

use crate::config::ReportConfig;
use crate::views::{DashboardPage, DashboardPageProps};
use crate::vm::DashboardVm;

/// Output when there is nothing to report on.
pub const NO_DATA_HTML: &str = "<p>No dashboard data available</p>";

/// Render the dashboard snapshot into a standalone HTML document.
#[must_use]
pub fn render_dashboard(data: Option<&DashboardData>, config: &ReportConfig) -> String {
    let Some(data) = data else {
        return NO_DATA_HTML.to_owned();
    };

    let vm = DashboardVm::from_snapshot(data, config);
    let mut dom = VirtualDom::new_with_props(DashboardPage, DashboardPageProps { vm });
    dom.rebuild_in_place();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">{}</html>",
        dioxus_ssr::render(&dom)
    )
}
