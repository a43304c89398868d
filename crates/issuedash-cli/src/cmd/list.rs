//! `idash list`: print the filtered, sorted issue list once.

use crate::cmd::view_args::ViewArgs;
use crate::output::{OutputMode, pretty_kv, pretty_rule, pretty_section, render_mode};
use clap::Args;
use issuedash_core::summary::{EMPTY_PLACEHOLDER, result_count_label};
use issuedash_core::{Dashboard, Issue, ViewState};
use serde::Serialize;
use std::io::{self, Write};
use tracing::debug;

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub view: ViewArgs,
}

/// Everything `idash list` reports, in JSON field order.
#[derive(Debug, Clone, Serialize)]
pub struct ListReport {
    pub state: ViewState,
    pub sort_enabled: bool,
    pub count: usize,
    pub first_result: Option<String>,
    pub issues: Vec<Issue>,
}

impl ListReport {
    pub fn from_dashboard(dashboard: &Dashboard) -> Self {
        Self {
            state: dashboard.state().clone(),
            sort_enabled: dashboard.sort_enabled(),
            count: dashboard.projection().len(),
            first_result: dashboard.first_result().map(|issue| issue.title.clone()),
            issues: dashboard.projection().to_vec(),
        }
    }
}

pub fn run_list(
    args: &ListArgs,
    base: ViewState,
    issues: Vec<Issue>,
    output: OutputMode,
) -> anyhow::Result<()> {
    let state = args.view.apply(base);
    let dashboard = Dashboard::with_state(issues, state);
    let report = ListReport::from_dashboard(&dashboard);
    debug!(count = report.count, "rendering issue list");
    render_mode(output, &report, write_text, write_pretty)
}

/// Tab-separated rows with a header line.
pub fn write_text(report: &ListReport, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "id\tpriority\tstatus\tassignee\ttitle")?;
    for issue in &report.issues {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}",
            issue.id, issue.priority, issue.status, issue.assignee, issue.title
        )?;
    }
    Ok(())
}

pub fn write_pretty(report: &ListReport, w: &mut dyn Write) -> io::Result<()> {
    pretty_section(w, "Issue Dashboard")?;
    let query = report.state.query.trim();
    pretty_kv(w, "Search", if query.is_empty() { "(none)" } else { query })?;
    pretty_kv(w, "Open only", if report.state.open_only { "yes" } else { "no" })?;
    pretty_kv(w, "Priority", report.state.priority_filter.label())?;
    let sort = if report.sort_enabled {
        report.state.sort_direction.label().to_string()
    } else {
        format!("{} (locked)", report.state.sort_direction.label())
    };
    pretty_kv(w, "Sort", sort)?;
    pretty_kv(
        w,
        "First result",
        report.first_result.as_deref().unwrap_or(EMPTY_PLACEHOLDER),
    )?;
    pretty_rule(w)?;
    writeln!(w, "{}", result_count_label(report.count))?;
    for issue in &report.issues {
        writeln!(
            w,
            "  #{:<4} {:<7} {:<7} {:<10} {}",
            issue.id,
            issue.priority.label(),
            issue.status.label(),
            format!("@{}", issue.assignee),
            issue.title
        )?;
    }
    Ok(())
}
