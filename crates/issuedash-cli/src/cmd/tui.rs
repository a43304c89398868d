//! `idash tui`: open the interactive dashboard (the default command).

use crate::cmd::view_args::ViewArgs;
use crate::tui;
use anyhow::bail;
use clap::Args;
use issuedash_core::config::UiConfig;
use issuedash_core::{Dashboard, Issue, ViewState};
use std::io::{self, IsTerminal};
use tracing::info;

#[derive(Args, Debug, Clone, Default)]
pub struct TuiArgs {
    #[command(flatten)]
    pub view: ViewArgs,

    /// Redraw interval in milliseconds (overrides `ui.tick_rate_ms`).
    #[arg(long, value_name = "MS")]
    pub tick_rate: Option<u64>,
}

/// Error raised when stdin/stdout are not attached to a terminal.
#[derive(Debug, thiserror::Error)]
#[error("the interactive dashboard needs a terminal; use `idash list` when piping")]
pub struct NoTerminal;

pub fn run_tui(
    args: &TuiArgs,
    base: ViewState,
    ui: &UiConfig,
    issues: Vec<Issue>,
) -> anyhow::Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        bail!(NoTerminal);
    }
    let state = args.view.apply(base);
    let tick_rate = args
        .tick_rate
        .map_or_else(|| ui.tick_rate(), std::time::Duration::from_millis);
    info!(?state, ?tick_rate, "starting dashboard");
    tui::run_dashboard(Dashboard::with_state(issues, state), tick_rate)
}
