//! Interactive terminal dashboard.
//!
//! [`run_dashboard`] owns the terminal for the lifetime of the session:
//! raw mode plus the alternate screen on entry, both restored on exit
//! (including early returns through `?`).

pub mod dashboard;

use anyhow::Context as _;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use dashboard::DashboardView;
use issuedash_core::Dashboard;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::subscriber::NoSubscriber;

type DashTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Restores the terminal when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err).context("failed to enter alternate screen");
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the dashboard until the user quits.
pub fn run_dashboard(dashboard: Dashboard, tick_rate: Duration) -> anyhow::Result<()> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;

    let mut view = DashboardView::new(dashboard);
    // Log lines would tear the alternate screen.
    let result = tracing::subscriber::with_default(NoSubscriber::default(), || {
        run_event_loop(&mut terminal, &mut view, tick_rate)
    });

    terminal.show_cursor().ok();
    drop(guard);
    result
}

fn run_event_loop(
    terminal: &mut DashTerminal,
    view: &mut DashboardView,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| view.render(frame, frame.area()))?;
        if view.should_quit() {
            return Ok(());
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();
        if event::poll(timeout)? {
            // Resize and focus events are picked up by the next draw.
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                view.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}
