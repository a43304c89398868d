//! TUI dashboard view.
//!
//! Provides a full-screen terminal UI with:
//! - Filter bar: search box, open-only checkbox, priority select, sort select
//! - "First result" summary line and result counter
//! - Issue rows with assignee tag, status badge and priority tag
//! - Key bindings: Tab focus, / search, o open-only, p priority, s sort, ? help, q quit

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use issuedash_core::model::issue::{Issue, Priority, Status};
use issuedash_core::summary::result_count_label;
use issuedash_core::{Dashboard, SortLocked};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};
use std::time::{Duration, Instant};
use tracing::debug;

const SEARCH_PLACEHOLDER: &str = "Search title or assignee";
const SORT_LOCKED_MSG: &str = "Sort locked while a priority filter is active";

// ---------------------------------------------------------------------------
// Focus and input modes
// ---------------------------------------------------------------------------

/// Focusable controls in the filter bar, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Search,
    OpenOnly,
    Priority,
    Sort,
}

impl Control {
    const ORDER: [Self; 4] = [Self::Search, Self::OpenOnly, Self::Priority, Self::Sort];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|c| *c == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum InputMode {
    #[default]
    Normal,
    /// Keystrokes edit the search query.
    Search,
    /// Help overlay is open.
    Help,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Main application state for the dashboard.
pub struct DashboardView {
    /// View-state controller; owns the issues and the projection.
    dashboard: Dashboard,
    /// Focused filter-bar control.
    focus: Control,
    /// Table navigation state (selected row index in the projection).
    table_state: TableState,
    input_mode: InputMode,
    /// Query value before entering Search mode (for Esc cancel).
    search_prev_query: String,
    should_quit: bool,
    /// Transient message shown in the status bar.
    status_msg: Option<(String, Instant)>,
}

impl DashboardView {
    pub fn new(dashboard: Dashboard) -> Self {
        let mut view = Self {
            dashboard,
            focus: Control::default(),
            table_state: TableState::default(),
            input_mode: InputMode::default(),
            search_prev_query: String::new(),
            should_quit: false,
            status_msg: None,
        };
        view.after_change();
        view
    }

    /// Returns true if the view has been asked to quit.
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_msg = Some((msg.into(), Instant::now()));
    }

    fn status_text(&self) -> Option<&str> {
        self.status_msg
            .as_ref()
            .filter(|(_, at)| at.elapsed() < Duration::from_secs(3))
            .map(|(msg, _)| msg.as_str())
    }

    /// Re-establish view invariants after the controller changed.
    fn after_change(&mut self) {
        let len = self.dashboard.projection().len();
        match self.table_state.selected() {
            Some(_) if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None if len > 0 => self.table_state.select(Some(0)),
            _ => {}
        }
        if self.focus == Control::Sort && !self.dashboard.sort_enabled() {
            self.focus = Control::Priority;
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    fn is_enabled(&self, control: Control) -> bool {
        control != Control::Sort || self.dashboard.sort_enabled()
    }

    fn focus_next(&mut self) {
        self.focus = self.step_focus(1);
    }

    fn focus_prev(&mut self) {
        self.focus = self.step_focus(Control::ORDER.len() - 1);
    }

    fn step_focus(&self, step: usize) -> Control {
        let len = Control::ORDER.len();
        let mut idx = self.focus.position();
        for _ in 0..len {
            idx = (idx + step) % len;
            let candidate = Control::ORDER[idx];
            if self.is_enabled(candidate) {
                return candidate;
            }
        }
        self.focus
    }

    fn select_next(&mut self) {
        let len = self.dashboard.projection().len();
        if len == 0 {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map_or(0, |i| if i + 1 >= len { len - 1 } else { i + 1 });
        self.table_state.select(Some(i));
    }

    fn select_prev(&mut self) {
        if self.dashboard.projection().is_empty() {
            return;
        }
        let i = self
            .table_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(i));
    }

    fn select_first(&mut self) {
        if !self.dashboard.projection().is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        let len = self.dashboard.projection().len();
        if len > 0 {
            self.table_state.select(Some(len - 1));
        }
    }

    // -----------------------------------------------------------------------
    // Controller actions
    // -----------------------------------------------------------------------

    fn toggle_open_only(&mut self) {
        self.dashboard.toggle_open_only();
        self.after_change();
    }

    fn cycle_priority(&mut self, forward: bool) {
        if forward {
            self.dashboard.cycle_priority_filter();
        } else {
            self.dashboard.cycle_priority_filter_back();
        }
        self.after_change();
    }

    fn toggle_sort(&mut self) {
        match self.dashboard.toggle_sort_direction() {
            Ok(()) => self.after_change(),
            Err(SortLocked { filter }) => {
                debug!(%filter, "sort change rejected");
                self.set_status(SORT_LOCKED_MSG);
            }
        }
    }

    fn reset_filters(&mut self) {
        self.dashboard.reset();
        self.after_change();
        self.set_status("Filters cleared");
    }

    fn enter_search(&mut self) {
        self.focus = Control::Search;
        self.search_prev_query = self.dashboard.state().query.clone();
        self.input_mode = InputMode::Search;
    }

    /// Space/Enter on the focused control.
    fn activate_focused(&mut self) {
        match self.focus {
            Control::Search => self.enter_search(),
            Control::OpenOnly => self.toggle_open_only(),
            Control::Priority => self.cycle_priority(true),
            Control::Sort => self.toggle_sort(),
        }
    }

    /// Left/Right on the focused control.
    fn change_focused(&mut self, forward: bool) {
        match self.focus {
            Control::Search => {}
            Control::OpenOnly => self.toggle_open_only(),
            Control::Priority => self.cycle_priority(forward),
            Control::Sort => self.toggle_sort(),
        }
    }

    // -----------------------------------------------------------------------
    // Key event handling
    // -----------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Help => self.handle_help_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('?') => self.input_mode = InputMode::Help,
            KeyCode::Char('/') => self.enter_search(),
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate_focused(),
            KeyCode::Right | KeyCode::Char('l') => self.change_focused(true),
            KeyCode::Left | KeyCode::Char('h') => self.change_focused(false),
            KeyCode::Char('o') => self.toggle_open_only(),
            KeyCode::Char('p') => self.cycle_priority(true),
            KeyCode::Char('P') => self.cycle_priority(false),
            KeyCode::Char('s') => self.toggle_sort(),
            KeyCode::Esc => self.reset_filters(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => {
                let previous = std::mem::take(&mut self.search_prev_query);
                self.dashboard.set_query(previous);
                self.after_change();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter | KeyCode::Tab => {
                self.input_mode = InputMode::Normal;
                if key.code == KeyCode::Tab {
                    self.focus_next();
                }
            }
            KeyCode::Backspace => {
                self.dashboard.pop_query_char();
                self.after_change();
            }
            KeyCode::Char('u') if ctrl => {
                self.dashboard.clear_query();
                self.after_change();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.dashboard.push_query_char(c);
                self.after_change();
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::Enter
        ) {
            self.input_mode = InputMode::Normal;
        }
    }

    /// Render the dashboard into `area` within the given frame.
    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect) {
        render_into(frame, self, area);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn status_badge_style(status: Status) -> Style {
    match status {
        Status::Open => Style::default().fg(Color::Black).bg(Color::Green),
        Status::Closed => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Blue,
    }
}

/// Truncate a string to at most `max_chars`, appending '…' if truncated.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars == 0 {
        String::new()
    } else {
        let truncated: String = s.chars().take(max_chars - 1).collect();
        format!("{truncated}…")
    }
}

/// Build one table `Row` from an issue.
fn build_row(issue: &Issue, width: u16) -> Row<'static> {
    let tag = format!(" @{}", issue.assignee);
    let title_budget = (width as usize).saturating_sub(tag.chars().count()).max(8);
    let title_cell = Cell::from(Line::from(vec![
        Span::styled(
            truncate(&issue.title, title_budget),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(tag, Style::default().fg(Color::Magenta)),
    ]));
    let status_cell = Cell::from(Span::styled(
        format!(" {} ", issue.status.label()),
        status_badge_style(issue.status),
    ));
    let priority_cell = Cell::from(Span::styled(
        issue.priority.label(),
        Style::default().fg(priority_color(issue.priority)),
    ));
    Row::new([title_cell, status_cell, priority_cell])
}

fn control_prefix(focused: bool) -> Span<'static> {
    if focused {
        Span::styled("► ", Style::default().fg(Color::Cyan))
    } else {
        Span::raw("  ")
    }
}

/// Spans for the filter bar: search box, checkbox and the two selects.
fn filter_bar_line(app: &DashboardView) -> Line<'static> {
    let focused_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let normal_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);
    let label_style = |control: Control| {
        if !app.is_enabled(control) {
            dim_style
        } else if app.focus == control {
            focused_style
        } else {
            normal_style
        }
    };
    let state = app.dashboard.state();

    let mut spans = Vec::new();

    spans.push(control_prefix(app.focus == Control::Search));
    let editing = app.input_mode == InputMode::Search;
    let search_span = if state.query.is_empty() && !editing {
        Span::styled(format!("[{SEARCH_PLACEHOLDER}]"), dim_style)
    } else {
        let cursor = if editing { "_" } else { "" };
        Span::styled(
            format!("[{}{cursor}]", state.query),
            label_style(Control::Search),
        )
    };
    spans.push(search_span);
    spans.push(Span::raw("  "));

    spans.push(control_prefix(app.focus == Control::OpenOnly));
    let check = if state.open_only { "[x]" } else { "[ ]" };
    spans.push(Span::styled(
        format!("{check} Open only"),
        label_style(Control::OpenOnly),
    ));
    spans.push(Span::raw("  "));

    spans.push(control_prefix(app.focus == Control::Priority));
    spans.push(Span::styled("Priority: ", label_style(Control::Priority)));
    spans.push(Span::styled(
        format!("‹{}›", state.priority_filter.label()),
        Style::default().fg(Color::Green),
    ));
    spans.push(Span::raw("  "));

    spans.push(control_prefix(app.focus == Control::Sort));
    let sort_enabled = app.is_enabled(Control::Sort);
    spans.push(Span::styled(
        "Sort by priority: ",
        label_style(Control::Sort),
    ));
    spans.push(Span::styled(
        format!("‹{}›", state.sort_direction.label()),
        if sort_enabled {
            Style::default().fg(Color::Green)
        } else {
            dim_style
        },
    ));
    if !sort_enabled {
        spans.push(Span::styled(" (locked)", dim_style));
    }

    Line::from(spans)
}

fn summary_line(app: &DashboardView) -> Line<'static> {
    let title = app.dashboard.first_result_label();
    Line::from(vec![
        Span::styled("First result: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::ITALIC),
        ),
    ])
}

fn help_hotkeys() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Tab/Shift+Tab", "move focus between filter controls"),
        ("Space/Enter", "activate focused control"),
        ("←/→", "change focused select"),
        ("/", "edit search (Esc cancels, Enter keeps)"),
        ("o", "toggle open only"),
        ("p/P", "next/previous priority filter"),
        ("s", "toggle sort direction"),
        ("Esc", "clear all filters"),
        ("j/k", "move selection"),
        ("g/G", "first/last issue"),
        ("?", "toggle this help"),
        ("q", "quit"),
    ]
}

fn render_help_overlay(frame: &mut Frame<'_>, area: Rect) {
    let popup_w = area.width.saturating_sub(8).min(64);
    let popup_h = area.height.saturating_sub(4).min(16);
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Green))
        .title(" Hotkeys ")
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let lines: Vec<Line<'static>> = help_hotkeys()
        .into_iter()
        .map(|(key, desc)| {
            Line::from(vec![
                Span::styled(format!("{key:15}"), Style::default().fg(Color::Cyan)),
                Span::styled(desc.to_string(), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

/// Render the dashboard into a specific area of the frame.
fn render_into(frame: &mut Frame<'_>, app: &mut DashboardView, area: Rect) {
    // Layout: filter bar, summary, list, status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let filter_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Issue Dashboard ")
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(
        Paragraph::new(filter_bar_line(app)).block(filter_block),
        chunks[0],
    );

    frame.render_widget(Paragraph::new(summary_line(app)), chunks[1]);

    let list_area = chunks[2];
    let body_width = list_area.width.saturating_sub(4 + 10 + 8).max(10);
    let rows: Vec<Row<'static>> = app
        .dashboard
        .projection()
        .iter()
        .map(|issue| build_row(issue, body_width))
        .collect();

    let list_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::Green))
        .title(format!(
            " {} ",
            result_count_label(app.dashboard.projection().len())
        ))
        .title_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    if rows.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No issues match the current filters",
                Style::default().fg(Color::DarkGray),
            )))
            .block(list_block),
            list_area,
        );
    } else {
        let widths = [
            Constraint::Min(10),
            Constraint::Length(10),
            Constraint::Length(8),
        ];
        let table = Table::new(rows, widths)
            .block(list_block)
            .row_highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(" ");
        frame.render_stateful_widget(table, list_area, &mut app.table_state);
    }

    let status_paragraph = Paragraph::new(build_status_bar(app, chunks[3].width))
        .alignment(Alignment::Left);
    frame.render_widget(status_paragraph, chunks[3]);

    if app.input_mode == InputMode::Help {
        render_help_overlay(frame, area);
    }
}

/// Build the status bar line for the current mode.
fn build_status_bar(app: &DashboardView, width: u16) -> Line<'static> {
    // Show a transient status message if recent (< 3 seconds).
    if let Some(msg) = app.status_text() {
        return Line::from(vec![Span::styled(
            msg.to_string(),
            Style::default().fg(Color::Cyan),
        )]);
    }

    let key_style = Style::default().fg(Color::Cyan);
    let dim_style = Style::default().fg(Color::DarkGray);

    let hints: &[(&str, &str)] = match app.input_mode {
        InputMode::Search => &[("ESC", "cancel"), ("ENTER", "confirm"), ("CTRL+U", "clear")],
        InputMode::Help => &[("ESC", "close help")],
        InputMode::Normal => &[
            ("tab", "focus"),
            ("/", "search"),
            ("o", "open only"),
            ("p", "priority"),
            ("s", "sort"),
            ("esc", "clear"),
            ("?", "help"),
            ("q", "quit"),
        ],
    };
    let mut spans: Vec<Span<'static>> = Vec::new();
    for (key, desc) in hints {
        spans.push(Span::styled((*key).to_string(), key_style));
        spans.push(Span::styled(format!(" {desc}  "), dim_style));
    }

    let version = format!("issuedash {}", env!("CARGO_PKG_VERSION"));
    let left_len: usize = spans.iter().map(|span| span.content.chars().count()).sum();
    let right_len = version.chars().count();
    if (width as usize) > left_len + right_len + 1 {
        spans.push(Span::raw(" ".repeat(width as usize - left_len - right_len)));
    } else {
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(version, dim_style));

    Line::from(spans)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use issuedash_core::seed;
    use issuedash_core::view::{PriorityFilter, SortDirection};
    use ratatui::{Terminal, backend::TestBackend};

    fn make_view() -> DashboardView {
        DashboardView::new(Dashboard::new(seed::issues()))
    }

    fn press(view: &mut DashboardView, code: KeyCode) {
        view.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(view: &mut DashboardView, text: &str) {
        for c in text.chars() {
            press(view, KeyCode::Char(c));
        }
    }

    fn selected_id(view: &DashboardView) -> Option<u32> {
        view.table_state
            .selected()
            .and_then(|i| view.dashboard.projection().get(i))
            .map(|issue| issue.id)
    }

    fn ids(view: &DashboardView) -> Vec<u32> {
        view.dashboard.projection().iter().map(|i| i.id).collect()
    }

    fn render_to_string(view: &mut DashboardView, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal
            .draw(|frame| view.render(frame, frame.area()))
            .expect("draw");
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(ratatui::buffer::Cell::symbol).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    #[test]
    fn initial_selection_is_first_issue() {
        let view = make_view();
        assert_eq!(selected_id(&view), Some(201));
    }

    #[test]
    fn select_next_does_not_wrap_at_end() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('G'));
        press(&mut view, KeyCode::Char('j'));
        assert_eq!(selected_id(&view), Some(206));
    }

    #[test]
    fn select_prev_does_not_wrap_at_start() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('k'));
        assert_eq!(view.table_state.selected(), Some(0));
    }

    #[test]
    fn selection_clamps_after_filtering() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('G'));
        press(&mut view, KeyCode::Char('/'));
        type_text(&mut view, "sam");
        assert_eq!(view.table_state.selected(), Some(1));
        type_text(&mut view, "zz");
        assert_eq!(view.table_state.selected(), None);
        press(&mut view, KeyCode::Backspace);
        press(&mut view, KeyCode::Backspace);
        assert_eq!(view.table_state.selected(), Some(0));
    }

    // -----------------------------------------------------------------------
    // Filters
    // -----------------------------------------------------------------------

    #[test]
    fn search_filters_live_per_keystroke() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('/'));
        assert_eq!(view.input_mode, InputMode::Search);
        type_text(&mut view, "sam");
        assert_eq!(view.dashboard.state().query, "sam");
        assert_eq!(ids(&view), vec![202, 206]);
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.input_mode, InputMode::Normal);
        assert_eq!(ids(&view), vec![202, 206]);
    }

    #[test]
    fn search_esc_restores_previous_query() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('/'));
        type_text(&mut view, "zzz");
        assert!(ids(&view).is_empty());
        press(&mut view, KeyCode::Esc);
        assert_eq!(view.input_mode, InputMode::Normal);
        assert_eq!(view.dashboard.state().query, "");
        assert_eq!(ids(&view).len(), 6);
    }

    #[test]
    fn search_mode_does_not_trigger_shortcuts() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('/'));
        type_text(&mut view, "qos");
        assert!(!view.should_quit());
        assert!(!view.dashboard.state().open_only);
        assert_eq!(view.dashboard.state().query, "qos");
    }

    #[test]
    fn o_toggles_open_only() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('o'));
        assert!(view.dashboard.state().open_only);
        assert_eq!(ids(&view), vec![201, 204, 203, 206]);
        press(&mut view, KeyCode::Char('o'));
        assert!(!view.dashboard.state().open_only);
    }

    #[test]
    fn p_cycles_priority_filter() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('p'));
        assert_eq!(view.dashboard.state().priority_filter, PriorityFilter::Low);
        press(&mut view, KeyCode::Char('P'));
        press(&mut view, KeyCode::Char('P'));
        assert_eq!(view.dashboard.state().priority_filter, PriorityFilter::High);
        assert_eq!(ids(&view), vec![201, 204]);
    }

    #[test]
    fn s_toggles_sort_when_unlocked() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('s'));
        assert_eq!(view.dashboard.state().sort_direction, SortDirection::Asc);
        assert_eq!(ids(&view), vec![202, 206, 203, 205, 201, 204]);
    }

    #[test]
    fn s_is_rejected_under_priority_filter() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('p'));
        let before = ids(&view);
        press(&mut view, KeyCode::Char('s'));
        assert_eq!(view.dashboard.state().sort_direction, SortDirection::Desc);
        assert_eq!(ids(&view), before);
        assert_eq!(view.status_text(), Some(SORT_LOCKED_MSG));
    }

    #[test]
    fn esc_clears_filters() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('o'));
        press(&mut view, KeyCode::Char('p'));
        press(&mut view, KeyCode::Esc);
        assert!(view.dashboard.state().is_unfiltered());
        assert_eq!(ids(&view).len(), 6);
    }

    // -----------------------------------------------------------------------
    // Focus
    // -----------------------------------------------------------------------

    #[test]
    fn tab_cycles_through_enabled_controls() {
        let mut view = make_view();
        assert_eq!(view.focus, Control::Search);
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus, Control::OpenOnly);
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus, Control::Priority);
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus, Control::Sort);
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus, Control::Search);
        press(&mut view, KeyCode::BackTab);
        assert_eq!(view.focus, Control::Sort);
    }

    #[test]
    fn tab_skips_locked_sort_control() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('p'));
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus, Control::Priority);
        press(&mut view, KeyCode::Tab);
        assert_eq!(view.focus, Control::Search);
    }

    #[test]
    fn focus_leaves_sort_when_it_becomes_locked() {
        let mut view = make_view();
        press(&mut view, KeyCode::BackTab);
        assert_eq!(view.focus, Control::Sort);
        press(&mut view, KeyCode::Char('p'));
        assert_eq!(view.focus, Control::Priority);
    }

    #[test]
    fn space_and_arrows_drive_focused_control() {
        let mut view = make_view();
        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Char(' '));
        assert!(view.dashboard.state().open_only);

        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Right);
        assert_eq!(view.dashboard.state().priority_filter, PriorityFilter::Low);
        press(&mut view, KeyCode::Left);
        assert_eq!(view.dashboard.state().priority_filter, PriorityFilter::All);

        press(&mut view, KeyCode::Tab);
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.dashboard.state().sort_direction, SortDirection::Asc);
    }

    #[test]
    fn enter_on_search_starts_editing() {
        let mut view = make_view();
        press(&mut view, KeyCode::Enter);
        assert_eq!(view.input_mode, InputMode::Search);
    }

    // -----------------------------------------------------------------------
    // Misc keys
    // -----------------------------------------------------------------------

    #[test]
    fn q_key_quits() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('q'));
        assert!(view.should_quit());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut view = make_view();
        view.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(view.should_quit());
    }

    #[test]
    fn ctrl_c_quits_while_searching() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('/'));
        view.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(view.should_quit());
        assert_eq!(view.dashboard.state().query, "");
    }

    #[test]
    fn modified_chars_do_not_edit_query() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('/'));
        type_text(&mut view, "sa");
        view.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
        view.handle_key(KeyEvent::new(KeyCode::Char('m'), KeyModifiers::ALT));
        assert_eq!(view.dashboard.state().query, "sa");
        assert!(!view.should_quit());
        view.handle_key(KeyEvent::new(KeyCode::Char('M'), KeyModifiers::SHIFT));
        assert_eq!(view.dashboard.state().query, "saM");
    }

    #[test]
    fn help_opens_and_closes() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('?'));
        assert_eq!(view.input_mode, InputMode::Help);
        press(&mut view, KeyCode::Char('o'));
        assert!(!view.dashboard.state().open_only);
        press(&mut view, KeyCode::Esc);
        assert_eq!(view.input_mode, InputMode::Normal);
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    #[test]
    fn truncate_long_string_gets_ellipsis() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn render_shows_summary_and_rows() {
        let mut view = make_view();
        let screen = render_to_string(&mut view, 110, 16);
        assert!(screen.contains("First result: Add pagination to orders list"));
        assert!(screen.contains("6 results"));
        assert!(screen.contains("@morgan"));
        assert!(screen.contains("Closed"));
        assert!(screen.contains("Medium"));
        assert!(screen.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn render_empty_result_uses_placeholder() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('/'));
        type_text(&mut view, "zzz");
        let screen = render_to_string(&mut view, 110, 16);
        assert!(screen.contains("First result: —"));
        assert!(screen.contains("0 results"));
        assert!(screen.contains("No issues match the current filters"));
    }

    #[test]
    fn render_marks_sort_locked() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('p'));
        let screen = render_to_string(&mut view, 120, 16);
        assert!(screen.contains("‹Low›"));
        assert!(screen.contains("(locked)"));
    }

    #[test]
    fn render_help_overlay_lists_hotkeys() {
        let mut view = make_view();
        press(&mut view, KeyCode::Char('?'));
        let screen = render_to_string(&mut view, 100, 24);
        assert!(screen.contains("Hotkeys"));
        assert!(screen.contains("toggle open only"));
    }
}
