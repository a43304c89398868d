//! View-state controller.
//!
//! [`Dashboard`] owns the issue set and the current [`ViewState`], and keeps
//! the derived projection current after every transition. The projection is
//! memoized on the state it was computed from, so a transition that leaves
//! the state unchanged does not recompute.

use crate::model::issue::Issue;
use crate::pipeline;
use crate::summary;
use crate::view::{PriorityFilter, SortDirection, ViewState};
use tracing::debug;

/// Returned when the sort direction is changed while a priority filter is
/// active. The stored direction is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("sort direction is locked while the priority filter is {filter}")]
pub struct SortLocked {
    pub filter: PriorityFilter,
}

#[derive(Debug, Clone)]
struct Memo {
    key: ViewState,
    projection: Vec<Issue>,
}

/// Issue set plus view state, with the projection kept in sync.
#[derive(Debug, Clone)]
pub struct Dashboard {
    issues: Vec<Issue>,
    state: ViewState,
    memo: Memo,
    recomputes: usize,
}

impl Dashboard {
    /// Build a controller in the default view state.
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self::with_state(issues, ViewState::default())
    }

    /// Build a controller starting from `state`.
    #[must_use]
    pub fn with_state(issues: Vec<Issue>, state: ViewState) -> Self {
        let projection = pipeline::project(&issues, &state);
        Self {
            issues,
            memo: Memo {
                key: state.clone(),
                projection,
            },
            state,
            recomputes: 1,
        }
    }

    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The filtered, sorted issues for the current state.
    #[must_use]
    pub fn projection(&self) -> &[Issue] {
        &self.memo.projection
    }

    #[must_use]
    pub fn first_result(&self) -> Option<&Issue> {
        self.memo.projection.first()
    }

    /// Title of the first result, or the empty placeholder.
    #[must_use]
    pub fn first_result_label(&self) -> &str {
        summary::first_result_label(&self.memo.projection)
    }

    /// How many times the projection has been computed, including construction.
    #[must_use]
    pub const fn recompute_count(&self) -> usize {
        self.recomputes
    }

    /// The sort control is only usable when no priority filter is active.
    #[must_use]
    pub const fn sort_enabled(&self) -> bool {
        self.state.priority_filter.is_all()
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.query = query.into();
        self.refresh();
    }

    pub fn push_query_char(&mut self, c: char) {
        self.state.query.push(c);
        self.refresh();
    }

    pub fn pop_query_char(&mut self) {
        self.state.query.pop();
        self.refresh();
    }

    pub fn clear_query(&mut self) {
        self.state.query.clear();
        self.refresh();
    }

    pub fn set_open_only(&mut self, open_only: bool) {
        self.state.open_only = open_only;
        self.refresh();
    }

    pub fn toggle_open_only(&mut self) {
        self.set_open_only(!self.state.open_only);
    }

    /// Change the priority filter. Locking the sort control does not re-sort.
    pub fn set_priority_filter(&mut self, filter: PriorityFilter) {
        self.state.priority_filter = filter;
        self.refresh();
    }

    pub fn cycle_priority_filter(&mut self) {
        self.set_priority_filter(self.state.priority_filter.next());
    }

    pub fn cycle_priority_filter_back(&mut self) {
        self.set_priority_filter(self.state.priority_filter.prev());
    }

    /// Change the sort direction.
    ///
    /// # Errors
    ///
    /// Returns [`SortLocked`] while a priority filter is active.
    pub fn set_sort_direction(&mut self, direction: SortDirection) -> Result<(), SortLocked> {
        if !self.sort_enabled() {
            return Err(SortLocked {
                filter: self.state.priority_filter,
            });
        }
        self.state.sort_direction = direction;
        self.refresh();
        Ok(())
    }

    /// Flip the sort direction.
    ///
    /// # Errors
    ///
    /// Returns [`SortLocked`] while a priority filter is active.
    pub fn toggle_sort_direction(&mut self) -> Result<(), SortLocked> {
        self.set_sort_direction(self.state.sort_direction.toggled())
    }

    /// Restore the default view state.
    pub fn reset(&mut self) {
        self.state = ViewState::default();
        self.refresh();
    }

    fn refresh(&mut self) {
        if self.memo.key == self.state {
            return;
        }
        self.memo.projection = pipeline::project(&self.issues, &self.state);
        self.memo.key = self.state.clone();
        self.recomputes += 1;
        debug!(
            query = %self.state.query,
            open_only = self.state.open_only,
            priority = %self.state.priority_filter,
            sort = %self.state.sort_direction,
            results = self.memo.projection.len(),
            "projection recomputed"
        );
    }
}
