//! View-state flags shared by `idash tui` and `idash list`.

use clap::Args;
use issuedash_core::view::{PriorityFilter, SortDirection, ViewState};

#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Initial search text (matches title or assignee, case-insensitive).
    #[arg(long)]
    pub query: Option<String>,

    /// Show open issues only.
    #[arg(long, overrides_with = "no_open_only")]
    pub open_only: bool,

    /// Show closed issues too, even if the config sets `open_only`.
    #[arg(long, overrides_with = "open_only")]
    pub no_open_only: bool,

    /// Priority filter: all, low, medium, high.
    #[arg(long, value_name = "PRIORITY")]
    pub priority: Option<PriorityFilter>,

    /// Sort direction by priority: desc (high first) or asc.
    #[arg(long, value_name = "DIRECTION")]
    pub sort: Option<SortDirection>,
}

impl ViewArgs {
    /// Overlay the flags that were given on top of `base`.
    pub fn apply(&self, base: ViewState) -> ViewState {
        ViewState {
            query: self.query.clone().unwrap_or(base.query),
            open_only: if self.open_only {
                true
            } else if self.no_open_only {
                false
            } else {
                base.open_only
            },
            priority_filter: self.priority.unwrap_or(base.priority_filter),
            sort_direction: self.sort.unwrap_or(base.sort_direction),
        }
    }
}
