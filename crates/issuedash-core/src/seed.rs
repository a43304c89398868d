//! Built-in issue set shown by the dashboard.

use crate::model::issue::{Issue, Priority, Status};

/// The fixed issue list, in display-independent source order.
///
/// Source order matters: it is the tie-break for equal priorities.
#[must_use]
pub fn issues() -> Vec<Issue> {
    vec![
        Issue::new(
            201,
            "Add pagination to orders list",
            Status::Open,
            Priority::High,
            "alex",
        ),
        Issue::new(
            202,
            "Fix alignment of profile avatar",
            Status::Closed,
            Priority::Low,
            "sam",
        ),
        Issue::new(
            203,
            "Improve keyboard nav in sidebar",
            Status::Open,
            Priority::Medium,
            "casey",
        ),
        Issue::new(
            204,
            "Refactor token refresh",
            Status::Open,
            Priority::High,
            "morgan",
        ),
        Issue::new(
            205,
            "Migrate modals to accessible API",
            Status::Closed,
            Priority::Medium,
            "riley",
        ),
        Issue::new(
            206,
            "Optimize bundle split",
            Status::Open,
            Priority::Low,
            "sam",
        ),
    ]
}
