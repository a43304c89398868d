//! Text shown above the issue list.

use crate::model::issue::Issue;

/// Shown in place of a title when the projection is empty.
pub const EMPTY_PLACEHOLDER: &str = "—";

/// Title of the first projected issue, or [`EMPTY_PLACEHOLDER`].
#[must_use]
pub fn first_result_label(projection: &[Issue]) -> &str {
    projection
        .first()
        .map_or(EMPTY_PLACEHOLDER, |issue| issue.title.as_str())
}

/// `"1 result"`, otherwise `"N results"`.
#[must_use]
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{count} results")
    }
}
