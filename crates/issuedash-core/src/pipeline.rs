//! Filter/sort pipeline that turns the issue set and a [`ViewState`] into the
//! derived projection.
//!
//! The pipeline is a pure function: it reads the source slice, copies the
//! retained issues, and sorts the copy. Equal priorities keep their source
//! order in both directions because the comparator is flipped, never the
//! output sequence.

use crate::model::issue::Issue;
use crate::view::{SortDirection, ViewState};
use std::cmp::Ordering;

/// Compute the projection for `state` over `issues`.
///
/// Returns a new vec; `issues` is not modified.
#[must_use]
pub fn project(issues: &[Issue], state: &ViewState) -> Vec<Issue> {
    let mut retained: Vec<Issue> = issues
        .iter()
        .filter(|issue| state.matches(issue))
        .cloned()
        .collect();
    sort_issues(&mut retained, state.sort_direction);
    retained
}

/// Stable sort by priority weight in the given direction.
pub fn sort_issues(issues: &mut [Issue], direction: SortDirection) {
    issues.sort_by(|a, b| compare_priority(a, b, direction));
}

fn compare_priority(a: &Issue, b: &Issue, direction: SortDirection) -> Ordering {
    let by_weight = a.priority.weight().cmp(&b.priority.weight());
    match direction {
        SortDirection::Asc => by_weight,
        SortDirection::Desc => by_weight.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::issue::{Priority, Status};
    use crate::seed;
    use crate::view::PriorityFilter;
    use proptest::prelude::*;

    fn ids(issues: &[Issue]) -> Vec<u32> {
        issues.iter().map(|i| i.id).collect()
    }

    fn state(query: &str, open_only: bool, priority_filter: PriorityFilter) -> ViewState {
        ViewState {
            query: query.to_string(),
            open_only,
            priority_filter,
            sort_direction: SortDirection::Desc,
        }
    }

    // -----------------------------------------------------------------------
    // Documented scenarios
    // -----------------------------------------------------------------------

    #[test]
    fn default_state_sorts_high_first_with_stable_ties() {
        let issues = seed::issues();
        let out = project(&issues, &ViewState::default());
        assert_eq!(ids(&out), vec![201, 204, 203, 205, 202, 206]);
    }

    #[test]
    fn ascending_keeps_ties_in_source_order() {
        let issues = seed::issues();
        let asc = ViewState {
            sort_direction: SortDirection::Asc,
            ..ViewState::default()
        };
        assert_eq!(ids(&project(&issues, &asc)), vec![202, 206, 203, 205, 201, 204]);
    }

    #[test]
    fn query_sam_returns_both_low_issues_in_source_order() {
        let issues = seed::issues();
        let out = project(&issues, &state("sam", false, PriorityFilter::All));
        assert_eq!(ids(&out), vec![202, 206]);
    }

    #[test]
    fn open_high_keeps_open_high_issues_only() {
        let issues = seed::issues();
        let out = project(&issues, &state("", true, PriorityFilter::High));
        assert_eq!(ids(&out), vec![201, 204]);

        let out = project(&issues, &state("token", true, PriorityFilter::High));
        assert_eq!(ids(&out), vec![204]);
        assert_eq!(out[0].title, "Refactor token refresh");
    }

    #[test]
    fn unmatched_query_is_empty() {
        let issues = seed::issues();
        let out = project(&issues, &state("zzz", false, PriorityFilter::All));
        assert!(out.is_empty());
    }

    #[test]
    fn query_matches_assignee_case_insensitively() {
        let issues = seed::issues();
        let out = project(&issues, &state("MORGAN", false, PriorityFilter::All));
        assert_eq!(ids(&out), vec![204]);
    }

    #[test]
    fn open_only_drops_closed_issues() {
        let issues = seed::issues();
        let out = project(&issues, &state("", true, PriorityFilter::All));
        assert_eq!(ids(&out), vec![201, 204, 203, 206]);
        assert!(out.iter().all(|i| i.status == Status::Open));
    }

    #[test]
    fn priority_filter_ignores_sort_direction() {
        let issues = seed::issues();
        let desc = state("", false, PriorityFilter::Medium);
        let asc = ViewState {
            sort_direction: SortDirection::Asc,
            ..desc.clone()
        };
        assert_eq!(ids(&project(&issues, &desc)), vec![203, 205]);
        assert_eq!(project(&issues, &desc), project(&issues, &asc));
    }

    #[test]
    fn source_slice_is_not_mutated() {
        let issues = seed::issues();
        let before = issues.clone();
        let _ = project(&issues, &ViewState::default());
        let _ = project(
            &issues,
            &ViewState {
                sort_direction: SortDirection::Asc,
                ..ViewState::default()
            },
        );
        assert_eq!(issues, before);
    }

    #[test]
    fn sort_issues_orders_by_weight() {
        let mut issues = vec![
            Issue::new(1, "a", Status::Open, Priority::Medium, "x"),
            Issue::new(2, "b", Status::Open, Priority::High, "x"),
            Issue::new(3, "c", Status::Open, Priority::Low, "x"),
        ];
        sort_issues(&mut issues, SortDirection::Desc);
        assert_eq!(ids(&issues), vec![2, 1, 3]);
        sort_issues(&mut issues, SortDirection::Asc);
        assert_eq!(ids(&issues), vec![3, 1, 2]);
    }

    // -----------------------------------------------------------------------
    // Properties over all view states
    // -----------------------------------------------------------------------

    fn arb_query() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("sam".to_string()),
            Just("FIX".to_string()),
            Just(" re ".to_string()),
            Just("zzz".to_string()),
            "[a-zA-Z ]{0,4}",
        ]
    }

    fn arb_state() -> impl Strategy<Value = ViewState> {
        (
            arb_query(),
            any::<bool>(),
            prop::sample::select(PriorityFilter::OPTIONS.to_vec()),
            prop::sample::select(SortDirection::OPTIONS.to_vec()),
        )
            .prop_map(|(query, open_only, priority_filter, sort_direction)| ViewState {
                query,
                open_only,
                priority_filter,
                sort_direction,
            })
    }

    fn has_priority_ties(issues: &[Issue]) -> bool {
        issues
            .iter()
            .enumerate()
            .any(|(i, a)| issues[i + 1..].iter().any(|b| a.priority == b.priority))
    }

    proptest! {
        #[test]
        fn result_is_subset_satisfying_every_predicate(state in arb_state()) {
            let issues = seed::issues();
            let out = project(&issues, &state);
            for issue in &out {
                prop_assert!(issues.contains(issue));
                prop_assert!(state.matches(issue));
            }
            let expected = issues.iter().filter(|i| state.matches(i)).count();
            prop_assert_eq!(out.len(), expected);
        }

        #[test]
        fn equal_priorities_keep_source_order(state in arb_state()) {
            let issues = seed::issues();
            let out = project(&issues, &state);
            let position = |id: u32| issues.iter().position(|i| i.id == id);
            for (i, a) in out.iter().enumerate() {
                for b in &out[i + 1..] {
                    if a.priority == b.priority {
                        prop_assert!(position(a.id) < position(b.id));
                    }
                }
            }
        }

        #[test]
        fn ascending_reverses_descending_without_ties(state in arb_state()) {
            let issues = seed::issues();
            let desc = ViewState { sort_direction: SortDirection::Desc, ..state.clone() };
            let asc = ViewState { sort_direction: SortDirection::Asc, ..state };
            let desc_out = project(&issues, &desc);
            if !has_priority_ties(&desc_out) {
                let mut reversed = desc_out;
                reversed.reverse();
                prop_assert_eq!(project(&issues, &asc), reversed);
            }
        }

        #[test]
        fn pinned_priority_order_is_direction_independent(
            state in arb_state(),
            pinned in prop::sample::select(Priority::ALL.to_vec()),
        ) {
            let state = ViewState { priority_filter: pinned.into(), ..state };
            let issues = seed::issues();
            let flipped = ViewState {
                sort_direction: state.sort_direction.toggled(),
                ..state.clone()
            };
            prop_assert_eq!(project(&issues, &state), project(&issues, &flipped));
        }
    }
}
