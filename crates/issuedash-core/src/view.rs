//! User-controlled view state: search query, open-only toggle, priority
//! filter and sort direction.

use crate::model::issue::{Issue, ParseEnumError, Priority, Status, normalize};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Priority selector. `All` disables priority filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityFilter {
    #[default]
    All,
    Low,
    Medium,
    High,
}

impl PriorityFilter {
    /// Options in selector order.
    pub const OPTIONS: [Self; 4] = [Self::All, Self::Low, Self::Medium, Self::High];

    const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// The priority this filter pins, or `None` for `All`.
    #[must_use]
    pub const fn priority(self) -> Option<Priority> {
        match self {
            Self::All => None,
            Self::Low => Some(Priority::Low),
            Self::Medium => Some(Priority::Medium),
            Self::High => Some(Priority::High),
        }
    }

    #[must_use]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    /// Next option, wrapping `High -> All`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Low,
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::All,
        }
    }

    /// Previous option, wrapping `All -> High`.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::High,
            Self::Low => Self::All,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => Self::Low,
            Priority::Medium => Self::Medium,
            Priority::High => Self::High,
        }
    }
}

/// Direction of the priority sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    /// High priority first.
    #[default]
    Desc,
}

impl SortDirection {
    pub const OPTIONS: [Self; 2] = [Self::Desc, Self::Asc];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Asc => "Low → High",
            Self::Desc => "High → Low",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// The complete set of user selections the projection depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub query: String,
    pub open_only: bool,
    pub priority_filter: PriorityFilter,
    pub sort_direction: SortDirection,
}

impl ViewState {
    /// True when no filter narrows the issue set.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        !self.open_only && self.priority_filter.is_all() && self.query.trim().is_empty()
    }

    /// True if the issue passes every active predicate (status, text, priority).
    #[must_use]
    pub fn matches(&self, issue: &Issue) -> bool {
        if self.open_only && issue.status != Status::Open {
            return false;
        }
        let needle = self.normalized_query();
        if !needle.is_empty()
            && !issue.title.to_lowercase().contains(&needle)
            && !issue.assignee.to_lowercase().contains(&needle)
        {
            return false;
        }
        self.priority_filter
            .priority()
            .is_none_or(|priority| issue.priority == priority)
    }

    /// The query as it is compared: trimmed and lower-cased.
    #[must_use]
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParseEnumError {
                expected: "priority filter",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseEnumError {
                expected: "sort direction",
                got: s.to_string(),
            }),
        }
    }
}
