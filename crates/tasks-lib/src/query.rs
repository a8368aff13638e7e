//! Filter and aggregation types for task queries.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::model::Task;

/// Which subset of tasks to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parse a filter name. Unrecognized names select everything.
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "active" => Self::Active,
            "completed" | "done" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Whether `task` belongs to this subset.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl From<&str> for FilterKind {
    fn from(s: &str) -> Self {
        Self::parse_lenient(s)
    }
}

/// Completion progress across the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Rounded completion percentage in `0..=100`.
    pub percentage: u8,
    pub completed_count: usize,
    pub total: usize,
}

impl Progress {
    /// Aggregate progress over `tasks`.
    ///
    /// Rounds half up. A collection that is not fully completed never reports
    /// 100, and an empty collection reports 0.
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed_count = tasks.iter().filter(|t| t.completed).count();
        Self {
            percentage: Self::percentage_of(completed_count, total),
            completed_count,
            total,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn percentage_of(completed: usize, total: usize) -> u8 {
        if total == 0 {
            return 0;
        }
        if completed >= total {
            return 100;
        }
        let (completed, total) = (completed as u128, total as u128);
        let rounded = (200 * completed + total) / (2 * total);
        // round-half-up can reach 100 for large totals; keep 100 for "all done"
        rounded.min(99) as u8
    }

    /// Whether every task is completed (and there is at least one).
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.total > 0 && self.completed_count == self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% complete ({}/{})",
            self.percentage, self.completed_count, self.total
        )
    }
}
