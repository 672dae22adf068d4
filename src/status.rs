//! Status filter
//!
//! Partitions todos into `completed`, `overdue`, `upcoming` and `in_progress`
//! relative to a caller-supplied reference day.

use crate::todo::Todo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status bucket of a todo on a given day
///
/// Uses snake_case naming to match the serialized form.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TodoStatus {
    /// Marked done (checked first, regardless of dates)
    completed,
    /// Due date is before today
    overdue,
    /// Start date is after today
    upcoming,
    /// Started, not overdue, not completed
    in_progress,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::completed => "completed",
            TodoStatus::overdue => "overdue",
            TodoStatus::upcoming => "upcoming",
            TodoStatus::in_progress => "in_progress",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(TodoStatus::completed),
            "overdue" => Ok(TodoStatus::overdue),
            "upcoming" => Ok(TodoStatus::upcoming),
            "in_progress" => Ok(TodoStatus::in_progress),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: completed, overdue, upcoming, in_progress",
                s
            )),
        }
    }
}

/// Classify a todo relative to `today`
///
/// Order matters: completed, then overdue, then upcoming. A todo without a
/// start date counts as started.
pub fn classify_status(todo: &Todo, today: NaiveDate) -> TodoStatus {
    if todo.completed {
        TodoStatus::completed
    } else if todo.due_date.is_some_and(|due| due < today) {
        TodoStatus::overdue
    } else if todo.start_date.is_some_and(|start| start > today) {
        TodoStatus::upcoming
    } else {
        TodoStatus::in_progress
    }
}

/// Keep only the todos in the given bucket, preserving order
pub fn filter_by_status<'a, I>(todos: I, status: TodoStatus, today: NaiveDate) -> Vec<&'a Todo>
where
    I: IntoIterator<Item = &'a Todo>,
{
    todos
        .into_iter()
        .filter(|todo| classify_status(todo, today) == status)
        .collect()
}

/// Count summary over a set of todos
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoStats {
    pub total: usize,
    pub completed: usize,
    /// Everything not completed (`overdue + upcoming + in_progress`)
    pub pending: usize,
    pub overdue: usize,
    pub upcoming: usize,
    pub in_progress: usize,
}

impl TodoStats {
    /// Tally todos into status buckets relative to `today`
    pub fn collect<'a, I>(todos: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Todo>,
    {
        let mut stats = TodoStats::default();
        for todo in todos {
            stats.total += 1;
            match classify_status(todo, today) {
                TodoStatus::completed => stats.completed += 1,
                TodoStatus::overdue => stats.overdue += 1,
                TodoStatus::upcoming => stats.upcoming += 1,
                TodoStatus::in_progress => stats.in_progress += 1,
            }
        }
        stats.pending = stats.total - stats.completed;
        stats
    }
}
