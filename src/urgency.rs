//! Deadline urgency classifier
//!
//! Maps a due date and a caller-supplied reference day to a discrete urgency
//! tier. Both inputs are calendar days so time of day never affects the result.

use crate::todo::Todo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Urgency of a todo's deadline
///
/// Uses snake_case naming to match the serialized form.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyTier {
    /// Due in 4 to 6 days
    safe,
    /// Due in 2 or 3 days
    moderate,
    /// Due today, tomorrow, or already overdue
    urgent,
    /// No due date, completed, or due 7 or more days out
    none,
}

impl UrgencyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::safe => "safe",
            UrgencyTier::moderate => "moderate",
            UrgencyTier::urgent => "urgent",
            UrgencyTier::none => "none",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safe" => Ok(UrgencyTier::safe),
            "moderate" => Ok(UrgencyTier::moderate),
            "urgent" => Ok(UrgencyTier::urgent),
            "none" => Ok(UrgencyTier::none),
            _ => Err(format!(
                "Invalid urgency '{}'. Valid options are: safe, moderate, urgent, none",
                s
            )),
        }
    }
}

/// Whole days from `today` until `due`
///
/// Negative once the due day has passed, `None` without a due date.
pub fn days_left(due: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    due.map(|due| (due - today).num_days())
}

/// Classify a day count into an urgency tier
///
/// Bands are closed below and open above. Counts of 7 or more fall through to
/// `none`; the UI's color logic relies on that gap.
pub fn classify_days_left(days_left: Option<i64>) -> UrgencyTier {
    match days_left {
        None => UrgencyTier::none,
        Some(d) if (4..=6).contains(&d) => UrgencyTier::safe,
        Some(d) if (2..4).contains(&d) => UrgencyTier::moderate,
        Some(d) if (0..2).contains(&d) => UrgencyTier::urgent,
        Some(d) if d < 0 => UrgencyTier::urgent,
        Some(_) => UrgencyTier::none,
    }
}

/// Derived deadline information for one todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub days_left: Option<i64>,
    pub urgency: UrgencyTier,
}

/// Compute the deadline of a todo relative to `today`
///
/// Completion overrides the date math: a completed todo has no days left and
/// urgency `none` even when its due date has passed.
pub fn deadline_for(todo: &Todo, today: NaiveDate) -> Deadline {
    if todo.completed {
        return Deadline {
            days_left: None,
            urgency: UrgencyTier::none,
        };
    }

    let days_left = days_left(todo.due_date, today);
    Deadline {
        days_left,
        urgency: classify_days_left(days_left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn todo_due(due: Option<NaiveDate>, completed: bool) -> Todo {
        let mut todo = Todo::new(1, "Test", 1);
        todo.due_date = due;
        todo.completed = completed;
        todo
    }

    #[test]
    fn test_tiers_for_each_offset() {
        let today = ymd(2024, 1, 10);
        let expected = [
            (-30, UrgencyTier::urgent),
            (-1, UrgencyTier::urgent),
            (0, UrgencyTier::urgent),
            (1, UrgencyTier::urgent),
            (2, UrgencyTier::moderate),
            (3, UrgencyTier::moderate),
            (4, UrgencyTier::safe),
            (5, UrgencyTier::safe),
            (6, UrgencyTier::safe),
            (7, UrgencyTier::none),
            (30, UrgencyTier::none),
        ];

        for (offset, tier) in expected {
            let due = today + Duration::days(offset);
            let deadline = deadline_for(&todo_due(Some(due), false), today);
            assert_eq!(deadline.days_left, Some(offset), "offset {}", offset);
            assert_eq!(deadline.urgency, tier, "offset {}", offset);
        }
    }

    #[test]
    fn test_concrete_dates() {
        let today = ymd(2024, 1, 10);

        let safe = deadline_for(&todo_due(Some(ymd(2024, 1, 14)), false), today);
        assert_eq!(safe.days_left, Some(4));
        assert_eq!(safe.urgency, UrgencyTier::safe);

        let past = deadline_for(&todo_due(Some(ymd(2024, 1, 9)), false), today);
        assert_eq!(past.days_left, Some(-1));
        assert_eq!(past.urgency, UrgencyTier::urgent);

        let undated = deadline_for(&todo_due(None, false), today);
        assert_eq!(undated.days_left, None);
        assert_eq!(undated.urgency, UrgencyTier::none);
    }

    #[test]
    fn test_completed_overrides_overdue() {
        let today = ymd(2024, 1, 10);
        let deadline = deadline_for(&todo_due(Some(ymd(2024, 1, 5)), true), today);
        assert_eq!(deadline.days_left, None);
        assert_eq!(deadline.urgency, UrgencyTier::none);
    }

    #[test]
    fn test_completed_without_due_date() {
        let deadline = deadline_for(&todo_due(None, true), ymd(2024, 1, 10));
        assert_eq!(deadline.days_left, None);
        assert_eq!(deadline.urgency, UrgencyTier::none);
    }

    #[test]
    fn test_days_left_crosses_month_and_year() {
        assert_eq!(days_left(Some(ymd(2024, 3, 1)), ymd(2024, 2, 28)), Some(2));
        assert_eq!(days_left(Some(ymd(2025, 1, 2)), ymd(2024, 12, 30)), Some(3));
        assert_eq!(days_left(None, ymd(2024, 2, 28)), None);
    }

    #[test]
    fn test_urgency_string_round_trip() {
        for tier in [
            UrgencyTier::safe,
            UrgencyTier::moderate,
            UrgencyTier::urgent,
            UrgencyTier::none,
        ] {
            assert_eq!(tier.to_string().parse::<UrgencyTier>(), Ok(tier));
        }
        assert!("red".parse::<UrgencyTier>().is_err());
    }
}
