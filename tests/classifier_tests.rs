//! Behavior of the pure classifiers through the public API
mod common;

use chrono::Duration;
use common::{today, todo_due, ymd};
use todo_insights::{
    CategoryTable, TodoStats, TodoStatus, UrgencyTier, categorize, classify_days_left,
    classify_status, deadline_for,
};

// Every offset in a band maps to that band's tier
#[test]
fn test_urgency_bands() {
    for offset in -10..=20 {
        let todo = todo_due(1, Some(today() + Duration::days(offset)));
        let deadline = deadline_for(&todo, today());

        let expected = match offset {
            4..=6 => UrgencyTier::safe,
            2..=3 => UrgencyTier::moderate,
            i64::MIN..=1 => UrgencyTier::urgent,
            _ => UrgencyTier::none,
        };
        assert_eq!(deadline.days_left, Some(offset));
        assert_eq!(deadline.urgency, expected, "offset {}", offset);
    }
}

// Seven or more days out is left unclassified
#[test]
fn test_week_out_reports_none() {
    assert_eq!(classify_days_left(Some(7)), UrgencyTier::none);
    assert_eq!(classify_days_left(Some(365)), UrgencyTier::none);
    assert_eq!(classify_days_left(None), UrgencyTier::none);
}

// Completion beats any due date
#[test]
fn test_completed_always_none() {
    for offset in [-5, 0, 3, 5, 10] {
        let mut todo = todo_due(1, Some(today() + Duration::days(offset)));
        todo.completed = true;
        let deadline = deadline_for(&todo, today());
        assert_eq!(deadline.days_left, None);
        assert_eq!(deadline.urgency, UrgencyTier::none);
        assert_eq!(classify_status(&todo, today()), TodoStatus::completed);
    }
}

// Scenario from 2024-01-10
#[test]
fn test_reference_scenario() {
    let safe = deadline_for(&todo_due(1, Some(ymd(2024, 1, 14))), today());
    assert_eq!((safe.days_left, safe.urgency), (Some(4), UrgencyTier::safe));

    let past = deadline_for(&todo_due(2, Some(ymd(2024, 1, 9))), today());
    assert_eq!((past.days_left, past.urgency), (Some(-1), UrgencyTier::urgent));

    let undated = deadline_for(&todo_due(3, None), today());
    assert_eq!((undated.days_left, undated.urgency), (None, UrgencyTier::none));
}

// Categorizer dedupes keyword hits within one label
#[test]
fn test_categorize_login_bug() {
    let result = categorize("Fix login bug in API", &CategoryTable::default());
    assert_eq!(result.into_iter().collect::<Vec<_>>(), vec!["Coding".to_string()]);
}

// A custom table replaces the built-in one entirely
#[test]
fn test_custom_table() {
    let table = CategoryTable::new(vec![("Garden", vec!["weed", "prune"])]);
    assert!(categorize("Fix login bug in API", &table).is_empty());
    assert!(categorize("PRUNE roses", &table).contains("Garden"));
}

// Stats buckets add up
#[test]
fn test_stats_add_up() {
    let mut todos = Vec::new();
    for offset in -3..=3 {
        todos.push(todo_due(todos.len() as u32, Some(today() + Duration::days(offset))));
    }
    let mut done = todo_due(99, None);
    done.completed = true;
    todos.push(done);

    let stats = TodoStats::collect(&todos, today());
    assert_eq!(stats.total, 8);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.overdue, 3);
    assert_eq!(stats.in_progress, 4);
    assert_eq!(stats.upcoming, 0);
    assert_eq!(stats.pending, 7);
}
