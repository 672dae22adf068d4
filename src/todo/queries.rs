//! Enriched listing over TodoData
//!
//! Attaches the derived deadline, status and inferred categories to stored
//! todos and applies the list filters. Pagination is left to the caller.

use super::todo_data::TodoData;
use super::todo_item::Todo;
use crate::categories::CategoryTable;
use crate::status::{TodoStatus, classify_status};
use crate::urgency::{UrgencyTier, deadline_for};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// A todo together with everything derived from it for one reference day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedTodo {
    pub todo: Todo,
    pub days_left: Option<i64>,
    pub deadline_urgency: UrgencyTier,
    pub status: TodoStatus,
    /// Labels inferred from title and description
    pub categories: BTreeSet<String>,
}

impl EnrichedTodo {
    /// Derive deadline, status and categories for `todo`
    pub fn new(todo: Todo, today: NaiveDate, table: &CategoryTable) -> Self {
        let deadline = deadline_for(&todo, today);
        let status = classify_status(&todo, today);
        let categories = table.categorize(&todo.categorization_text());
        Self {
            todo,
            days_left: deadline.days_left,
            deadline_urgency: deadline.urgency,
            status,
            categories,
        }
    }
}

/// Filters for `TodoData::list`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Exact match against the stored `category` column (trimmed; blank means no filter)
    pub category: Option<String>,
    /// Status bucket on the reference day
    pub status: Option<TodoStatus>,
    /// Owning user
    pub user_id: Option<u32>,
}

impl ListQuery {
    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    fn matches(&self, todo: &Todo) -> bool {
        if let Some(user_id) = self.user_id
            && todo.user_id != user_id
        {
            return false;
        }

        match self.category_filter() {
            Some(category) => todo.category.as_deref() == Some(category),
            None => true,
        }
    }
}

impl TodoData {
    /// List todos matching `query`, enriched for `today`, in stored order
    ///
    /// # Arguments
    /// * `query` - Category, status and owner filters
    /// * `today` - Reference day for deadline and status
    /// * `table` - Keyword table used to infer categories
    pub fn list(
        &self,
        query: &ListQuery,
        today: NaiveDate,
        table: &CategoryTable,
    ) -> Vec<EnrichedTodo> {
        self.todos
            .iter()
            .filter(|todo| query.matches(todo))
            .map(|todo| EnrichedTodo::new(todo.clone(), today, table))
            .filter(|enriched| query.status.is_none_or(|status| enriched.status == status))
            .collect()
    }

    /// Find one todo and enrich it for `today`
    pub fn enriched(&self, id: u32, today: NaiveDate, table: &CategoryTable) -> Option<EnrichedTodo> {
        self.find_todo(id)
            .map(|todo| EnrichedTodo::new(todo.clone(), today, table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_data() -> TodoData {
        let mut data = TodoData::new();

        let mut t1 = Todo::new(1, "Fix login bug in API", 1);
        t1.category = Some("Coding".to_string());
        t1.due_date = Some(ymd(2024, 1, 14));
        data.todos.push(t1);

        let mut t2 = Todo::new(2, "Quarterly report", 2);
        t2.category = Some("Work".to_string());
        t2.due_date = Some(ymd(2024, 1, 9));
        data.todos.push(t2);

        let mut t3 = Todo::new(3, "Gym", 1);
        t3.category = Some("Health".to_string());
        t3.completed = true;
        t3.due_date = Some(ymd(2024, 1, 5));
        data.todos.push(t3);

        let mut t4 = Todo::new(4, "Plan trip", 1);
        t4.start_date = Some(ymd(2024, 2, 1));
        data.todos.push(t4);

        data
    }

    #[test]
    fn test_list_enriches_every_todo() {
        let data = sample_data();
        let table = CategoryTable::default();
        let today = ymd(2024, 1, 10);

        let listed = data.list(&ListQuery::default(), today, &table);
        assert_eq!(listed.len(), 4);

        assert_eq!(listed[0].days_left, Some(4));
        assert_eq!(listed[0].deadline_urgency, UrgencyTier::safe);
        assert_eq!(listed[0].status, TodoStatus::in_progress);
        assert!(listed[0].categories.contains("Coding"));

        assert_eq!(listed[1].days_left, Some(-1));
        assert_eq!(listed[1].deadline_urgency, UrgencyTier::urgent);
        assert_eq!(listed[1].status, TodoStatus::overdue);

        assert_eq!(listed[2].days_left, None);
        assert_eq!(listed[2].deadline_urgency, UrgencyTier::none);
        assert_eq!(listed[2].status, TodoStatus::completed);

        assert_eq!(listed[3].status, TodoStatus::upcoming);
        assert_eq!(listed[3].deadline_urgency, UrgencyTier::none);
    }

    #[test]
    fn test_list_filters_by_stored_category() {
        let data = sample_data();
        let table = CategoryTable::default();
        let today = ymd(2024, 1, 10);

        let query = ListQuery {
            category: Some("  Work ".to_string()),
            ..Default::default()
        };
        let ids: Vec<u32> = data.list(&query, today, &table).iter().map(|e| e.todo.id).collect();
        assert_eq!(ids, vec![2]);

        // Blank category means no filter
        let query = ListQuery {
            category: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(data.list(&query, today, &table).len(), 4);
    }

    #[test]
    fn test_list_filters_by_status_and_user() {
        let data = sample_data();
        let table = CategoryTable::default();
        let today = ymd(2024, 1, 10);

        let query = ListQuery {
            status: Some(TodoStatus::in_progress),
            user_id: Some(1),
            ..Default::default()
        };
        let ids: Vec<u32> = data.list(&query, today, &table).iter().map(|e| e.todo.id).collect();
        assert_eq!(ids, vec![1]);

        let query = ListQuery {
            user_id: Some(2),
            ..Default::default()
        };
        assert_eq!(data.list(&query, today, &table).len(), 1);
    }

    #[test]
    fn test_enriched_single_todo() {
        let data = sample_data();
        let table = CategoryTable::default();
        let today = ymd(2024, 1, 10);

        let enriched = data.enriched(2, today, &table).unwrap();
        assert_eq!(enriched.status, TodoStatus::overdue);
        assert!(enriched.categories.contains("Work"));
        assert!(data.enriched(99, today, &table).is_none());
    }
}
