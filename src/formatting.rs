//! Formatting helper functions for the todo insights server
//!
//! This module renders query results as the plain text returned by the tools.

use crate::pagination::Page;
use crate::status::TodoStats;
use crate::todo::{EnrichedTodo, User};
use std::collections::{BTreeMap, BTreeSet};

fn join_labels(labels: &BTreeSet<String>) -> String {
    labels.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Format a single enriched todo as an indented block
pub fn format_todo(enriched: &EnrichedTodo) -> String {
    let todo = &enriched.todo;
    let days_left = enriched
        .days_left
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut result = format!(
        "- [{}] {} (status: {}, urgency: {}, days left: {})\n",
        todo.id, todo.title, enriched.status, enriched.deadline_urgency, days_left
    );

    if let Some(ref description) = todo.description {
        result.push_str(&format!("  Description: {}\n", description));
    }
    if let Some(ref category) = todo.category {
        result.push_str(&format!("  Category: {}\n", category));
    }
    if !enriched.categories.is_empty() {
        result.push_str(&format!(
            "  Inferred categories: {}\n",
            join_labels(&enriched.categories)
        ));
    }
    if let Some(ref date) = todo.start_date {
        result.push_str(&format!("  Start date: {}\n", date));
    }
    if let Some(ref date) = todo.due_date {
        result.push_str(&format!("  Due date: {}\n", date));
    }
    result.push_str(&format!("  User: {}\n", todo.user_id));

    result
}

/// Format one page of enriched todos
///
/// # Arguments
/// * `page` - The page to render
///
/// # Returns
/// Header with paging position followed by one block per todo
pub fn format_todo_page(page: &Page<EnrichedTodo>) -> String {
    let pagination = &page.pagination;
    if pagination.total == 0 {
        return "No todos found".to_string();
    }

    let mut result = format!(
        "Found {} todo(s) (page {}/{}, {} per page):\n\n",
        pagination.total, pagination.page, pagination.total_pages, pagination.per_page
    );
    if page.items.is_empty() {
        result.push_str("No todos on this page\n");
    }
    for enriched in &page.items {
        result.push_str(&format_todo(enriched));
    }

    result
}

/// Format status counts
pub fn format_stats(stats: &TodoStats, scope: &str) -> String {
    format!(
        "Todo statistics ({}):\n  Total: {}\n  Completed: {}\n  Pending: {}\n  Overdue: {}\n  Upcoming: {}\n  In progress: {}\n",
        scope,
        stats.total,
        stats.completed,
        stats.pending,
        stats.overdue,
        stats.upcoming,
        stats.in_progress
    )
}

/// Format per-category todo counts, largest first
pub fn format_category_counts(counts: &BTreeMap<String, usize>) -> String {
    if counts.is_empty() {
        return "No categorized todos found".to_string();
    }

    let mut sorted: Vec<(&String, &usize)> = counts.iter().collect();
    // Stable sort keeps label order among equal counts
    sorted.sort_by(|a, b| b.1.cmp(a.1));

    let mut result = String::from("Todos per category:\n");
    for (label, count) in sorted {
        result.push_str(&format!("  {}: {}\n", label, count));
    }
    result
}

/// Format the users found for a category
pub fn format_users(category: &str, users: &[&User]) -> String {
    if users.is_empty() {
        return format!("No users have todos in category '{}'", category);
    }

    let mut result = format!(
        "Found {} user(s) with todos in category '{}':\n",
        users.len(),
        category
    );
    for user in users {
        result.push_str(&format!("- [{}] {} <{}>\n", user.id, user.name, user.email));
    }
    result
}

/// Format the labels assigned to free text
pub fn format_categories(labels: &BTreeSet<String>) -> String {
    if labels.is_empty() {
        "No matching categories".to_string()
    } else {
        format!("Categories: {}", join_labels(labels))
    }
}
