//! Validation helper functions for the todo insights server
//!
//! Tool parameters arrive as loosely typed values. They are checked here once,
//! before anything reaches the classifiers.

use crate::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE, PageRequest};
use crate::status::TodoStatus;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate status filter parameter
///
/// # Arguments
/// * `status_str` - Status string to parse
///
/// # Returns
/// Result containing parsed TodoStatus or error
pub fn parse_status_filter(status_str: &str) -> McpResult<TodoStatus> {
    status_str.trim().parse::<TodoStatus>().map_err(|_| {
        invalid_params(format!(
            "Invalid status '{}'. Valid statuses: completed, overdue, upcoming, in_progress",
            status_str
        ))
    })
}

/// Parse and validate date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_date_param(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Build a page request, rejecting zero values
///
/// Missing values fall back to page 1 and 10 items per page.
pub fn parse_page_request(page: Option<u32>, per_page: Option<u32>) -> McpResult<PageRequest> {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);

    if page == 0 {
        return Err(invalid_params(
            "Invalid page 0. Pages start at 1".to_string(),
        ));
    }
    if per_page == 0 {
        return Err(invalid_params(
            "Invalid per_page 0. Use a page size of at least 1".to_string(),
        ));
    }

    Ok(PageRequest { page, per_page })
}

/// Require a non-blank category label, returning it trimmed
pub fn require_category(category: &str) -> McpResult<&str> {
    let category = category.trim();
    if category.is_empty() {
        return Err(invalid_params("Category is required".to_string()));
    }
    Ok(category)
}
