//! List handler for the todo insights server

use crate::TodoServerHandler;
use crate::formatting;
use crate::pagination::paginate;
use crate::todo::ListQuery;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Handles list/filter operations - enriches, filters and paginates todos for display.
    pub async fn handle_list(
        &self,
        status: Option<String>,
        category: Option<String>,
        user_id: Option<u32>,
        page: Option<u32>,
        per_page: Option<u32>,
        today: Option<String>,
    ) -> McpResult<String> {
        // Parse and validate status filter (blank means no filter)
        let status_filter = match status.as_deref().map(str::trim) {
            Some(status_str) if !status_str.is_empty() => {
                Some(validation::parse_status_filter(status_str)?)
            }
            _ => None,
        };

        let page_request = validation::parse_page_request(page, per_page)?;
        let today = self.resolve_today(today)?;

        let query = ListQuery {
            category,
            status: status_filter,
            user_id,
        };

        let data = self.lock_data();
        let todos = data.list(&query, today, &self.categories);
        drop(data);

        tracing::debug!(?query, %today, matched = todos.len(), "list");

        let page = paginate(todos, page_request);
        Ok(formatting::format_todo_page(&page))
    }
}
