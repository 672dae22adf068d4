//! Category analytics handlers for the todo insights server

use crate::TodoServerHandler;
use crate::analytics::{category_counts, category_users};
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Counts todos per inferred category across all users.
    pub async fn handle_category_counts(&self) -> McpResult<String> {
        let data = self.lock_data();
        let counts = category_counts(&data.todos, &self.categories);
        drop(data);

        Ok(formatting::format_category_counts(&counts))
    }

    /// Lists users that own at least one todo inferred to be in `category`.
    pub async fn handle_category_users(&self, category: String) -> McpResult<String> {
        let category = validation::require_category(&category)?;

        if self.categories.keywords(category).is_none() {
            tracing::debug!(category, "category not in keyword table");
        }

        let data = self.lock_data();
        let users = category_users(&data.todos, &data.users, &self.categories, category);
        Ok(formatting::format_users(category, &users))
    }

    /// Runs the categorizer on free text.
    pub async fn handle_categorize(&self, text: String) -> McpResult<String> {
        Ok(formatting::format_categories(&self.categories.categorize(&text)))
    }
}
