//! Reload handler for the todo insights server

use crate::TodoServerHandler;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Re-reads the data file and swaps it in; the old data stays on failure.
    pub async fn handle_reload(&self) -> McpResult<String> {
        let fresh = match self.storage.load() {
            Ok(fresh) => fresh,
            Err(e) => {
                tracing::error!(error = %e, "reload failed");
                bail_public!(_, "Failed to reload: {:#}", e);
            }
        };

        let problems = fresh.integrity_problems();
        let mut result = format!(
            "Reloaded {} todo(s) and {} user(s)",
            fresh.todos.len(),
            fresh.users.len()
        );
        if !problems.is_empty() {
            result.push_str(&format!("\nWarnings:\n- {}", problems.join("\n- ")));
        }

        *self.lock_data() = fresh;
        Ok(result)
    }
}
