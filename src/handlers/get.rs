//! Get handler for the todo insights server

use crate::TodoServerHandler;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Looks up one todo by ID and reports its derived values.
    pub async fn handle_get(&self, id: u32, today: Option<String>) -> McpResult<String> {
        let today = self.resolve_today(today)?;

        let data = self.lock_data();
        let enriched = data.enriched(id, today, &self.categories);
        drop(data);

        match enriched {
            Some(enriched) => Ok(formatting::format_todo(&enriched)),
            None => bail_public!(_, "Todo {} not found", id),
        }
    }
}
