//! Stats handler for the todo insights server

use crate::TodoServerHandler;
use crate::formatting;
use crate::status::TodoStats;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Counts todos per status bucket, optionally for a single owner.
    pub async fn handle_stats(&self, user_id: Option<u32>, today: Option<String>) -> McpResult<String> {
        let today = self.resolve_today(today)?;

        let data = self.lock_data();
        let (stats, scope) = match user_id {
            Some(user_id) => {
                let scope = match data.find_user(user_id) {
                    Some(user) => format!("user {} {}", user.id, user.name),
                    None => format!("user {}", user_id),
                };
                (TodoStats::collect(data.todos_for_user(user_id), today), scope)
            }
            None => (TodoStats::collect(&data.todos, today), "all users".to_string()),
        };
        drop(data);

        Ok(formatting::format_stats(&stats, &scope))
    }
}
