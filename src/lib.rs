//! Todo Insights MCP Server Library
//!
//! This library classifies todos by deadline urgency, status and keyword
//! category, and exposes the results through a read-only Model Context
//! Protocol (MCP) server.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `categories`, `urgency`, `status`, `analytics` - Pure classifiers
//!   over the `todo` data model
//! - **Persistence Layer**: `storage` module - File-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use todo_insights::{CategoryTable, TodoServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("todos.toml", CategoryTable::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod categories;
pub mod error;
pub mod formatting;
mod handlers;
pub mod logging;
pub mod pagination;
pub mod status;
pub mod storage;
pub mod todo;
pub mod urgency;
pub mod validation;

use anyhow::Result;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Mutex, MutexGuard};

// Re-export commonly used types
pub use categories::{CategoryTable, categorize};
pub use error::ConfigError;
pub use status::{TodoStats, TodoStatus, classify_status};
pub use storage::Storage;
pub use todo::{EnrichedTodo, ListQuery, Todo, TodoData, User};
pub use urgency::{Deadline, UrgencyTier, classify_days_left, days_left, deadline_for};

/// MCP Server handler for todo insights
///
/// Holds the loaded todo data, the keyword table and the optional pinned
/// reference day. All tools are read-only.
pub struct TodoServerHandler {
    pub(crate) data: Mutex<TodoData>,
    pub(crate) storage: Storage,
    pub(crate) categories: CategoryTable,
    pub(crate) fixed_today: Option<NaiveDate>,
}

impl TodoServerHandler {
    /// Create a new todo insights handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the todo data file (TOML format)
    /// * `categories` - Keyword table used for category inference
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use todo_insights::{CategoryTable, TodoServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = TodoServerHandler::new("todos.toml", CategoryTable::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str, categories: CategoryTable) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load()?);
        Ok(Self {
            data,
            storage,
            categories,
            fixed_today: None,
        })
    }

    /// Pin the reference day used when a tool call does not pass `today`
    pub fn with_fixed_today(mut self, today: Option<NaiveDate>) -> Self {
        self.fixed_today = today;
        self
    }

    /// Lock the loaded data
    ///
    /// The data is only ever replaced wholesale, so a poisoned lock still holds
    /// a consistent value.
    pub(crate) fn lock_data(&self) -> MutexGuard<'_, TodoData> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resolve the reference day for one call
    ///
    /// An explicit `today` parameter wins, then the pinned day, then the local date.
    pub(crate) fn resolve_today(&self, today: Option<String>) -> McpResult<NaiveDate> {
        match today {
            Some(ref date_str) if !date_str.trim().is_empty() => {
                validation::parse_date_param(date_str)
            }
            _ => Ok(self.fixed_today.unwrap_or_else(todo::local_date_today)),
        }
    }
}

/// Todo insights server: deadline urgency, status buckets and keyword categories over a todo list.
///
/// Every todo gets derived values for a reference day (`today`, default: the server's current date):
/// - **urgency**: safe (due in 4-6 days), moderate (2-3), urgent (0-1 or overdue), none (no due date, completed, or 7+ days out)
/// - **status**: completed, overdue (due before today), upcoming (starts after today), in_progress
/// - **categories**: labels inferred from title and description by keyword match
///
/// Dates use YYYY-MM-DD. Data is read from a TOML file; use reload after editing it.
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **List**: Paginated todos with urgency, status and inferred categories.
    /// **Filters**: status (completed/overdue/upcoming/in_progress), stored category, owner user_id.
    #[tool]
    async fn list(
        &self,
        /// Status filter: completed/overdue/upcoming/in_progress. Empty=all.
        status: Option<String>,
        /// Stored category to match exactly (e.g., "Work"). Empty=all.
        category: Option<String>,
        /// Only todos owned by this user ID
        user_id: Option<u32>,
        /// Page number starting at 1 (default 1)
        page: Option<u32>,
        /// Todos per page (default 10)
        per_page: Option<u32>,
        /// Reference day YYYY-MM-DD (default: today)
        today: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(status, category, user_id, page, per_page, today)
            .await
    }

    /// **Get**: One todo with its urgency, days left, status and inferred categories.
    #[tool]
    async fn get(
        &self,
        /// Todo ID
        id: u32,
        /// Reference day YYYY-MM-DD (default: today)
        today: Option<String>,
    ) -> McpResult<String> {
        self.handle_get(id, today).await
    }

    /// **Stats**: Count todos by status (total, completed, pending, overdue, upcoming, in_progress).
    #[tool]
    async fn stats(
        &self,
        /// Only count todos owned by this user ID. Empty=all users.
        user_id: Option<u32>,
        /// Reference day YYYY-MM-DD (default: today)
        today: Option<String>,
    ) -> McpResult<String> {
        self.handle_stats(user_id, today).await
    }

    /// **Category counts**: Number of todos per inferred category.
    /// A todo matching several categories counts once in each.
    #[tool]
    async fn category_counts(&self) -> McpResult<String> {
        self.handle_category_counts().await
    }

    /// **Category users**: Users owning at least one todo inferred to be in a category.
    #[tool]
    async fn category_users(
        &self,
        /// Category label (e.g., "Coding", "Health")
        category: String,
    ) -> McpResult<String> {
        self.handle_category_users(category).await
    }

    /// **Categorize**: Show which categories a piece of text would be assigned.
    #[tool]
    async fn categorize(
        &self,
        /// Free text, typically a todo title and description
        text: String,
    ) -> McpResult<String> {
        self.handle_categorize(text).await
    }

    /// **Reload**: Re-read the data file after it was edited.
    #[tool]
    async fn reload(&self) -> McpResult<String> {
        self.handle_reload().await
    }
}
