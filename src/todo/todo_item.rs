use super::serde_impl::lenient_date;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// A single todo item owned by one user
///
/// Dates are calendar days. Stored values that cannot be read as a date
/// are loaded as `None` rather than failing the whole file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: u32,
    /// Short title
    pub title: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category stored alongside the todo (independent of keyword inference)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the todo is done
    #[serde(default)]
    pub completed: bool,
    /// Day work on the todo starts (format: YYYY-MM-DD)
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Day the todo is due (format: YYYY-MM-DD)
    #[serde(default, with = "lenient_date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Owning user ID
    pub user_id: u32,
}

impl Todo {
    /// Create an open todo with only the required fields set
    pub fn new(id: u32, title: impl Into<String>, user_id: u32) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            category: None,
            completed: false,
            start_date: None,
            due_date: None,
            user_id,
        }
    }

    /// Text fed to the keyword categorizer: title and description joined by a space
    pub fn categorization_text(&self) -> String {
        format!("{} {}", self.title, self.description.as_deref().unwrap_or(""))
    }
}

/// An account that owns todos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub email: String,
}
