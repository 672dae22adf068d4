//! Todo domain models
//!
//! This module contains the todo data structures and the container they live in.
//! It is split into submodules:
//! - `todo_item`: The `Todo` and `User` records
//! - `todo_data`: Main data container with lookup and integrity checks
//! - `queries`: Filtered, enriched listing over the container
//! - `serde_impl`: Lenient calendar-date (de)serialization

mod queries;
mod serde_impl;
mod todo_data;
mod todo_item;

pub use queries::{EnrichedTodo, ListQuery};
pub use serde_impl::parse_lenient_date;
pub use todo_data::TodoData;
pub use todo_item::{Todo, User, local_date_today};
