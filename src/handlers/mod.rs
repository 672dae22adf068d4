//! MCP tool handlers for the todo insights server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod analytics;
pub mod get;
pub mod list;
pub mod reload;
pub mod stats;
