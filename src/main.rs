//! Todo Insights MCP Server - Main Entry Point
//!
//! This is the main entry point for the todo insights server application.
//! The actual implementation is in the `todo_insights` library.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todo_insights::{CategoryTable, TodoServerHandler, logging};

/// Todo Insights MCP Server - deadline urgency, status and category insights via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the todo data file (TOML)
    file: String,

    /// Keyword table file (TOML, `Label = ["keyword", ...]`); built-in table if omitted
    #[arg(long, value_name = "PATH")]
    categories: Option<PathBuf>,

    /// Pin the reference day (YYYY-MM-DD) instead of using the local date
    #[arg(long, value_name = "DATE")]
    today: Option<NaiveDate>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    logging::init_tracing();

    let categories = match args.categories {
        Some(ref path) => CategoryTable::load(path)?,
        None => CategoryTable::default(),
    };
    tracing::info!(labels = categories.len(), "category table ready");

    let handler = TodoServerHandler::new(&args.file, categories)?.with_fixed_today(args.today);
    if let Some(today) = args.today {
        tracing::info!(%today, "reference day pinned");
    }

    serve_stdio(handler).await?;
    Ok(())
}
