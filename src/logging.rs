use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "TODO_INSIGHTS_LOG";

/// Install the global tracing subscriber
///
/// Logs go to stderr because stdout carries the MCP stdio transport.
/// The filter comes from `TODO_INSIGHTS_LOG`, then `RUST_LOG`, then `info`.
pub fn init_tracing() {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .compact()
        .try_init();
}
