use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read category table {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid category table {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
