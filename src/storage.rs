use crate::todo::TodoData;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// TOML file holding users and todos
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read the data file; a missing file loads as empty data
    pub fn load(&self) -> Result<TodoData> {
        if !self.file_path.exists() {
            tracing::warn!(path = %self.file_path.display(), "data file not found, starting empty");
            return Ok(TodoData::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;
        let data: TodoData = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.file_path.display()))?;

        for problem in data.integrity_problems() {
            tracing::warn!(path = %self.file_path.display(), "{}", problem);
        }
        tracing::info!(
            path = %self.file_path.display(),
            users = data.users.len(),
            todos = data.todos.len(),
            "loaded todo data"
        );

        Ok(data)
    }
}
