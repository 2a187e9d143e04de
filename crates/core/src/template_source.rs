use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to read template {path}: {source}")]
pub struct TemplateError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The theme's static home page markup, served exactly as authored.
#[derive(Debug, Clone)]
pub struct TemplateSource {
    path: PathBuf,
}

impl TemplateSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the markup. Re-read on every call so theme edits show up
    /// without a restart.
    pub async fn markup(&self) -> Result<String, TemplateError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| TemplateError {
                path: self.path.clone(),
                source,
            })
    }
}
