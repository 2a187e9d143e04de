//! File-backed content store.
//!
//! The whole [`SiteContent`] document lives in one JSON file. It is read
//! wholesale on every page render and overwritten wholesale on every save.
//! There is no locking: concurrent saves are last-write-wins.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::content::{assign_missing_ids, SiteContent};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("content file {path} is not a valid document: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize content: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to write content file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ContentStore {
    path: PathBuf,
}

impl ContentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document. A missing or malformed file is an error;
    /// there is no fallback document.
    pub async fn load(&self) -> Result<SiteContent, StoreError> {
        let raw = fs::read_to_string(&self.path)
            .await
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })?;

        let mut content: SiteContent =
            serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let assigned = assign_missing_ids(&mut content);
        if assigned > 0 {
            tracing::debug!(assigned, "Assigned ids to entities loaded without one");
        }
        Ok(content)
    }

    /// Replace the document on disk.
    ///
    /// Writes pretty-printed JSON with a trailing newline to a sibling temp
    /// file and renames it over the target, so readers never observe a
    /// half-written document. Overlapping saves are last-write-wins.
    pub async fn save(&self, content: &SiteContent) -> Result<(), StoreError> {
        let mut data = serde_json::to_string_pretty(content).map_err(StoreError::Serialize)?;
        data.push('\n');

        let write_err = |source| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        // One temp file per save; overlapping saves must not rename each
        // other's file away.
        let temp_path = self
            .path
            .with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
        if let Err(err) = write_and_sync(&temp_path, data.as_bytes()).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(write_err(err));
        }
        if let Err(err) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(write_err(err));
        }

        tracing::debug!(path = %self.path.display(), bytes = data.len(), "Saved site content");
        Ok(())
    }
}

async fn write_and_sync(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(data).await?;
    file.sync_all().await
}
