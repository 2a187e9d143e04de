//! Image uploads stored in a public directory.
//!
//! Files are named `<unix-millis>-<random hex>.<ext>` and referenced from
//! content as `/uploads/<name>`.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// 2 MiB.
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// URL prefix under which uploaded files are served.
pub const UPLOADS_URL_PREFIX: &str = "/uploads/";

const DEFAULT_EXTENSION: &str = "png";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("no file was provided")]
    Missing,
    #[error("file must be an image, got `{0}`")]
    NotImage(String),
    #[error("file is {size} bytes, the maximum is {max} bytes")]
    TooLarge { size: usize, max: usize },
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// An image received from the admin dashboard.
#[derive(Debug)]
pub struct NewUpload<'a> {
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub bytes: &'a [u8],
    /// Public path of the image being replaced, removed best-effort.
    pub previous_path: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate and write the image, returning its public URL.
    ///
    /// Nothing is written when validation fails.
    pub async fn store(&self, upload: NewUpload<'_>) -> Result<String, UploadError> {
        let content_type = upload.content_type.unwrap_or_default();
        if !content_type.starts_with("image/") {
            return Err(UploadError::NotImage(content_type.to_string()));
        }
        if upload.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                size: upload.bytes.len(),
                max: MAX_UPLOAD_BYTES,
            });
        }

        fs::create_dir_all(&self.root).await?;

        let name = generated_name(upload.file_name);
        let path = self.root.join(&name);
        let temp_path = self.root.join(format!(".{name}.tmp"));
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(upload.bytes).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&temp_path, &path).await?;

        tracing::info!(file = %name, bytes = upload.bytes.len(), "Stored upload");

        if let Some(previous) = upload.previous_path {
            self.remove_previous(previous).await;
        }

        Ok(format!("{UPLOADS_URL_PREFIX}{name}"))
    }

    /// Delete a previously uploaded file. Only paths under the uploads URL
    /// prefix are considered and every failure is ignored.
    pub async fn remove_previous(&self, public_path: &str) {
        let Some(relative) = public_path.strip_prefix(UPLOADS_URL_PREFIX) else {
            return;
        };
        let Some(file_name) = Path::new(relative).file_name() else {
            return;
        };
        if Path::new(relative) != Path::new(file_name) {
            return;
        }

        let path = self.root.join(file_name);
        if let Err(err) = fs::remove_file(&path).await {
            tracing::debug!(path = %path.display(), error = %err, "Ignoring failed upload cleanup");
        }
    }
}

fn generated_name(original: Option<&str>) -> String {
    let extension = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let millis = chrono::Utc::now().timestamp_millis();
    let random: u64 = rand::random();
    format!("{millis}-{random:x}.{extension}")
}
