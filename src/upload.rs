//! Optional cover/logo image uploads.

use std::path::Path;

use anyhow::Context;
use axum::body::Bytes;
use chrono::{DateTime, Utc};

/// MIME types accepted for uploaded images. Anything else is dropped silently.
pub const ACCEPTED_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg"];

/// An image file part received with a form submission.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl ImageUpload {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        !self.data.is_empty() && ACCEPTED_IMAGE_TYPES.contains(&self.content_type.as_str())
    }
}

/// Name an upload is stored under: `<receipt millis> -- <original name>`.
///
/// Only the last path component of the client-supplied name is kept.
#[must_use]
pub fn stored_file_name(original: &str, received_at: DateTime<Utc>) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("image");
    format!("{} -- {base}", received_at.timestamp_millis())
}

/// Write an accepted upload into `dir` and return its stored file name.
///
/// Returns `Ok(None)` when there is no upload or its type is not accepted.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be written.
pub async fn store_image(dir: &Path, upload: Option<ImageUpload>) -> anyhow::Result<Option<String>> {
    let Some(upload) = upload.filter(ImageUpload::is_accepted) else {
        return Ok(None);
    };

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create upload dir {}", dir.display()))?;

    let stored_name = stored_file_name(&upload.file_name, Utc::now());
    tokio::fs::write(dir.join(&stored_name), &upload.data)
        .await
        .with_context(|| format!("failed to write upload {stored_name}"))?;

    tracing::info!(file = %stored_name, bytes = upload.data.len(), "Image stored");
    Ok(Some(stored_name))
}
