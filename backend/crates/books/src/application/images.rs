//! Image bookkeeping shared by the listing use cases

use platform::upload::{ImageStore, ImageUpload};

use crate::error::BookResult;

/// Store an optional upload; empty parts count as no image
pub(crate) async fn store(images: &ImageStore, upload: Option<ImageUpload>) -> BookResult<Option<String>> {
    match upload {
        Some(upload) if !upload.is_empty() => {
            let stored = images.save(&upload).await?;
            Ok(Some(stored.public_path))
        }
        _ => Ok(None),
    }
}

/// Best-effort removal; failures are logged, never surfaced
pub(crate) async fn discard(images: &ImageStore, public_path: Option<&str>) {
    let Some(path) = public_path else {
        return;
    };

    match images.remove(path).await {
        Ok(true) => tracing::debug!(path = %path, "Removed image"),
        Ok(false) => tracing::debug!(path = %path, "Image already gone"),
        Err(e) => tracing::warn!(path = %path, error = %e, "Failed to remove image"),
    }
}
