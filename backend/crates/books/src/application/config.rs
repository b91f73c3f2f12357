//! Application Configuration
//!
//! Configuration for the listing application layer.

use std::path::PathBuf;

use platform::config::{ConfigError, env_or, env_parse};
use platform::upload::{DEFAULT_MAX_IMAGE_BYTES, ImageStore};

/// Room for the text fields and multipart framing around an image
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Books application configuration
#[derive(Debug, Clone)]
pub struct BooksConfig {
    /// Directory images are written to
    pub upload_dir: PathBuf,
    /// URL prefix the directory is served under
    pub public_prefix: String,
    /// Per-image size cap
    pub max_image_bytes: usize,
}

impl Default for BooksConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            public_prefix: "/uploads".to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl BooksConfig {
    /// Load from environment (`UPLOAD_DIR`, `MAX_IMAGE_BYTES`)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            upload_dir: PathBuf::from(env_or("UPLOAD_DIR", "uploads")),
            max_image_bytes: env_parse("MAX_IMAGE_BYTES", defaults.max_image_bytes)?,
            ..defaults
        })
    }

    /// Request body cap for routes that accept an image
    pub fn upload_body_limit(&self) -> usize {
        self.max_image_bytes.saturating_add(FORM_OVERHEAD_BYTES)
    }

    pub fn image_store(&self) -> ImageStore {
        ImageStore::new(
            self.upload_dir.clone(),
            self.public_prefix.clone(),
            self.max_image_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BooksConfig::default();
        assert_eq!(config.max_image_bytes, 5 * 1024 * 1024);
        assert_eq!(config.upload_body_limit(), 6 * 1024 * 1024);
        assert_eq!(config.image_store().max_bytes(), config.max_image_bytes);
    }
}
