//! Image Upload Storage
//!
//! Stores user-submitted images on local disk under generated names and
//! hands back the public path the static file server exposes them at.
//!
//! Naming scheme: `<unix-millis>-<random 0..1e9><.ext>`, e.g.
//! `1718000000000-482913004.jpg`, served as `/uploads/1718000000000-482913004.jpg`.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::crypto::random_below;

/// Default size cap for a single image (5 MiB)
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Longest extension kept from the client file name
const MAX_EXTENSION_LEN: usize = 10;

/// Upload errors
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Only images allowed")]
    NotAnImage,

    #[error("Image must be at most {max_bytes} bytes")]
    TooLarge { max_bytes: usize },

    #[error("Image storage failed: {0}")]
    Io(#[from] std::io::Error),
}

/// An image part received from a client, not yet persisted
pub struct ImageUpload {
    /// Client-side file name (only the extension is kept)
    pub file_name: Option<String>,
    /// Declared MIME type
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Browsers send an empty part when no file was chosen
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
            && self
                .file_name
                .as_deref()
                .is_none_or(|name| name.trim().is_empty())
    }
}

impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// A persisted image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub file_name: String,
    /// Path under the public prefix, e.g. `/uploads/<file_name>`
    pub public_path: String,
}

/// Disk-backed image store
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
    public_prefix: String,
    max_bytes: usize,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>, public_prefix: impl Into<String>, max_bytes: usize) -> Self {
        let public_prefix = public_prefix.into().trim_end_matches('/').to_string();
        Self {
            dir: dir.into(),
            public_prefix,
            max_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Check type and size without touching the disk
    pub fn validate(&self, upload: &ImageUpload) -> Result<(), UploadError> {
        let is_image = upload
            .content_type
            .as_deref()
            .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"));
        if !is_image {
            return Err(UploadError::NotAnImage);
        }

        if upload.bytes.len() > self.max_bytes {
            return Err(UploadError::TooLarge {
                max_bytes: self.max_bytes,
            });
        }

        Ok(())
    }

    /// Validate and write the image, returning where it is served from
    pub async fn save(&self, upload: &ImageUpload) -> Result<StoredImage, UploadError> {
        self.validate(upload)?;

        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = generate_file_name(upload.file_name.as_deref());
        tokio::fs::write(self.dir.join(&file_name), &upload.bytes).await?;

        tracing::debug!(file_name = %file_name, bytes = upload.bytes.len(), "Image stored");

        Ok(StoredImage {
            public_path: format!("{}/{}", self.public_prefix, file_name),
            file_name,
        })
    }

    /// Delete a previously stored image by its public path
    ///
    /// Returns `Ok(false)` when the path does not belong to this store or the
    /// file is already gone.
    pub async fn remove(&self, public_path: &str) -> Result<bool, UploadError> {
        let Some(file_name) = self.file_name_of(public_path) else {
            return Ok(false);
        };

        match tokio::fs::remove_file(self.dir.join(file_name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve a public path to a bare file name inside the store directory
    fn file_name_of<'a>(&self, public_path: &'a str) -> Option<&'a str> {
        let name = public_path
            .strip_prefix(self.public_prefix.as_str())?
            .strip_prefix('/')?;

        let is_plain = !name.is_empty()
            && !name.contains(['/', '\\'])
            && name != "."
            && name != "..";
        is_plain.then_some(name)
    }
}

/// `<unix-millis>-<random><.ext>`
fn generate_file_name(original: Option<&str>) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let random = random_below(1_000_000_000);
    let ext = original.map(sanitized_extension).unwrap_or_default();
    format!("{millis}-{random}{ext}")
}

/// Extension with leading dot, reduced to ASCII alphanumerics, or empty
fn sanitized_extension(file_name: &str) -> String {
    let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) else {
        return String::new();
    };

    let clean: String = ext
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .take(MAX_EXTENSION_LEN)
        .collect::<String>()
        .to_ascii_lowercase();

    if clean.is_empty() {
        String::new()
    } else {
        format!(".{clean}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(bytes: usize) -> ImageUpload {
        ImageUpload {
            file_name: Some("cover.PNG".to_string()),
            content_type: Some("image/png".to_string()),
            bytes: vec![7u8; bytes],
        }
    }

    #[test]
    fn test_sanitized_extension() {
        assert_eq!(sanitized_extension("cover.jpg"), ".jpg");
        assert_eq!(sanitized_extension("cover.JPEG"), ".jpeg");
        assert_eq!(sanitized_extension("archive.tar.gz"), ".gz");
        assert_eq!(sanitized_extension("no_extension"), "");
        assert_eq!(sanitized_extension("weird.j$p/g"), "");
        assert_eq!(sanitized_extension("weird.p%n*g"), ".png");
    }

    #[test]
    fn test_generated_name_shape() {
        let name = generate_file_name(Some("photo.webp"));
        let (stem, ext) = name.rsplit_once('.').unwrap();
        assert_eq!(ext, "webp");

        let (millis, random) = stem.split_once('-').unwrap();
        assert!(millis.parse::<i64>().is_ok());
        assert!(random.parse::<u32>().unwrap() < 1_000_000_000);
    }

    #[test]
    fn test_validate_rejects_non_images() {
        let store = ImageStore::new("unused", "/uploads", 1024);

        let mut upload = png(10);
        upload.content_type = Some("application/pdf".to_string());
        assert!(matches!(store.validate(&upload), Err(UploadError::NotAnImage)));

        upload.content_type = None;
        assert!(matches!(store.validate(&upload), Err(UploadError::NotAnImage)));
    }

    #[test]
    fn test_validate_rejects_oversized() {
        let store = ImageStore::new("unused", "/uploads", 1024);
        assert!(store.validate(&png(1024)).is_ok());
        assert!(matches!(
            store.validate(&png(1025)),
            Err(UploadError::TooLarge { max_bytes: 1024 })
        ));
    }

    #[test]
    fn test_empty_part_detection() {
        let empty = ImageUpload {
            file_name: Some(String::new()),
            content_type: Some("application/octet-stream".to_string()),
            bytes: Vec::new(),
        };
        assert!(empty.is_empty());
        assert!(!png(1).is_empty());
    }

    #[tokio::test]
    async fn test_save_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join("uploads"), "/uploads/", 1024);

        let stored = store.save(&png(16)).await.unwrap();
        assert!(stored.public_path.starts_with("/uploads/"));
        assert!(stored.file_name.ends_with(".png"));

        let on_disk = tokio::fs::read(store.dir().join(&stored.file_name))
            .await
            .unwrap();
        assert_eq!(on_disk.len(), 16);

        assert!(store.remove(&stored.public_path).await.unwrap());
        assert!(!store.remove(&stored.public_path).await.unwrap());
    }

    #[tokio::test]
    async fn test_remove_ignores_foreign_paths() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path(), "/uploads", 1024);

        assert!(!store.remove("/etc/passwd").await.unwrap());
        assert!(!store.remove("/uploads/../secret").await.unwrap());
        assert!(!store.remove("/uploads/").await.unwrap());
    }
}
