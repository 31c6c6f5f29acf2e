//! Uploaded product image storage.
//!
//! Images land in one web-served directory, keyed by sanitized original
//! filename. A repeated filename silently overwrites the previous file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from storing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The filename sanitized down to nothing usable.
    #[error("upload has no usable filename")]
    EmptyFilename,

    /// Filesystem failure while writing the upload.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Store for uploaded product images.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Create a store rooted at `dir`.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Create the upload directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::Io` if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), UploadError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Persist an upload under its sanitized filename.
    ///
    /// Returns the stored filename (never a path); that is what goes into
    /// the product record.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::EmptyFilename` if nothing usable remains after
    /// sanitization, or `UploadError::Io` if the write fails.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, UploadError> {
        let filename = sanitize_filename(original_name).ok_or(UploadError::EmptyFilename)?;
        tokio::fs::write(self.dir.join(&filename), bytes).await?;
        Ok(filename)
    }
}

/// Reduce a client-supplied filename to a safe single path component.
///
/// Path separators are stripped down to the final component, any byte
/// outside `[A-Za-z0-9._-]` becomes `_`, and leading dots are removed so
/// the result can never be a dotfile or escape the upload directory.
/// Returns `None` if nothing usable remains.
#[must_use]
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.').to_string();
    if cleaned.is_empty() || cleaned.chars().all(|c| matches!(c, '.' | '_')) {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_plain_name() {
        assert_eq!(sanitize_filename("logo.png").as_deref(), Some("logo.png"));
    }

    #[test]
    fn test_sanitize_spaces_become_underscores() {
        assert_eq!(
            sanitize_filename("product photo 2.jpg").as_deref(),
            Some("product_photo_2.jpg")
        );
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(
            sanitize_filename("../../etc/passwd").as_deref(),
            Some("passwd")
        );
        assert_eq!(
            sanitize_filename("..\\windows\\cmd.exe").as_deref(),
            Some("cmd.exe")
        );
    }

    #[test]
    fn test_sanitize_rejects_dotfiles() {
        assert_eq!(sanitize_filename(".env").as_deref(), Some("env"));
        assert_eq!(sanitize_filename("..."), None);
        assert_eq!(sanitize_filename(""), None);
    }

    #[test]
    fn test_sanitize_replaces_odd_bytes() {
        assert_eq!(
            sanitize_filename("invoice#42?.pdf").as_deref(),
            Some("invoice_42_.pdf")
        );
    }

    #[tokio::test]
    async fn test_save_writes_and_returns_filename() {
        let dir = std::env::temp_dir().join(format!("millbrook-uploads-{}", std::process::id()));
        let store = ImageStore::new(dir.clone());
        store.ensure_dir().await.unwrap();

        let stored = store.save("test image.png", b"fake bytes").await.unwrap();
        assert_eq!(stored, "test_image.png");

        let on_disk = tokio::fs::read(dir.join(&stored)).await.unwrap();
        assert_eq!(on_disk, b"fake bytes");

        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_rejects_unusable_name() {
        let store = ImageStore::new(std::env::temp_dir());
        let err = store.save("///", b"data").await.unwrap_err();
        assert!(matches!(err, UploadError::EmptyFilename));
    }
}
