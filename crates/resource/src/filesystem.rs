//! Filesystem-backed image resolution for offline rendering.
//!
//! Record fields normally hold inline blobs; `solardocs-render` also lets
//! them name files next to the record. Paths are resolved
//! against a base directory and may not escape it.

use crate::error::ResourceError;
use crate::inline::{InlineImage, InlineResourceProvider};
use crate::provider::{ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves `path` below the base directory, or `None` if it would
    /// leave it.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        let relative = Path::new(path);
        if relative.is_absolute() || relative.components().any(|c| matches!(c, Component::ParentDir)) {
            return None;
        }

        let full_path = self.base_path.join(relative);
        match (full_path.canonicalize(), &self.canonical_base) {
            (Ok(canonical), Some(base)) if canonical.starts_with(base) => Some(canonical),
            // A symlink pointing outside the base directory.
            (Ok(_), Some(_)) => None,
            _ => Some(full_path),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, source: &str) -> Result<SharedResourceData, ResourceError> {
        if InlineImage::is_data_url(source) {
            return InlineResourceProvider.load(source);
        }

        let full_path = self
            .resolve_path_safe(source)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside of the asset directory)", source)))?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(source.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: source.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_files_below_the_base() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("signatures")).unwrap();
        fs::write(dir.path().join("signatures/customer.png"), b"png bytes").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load("signatures/customer.png").unwrap();
        assert_eq!(&*data, b"png bytes");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(matches!(provider.load("stamp.png"), Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn blocks_escaping_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        for path in ["../../../etc/passwd", "/etc/passwd", "assets/../../secret", ".."] {
            assert!(provider.load(path).is_err(), "{path} should be rejected");
        }
    }

    #[test]
    fn still_accepts_inline_blobs() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(&*data, b"hello");
    }
}
