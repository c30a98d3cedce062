//! File-system content provider

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{ContentError, ContentProvider, ContentResult};

/// Reads and writes files on disk with `tokio::fs`.
///
/// Relative paths are resolved against an optional project root.
#[derive(Debug, Clone, Default)]
pub struct FsContentProvider {
    root: Option<PathBuf>,
}

impl FsContentProvider {
    /// Creates a provider that uses paths as given.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider resolving relative paths against `root`.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// Returns the project root, if any.
    #[must_use]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl ContentProvider for FsContentProvider {
    async fn get_content(&self, path: &Path) -> ContentResult<Option<String>> {
        let full = self.resolve(path);
        match tokio::fs::read_to_string(&full).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %full.display(), "file not found, treating as empty");
                Ok(None)
            }
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(ContentError::NotText(full)),
            Err(source) => Err(ContentError::Io { path: full, source }),
        }
    }

    async fn set_content(&self, path: &Path, content: &str) -> ContentResult<()> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| ContentError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }
        tokio::fs::write(&full, content)
            .await
            .map_err(|source| ContentError::Io { path: full, source })
    }
}
