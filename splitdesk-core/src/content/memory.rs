//! In-memory content provider

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ContentProvider, ContentResult};

/// Keeps file text in a map. Used for scratch projects and tests.
#[derive(Debug, Default)]
pub struct MemoryContentProvider {
    files: RwLock<HashMap<PathBuf, String>>,
}

impl MemoryContentProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider pre-filled with `(path, text)` pairs.
    #[must_use]
    pub fn with_files<I, P, S>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, S)>,
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let files = files
            .into_iter()
            .map(|(path, text)| (path.into(), text.into()))
            .collect();
        Self {
            files: RwLock::new(files),
        }
    }

    /// Returns the number of stored files.
    pub async fn len(&self) -> usize {
        self.files.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.files.read().await.is_empty()
    }
}

#[async_trait]
impl ContentProvider for MemoryContentProvider {
    async fn get_content(&self, path: &Path) -> ContentResult<Option<String>> {
        Ok(self.files.read().await.get(path).cloned())
    }

    async fn set_content(&self, path: &Path, content: &str) -> ContentResult<()> {
        self.files
            .write()
            .await
            .insert(path.to_path_buf(), content.to_owned());
        Ok(())
    }
}
