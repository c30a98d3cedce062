//! Content provider boundary
//!
//! The editor core reads initial file text through a [`ContentProvider`]
//! when a tab is opened. Writing back is the caller's business: the core
//! only tracks the unsaved bit and never calls `set_content` itself.

mod fs;
mod memory;

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

pub use fs::FsContentProvider;
pub use memory::MemoryContentProvider;

/// Errors raised by content providers.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Reading or writing the backing store failed.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Affected path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid UTF-8 text.
    #[error("file is not valid UTF-8: {0}")]
    NotText(PathBuf),

    /// The provider cannot serve requests right now.
    #[error("content provider unavailable: {0}")]
    Unavailable(String),
}

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Supplies and stores file text by path.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Returns the text stored at `path`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    async fn get_content(&self, path: &Path) -> ContentResult<Option<String>>;

    /// Stores `content` at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    async fn set_content(&self, path: &Path, content: &str) -> ContentResult<()>;
}
