//! Tab entity
//!
//! A [`Tab`] is one open reference to a file. Its identity is fixed at
//! creation; everything else (content, dirty bit, pin, access time) is
//! mutable editing state.

use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::TabId;

/// Default upper bound on preview length, in characters.
pub const DEFAULT_PREVIEW_MAX_CHARS: usize = 100;

/// An open file in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier, never reused.
    pub id: TabId,
    /// File path displayed by this tab.
    pub path: PathBuf,
    /// Display name (final path segment).
    pub name: String,
    /// Language inferred from the extension at creation.
    pub language: String,
    /// In-memory text of the file.
    pub content: String,
    /// True while the content diverges from the last persisted write.
    pub is_unsaved: bool,
    /// Pinned tabs are preferred when picking the next active tab.
    pub pinned: bool,
    /// First line of the content, bounded in length.
    pub preview: String,
    /// Last time the tab became active or was edited.
    pub last_accessed: DateTime<Utc>,
}

impl Tab {
    /// Creates a tab for `path` with freshly fetched content.
    #[must_use]
    pub fn new(
        path: PathBuf,
        language: String,
        content: String,
        preview_max_chars: usize,
        now: DateTime<Utc>,
    ) -> Self {
        let path = normalize_path(&path);
        let name = display_name(&path);
        let preview = compute_preview(&content, preview_max_chars);
        Self {
            id: TabId::new(),
            path,
            name,
            language,
            content,
            is_unsaved: false,
            pinned: false,
            preview,
            last_accessed: now,
        }
    }

    /// Replaces the content and refreshes the derived preview.
    pub fn set_content(&mut self, content: String, preview_max_chars: usize) {
        self.preview = compute_preview(&content, preview_max_chars);
        self.content = content;
    }
}

/// Lexically drops `.` components so `./a.rs` and `a.rs` name the same
/// file. Nothing is resolved against the filesystem.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}

/// Returns the display name for a path: its final segment, or the whole
/// path when it has none (e.g. `/` or `..`).
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Returns the first line of `content`, cut to at most `max_chars` chars.
#[must_use]
pub fn compute_preview(content: &str, max_chars: usize) -> String {
    let first_line = content.lines().next().unwrap_or("");
    first_line.chars().take(max_chars).collect()
}
