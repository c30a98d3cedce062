//! Editor settings model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::workspace::{DEFAULT_MAX_PANES, DEFAULT_PREVIEW_MAX_CHARS, LanguageTable, PLAINTEXT};

/// Tunables of the editor core, stored as `settings.toml`.
///
/// Every field has a default so partial files load cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Maximum number of leaf panes
    pub max_panes: usize,
    /// Maximum preview length in characters
    pub preview_max_chars: usize,
    /// Language for unrecognized extensions
    pub default_language: String,
    /// Extra extension → language entries merged over the built-in table
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub languages: BTreeMap<String, String>,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            max_panes: DEFAULT_MAX_PANES,
            preview_max_chars: DEFAULT_PREVIEW_MAX_CHARS,
            default_language: PLAINTEXT.to_owned(),
            languages: BTreeMap::new(),
        }
    }
}

impl EditorSettings {
    /// Clamps values the editor cannot work with back into range.
    ///
    /// Returns the names of the fields that were changed.
    pub fn validate(&mut self) -> Vec<&'static str> {
        let mut fixed = Vec::new();
        if self.max_panes == 0 {
            self.max_panes = 1;
            fixed.push("max_panes");
        }
        if self.preview_max_chars == 0 {
            self.preview_max_chars = DEFAULT_PREVIEW_MAX_CHARS;
            fixed.push("preview_max_chars");
        }
        if self.default_language.trim().is_empty() {
            self.default_language = PLAINTEXT.to_owned();
            fixed.push("default_language");
        }
        fixed
    }

    /// Builds the effective extension table: built-ins, then overrides.
    #[must_use]
    pub fn language_table(&self) -> LanguageTable {
        LanguageTable::new()
            .with_overrides(&self.languages)
            .with_fallback(self.default_language.clone())
    }
}
