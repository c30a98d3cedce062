//! Extension to language mapping
//!
//! The language of a tab is inferred once, at creation, from the file
//! extension. The table is injected into the session so callers can extend
//! or override it through settings.

use std::collections::BTreeMap;
use std::path::Path;

/// Language used when an extension is missing or unknown.
pub const PLAINTEXT: &str = "plaintext";

/// Built-in extension table (lowercase extension, language id).
pub const BUILTIN_LANGUAGES: &[(&str, &str)] = &[
    ("rs", "rust"),
    ("js", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("jsx", "javascript"),
    ("ts", "typescript"),
    ("mts", "typescript"),
    ("tsx", "typescript"),
    ("py", "python"),
    ("go", "go"),
    ("java", "java"),
    ("kt", "kotlin"),
    ("c", "c"),
    ("h", "c"),
    ("cpp", "cpp"),
    ("cc", "cpp"),
    ("cxx", "cpp"),
    ("hpp", "cpp"),
    ("cs", "csharp"),
    ("rb", "ruby"),
    ("php", "php"),
    ("swift", "swift"),
    ("html", "html"),
    ("htm", "html"),
    ("css", "css"),
    ("scss", "scss"),
    ("less", "less"),
    ("json", "json"),
    ("toml", "toml"),
    ("yaml", "yaml"),
    ("yml", "yaml"),
    ("xml", "xml"),
    ("md", "markdown"),
    ("markdown", "markdown"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("zsh", "shell"),
    ("sql", "sql"),
    ("txt", PLAINTEXT),
];

/// Maps file extensions to language identifiers.
///
/// Lookups are case-insensitive on the extension. Anything not in the
/// table resolves to the configured fallback (`"plaintext"` by default).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    by_extension: BTreeMap<String, String>,
    fallback: String,
}

impl LanguageTable {
    /// Creates a table holding the built-in mappings.
    #[must_use]
    pub fn new() -> Self {
        let by_extension = BUILTIN_LANGUAGES
            .iter()
            .map(|(ext, lang)| ((*ext).to_owned(), (*lang).to_owned()))
            .collect();
        Self {
            by_extension,
            fallback: PLAINTEXT.to_owned(),
        }
    }

    /// Creates a table with no mappings at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            by_extension: BTreeMap::new(),
            fallback: PLAINTEXT.to_owned(),
        }
    }

    /// Adds or replaces a mapping. A leading dot on the extension is ignored.
    pub fn insert(&mut self, extension: &str, language: impl Into<String>) {
        let ext = extension.trim_start_matches('.').to_lowercase();
        if ext.is_empty() {
            return;
        }
        self.by_extension.insert(ext, language.into());
    }

    /// Merges overrides on top of the current mappings.
    #[must_use]
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        for (ext, lang) in overrides {
            self.insert(ext, lang.clone());
        }
        self
    }

    /// Sets the language returned for unknown extensions.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Returns the fallback language.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Returns the language for an extension, if mapped.
    #[must_use]
    pub fn lookup(&self, extension: &str) -> Option<&str> {
        self.by_extension
            .get(&extension.trim_start_matches('.').to_lowercase())
            .map(String::as_str)
    }

    /// Infers the language of a path from its extension.
    #[must_use]
    pub fn infer(&self, path: &Path) -> String {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.lookup(ext))
            .unwrap_or(&self.fallback)
            .to_owned()
    }

    /// Iterates over `(extension, language)` pairs in extension order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_extension
            .iter()
            .map(|(ext, lang)| (ext.as_str(), lang.as_str()))
    }

    /// Returns the number of mapped extensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    /// Returns true if no extension is mapped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::new()
    }
}
