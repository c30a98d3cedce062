//! Shared utility functions used across command modules.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use splitdesk_core::{
    ConfirmRequest, ConfirmationGate, EditorSession, EditorSettings, FsContentProvider,
    SettingsManager,
};

use crate::error::CliError;

/// Creates a `SettingsManager` using the optional custom config directory
/// from CLI args.
pub fn create_settings_manager(config_path: Option<&Path>) -> Result<SettingsManager, CliError> {
    match config_path {
        Some(path) => Ok(SettingsManager::with_config_dir(path.to_path_buf())),
        None => SettingsManager::new()
            .map_err(|e| CliError::Config(format!("Failed to initialize config: {e}"))),
    }
}

/// Loads the effective editor settings.
pub fn load_settings(config_path: Option<&Path>) -> Result<EditorSettings, CliError> {
    create_settings_manager(config_path)?
        .load_settings()
        .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))
}

/// Builds a session reading files from disk.
pub fn create_session(
    config_path: Option<&Path>,
    root: Option<&Path>,
    assume_yes: bool,
) -> Result<EditorSession, CliError> {
    let settings = load_settings(config_path)?;
    let provider = match root {
        Some(root) => FsContentProvider::with_root(root),
        None => FsContentProvider::new(),
    };
    Ok(EditorSession::with_settings(
        settings,
        Arc::new(provider),
        PromptGate { assume_yes },
    ))
}

/// Creates the runtime used to drive async session operations.
pub fn create_runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::Config(format!("Failed to create runtime: {e}")))
}

/// Confirmation gate that asks on the terminal.
///
/// Anything but `y`/`yes` declines, including end of input.
#[derive(Debug, Clone, Copy)]
pub struct PromptGate {
    /// Skip the prompt and approve
    pub assume_yes: bool,
}

impl ConfirmationGate for PromptGate {
    fn confirm(&self, request: &ConfirmRequest) -> bool {
        if self.assume_yes {
            return true;
        }
        let mut stderr = std::io::stderr().lock();
        if write!(stderr, "{request} [y/N] ").is_err() || stderr.flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match std::io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(_) => false,
        }
    }
}

/// Interprets a prompt answer.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
