//! Settings persistence

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::settings::EditorSettings;
use crate::error::{ConfigError, ConfigResult};
use crate::tracing::span_names;

/// Settings file name inside the config directory
pub const SETTINGS_FILE: &str = "settings.toml";

/// Loads and saves [`EditorSettings`] in a config directory.
#[derive(Debug, Clone)]
pub struct SettingsManager {
    config_dir: PathBuf,
}

impl SettingsManager {
    /// Creates a manager for the platform config directory
    /// (`$XDG_CONFIG_HOME/splitdesk` on Linux).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if the platform has none.
    pub fn new() -> ConfigResult<Self> {
        let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join("splitdesk")))
    }

    /// Creates a manager for a specific directory.
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Returns the config directory.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the settings file path.
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Loads settings, returning defaults if the file does not exist.
    ///
    /// Out-of-range values are clamped and logged.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load_settings(&self) -> ConfigResult<EditorSettings> {
        let path = self.settings_path();
        let _span = crate::trace_operation_debug!(span_names::CONFIG_LOAD, path = %path.display())
            .entered();

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("settings file missing, using defaults");
                return Ok(EditorSettings::default());
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path,
                    reason: e.to_string(),
                });
            }
        };

        let mut settings: EditorSettings =
            toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        for field in settings.validate() {
            warn!(field, "setting out of range, using fallback");
        }
        Ok(settings)
    }

    /// Saves settings, creating the config directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save_settings(&self, settings: &EditorSettings) -> ConfigResult<()> {
        let path = self.settings_path();
        let _span =
            crate::trace_operation_debug!(span_names::CONFIG_SAVE, path = %path.display()).entered();

        let text =
            toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::create_dir_all(&self.config_dir)
            .map_err(|e| ConfigError::Write(format!("{}: {e}", self.config_dir.display())))?;
        std::fs::write(&path, text)
            .map_err(|e| ConfigError::Write(format!("{}: {e}", path.display())))
    }

    /// Async variant of [`save_settings`](Self::save_settings) for use on
    /// a runtime thread.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn save_settings_async(&self, settings: &EditorSettings) -> ConfigResult<()> {
        let path = self.settings_path();
        let text =
            toml::to_string_pretty(settings).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        tokio::fs::create_dir_all(&self.config_dir)
            .await
            .map_err(|e| ConfigError::Write(format!("{}: {e}", self.config_dir.display())))?;
        tokio::fs::write(&path, text)
            .await
            .map_err(|e| ConfigError::Write(format!("{}: {e}", path.display())))
    }
}
