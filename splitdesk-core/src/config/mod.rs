//! Editor settings
//!
//! [`EditorSettings`] holds the tunables of the editor core and is stored as
//! TOML by [`SettingsManager`].

mod manager;
pub mod settings;

pub use manager::{SETTINGS_FILE, SettingsManager};
pub use settings::EditorSettings;
