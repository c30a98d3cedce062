//! Settings commands.

use std::path::Path;

use splitdesk_core::EditorSettings;

use crate::cli::SettingsCommands;
use crate::error::CliError;
use crate::util::create_settings_manager;

/// Settings command handler
pub fn cmd_settings(config_path: Option<&Path>, command: SettingsCommands) -> Result<(), CliError> {
    let manager = create_settings_manager(config_path)?;

    match command {
        SettingsCommands::Show => {
            let settings = manager
                .load_settings()
                .map_err(|e| CliError::Config(format!("Failed to load settings: {e}")))?;
            let text = toml_text(&settings)?;
            print!("{text}");
        }
        SettingsCommands::Path => println!("{}", manager.settings_path().display()),
        SettingsCommands::Init { force } => {
            let path = manager.settings_path();
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            manager
                .save_settings(&EditorSettings::default())
                .map_err(|e| CliError::Config(format!("Failed to save settings: {e}")))?;
            println!("Wrote default settings to {}", path.display());
        }
    }
    Ok(())
}

fn toml_text(settings: &EditorSettings) -> Result<String, CliError> {
    toml::to_string_pretty(settings)
        .map_err(|e| CliError::Output(format!("Failed to serialize settings: {e}")))
}
