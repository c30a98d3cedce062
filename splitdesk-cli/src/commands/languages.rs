//! Language table command.

use std::path::Path;

use crate::cli::TableFormat;
use crate::error::CliError;
use crate::format::format_columns;
use crate::util::load_settings;

/// Show the effective extension to language mapping
pub fn cmd_languages(config_path: Option<&Path>, format: TableFormat) -> Result<(), CliError> {
    let table = load_settings(config_path)?.language_table();

    match format {
        TableFormat::Table => {
            print!("{}", format_columns(("EXTENSION", "LANGUAGE"), table.iter()));
            println!("\nUnknown extensions: {}", table.fallback());
        }
        TableFormat::Json => {
            let mapping: serde_json::Map<String, serde_json::Value> = table
                .iter()
                .map(|(ext, lang)| (ext.to_owned(), serde_json::Value::from(lang)))
                .collect();
            let json = serde_json::json!({
                "fallback": table.fallback(),
                "extensions": mapping,
            });
            let text = serde_json::to_string_pretty(&json)
                .map_err(|e| CliError::Output(format!("Failed to serialize languages: {e}")))?;
            println!("{text}");
        }
    }
    Ok(())
}
