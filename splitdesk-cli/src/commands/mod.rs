//! Command handler modules for the CLI.

mod completions;
mod languages;
mod open;
mod run;
mod settings;

use std::path::Path;

use splitdesk_core::EditorSession;

use crate::cli::{Commands, LayoutFormat};
use crate::error::CliError;
use crate::format::format_layout;

/// Options shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct GlobalOptions<'a> {
    /// Custom configuration directory
    pub config_path: Option<&'a Path>,
    /// Answer yes to confirmations
    pub assume_yes: bool,
    /// Suppress non-error output
    pub quiet: bool,
}

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(options: GlobalOptions<'_>, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Open {
            paths,
            root,
            split,
            format,
        } => open::cmd_open(options, &paths, root.as_deref(), &split, format),
        Commands::Run {
            script,
            root,
            format,
        } => run::cmd_run(options, &script, root.as_deref(), format),
        Commands::Languages { format } => languages::cmd_languages(options.config_path, format),
        Commands::Settings(subcommand) => settings::cmd_settings(options.config_path, subcommand),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}

/// Prints the session layout in the requested format.
fn print_layout(session: &EditorSession, format: LayoutFormat) -> Result<(), CliError> {
    let snapshot = session.snapshot();
    match format {
        LayoutFormat::Tree => println!("{}", format_layout(&snapshot)),
        LayoutFormat::Json => {
            let json = snapshot
                .to_json()
                .map_err(|e| CliError::Output(format!("Failed to serialize snapshot: {e}")))?;
            println!("{json}");
        }
    }
    Ok(())
}
