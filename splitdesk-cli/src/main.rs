//! Splitdesk CLI - Command-line driver for the Splitdesk editor core
//!
//! Opens files into an editor session, replays scripted tab and pane
//! operations, and inspects the language table and settings.

mod cli;
mod commands;
mod error;
mod format;
mod util;

use clap::Parser;
use cli::Cli;
use commands::GlobalOptions;
use splitdesk_core::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();

    if cli.verbose > 0 && !cli.quiet {
        let config = TracingConfig::new().with_level(TracingLevel::from_verbosity(cli.verbose));
        if let Err(e) = init_tracing(&config) {
            eprintln!("Warning: {e}");
        }
    }

    let options = GlobalOptions {
        config_path: cli.config.as_deref(),
        assume_yes: cli.yes,
        quiet: cli.quiet,
    };
    let result = commands::dispatch(options, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
