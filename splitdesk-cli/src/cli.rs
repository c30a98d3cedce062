//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use splitdesk_core::SplitDirection;

/// Splitdesk command-line interface for driving the editor core
#[derive(Parser)]
#[command(name = "splitdesk")]
#[command(author, version, about = "Splitdesk editor core driver")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "SPLITDESK_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Open files and print the resulting layout
    #[command(about = "Open files into a session and print the layout")]
    Open {
        /// Files to open, in order
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Project root for relative paths
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Split the active pane after opening (repeatable)
        #[arg(short, long, value_enum)]
        split: Vec<SplitArg>,

        /// Output format
        #[arg(short, long, default_value = "tree", value_enum)]
        format: LayoutFormat,
    },

    /// Replay an editor script
    #[command(about = "Run a script of editor operations and print the layout")]
    Run {
        /// Script file, one operation per line
        script: PathBuf,

        /// Project root for relative paths
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "tree", value_enum)]
        format: LayoutFormat,
    },

    /// Show the extension to language table
    #[command(about = "List the effective extension to language mapping")]
    Languages {
        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: TableFormat,
    },

    /// Settings management
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Print the effective settings as TOML
    Show,

    /// Print the settings file path
    Path,

    /// Write default settings, keeping an existing file unless forced
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

/// Split direction argument
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SplitArg {
    /// Top and bottom panes
    Horizontal,
    /// Side-by-side panes
    Vertical,
}

impl From<SplitArg> for SplitDirection {
    fn from(arg: SplitArg) -> Self {
        match arg {
            SplitArg::Horizontal => Self::Horizontal,
            SplitArg::Vertical => Self::Vertical,
        }
    }
}

/// Layout output formats
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LayoutFormat {
    /// Indented pane tree
    Tree,
    /// Full session snapshot as JSON
    Json,
}

/// Tabular output formats
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum TableFormat {
    /// Aligned columns
    Table,
    /// JSON object
    Json,
}
