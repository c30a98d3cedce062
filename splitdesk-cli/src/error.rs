//! CLI error types and exit codes.

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, I/O or output errors
    pub const GENERAL_ERROR: i32 = 1;
    /// Script error - a script line could not be parsed or applied
    pub const SCRIPT_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content provider error
    #[error("Content error: {0}")]
    Content(String),

    /// Pane layout error
    #[error("Layout error: {0}")]
    Layout(String),

    /// Script parse or execution error
    #[error("Script error at line {line}: {message}")]
    Script {
        /// 1-based line number
        line: usize,
        /// What went wrong
        message: String,
    },

    /// Output serialization error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<splitdesk_core::SplitdeskError> for CliError {
    fn from(err: splitdesk_core::SplitdeskError) -> Self {
        use splitdesk_core::SplitdeskError;
        match err {
            SplitdeskError::Config(e) => Self::Config(e.to_string()),
            SplitdeskError::Content(e) => Self::Content(e.to_string()),
            SplitdeskError::Split(e) => Self::Layout(e.to_string()),
            SplitdeskError::Tracing(e) => Self::Config(e.to_string()),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, content, layout, output, IO)
    /// - 2: Script error
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Script { .. } => exit_codes::SCRIPT_ERROR,
            Self::Config(_)
            | Self::Content(_)
            | Self::Layout(_)
            | Self::Output(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
