//! Tracing setup for structured logging
//!
//! Editor operations open spans named from [`span_names`] and record tab and
//! pane IDs as fields. Hosts call [`init_tracing`] once at startup; library
//! users who install their own subscriber can skip it.

use std::path::PathBuf;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static TRACING_INITIALIZED: AtomicBool = AtomicBool::new(false);

static TRACING_CONFIG: OnceLock<TracingConfig> = OnceLock::new();

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    InitializationFailed(String),

    /// Tracing already initialized
    #[error("Tracing has already been initialized")]
    AlreadyInitialized,

    /// Failed to create log file
    #[error("Failed to create log file: {0}")]
    FileCreationFailed(String),
}

/// Result type for tracing operations
pub type TracingResult<T> = Result<T, TracingError>;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum TracingLevel {
    /// Only errors
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Adds informational messages
    Info,
    /// Adds per-operation detail
    Debug,
    /// Everything
    Trace,
}

impl TracingLevel {
    /// Converts to the `tracing` crate's level
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Maps a `-v` repeat count onto a level, starting from the default.
    #[must_use]
    pub const fn from_verbosity(count: u8) -> Self {
        match count {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

impl std::str::FromStr for TracingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

impl std::fmt::Display for TracingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TracingOutput {
    /// Standard output
    Stdout,
    /// Standard error
    #[default]
    Stderr,
    /// A log file, truncated on start
    File(PathBuf),
}

/// Configuration for [`init_tracing`]
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Log level for the splitdesk crates
    pub level: TracingLevel,
    /// Output destination
    pub output: TracingOutput,
    /// Include thread IDs in each line
    pub thread_ids: bool,
    /// Custom `EnvFilter` directive (overrides `level` if set)
    pub filter: Option<String>,
}

impl TracingConfig {
    /// Creates a configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log level
    #[must_use]
    pub const fn with_level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    /// Sets the output destination
    #[must_use]
    pub fn with_output(mut self, output: TracingOutput) -> Self {
        self.output = output;
        self
    }

    /// Enables or disables thread IDs
    #[must_use]
    pub const fn with_thread_ids(mut self, enabled: bool) -> Self {
        self.thread_ids = enabled;
        self
    }

    /// Sets a custom filter directive
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Debug level on stdout with thread IDs
    #[must_use]
    pub const fn development() -> Self {
        Self {
            level: TracingLevel::Debug,
            output: TracingOutput::Stdout,
            thread_ids: true,
            filter: None,
        }
    }

    fn env_filter(&self) -> TracingResult<EnvFilter> {
        match &self.filter {
            Some(custom) => EnvFilter::try_new(custom)
                .map_err(|e| TracingError::InitializationFailed(e.to_string())),
            None => Ok(EnvFilter::try_new(format!(
                "splitdesk_core={level},splitdesk={level}",
                level = self.level
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"))),
        }
    }
}

/// Installs the global tracing subscriber
///
/// # Errors
///
/// Returns an error if:
/// - Tracing has already been initialized
/// - The filter directive is invalid
/// - File output is configured but the file cannot be created
pub fn init_tracing(config: &TracingConfig) -> TracingResult<()> {
    if TRACING_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Err(TracingError::AlreadyInitialized);
    }

    let result = install(config);
    if result.is_err() {
        TRACING_INITIALIZED.store(false, Ordering::SeqCst);
        return result;
    }
    let _ = TRACING_CONFIG.set(config.clone());

    tracing::debug!(level = %config.level, "tracing initialized");
    Ok(())
}

fn install(config: &TracingConfig) -> TracingResult<()> {
    let filter = config.env_filter()?;
    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(config.thread_ids);

    match &config.output {
        TracingOutput::Stdout => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stdout))
            .try_init(),
        TracingOutput::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_writer(std::io::stderr))
            .try_init(),
        TracingOutput::File(path) => {
            let file = std::fs::File::create(path)
                .map_err(|e| TracingError::FileCreationFailed(e.to_string()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_ansi(false).with_writer(file))
                .try_init()
        }
    }
    .map_err(|e| TracingError::InitializationFailed(e.to_string()))
}

/// Checks if tracing has been initialized
#[must_use]
pub fn is_tracing_initialized() -> bool {
    TRACING_INITIALIZED.load(Ordering::SeqCst)
}

/// Gets the active tracing configuration (if initialized)
#[must_use]
pub fn get_tracing_config() -> Option<&'static TracingConfig> {
    TRACING_CONFIG.get()
}

/// Creates an info-level span for an editor operation
///
/// ```ignore
/// let _span = trace_operation!(span_names::TAB_OPEN, path = %path.display()).entered();
/// ```
#[macro_export]
macro_rules! trace_operation {
    ($name:expr) => {
        tracing::info_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}

/// Debug-level variant of `trace_operation!` for read-mostly operations
#[macro_export]
macro_rules! trace_operation_debug {
    ($name:expr) => {
        tracing::debug_span!($name)
    };
    ($name:expr, $($field:tt)*) => {
        tracing::debug_span!($name, $($field)*)
    };
}

/// Span names for editor operations
pub mod span_names {
    /// Open (or re-focus) a tab by path
    pub const TAB_OPEN: &str = "tab.open";
    /// Close a single tab
    pub const TAB_CLOSE: &str = "tab.close";
    /// Close every tab
    pub const TAB_CLOSE_ALL: &str = "tab.close_all";
    /// Close all but one tab
    pub const TAB_CLOSE_OTHERS: &str = "tab.close_others";
    /// Activate a tab
    pub const TAB_ACTIVATE: &str = "tab.activate";
    /// Replace a tab's content
    pub const TAB_UPDATE: &str = "tab.update";
    /// Move a tab between panes
    pub const TAB_MOVE: &str = "tab.move";
    /// Split a pane
    pub const PANE_SPLIT: &str = "pane.split";
    /// Close a pane
    pub const PANE_CLOSE: &str = "pane.close";
    /// Resize a split
    pub const PANE_RESIZE: &str = "pane.resize";
    /// Fetch content from the provider
    pub const CONTENT_FETCH: &str = "content.fetch";
    /// Load settings
    pub const CONFIG_LOAD: &str = "config.load";
    /// Save settings
    pub const CONFIG_SAVE: &str = "config.save";
}
