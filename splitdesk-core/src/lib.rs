//! Splitdesk Core Library
//!
//! The tab and split-pane core of the Splitdesk editor: which files are
//! open, how they are laid out across a tree of panes, which tab is active
//! in each pane, and how open/close/split/move keep all of that consistent.
//!
//! # Crate Structure
//!
//! - [`workspace`] - Tabs, pane tree, registry and the [`EditorSession`]
//! - [`content`] - Content provider boundary (file text by path)
//! - [`confirm`] - Confirmation gate for closing unsaved work
//! - [`config`] - Editor settings and their TOML persistence
//! - [`tracing`] - Subscriber setup and span names
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use splitdesk_core::{AlwaysConfirm, EditorSession, MemoryContentProvider, SplitDirection};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let provider = MemoryContentProvider::with_files([("main.rs", "fn main() {}")]);
//! let mut session = EditorSession::new(Arc::new(provider), AlwaysConfirm);
//!
//! let main = session.open_tab("main.rs").await;
//! session.open_tab("lib.rs").await;
//! assert_eq!(session.tab(main).unwrap().language, "rust");
//!
//! let pane = session.active_pane().unwrap();
//! session.split_pane(pane, SplitDirection::Vertical).unwrap();
//! assert_eq!(session.count_panes(), 2);
//! # });
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod confirm;
pub mod content;
pub mod error;
pub mod tracing;
pub mod workspace;

pub use config::{EditorSettings, SettingsManager};
pub use confirm::{AlwaysConfirm, ConfirmRequest, ConfirmationGate, NeverConfirm};
pub use content::{
    ContentError, ContentProvider, ContentResult, FsContentProvider, MemoryContentProvider,
};
pub use error::{ConfigError, ConfigResult, SplitdeskError};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
};
pub use workspace::{
    CloseOutcome, CycleDirection, EditorEvent, EditorSession, EditorSnapshot, GroupId, LeafPane,
    PaneId, PaneNode, SplitDirection, SplitError, SplitPane, SplitViewState, SubscriptionId, Tab,
    TabGroup, TabId,
};
