//! Editor tab and split-pane state
//!
//! The building blocks, leaves first:
//!
//! - [`Tab`]: one open file
//! - [`PaneNode`]: the recursive pane tree (leaf panes hold tab IDs, split
//!   nodes hold exactly two children)
//! - [`TabRegistry`]: the flat index of open tabs and the global active tab
//! - [`SplitViewState`]: the pane tree with its active pane and pane limit
//! - [`TabGroups`]: named, colored tab collections
//!
//! [`EditorSession`] owns all of them and exposes the editor operations.

mod error;
mod events;
mod focus;
mod groups;
mod language;
mod layout;
mod registry;
mod session;
mod snapshot;
mod tab;
mod tree;
mod types;

pub use error::{CloseOutcome, SplitError};
pub use events::{EditorEvent, SubscriptionId};
pub use focus::{AccessClock, pick_next_active};
pub use groups::{GROUP_COLORS, TabGroup, TabGroups};
pub use language::{BUILTIN_LANGUAGES, LanguageTable, PLAINTEXT};
pub use layout::{DEFAULT_MAX_PANES, PaneRemoval, SplitViewState};
pub use registry::TabRegistry;
pub use session::EditorSession;
pub use snapshot::EditorSnapshot;
pub use tab::{DEFAULT_PREVIEW_MAX_CHARS, Tab, compute_preview, display_name, normalize_path};
pub use tree::{
    DEFAULT_PANE_SIZE, FULL_PANE_SIZE, LeafPane, MAX_PANE_SIZE, MIN_PANE_SIZE, PaneNode,
    RemoveResult, SplitOutcome, SplitPane,
};
pub use types::{ColorId, CycleDirection, GroupId, PaneId, SplitDirection, TabId};
