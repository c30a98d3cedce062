//! Error and outcome types for workspace operations
//!
//! Stale IDs and declined confirmations are expected in a UI-driven editor,
//! so operations report them as values and leave the state untouched.

use super::types::PaneId;

/// Reasons a pane-structure operation was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SplitError {
    /// The specified pane was not found.
    #[error("pane not found: {0}")]
    PaneNotFound(PaneId),

    /// The pane exists but is a split node, not a leaf.
    #[error("pane is not a leaf: {0}")]
    NotALeaf(PaneId),

    /// The pane exists but is a leaf, not a split node.
    #[error("pane is not a split: {0}")]
    NotASplit(PaneId),

    /// Splitting would exceed the configured pane limit.
    #[error("pane limit reached ({max} panes)")]
    CapacityExceeded {
        /// Configured maximum number of leaf panes.
        max: usize,
    },

    /// Invalid size weight (must be strictly between 0 and 100).
    #[error("invalid pane size: {0} (must be between 0 and 100)")]
    InvalidSize(f64),

    /// There is no pane tree yet (no tabs open).
    #[error("no panes are open")]
    NoLayout,
}

/// Result of a close operation guarded by the confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tabs were closed.
    Closed,
    /// The user declined the confirmation; nothing changed.
    Declined,
    /// The referenced tab or pane does not exist; nothing changed.
    NotFound,
}

impl CloseOutcome {
    /// Returns true if the state changed.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}
