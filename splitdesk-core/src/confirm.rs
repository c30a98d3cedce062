//! Confirmation gate for destructive operations
//!
//! Closing unsaved work asks an injected [`ConfirmationGate`] first. A
//! declined confirmation is an ordinary outcome: the operation does not
//! proceed and nothing changes.

use std::fmt;

/// What the user is being asked to confirm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmRequest {
    /// Close a single tab with unsaved changes.
    CloseUnsaved {
        /// Display name of the tab.
        name: String,
    },
    /// Close every tab; `unsaved` of them have unsaved changes.
    CloseAll {
        /// Number of unsaved tabs.
        unsaved: usize,
    },
    /// Close every tab except one; `unsaved` of the closed tabs have
    /// unsaved changes.
    CloseOthers {
        /// Number of unsaved tabs.
        unsaved: usize,
    },
    /// Close a pane together with its tabs.
    ClosePane {
        /// Number of unsaved tabs in the pane.
        unsaved: usize,
    },
}

impl ConfirmRequest {
    /// Returns the prompt text shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::CloseUnsaved { name } => {
                format!("'{name}' has unsaved changes. Close anyway?")
            }
            Self::CloseAll { unsaved } => {
                format!("{unsaved} {} unsaved changes. Close all tabs?", tabs_have(*unsaved))
            }
            Self::CloseOthers { unsaved } => {
                format!("{unsaved} {} unsaved changes. Close other tabs?", tabs_have(*unsaved))
            }
            Self::ClosePane { unsaved } => {
                format!("{unsaved} {} unsaved changes. Close this pane?", tabs_have(*unsaved))
            }
        }
    }
}

const fn tabs_have(count: usize) -> &'static str {
    if count == 1 { "tab has" } else { "tabs have" }
}

impl fmt::Display for ConfirmRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Yes/no prompt invoked before discarding unsaved work.
pub trait ConfirmationGate: Send + Sync {
    /// Returns true if the operation may proceed.
    fn confirm(&self, request: &ConfirmRequest) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: Fn(&ConfirmRequest) -> bool + Send + Sync,
{
    fn confirm(&self, request: &ConfirmRequest) -> bool {
        self(request)
    }
}

/// Gate that approves everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl ConfirmationGate for AlwaysConfirm {
    fn confirm(&self, _request: &ConfirmRequest) -> bool {
        true
    }
}

/// Gate that declines everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl ConfirmationGate for NeverConfirm {
    fn confirm(&self, _request: &ConfirmRequest) -> bool {
        false
    }
}
