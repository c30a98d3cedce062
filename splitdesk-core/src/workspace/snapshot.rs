//! Serializable read model of the editor state

use serde::{Deserialize, Serialize};

use super::groups::TabGroup;
use super::tab::Tab;
use super::tree::PaneNode;
use super::types::{PaneId, TabId};

/// Everything a renderer needs to draw the editor, detached from the
/// session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSnapshot {
    /// Session revision the snapshot was taken at.
    pub revision: u64,
    /// Open tabs in opening order.
    pub tabs: Vec<Tab>,
    /// Global active tab.
    pub active_tab: Option<TabId>,
    /// Active leaf pane.
    pub active_pane: Option<PaneId>,
    /// Pane tree, absent when no layout exists.
    pub layout: Option<PaneNode>,
    /// Pane limit.
    pub max_panes: usize,
    /// Tab groups in creation order.
    pub groups: Vec<TabGroup>,
}

impl EditorSnapshot {
    /// Returns a tab by ID.
    #[must_use]
    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    /// Returns the number of leaf panes.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.layout.as_ref().map_or(0, PaneNode::leaf_count)
    }

    /// Serializes the snapshot as pretty-printed JSON for renderers across
    /// a process boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
