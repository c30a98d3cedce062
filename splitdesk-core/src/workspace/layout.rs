//! Split view state and pane-structure operations
//!
//! [`SplitViewState`] owns the pane tree, the active pane and the pane
//! limit. Its methods only restructure panes and move tab IDs between
//! leaves; choosing replacement active tabs needs the registry and is done
//! by the session.
//!
//! # Example
//!
//! ```
//! use splitdesk_core::workspace::{SplitDirection, SplitViewState, TabId};
//!
//! let x = TabId::new();
//! let mut view = SplitViewState::new(x, 4);
//! let leaf = view.active_pane();
//!
//! let outcome = view.split_pane(leaf, SplitDirection::Vertical).unwrap();
//! assert_eq!(view.pane_count(), 2);
//! assert_eq!(outcome.promoted, Some(x));
//! assert_eq!(view.active_pane(), outcome.new_leaf_id);
//! ```

use serde::{Deserialize, Serialize};

use super::error::SplitError;
use super::tree::{
    FULL_PANE_SIZE, LeafPane, MAX_PANE_SIZE, MIN_PANE_SIZE, PaneNode, RemoveResult, SplitOutcome,
};
use super::types::{CycleDirection, PaneId, SplitDirection, TabId};

/// Default maximum number of leaf panes.
pub const DEFAULT_MAX_PANES: usize = 4;

/// Result of removing a pane from the split view.
#[derive(Debug, Clone, PartialEq)]
pub enum PaneRemoval {
    /// The pane was removed; other panes remain.
    Removed(LeafPane),
    /// The pane was the only one; the caller must drop the split view.
    LastPane(LeafPane),
}

impl PaneRemoval {
    /// Returns the removed leaf.
    #[must_use]
    pub const fn leaf(&self) -> &LeafPane {
        match self {
            Self::Removed(leaf) | Self::LastPane(leaf) => leaf,
        }
    }
}

/// The whole pane layout of the editor.
///
/// Invariants kept by every method:
/// - `active_pane` references an existing leaf
/// - no split node has fewer than two children
/// - the leaf count never exceeds `max_panes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitViewState {
    root: PaneNode,
    active_pane: PaneId,
    max_panes: usize,
}

impl SplitViewState {
    /// Creates a single-leaf layout whose sole, active tab is `tab`.
    #[must_use]
    pub fn new(tab: TabId, max_panes: usize) -> Self {
        let leaf = LeafPane::with_tab(tab);
        let active_pane = leaf.id;
        Self {
            root: PaneNode::Leaf(leaf),
            active_pane,
            max_panes: max_panes.max(1),
        }
    }

    /// Creates a single-leaf layout from an existing leaf.
    #[must_use]
    pub fn from_leaf(mut leaf: LeafPane, max_panes: usize) -> Self {
        leaf.size = FULL_PANE_SIZE;
        let active_pane = leaf.id;
        Self {
            root: PaneNode::Leaf(leaf),
            active_pane,
            max_panes: max_panes.max(1),
        }
    }

    /// Returns the root of the pane tree.
    #[must_use]
    pub const fn root(&self) -> &PaneNode {
        &self.root
    }

    /// Returns the active leaf pane ID.
    #[must_use]
    pub const fn active_pane(&self) -> PaneId {
        self.active_pane
    }

    /// Returns the pane limit.
    #[must_use]
    pub const fn max_panes(&self) -> usize {
        self.max_panes
    }

    /// Returns the number of leaf panes.
    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Returns true if the layout has more than one pane.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        !self.root.is_leaf()
    }

    /// Returns any node by ID.
    #[must_use]
    pub fn pane(&self, id: PaneId) -> Option<&PaneNode> {
        self.root.find(id)
    }

    /// Returns a leaf by ID.
    #[must_use]
    pub fn leaf(&self, id: PaneId) -> Option<&LeafPane> {
        self.root.find_leaf(id)
    }

    /// Returns a mutable leaf by ID.
    pub fn leaf_mut(&mut self, id: PaneId) -> Option<&mut LeafPane> {
        self.root.find_leaf_mut(id)
    }

    /// Returns the active leaf.
    #[must_use]
    pub fn active_leaf(&self) -> Option<&LeafPane> {
        self.root.find_leaf(self.active_pane)
    }

    /// Returns the leaf that holds `tab`.
    #[must_use]
    pub fn leaf_of_tab(&self, tab: TabId) -> Option<&LeafPane> {
        self.root.leaf_of_tab(tab)
    }

    /// Returns the leaf that holds `tab` as a mutable reference.
    pub fn leaf_of_tab_mut(&mut self, tab: TabId) -> Option<&mut LeafPane> {
        self.root.leaf_of_tab_mut(tab)
    }

    /// Returns the split node directly containing `pane`.
    #[must_use]
    pub fn parent_split(&self, pane: PaneId) -> Option<PaneId> {
        self.root.parent_of(pane)
    }

    /// Returns every leaf in pre-order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&LeafPane> {
        self.root.leaves()
    }

    /// Returns every tab ID across all leaves.
    #[must_use]
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.root.tab_ids()
    }

    // ========================================================================
    // Pane operations
    // ========================================================================

    /// Splits leaf `pane_id`, promoting its active tab into a new sibling.
    ///
    /// The new sibling becomes the active pane.
    ///
    /// # Errors
    ///
    /// - `SplitError::PaneNotFound` if the pane doesn't exist
    /// - `SplitError::NotALeaf` if the pane is a split node
    /// - `SplitError::CapacityExceeded` if the layout already has
    ///   `max_panes` leaves
    pub fn split_pane(
        &mut self,
        pane_id: PaneId,
        direction: SplitDirection,
    ) -> Result<SplitOutcome, SplitError> {
        self.require_leaf(pane_id)?;
        if self.pane_count() >= self.max_panes {
            return Err(SplitError::CapacityExceeded {
                max: self.max_panes,
            });
        }
        let outcome = self
            .root
            .split_leaf(pane_id, direction)
            .ok_or(SplitError::PaneNotFound(pane_id))?;
        self.active_pane = outcome.new_leaf_id;
        Ok(outcome)
    }

    /// Removes leaf `pane_id` from the tree.
    ///
    /// The removed leaf (with its tab IDs) is returned so the caller can
    /// close its tabs. If it was the active pane, the first remaining leaf
    /// becomes active.
    ///
    /// # Errors
    ///
    /// - `SplitError::PaneNotFound` if the pane doesn't exist
    /// - `SplitError::NotALeaf` if the pane is a split node
    pub fn remove_pane(&mut self, pane_id: PaneId) -> Result<PaneRemoval, SplitError> {
        self.require_leaf(pane_id)?;
        match self.root.remove_leaf(pane_id) {
            RemoveResult::NotFound => Err(SplitError::PaneNotFound(pane_id)),
            RemoveResult::RemovedSelf => {
                let leaf = self
                    .root
                    .as_leaf()
                    .cloned()
                    .ok_or(SplitError::PaneNotFound(pane_id))?;
                Ok(PaneRemoval::LastPane(leaf))
            }
            RemoveResult::Removed(leaf) => {
                if self.active_pane == pane_id {
                    self.active_pane = self.root.first_leaf().id;
                }
                Ok(PaneRemoval::Removed(leaf))
            }
        }
    }

    /// Makes `pane_id` the active pane.
    ///
    /// # Errors
    ///
    /// - `SplitError::PaneNotFound` if the pane doesn't exist
    /// - `SplitError::NotALeaf` if the pane is a split node
    pub fn set_active_pane(&mut self, pane_id: PaneId) -> Result<(), SplitError> {
        self.require_leaf(pane_id)?;
        self.active_pane = pane_id;
        Ok(())
    }

    /// Moves `tab` to the end of leaf `target` and makes it that leaf's
    /// active tab; `target` becomes the active pane.
    ///
    /// The source leaf loses its active tab if it was `tab`; no
    /// replacement is chosen. Moving a tab onto its own pane only activates
    /// it.
    ///
    /// Returns the source pane ID, or `None` if the tab is in no pane.
    ///
    /// # Errors
    ///
    /// - `SplitError::PaneNotFound` if the target doesn't exist
    /// - `SplitError::NotALeaf` if the target is a split node
    pub fn move_tab(&mut self, tab: TabId, target: PaneId) -> Result<Option<PaneId>, SplitError> {
        self.require_leaf(target)?;
        let Some(source) = self.root.leaf_of_tab_mut(tab) else {
            return Ok(None);
        };
        let source_id = source.id;
        if source_id != target {
            source.remove_tab(tab);
        }
        if let Some(leaf) = self.root.find_leaf_mut(target) {
            leaf.push_active(tab);
        }
        self.active_pane = target;
        Ok(Some(source_id))
    }

    /// Removes `tab` from whichever leaf holds it, clearing that leaf's
    /// active tab if needed. Returns the leaf ID.
    pub fn detach_tab(&mut self, tab: TabId) -> Option<PaneId> {
        let leaf = self.root.leaf_of_tab_mut(tab)?;
        leaf.remove_tab(tab);
        Some(leaf.id)
    }

    /// Adds `tab` to the active pane and makes it that pane's active tab.
    pub fn insert_into_active(&mut self, tab: TabId) {
        let active = self.active_pane;
        if let Some(leaf) = self.root.find_leaf_mut(active) {
            leaf.push_active(tab);
        }
    }

    /// Makes `tab` the active tab of its leaf and that leaf the active
    /// pane. Returns false if no leaf holds it.
    pub fn focus_tab(&mut self, tab: TabId) -> bool {
        let Some(leaf) = self.root.leaf_of_tab_mut(tab) else {
            return false;
        };
        leaf.active_tab = Some(tab);
        self.active_pane = leaf.id;
        true
    }

    /// Collapses the layout to a single leaf holding only `keep`.
    ///
    /// The leaf that held `keep` survives (same ID). Returns the IDs of all
    /// other tabs, or `None` if no leaf holds `keep`.
    pub fn retain_only(&mut self, keep: TabId) -> Option<Vec<TabId>> {
        let mut survivor = self.root.leaf_of_tab(keep)?.clone();
        let dropped = self
            .root
            .tab_ids()
            .into_iter()
            .filter(|id| *id != keep)
            .collect();
        survivor.tabs = vec![keep];
        survivor.active_tab = Some(keep);
        survivor.size = FULL_PANE_SIZE;
        self.active_pane = survivor.id;
        self.root = PaneNode::Leaf(survivor);
        Some(dropped)
    }

    /// Sets the size weights of split `split_id`'s children to `first_size`
    /// and `100 - first_size`.
    ///
    /// # Errors
    ///
    /// - `SplitError::InvalidSize` unless `0 < first_size < 100`
    /// - `SplitError::PaneNotFound` if the node doesn't exist
    /// - `SplitError::NotASplit` if the node is a leaf
    pub fn resize_split(&mut self, split_id: PaneId, first_size: f64) -> Result<(), SplitError> {
        if !(first_size > MIN_PANE_SIZE && first_size < MAX_PANE_SIZE) {
            return Err(SplitError::InvalidSize(first_size));
        }
        match self.root.find(split_id) {
            None => return Err(SplitError::PaneNotFound(split_id)),
            Some(node) if node.is_leaf() => return Err(SplitError::NotASplit(split_id)),
            Some(_) => {}
        }
        self.root.resize_split(split_id, first_size);
        Ok(())
    }

    /// Moves `tab` to position `index` within its own leaf (clamped to the
    /// end). Returns false if no leaf holds it.
    pub fn reorder_tab(&mut self, tab: TabId, index: usize) -> bool {
        let Some(leaf) = self.root.leaf_of_tab_mut(tab) else {
            return false;
        };
        leaf.tabs.retain(|id| *id != tab);
        let index = index.min(leaf.tabs.len());
        leaf.tabs.insert(index, tab);
        true
    }

    /// Returns the neighbour of the active pane's active tab in list order,
    /// wrapping around. Falls back to the first tab when the pane has no
    /// active tab.
    #[must_use]
    pub fn cycle_target(&self, direction: CycleDirection) -> Option<TabId> {
        let leaf = self.active_leaf()?;
        if leaf.tabs.is_empty() {
            return None;
        }
        let len = leaf.tabs.len();
        let Some(current) = leaf
            .active_tab
            .and_then(|active| leaf.tabs.iter().position(|id| *id == active))
        else {
            return leaf.tabs.first().copied();
        };
        let next = match direction {
            CycleDirection::Next => (current + 1) % len,
            CycleDirection::Previous => (current + len - 1) % len,
        };
        leaf.tabs.get(next).copied()
    }

    fn require_leaf(&self, pane_id: PaneId) -> Result<&LeafPane, SplitError> {
        let node = self
            .root
            .find(pane_id)
            .ok_or(SplitError::PaneNotFound(pane_id))?;
        node.as_leaf().ok_or(SplitError::NotALeaf(pane_id))
    }
}
