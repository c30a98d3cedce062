//! Pane tree structure for split layouts
//!
//! The editor area is a binary tree. Each node is either a leaf pane
//! holding an ordered list of tabs, or a split node with exactly two
//! children and a direction.
//!
//! ```text
//! Split(vertical)
//! ├── Leaf(A, [main.rs, lib.rs])
//! └── Split(horizontal)
//!     ├── Leaf(B, [])
//!     └── Leaf(C, [README.md])
//! ```
//!
//! Leaves hold tab IDs only; the tab entities live in the registry.

use serde::{Deserialize, Serialize};

use super::types::{PaneId, SplitDirection, TabId};

/// Size weight of a root node, in percent.
pub const FULL_PANE_SIZE: f64 = 100.0;

/// Size weight given to each child of a fresh split, in percent.
pub const DEFAULT_PANE_SIZE: f64 = 50.0;

/// Smallest size weight a split child may be resized to (exclusive).
pub const MIN_PANE_SIZE: f64 = 0.0;

/// Largest size weight a split child may be resized to (exclusive).
pub const MAX_PANE_SIZE: f64 = 100.0;

/// A node in the pane tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PaneNode {
    /// A leaf pane that holds tabs.
    Leaf(LeafPane),
    /// A split containing two child nodes.
    Split(SplitPane),
}

/// A leaf pane: the region that actually shows tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafPane {
    /// Unique identifier for this pane.
    pub id: PaneId,
    /// Tabs in display order.
    pub tabs: Vec<TabId>,
    /// Tab shown in this pane; always a member of `tabs` when set.
    pub active_tab: Option<TabId>,
    /// Relative layout weight within the parent split.
    pub size: f64,
}

/// A split node containing two children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitPane {
    /// Unique identifier for this node.
    pub id: PaneId,
    /// Split direction.
    pub direction: SplitDirection,
    /// First child (top for horizontal, left for vertical).
    pub first: Box<PaneNode>,
    /// Second child (bottom for horizontal, right for vertical).
    pub second: Box<PaneNode>,
    /// Relative layout weight within the parent split.
    pub size: f64,
}

/// Result of splitting a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitOutcome {
    /// ID of the split node that replaced the leaf.
    pub split_id: PaneId,
    /// ID of the newly created sibling leaf.
    pub new_leaf_id: PaneId,
    /// Tab that moved into the new leaf, if the original had an active tab.
    pub promoted: Option<TabId>,
}

/// Result of a leaf removal.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveResult {
    /// No leaf with that ID exists in the tree.
    NotFound,
    /// The leaf was removed and its sibling took the parent's place.
    Removed(LeafPane),
    /// The node itself is the leaf; the caller owns the removal.
    RemovedSelf,
}

impl RemoveResult {
    /// Returns true if the leaf was found.
    #[must_use]
    pub const fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_) | Self::RemovedSelf)
    }
}

impl LeafPane {
    /// Creates an empty leaf with a unique ID.
    #[must_use]
    pub fn new() -> Self {
        Self::with_id(PaneId::new())
    }

    /// Creates an empty leaf with the given ID.
    #[must_use]
    pub fn with_id(id: PaneId) -> Self {
        Self {
            id,
            tabs: Vec::new(),
            active_tab: None,
            size: FULL_PANE_SIZE,
        }
    }

    /// Creates a leaf whose sole, active occupant is `tab`.
    #[must_use]
    pub fn with_tab(tab: TabId) -> Self {
        Self {
            tabs: vec![tab],
            active_tab: Some(tab),
            ..Self::new()
        }
    }

    /// Returns true if the leaf holds no tabs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Returns true if `tab` lives in this leaf.
    #[must_use]
    pub fn contains(&self, tab: TabId) -> bool {
        self.tabs.contains(&tab)
    }

    /// Appends a tab and makes it the active one. Does nothing if present.
    pub fn push_active(&mut self, tab: TabId) {
        if !self.contains(tab) {
            self.tabs.push(tab);
        }
        self.active_tab = Some(tab);
    }

    /// Removes a tab from the list. Clears `active_tab` if it pointed at
    /// the tab, without choosing a replacement.
    ///
    /// Returns true if the tab was present.
    pub fn remove_tab(&mut self, tab: TabId) -> bool {
        let Some(index) = self.tabs.iter().position(|id| *id == tab) else {
            return false;
        };
        self.tabs.remove(index);
        if self.active_tab == Some(tab) {
            self.active_tab = None;
        }
        true
    }
}

impl Default for LeafPane {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitPane {
    /// Creates a split with an even division between the two children.
    #[must_use]
    pub fn new(direction: SplitDirection, mut first: PaneNode, mut second: PaneNode) -> Self {
        first.set_size(DEFAULT_PANE_SIZE);
        second.set_size(DEFAULT_PANE_SIZE);
        Self {
            id: PaneId::new(),
            direction,
            first: Box::new(first),
            second: Box::new(second),
            size: FULL_PANE_SIZE,
        }
    }
}

impl PaneNode {
    /// Creates a new node holding an empty leaf.
    #[must_use]
    pub fn new_leaf() -> Self {
        Self::Leaf(LeafPane::new())
    }

    /// Creates a split node from two children.
    #[must_use]
    pub fn split(direction: SplitDirection, first: Self, second: Self) -> Self {
        Self::Split(SplitPane::new(direction, first, second))
    }

    /// Returns the node's ID.
    #[must_use]
    pub const fn id(&self) -> PaneId {
        match self {
            Self::Leaf(leaf) => leaf.id,
            Self::Split(split) => split.id,
        }
    }

    /// Returns the node's size weight.
    #[must_use]
    pub const fn size(&self) -> f64 {
        match self {
            Self::Leaf(leaf) => leaf.size,
            Self::Split(split) => split.size,
        }
    }

    /// Sets the node's size weight.
    pub fn set_size(&mut self, size: f64) {
        match self {
            Self::Leaf(leaf) => leaf.size = size,
            Self::Split(split) => split.size = size,
        }
    }

    /// Returns true if this is a leaf node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the leaf if this is a leaf node.
    #[must_use]
    pub const fn as_leaf(&self) -> Option<&LeafPane> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            Self::Split(_) => None,
        }
    }

    /// Returns the split if this is a split node.
    #[must_use]
    pub const fn as_split(&self) -> Option<&SplitPane> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => Some(split),
        }
    }

    // ========================================================================
    // Tree Traversal Methods
    // ========================================================================

    /// Finds any node (leaf or split) by ID, depth-first.
    #[must_use]
    pub fn find(&self, id: PaneId) -> Option<&Self> {
        if self.id() == id {
            return Some(self);
        }
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => split.first.find(id).or_else(|| split.second.find(id)),
        }
    }

    /// Finds a leaf by ID.
    #[must_use]
    pub fn find_leaf(&self, id: PaneId) -> Option<&LeafPane> {
        self.find(id).and_then(Self::as_leaf)
    }

    /// Finds a leaf by ID and returns a mutable reference.
    pub fn find_leaf_mut(&mut self, id: PaneId) -> Option<&mut LeafPane> {
        match self {
            Self::Leaf(leaf) => (leaf.id == id).then_some(leaf),
            Self::Split(split) => {
                if let Some(leaf) = split.first.find_leaf_mut(id) {
                    Some(leaf)
                } else {
                    split.second.find_leaf_mut(id)
                }
            }
        }
    }

    /// Finds a split node by ID and returns a mutable reference.
    pub fn find_split_mut(&mut self, id: PaneId) -> Option<&mut SplitPane> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => {
                if split.id == id {
                    return Some(split);
                }
                if let Some(found) = split.first.find_split_mut(id) {
                    Some(found)
                } else {
                    split.second.find_split_mut(id)
                }
            }
        }
    }

    /// Returns the ID of the split node whose direct child is `id`.
    #[must_use]
    pub fn parent_of(&self, id: PaneId) -> Option<PaneId> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(split) => {
                if split.first.id() == id || split.second.id() == id {
                    return Some(split.id);
                }
                split
                    .first
                    .parent_of(id)
                    .or_else(|| split.second.parent_of(id))
            }
        }
    }

    /// Returns the leaf holding `tab`.
    #[must_use]
    pub fn leaf_of_tab(&self, tab: TabId) -> Option<&LeafPane> {
        match self {
            Self::Leaf(leaf) => leaf.contains(tab).then_some(leaf),
            Self::Split(split) => split
                .first
                .leaf_of_tab(tab)
                .or_else(|| split.second.leaf_of_tab(tab)),
        }
    }

    /// Returns the leaf holding `tab` as a mutable reference.
    pub fn leaf_of_tab_mut(&mut self, tab: TabId) -> Option<&mut LeafPane> {
        match self {
            Self::Leaf(leaf) => leaf.contains(tab).then_some(leaf),
            Self::Split(split) => {
                if let Some(leaf) = split.first.leaf_of_tab_mut(tab) {
                    Some(leaf)
                } else {
                    split.second.leaf_of_tab_mut(tab)
                }
            }
        }
    }

    /// Returns every leaf in pre-order (depth-first, first child first).
    #[must_use]
    pub fn leaves(&self) -> Vec<&LeafPane> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a LeafPane>) {
        match self {
            Self::Leaf(leaf) => leaves.push(leaf),
            Self::Split(split) => {
                split.first.collect_leaves(leaves);
                split.second.collect_leaves(leaves);
            }
        }
    }

    /// Returns the IDs of every leaf in pre-order.
    #[must_use]
    pub fn leaf_ids(&self) -> Vec<PaneId> {
        self.leaves().into_iter().map(|leaf| leaf.id).collect()
    }

    /// Returns every tab ID across all leaves, leaf by leaf in pre-order.
    #[must_use]
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.leaves()
            .into_iter()
            .flat_map(|leaf| leaf.tabs.iter().copied())
            .collect()
    }

    /// Returns the number of leaves. Split nodes are not counted.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Split(split) => split.first.leaf_count() + split.second.leaf_count(),
        }
    }

    /// Returns the depth of the tree. A single leaf has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf(_) => 0,
            Self::Split(split) => 1 + split.first.depth().max(split.second.depth()),
        }
    }

    /// Returns the first leaf (leftmost/topmost).
    #[must_use]
    pub fn first_leaf(&self) -> &LeafPane {
        match self {
            Self::Leaf(leaf) => leaf,
            Self::Split(split) => split.first.first_leaf(),
        }
    }

    // ========================================================================
    // Tree Mutation Methods
    // ========================================================================

    /// Splits the leaf `leaf_id` in `direction`.
    ///
    /// The leaf's active tab is promoted into a new sibling leaf where it is
    /// the sole, active occupant. The remaining tabs stay in the original
    /// leaf, which keeps its ID and is left without an active tab. The leaf
    /// is replaced by a new split node that takes over its size weight;
    /// both children get an even share.
    ///
    /// Returns `None` if no leaf with that ID exists.
    pub fn split_leaf(&mut self, leaf_id: PaneId, direction: SplitDirection) -> Option<SplitOutcome> {
        match self {
            Self::Leaf(leaf) => {
                if leaf.id != leaf_id {
                    return None;
                }
                let mut original = leaf.clone();
                let promoted = original.active_tab;
                let sibling = match promoted {
                    Some(tab) => {
                        original.remove_tab(tab);
                        LeafPane::with_tab(tab)
                    }
                    None => LeafPane::new(),
                };
                let new_leaf_id = sibling.id;
                let size = original.size;

                let mut split = SplitPane::new(direction, Self::Leaf(original), Self::Leaf(sibling));
                split.size = size;
                let split_id = split.id;
                *self = Self::Split(split);

                Some(SplitOutcome {
                    split_id,
                    new_leaf_id,
                    promoted,
                })
            }
            Self::Split(split) => split
                .first
                .split_leaf(leaf_id, direction)
                .or_else(|| split.second.split_leaf(leaf_id, direction)),
        }
    }

    /// Removes a leaf from the tree.
    ///
    /// When a split loses one child, the surviving child takes the split's
    /// place (and its size weight), so no split is ever left with a single
    /// child. If this node is itself the leaf, `RemovedSelf` is returned and
    /// the caller decides what an empty tree means.
    pub fn remove_leaf(&mut self, leaf_id: PaneId) -> RemoveResult {
        match self {
            Self::Leaf(leaf) => {
                if leaf.id == leaf_id {
                    RemoveResult::RemovedSelf
                } else {
                    RemoveResult::NotFound
                }
            }
            Self::Split(split) => {
                let size = split.size;

                if let Self::Leaf(first) = split.first.as_ref()
                    && first.id == leaf_id
                {
                    let removed = first.clone();
                    let mut survivor =
                        std::mem::replace(split.second.as_mut(), Self::new_leaf());
                    survivor.set_size(size);
                    *self = survivor;
                    return RemoveResult::Removed(removed);
                }

                if let Self::Leaf(second) = split.second.as_ref()
                    && second.id == leaf_id
                {
                    let removed = second.clone();
                    let mut survivor = std::mem::replace(split.first.as_mut(), Self::new_leaf());
                    survivor.set_size(size);
                    *self = survivor;
                    return RemoveResult::Removed(removed);
                }

                match split.first.remove_leaf(leaf_id) {
                    RemoveResult::NotFound => split.second.remove_leaf(leaf_id),
                    result => result,
                }
            }
        }
    }

    /// Sets the children of split `split_id` to `first_size` and
    /// `100 - first_size`.
    ///
    /// Returns false if no split with that ID exists. The size is not
    /// validated here.
    pub fn resize_split(&mut self, split_id: PaneId, first_size: f64) -> bool {
        let Some(split) = self.find_split_mut(split_id) else {
            return false;
        };
        split.first.set_size(first_size);
        split.second.set_size(MAX_PANE_SIZE - first_size);
        true
    }
}
