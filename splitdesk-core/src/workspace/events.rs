//! Observable state changes
//!
//! Renderers subscribe to an [`EditorSession`](super::EditorSession) and
//! receive one [`EditorEvent`] per completed state transition. Events are
//! emitted after the state is consistent again.

use std::fmt;

use super::types::{GroupId, PaneId, SplitDirection, TabId};

/// A completed state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// A new tab was created.
    TabOpened {
        /// The new tab.
        tab: TabId,
        /// Pane it was placed in.
        pane: PaneId,
    },
    /// A tab was closed.
    TabClosed {
        /// The closed tab.
        tab: TabId,
    },
    /// The global active tab changed.
    ActiveTabChanged {
        /// The new active tab, if any.
        tab: Option<TabId>,
        /// The active pane, if a layout exists.
        pane: Option<PaneId>,
    },
    /// Content or dirty state of a tab changed.
    TabUpdated {
        /// The updated tab.
        tab: TabId,
        /// Whether the tab now has unsaved changes.
        is_unsaved: bool,
    },
    /// A tab was pinned or unpinned.
    TabPinned {
        /// The tab.
        tab: TabId,
        /// New pin state.
        pinned: bool,
    },
    /// Every tab was closed and the layout discarded.
    TabsCleared,
    /// A pane was split.
    PaneSplit {
        /// The leaf that was split.
        pane: PaneId,
        /// The new sibling leaf.
        new_pane: PaneId,
        /// Split direction.
        direction: SplitDirection,
    },
    /// A pane was removed from the layout.
    PaneClosed {
        /// The removed leaf.
        pane: PaneId,
    },
    /// A split's children were resized.
    PaneResized {
        /// The split node.
        split: PaneId,
    },
    /// A tab moved to another pane or position.
    TabMoved {
        /// The moved tab.
        tab: TabId,
        /// Pane the tab now lives in.
        pane: PaneId,
    },
    /// A group was created, renamed, deleted or changed membership.
    GroupsChanged {
        /// The affected group.
        group: GroupId,
    },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

type Listener = Box<dyn FnMut(&EditorEvent) + Send>;

/// Registered listeners.
#[derive(Default)]
pub struct Subscribers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Subscribers {
    /// Creates an empty listener list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&EditorEvent) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Delivers an event to every listener in registration order.
    pub fn emit(&mut self, event: &EditorEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
