//! Tab registry
//!
//! The single source of truth for tab entities: an ID → [`Tab`] map, a
//! path index enforcing one live tab per path, the open order, and the
//! global active tab.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::focus::AccessClock;
use super::tab::{Tab, normalize_path};
use super::types::TabId;

/// Flat index of every open tab.
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    tabs: HashMap<TabId, Tab>,
    by_path: HashMap<PathBuf, TabId>,
    /// Open tab IDs in the order they were opened.
    order: Vec<TabId>,
    active_tab: Option<TabId>,
    clock: AccessClock,
}

impl TabRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open tabs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns true if no tab is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Returns true if the tab is open.
    #[must_use]
    pub fn contains(&self, id: TabId) -> bool {
        self.tabs.contains_key(&id)
    }

    /// Returns a tab by ID.
    #[must_use]
    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.get(&id)
    }

    /// Returns a mutable tab by ID.
    pub fn get_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.get_mut(&id)
    }

    /// Returns the live tab for a path, if any. `./a.rs` finds `a.rs`.
    #[must_use]
    pub fn find_by_path(&self, path: &Path) -> Option<TabId> {
        self.by_path.get(&normalize_path(path)).copied()
    }

    /// Open tab IDs in opening order.
    #[must_use]
    pub fn ids(&self) -> &[TabId] {
        &self.order
    }

    /// Iterates over open tabs in opening order.
    pub fn iter(&self) -> impl Iterator<Item = &Tab> {
        self.order.iter().filter_map(|id| self.tabs.get(id))
    }

    /// Returns the global active tab.
    #[must_use]
    pub const fn active_tab(&self) -> Option<TabId> {
        self.active_tab
    }

    /// Sets the global active tab. Unknown IDs are ignored.
    pub fn set_active_tab(&mut self, id: Option<TabId>) {
        match id {
            Some(id) if !self.contains(id) => {}
            _ => self.active_tab = id,
        }
    }

    /// Issues a fresh access timestamp.
    pub fn now(&mut self) -> DateTime<Utc> {
        self.clock.tick()
    }

    /// Marks a tab as accessed now. Returns false for unknown IDs.
    pub fn touch(&mut self, id: TabId) -> bool {
        let now = self.clock.tick();
        match self.tabs.get_mut(&id) {
            Some(tab) => {
                tab.last_accessed = now;
                true
            }
            None => false,
        }
    }

    /// Inserts a new tab.
    ///
    /// Returns the existing ID instead if a tab for the same path is
    /// already open; the new tab is dropped in that case.
    pub fn insert(&mut self, tab: Tab) -> TabId {
        if let Some(existing) = self.find_by_path(&tab.path) {
            return existing;
        }
        let id = tab.id;
        self.by_path.insert(tab.path.clone(), id);
        self.order.push(id);
        self.tabs.insert(id, tab);
        id
    }

    /// Removes a tab, clearing the global active tab if it pointed at it.
    pub fn remove(&mut self, id: TabId) -> Option<Tab> {
        let tab = self.tabs.remove(&id)?;
        self.by_path.remove(&tab.path);
        self.order.retain(|open| *open != id);
        if self.active_tab == Some(id) {
            self.active_tab = None;
        }
        Some(tab)
    }

    /// Removes every tab and returns them in opening order.
    pub fn clear(&mut self) -> Vec<Tab> {
        let order = std::mem::take(&mut self.order);
        self.by_path.clear();
        self.active_tab = None;
        let mut removed = Vec::with_capacity(order.len());
        for id in order {
            if let Some(tab) = self.tabs.remove(&id) {
                removed.push(tab);
            }
        }
        removed
    }

    /// IDs of tabs with unsaved changes, in opening order.
    #[must_use]
    pub fn unsaved(&self) -> Vec<TabId> {
        self.iter()
            .filter(|tab| tab.is_unsaved)
            .map(|tab| tab.id)
            .collect()
    }
}
