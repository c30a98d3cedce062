//! Tab groups for organizing open files
//!
//! A group is a named, colored collection of tabs. Groups sit beside the
//! pane tree: they never move tabs between panes and have no say in which
//! tab becomes active.
//!
//! Colors come from a fixed palette. Allocation walks the palette and
//! prefers colors no live group uses; once every color is taken it wraps
//! around and shares.
//!
//! # Example
//!
//! ```
//! use splitdesk_core::workspace::{TabGroups, TabId};
//!
//! let mut groups = TabGroups::new();
//! let backend = groups.create("Backend");
//! let frontend = groups.create("Frontend");
//! assert_ne!(groups.get(backend).unwrap().color, groups.get(frontend).unwrap().color);
//!
//! let tab = TabId::new();
//! groups.add_tab(backend, tab);
//! groups.add_tab(frontend, tab);
//! // a tab belongs to at most one group
//! assert_eq!(groups.group_of(tab), Some(frontend));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::types::{ColorId, GroupId, TabId};

/// Group color palette (RGB).
///
/// Chosen to stay distinct on both light and dark themes.
pub const GROUP_COLORS: &[(u8, u8, u8)] = &[
    (0x35, 0x84, 0xe4), // Blue
    (0x2e, 0xc2, 0x7e), // Green
    (0xff, 0x78, 0x00), // Orange
    (0x91, 0x41, 0xac), // Purple
    (0x00, 0xb4, 0xd8), // Cyan
    (0xe0, 0x1b, 0x24), // Red
];

/// A named collection of tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabGroup {
    /// Unique identifier.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Palette color.
    pub color: ColorId,
    /// Member tabs in insertion order.
    pub tabs: Vec<TabId>,
}

/// Owns every tab group and their colors.
#[derive(Debug, Clone, Default)]
pub struct TabGroups {
    groups: Vec<TabGroup>,
    next_color: u8,
}

impl TabGroups {
    /// Creates an empty group set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a group and returns its ID.
    pub fn create(&mut self, name: impl Into<String>) -> GroupId {
        let color = self.allocate_color();
        let group = TabGroup {
            id: GroupId::new(),
            name: name.into(),
            color,
            tabs: Vec::new(),
        };
        let id = group.id;
        self.groups.push(group);
        id
    }

    /// Renames a group. Returns false for unknown IDs.
    pub fn rename(&mut self, id: GroupId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(group) => {
                group.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Deletes a group. Its tabs stay open; its color becomes free again.
    pub fn delete(&mut self, id: GroupId) -> Option<TabGroup> {
        let index = self.groups.iter().position(|g| g.id == id)?;
        Some(self.groups.remove(index))
    }

    /// Adds `tab` to a group, taking it out of any other group first.
    /// Returns false for unknown group IDs.
    pub fn add_tab(&mut self, id: GroupId, tab: TabId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.remove_tab(tab);
        if let Some(group) = self.get_mut(id) {
            group.tabs.push(tab);
        }
        true
    }

    /// Removes `tab` from whichever group holds it. Returns that group.
    pub fn remove_tab(&mut self, tab: TabId) -> Option<GroupId> {
        let group = self.groups.iter_mut().find(|g| g.tabs.contains(&tab))?;
        group.tabs.retain(|member| *member != tab);
        Some(group.id)
    }

    /// Empties every group. The groups themselves remain.
    pub fn clear_members(&mut self) {
        for group in &mut self.groups {
            group.tabs.clear();
        }
    }

    /// Returns the group that holds `tab`.
    #[must_use]
    pub fn group_of(&self, tab: TabId) -> Option<GroupId> {
        self.groups
            .iter()
            .find(|g| g.tabs.contains(&tab))
            .map(|g| g.id)
    }

    /// Returns a group by ID.
    #[must_use]
    pub fn get(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    fn get_mut(&mut self, id: GroupId) -> Option<&mut TabGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// Returns every group in creation order.
    #[must_use]
    pub fn all(&self) -> &[TabGroup] {
        &self.groups
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the RGB tuple for a color, if it is in the palette.
    #[must_use]
    pub fn color_rgb(color: ColorId) -> Option<(u8, u8, u8)> {
        GROUP_COLORS.get(usize::from(color.index())).copied()
    }

    fn allocate_color(&mut self) -> ColorId {
        let palette_size = GROUP_COLORS.len() as u8;
        let in_use: HashSet<ColorId> = self.groups.iter().map(|g| g.color).collect();
        let start = self.next_color;
        let mut index = start;
        loop {
            let color = ColorId::new(index);
            index = (index + 1) % palette_size;
            if !in_use.contains(&color) || index == start {
                self.next_color = index;
                return color;
            }
        }
    }
}
