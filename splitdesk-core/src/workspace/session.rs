//! Editor session
//!
//! [`EditorSession`] is the owned state object of the editor core. It wires
//! the tab registry, the split view and the tab groups together and is the
//! only place where an operation touches more than one of them, so every
//! cross-structure rule lives here:
//!
//! - the leaves of the split view partition the open tabs
//! - the global active tab, when set, is the active tab of its leaf
//! - replacement active tabs are always chosen by [`pick_next_active`]
//!
//! Stale IDs are no-ops reported through return values. Nothing here panics
//! on bad input.

use std::path::Path;
use std::sync::Arc;

use tracing::{Instrument, debug, warn};

use super::error::{CloseOutcome, SplitError};
use super::events::{EditorEvent, Subscribers, SubscriptionId};
use super::focus::pick_next_active;
use super::groups::{TabGroup, TabGroups};
use super::language::LanguageTable;
use super::layout::{PaneRemoval, SplitViewState};
use super::registry::TabRegistry;
use super::snapshot::EditorSnapshot;
use super::tab::Tab;
use super::tree::{PaneNode, SplitOutcome};
use super::types::{CycleDirection, GroupId, PaneId, SplitDirection, TabId};
use crate::config::EditorSettings;
use crate::confirm::{ConfirmRequest, ConfirmationGate};
use crate::content::ContentProvider;
use crate::tracing::span_names;
use crate::{trace_operation, trace_operation_debug};

/// The editor's tab and pane state.
pub struct EditorSession {
    registry: TabRegistry,
    split_view: Option<SplitViewState>,
    groups: TabGroups,
    subscribers: Subscribers,
    revision: u64,
    provider: Arc<dyn ContentProvider>,
    gate: Box<dyn ConfirmationGate>,
    languages: LanguageTable,
    settings: EditorSettings,
}

impl EditorSession {
    /// Creates an empty session with default settings.
    pub fn new(provider: Arc<dyn ContentProvider>, gate: impl ConfirmationGate + 'static) -> Self {
        Self::with_settings(EditorSettings::default(), provider, gate)
    }

    /// Creates an empty session. Out-of-range settings are clamped.
    pub fn with_settings(
        mut settings: EditorSettings,
        provider: Arc<dyn ContentProvider>,
        gate: impl ConfirmationGate + 'static,
    ) -> Self {
        settings.validate();
        Self {
            registry: TabRegistry::new(),
            split_view: None,
            groups: TabGroups::new(),
            subscribers: Subscribers::new(),
            revision: 0,
            provider,
            gate: Box::new(gate),
            languages: settings.language_table(),
            settings,
        }
    }

    /// Replaces the confirmation gate.
    pub fn set_confirmation_gate(&mut self, gate: impl ConfirmationGate + 'static) {
        self.gate = Box::new(gate);
    }

    // ========================================================================
    // Tab registry operations
    // ========================================================================

    /// Opens `path`, or focuses the tab already showing it.
    ///
    /// A new tab is filled from the content provider before it is inserted
    /// into the active pane. A provider failure is logged and the tab is
    /// created empty.
    pub async fn open_tab(&mut self, path: impl AsRef<Path>) -> TabId {
        let path = path.as_ref();
        let span = trace_operation!(span_names::TAB_OPEN, path = %path.display());

        if let Some(existing) = self.registry.find_by_path(path) {
            let _guard = span.enter();
            debug!(tab_id = %existing, "path already open, focusing");
            self.set_active_tab(existing);
            return existing;
        }

        let content = Self::fetch_content(Arc::clone(&self.provider), path)
            .instrument(span.clone())
            .await;
        let _guard = span.enter();

        let now = self.registry.now();
        let tab = Tab::new(
            path.to_path_buf(),
            self.languages.infer(path),
            content,
            self.settings.preview_max_chars,
            now,
        );
        let id = self.registry.insert(tab);

        let max_panes = self.settings.max_panes;
        let view = self
            .split_view
            .get_or_insert_with(|| SplitViewState::new(id, max_panes));
        view.insert_into_active(id);
        let pane = view.active_pane();
        self.registry.set_active_tab(Some(id));
        debug!(tab_id = %id, pane_id = %pane, "tab opened");

        self.emit(EditorEvent::TabOpened { tab: id, pane });
        self.emit_active_changed();
        id
    }

    async fn fetch_content(provider: Arc<dyn ContentProvider>, path: &Path) -> String {
        let span = trace_operation_debug!(span_names::CONTENT_FETCH);
        match provider.get_content(path).instrument(span).await {
            Ok(Some(text)) => text,
            Ok(None) => String::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "content fetch failed, opening empty");
                String::new()
            }
        }
    }

    /// Closes a tab, asking for confirmation first if it is unsaved.
    pub fn close_tab(&mut self, id: TabId) -> CloseOutcome {
        let _span = trace_operation!(span_names::TAB_CLOSE, tab_id = %id).entered();

        let Some(tab) = self.registry.get(id) else {
            debug!("tab not open, nothing to close");
            return CloseOutcome::NotFound;
        };
        if tab.is_unsaved {
            let request = ConfirmRequest::CloseUnsaved {
                name: tab.name.clone(),
            };
            if !self.gate.confirm(&request) {
                debug!("close declined");
                return CloseOutcome::Declined;
            }
        }

        let was_active = self.registry.active_tab() == Some(id);
        self.discard_tab(id);
        if was_active {
            self.recompute_active_tab();
        }
        CloseOutcome::Closed
    }

    /// Closes every tab and discards the layout.
    ///
    /// One confirmation covers all unsaved tabs. Groups survive but lose
    /// their members.
    pub fn close_all_tabs(&mut self) -> CloseOutcome {
        let unsaved = self.registry.unsaved().len();
        let _span = trace_operation!(
            span_names::TAB_CLOSE_ALL,
            tab_count = self.registry.len(),
            unsaved
        )
        .entered();

        if unsaved > 0 && !self.gate.confirm(&ConfirmRequest::CloseAll { unsaved }) {
            debug!("close all declined");
            return CloseOutcome::Declined;
        }

        self.registry.clear();
        self.split_view = None;
        self.groups.clear_members();
        self.emit(EditorEvent::TabsCleared);
        self.emit_active_changed();
        CloseOutcome::Closed
    }

    /// Closes every tab except `keep` and collapses the layout to a single
    /// pane holding it.
    pub fn close_other_tabs(&mut self, keep: TabId) -> CloseOutcome {
        let _span = trace_operation!(span_names::TAB_CLOSE_OTHERS, tab_id = %keep).entered();

        if !self.registry.contains(keep) {
            debug!("kept tab not open, nothing to close");
            return CloseOutcome::NotFound;
        }
        let unsaved = self
            .registry
            .unsaved()
            .into_iter()
            .filter(|id| *id != keep)
            .count();
        if unsaved > 0 && !self.gate.confirm(&ConfirmRequest::CloseOthers { unsaved }) {
            debug!(unsaved, "close others declined");
            return CloseOutcome::Declined;
        }

        let collapsed = self
            .split_view
            .as_mut()
            .and_then(|view| view.retain_only(keep))
            .is_some();
        if !collapsed {
            self.split_view = Some(SplitViewState::new(keep, self.settings.max_panes));
        }

        let others: Vec<TabId> = self
            .registry
            .ids()
            .iter()
            .copied()
            .filter(|id| *id != keep)
            .collect();
        for id in others {
            self.registry.remove(id);
            self.ungroup(id);
            self.emit(EditorEvent::TabClosed { tab: id });
        }
        self.activate(keep);
        CloseOutcome::Closed
    }

    /// Makes `id` the active tab of its pane and the global active tab.
    ///
    /// Returns false if the tab is not open.
    pub fn set_active_tab(&mut self, id: TabId) -> bool {
        let _span = trace_operation_debug!(span_names::TAB_ACTIVATE, tab_id = %id).entered();
        if !self.registry.contains(id) {
            debug!("tab not open, ignoring activation");
            return false;
        }
        self.activate(id);
        true
    }

    /// Replaces a tab's content and sets its unsaved flag.
    ///
    /// Never writes through the content provider. Returns false if the tab
    /// is not open.
    pub fn update_tab_content(
        &mut self,
        id: TabId,
        content: impl Into<String>,
        is_unsaved: bool,
    ) -> bool {
        let _span = trace_operation_debug!(span_names::TAB_UPDATE, tab_id = %id).entered();
        let now = self.registry.now();
        let preview_max_chars = self.settings.preview_max_chars;
        let Some(tab) = self.registry.get_mut(id) else {
            debug!("tab not open, ignoring update");
            return false;
        };
        tab.set_content(content.into(), preview_max_chars);
        tab.is_unsaved = is_unsaved;
        tab.last_accessed = now;
        self.emit(EditorEvent::TabUpdated { tab: id, is_unsaved });
        true
    }

    /// Clears the unsaved flag after the caller persisted the tab.
    ///
    /// Returns false if the tab is not open.
    pub fn mark_saved(&mut self, id: TabId) -> bool {
        let Some(tab) = self.registry.get_mut(id) else {
            return false;
        };
        if tab.is_unsaved {
            tab.is_unsaved = false;
            self.emit(EditorEvent::TabUpdated {
                tab: id,
                is_unsaved: false,
            });
        }
        true
    }

    /// Pins a tab. Returns false if the tab is not open.
    pub fn pin_tab(&mut self, id: TabId) -> bool {
        self.set_pinned(id, true)
    }

    /// Unpins a tab. Returns false if the tab is not open.
    pub fn unpin_tab(&mut self, id: TabId) -> bool {
        self.set_pinned(id, false)
    }

    fn set_pinned(&mut self, id: TabId, pinned: bool) -> bool {
        let Some(tab) = self.registry.get_mut(id) else {
            return false;
        };
        if tab.pinned != pinned {
            tab.pinned = pinned;
            self.emit(EditorEvent::TabPinned { tab: id, pinned });
        }
        true
    }

    /// Makes the neighbouring tab of the active pane active, wrapping.
    ///
    /// Returns the newly active tab.
    pub fn cycle_tab(&mut self, direction: CycleDirection) -> Option<TabId> {
        let target = self.split_view.as_ref()?.cycle_target(direction)?;
        self.activate(target);
        Some(target)
    }

    /// Moves a tab to `index` within its own pane. Returns false if the tab
    /// is in no pane.
    pub fn reorder_tab(&mut self, id: TabId, index: usize) -> bool {
        let Some(view) = self.split_view.as_mut() else {
            return false;
        };
        if !view.reorder_tab(id, index) {
            return false;
        }
        let pane = view.leaf_of_tab(id).map(|leaf| leaf.id);
        if let Some(pane) = pane {
            self.emit(EditorEvent::TabMoved { tab: id, pane });
        }
        true
    }

    // ========================================================================
    // Split view operations
    // ========================================================================

    /// Splits leaf `pane_id`, promoting its active tab into a new sibling
    /// pane that becomes active.
    ///
    /// # Errors
    ///
    /// The layout is unchanged on every error:
    /// - `SplitError::NoLayout` if no tab has been opened
    /// - `SplitError::PaneNotFound` / `SplitError::NotALeaf` for bad IDs
    /// - `SplitError::CapacityExceeded` at the pane limit
    pub fn split_pane(
        &mut self,
        pane_id: PaneId,
        direction: SplitDirection,
    ) -> Result<SplitOutcome, SplitError> {
        let _span = trace_operation!(
            span_names::PANE_SPLIT,
            pane_id = %pane_id,
            direction = %direction
        )
        .entered();

        let view = self.split_view.as_mut().ok_or(SplitError::NoLayout)?;
        let outcome = match view.split_pane(pane_id, direction) {
            Ok(outcome) => outcome,
            Err(e @ SplitError::CapacityExceeded { .. }) => {
                warn!(error = %e, "split rejected");
                return Err(e);
            }
            Err(e) => {
                debug!(error = %e, "split ignored");
                return Err(e);
            }
        };

        debug!(
            new_pane = %outcome.new_leaf_id,
            pane_count = view.pane_count(),
            "pane split"
        );
        self.emit(EditorEvent::PaneSplit {
            pane: pane_id,
            new_pane: outcome.new_leaf_id,
            direction,
        });
        if let Some(tab) = outcome.promoted {
            self.activate(tab);
        }
        Ok(outcome)
    }

    /// Closes leaf `pane_id` together with its tabs.
    ///
    /// One confirmation covers the pane's unsaved tabs. Closing the last
    /// pane discards the layout.
    pub fn close_pane(&mut self, pane_id: PaneId) -> CloseOutcome {
        let _span = trace_operation!(span_names::PANE_CLOSE, pane_id = %pane_id).entered();

        let Some(leaf) = self.split_view.as_ref().and_then(|view| view.leaf(pane_id)) else {
            debug!("no such leaf pane");
            return CloseOutcome::NotFound;
        };
        let tabs = leaf.tabs.clone();
        let unsaved = tabs
            .iter()
            .filter(|id| self.registry.get(**id).is_some_and(|tab| tab.is_unsaved))
            .count();
        if unsaved > 0 && !self.gate.confirm(&ConfirmRequest::ClosePane { unsaved }) {
            debug!(unsaved, "close pane declined");
            return CloseOutcome::Declined;
        }

        let Some(view) = self.split_view.as_mut() else {
            return CloseOutcome::NotFound;
        };
        let removal = match view.remove_pane(pane_id) {
            Ok(removal) => removal,
            Err(e) => {
                debug!(error = %e, "pane removal failed");
                return CloseOutcome::NotFound;
            }
        };
        if matches!(removal, PaneRemoval::LastPane(_)) {
            self.split_view = None;
        }

        let active_before = self.registry.active_tab();
        for id in tabs {
            self.registry.remove(id);
            self.ungroup(id);
            self.emit(EditorEvent::TabClosed { tab: id });
        }
        self.emit(EditorEvent::PaneClosed { pane: pane_id });

        match active_before.filter(|id| self.registry.contains(*id)) {
            // the active pane may have moved; follow the active tab without
            // refreshing its access time
            Some(active) => {
                if let Some(view) = self.split_view.as_mut() {
                    view.focus_tab(active);
                }
                self.emit_active_changed();
            }
            None => self.recompute_active_tab(),
        }
        CloseOutcome::Closed
    }

    /// Makes `pane_id` the active pane. Its active tab, if any, becomes the
    /// global active tab.
    ///
    /// # Errors
    ///
    /// - `SplitError::NoLayout` if no tab has been opened
    /// - `SplitError::PaneNotFound` / `SplitError::NotALeaf` for bad IDs
    pub fn set_active_pane(&mut self, pane_id: PaneId) -> Result<(), SplitError> {
        let view = self.split_view.as_mut().ok_or(SplitError::NoLayout)?;
        view.set_active_pane(pane_id)?;
        let active_tab = view.leaf(pane_id).and_then(|leaf| leaf.active_tab);
        match active_tab {
            Some(tab) => self.activate(tab),
            None => self.emit_active_changed(),
        }
        Ok(())
    }

    /// Moves a tab to the end of leaf `target`, where it becomes the active
    /// tab; it also becomes the global active tab.
    ///
    /// The source pane is left without an active tab if the moved tab was
    /// its active one. Returns the source pane, or `None` if the tab is not
    /// open.
    ///
    /// # Errors
    ///
    /// - `SplitError::NoLayout` if no tab has been opened
    /// - `SplitError::PaneNotFound` / `SplitError::NotALeaf` for bad targets
    pub fn move_tab_to_pane(
        &mut self,
        id: TabId,
        target: PaneId,
    ) -> Result<Option<PaneId>, SplitError> {
        let _span =
            trace_operation!(span_names::TAB_MOVE, tab_id = %id, pane_id = %target).entered();

        let view = self.split_view.as_mut().ok_or(SplitError::NoLayout)?;
        let Some(source) = view.move_tab(id, target)? else {
            debug!("tab not in any pane, ignoring move");
            return Ok(None);
        };
        self.emit(EditorEvent::TabMoved {
            tab: id,
            pane: target,
        });
        self.activate(id);
        Ok(Some(source))
    }

    /// Sets the sizes of a split's children to `first_size` and
    /// `100 - first_size`.
    ///
    /// # Errors
    ///
    /// - `SplitError::InvalidSize` unless `0 < first_size < 100`
    /// - `SplitError::NoLayout`, `SplitError::PaneNotFound` or
    ///   `SplitError::NotASplit` for bad targets
    pub fn resize_split(&mut self, split_id: PaneId, first_size: f64) -> Result<(), SplitError> {
        let _span =
            trace_operation_debug!(span_names::PANE_RESIZE, pane_id = %split_id).entered();
        let view = self.split_view.as_mut().ok_or(SplitError::NoLayout)?;
        view.resize_split(split_id, first_size)?;
        self.emit(EditorEvent::PaneResized { split: split_id });
        Ok(())
    }

    // ========================================================================
    // Tab groups
    // ========================================================================

    /// Creates a tab group.
    pub fn create_group(&mut self, name: impl Into<String>) -> GroupId {
        let id = self.groups.create(name);
        self.emit(EditorEvent::GroupsChanged { group: id });
        id
    }

    /// Renames a group. Returns false for unknown groups.
    pub fn rename_group(&mut self, id: GroupId, name: impl Into<String>) -> bool {
        let renamed = self.groups.rename(id, name);
        if renamed {
            self.emit(EditorEvent::GroupsChanged { group: id });
        }
        renamed
    }

    /// Deletes a group; its tabs stay open. Returns false for unknown groups.
    pub fn delete_group(&mut self, id: GroupId) -> bool {
        let deleted = self.groups.delete(id).is_some();
        if deleted {
            self.emit(EditorEvent::GroupsChanged { group: id });
        }
        deleted
    }

    /// Puts an open tab into a group, taking it out of any other group.
    /// Returns false if the tab is not open or the group is unknown.
    pub fn add_tab_to_group(&mut self, group: GroupId, tab: TabId) -> bool {
        if !self.registry.contains(tab) {
            return false;
        }
        let previous = self.groups.group_of(tab);
        if !self.groups.add_tab(group, tab) {
            return false;
        }
        if let Some(previous) = previous.filter(|previous| *previous != group) {
            self.emit(EditorEvent::GroupsChanged { group: previous });
        }
        self.emit(EditorEvent::GroupsChanged { group });
        true
    }

    /// Takes a tab out of its group. Returns the group it was in.
    pub fn remove_tab_from_group(&mut self, tab: TabId) -> Option<GroupId> {
        self.ungroup(tab)
    }

    /// Returns the group that holds `tab`.
    #[must_use]
    pub fn group_of(&self, tab: TabId) -> Option<GroupId> {
        self.groups.group_of(tab)
    }

    /// Returns a group by ID.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&TabGroup> {
        self.groups.get(id)
    }

    /// Returns every group in creation order.
    #[must_use]
    pub fn groups(&self) -> &[TabGroup] {
        self.groups.all()
    }

    fn ungroup(&mut self, tab: TabId) -> Option<GroupId> {
        let group = self.groups.remove_tab(tab)?;
        self.emit(EditorEvent::GroupsChanged { group });
        Some(group)
    }

    // ========================================================================
    // Subscribers
    // ========================================================================

    /// Registers a listener for state changes.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&EditorEvent) + Send + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Returns a counter that increases with every state change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns any pane node by ID.
    #[must_use]
    pub fn get_pane_by_id(&self, id: PaneId) -> Option<&PaneNode> {
        self.split_view.as_ref()?.pane(id)
    }

    /// Returns the tabs owned by leaf `id`, in pane order. Empty for split
    /// nodes and unknown IDs.
    #[must_use]
    pub fn get_tabs_by_pane(&self, id: PaneId) -> Vec<&Tab> {
        self.split_view
            .as_ref()
            .and_then(|view| view.leaf(id))
            .map(|leaf| {
                leaf.tabs
                    .iter()
                    .filter_map(|tab| self.registry.get(*tab))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the tabs of every leaf, leaf by leaf in pre-order.
    #[must_use]
    pub fn get_all_tabs(&self) -> Vec<&Tab> {
        self.split_view
            .as_ref()
            .map(|view| {
                view.tab_ids()
                    .into_iter()
                    .filter_map(|tab| self.registry.get(tab))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of leaf panes.
    #[must_use]
    pub fn count_panes(&self) -> usize {
        self.split_view
            .as_ref()
            .map_or(0, SplitViewState::pane_count)
    }

    /// Returns the split node directly containing `pane`, the target for
    /// `resize_split` when resizing that pane.
    pub fn parent_split(&self, pane: PaneId) -> Option<PaneId> {
        self.split_view.as_ref()?.parent_split(pane)
    }

    /// Returns a tab by ID.
    #[must_use]
    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.registry.get(id)
    }

    /// Iterates over open tabs in opening order.
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.registry.iter()
    }

    /// Open tab IDs in opening order.
    #[must_use]
    pub fn open_tab_ids(&self) -> &[TabId] {
        self.registry.ids()
    }

    /// Returns the number of open tabs.
    #[must_use]
    pub fn tab_count(&self) -> usize {
        self.registry.len()
    }

    /// Returns the tab showing `path`.
    #[must_use]
    pub fn tab_for_path(&self, path: impl AsRef<Path>) -> Option<TabId> {
        self.registry.find_by_path(path.as_ref())
    }

    /// Returns the leaf pane holding a tab.
    #[must_use]
    pub fn pane_of_tab(&self, id: TabId) -> Option<PaneId> {
        self.split_view.as_ref()?.leaf_of_tab(id).map(|leaf| leaf.id)
    }

    /// IDs of tabs with unsaved changes, in opening order.
    #[must_use]
    pub fn unsaved_tabs(&self) -> Vec<TabId> {
        self.registry.unsaved()
    }

    /// Returns the global active tab.
    #[must_use]
    pub const fn active_tab(&self) -> Option<TabId> {
        self.registry.active_tab()
    }

    /// Returns the active pane, if a layout exists.
    #[must_use]
    pub fn active_pane(&self) -> Option<PaneId> {
        self.split_view.as_ref().map(SplitViewState::active_pane)
    }

    /// Returns the layout, absent until the first tab is opened.
    #[must_use]
    pub const fn split_view(&self) -> Option<&SplitViewState> {
        self.split_view.as_ref()
    }

    /// Returns the effective settings.
    #[must_use]
    pub const fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    /// Returns the extension table used for new tabs.
    #[must_use]
    pub const fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    /// Returns the content provider, for callers that persist tabs.
    #[must_use]
    pub const fn content_provider(&self) -> &Arc<dyn ContentProvider> {
        &self.provider
    }

    /// Captures the full state for a renderer.
    #[must_use]
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            revision: self.revision,
            tabs: self.registry.iter().cloned().collect(),
            active_tab: self.registry.active_tab(),
            active_pane: self.active_pane(),
            layout: self.split_view.as_ref().map(|view| view.root().clone()),
            max_panes: self.settings.max_panes,
            groups: self.groups.all().to_vec(),
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Makes an open tab active everywhere: its access time, its leaf, the
    /// active pane and the global active tab.
    fn activate(&mut self, id: TabId) {
        self.registry.touch(id);
        self.registry.set_active_tab(Some(id));
        if let Some(view) = self.split_view.as_mut() {
            view.focus_tab(id);
        }
        self.emit_active_changed();
    }

    /// Removes a tab from the registry, its leaf and its group.
    ///
    /// If it was its leaf's active tab, the leaf gets a replacement from
    /// its remaining tabs. The global active tab is left to the caller.
    fn discard_tab(&mut self, id: TabId) {
        self.registry.remove(id);
        self.ungroup(id);

        if let Some(view) = self.split_view.as_mut() {
            let was_leaf_active = view
                .leaf_of_tab(id)
                .is_some_and(|leaf| leaf.active_tab == Some(id));
            if let Some(pane) = view.detach_tab(id)
                && was_leaf_active
            {
                let replacement = view.leaf(pane).and_then(|leaf| {
                    pick_next_active(leaf.tabs.iter().filter_map(|tab| self.registry.get(*tab)))
                });
                if let Some(replacement) = replacement {
                    self.registry.touch(replacement);
                    if let Some(leaf) = view.leaf_mut(pane) {
                        leaf.active_tab = Some(replacement);
                    }
                    debug!(pane_id = %pane, tab_id = %replacement, "pane focus reassigned");
                }
            }
        }
        self.emit(EditorEvent::TabClosed { tab: id });
    }

    /// Chooses a new global active tab from every tab in the layout.
    fn recompute_active_tab(&mut self) {
        let next = self.split_view.as_ref().and_then(|view| {
            pick_next_active(
                view.tab_ids()
                    .iter()
                    .filter_map(|tab| self.registry.get(*tab)),
            )
        });
        match next {
            Some(tab) => self.activate(tab),
            None => {
                self.registry.set_active_tab(None);
                self.emit_active_changed();
            }
        }
    }

    fn emit_active_changed(&mut self) {
        let event = EditorEvent::ActiveTabChanged {
            tab: self.registry.active_tab(),
            pane: self.active_pane(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: EditorEvent) {
        self.revision += 1;
        self.subscribers.emit(&event);
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("registry", &self.registry)
            .field("split_view", &self.split_view)
            .field("groups", &self.groups)
            .field("subscribers", &self.subscribers)
            .field("revision", &self.revision)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
