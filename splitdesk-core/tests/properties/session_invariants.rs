//! Property tests for `EditorSession` consistency across operation sequences
//!
//! After every operation, whatever its outcome:
//! - the leaves of the layout partition the open tabs
//! - the global active tab is open and is its leaf's active tab, and is
//!   `None` exactly when nothing is open
//! - the pane limit holds and the active pane is a leaf
//! - at most one tab exists per path

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use proptest::prelude::*;
use splitdesk_core::workspace::{CycleDirection, PaneId, SplitDirection, TabId};
use splitdesk_core::{ConfirmRequest, EditorSession, EditorSettings, MemoryContentProvider};

const PATHS: &[&str] = &[
    "src/main.rs",
    "src/lib.rs",
    "README.md",
    "Cargo.toml",
    "notes.txt",
    "web/app.ts",
    "web/style.css",
];

// ============================================================================
// Test Strategies
// ============================================================================

#[derive(Debug, Clone)]
enum SessionOperation {
    Open { path_index: usize },
    Close { tab_index: usize },
    CloseAll,
    CloseOthers { tab_index: usize },
    Activate { tab_index: usize },
    Edit { tab_index: usize, unsaved: bool },
    Pin { tab_index: usize, pinned: bool },
    Split { pane_index: usize, direction: SplitDirection },
    ClosePane { pane_index: usize },
    FocusPane { pane_index: usize },
    Move { tab_index: usize, pane_index: usize },
    Cycle { forward: bool },
    Reorder { tab_index: usize, position: usize },
    /// Flip the confirmation gate's answer
    Answer(bool),
}

fn split_direction_strategy() -> impl Strategy<Value = SplitDirection> {
    prop_oneof![
        Just(SplitDirection::Horizontal),
        Just(SplitDirection::Vertical),
    ]
}

fn session_operation_strategy() -> impl Strategy<Value = SessionOperation> {
    prop_oneof![
        4 => (0..PATHS.len()).prop_map(|path_index| SessionOperation::Open { path_index }),
        2 => (0usize..8).prop_map(|tab_index| SessionOperation::Close { tab_index }),
        1 => Just(SessionOperation::CloseAll),
        1 => (0usize..8).prop_map(|tab_index| SessionOperation::CloseOthers { tab_index }),
        2 => (0usize..8).prop_map(|tab_index| SessionOperation::Activate { tab_index }),
        2 => (0usize..8, any::<bool>())
            .prop_map(|(tab_index, unsaved)| SessionOperation::Edit { tab_index, unsaved }),
        1 => (0usize..8, any::<bool>())
            .prop_map(|(tab_index, pinned)| SessionOperation::Pin { tab_index, pinned }),
        3 => (0usize..6, split_direction_strategy())
            .prop_map(|(pane_index, direction)| SessionOperation::Split { pane_index, direction }),
        1 => (0usize..6).prop_map(|pane_index| SessionOperation::ClosePane { pane_index }),
        1 => (0usize..6).prop_map(|pane_index| SessionOperation::FocusPane { pane_index }),
        2 => (0usize..8, 0usize..6)
            .prop_map(|(tab_index, pane_index)| SessionOperation::Move { tab_index, pane_index }),
        1 => any::<bool>().prop_map(|forward| SessionOperation::Cycle { forward }),
        1 => (0usize..8, 0usize..8)
            .prop_map(|(tab_index, position)| SessionOperation::Reorder { tab_index, position }),
        1 => any::<bool>().prop_map(SessionOperation::Answer),
    ]
}

fn session_operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<SessionOperation>> {
    proptest::collection::vec(session_operation_strategy(), 0..=max_ops)
}

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    session: EditorSession,
    answer: Arc<AtomicBool>,
    runtime: tokio::runtime::Runtime,
}

impl Harness {
    fn new(max_panes: usize) -> Self {
        let answer = Arc::new(AtomicBool::new(true));
        let gate_answer = Arc::clone(&answer);
        let provider = MemoryContentProvider::with_files([
            ("src/main.rs", "fn main() {}\n"),
            ("README.md", "# Title\nbody\n"),
        ]);
        let settings = EditorSettings {
            max_panes,
            ..EditorSettings::default()
        };
        let session = EditorSession::with_settings(
            settings,
            Arc::new(provider),
            move |_: &ConfirmRequest| gate_answer.load(Ordering::SeqCst),
        );
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        Self {
            session,
            answer,
            runtime,
        }
    }

    fn tab_at(&self, index: usize) -> Option<TabId> {
        let ids = self.session.open_tab_ids();
        (!ids.is_empty()).then(|| ids[index % ids.len()])
    }

    fn pane_at(&self, index: usize) -> Option<PaneId> {
        let leaves: Vec<PaneId> = self
            .session
            .split_view()?
            .leaves()
            .iter()
            .map(|leaf| leaf.id)
            .collect();
        (!leaves.is_empty()).then(|| leaves[index % leaves.len()])
    }

    fn apply(&mut self, op: &SessionOperation) {
        match op {
            SessionOperation::Open { path_index } => {
                let path = PATHS[*path_index];
                self.runtime.block_on(self.session.open_tab(path));
            }
            SessionOperation::Close { tab_index } => {
                if let Some(tab) = self.tab_at(*tab_index) {
                    self.session.close_tab(tab);
                }
            }
            SessionOperation::CloseAll => {
                self.session.close_all_tabs();
            }
            SessionOperation::CloseOthers { tab_index } => {
                if let Some(tab) = self.tab_at(*tab_index) {
                    self.session.close_other_tabs(tab);
                }
            }
            SessionOperation::Activate { tab_index } => {
                if let Some(tab) = self.tab_at(*tab_index) {
                    self.session.set_active_tab(tab);
                }
            }
            SessionOperation::Edit { tab_index, unsaved } => {
                if let Some(tab) = self.tab_at(*tab_index) {
                    self.session.update_tab_content(tab, "edited\n", *unsaved);
                }
            }
            SessionOperation::Pin { tab_index, pinned } => {
                if let Some(tab) = self.tab_at(*tab_index) {
                    if *pinned {
                        self.session.pin_tab(tab);
                    } else {
                        self.session.unpin_tab(tab);
                    }
                }
            }
            SessionOperation::Split {
                pane_index,
                direction,
            } => {
                if let Some(pane) = self.pane_at(*pane_index) {
                    let _ = self.session.split_pane(pane, *direction);
                }
            }
            SessionOperation::ClosePane { pane_index } => {
                if let Some(pane) = self.pane_at(*pane_index) {
                    self.session.close_pane(pane);
                }
            }
            SessionOperation::FocusPane { pane_index } => {
                if let Some(pane) = self.pane_at(*pane_index) {
                    let _ = self.session.set_active_pane(pane);
                }
            }
            SessionOperation::Move {
                tab_index,
                pane_index,
            } => {
                if let (Some(tab), Some(pane)) = (self.tab_at(*tab_index), self.pane_at(*pane_index))
                {
                    let _ = self.session.move_tab_to_pane(tab, pane);
                }
            }
            SessionOperation::Cycle { forward } => {
                let direction = if *forward {
                    CycleDirection::Next
                } else {
                    CycleDirection::Previous
                };
                self.session.cycle_tab(direction);
            }
            SessionOperation::Reorder {
                tab_index,
                position,
            } => {
                if let Some(tab) = self.tab_at(*tab_index) {
                    self.session.reorder_tab(tab, *position);
                }
            }
            SessionOperation::Answer(yes) => self.answer.store(*yes, Ordering::SeqCst),
        }
    }
}

fn check_invariants(session: &EditorSession) -> Result<(), TestCaseError> {
    let registered: HashSet<TabId> = session.open_tab_ids().iter().copied().collect();
    prop_assert_eq!(registered.len(), session.tab_count());

    // partition
    let in_leaves = session.get_all_tabs();
    let leaf_ids: HashSet<TabId> = in_leaves.iter().map(|tab| tab.id).collect();
    prop_assert_eq!(leaf_ids.len(), in_leaves.len(), "a tab sits in two leaves");
    prop_assert_eq!(&leaf_ids, &registered, "leaves do not partition the registry");
    if let Some(view) = session.split_view() {
        prop_assert_eq!(view.tab_ids().len(), registered.len(), "leaf references a closed tab");
    }

    // one tab per path
    let paths: HashSet<_> = session.tabs().map(|tab| tab.path.clone()).collect();
    prop_assert_eq!(paths.len(), session.tab_count());

    // active tab validity
    match session.active_tab() {
        Some(active) => {
            prop_assert!(registered.contains(&active));
            let view = session.split_view().unwrap();
            let leaf = view.leaf_of_tab(active).unwrap();
            prop_assert_eq!(leaf.active_tab, Some(active));
        }
        None => prop_assert_eq!(session.tab_count(), 0, "tabs open but none active"),
    }

    // leaf-local active tabs and pane structure
    if let Some(view) = session.split_view() {
        prop_assert!(view.pane_count() <= view.max_panes());
        prop_assert!(view.leaf(view.active_pane()).is_some());
        for leaf in view.leaves() {
            if let Some(active) = leaf.active_tab {
                prop_assert!(leaf.tabs.contains(&active));
            }
        }
    }
    Ok(())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// All invariants hold after every operation of a random sequence.
    #[test]
    fn prop_session_invariants_hold(
        max_panes in 1usize..5,
        ops in session_operations_strategy(50),
    ) {
        let mut harness = Harness::new(max_panes);
        for op in &ops {
            harness.apply(op);
            check_invariants(&harness.session)?;
        }
    }

    /// Opening an already-open path returns the same tab and creates nothing.
    #[test]
    fn prop_open_is_idempotent(
        ops in session_operations_strategy(20),
        path_index in 0..PATHS.len(),
    ) {
        let mut harness = Harness::new(4);
        for op in &ops {
            harness.apply(op);
        }
        let path = PATHS[path_index];
        let first = harness.runtime.block_on(harness.session.open_tab(path));
        let count = harness.session.tab_count();
        let second = harness.runtime.block_on(harness.session.open_tab(path));
        prop_assert_eq!(first, second);
        prop_assert_eq!(harness.session.tab_count(), count);
        prop_assert_eq!(harness.session.tab_for_path(path), Some(first));
        prop_assert_eq!(harness.session.active_tab(), Some(first));
    }

    /// A declined confirmation leaves the whole state untouched.
    #[test]
    fn prop_declined_close_changes_nothing(
        ops in session_operations_strategy(20),
        tab_index in 0usize..8,
    ) {
        let mut harness = Harness::new(4);
        for op in &ops {
            harness.apply(op);
        }
        let Some(tab) = harness.tab_at(tab_index) else {
            return Ok(());
        };
        harness.session.update_tab_content(tab, "dirty", true);
        harness.answer.store(false, Ordering::SeqCst);
        let before = harness.session.snapshot();

        harness.session.close_tab(tab);
        harness.session.close_all_tabs();
        if let Some(pane) = harness.session.pane_of_tab(tab) {
            harness.session.close_pane(pane);
        }
        prop_assert_eq!(harness.session.snapshot(), before);
    }

    /// Pane count never exceeds the configured limit.
    #[test]
    fn prop_pane_limit_respected(
        max_panes in 1usize..6,
        directions in prop::collection::vec(split_direction_strategy(), 0..12),
    ) {
        let mut harness = Harness::new(max_panes);
        for path in PATHS {
            harness.runtime.block_on(harness.session.open_tab(*path));
        }
        for direction in directions {
            let pane = harness.session.active_pane().unwrap();
            let _ = harness.session.split_pane(pane, direction);
            prop_assert!(harness.session.count_panes() <= max_panes);
        }
    }
}
