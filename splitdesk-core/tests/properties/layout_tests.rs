//! Property tests for `SplitViewState` pane-structure operations

use proptest::prelude::*;
use splitdesk_core::workspace::{
    MAX_PANE_SIZE, PaneNode, SplitDirection, SplitError, SplitViewState, TabId,
};

// ============================================================================
// Test Strategies
// ============================================================================

fn split_direction_strategy() -> impl Strategy<Value = SplitDirection> {
    prop_oneof![
        Just(SplitDirection::Horizontal),
        Just(SplitDirection::Vertical),
    ]
}

/// Represents an operation on a `SplitViewState`
#[derive(Debug, Clone)]
enum LayoutOperation {
    /// Split a leaf (by index into the leaf list)
    Split {
        pane_index: usize,
        direction: SplitDirection,
    },
    /// Remove a leaf (by index into the leaf list)
    Remove { pane_index: usize },
    /// Focus a leaf (by index into the leaf list)
    Focus { pane_index: usize },
    /// Add a fresh tab to the active leaf
    Insert,
    /// Move a tab (by index) to a leaf (by index)
    Move { tab_index: usize, pane_index: usize },
    /// Resize the root split
    Resize { size: f64 },
}

fn layout_operation_strategy() -> impl Strategy<Value = LayoutOperation> {
    prop_oneof![
        (0usize..8, split_direction_strategy()).prop_map(|(pane_index, direction)| {
            LayoutOperation::Split {
                pane_index,
                direction,
            }
        }),
        (0usize..8).prop_map(|pane_index| LayoutOperation::Remove { pane_index }),
        (0usize..8).prop_map(|pane_index| LayoutOperation::Focus { pane_index }),
        Just(LayoutOperation::Insert),
        (0usize..16, 0usize..8).prop_map(|(tab_index, pane_index)| LayoutOperation::Move {
            tab_index,
            pane_index,
        }),
        (1.0f64..99.0).prop_map(|size| LayoutOperation::Resize { size }),
    ]
}

fn layout_operations_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LayoutOperation>> {
    proptest::collection::vec(layout_operation_strategy(), 0..=max_ops)
}

fn leaf_ids(view: &SplitViewState) -> Vec<splitdesk_core::workspace::PaneId> {
    view.leaves().iter().map(|leaf| leaf.id).collect()
}

/// Applies an operation, ignoring rejections. Returns false once the
/// last pane was removed.
fn apply_operation(view: &mut SplitViewState, op: &LayoutOperation) -> bool {
    let leaves = leaf_ids(view);
    match op {
        LayoutOperation::Split {
            pane_index,
            direction,
        } => {
            let _ = view.split_pane(leaves[pane_index % leaves.len()], *direction);
        }
        LayoutOperation::Remove { pane_index } => {
            if leaves.len() == 1 {
                return true;
            }
            let _ = view.remove_pane(leaves[pane_index % leaves.len()]);
        }
        LayoutOperation::Focus { pane_index } => {
            let _ = view.set_active_pane(leaves[pane_index % leaves.len()]);
        }
        LayoutOperation::Insert => view.insert_into_active(TabId::new()),
        LayoutOperation::Move {
            tab_index,
            pane_index,
        } => {
            let tabs = view.tab_ids();
            if !tabs.is_empty() {
                let _ = view.move_tab(
                    tabs[tab_index % tabs.len()],
                    leaves[pane_index % leaves.len()],
                );
            }
        }
        LayoutOperation::Resize { size } => {
            let root = view.root().id();
            let _ = view.resize_split(root, *size);
        }
    }
    true
}

/// Checks structural invariants of a pane tree. Returns the leaf count.
fn check_node(node: &PaneNode) -> Result<usize, TestCaseError> {
    match node {
        PaneNode::Leaf(leaf) => {
            if let Some(active) = leaf.active_tab {
                prop_assert!(leaf.tabs.contains(&active), "active tab not in leaf");
            }
            Ok(1)
        }
        PaneNode::Split(split) => {
            let total = split.first.size() + split.second.size();
            prop_assert!((total - MAX_PANE_SIZE).abs() < 1e-9, "children sum to {}", total);
            Ok(check_node(&split.first)? + check_node(&split.second)?)
        }
    }
}

fn check_view(view: &SplitViewState) -> Result<(), TestCaseError> {
    let leaves = check_node(view.root())?;
    prop_assert_eq!(leaves, view.pane_count());
    prop_assert!(leaves <= view.max_panes(), "{} leaves > max {}", leaves, view.max_panes());
    prop_assert!(view.leaf(view.active_pane()).is_some(), "active pane is not a leaf");

    let mut tabs = view.tab_ids();
    let before = tabs.len();
    tabs.sort_by_key(|id| id.0);
    tabs.dedup();
    prop_assert_eq!(before, tabs.len(), "tab appears in two leaves");
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every reachable layout keeps its structural invariants.
    #[test]
    fn prop_layout_invariants_hold(
        max_panes in 1usize..6,
        ops in layout_operations_strategy(40),
    ) {
        let mut view = SplitViewState::new(TabId::new(), max_panes);
        for op in &ops {
            apply_operation(&mut view, op);
            check_view(&view)?;
        }
    }

    /// Layout operations never create or lose tabs, only move them.
    #[test]
    fn prop_tab_set_is_preserved_without_removal(ops in layout_operations_strategy(30)) {
        let mut view = SplitViewState::new(TabId::new(), 4);
        let mut expected = view.tab_ids();
        for op in ops.iter().filter(|op| !matches!(op, LayoutOperation::Remove { .. })) {
            let before = view.tab_ids().len();
            apply_operation(&mut view, op);
            if matches!(op, LayoutOperation::Insert) {
                prop_assert_eq!(view.tab_ids().len(), before + 1);
                expected = view.tab_ids();
            }
        }
        let mut actual = view.tab_ids();
        actual.sort_by_key(|id| id.0);
        expected.sort_by_key(|id| id.0);
        prop_assert_eq!(actual, expected);
    }

    /// Splitting exactly up to the limit succeeds; one more is rejected and
    /// leaves the layout untouched.
    #[test]
    fn prop_capacity_is_enforced(
        max_panes in 1usize..8,
        directions in prop::collection::vec(split_direction_strategy(), 8),
    ) {
        let mut view = SplitViewState::new(TabId::new(), max_panes);
        for direction in directions.iter().take(max_panes - 1) {
            let active = view.active_pane();
            prop_assert!(view.split_pane(active, *direction).is_ok());
        }
        prop_assert_eq!(view.pane_count(), max_panes);

        let before = view.clone();
        let active = view.active_pane();
        prop_assert_eq!(
            view.split_pane(active, directions[0]),
            Err(SplitError::CapacityExceeded { max: max_panes })
        );
        prop_assert_eq!(view, before);
    }

    /// Removing every leaf but one always collapses back to a single leaf.
    #[test]
    fn prop_remove_collapses_to_single_leaf(
        directions in prop::collection::vec(split_direction_strategy(), 1..6),
    ) {
        let mut view = SplitViewState::new(TabId::new(), 8);
        for direction in &directions {
            let active = view.active_pane();
            view.split_pane(active, *direction).unwrap();
        }
        while view.pane_count() > 1 {
            let last = *leaf_ids(&view).last().unwrap();
            view.remove_pane(last).unwrap();
            check_view(&view)?;
        }
        prop_assert!(!view.is_split());
        prop_assert_eq!(view.root().depth(), 0);
    }
}
