//! Property tests for next-active-tab resolution

use std::path::PathBuf;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use splitdesk_core::workspace::{AccessClock, Tab, compute_preview, pick_next_active};

fn tab(index: usize, pinned: bool, seconds: i64) -> Tab {
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).single().unwrap();
    let mut tab = Tab::new(
        PathBuf::from(format!("file{index}.txt")),
        "plaintext".to_string(),
        String::new(),
        100,
        base + Duration::seconds(seconds),
    );
    tab.pinned = pinned;
    tab
}

proptest! {
    /// The chosen tab is never beaten by another candidate on
    /// (pinned, last_accessed).
    #[test]
    fn picked_tab_is_maximal(specs in prop::collection::vec((any::<bool>(), 0i64..50), 1..12)) {
        let tabs: Vec<Tab> = specs
            .iter()
            .enumerate()
            .map(|(i, (pinned, secs))| tab(i, *pinned, *secs))
            .collect();
        let picked = pick_next_active(&tabs).unwrap();
        let winner = tabs.iter().find(|t| t.id == picked).unwrap();
        for other in &tabs {
            prop_assert!(
                (winner.pinned, winner.last_accessed) >= (other.pinned, other.last_accessed),
                "{:?} beaten by {:?}", winner.name, other.name
            );
        }
    }

    /// If any candidate is pinned, a pinned tab is chosen.
    #[test]
    fn pinned_candidates_always_win(specs in prop::collection::vec((any::<bool>(), 0i64..50), 1..12)) {
        let tabs: Vec<Tab> = specs
            .iter()
            .enumerate()
            .map(|(i, (pinned, secs))| tab(i, *pinned, *secs))
            .collect();
        let picked = pick_next_active(&tabs).unwrap();
        let any_pinned = tabs.iter().any(|t| t.pinned);
        let winner = tabs.iter().find(|t| t.id == picked).unwrap();
        prop_assert_eq!(winner.pinned, any_pinned);
    }

    /// On a full tie, the first candidate in list order wins.
    #[test]
    fn ties_resolve_to_list_order(count in 1usize..8, pinned in any::<bool>()) {
        let tabs: Vec<Tab> = (0..count).map(|i| tab(i, pinned, 7)).collect();
        prop_assert_eq!(pick_next_active(&tabs), Some(tabs[0].id));
    }

    /// The access clock never repeats or goes backwards.
    #[test]
    fn access_clock_is_strictly_monotonic(ticks in 2usize..200) {
        let mut clock = AccessClock::new();
        let mut previous = clock.tick();
        for _ in 1..ticks {
            let next = clock.tick();
            prop_assert!(next > previous);
            previous = next;
        }
    }

    /// Previews are a prefix of the first line and respect the bound.
    #[test]
    fn preview_is_bounded_first_line(content in "(\\PC|\n){0,300}", max in 1usize..120) {
        let preview = compute_preview(&content, max);
        prop_assert!(preview.chars().count() <= max);
        let first_line = content.lines().next().unwrap_or("");
        prop_assert!(first_line.starts_with(&preview));
    }
}

#[test]
fn empty_candidate_list_picks_nothing() {
    let tabs: Vec<Tab> = Vec::new();
    assert!(pick_next_active(&tabs).is_none());
}
