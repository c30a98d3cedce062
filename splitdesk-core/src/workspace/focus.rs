//! Next-active-tab resolution and access timestamps
//!
//! Every operation that must choose a replacement active tab goes through
//! [`pick_next_active`]: pinned tabs first, then the most recently
//! accessed, then list order.

use std::cmp::Reverse;

use chrono::{DateTime, Duration, Utc};

use super::tab::Tab;
use super::types::TabId;

/// Picks the tab that should become active from `candidates`.
///
/// Ordering is `pinned` descending, then `last_accessed` descending. On a
/// full tie the candidate that comes first wins.
#[must_use]
pub fn pick_next_active<'a, I>(candidates: I) -> Option<TabId>
where
    I: IntoIterator<Item = &'a Tab>,
{
    candidates
        .into_iter()
        .min_by_key(|tab| (Reverse(tab.pinned), Reverse(tab.last_accessed)))
        .map(|tab| tab.id)
}

/// Issues strictly increasing access timestamps.
///
/// Wall-clock reads can repeat (coarse clocks, fast UI events); the clock
/// bumps by one microsecond whenever `now` would not move forward so that
/// "most recently accessed" is always well defined.
#[derive(Debug, Clone)]
pub struct AccessClock {
    last: Option<DateTime<Utc>>,
}

impl AccessClock {
    /// Creates a clock with no history.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Returns a timestamp strictly greater than every previous one.
    pub fn tick(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let next = match self.last {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last = Some(next);
        next
    }
}

impl Default for AccessClock {
    fn default() -> Self {
        Self::new()
    }
}
