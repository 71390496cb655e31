//! Bounded, timestamped activity log shown in the debug panel.

#[cfg(test)]
#[path = "activity_test.rs"]
mod activity_test;

use std::collections::VecDeque;

/// Maximum number of lines kept; older lines are dropped first.
pub const ACTIVITY_CAPACITY: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub time: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, time: String, message: String) {
        if self.entries.len() == ACTIVITY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry { time, message });
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
