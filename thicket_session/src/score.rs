// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Best-score tracking across retries on one dataset.

/// The best (minimum) leaf count, depth, and time achieved on one dataset.
///
/// Each field is tracked independently: the three bests may come from three
/// different attempts. `None` means no successful attempt has been recorded
/// yet and is treated as unbounded. The tracker is reset only when a new
/// dataset is generated, never on a retry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    best_leaves: Option<usize>,
    best_depth: Option<u32>,
    best_millis: Option<u64>,
}

impl ScoreTracker {
    /// A tracker with no records.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            best_leaves: None,
            best_depth: None,
            best_millis: None,
        }
    }

    /// Folds a successful attempt into the records, minimizing each field
    /// independently.
    pub fn record(&mut self, leaves: usize, depth: u32, millis: u64) {
        self.best_leaves = Some(self.best_leaves.map_or(leaves, |b| b.min(leaves)));
        self.best_depth = Some(self.best_depth.map_or(depth, |b| b.min(depth)));
        self.best_millis = Some(self.best_millis.map_or(millis, |b| b.min(millis)));
    }

    /// Clears all records. Called on new-dataset generation.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Best leaf count so far, if any attempt succeeded.
    #[must_use]
    pub fn best_leaves(&self) -> Option<usize> {
        self.best_leaves
    }

    /// Best depth so far, if any attempt succeeded.
    #[must_use]
    pub fn best_depth(&self) -> Option<u32> {
        self.best_depth
    }

    /// Best elapsed time so far, if any attempt succeeded.
    #[must_use]
    pub fn best_millis(&self) -> Option<u64> {
        self.best_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tracker_has_no_records() {
        let t = ScoreTracker::new();
        assert_eq!(t.best_leaves(), None);
        assert_eq!(t.best_depth(), None);
        assert_eq!(t.best_millis(), None);
    }

    #[test]
    fn records_minimize_each_field() {
        let mut t = ScoreTracker::new();
        t.record(4, 3, 9_000);
        t.record(3, 4, 12_000);

        // Leaves improved, depth and time did not.
        assert_eq!(t.best_leaves(), Some(3));
        assert_eq!(t.best_depth(), Some(3));
        assert_eq!(t.best_millis(), Some(9_000));
    }

    #[test]
    fn bests_may_come_from_different_attempts() {
        let mut t = ScoreTracker::new();
        t.record(5, 2, 30_000);
        t.record(2, 5, 8_000);
        assert_eq!(t.best_leaves(), Some(2));
        assert_eq!(t.best_depth(), Some(2));
        assert_eq!(t.best_millis(), Some(8_000));
    }

    #[test]
    fn reset_clears_records() {
        let mut t = ScoreTracker::new();
        t.record(4, 3, 9_000);
        t.reset();
        assert_eq!(t, ScoreTracker::new());
    }
}
