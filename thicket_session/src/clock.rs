// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic session clock.
//!
//! The crate never reads wall-clock time. Hosts pass the current time as
//! milliseconds (any monotonic origin) into every call that needs one, the
//! same convention the rest of the stack uses for timestamps. A periodic
//! display tick, if the host wants one, is entirely the host's business:
//! the clock only answers elapsed-time queries and freezes once stopped.

/// Elapsed-time tracking across one attempt.
#[derive(Copy, Clone, Debug)]
pub struct SessionClock {
    started_at: u64,
    stopped_at: Option<u64>,
}

impl SessionClock {
    /// Starts a clock at `now`.
    #[must_use]
    pub const fn new(now: u64) -> Self {
        Self {
            started_at: now,
            stopped_at: None,
        }
    }

    /// Milliseconds elapsed since start, frozen at the stop time if stopped.
    #[must_use]
    pub fn elapsed(&self, now: u64) -> u64 {
        let end = self.stopped_at.unwrap_or(now);
        end.saturating_sub(self.started_at)
    }

    /// Stops the clock. The first stop wins; later calls are no-ops.
    pub fn stop(&mut self, now: u64) {
        if self.stopped_at.is_none() {
            self.stopped_at = Some(now.max(self.started_at));
        }
    }

    /// Returns `true` once the clock has been stopped.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped_at.is_some()
    }

    /// Restarts from `now`, clearing any stop.
    pub fn restart(&mut self, now: u64) {
        self.started_at = now;
        self.stopped_at = None;
    }
}
