// SPDX-License-Identifier: MPL-2.0
//! Timer port definition.
//!
//! A [`Timer`] hands out [`TimerHandle`]s for repeating schedules. Delivery
//! of the fires is the adapter's business: the host loop learns which
//! handles fired and forwards them to whoever scheduled them.

use std::time::Duration;

/// Identifies one repeating schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Port for repeating timers.
pub trait Timer {
    /// Schedules a fire every `interval`, starting one interval from now.
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle;

    /// Cancels a schedule. Unknown or already cancelled handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}
