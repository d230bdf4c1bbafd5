// SPDX-License-Identifier: MPL-2.0
//! Deadline-based [`Timer`] driven by the host event loop.
//!
//! The GUI emits a periodic tick; each tick calls [`IntervalTimer::advance_to`]
//! with the current instant and dispatches the handles that came due. No
//! thread or async task is involved.

use crate::application::port::{Timer, TimerHandle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Shortest accepted interval.
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Upper bound on missed fires replayed for a single schedule in one
/// advance. Older fires are dropped and the schedule realigns on `now`.
const MAX_CATCH_UP: u32 = 32;

#[derive(Debug, Clone, Copy)]
struct Schedule {
    interval: Duration,
    next_due: Instant,
}

/// Repeating timers polled with explicit instants.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    now: Instant,
    next_handle: u64,
    schedules: BTreeMap<TimerHandle, Schedule>,
}

impl IntervalTimer {
    /// Creates a timer whose clock starts at `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            next_handle: 1,
            schedules: BTreeMap::new(),
        }
    }

    /// Current clock value.
    #[must_use]
    pub fn now(&self) -> Instant {
        self.now
    }

    #[must_use]
    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.schedules.contains_key(&handle)
    }

    /// Number of live schedules.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.schedules.len()
    }

    /// Moves the clock to `now` and returns every fire that came due, oldest
    /// first. Instants earlier than the current clock are ignored.
    pub fn advance_to(&mut self, now: Instant) -> Vec<TimerHandle> {
        if now <= self.now {
            return Vec::new();
        }
        self.now = now;

        let mut fired: Vec<(Instant, TimerHandle)> = Vec::new();
        for (handle, schedule) in &mut self.schedules {
            let mut count = 0;
            while schedule.next_due <= now {
                if count == MAX_CATCH_UP {
                    tracing::debug!(
                        handle = handle.value(),
                        "timer fell behind, dropping missed fires"
                    );
                    schedule.next_due = now + schedule.interval;
                    break;
                }
                fired.push((schedule.next_due, *handle));
                schedule.next_due += schedule.interval;
                count += 1;
            }
        }

        fired.sort();
        fired.into_iter().map(|(_, handle)| handle).collect()
    }
}

impl Timer for IntervalTimer {
    fn schedule_repeating(&mut self, interval: Duration) -> TimerHandle {
        let interval = interval.max(MIN_INTERVAL);
        let handle = TimerHandle::new(self.next_handle);
        self.next_handle += 1;
        self.schedules.insert(
            handle,
            Schedule {
                interval,
                next_due: self.now + interval,
            },
        );
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.schedules.remove(&handle);
    }
}
