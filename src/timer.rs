//! Repeating timers.
//!
//! Components schedule work through the [`Timers`] trait, the equivalent of
//! `setInterval`/`clearInterval`. [`VirtualTimers`] is a deterministic
//! implementation driven by an explicit clock: nothing fires until the host
//! advances time, and firings come out one at a time so each callback runs to
//! completion before the next one is chosen.

use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies one scheduled interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

pub trait Timers {
    /// Schedule a repeating timer that first fires one `period` from now.
    fn set_interval(&mut self, period: Duration) -> TimerHandle;
    /// Cancel a timer. Unknown or already cancelled handles are ignored.
    fn clear_interval(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_due: Duration,
}

/// Interval scheduler on a virtual clock.
#[derive(Debug, Default)]
pub struct VirtualTimers {
    now: Duration,
    next_id: u64,
    intervals: BTreeMap<TimerHandle, Interval>,
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of pending intervals.
    pub fn active(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.intervals.contains_key(&handle)
    }

    /// Pop the earliest firing due at or before `deadline`.
    ///
    /// Moves the clock to the firing time and re-arms the interval. Ties go to
    /// the older timer. Returns `None` once nothing else is due; the clock is
    /// then left where it is, call [`settle`](Self::settle) to finish.
    pub fn fire_next(&mut self, deadline: Duration) -> Option<TimerHandle> {
        let (handle, due) = self
            .intervals
            .iter()
            .filter(|(_, iv)| iv.next_due <= deadline)
            .min_by_key(|(handle, iv)| (iv.next_due, **handle))
            .map(|(handle, iv)| (*handle, iv.next_due))?;
        self.now = due;
        if let Some(iv) = self.intervals.get_mut(&handle) {
            iv.next_due = due + iv.period;
        }
        Some(handle)
    }

    /// Move the clock forward to `deadline` without firing anything.
    pub fn settle(&mut self, deadline: Duration) {
        if deadline > self.now {
            self.now = deadline;
        }
    }

    /// Advance the clock by `by`, returning every firing in order.
    ///
    /// Use [`fire_next`](Self::fire_next) instead when callbacks may cancel
    /// or reschedule timers.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(handle) = self.fire_next(deadline) {
            fired.push(handle);
        }
        self.settle(deadline);
        fired
    }
}

impl Timers for VirtualTimers {
    fn set_interval(&mut self, period: Duration) -> TimerHandle {
        // Browsers clamp tiny intervals; a zero period would never let time move.
        let period = period.max(Duration::from_millis(1));
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.intervals.insert(
            handle,
            Interval {
                period,
                next_due: self.now + period,
            },
        );
        handle
    }

    fn clear_interval(&mut self, handle: TimerHandle) {
        self.intervals.remove(&handle);
    }
}
