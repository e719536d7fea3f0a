//! Cancelable timers for the debounce controller.
//!
//! The controller never sleeps itself. It asks a [`Scheduler`] for a timer and the
//! host tells it, via `fire(handle)`, when that timer has elapsed. Two
//! implementations ship here:
//!
//! - [`ManualScheduler`]: a virtual clock advanced by hand, for tests and hosts that
//!   run their own frame loop.
//! - [`DeadlineScheduler`]: remembers a single tokio deadline, used by the async
//!   widget to drive a `sleep_until`.

use std::time::Duration;
use tokio::time::Instant;

/// Opaque identifier of a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

pub trait Scheduler {
    /// Arm a timer that elapses after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerHandle;

    /// Disarm a timer. Unknown or already elapsed handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Virtual-clock scheduler. Time only moves when [`ManualScheduler::advance`] is called.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    armed: Vec<(Duration, TimerHandle)>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers currently armed.
    pub fn armed(&self) -> usize {
        self.armed.len()
    }

    /// Move the clock forward and return the timers that elapsed, earliest first.
    pub fn advance(&mut self, by: Duration) -> Vec<TimerHandle> {
        self.now += by;
        let now = self.now;

        let mut due: Vec<(Duration, TimerHandle)> = Vec::new();
        self.armed.retain(|&(deadline, handle)| {
            if deadline <= now {
                due.push((deadline, handle));
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, handle)| handle).collect()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.armed.push((self.now + delay, handle));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.armed.retain(|&(_, h)| h != handle);
    }
}

/// Holds at most one tokio deadline. Scheduling replaces the previous one.
#[derive(Debug, Default)]
pub struct DeadlineScheduler {
    next_id: u64,
    armed: Option<(TimerHandle, Instant)>,
}

impl DeadlineScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The armed timer and when it elapses, if any.
    pub fn next_deadline(&self) -> Option<(TimerHandle, Instant)> {
        self.armed
    }
}

impl Scheduler for DeadlineScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.armed = Some((handle, Instant::now() + delay));
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if matches!(self.armed, Some((armed, _)) if armed == handle) {
            self.armed = None;
        }
    }
}
