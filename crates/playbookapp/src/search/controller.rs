//! # Debounced Query Controller
//!
//! One controller backs one search box. It owns the [`QueryState`] the
//! presentation layer draws and decides when the matcher runs.
//!
//! ## State Machine
//!
//! ```text
//!            input                 timer fires, results
//!   Idle ───────────▶ Pending ──────────────────────────▶ Open
//!                      ▲  │ ▲                               │
//!                input │  │ └── input (re-arms timer)       │ select / clear / dismiss
//!                      │  │                                 ▼
//!                   Closed ◀───── timer fires, no results ──┘
//! ```
//!
//! - Every `input` cancels the armed timer and arms a new one, so the matcher runs
//!   at most once per quiet period and always sees the latest text.
//! - A timer that was cancelled may still be reported by a sloppy host; its handle
//!   no longer matches the armed one and `fire` ignores it.
//! - `clear` and `select` work from any phase and reset the state completely.
//! - `dismiss` (focus loss) only hides the dropdown. The query text survives, and so
//!   does a pending evaluation.
//!
//! While `Pending`, the previously shown results stay visible until the timer fires.

use super::matcher::QueryMatcher;
use super::scheduler::{ManualScheduler, Scheduler, TimerHandle};
use crate::model::SearchEntry;
use serde::Serialize;
use std::time::Duration;
use tracing::trace;

/// Default quiet period before a query is matched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Pending,
    Open,
    Closed,
}

/// What the search widget displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryState {
    pub raw_query: String,
    pub matched_results: Vec<SearchEntry>,
    pub is_open: bool,
}

type SelectCallback = Box<dyn FnMut(&str) + Send>;

pub struct DebouncedQueryController<S: Scheduler> {
    matcher: QueryMatcher,
    scheduler: S,
    debounce: Duration,
    armed: Option<TimerHandle>,
    phase: Phase,
    state: QueryState,
    evaluations: usize,
    on_select: Option<SelectCallback>,
}

impl<S: Scheduler> DebouncedQueryController<S> {
    pub fn new(matcher: QueryMatcher, scheduler: S, debounce: Duration) -> Self {
        Self {
            matcher,
            scheduler,
            debounce,
            armed: None,
            phase: Phase::Idle,
            state: QueryState::default(),
            evaluations: 0,
            on_select: None,
        }
    }

    /// Register the callback invoked with a result's path when it is selected.
    pub fn on_select(mut self, callback: impl FnMut(&str) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How many times the matcher has run.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// A keystroke: record the text and restart the quiet period.
    pub fn input(&mut self, query: impl Into<String>) {
        self.state.raw_query = query.into();
        self.disarm();
        self.armed = Some(self.scheduler.schedule(self.debounce));
        self.transition(Phase::Pending);
    }

    /// Report that `handle` elapsed. Returns false for stale handles, which change nothing.
    pub fn fire(&mut self, handle: TimerHandle) -> bool {
        if self.armed != Some(handle) {
            trace!(?handle, "ignoring stale timer");
            return false;
        }
        self.armed = None;
        self.evaluate();
        true
    }

    /// Pick the displayed result at `position`. Returns its path.
    pub fn select(&mut self, position: usize) -> Option<String> {
        let path = self.state.matched_results.get(position)?.path.clone();
        if let Some(callback) = self.on_select.as_mut() {
            callback(&path);
        }
        self.reset();
        Some(path)
    }

    /// Explicit clear: empty query, no results, closed.
    pub fn clear(&mut self) {
        self.reset();
    }

    /// Focus loss or click outside.
    pub fn dismiss(&mut self) {
        self.state.is_open = false;
        if self.phase == Phase::Open {
            self.transition(Phase::Closed);
        }
    }

    fn evaluate(&mut self) {
        self.evaluations += 1;
        let results = self.matcher.find(&self.state.raw_query);
        self.state.is_open = !results.is_empty();
        self.state.matched_results = results;
        let next = if self.state.is_open {
            Phase::Open
        } else {
            Phase::Closed
        };
        self.transition(next);
    }

    fn reset(&mut self) {
        self.disarm();
        self.state = QueryState::default();
        self.transition(Phase::Closed);
    }

    fn disarm(&mut self) {
        if let Some(handle) = self.armed.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn transition(&mut self, next: Phase) {
        if self.phase != next {
            trace!(from = ?self.phase, to = ?next, query = %self.state.raw_query, "search phase");
        }
        self.phase = next;
    }
}

impl DebouncedQueryController<ManualScheduler> {
    pub fn manual(matcher: QueryMatcher, debounce: Duration) -> Self {
        Self::new(matcher, ManualScheduler::new(), debounce)
    }

    /// Advance the virtual clock and fire whatever elapsed.
    pub fn advance(&mut self, by: Duration) {
        for handle in self.scheduler.advance(by) {
            self.fire(handle);
        }
    }
}
