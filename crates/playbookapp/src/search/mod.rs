//! # Search
//!
//! Search is a curated table plus a substring filter, fronted by a debounced
//! controller:
//!
//! ```text
//! keystroke ─▶ DebouncedQueryController ─▶ QueryMatcher ─▶ SearchIndex
//!               (quiet period, state)       (filter, cap)   (fixed entries)
//! ```
//!
//! - [`index`]: The read-only entry table ([`SearchIndex`]).
//! - [`matcher`]: Case-insensitive substring matching, 2-char floor, 8-result cap.
//! - [`scheduler`]: Cancelable timer capability used for debouncing.
//! - [`controller`]: The per-widget state machine.
//! - [`widget`]: Runs a controller on a tokio task.
//!
//! The index is passed in, never looked up globally, so tests and alternative
//! sites substitute their own tables freely.

pub mod controller;
pub mod index;
pub mod matcher;
pub mod scheduler;
pub mod widget;

pub use controller::{DebouncedQueryController, Phase, QueryState, DEFAULT_DEBOUNCE};
pub use index::SearchIndex;
pub use matcher::{match_query, QueryMatcher, MAX_RESULTS, MIN_QUERY_CHARS};
pub use scheduler::{DeadlineScheduler, ManualScheduler, Scheduler, TimerHandle};
pub use widget::{SearchWidget, WidgetEvent};
