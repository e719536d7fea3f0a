//! Async host for one [`DebouncedQueryController`].
//!
//! The controller is not shared: it lives inside a single tokio task. Callers talk to
//! it through a [`SearchWidget`] handle, which sends events over an mpsc channel and
//! reads [`QueryState`] snapshots from a watch channel. The debounce timer is a
//! `sleep_until` on the deadline held by [`DeadlineScheduler`]; re-arming replaces
//! the deadline, so a superseded sleep never completes.

use super::controller::{DebouncedQueryController, QueryState};
use super::matcher::QueryMatcher;
use super::scheduler::{DeadlineScheduler, Scheduler};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::sleep_until;
use tracing::debug;

const EVENT_BUFFER: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Input(String),
    Select(usize),
    Clear,
    Dismiss,
}

/// Handle to a running search widget task.
pub struct SearchWidget {
    events: mpsc::Sender<WidgetEvent>,
    state: watch::Receiver<QueryState>,
    selections: mpsc::UnboundedReceiver<String>,
    task: JoinHandle<usize>,
}

impl SearchWidget {
    /// Spawn the widget task on the current tokio runtime.
    pub fn spawn(matcher: QueryMatcher, debounce: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let (state_tx, state_rx) = watch::channel(QueryState::default());
        let (select_tx, select_rx) = mpsc::unbounded_channel();

        let controller =
            DebouncedQueryController::new(matcher, DeadlineScheduler::new(), debounce)
                .on_select(move |path| {
                    let _ = select_tx.send(path.to_string());
                });

        let task = tokio::spawn(run(controller, event_rx, state_tx));

        Self {
            events: event_tx,
            state: state_rx,
            selections: select_rx,
            task,
        }
    }

    pub async fn input(&self, query: impl Into<String>) {
        self.send(WidgetEvent::Input(query.into())).await;
    }

    pub async fn select(&self, position: usize) {
        self.send(WidgetEvent::Select(position)).await;
    }

    pub async fn clear(&self) {
        self.send(WidgetEvent::Clear).await;
    }

    pub async fn dismiss(&self) {
        self.send(WidgetEvent::Dismiss).await;
    }

    /// The latest published state.
    pub fn state(&self) -> QueryState {
        self.state.borrow().clone()
    }

    /// A receiver that is notified whenever the state changes.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state.clone()
    }

    /// Wait for the next selected path.
    pub async fn next_selection(&mut self) -> Option<String> {
        self.selections.recv().await
    }

    /// Stop the task and wait for it to finish.
    ///
    /// Returns how many times the matcher ran over the widget's lifetime, or 0 if the
    /// task panicked.
    pub async fn shutdown(self) -> usize {
        drop(self.events);
        self.task.await.unwrap_or_default()
    }

    async fn send(&self, event: WidgetEvent) {
        // The task only exits once every sender is gone, so this cannot fail while `self` lives.
        let _ = self.events.send(event).await;
    }
}

async fn run(
    mut controller: DebouncedQueryController<DeadlineScheduler>,
    mut events: mpsc::Receiver<WidgetEvent>,
    state: watch::Sender<QueryState>,
) -> usize {
    loop {
        let deadline = controller.scheduler().next_deadline();
        let timer = async {
            match deadline {
                Some((handle, at)) => {
                    sleep_until(at).await;
                    handle
                }
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            event = events.recv() => match event {
                Some(WidgetEvent::Input(query)) => controller.input(query),
                Some(WidgetEvent::Select(position)) => {
                    controller.select(position);
                }
                Some(WidgetEvent::Clear) => controller.clear(),
                Some(WidgetEvent::Dismiss) => controller.dismiss(),
                None => break,
            },
            handle = timer => {
                // Elapsed deadlines must not stay armed or the next turn spins on them.
                controller.scheduler_mut().cancel(handle);
                controller.fire(handle);
            }
        }

        state.send_if_modified(|current| {
            if current == controller.state() {
                false
            } else {
                *current = controller.state().clone();
                true
            }
        });
    }

    debug!(evaluations = controller.evaluations(), "search widget stopped");
    controller.evaluations()
}
