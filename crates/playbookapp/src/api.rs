//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every client (the CLI today, a site generator or dev server tomorrow).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the content store and the search matcher
//! - **Normalizes inputs** (plain strings into [`CollectionId`] / [`SectionId`])
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no terminal I/O.
//!
//! ## Generic Over ContentStore
//!
//! `PlaybookApi<S: ContentStore>` is generic over the storage backend:
//! - Production: `PlaybookApi<FileCatalog>`
//! - Testing: `PlaybookApi<MemoryCatalog>`
//!
//! ## Search Widgets
//!
//! The facade also hands out search controllers configured like its matcher, so a
//! host never has to reassemble the index, limits and debounce interval itself:
//! [`PlaybookApi::controller`] for a synchronous host that drives its own timers,
//! [`PlaybookApi::spawn_widget`] for a tokio host.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{CollectionId, SectionId};
use crate::search::{
    DebouncedQueryController, QueryMatcher, Scheduler, SearchIndex, SearchWidget,
    DEFAULT_DEBOUNCE,
};
use crate::store::ContentStore;
use std::path::Path;
use std::time::Duration;

pub struct PlaybookApi<S: ContentStore> {
    store: S,
    matcher: QueryMatcher,
    debounce: Duration,
}

impl<S: ContentStore> PlaybookApi<S> {
    pub fn new(store: S, matcher: QueryMatcher) -> Self {
        Self {
            store,
            matcher,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn index(&self) -> &SearchIndex {
        self.matcher.index()
    }

    pub fn matcher(&self) -> &QueryMatcher {
        &self.matcher
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn collections(&self) -> Result<CmdResult> {
        commands::list::collections(&self.store)
    }

    pub fn sections(&self, collection: &str) -> Result<CmdResult> {
        commands::list::sections(&self.store, &CollectionId::from(collection))
    }

    pub fn navigation(&self, collection: &str) -> Result<CmdResult> {
        commands::nav::run(&self.store, &CollectionId::from(collection))
    }

    pub fn static_paths(&self) -> Result<CmdResult> {
        commands::paths::run(&self.store)
    }

    pub fn show_section(&self, collection: &str, section: &str) -> Result<CmdResult> {
        commands::show::run(
            &self.store,
            &CollectionId::from(collection),
            &SectionId::from(section),
        )
    }

    pub fn search(&self, query: &str) -> CmdResult {
        commands::search::run(&self.matcher, query)
    }

    pub fn check_index(&self) -> Result<CmdResult> {
        commands::check::run(&self.store, self.matcher.index())
    }

    pub fn build_site(&self, out_dir: &Path) -> Result<CmdResult> {
        commands::build::run(&self.store, self.matcher.index(), out_dir)
    }

    /// A controller over this API's matcher, driven by `scheduler`.
    pub fn controller<T: Scheduler>(&self, scheduler: T) -> DebouncedQueryController<T> {
        DebouncedQueryController::new(self.matcher.clone(), scheduler, self.debounce)
    }

    /// Start a search widget task on the current tokio runtime.
    pub fn spawn_widget(&self) -> SearchWidget {
        SearchWidget::spawn(self.matcher.clone(), self.debounce)
    }
}
