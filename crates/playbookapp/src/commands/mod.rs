//! # Command Layer
//!
//! This module contains the **business logic** of playbook. Each command lives in its
//! own submodule and implements plain Rust functions over the store and the search
//! index.
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: No stdout or stderr. The site builder writes files because
//!   writing files is its job, nothing else does.
//! - **Argument parsing**: That's the CLI layer's job.
//! - **Exit codes**: Return `Result`, let the caller decide.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. The struct carries whichever lists the
//! command produced plus leveled [`CmdMessage`]s, and the UI decides how to draw them.
//!
//! ## Testing Strategy
//!
//! Command tests run against the in-memory catalog; only [`build`] touches a real
//! directory, through `tempfile`.
//!
//! ## Command Modules
//!
//! - [`list`]: Collections and sections
//! - [`nav`]: Sidebar ordering for a collection
//! - [`paths`]: Static path enumeration
//! - [`show`]: Load one section
//! - [`search`]: One-shot query against the index
//! - [`check`]: Index/content consistency
//! - [`build`]: Write the rendered site

use crate::model::{
    CollectionId, NavEntry, SearchEntry, SectionDocument, SectionId, StaticPathEntry,
};
use serde::Serialize;
use std::path::PathBuf;

pub mod build;
pub mod check;
pub mod list;
pub mod nav;
pub mod paths;
pub mod search;
pub mod show;

pub use check::IndexReport;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub collections: Vec<CollectionId>,
    pub sections: Vec<SectionId>,
    pub nav: Vec<NavEntry>,
    pub paths: Vec<StaticPathEntry>,
    pub document: Option<SectionDocument>,
    pub results: Vec<SearchEntry>,
    pub report: Option<IndexReport>,
    /// Files written (for `build`).
    pub written: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_collections(mut self, collections: Vec<CollectionId>) -> Self {
        self.collections = collections;
        self
    }

    pub fn with_sections(mut self, sections: Vec<SectionId>) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_nav(mut self, nav: Vec<NavEntry>) -> Self {
        self.nav = nav;
        self
    }

    pub fn with_paths(mut self, paths: Vec<StaticPathEntry>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_document(mut self, document: SectionDocument) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_results(mut self, results: Vec<SearchEntry>) -> Self {
        self.results = results;
        self
    }

    pub fn with_report(mut self, report: IndexReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_written(mut self, written: Vec<PathBuf>) -> Self {
        self.written = written;
        self
    }
}
