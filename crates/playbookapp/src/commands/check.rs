//! Index/content consistency.
//!
//! The curated search table is maintained by hand, separately from the content
//! tree, so the two drift: a section gets renamed and the table still points at the
//! old route, or a new section never gets an entry. This check makes both visible.
//! It never edits the index.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::SearchEntry;
use crate::paths::enumerate_all_paths;
use crate::search::SearchIndex;
use crate::store::ContentStore;
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexReport {
    /// Index entries whose path is not a static route.
    pub dangling: Vec<SearchEntry>,
    /// Static routes that no index entry points to.
    pub unindexed: Vec<String>,
}

impl IndexReport {
    pub fn is_consistent(&self) -> bool {
        self.dangling.is_empty() && self.unindexed.is_empty()
    }
}

pub fn check_index<S: ContentStore>(store: &S, index: &SearchIndex) -> Result<IndexReport> {
    let routes: Vec<String> = enumerate_all_paths(store)?
        .iter()
        .map(|p| p.route())
        .collect();
    let known: BTreeSet<&str> = routes.iter().map(String::as_str).collect();
    let indexed: BTreeSet<&str> = index.iter().map(|e| e.path.as_str()).collect();

    let dangling = index
        .iter()
        .filter(|e| !known.contains(e.path.as_str()))
        .cloned()
        .collect();
    let unindexed = routes
        .iter()
        .filter(|r| !indexed.contains(r.as_str()))
        .cloned()
        .collect();

    Ok(IndexReport {
        dangling,
        unindexed,
    })
}

pub fn run<S: ContentStore>(store: &S, index: &SearchIndex) -> Result<CmdResult> {
    let report = check_index(store, index)?;
    let mut result = CmdResult::default();

    for entry in &report.dangling {
        result.add_message(CmdMessage::warning(format!(
            "Index entry \"{}\" points to {}, which has no page",
            entry.title, entry.path
        )));
    }
    for route in &report.unindexed {
        result.add_message(CmdMessage::warning(format!(
            "Section {} has no search entry",
            route
        )));
    }
    if report.is_consistent() {
        result.add_message(CmdMessage::success(format!(
            "Search index is consistent ({} entries)",
            index.len()
        )));
    }

    Ok(result.with_report(report))
}
