//! Sidebar ordering.
//!
//! Sections are ordered by their metadata `order`, ties broken by section id. Unlike
//! the search index, navigation reads every header, so one malformed section fails
//! the whole call: a sidebar with a silent hole is harder to notice than an error.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CollectionId, NavEntry};
use crate::store::ContentStore;

pub fn navigation<S: ContentStore>(store: &S, collection: &CollectionId) -> Result<Vec<NavEntry>> {
    let mut entries = Vec::new();
    for section in store.list_section_ids(collection)? {
        // Listed a moment ago; if it vanished since, there is nothing to link to.
        let Some(doc) = store.load_section(collection, &section)? else {
            continue;
        };
        entries.push(NavEntry {
            path: doc.route(),
            section: doc.section,
            title: doc.metadata.title,
            emoji: doc.metadata.emoji,
            order: doc.metadata.order,
        });
    }
    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.section.cmp(&b.section)));
    Ok(entries)
}

pub fn run<S: ContentStore>(store: &S, collection: &CollectionId) -> Result<CmdResult> {
    let nav = navigation(store, collection)?;
    let mut result = CmdResult::default();
    if nav.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No sections in collection {}.",
            collection
        )));
    }
    Ok(result.with_nav(nav))
}
