//! # Static Path Enumeration
//!
//! The static build needs one page per `(collection, section)` pair. This module
//! produces that list by walking the store exactly once:
//!
//! ```text
//! for c in list_collection_ids():
//!     for s in list_section_ids(c):
//!         yield (c, s)
//! ```
//!
//! Entries come out grouped by collection, in listing order. No deduplication is
//! needed: a directory cannot hold two entries with the same name.
//!
//! Any I/O fault aborts enumeration (a build with silently missing pages is
//! worse than a failed build). Empty listings are fine.

use crate::error::Result;
use crate::model::StaticPathEntry;
use crate::store::ContentStore;
use tracing::{debug, info};

pub fn enumerate_all_paths<S: ContentStore>(store: &S) -> Result<Vec<StaticPathEntry>> {
    let collections = store.list_collection_ids()?;
    let mut paths = Vec::new();

    for collection in &collections {
        let sections = store.list_section_ids(collection)?;
        debug!(%collection, sections = sections.len(), "enumerated collection");
        paths.extend(
            sections
                .into_iter()
                .map(|section| StaticPathEntry::new(collection.clone(), section)),
        );
    }

    info!(
        collections = collections.len(),
        paths = paths.len(),
        "enumerated static paths"
    );
    Ok(paths)
}
