//! Static site output.
//!
//! ```text
//! out/
//! ├── search-index.json
//! └── {collection}/{section}/index.html
//! ```
//!
//! One page per static path. The first failure aborts the build; files already
//! written stay where they are. A collection named like the index file is refused
//! before anything is written.

use crate::commands::{show, CmdMessage, CmdResult};
use crate::error::{PlaybookError, Result};
use crate::paths::enumerate_all_paths;
use crate::render::render_page;
use crate::search::SearchIndex;
use crate::store::ContentStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SEARCH_INDEX_FILE: &str = "search-index.json";
const PAGE_FILE: &str = "index.html";

pub fn build_site<S: ContentStore>(
    store: &S,
    index: &SearchIndex,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let paths = enumerate_all_paths(store)?;
    if paths
        .iter()
        .any(|entry| entry.collection.as_str() == SEARCH_INDEX_FILE)
    {
        return Err(PlaybookError::OutputConflict {
            path: out_dir.join(SEARCH_INDEX_FILE),
        });
    }

    let mut written = Vec::new();
    for entry in paths {
        let doc = show::load(store, &entry.collection, &entry.section)?;
        let dir = out_dir
            .join(entry.collection.as_str())
            .join(entry.section.as_str());
        fs::create_dir_all(&dir)?;

        let page = dir.join(PAGE_FILE);
        fs::write(&page, render_page(&doc))?;
        debug!(route = %entry, file = %page.display(), "wrote page");
        written.push(page);
    }

    fs::create_dir_all(out_dir)?;
    let index_file = out_dir.join(SEARCH_INDEX_FILE);
    fs::write(&index_file, serde_json::to_string_pretty(index.entries())?)?;
    written.push(index_file);

    info!(
        pages = written.len() - 1,
        out = %out_dir.display(),
        "site built"
    );
    Ok(written)
}

pub fn run<S: ContentStore>(store: &S, index: &SearchIndex, out_dir: &Path) -> Result<CmdResult> {
    let written = build_site(store, index, out_dir)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Built {} pages into {}",
        written.len() - 1,
        out_dir.display()
    )));
    Ok(result.with_written(written))
}
