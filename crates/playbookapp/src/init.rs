//! # Context Wiring
//!
//! [`initialize`] turns a working directory into a ready [`PlaybookApi`]:
//!
//! 1. Load [`PlaybookConfig`] with clapfig, merging the user config directory and
//!    the site directory (`cwd`), the latter winning. `PLAYBOOK__*` environment
//!    variables override both.
//! 2. Validate it.
//! 3. Build the filesystem catalog at the content root (`--content` override, or
//!    `content_root` resolved against `cwd`).
//! 4. Pick the search table:
//!    - `derive_search_index = true` → derived from section metadata
//!    - `search_index = "<file>"` → curated JSON table
//!    - otherwise → the built-in table
//!
//! ## Environment Variables
//!
//! * `PLAYBOOK_CONFIG_DIR` - Replaces the user config directory. Primarily used by
//!   tests to keep the developer's own config out of the way.

use crate::api::PlaybookApi;
use crate::config::PlaybookConfig;
use crate::error::Result;
use crate::search::{QueryMatcher, SearchIndex};
use crate::store::catalog::Catalog;
use crate::store::fs_backend::FsBackend;
use crate::store::FileCatalog;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct PlaybookContext {
    pub api: PlaybookApi<FileCatalog>,
    pub config: PlaybookConfig,
    /// Directory the site was resolved from.
    pub site_dir: PathBuf,
}

/// Where user-level configuration lives, if the platform has such a place.
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var("PLAYBOOK_CONFIG_DIR")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            ProjectDirs::from("com", "playbook", "playbook")
                .map(|dirs| dirs.config_dir().to_path_buf())
        })
}

pub fn load_config(site_dir: &Path) -> PlaybookConfig {
    let mut search_paths = Vec::new();
    if let Some(dir) = user_config_dir() {
        search_paths.push(SearchPath::Path(dir));
    }
    search_paths.push(SearchPath::Path(site_dir.to_path_buf()));

    Clapfig::builder()
        .app_name("playbook")
        .file_name("playbook.toml")
        .search_paths(search_paths)
        .search_mode(SearchMode::Merge)
        .load()
        .unwrap_or_default()
}

/// Initialize the playbook context for the site in `cwd`.
///
/// `content_override` replaces the configured content root; a relative override is
/// taken relative to `cwd`.
pub fn initialize(cwd: &Path, content_override: Option<PathBuf>) -> Result<PlaybookContext> {
    with_config(cwd, load_config(cwd), content_override)
}

/// Like [`initialize`], with an already loaded configuration.
pub fn with_config(
    cwd: &Path,
    config: PlaybookConfig,
    content_override: Option<PathBuf>,
) -> Result<PlaybookContext> {
    config.validate()?;

    let content_root = match content_override {
        Some(path) => cwd.join(path),
        None => config.content_root_in(cwd),
    };
    debug!(content_root = %content_root.display(), "initializing catalog");

    let store = Catalog::new(FsBackend::new(content_root).with_sections_dir(&config.sections_dir))
        .with_file_ext(&config.file_ext());

    let index = if config.derive_search_index {
        SearchIndex::from_catalog(&store)?
    } else if let Some(path) = config.search_index_in(cwd) {
        SearchIndex::from_json_file(&path)?
    } else {
        SearchIndex::canonical()
    };

    let matcher = QueryMatcher::new(index)
        .with_max_results(config.max_results)
        .with_min_query_chars(config.min_query_chars);
    let api = PlaybookApi::new(store, matcher).with_debounce(config.search_debounce());

    Ok(PlaybookContext {
        api,
        config,
        site_dir: cwd.to_path_buf(),
    })
}
