//! # Configuration
//!
//! Playbook configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `PLAYBOOK__CONTENT_ROOT`, `PLAYBOOK__MAX_RESULTS`, etc.
//! 2. **Site Config**: `./playbook.toml` in the site directory.
//! 3. **User Config**: OS-appropriate config directory (via `directories` crate),
//!    or `$PLAYBOOK_CONFIG_DIR` when set.
//! 4. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `content_root` | `content/playbooks` | Directory holding one subdirectory per collection |
//! | `sections_dir` | `sections` | Directory inside each collection holding section files |
//! | `file_ext` | `.mdx` | Suffix of section files |
//! | `search_debounce_ms` | `300` | Quiet period before a typed query is matched |
//! | `max_results` | `8` | Result cap for search |
//! | `min_query_chars` | `2` | Shortest query (after trimming) that is matched |
//! | `search_index` | unset | JSON file with a curated search table |
//! | `derive_search_index` | `false` | Build the search table from section metadata instead |

use crate::error::{PlaybookError, Result};
use crate::search::matcher::{MAX_RESULTS, MIN_QUERY_CHARS};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a playbook site, stored in `playbook.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlaybookConfig {
    /// Directory holding one subdirectory per collection, relative to the site directory.
    #[config(default = "content/playbooks")]
    pub content_root: String,

    /// Name of the directory inside each collection that holds section files.
    #[config(default = "sections")]
    pub sections_dir: String,

    /// Suffix of section files (e.g. ".mdx", ".md").
    #[config(default = ".mdx")]
    pub file_ext: String,

    /// Milliseconds of quiet after the last keystroke before searching.
    #[config(default = 300)]
    pub search_debounce_ms: u64,

    /// Maximum number of search results shown.
    #[config(default = 8)]
    pub max_results: usize,

    /// Queries shorter than this, after trimming, produce no results.
    #[config(default = 2)]
    pub min_query_chars: usize,

    /// Optional JSON file with the curated search table.
    /// When absent, the built-in table is used.
    pub search_index: Option<String>,

    /// Derive the search table from section metadata instead of a curated list.
    #[config(default = false)]
    pub derive_search_index: bool,
}

impl Default for PlaybookConfig {
    fn default() -> Self {
        Self {
            content_root: "content/playbooks".to_string(),
            sections_dir: "sections".to_string(),
            file_ext: ".mdx".to_string(),
            search_debounce_ms: 300,
            max_results: MAX_RESULTS,
            min_query_chars: MIN_QUERY_CHARS,
            search_index: None,
            derive_search_index: false,
        }
    }
}

impl PlaybookConfig {
    /// Get the file extension, normalized to start with a dot.
    pub fn file_ext(&self) -> String {
        if self.file_ext.starts_with('.') {
            self.file_ext.clone()
        } else {
            format!(".{}", self.file_ext)
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// The content root, resolved against `base` when relative.
    pub fn content_root_in(&self, base: &Path) -> PathBuf {
        base.join(&self.content_root)
    }

    /// The curated index file, resolved against `base` when relative.
    pub fn search_index_in(&self, base: &Path) -> Option<PathBuf> {
        self.search_index.as_ref().map(|p| base.join(p))
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_results == 0 {
            return Err(PlaybookError::Config(
                "max_results must be at least 1".to_string(),
            ));
        }
        if self.sections_dir.trim().is_empty() {
            return Err(PlaybookError::Config(
                "sections_dir must not be empty".to_string(),
            ));
        }
        if self.file_ext.trim_start_matches('.').is_empty() {
            return Err(PlaybookError::Config(
                "file_ext must name a suffix".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlaybookConfig::default();
        assert_eq!(config.content_root, "content/playbooks");
        assert_eq!(config.file_ext(), ".mdx");
        assert_eq!(config.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.max_results, 8);
        assert_eq!(config.min_query_chars, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_ext_normalization_without_dot() {
        let config = PlaybookConfig {
            file_ext: "md".to_string(),
            ..Default::default()
        };
        assert_eq!(config.file_ext(), ".md");
    }

    #[test]
    fn test_paths_resolve_against_base() {
        let config = PlaybookConfig {
            search_index: Some("data/search.json".to_string()),
            ..Default::default()
        };
        let base = Path::new("/site");
        assert_eq!(
            config.content_root_in(base),
            PathBuf::from("/site/content/playbooks")
        );
        assert_eq!(
            config.search_index_in(base),
            Some(PathBuf::from("/site/data/search.json"))
        );
    }

    #[test]
    fn test_absolute_content_root_wins() {
        let config = PlaybookConfig {
            content_root: "/srv/content".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.content_root_in(Path::new("/site")),
            PathBuf::from("/srv/content")
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = PlaybookConfig {
            max_results: 0,
            ..Default::default()
        };
        assert!(matches!(zero.validate(), Err(PlaybookError::Config(_))));

        let no_dir = PlaybookConfig {
            sections_dir: " ".to_string(),
            ..Default::default()
        };
        assert!(no_dir.validate().is_err());

        let no_ext = PlaybookConfig {
            file_ext: ".".to_string(),
            ..Default::default()
        };
        assert!(no_ext.validate().is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let config: PlaybookConfig = toml::from_str(
            r#"
content_root = "docs"
sections_dir = "pages"
file_ext = ".md"
search_debounce_ms = 150
max_results = 5
min_query_chars = 3
derive_search_index = true
"#,
        )
        .unwrap();
        assert_eq!(config.content_root, "docs");
        assert_eq!(config.search_debounce(), Duration::from_millis(150));
        assert!(config.derive_search_index);
        assert!(config.search_index.is_none());
    }
}
