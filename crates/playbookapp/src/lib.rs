//! # Playbook Architecture
//!
//! Playbookapp is the **UI-agnostic core** of a playbook documentation site. The site
//! itself (page layout, sidebar, search dropdown) is somebody else's problem; this
//! crate answers the questions those pieces ask:
//!
//! - Which collections and sections exist, and what do they say?
//! - Which pages must the static build produce?
//! - What does the search box show for the text typed so far?
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/playbook)                                      │
//! │  - Argument parsing, terminal output, exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns store + search index     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Listing, enumeration, search, checks, site build         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ContentStore trait, Catalog over a ContentBackend        │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The search side ([`search`]) sits next to the store rather than under it: the
//! index is a curated table, not something discovered on disk.
//!
//! ## Build Time vs Runtime
//!
//! - **Build time**: [`paths::enumerate_all_paths`] walks the store once and yields
//!   every `(collection, section)` pair that needs a page.
//! - **Runtime**: [`search::DebouncedQueryController`] turns keystrokes into result
//!   lists, running [`search::QueryMatcher`] at most once per quiet period.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade used by every client
//! - [`commands`]: Business logic per operation
//! - [`store`]: Content discovery and section loading
//! - [`frontmatter`]: Metadata header parsing
//! - [`model`]: Identifiers, metadata and documents
//! - [`paths`]: Static path enumeration
//! - [`search`]: Index, matcher, debounce controller and async widget
//! - [`render`]: Section to HTML
//! - [`config`]: Configuration
//! - [`init`]: Context wiring (config loading, store construction)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod init;
pub mod model;
pub mod paths;
pub mod render;
pub mod search;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;
