//! # Storage Layer
//!
//! This module defines the content store for playbook sites. The [`ContentStore`]
//! trait is what the rest of the crate talks to; [`catalog::Catalog`] implements it
//! on top of a raw [`backend::ContentBackend`].
//!
//! ## Layout on Disk
//!
//! ```text
//! content/playbooks/              # content root
//! ├── ai-marketing/               # collection
//! │   ├── playbook.config.ts      # ignored
//! │   └── sections/               # sections directory (configurable)
//! │       ├── content.mdx         # section "content"
//! │       └── email.mdx           # section "email"
//! └── sales/                      # collection without sections: lists empty
//! ```
//!
//! ## Absence Is Not an Error
//!
//! The site must build with partial content, so:
//! - Missing content root → no collections.
//! - Missing collection or sections directory → no sections.
//! - Missing section file → `Ok(None)`, the caller renders a 404.
//!
//! Everything else (permissions, unreadable files, invalid UTF-8) is an
//! [`crate::error::PlaybookError::Io`] and propagates untouched. A section whose
//! header lacks a `title` is [`crate::error::PlaybookError::MalformedMetadata`].
//!
//! ## Ordering
//!
//! Directory iteration order differs between platforms, so both listings are
//! sorted by name. Downstream code must still treat them as sets.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Reads the real content tree.
//! - [`mem_backend::MemBackend`]: For testing catalog logic without filesystem I/O.

use crate::error::Result;
use crate::model::{CollectionId, SectionDocument, SectionId};

pub mod backend;
pub mod catalog;
pub mod fs_backend;
pub mod mem_backend;

pub type FileCatalog = catalog::Catalog<fs_backend::FsBackend>;
pub type MemoryCatalog = catalog::Catalog<mem_backend::MemBackend>;

/// Read-only access to collections and their sections.
pub trait ContentStore {
    /// Every collection under the content root.
    fn list_collection_ids(&self) -> Result<Vec<CollectionId>>;

    /// Every section of `collection`, format suffix stripped.
    fn list_section_ids(&self, collection: &CollectionId) -> Result<Vec<SectionId>>;

    /// Load and parse one section. `Ok(None)` if it does not exist.
    fn load_section(
        &self,
        collection: &CollectionId,
        section: &SectionId,
    ) -> Result<Option<SectionDocument>>;
}
