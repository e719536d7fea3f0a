use super::backend::ContentBackend;
use super::fs_backend::FsBackend;
use super::mem_backend::MemBackend;
use super::ContentStore;
use crate::error::{PlaybookError, Result};
use crate::frontmatter::parse_section;
use crate::model::{is_safe_segment, CollectionId, SectionDocument, SectionId};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Catalog logic over any content backend: suffix handling, identifier
/// validation and metadata parsing.
pub struct Catalog<B: ContentBackend> {
    backend: B,
    file_ext: String,
}

impl<B: ContentBackend> Catalog<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            file_ext: ".mdx".to_string(),
        }
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn section_filename(&self, section: &SectionId) -> String {
        format!("{}{}", section, self.file_ext)
    }

    /// Where a section lives (or would live).
    pub fn section_path(&self, collection: &CollectionId, section: &SectionId) -> PathBuf {
        self.backend
            .section_file_path(collection.as_str(), &self.section_filename(section))
    }
}

impl Catalog<FsBackend> {
    pub fn new_fs(content_root: PathBuf) -> Self {
        Self::new(FsBackend::new(content_root))
    }
}

impl Catalog<MemBackend> {
    pub fn new_mem() -> Self {
        Self::new(MemBackend::new())
    }
}

impl<B: ContentBackend> ContentStore for Catalog<B> {
    fn list_collection_ids(&self) -> Result<Vec<CollectionId>> {
        let mut ids: Vec<CollectionId> = self
            .backend
            .list_collection_dirs()?
            .into_iter()
            .filter(|name| is_safe_segment(name))
            .map(CollectionId::from)
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn list_section_ids(&self, collection: &CollectionId) -> Result<Vec<SectionId>> {
        if !is_safe_segment(collection.as_str()) {
            return Ok(Vec::new());
        }

        let mut ids: Vec<SectionId> = self
            .backend
            .list_section_files(collection.as_str())?
            .into_iter()
            .filter_map(|name| {
                let stem = name.strip_suffix(self.file_ext.as_str())?;
                if is_safe_segment(stem) {
                    Some(SectionId::new(stem))
                } else {
                    warn!(collection = %collection, file = %name, "skipping section with unusable name");
                    None
                }
            })
            .collect();
        ids.sort();
        Ok(ids)
    }

    fn load_section(
        &self,
        collection: &CollectionId,
        section: &SectionId,
    ) -> Result<Option<SectionDocument>> {
        if !is_safe_segment(collection.as_str()) || !is_safe_segment(section.as_str()) {
            debug!(%collection, %section, "rejecting unsafe identifier");
            return Ok(None);
        }

        let file_name = self.section_filename(section);
        let raw = match self
            .backend
            .read_section_file(collection.as_str(), &file_name)?
        {
            Some(raw) => raw,
            None => return Ok(None),
        };

        let (metadata, body) =
            parse_section(&raw).map_err(|reason| PlaybookError::MalformedMetadata {
                path: self.section_path(collection, section),
                reason,
            })?;

        Ok(Some(SectionDocument {
            collection: collection.clone(),
            section: section.clone(),
            metadata,
            body,
        }))
    }
}
