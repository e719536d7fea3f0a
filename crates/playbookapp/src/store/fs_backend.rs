use super::backend::ContentBackend;
use crate::error::{PlaybookError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FsBackend {
    content_root: PathBuf,
    sections_dir: String,
}

impl FsBackend {
    pub fn new(content_root: PathBuf) -> Self {
        Self {
            content_root,
            sections_dir: "sections".to_string(),
        }
    }

    pub fn with_sections_dir(mut self, dir: &str) -> Self {
        self.sections_dir = dir.to_string();
        self
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    fn sections_path(&self, collection: &str) -> PathBuf {
        self.content_root.join(collection).join(&self.sections_dir)
    }

    /// Whether `dir` exists as a directory. Absent, or present as something else, is
    /// `false`; any other failure to look (permissions, symlink loops) is an error.
    fn existing_dir(dir: &Path) -> Result<bool> {
        match fs::metadata(dir) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(PlaybookError::Io(e)),
        }
    }

    /// The collection's sections directory, if every level down to it is a directory.
    fn existing_sections_dir(&self, collection: &str) -> Result<Option<PathBuf>> {
        let collection_dir = self.content_root.join(collection);
        let sections_dir = collection_dir.join(&self.sections_dir);
        for dir in [&self.content_root, &collection_dir, &sections_dir] {
            if !Self::existing_dir(dir)? {
                debug!(dir = %dir.display(), "no such directory");
                return Ok(None);
            }
        }
        Ok(Some(sections_dir))
    }

    /// Lists entry names in `dir` that satisfy `keep`. A missing directory is empty.
    fn list_entries(&self, dir: &Path, keep: fn(&fs::FileType) -> bool) -> Result<Vec<String>> {
        if !Self::existing_dir(dir)? {
            debug!(dir = %dir.display(), "no such directory, listing empty");
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(dir).map_err(PlaybookError::Io)?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(PlaybookError::Io)?;
            // Follow symlinks so linked collections count as directories.
            let file_type = match fs::metadata(entry.path()) {
                Ok(meta) => meta.file_type(),
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(PlaybookError::Io(e)),
            };
            if !keep(&file_type) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }
}

impl ContentBackend for FsBackend {
    fn list_collection_dirs(&self) -> Result<Vec<String>> {
        self.list_entries(&self.content_root, fs::FileType::is_dir)
    }

    fn list_section_files(&self, collection: &str) -> Result<Vec<String>> {
        match self.existing_sections_dir(collection)? {
            Some(dir) => self.list_entries(&dir, fs::FileType::is_file),
            None => Ok(Vec::new()),
        }
    }

    fn read_section_file(&self, collection: &str, file_name: &str) -> Result<Option<String>> {
        let Some(sections_dir) = self.existing_sections_dir(collection)? else {
            return Ok(None);
        };

        let path = sections_dir.join(file_name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "read section");
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PlaybookError::Io(e)),
        }
    }

    fn section_file_path(&self, collection: &str, file_name: &str) -> PathBuf {
        self.sections_path(collection).join(file_name)
    }
}
