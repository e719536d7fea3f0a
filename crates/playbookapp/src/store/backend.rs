use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw content I/O.
/// This trait handles the "how" of reading (filesystem vs memory),
/// while `Catalog` handles the "what" (suffixes, identifiers, parsing).
pub trait ContentBackend {
    // --- Discovery ---

    /// Names of all directories directly under the content root.
    /// Returns an empty list if the root does not exist.
    fn list_collection_dirs(&self) -> Result<Vec<String>>;

    /// Names of all regular files in a collection's sections directory.
    /// Returns an empty list if the collection or its sections directory does not exist.
    fn list_section_files(&self, collection: &str) -> Result<Vec<String>>;

    // --- Content ---

    /// Read a section file by its file name.
    /// Returns Ok(None) if the file does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_section_file(&self, collection: &str, file_name: &str) -> Result<Option<String>>;

    // --- Paths ---

    /// The location of a section file, whether or not it exists.
    /// For FsBackend this is the real path, for MemBackend a virtual one.
    fn section_file_path(&self, collection: &str, file_name: &str) -> PathBuf;
}
