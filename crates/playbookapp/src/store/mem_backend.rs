use super::backend::ContentBackend;
use crate::error::{PlaybookError, Result};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::PathBuf;

/// In-memory content backend for testing.
///
/// Uses `RefCell` for interior mutability since the catalog is single-threaded.
/// Collections are tracked separately from files so that a collection without a
/// sections directory (or with an empty one) can be modelled.
#[derive(Default)]
pub struct MemBackend {
    collections: RefCell<BTreeSet<String>>,
    sections_dirs: RefCell<BTreeSet<String>>,
    files: RefCell<BTreeMap<(String, String), String>>,
    simulate_read_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a collection directory with no sections directory.
    pub fn add_collection(&self, collection: &str) {
        self.collections.borrow_mut().insert(collection.to_string());
    }

    /// Add a file to a collection's sections directory, creating both as needed.
    pub fn add_file(&self, collection: &str, file_name: &str, content: &str) {
        self.add_collection(collection);
        self.sections_dirs
            .borrow_mut()
            .insert(collection.to_string());
        self.files.borrow_mut().insert(
            (collection.to_string(), file_name.to_string()),
            content.to_string(),
        );
    }

    /// Make every read fail with a permission error, to exercise fault propagation.
    pub fn set_simulate_read_error(&self, simulate: bool) {
        *self.simulate_read_error.borrow_mut() = simulate;
    }

    fn check_fault(&self) -> Result<()> {
        if *self.simulate_read_error.borrow() {
            return Err(PlaybookError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "simulated read error",
            )));
        }
        Ok(())
    }
}

impl ContentBackend for MemBackend {
    fn list_collection_dirs(&self) -> Result<Vec<String>> {
        self.check_fault()?;
        Ok(self.collections.borrow().iter().cloned().collect())
    }

    fn list_section_files(&self, collection: &str) -> Result<Vec<String>> {
        self.check_fault()?;
        if !self.sections_dirs.borrow().contains(collection) {
            return Ok(Vec::new());
        }
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|(c, _)| c == collection)
            .map(|(_, name)| name.clone())
            .collect())
    }

    fn read_section_file(&self, collection: &str, file_name: &str) -> Result<Option<String>> {
        self.check_fault()?;
        Ok(self
            .files
            .borrow()
            .get(&(collection.to_string(), file_name.to_string()))
            .cloned())
    }

    fn section_file_path(&self, collection: &str, file_name: &str) -> PathBuf {
        PathBuf::from(format!("/memory/{}/sections/{}", collection, file_name))
    }
}
