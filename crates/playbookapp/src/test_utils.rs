use crate::store::catalog::Catalog;
use crate::store::FileCatalog;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub catalog: FileCatalog,
    /// The temp dir itself; content lives under `root/content`.
    pub root: PathBuf,
    pub content_root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        let content_root = root.join("content");
        let catalog = Catalog::new_fs(content_root.clone());
        Self {
            _temp_dir: temp_dir,
            catalog,
            root,
            content_root,
        }
    }

    /// Write `<content>/<collection>/sections/<section>.mdx`.
    pub fn write_section(&self, collection: &str, section: &str, raw: &str) -> PathBuf {
        let dir = self.content_root.join(collection).join("sections");
        fs::create_dir_all(&dir).expect("failed to create sections dir");
        let path = dir.join(format!("{}.mdx", section));
        fs::write(&path, raw).expect("failed to write section");
        path
    }
}
