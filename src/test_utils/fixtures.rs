use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use crate::index::{DEFAULT_INDEX_PATH, IndexSource};

/// A throwaway static site directory.
pub struct SiteFixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for SiteFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl SiteFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        println!("[FIXTURE] Created site directory: {root:?}");
        Self { temp_dir, root }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Site root as a string, suitable for `--site`.
    #[must_use]
    pub fn site(&self) -> String {
        self.root.display().to_string()
    }

    /// Source pointing at the default index path of this site.
    #[must_use]
    pub fn source(&self) -> IndexSource {
        IndexSource::Local(self.index_path())
    }

    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        self.root.join(DEFAULT_INDEX_PATH.trim_start_matches('/'))
    }

    /// Write raw text as the index document.
    pub fn write_index(&self, raw: &str) -> PathBuf {
        let path = self.index_path();
        std::fs::write(&path, raw).expect("Failed to write index");
        println!("[FIXTURE] Wrote index: {path:?} ({} bytes)", raw.len());
        path
    }

    /// Write a list of JSON entries as the index document.
    pub fn write_entries(&self, entries: &[Value]) -> PathBuf {
        let raw = serde_json::to_string_pretty(entries).expect("Failed to serialize entries");
        self.write_index(&raw)
    }

    /// Write an arbitrary file below the site root.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }
}

impl Drop for SiteFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up site directory: {:?}", self.root);
    }
}
