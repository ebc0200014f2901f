//! Test helper functions for scanner unit tests
//!
//! Temporary tree builders and in-memory fakes for the capability traits.

use crate::scanner::error::{ScanError, ScanResult};
use crate::scanner::options::ScanOptions;
use crate::scanner::traits::{FileScanner, TreeWalker};
use crate::spdx::Tag;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Five-line fixture with tags on lines 1 and 3
pub const EXAMPLE_FILE: &str = "// SPDX-FileType: DOCUMENTATION\n\
int main(void);\n\
# SPDX-FileCopyrightText: 2019 Jane Doe <jane@example.com>\n\
\n\
return 0;\n";

/// Create a temporary directory populated with `(relative path, content)` files
pub fn create_tree(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, content) in files {
        let path = dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

/// Sorted copy of a tag list, for order-insensitive comparison
pub fn sorted(mut tags: Vec<Tag>) -> Vec<Tag> {
    tags.sort();
    tags
}

/// In-memory walker + file scanner
///
/// Files are keyed by their path relative to the scan root. Paths listed
/// in `failing` are reported by the walker but fail when scanned, which
/// models a file deleted between listing and opening.
#[derive(Default)]
pub struct FakeImplementation {
    pub files: Vec<(PathBuf, Vec<Tag>)>,
    pub failing: Vec<PathBuf>,
    pub walk_fails: bool,
    pub delay: Duration,
    pub in_flight: Arc<AtomicUsize>,
    pub peak_in_flight: Arc<AtomicUsize>,
    pub scanned: Arc<AtomicUsize>,
}

impl FakeImplementation {
    pub fn with_files(files: Vec<(&str, Vec<Tag>)>) -> Self {
        Self {
            files: files
                .into_iter()
                .map(|(path, tags)| (PathBuf::from(path), tags))
                .collect(),
            ..Default::default()
        }
    }

    fn lookup(&self, path: &Path) -> Vec<Tag> {
        self.files
            .iter()
            .find(|(relative, _)| path.ends_with(relative))
            .map(|(_, tags)| tags.clone())
            .unwrap_or_default()
    }
}

impl TreeWalker for FakeImplementation {
    fn build_file_list(&self, root: &Path) -> ScanResult<Vec<PathBuf>> {
        if self.walk_fails {
            return Err(ScanError::NotADirectory {
                path: root.to_path_buf(),
            });
        }
        let mut list: Vec<PathBuf> = self.files.iter().map(|(p, _)| p.clone()).collect();
        list.extend(self.failing.iter().cloned());
        Ok(list)
    }
}

impl FileScanner for FakeImplementation {
    fn scan_file(&self, path: &Path, _options: &ScanOptions) -> ScanResult<Vec<Tag>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        self.scanned.fetch_add(1, Ordering::SeqCst);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing.iter().any(|f| path.ends_with(f)) {
            return Err(ScanError::Open {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            });
        }

        Ok(self.lookup(path))
    }
}
