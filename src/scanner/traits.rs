//! Scanner capability traits
//!
//! The orchestrator only talks to the filesystem through these seams, so
//! tests can drive it with in-memory fakes. [`DefaultImplementation`] is the
//! production implementation backed by [`walker`](crate::scanner::walker)
//! and [`file`](crate::scanner::file).

use crate::scanner::error::ScanResult;
use crate::scanner::options::ScanOptions;
use crate::spdx::Tag;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Enumerates the files a tree scan should visit
pub trait TreeWalker: Send + Sync {
    /// Relative paths of every regular file under `root`
    fn build_file_list(&self, root: &Path) -> ScanResult<Vec<PathBuf>>;
}

/// Extracts tags from one file
pub trait FileScanner: Send + Sync {
    /// Tags found in `path`, in line order, honouring `options.lines`
    fn scan_file(&self, path: &Path, options: &ScanOptions) -> ScanResult<Vec<Tag>>;
}

/// Everything the orchestrator needs from a backing implementation
pub trait ScannerImplementation: TreeWalker + FileScanner {}

impl<T: TreeWalker + FileScanner> ScannerImplementation for T {}

/// Scans a whole tree and returns the merged tags
#[async_trait]
pub trait PathScanner: Send + Sync {
    async fn scan_path(&self, root: &Path) -> ScanResult<Vec<Tag>>;
}

/// Filesystem-backed implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultImplementation;

impl TreeWalker for DefaultImplementation {
    fn build_file_list(&self, root: &Path) -> ScanResult<Vec<PathBuf>> {
        crate::scanner::walker::build_file_list(root)
    }
}

impl FileScanner for DefaultImplementation {
    fn scan_file(&self, path: &Path, options: &ScanOptions) -> ScanResult<Vec<Tag>> {
        crate::scanner::file::scan_file(path, options)
    }
}
