//! Directory traversal producing the list of files to scan

use crate::scanner::error::{ScanError, ScanResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List every regular file beneath `root`, relative to `root`
///
/// Directories, symlinks and special files are skipped. Order follows the
/// directory iteration order of the filesystem and is not sorted. Any
/// traversal error aborts the walk, including a root that is not a
/// directory.
pub fn build_file_list(root: &Path) -> ScanResult<Vec<PathBuf>> {
    let mut file_list = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: root.to_path_buf(),
            source,
        })?;

        if entry.depth() == 0 {
            if !entry.file_type().is_dir() {
                return Err(ScanError::NotADirectory {
                    path: root.to_path_buf(),
                });
            }
            continue;
        }

        if entry.file_type().is_file() {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            file_list.push(relative.to_path_buf());
        }
    }

    log::debug!("{}: {} file(s) to scan", root.display(), file_list.len());
    Ok(file_list)
}
