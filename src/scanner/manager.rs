//! Scanner Manager
//!
//! Drives a tree scan: list the files, fan out one blocking scan task per
//! file behind a counting semaphore, merge each file's tags into a single
//! locked accumulator, and report the first recorded failure once every
//! task has finished.

use crate::core::sync::handle_mutex_poison;
use crate::scanner::error::{ScanError, ScanResult};
use crate::scanner::options::{ScanOption, ScanOptions};
use crate::scanner::traits::{DefaultImplementation, PathScanner, ScannerImplementation};
use crate::spdx::Tag;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Tag scanner bound to one set of options
#[derive(Clone)]
pub struct Scanner {
    options: ScanOptions,
    implementation: Arc<dyn ScannerImplementation>,
    announce: bool,
}

impl std::fmt::Debug for Scanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("options", &self.options)
            .field("announce", &self.announce)
            .finish_non_exhaustive()
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

impl Scanner {
    /// Create a filesystem-backed scanner
    pub fn new(options: ScanOptions) -> Self {
        Self::with_implementation(options, DefaultImplementation)
    }

    /// Create a scanner from functional options
    pub fn from_options(options: impl IntoIterator<Item = ScanOption>) -> Self {
        Self::new(ScanOptions::from_options(options))
    }

    /// Create a scanner over a custom walker/file scanner
    pub fn with_implementation(
        options: ScanOptions,
        implementation: impl ScannerImplementation + 'static,
    ) -> Self {
        Self {
            options,
            implementation: Arc::new(implementation),
            announce: true,
        }
    }

    /// Control whether the start-of-scan line is printed to stdout.
    ///
    /// It is always logged at info level regardless.
    pub fn with_announce(mut self, announce: bool) -> Self {
        self.announce = announce;
        self
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scan a single file with this scanner's line budget
    pub fn scan_file(&self, path: &Path) -> ScanResult<Vec<Tag>> {
        self.implementation.scan_file(path, &self.options)
    }

    /// Scan every regular file under `root`
    ///
    /// Returns all tags found, merged in file completion order. If any file
    /// fails, the remaining in-flight files still finish, then the first
    /// recorded error is returned and no tags are.
    pub async fn scan_path(&self, root: &Path) -> ScanResult<Vec<Tag>> {
        let threads = self
            .options
            .effective_threads()
            .min(Semaphore::MAX_PERMITS);
        let banner = format!(
            "Scanning {} with {} threads, max {} lines",
            root.display(),
            threads,
            self.options.lines
        );
        if self.announce {
            println!("{banner}");
        }
        log::info!("{banner}");

        let file_list = self
            .implementation
            .build_file_list(root)
            .map_err(ScanError::file_list)?;

        let collected = Arc::new(Mutex::new(Vec::new()));
        let first_error: Arc<Mutex<Option<ScanError>>> = Arc::new(Mutex::new(None));
        let admission = Arc::new(Semaphore::new(threads));
        let mut tasks = JoinSet::new();

        for relative in file_list {
            // Blocks the fan-out loop until a slot frees up
            let permit = Arc::clone(&admission)
                .acquire_owned()
                .await
                .map_err(|e| ScanError::Task {
                    message: format!("admission semaphore closed: {e}"),
                })?;

            let path = root.join(&relative);
            let options = self.options;
            let implementation = Arc::clone(&self.implementation);
            let collected = Arc::clone(&collected);
            let first_error = Arc::clone(&first_error);

            tasks.spawn_blocking(move || {
                let _permit = permit;
                let outcome = implementation
                    .scan_file(&path, &options)
                    .and_then(|found| merge_tags(&collected, found));
                if let Err(error) = outcome {
                    log::warn!("{}: {}", path.display(), error);
                    record_error(&first_error, error);
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(join_error) = joined {
                record_error(
                    &first_error,
                    ScanError::Task {
                        message: join_error.to_string(),
                    },
                );
            }
        }

        let failure = handle_mutex_poison(first_error.lock(), |message| {
            ScanError::Synchronisation { message }
        })?
        .take();
        if let Some(error) = failure {
            return Err(ScanError::scan_path(error));
        }

        let mut guard = handle_mutex_poison(collected.lock(), |message| {
            ScanError::Synchronisation { message }
        })?;
        let tags = std::mem::take(&mut *guard);
        log::debug!("{}: {} tag(s) in total", root.display(), tags.len());
        Ok(tags)
    }
}

#[async_trait]
impl PathScanner for Scanner {
    async fn scan_path(&self, root: &Path) -> ScanResult<Vec<Tag>> {
        Scanner::scan_path(self, root).await
    }
}

/// Append one file's tags to the shared aggregate, holding the lock only
/// for the append
fn merge_tags(collected: &Mutex<Vec<Tag>>, found: Vec<Tag>) -> ScanResult<()> {
    if found.is_empty() {
        return Ok(());
    }
    let mut tags = handle_mutex_poison(collected.lock(), |message| {
        ScanError::Synchronisation { message }
    })?;
    tags.extend(found);
    Ok(())
}

/// Keep the first error recorded by any task; later ones are dropped
fn record_error(slot: &Mutex<Option<ScanError>>, error: ScanError) {
    let mut slot = slot
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if slot.is_none() {
        *slot = Some(error);
    }
}

/// Scan a tree with the given options
pub async fn scan_path(root: impl AsRef<Path>, options: ScanOptions) -> ScanResult<Vec<Tag>> {
    Scanner::new(options).scan_path(root.as_ref()).await
}

/// Scan a single file with the given options
pub fn scan_file(path: impl AsRef<Path>, options: ScanOptions) -> ScanResult<Vec<Tag>> {
    crate::scanner::file::scan_file(path.as_ref(), &options)
}

/// List the files a tree scan of `root` would visit
pub fn build_file_list(root: impl AsRef<Path>) -> ScanResult<Vec<PathBuf>> {
    crate::scanner::walker::build_file_list(root.as_ref())
}
