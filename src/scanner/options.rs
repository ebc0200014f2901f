//! Scan configuration
//!
//! Options are built once before a scan and only read afterwards. They can
//! be set directly, through the builder-style setters, or by applying
//! functional options produced by [`with_threads`] and [`with_num_lines`].

/// Parallelism used when no positive thread count is configured
pub const DEFAULT_THREADS: usize = 5;

/// Immutable settings for one scan run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Requested parallelism; non-positive selects [`DEFAULT_THREADS`]
    pub threads: i64,
    /// Per-file line budget; a file stops being read once more than
    /// this many lines were processed
    pub lines: i64,
}

/// Functional option applied to [`ScanOptions`] at construction time
pub type ScanOption = Box<dyn FnOnce(&mut ScanOptions) + Send>;

/// Set the number of files scanned concurrently
pub fn with_threads(threads: i64) -> ScanOption {
    Box::new(move |opts: &mut ScanOptions| opts.threads = threads)
}

/// Set the per-file line budget
pub fn with_num_lines(lines: i64) -> ScanOption {
    Box::new(move |opts: &mut ScanOptions| opts.lines = lines)
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build options from a list of functional options, applied in order
    pub fn from_options(options: impl IntoIterator<Item = ScanOption>) -> Self {
        let mut opts = Self::default();
        for apply in options {
            apply(&mut opts);
        }
        opts
    }

    pub fn with_threads(mut self, threads: i64) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_num_lines(mut self, lines: i64) -> Self {
        self.lines = lines;
        self
    }

    /// Degree of parallelism actually used by a tree scan
    pub fn effective_threads(&self) -> usize {
        if self.threads > 0 {
            usize::try_from(self.threads).unwrap_or(DEFAULT_THREADS)
        } else {
            DEFAULT_THREADS
        }
    }

    /// True once `lines_read` has gone past the configured budget.
    ///
    /// The comparison is strictly greater-than, so a budget of `N` lets
    /// `N + 1` lines through and a budget of 0 stops after the first line.
    pub fn line_budget_exceeded(&self, lines_read: u64) -> bool {
        i128::from(lines_read) > i128::from(self.lines)
    }
}
