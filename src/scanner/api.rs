//! Scanner API
//!
//! Public surface of the scanner system. Callers outside the module should
//! import from here rather than from the individual submodules.

// Orchestration
pub use crate::scanner::manager::{build_file_list, scan_file, scan_path, Scanner};

// Configuration
pub use crate::scanner::options::{
    with_num_lines, with_threads, ScanOption, ScanOptions, DEFAULT_THREADS,
};

// Single-line matching
pub use crate::scanner::parser::{parse_line, TAG_PATTERN};

// Capability seams
pub use crate::scanner::traits::{
    DefaultImplementation, FileScanner, PathScanner, ScannerImplementation, TreeWalker,
};

// Error handling
pub use crate::scanner::error::{ScanError, ScanResult};

// Core data types
pub use crate::spdx::Tag;
