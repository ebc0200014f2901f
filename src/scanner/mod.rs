//! Scanner Component
//!
//! Walks a directory tree and extracts `SPDX-<Key>: <Value>` tags from the
//! head of every regular file.
//!
//! ## Pipeline
//!
//! - **walker**: recursive listing of regular files relative to the root
//! - **file**: line-budgeted reading of one file through the tag parser
//! - **parser**: the compiled tag pattern and single-line matching
//! - **manager**: bounded-parallel fan-out over the file list with a
//!   single locked accumulator and first-error reporting
//! - **traits**: capability seams so the manager can run over fakes

pub mod api;
pub mod error;
pub mod file;
pub mod manager;
pub mod options;
pub mod parser;
pub mod traits;
pub mod walker;

pub use error::{ScanError, ScanResult};
pub use manager::Scanner;
pub use options::{ScanOption, ScanOptions};

#[cfg(test)]
mod tests;
