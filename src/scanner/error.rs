//! Scanner Error Types

use std::path::PathBuf;

/// Scanner error types
///
/// Each variant names the operation that failed and keeps the underlying
/// cause reachable through `source()`.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Directory traversal failed (missing root, not a directory, unreadable entry)
    #[error("scanning directory {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The scan root exists but is not a directory
    #[error("scanning directory {}: not a directory", .path.display())]
    NotADirectory { path: PathBuf },

    /// The file list for a scan could not be produced
    #[error("building file list: {source}")]
    FileList {
        #[source]
        source: Box<ScanError>,
    },

    /// A file could not be opened
    #[error("opening {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was opened but reading it failed part way
    #[error("reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// At least one file in a tree scan failed
    #[error("scanning path: {source}")]
    ScanPath {
        #[source]
        source: Box<ScanError>,
    },

    /// A worker task panicked or was cancelled
    #[error("scan task failed: {message}")]
    Task { message: String },

    /// Invalid configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A shared lock was poisoned
    #[error("Synchronisation error: {message}")]
    Synchronisation { message: String },
}

impl ScanError {
    /// Wrap a traversal failure with the "building file list" context
    pub fn file_list(source: ScanError) -> Self {
        ScanError::FileList {
            source: Box::new(source),
        }
    }

    /// Wrap a per-file failure with the "scanning path" context
    pub fn scan_path(source: ScanError) -> Self {
        ScanError::ScanPath {
            source: Box::new(source),
        }
    }

    /// Innermost scanner error in a chain of wrapped scanner errors
    pub fn root_cause(&self) -> &ScanError {
        match self {
            ScanError::FileList { source } | ScanError::ScanPath { source } => source.root_cause(),
            other => other,
        }
    }
}

impl crate::core::error_handling::ContextualError for ScanError {
    fn is_user_actionable(&self) -> bool {
        match self.root_cause() {
            ScanError::Configuration { .. } => true, // User can fix config issues
            ScanError::Walk { .. } | ScanError::NotADirectory { .. } => true, // Wrong path argument
            _ => false, // System IO issues
        }
    }

    fn user_message(&self) -> Option<&str> {
        match self.root_cause() {
            ScanError::Configuration { message } => Some(message),
            ScanError::Walk { .. } | ScanError::NotADirectory { .. } => {
                Some("The scan path must be an existing, readable directory")
            }
            _ => None,
        }
    }
}

pub type ScanResult<T> = Result<T, ScanError>;
