//! Core CLI arguments structure
//!
//! Values left unset here may still come from the TOML configuration file;
//! see [`config`](super::config) for how the two are merged.

use crate::core::logging::{LOG_FORMATS, LOG_LEVELS};
use crate::core::validation::{validate_line_cap, validate_thread_count};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tagfinder")]
#[command(about = "Find SPDX-<Key>: <Value> tags embedded in source trees")]
#[command(version, long_version = crate::long_version())]
pub struct Args {
    /// Directory to scan (or a single file with --file)
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Treat PATH as a single file instead of a directory tree
    #[arg(long = "file")]
    pub single_file: bool,

    /// Number of files scanned in parallel (0 = default of 5)
    #[arg(short = 't', long = "threads", value_name = "COUNT", value_parser = validate_thread_count)]
    pub threads: Option<i64>,

    /// Lines inspected per file before moving on
    #[arg(
        short = 'n',
        long = "lines",
        visible_alias = "max-lines",
        value_name = "COUNT",
        value_parser = validate_line_cap
    )]
    pub lines: Option<i64>,

    /// Output format
    #[arg(short = 'o', long = "output", value_name = "FORMAT", value_parser = ["text", "json"])]
    pub output: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = LOG_LEVELS.to_vec())]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = LOG_FORMATS.to_vec())]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<String>,

    /// More log output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Force coloured log output
    #[arg(long = "color", action = ArgAction::SetTrue, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable coloured log output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,
}

impl Args {
    /// Parse from the process arguments, exiting on `--help`/errors
    pub fn parse_from_env() -> Self {
        Self::parse()
    }
}
