//! TOML configuration file parsing and merging
//!
//! An explicit `--config-file` must exist. Without one the default
//! `<config dir>/Tagfinder/tagfinder.toml` is used when present. Anything
//! given on the command line wins over the file.

use super::args::Args;
use crate::app::output::OutputFormat;
use crate::core::logging::{LOG_FORMATS, LOG_LEVELS};
use crate::core::validation::{validate_choice, validate_line_cap, validate_thread_count};
use crate::scanner::error::{ScanError, ScanResult};
use crate::scanner::options::ScanOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Line budget used by the binary when neither CLI nor file sets one
pub const DEFAULT_LINES: i64 = 100;

/// Keys recognised in the configuration file
///
/// Unknown keys are ignored; a known key with the wrong type is an error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FileConfig {
    pub threads: Option<i64>,
    pub lines: Option<i64>,
    pub output: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<String>,
    pub color: Option<bool>,
}

/// Fully resolved settings for one run of the binary
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub path: PathBuf,
    pub single_file: bool,
    pub options: ScanOptions,
    pub output: OutputFormat,
    pub log_level: String,
    pub log_format: String,
    pub log_file: Option<String>,
    pub color: bool,
}

impl FileConfig {
    /// Parse configuration file contents
    pub fn from_toml_str(contents: &str, origin: &Path) -> ScanResult<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| ScanError::Configuration {
            message: format!("Error parsing configuration file {}: {}", origin.display(), e),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    /// Read and parse a configuration file
    pub async fn load(path: &Path) -> ScanResult<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ScanError::Configuration {
                message: format!("Error reading configuration file {}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&contents, path)
    }

    /// Locate the configuration file to use, if any
    pub fn locate(explicit: Option<&Path>) -> ScanResult<Option<PathBuf>> {
        match explicit {
            Some(path) if path.exists() => Ok(Some(path.to_path_buf())),
            Some(path) => Err(ScanError::Configuration {
                message: format!(
                    "The specified configuration file does not exist: {}",
                    path.display()
                ),
            }),
            None => Ok(default_config_path().filter(|p| p.exists())),
        }
    }

    fn validate(&self, origin: &Path) -> ScanResult<()> {
        let invalid = |message: String| ScanError::Configuration {
            message: format!("Invalid value in {}: {}", origin.display(), message),
        };

        if let Some(threads) = self.threads {
            validate_thread_count(&threads.to_string()).map_err(invalid)?;
        }
        if let Some(lines) = self.lines {
            validate_line_cap(&lines.to_string()).map_err(invalid)?;
        }
        if let Some(output) = &self.output {
            validate_choice(output, &OutputFormat::names(), "output format").map_err(invalid)?;
        }
        if let Some(level) = &self.log_level {
            validate_choice(level, LOG_LEVELS, "log level").map_err(invalid)?;
        }
        if let Some(format) = &self.log_format {
            validate_choice(format, LOG_FORMATS, "log format").map_err(invalid)?;
        }
        Ok(())
    }
}

/// `<config dir>/Tagfinder/tagfinder.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Tagfinder").join("tagfinder.toml"))
}

impl Settings {
    /// Merge command line arguments over file configuration
    ///
    /// `terminal` says whether stderr is a terminal, used for colour when
    /// neither flags nor file decide it.
    pub fn resolve(args: &Args, file: &FileConfig, terminal: bool) -> ScanResult<Self> {
        let output_name = args
            .output
            .as_deref()
            .or(file.output.as_deref())
            .unwrap_or("text");
        let output = OutputFormat::from_name(output_name).ok_or_else(|| {
            ScanError::Configuration {
                message: format!("Unknown output format '{}'", output_name),
            }
        })?;

        let options = ScanOptions::new()
            .with_threads(args.threads.or(file.threads).unwrap_or(0))
            .with_num_lines(args.lines.or(file.lines).unwrap_or(DEFAULT_LINES));

        let base_level = args
            .log_level
            .clone()
            .or_else(|| file.log_level.clone())
            .unwrap_or_else(|| "warn".to_string());
        let log_level =
            crate::core::logging::level_for_verbosity(&base_level, args.verbose, args.quiet)
                .to_string();

        let log_format = args
            .log_format
            .clone()
            .or_else(|| file.log_format.clone())
            .unwrap_or_else(|| "text".to_string());

        // Magic values "none" and "-" disable file logging
        let log_file = args
            .log_file
            .clone()
            .or_else(|| file.log_file.clone())
            .filter(|f| !(f.eq_ignore_ascii_case("none") || f == "-"));

        let color = if args.color {
            true
        } else if args.no_color {
            false
        } else {
            file.color
                .unwrap_or(terminal && std::env::var_os("NO_COLOR").is_none())
        };

        Ok(Self {
            path: args.path.clone(),
            single_file: args.single_file,
            options,
            output,
            log_level: log_level.to_lowercase(),
            log_format: log_format.to_lowercase(),
            log_file,
            color,
        })
    }
}
