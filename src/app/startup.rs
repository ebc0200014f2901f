//! Application startup
//!
//! Resolve settings, bring up logging, run the scan and print the result.

use super::cli::args::Args;
use super::cli::config::{FileConfig, Settings};
use super::output::{write_tags, OutputFormat};
use crate::core::error_handling::log_error_with_context;
use crate::core::logging::init_logging;
use crate::scanner::api::{ScanResult, Scanner, Tag};
use std::io::IsTerminal;
use std::process::ExitCode;

/// Run the binary and return its exit code
pub async fn startup() -> ExitCode {
    let args = Args::parse_from_env();

    // Logging is not up yet, so configuration problems go straight to stderr
    let settings = match load_settings(&args).await {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(
        Some(&settings.log_level),
        Some(&settings.log_format),
        settings.log_file.as_deref(),
        settings.color,
    ) {
        eprintln!("Error: failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }
    colored::control::set_override(settings.color);

    log::debug!("Settings: {:?}", settings);

    let tags = match run_scan(&settings).await {
        Ok(tags) => tags,
        Err(e) => {
            log_error_with_context(&e, &format!("Scanning {}", settings.path.display()));
            return ExitCode::FAILURE;
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_tags(&mut out, &tags, settings.output) {
        log::error!("FATAL: writing results: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Merge command line arguments with the configuration file, if any
pub async fn load_settings(args: &Args) -> ScanResult<Settings> {
    let file_config = match FileConfig::locate(args.config_file.as_deref())? {
        Some(path) => FileConfig::load(&path).await?,
        None => FileConfig::default(),
    };
    Settings::resolve(args, &file_config, std::io::stderr().is_terminal())
}

/// Scan according to resolved settings
pub async fn run_scan(settings: &Settings) -> ScanResult<Vec<Tag>> {
    // The progress line would corrupt machine-readable output on stdout
    let scanner =
        Scanner::new(settings.options).with_announce(settings.output == OutputFormat::Text);

    if settings.single_file {
        scanner.scan_file(&settings.path)
    } else {
        scanner.scan_path(&settings.path).await
    }
}
