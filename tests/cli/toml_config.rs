//! TOML configuration tests

use crate::common::create_tree;
use clap::Parser;
use std::path::Path;
use tagfinder::app::cli::args::Args;
use tagfinder::app::cli::config::{FileConfig, Settings, DEFAULT_LINES};
use tagfinder::app::output::OutputFormat;
use tagfinder::app::startup::load_settings;
use tagfinder::scanner::api::ScanError;

#[tokio::test]
async fn test_config_file_supplies_unset_values() {
    let dir = create_tree(&[(
        "tagfinder.toml",
        "threads = 4\nlines = 20\noutput = \"json\"\nlog-level = \"info\"\n",
    )]);
    let config = dir.path().join("tagfinder.toml");
    let args = Args::try_parse_from([
        "tagfinder",
        "--config-file",
        config.to_str().unwrap(),
        "--lines",
        "7",
    ])
    .unwrap();

    let settings = load_settings(&args).await.unwrap();

    assert_eq!(settings.options.threads, 4);
    assert_eq!(settings.options.lines, 7);
    assert_eq!(settings.output, OutputFormat::Json);
    assert_eq!(settings.log_level, "info");
}

#[tokio::test]
async fn test_missing_explicit_config_file_is_error() {
    let args = Args::try_parse_from([
        "tagfinder",
        "--config-file",
        "/no/such/tagfinder.toml",
    ])
    .unwrap();

    let err = load_settings(&args).await.unwrap_err();

    assert!(matches!(err, ScanError::Configuration { .. }));
}

#[tokio::test]
async fn test_malformed_config_file_is_error() {
    let dir = create_tree(&[("bad.toml", "threads = [1, 2\n")]);
    let err = FileConfig::load(&dir.path().join("bad.toml"))
        .await
        .unwrap_err();

    assert!(
        err.to_string().contains("Error parsing configuration file"),
        "got: {}",
        err
    );
}

#[test]
fn test_settings_without_config_use_binary_defaults() {
    let args = Args::try_parse_from(["tagfinder", "src"]).unwrap();
    let settings = Settings::resolve(&args, &FileConfig::default(), false).unwrap();

    assert_eq!(settings.path, Path::new("src"));
    assert_eq!(settings.options.lines, DEFAULT_LINES);
    assert_eq!(settings.options.effective_threads(), 5);
}
