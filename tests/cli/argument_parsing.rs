//! CLI argument parsing tests

use clap::Parser;
use std::path::PathBuf;
use tagfinder::app::cli::args::Args;

#[test]
fn test_parse_defaults() {
    let args = Args::try_parse_from(["tagfinder"]).unwrap();

    assert_eq!(args.path, PathBuf::from("."));
    assert!(!args.single_file);
    assert_eq!(args.threads, None);
    assert_eq!(args.lines, None);
    assert_eq!(args.output, None);
    assert_eq!(args.verbose, 0);
}

#[test]
fn test_parse_scan_options() {
    let args = Args::try_parse_from([
        "tagfinder", "-t", "12", "-n", "40", "-o", "json", "some/dir",
    ])
    .unwrap();

    assert_eq!(args.path, PathBuf::from("some/dir"));
    assert_eq!(args.threads, Some(12));
    assert_eq!(args.lines, Some(40));
    assert_eq!(args.output.as_deref(), Some("json"));
}

#[test]
fn test_parse_long_forms_and_alias() {
    let args = Args::try_parse_from([
        "tagfinder",
        "--threads=3",
        "--max-lines=0",
        "--file",
        "LICENSE",
    ])
    .unwrap();

    assert_eq!(args.threads, Some(3));
    assert_eq!(args.lines, Some(0));
    assert!(args.single_file);
    assert_eq!(args.path, PathBuf::from("LICENSE"));
}

#[test]
fn test_parse_logging_flags() {
    let args = Args::try_parse_from([
        "tagfinder",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--log-file",
        "scan.log",
        "-vvq",
    ])
    .unwrap();

    assert_eq!(args.log_level.as_deref(), Some("debug"));
    assert_eq!(args.log_format.as_deref(), Some("json"));
    assert_eq!(args.log_file.as_deref(), Some("scan.log"));
    assert_eq!(args.verbose, 2);
    assert_eq!(args.quiet, 1);
}

#[test]
fn test_parse_rejects_invalid_values() {
    assert!(Args::try_parse_from(["tagfinder", "--threads", "lots"]).is_err());
    assert!(Args::try_parse_from(["tagfinder", "--lines", "ten"]).is_err());
    assert!(Args::try_parse_from(["tagfinder", "--log-level", "loud"]).is_err());
    assert!(Args::try_parse_from(["tagfinder", "--color", "--no-color"]).is_err());
}
