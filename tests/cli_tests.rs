use clap::Parser;
use file_locator::cli::{Args, ModeArg};
use file_locator::{Config, LogLevel, Mode};
use std::path::PathBuf;

#[test]
fn no_flags_means_fully_interactive() {
    let args = Args::parse_from(["file_locator"]);
    assert!(args.term.is_none());
    assert!(args.mode.is_none());
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert!(cfg.wait_for_ack);
    assert!(cfg.base_dir.is_none());
    assert_eq!(cfg.log_level, LogLevel::Normal);
}

#[test]
fn term_and_mode_flags() {
    let args = Args::parse_from(["file_locator", "--term", " Report", "--mode", "log-only"]);
    assert_eq!(args.term.as_deref(), Some(" Report"));
    assert_eq!(args.mode, Some(ModeArg::LogOnly));
    assert_eq!(Mode::from(ModeArg::LogOnly), Mode::LogOnly);
    assert_eq!(Mode::from(ModeArg::Copy), Mode::CopyAndLog);
}

#[test]
fn invalid_term_flag_is_rejected() {
    assert!(Args::try_parse_from(["file_locator", "--term", "a/b"]).is_err());
    assert!(Args::try_parse_from(["file_locator", "--term", ""]).is_err());
    assert!(Args::try_parse_from(["file_locator", "--mode", "cancel"]).is_err());
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["file_locator", "--debug", "--log-level", "quiet"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Debug)); // --debug wins

    let args = Args::parse_from(["file_locator", "--log-level", "info"]);
    assert_eq!(args.effective_log_level(), Some(LogLevel::Info));

    let args = Args::parse_from(["file_locator", "--log-level", "bogus"]);
    assert_eq!(args.effective_log_level(), None);
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "file_locator",
        "--base-dir",
        "/data",
        "--trace-file",
        "/tmp/fl.log",
        "--json",
        "--no-wait",
        "-d",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.base_dir, Some(PathBuf::from("/data")));
    assert_eq!(cfg.trace_file, Some(PathBuf::from("/tmp/fl.log")));
    assert!(cfg.json);
    assert!(!cfg.wait_for_ack);
    assert_eq!(cfg.log_level, LogLevel::Debug);
}
