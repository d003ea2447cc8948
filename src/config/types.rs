//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents diagnostics verbosity with simple parsing helpers.
//! - Mode is what the user picked at the option prompt.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels for diagnostics (not the search log).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Warnings and errors (default; keeps the interactive console clean)
    #[default]
    Normal,
    /// Progress information
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" | "warn" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// What to do with the matches of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Copy every match into the destination folder and write the hidden log.
    CopyAndLog,
    /// Only write the hidden log plus a visible `log.txt` duplicate.
    LogOnly,
    /// User backed out at the prompt; nothing is created.
    Cancelled,
}

impl Mode {
    #[inline]
    pub fn copies(self) -> bool {
        matches!(self, Mode::CopyAndLog)
    }

    #[inline]
    pub fn writes_visible_log(self) -> bool {
        matches!(self, Mode::LogOnly)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Mode::CopyAndLog => "copy+log",
            Mode::LogOnly => "log-only",
            Mode::Cancelled => "cancelled",
        };
        f.write_str(s)
    }
}

/// Runtime configuration for a locator run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan; `None` means the directory of the running executable
    pub base_dir: Option<PathBuf>,
    /// Diagnostics verbosity
    pub log_level: LogLevel,
    /// Optional file that receives a copy of the diagnostics
    pub trace_file: Option<PathBuf>,
    /// Emit diagnostics as JSON
    pub json: bool,
    /// Wait for ENTER before exiting (keeps double-clicked consoles open)
    pub wait_for_ack: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: None,
            log_level: LogLevel::Normal,
            trace_file: None,
            json: false,
            wait_for_ack: true,
        }
    }
}
