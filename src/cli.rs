//! CLI definition and parsing.
//! Without flags the program is fully interactive; flags pre-answer the prompts
//! and tune diagnostics.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - --term is validated the same way as a typed term.

use clap::{Parser, ValueEnum, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel, Mode};
use crate::config::validate_term;

/// Mode selectable from the command line (cancel only makes sense interactively).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Copy matches into a folder named after the term and write the log
    Copy,
    /// Only write the log (plus a visible log.txt)
    LogOnly,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Copy => Mode::CopyAndLog,
            ModeArg::LogOnly => Mode::LogOnly,
        }
    }
}

/// Locate files by (part of) their name, log the matches and optionally copy them.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Locate files by name fragment (ignore case), log them and optionally copy them"
)]
pub struct Args {
    /// Search term; skips the interactive prompt.
    #[arg(long, short = 't', value_parser = parse_term)]
    pub term: Option<String>,

    /// What to do with the matches; skips the option menu.
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<ModeArg>,

    /// Directory to search instead of the program's own directory.
    #[arg(long, value_hint = ValueHint::DirPath, help = "Directory to search (default: the program's directory)")]
    pub base_dir: Option<PathBuf>,

    /// Exit right after the summary instead of waiting for ENTER.
    #[arg(long, help = "Do not wait for ENTER before exiting")]
    pub no_wait: bool,

    /// Enable debug diagnostics (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug diagnostics (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set diagnostics level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set diagnostics level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append diagnostics to this file.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Append diagnostics to this file")]
    pub trace_file: Option<PathBuf>,

    /// Emit diagnostics in structured JSON.
    #[arg(long, help = "Emit diagnostics in structured JSON")]
    pub json: bool,
}

fn parse_term(s: &str) -> Result<String, String> {
    validate_term(s).map(|_| s.to_string()).map_err(|e| e.to_string())
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.base_dir {
            cfg.base_dir = Some(dir.clone());
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.trace_file {
            cfg.trace_file = Some(path.clone());
        }
        if self.json {
            cfg.json = true;
        }
        if self.no_wait {
            cfg.wait_for_ack = false;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
