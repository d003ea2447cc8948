//! Search-and-log engine.
//!
//! One top-down walk of the base directory:
//! - the log directory and the destination folder are pruned before descent,
//! - every non-directory whose name contains the term (ignoring case) is a match,
//!   except the running program itself,
//! - each match gets a numbered block in the hidden log and, in copy mode, a copy
//!   in the destination folder.
//!
//! Per-file and per-directory problems are written into the log and the walk goes on;
//! only log creation/write failures abort the run.

mod filter;
mod report;

pub use filter::{ExcludedDirs, TermMatcher};
pub use report::{DISPLAY_TIME_FORMAT, LogEntry, Report, UNKNOWN_TIME};

use anyhow::{bail, Result};
use chrono::{DateTime, Local};
use std::cmp::Ordering;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Mode;
use crate::errors::LocatorError;
use crate::fs_ops::copy_without_overwrite;
use crate::paths::create_log_path;

/// File name of the visible duplicate written in log-only mode.
pub const VISIBLE_LOG_NAME: &str = "log.txt";

/// Everything a run needs; paths should already be canonical.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub term: String,
    pub base_dir: PathBuf,
    pub mode: Mode,
    /// Folder receiving copies (copy mode only).
    pub destination: Option<PathBuf>,
    /// Resolved path of the running program; never matched.
    pub self_path: Option<PathBuf>,
    pub started_at: DateTime<Local>,
}

impl SearchRequest {
    pub fn new(term: impl Into<String>, base_dir: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            term: term.into(),
            base_dir: base_dir.into(),
            mode,
            destination: None,
            self_path: None,
            started_at: Local::now(),
        }
    }

    pub fn with_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_self_path(mut self, self_path: Option<PathBuf>) -> Self {
        self.self_path = self_path;
        self
    }

    pub fn with_started_at(mut self, started_at: DateTime<Local>) -> Self {
        self.started_at = started_at;
        self
    }
}

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub hidden_log: PathBuf,
    /// False when the platform could not hide the `log` directory.
    pub log_dir_hidden: bool,
    pub visible_log: Option<PathBuf>,
    pub matches: usize,
    pub copied: usize,
    pub warnings: usize,
}

#[derive(Debug, Default)]
struct Tally {
    matches: usize,
    copied: usize,
    warnings: usize,
}

/// Run the search described by `req` and write its log.
pub fn run_search(req: &SearchRequest) -> Result<SearchOutcome> {
    if req.mode == Mode::Cancelled {
        bail!("search requested for a cancelled run");
    }

    // Paths to protect are known before the walk starts.
    let log_path = create_log_path(&req.base_dir, &req.started_at)?;
    let mut excluded = ExcludedDirs::default();
    if let Some(log_dir) = log_path.dir() {
        excluded.insert(log_dir);
    }
    if let Some(dest) = &req.destination {
        excluded.insert(dest);
    }
    debug!(excluded = excluded.len(), log = %log_path.file.display(), "starting walk");

    let mut report = Report::create(&log_path.file)?;
    report.header(&req.term, &req.started_at, &req.base_dir)?;
    let tally = walk(req, &excluded, &mut report)?;
    report.footer(tally.matches)?;
    let hidden_log = report.finish()?;

    let visible_log = if req.mode.writes_visible_log() {
        let visible = req.base_dir.join(VISIBLE_LOG_NAME);
        fs::copy(&hidden_log, &visible).map_err(|source| LocatorError::VisibleLog {
            path: visible.clone(),
            source,
        })?;
        Some(visible)
    } else {
        None
    };

    info!(
        term = %req.term,
        mode = %req.mode,
        matches = tally.matches,
        copied = tally.copied,
        warnings = tally.warnings,
        "search finished"
    );

    Ok(SearchOutcome {
        hidden_log,
        log_dir_hidden: log_path.hidden,
        visible_log,
        matches: tally.matches,
        copied: tally.copied,
        warnings: tally.warnings,
    })
}

fn walk(req: &SearchRequest, excluded: &ExcludedDirs, report: &mut Report) -> Result<Tally> {
    let matcher = TermMatcher::new(&req.term);
    let copy_target = if req.mode.copies() { req.destination.as_deref() } else { None };
    let mut tally = Tally::default();

    let walker = WalkDir::new(&req.base_dir)
        .sort_by(files_then_dirs)
        .into_iter()
        .filter_entry(|e| !(e.depth() > 0 && e.file_type().is_dir() && excluded.contains(e.path())));

    for item in walker {
        let entry = match item {
            Ok(e) => e,
            Err(err) => {
                tally.warnings += 1;
                warn!(path = ?err.path(), error = %err, "skipping unreadable subtree");
                report.skipped_dir(err.path(), &err.to_string())?;
                continue;
            }
        };

        if !is_file_like(&entry) || !matcher.matches(entry.file_name()) {
            continue;
        }

        let mut warnings = Vec::new();
        let full_path = match dunce::canonicalize(entry.path()) {
            Ok(p) => p,
            Err(e) => {
                warnings.push(format!("não foi possível resolver o caminho: {e}"));
                entry.path().to_path_buf()
            }
        };

        if req.self_path.as_deref() == Some(full_path.as_path()) {
            debug!(path = %full_path.display(), "skipping the running program");
            continue;
        }

        tally.matches += 1;

        let modified = match fs::metadata(&full_path).and_then(|m| m.modified()) {
            Ok(t) => Some(DateTime::<Local>::from(t)),
            Err(e) => {
                warn!(path = %full_path.display(), error = %e, "cannot read modification time");
                warnings.push(format!("não foi possível ler a data de modificação: {e}"));
                None
            }
        };

        if let Some(dest_dir) = copy_target {
            match copy_without_overwrite(entry.path(), dest_dir) {
                Ok(written) => {
                    tally.copied += 1;
                    if written.file_name() != Some(entry.file_name()) {
                        info!(src = %entry.path().display(), dest = %written.display(), "copied under a new name");
                    }
                }
                Err(e) => {
                    warn!(src = %entry.path().display(), error = %e, "copy failed");
                    warnings.push(format!("falha ao copiar: {e}"));
                }
            }
        }

        tally.warnings += warnings.len();
        let name = entry.file_name().to_string_lossy();
        let folder = entry.path().parent().unwrap_or(req.base_dir.as_path());
        report.entry(
            &LogEntry {
                index: tally.matches,
                name: &name,
                folder,
                full_path: &full_path,
                modified,
            },
            &warnings,
        )?;
    }

    Ok(tally)
}

/// Regular files and symlinks that do not point at a directory (dangling ones included).
/// Symlinked directories are neither entered nor matched.
fn is_file_like(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    if ft.is_dir() {
        return false;
    }
    if ft.is_symlink() {
        return !fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false);
    }
    true
}

/// Within a directory: files before subdirectories, each group by name.
fn files_then_dirs(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
