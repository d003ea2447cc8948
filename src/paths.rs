//! Where things live: the base directory, the hidden log and the destination folder.
//! All returned directories are canonical (symlinks resolved, no `\\?\` prefix on Windows)
//! so they can be compared against paths found during the walk.

use anyhow::Result;
use chrono::{DateTime, Local};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Mode;
use crate::errors::LocatorError;
use crate::platform::{self, HiddenMarking};

/// Identifier stamped on every hidden log file name.
pub const RUN_CODE: &str = "lca25v14";

/// Name of the hidden log directory under the base directory.
pub const LOG_DIR_NAME: &str = "log";

/// Resolved path of the running program.
pub fn current_executable() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(LocatorError::ExecutableUnresolved)?;
    let real = dunce::canonicalize(&exe).map_err(LocatorError::ExecutableUnresolved)?;
    Ok(real)
}

/// Directory the search starts from.
///
/// An explicit `override_dir` wins; otherwise it is the directory holding the executable.
pub fn resolve_base_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        let real = dunce::canonicalize(dir).map_err(|source| LocatorError::BaseDirInvalid {
            path: dir.to_path_buf(),
            source,
        })?;
        if !real.is_dir() {
            return Err(LocatorError::BaseDirInvalid {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            }
            .into());
        }
        return Ok(real);
    }

    let exe = current_executable()?;
    let parent = exe.parent().ok_or_else(|| {
        LocatorError::ExecutableUnresolved(io::Error::new(
            io::ErrorKind::NotFound,
            format!("executable has no parent directory: {}", exe.display()),
        ))
    })?;
    Ok(parent.to_path_buf())
}

/// Hidden log file location for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPath {
    /// `<base>/log/<RUN_CODE>_LOG_<YYYYMMDD_HHMMSS>.txt`
    pub file: PathBuf,
    /// Whether the platform actually hid the `log` directory.
    pub hidden: bool,
}

impl LogPath {
    pub fn dir(&self) -> Option<&Path> {
        self.file.parent()
    }
}

/// Ensure `<base>/log` exists and try to hide it, then return the log file path for this run.
pub fn create_log_path(base: &Path, started_at: &DateTime<Local>) -> Result<LogPath> {
    let log_dir = base.join(LOG_DIR_NAME);
    fs::create_dir_all(&log_dir).map_err(|source| LocatorError::LogDirCreate {
        path: log_dir.clone(),
        source,
    })?;

    let hidden = match platform::mark_hidden(&log_dir) {
        Ok(HiddenMarking::Marked) => {
            debug!(path = %log_dir.display(), "log directory marked hidden");
            true
        }
        Ok(HiddenMarking::Unsupported) => {
            debug!(path = %log_dir.display(), "platform has no hidden attribute; leaving log directory as is");
            false
        }
        Err(e) => {
            warn!(path = %log_dir.display(), error = %e, "could not mark log directory hidden");
            false
        }
    };

    let file_name = format!("{}_LOG_{}.txt", RUN_CODE, started_at.format("%Y%m%d_%H%M%S"));
    Ok(LogPath {
        file: log_dir.join(file_name),
        hidden,
    })
}

/// Create the destination folder `<base>/<term>` when `mode` copies; otherwise do nothing.
///
/// The term is used exactly as typed (no trimming, case kept).
pub fn create_destination(base: &Path, term: &str, mode: Mode) -> Result<Option<PathBuf>> {
    if !mode.copies() {
        return Ok(None);
    }
    let dest = base.join(term);
    fs::create_dir_all(&dest).map_err(|source| LocatorError::DestinationCreate {
        path: dest.clone(),
        source,
    })?;
    let real = dunce::canonicalize(&dest).unwrap_or(dest);
    debug!(path = %real.display(), "destination folder ready");
    Ok(Some(real))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
