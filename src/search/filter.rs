//! Name matching and directory exclusion.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Case-insensitive substring match against a file name.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    needle: String,
}

impl TermMatcher {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.to_lowercase(),
        }
    }

    /// True if the lowercased `name` contains the lowercased term.
    /// Non-UTF-8 names are compared through their lossy form.
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_string_lossy().to_lowercase().contains(&self.needle)
    }
}

/// Directories that must never be entered, compared by resolved path.
#[derive(Debug, Default, Clone)]
pub struct ExcludedDirs {
    dirs: HashSet<PathBuf>,
}

impl ExcludedDirs {
    pub fn insert(&mut self, dir: &Path) {
        self.dirs.insert(resolve(dir));
    }

    pub fn contains(&self, dir: &Path) -> bool {
        !self.dirs.is_empty() && self.dirs.contains(&resolve(dir))
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Canonical form of `p`, or `p` itself when it cannot be resolved.
pub(crate) fn resolve(p: &Path) -> PathBuf {
    dunce::canonicalize(p).unwrap_or_else(|_| p.to_path_buf())
}
