//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{mark_hidden, open_log_file_secure_append};

#[cfg(not(unix))]
pub use windows::{mark_hidden, open_log_file_secure_append};

/// Result of asking the platform to hide a path from normal listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HiddenMarking {
    /// The hidden attribute/flag is now set.
    Marked,
    /// The platform has no hidden attribute; the path is left as is.
    Unsupported,
}
