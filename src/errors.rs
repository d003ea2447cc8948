//! Typed error definitions for file_locator.
//! Only fatal conditions live here; per-file problems are written to the search log instead.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("Could not determine where the running program lives: {0}")]
    ExecutableUnresolved(#[source] io::Error),

    #[error("Base directory is not usable: {path}: {source}")]
    BaseDirInvalid {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create log directory {path}: {source}")]
    LogDirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create log file {path}: {source}")]
    LogFileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log file {path}: {source}")]
    LogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create destination folder {path}: {source}")]
    DestinationCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write visible log {path}: {source}")]
    VisibleLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input closed before a {0} was provided")]
    InputClosed(&'static str),

    #[error("Invalid search term {term:?}: {reason}")]
    InvalidTerm { term: String, reason: &'static str },
}

impl LocatorError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            LocatorError::ExecutableUnresolved(_) => 10,
            LocatorError::BaseDirInvalid { .. } => 11,
            LocatorError::LogDirCreate { .. } => 20,
            LocatorError::LogFileCreate { .. } => 21,
            LocatorError::LogWrite { .. } => 22,
            LocatorError::VisibleLog { .. } => 23,
            LocatorError::DestinationCreate { .. } => 30,
            LocatorError::InputClosed(_) => 40,
            LocatorError::InvalidTerm { .. } => 41,
        }
    }

    /// Short machine-friendly kind used alongside `code()`.
    pub fn kind(&self) -> &'static str {
        match self {
            LocatorError::ExecutableUnresolved(_) => "executable_unresolved",
            LocatorError::BaseDirInvalid { .. } => "base_dir_invalid",
            LocatorError::LogDirCreate { .. } => "log_dir_create",
            LocatorError::LogFileCreate { .. } => "log_file_create",
            LocatorError::LogWrite { .. } => "log_write",
            LocatorError::VisibleLog { .. } => "visible_log",
            LocatorError::DestinationCreate { .. } => "destination_create",
            LocatorError::InputClosed(_) => "input_closed",
            LocatorError::InvalidTerm { .. } => "invalid_term",
        }
    }
}
