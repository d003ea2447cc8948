//! Core library for `file_locator`.
//!
//! Finds files whose name contains a search term (case-insensitive) under a base
//! directory, records every match in a timestamped log and optionally copies the
//! matches into a folder named after the term.
//!
//! The binary in `main.rs` only wires prompts, logging and the summary around
//! [`search::run_search`]; everything that touches the filesystem lives here.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod output;
pub mod paths;
pub mod platform;
pub mod prompt;
pub mod search;

pub use config::{Config, LogLevel, Mode};
pub use errors::LocatorError;
pub use fs_ops::{copy_without_overwrite, suffixed_name};
pub use paths::{
    create_destination, create_log_path, current_executable, path_has_symlink_ancestor,
    resolve_base_dir, LogPath, LOG_DIR_NAME, RUN_CODE,
};
pub use search::{run_search, SearchOutcome, SearchRequest};
