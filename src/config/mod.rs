//! Config module.
//! Provides runtime settings, the run mode and search-term validation.
//! There is no config file: defaults live in `Config::default()` and the CLI layer overrides them.

pub mod types;
mod validate;

pub use types::{Config, LogLevel, Mode};
pub use validate::validate_term;
