//! Filesystem operations used by the search engine.

mod copy;
mod duplicate;

pub use copy::copy_without_overwrite;
pub use duplicate::suffixed_name;
