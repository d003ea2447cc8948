//! Duplicate-name resolution.
//!
//! Policy: a file is never overwritten. When `name` is taken the copy becomes
//! `<stem>_1<.ext>`, `<stem>_2<.ext>`, ... where the extension is everything after
//! the last dot (dotfiles such as `.env` have no extension).

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Build the `n`-th candidate for `name`; `n == 0` is the name itself.
///
/// Examples:
/// - ("report.TXT", 1) -> "report_1.TXT"
/// - (".env", 2) -> ".env_2"
/// - ("archive.tar.gz", 1) -> "archive.tar_1.gz"
pub fn suffixed_name(name: &OsStr, n: u32) -> OsString {
    if n == 0 {
        return name.to_os_string();
    }

    // Extract stem and extension, preserving non-UTF8 via OsString.
    let base = Path::new(name);
    let stem: OsString = base
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| name.to_os_string());

    let mut out = stem;
    out.push(format!("_{n}"));
    if let Some(ext) = base.extension() {
        out.push(".");
        out.push(ext);
    }
    out
}
