//! Windows implementations of platform helpers.
//!
//! Notes:
//! - Windows lacks POSIX mode semantics; we do not attempt ACL management here.
//! - Hidden marking uses the FILE_ATTRIBUTE_HIDDEN attribute and keeps the other attributes.

use super::HiddenMarking;
use std::fs::{File, OpenOptions};
use std::io;
use std::iter::once;
use std::os::windows::ffi::OsStrExt;
use std::path::Path;

use windows_sys::Win32::Storage::FileSystem::{
    FILE_ATTRIBUTE_HIDDEN, GetFileAttributesW, INVALID_FILE_ATTRIBUTES, SetFileAttributesW,
};

/// Open log file for appending (best-effort; no ACL changes).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Add FILE_ATTRIBUTE_HIDDEN to `path`.
pub fn mark_hidden(path: &Path) -> io::Result<HiddenMarking> {
    let wide: Vec<u16> = path.as_os_str().encode_wide().chain(once(0)).collect();

    let attrs = unsafe { GetFileAttributesW(wide.as_ptr()) };
    if attrs == INVALID_FILE_ATTRIBUTES {
        return Err(io::Error::last_os_error());
    }
    if attrs & FILE_ATTRIBUTE_HIDDEN != 0 {
        return Ok(HiddenMarking::Marked);
    }

    let ok = unsafe { SetFileAttributesW(wide.as_ptr(), attrs | FILE_ATTRIBUTE_HIDDEN) };
    if ok == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(HiddenMarking::Marked)
}
