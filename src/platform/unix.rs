//! Unix implementations of platform helpers.
//! macOS has a real "hidden" flag (UF_HIDDEN, the one Finder honors); other Unixes only
//! know the leading-dot convention, which would rename the directory, so they report Unsupported.

use super::HiddenMarking;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::Path;

/// Open log file for appending; set 0600 only when creating a new file.
/// If the file already exists, we preserve its existing permissions.
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let existed = path.exists();
    let f = OpenOptions::new()
        .create(true)
        .append(true)
        .mode(0o600) // applies on create
        .open(path)?;
    if !existed {
        let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
    }
    Ok(f)
}

/// Set the BSD `UF_HIDDEN` flag, keeping any flags already present.
#[cfg(target_os = "macos")]
pub fn mark_hidden(path: &Path) -> io::Result<HiddenMarking> {
    use std::ffi::CString;
    use std::os::macos::fs::MetadataExt;
    use std::os::unix::ffi::OsStrExt;

    let current = fs::metadata(path)?.st_flags();
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains null byte"))?;
    let flags = current | libc::UF_HIDDEN as u32;
    let rc = unsafe { libc::chflags(c_path.as_ptr(), flags as _) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(HiddenMarking::Marked)
}

#[cfg(not(target_os = "macos"))]
pub fn mark_hidden(path: &Path) -> io::Result<HiddenMarking> {
    // Still surface a missing path the same way the flag-setting platforms do.
    fs::metadata(path)?;
    Ok(HiddenMarking::Unsupported)
}
