//! Collision-safe copy.
//! - Destination is opened with create_new, so an existing file is never clobbered,
//!   even if another process creates the same name between our check and the write.
//! - Buffered streaming copy, flushed before returning.
//! - A partially written destination is removed on failure.
//! - Only regular files (or links to them) are copied; pipes and devices are refused.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

use super::duplicate::suffixed_name;

const BUF_SIZE: usize = 1024 * 1024; // 1 MiB buffers
const MAX_TRIES: u32 = 100_000;

/// Copy `src` into `dest_dir` under its own name, or the first free `_n` variant.
/// Returns the path actually written.
pub fn copy_without_overwrite(src: &Path, dest_dir: &Path) -> io::Result<PathBuf> {
    let name = src.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("source has no file name: {}", src.display()),
        )
    })?;

    // Opening a FIFO would block until a writer shows up; only regular files are copied.
    if !fs::metadata(src)?.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("not a regular file: {}", src.display()),
        ));
    }

    // Open the source first so a vanished file does not leave an empty copy behind.
    let source = File::open(src)?;

    for n in 0..=MAX_TRIES {
        let candidate = dest_dir.join(suffixed_name(name, n));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(dest) => {
                if let Err(e) = stream_into(&source, dest) {
                    let _ = fs::remove_file(&candidate);
                    return Err(e);
                }
                // Best-effort, like fs::copy: carry the permission bits over.
                if let Ok(meta) = source.metadata() {
                    let _ = fs::set_permissions(&candidate, meta.permissions());
                }
                debug!(src = %src.display(), dest = %candidate.display(), "copied");
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                trace!(candidate = %candidate.display(), "name taken, trying next suffix");
            }
            Err(e) => return Err(e),
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!(
            "no free name for {} in {} after {MAX_TRIES} attempts",
            name.to_string_lossy(),
            dest_dir.display()
        ),
    ))
}

fn stream_into(source: &File, dest: File) -> io::Result<u64> {
    let mut reader = BufReader::with_capacity(BUF_SIZE, source);
    let mut writer = BufWriter::with_capacity(BUF_SIZE, dest);
    let bytes = io::copy(&mut reader, &mut writer)?;
    writer.flush()?;
    Ok(bytes)
}
