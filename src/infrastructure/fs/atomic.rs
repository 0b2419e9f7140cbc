//! Atomic publish of new files
//!
//! Writes go to a temp file in the destination directory and are renamed
//! into place without clobbering, so readers only ever see complete files
//! and an existing file is never replaced.

use std::io::{self, Write};
use std::path::Path;

use super::layout::TEMP_PREFIX;

/// Publish `bytes` at `dest`, failing with `AlreadyExists` if it is taken
///
/// `dir` must be the parent of `dest`. With `fsync`, the payload (and on
/// Unix the directory entry) is flushed before returning.
pub fn publish_new(dir: &Path, dest: &Path, bytes: &[u8], fsync: bool) -> io::Result<()> {
    let mut tmp = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    if fsync {
        tmp.as_file().sync_all()?;
    }

    // Dropping the PersistError removes the temp file.
    tmp.persist_noclobber(dest).map_err(|e| e.error)?;

    if fsync {
        sync_dir(dir)?;
    }
    Ok(())
}

#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
