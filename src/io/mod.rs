//! File access helpers shared by the measurement stages
//!
//! All stages use plain buffered `std::fs` handles; the handle and its block
//! buffer are function-scoped in the stage, so both are released on every
//! exit path.

use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom};
use std::path::Path;

/// Open the target file for the write stage, creating it or truncating any
/// previous contents.
pub fn open_write(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Open the target file for the read and seek stages.
pub fn open_read(path: &Path) -> io::Result<File> {
    File::open(path)
}

/// Determine the file size by seeking to the end, then reposition the handle
/// at the start for the measurement loop.
pub fn file_len(file: &mut File) -> io::Result<u64> {
    let len = file.seek(SeekFrom::End(0))?;
    file.seek(SeekFrom::Start(0))?;
    Ok(len)
}
