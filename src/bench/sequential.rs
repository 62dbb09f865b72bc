//! Sequential write and read measurement stages
//!
//! The write stage creates (or truncates) the target file and streams a
//! nominal 10 MiB payload through it in fixed-size blocks; the read stage
//! reads the file back in the same block size. Each stage times its whole
//! loop with a monotonic clock and reports average per-byte access time and
//! throughput.
//!
//! A stage that cannot open its file prints a message to stdout and reports
//! zero stats; it never aborts the run.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Instant;

use crate::io;
use crate::models::OpStats;
use crate::WRITE_PAYLOAD_BYTES;

/// Measure sequential write throughput against `path`.
///
/// The file is created or truncated. Zero-filled blocks of `block_size`
/// bytes are written until the nominal payload is reached; when `block_size`
/// does not divide the payload, the block count truncates and the final
/// partial block is not written. The reported stats divide by the nominal
/// payload regardless.
pub fn measure_write(path: &Path, block_size: usize) -> OpStats {
    let file = match io::open_write(path) {
        Ok(file) => file,
        Err(_) => {
            println!("error writing: could not open file");
            return OpStats::zero();
        }
    };

    match write_payload(file, block_size) {
        Ok(stats) => stats,
        Err(err) => {
            println!("error writing: {}", err);
            OpStats::zero()
        }
    }
}

fn write_payload(mut file: File, block_size: usize) -> std::io::Result<OpStats> {
    let buffer = vec![0u8; block_size];
    // Truncating division: a block size that does not divide the payload
    // leaves the trailing remainder unwritten.
    let blocks = WRITE_PAYLOAD_BYTES / block_size as u64;

    let start = Instant::now();
    for _ in 0..blocks {
        file.write_all(&buffer)?;
    }
    let duration = start.elapsed();

    Ok(OpStats::for_write(duration))
}

/// Measure sequential read throughput against `path`.
///
/// The file size is taken by seeking to the end and back, then the whole file
/// is read in `block_size` chunks, accumulating the bytes each call actually
/// returns; the last chunk may be partial. For an empty file the stats come
/// out non-finite (division by a zero size) rather than panicking.
pub fn measure_read(path: &Path, block_size: usize) -> OpStats {
    let file = match io::open_read(path) {
        Ok(file) => file,
        Err(_) => {
            println!("error reading: could not open file");
            return OpStats::zero();
        }
    };

    match read_back(file, block_size) {
        Ok(stats) => stats,
        Err(err) => {
            println!("error reading: {}", err);
            OpStats::zero()
        }
    }
}

fn read_back(mut file: File, block_size: usize) -> std::io::Result<OpStats> {
    let file_size = io::file_len(&mut file)?;
    let mut buffer = vec![0u8; block_size];

    let start = Instant::now();
    let mut bytes_read = 0u64;
    while bytes_read < file_size {
        let n = file.read(&mut buffer)?;
        if n == 0 {
            // Unexpected EOF; the size was taken moments ago, but a
            // truncated file must not spin forever.
            break;
        }
        bytes_read += n as u64;
    }
    let duration = start.elapsed();

    Ok(OpStats::for_read(file_size, duration))
}
