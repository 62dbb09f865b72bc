//! Random-seek measurement stage
//!
//! Repositions the read offset to uniformly random positions within the file
//! and times the seek calls alone; no data is transferred. The random source
//! is owned by the caller and passed in, so real runs seed from entropy while
//! tests can seed deterministically.

use std::fs::File;
use std::io::{Seek, SeekFrom};
use std::path::Path;
use std::time::Instant;

use rand::Rng;

use crate::io;
use crate::models::OpStats;

/// Measure random-seek latency against `path` with `seek_count` seeks.
///
/// Each seek targets a uniformly random byte offset in `[0, file_size)`.
/// A `seek_count` of zero and an empty file both yield zero stats instead of
/// dividing by zero.
pub fn measure_seek<R: Rng>(path: &Path, seek_count: u64, rng: &mut R) -> OpStats {
    if seek_count == 0 {
        return OpStats::zero();
    }

    let file = match io::open_read(path) {
        Ok(file) => file,
        Err(_) => {
            println!("error reading: could not open file");
            return OpStats::zero();
        }
    };

    match seek_randomly(file, seek_count, rng) {
        Ok(stats) => stats,
        Err(err) => {
            println!("error seeking: {}", err);
            OpStats::zero()
        }
    }
}

fn seek_randomly<R: Rng>(
    mut file: File,
    seek_count: u64,
    rng: &mut R,
) -> std::io::Result<OpStats> {
    let file_size = io::file_len(&mut file)?;
    if file_size == 0 {
        // An empty range has no valid offsets to draw from.
        println!("error seeking: file is empty");
        return Ok(OpStats::zero());
    }

    let start = Instant::now();
    for _ in 0..seek_count {
        let pos = rng.gen_range(0..file_size);
        file.seek(SeekFrom::Start(pos))?;
    }
    let duration = start.elapsed();

    Ok(OpStats::for_seek(seek_count, duration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    #[test]
    fn test_seek_produces_positive_stats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.dat");
        std::fs::write(&path, vec![0u8; 64 * 1024]).unwrap();

        let mut rng = SmallRng::seed_from_u64(42);
        let stats = measure_seek(&path, 1000, &mut rng);
        assert!(stats.average_access_ns > 0.0);
        assert!(stats.throughput > 0.0);
        assert!(stats.is_finite());
    }

    #[test]
    fn test_zero_seek_count_yields_zero_stats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench.dat");
        std::fs::write(&path, vec![0u8; 1024]).unwrap();

        let mut rng = SmallRng::seed_from_u64(42);
        let stats = measure_seek(&path, 0, &mut rng);
        assert_eq!(stats, OpStats::zero());
    }

    #[test]
    fn test_empty_file_yields_zero_stats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.dat");
        std::fs::write(&path, b"").unwrap();

        let mut rng = SmallRng::seed_from_u64(42);
        let stats = measure_seek(&path, 100, &mut rng);
        assert_eq!(stats, OpStats::zero());
    }

    #[test]
    fn test_missing_file_reports_zero() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.dat");

        let mut rng = SmallRng::seed_from_u64(42);
        let stats = measure_seek(&path, 100, &mut rng);
        assert_eq!(stats, OpStats::zero());
    }
}
