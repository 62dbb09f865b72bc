//! Unit math for the measurement stages
//!
//! Each stage reports an average access time in nanoseconds per unit and a
//! throughput. The write stage reports decimal megabytes per second while the
//! read stage reports binary (MiB-based) megabytes per second; both
//! conventions are kept exactly as the measurements have always been reported
//! so that numbers stay comparable across versions.

use std::time::Duration;

use crate::WRITE_PAYLOAD_BYTES;

/// Average access time in nanoseconds per unit (bytes for read/write, seek
/// operations for seek).
///
/// A zero unit count yields a non-finite value (Inf or NaN), never a panic;
/// this happens when the read stage observes an empty file.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use diskmark::util::units::average_access_ns;
///
/// let avg = average_access_ns(Duration::from_secs(1), 1_000_000_000);
/// assert!((avg - 1.0).abs() < 1e-9);
/// ```
pub fn average_access_ns(duration: Duration, units: u64) -> f64 {
    duration.as_nanos() as f64 / units as f64
}

/// Write-stage throughput in MB/s: nominal 10 MB payload over elapsed seconds.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use diskmark::util::units::write_throughput_mbps;
///
/// let mbps = write_throughput_mbps(Duration::from_secs(2));
/// assert!((mbps - 5.0).abs() < 1e-9);
/// ```
pub fn write_throughput_mbps(duration: Duration) -> f64 {
    let nominal_mb = (WRITE_PAYLOAD_BYTES / (1024 * 1024)) as f64;
    nominal_mb / duration.as_secs_f64()
}

/// Read-stage throughput in MB/s, with 1 MB = 1,048,576 bytes.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use diskmark::util::units::read_throughput_mbps;
///
/// let mbps = read_throughput_mbps(1_048_576, Duration::from_secs(1));
/// assert!((mbps - 1.0).abs() < 1e-9);
/// ```
pub fn read_throughput_mbps(bytes: u64, duration: Duration) -> f64 {
    (bytes as f64 / 1_048_576.0) / duration.as_secs_f64()
}

/// Seek-stage throughput in millions of seek operations per second.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use diskmark::util::units::seek_throughput_mops;
///
/// let mops = seek_throughput_mops(2_000_000, Duration::from_secs(1));
/// assert!((mops - 2.0).abs() < 1e-9);
/// ```
pub fn seek_throughput_mops(seeks: u64, duration: Duration) -> f64 {
    (seeks as f64 / 1e6) / duration.as_secs_f64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_access_ns() {
        let avg = average_access_ns(Duration::from_nanos(2000), 1000);
        assert!((avg - 2.0).abs() < 1e-9);

        // Zero units is non-finite, not a panic
        let avg = average_access_ns(Duration::from_secs(1), 0);
        assert!(avg.is_infinite());
    }

    #[test]
    fn test_write_throughput_mbps() {
        assert!((write_throughput_mbps(Duration::from_secs(1)) - 10.0).abs() < 1e-9);
        assert!((write_throughput_mbps(Duration::from_secs(2)) - 5.0).abs() < 1e-9);
        assert!((write_throughput_mbps(Duration::from_millis(100)) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_read_throughput_mbps() {
        let mbps = read_throughput_mbps(2 * 1_048_576, Duration::from_secs(2));
        assert!((mbps - 1.0).abs() < 1e-9);

        // Empty file: division by zero duration units still must not panic
        assert!(read_throughput_mbps(0, Duration::from_secs(1)).abs() < 1e-9);
    }

    #[test]
    fn test_seek_throughput_mops() {
        let mops = seek_throughput_mops(100_000, Duration::from_millis(100));
        assert!((mops - 1.0).abs() < 1e-9);
    }
}
