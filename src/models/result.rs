//! Measurement result data models
//!
//! Contains the `OpStats` pair produced by every measurement stage and the
//! `RunRecord` snapshot persisted to the run history.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::util::units;
use crate::WRITE_PAYLOAD_BYTES;

/// Statistics for a single measurement stage.
///
/// `average_access_ns` is nanoseconds per byte for the write and read stages
/// and nanoseconds per seek for the seek stage. `throughput` is MB/s for
/// write/read and millions of seeks per second for seek.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpStats {
    /// Average access time in nanoseconds per unit
    pub average_access_ns: f64,
    /// Throughput in the stage's unit convention
    pub throughput: f64,
}

impl OpStats {
    /// Zero-valued stats, reported when a stage cannot open its file.
    pub fn zero() -> Self {
        Self {
            average_access_ns: 0.0,
            throughput: 0.0,
        }
    }

    /// Stats for a completed write stage.
    ///
    /// Both figures are computed against the nominal 10 MiB payload, not the
    /// bytes actually written; with a block size that does not divide the
    /// payload the final partial block is never issued, and the nominal
    /// divisor is kept anyway.
    pub fn for_write(duration: Duration) -> Self {
        Self {
            average_access_ns: units::average_access_ns(duration, WRITE_PAYLOAD_BYTES),
            throughput: units::write_throughput_mbps(duration),
        }
    }

    /// Stats for a completed read stage over `file_size` bytes.
    ///
    /// An empty file produces non-finite values (Inf or NaN); callers get
    /// those in the report rather than a panic.
    pub fn for_read(file_size: u64, duration: Duration) -> Self {
        Self {
            average_access_ns: units::average_access_ns(duration, file_size),
            throughput: units::read_throughput_mbps(file_size, duration),
        }
    }

    /// Stats for a completed seek stage of `seek_count` operations.
    pub fn for_seek(seek_count: u64, duration: Duration) -> Self {
        Self {
            average_access_ns: units::average_access_ns(duration, seek_count),
            throughput: units::seek_throughput_mops(seek_count, duration),
        }
    }

    /// Whether both figures are finite (an empty-file read is not).
    pub fn is_finite(&self) -> bool {
        self.average_access_ns.is_finite() && self.throughput.is_finite()
    }
}

/// One completed benchmark run, as appended to the run history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// Timestamp when the run was executed
    pub timestamp: DateTime<Utc>,
    /// Target file the run measured against
    pub file_name: String,
    /// Write stage statistics
    pub write: OpStats,
    /// Read stage statistics
    pub read: OpStats,
    /// Seek stage statistics
    pub seek: OpStats,
}

impl RunRecord {
    /// Create a new record stamped with the current time.
    pub fn new(file_name: String, write: OpStats, read: OpStats, seek: OpStats) -> Self {
        Self {
            timestamp: Utc::now(),
            file_name,
            write,
            read,
            seek,
        }
    }

    /// One-line human-readable summary of the run.
    pub fn summary(&self) -> String {
        format!(
            "{} - {} - write {:.2} MB/s - read {:.2} MB/s - seek {:.2}*10^6 ops/s",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.file_name,
            self.write.throughput,
            self.read.throughput,
            self.seek.throughput
        )
    }
}
