//! Utility functions module
//!
//! Contains the unit math shared by the measurement stages.

pub mod units;

// Re-export commonly used functions
pub use units::{
    average_access_ns, read_throughput_mbps, seek_throughput_mops, write_throughput_mbps,
};
