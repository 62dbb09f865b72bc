//! Benchmark engine module
//!
//! Contains the three measurement stages: sequential write, sequential read,
//! and random seek. Each stage is independent and runs once, single-threaded.

pub mod seek;
pub mod sequential;

// Re-export commonly used operations
pub use seek::measure_seek;
pub use sequential::{measure_read, measure_write};
