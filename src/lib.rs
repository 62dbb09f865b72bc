//! DISKMARK - disk I/O micro-benchmark
//!
//! Measures sequential write throughput, sequential read throughput, and
//! random-seek latency against a target file, one pass each, and prints
//! average per-unit access time and throughput per stage.

use std::fmt;

// Public re-exports
pub mod bench;
pub mod config;
pub mod io;
pub mod models;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum DiskMarkError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// Configuration validation or parsing error
    ConfigError(String),
    /// Run history persistence error
    PersistenceError(String),
}

impl fmt::Display for DiskMarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiskMarkError::IoError(err) => write!(f, "I/O error: {}", err),
            DiskMarkError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            DiskMarkError::PersistenceError(msg) => {
                write!(f, "Run history persistence error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DiskMarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiskMarkError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DiskMarkError {
    fn from(err: std::io::Error) -> Self {
        DiskMarkError::IoError(err)
    }
}

impl From<serde_json::Error> for DiskMarkError {
    fn from(err: serde_json::Error) -> Self {
        DiskMarkError::PersistenceError(format!("JSON serialization error: {}", err))
    }
}

impl From<toml::de::Error> for DiskMarkError {
    fn from(err: toml::de::Error) -> Self {
        DiskMarkError::ConfigError(format!("TOML parsing error: {}", err))
    }
}

impl From<toml::ser::Error> for DiskMarkError {
    fn from(err: toml::ser::Error) -> Self {
        DiskMarkError::ConfigError(format!("TOML serialization error: {}", err))
    }
}

/// Result type alias for diskmark operations
pub type Result<T> = std::result::Result<T, DiskMarkError>;

// Common types and constants
pub const APP_NAME: &str = "diskmark";
pub const CONFIG_FILE: &str = "diskmark.toml";
pub const HISTORY_FILE: &str = "history.json";
pub const MAX_HISTORY: usize = 100;

/// Nominal payload written by the write stage: 10 MiB
pub const WRITE_PAYLOAD_BYTES: u64 = 10 * 1024 * 1024;
/// Default per-call block size for the write and read stages
pub const DEFAULT_BLOCK_SIZE: usize = 1028;
/// Default number of random seeks performed by the seek stage
pub const DEFAULT_SEEK_COUNT: u64 = 100_000;
