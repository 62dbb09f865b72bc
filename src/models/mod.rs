//! Data models module
//!
//! Contains the per-stage statistics value type and the persisted
//! run record.

pub mod result;

// Re-export commonly used types
pub use result::{OpStats, RunRecord};
