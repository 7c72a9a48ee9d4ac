//! Video core models and types
//!
//! Shared data structures consumed by ranking-service and related systems

pub mod constants;
pub mod models;
pub mod timestamp;

pub use models::*;
pub use timestamp::{parse_created_at, TimestampError};
