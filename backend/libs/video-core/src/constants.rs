//! Shared video constants

/// Device identifier reported by mobile clients in `preferredDevice`
pub const MOBILE_DEVICE: &str = "mobile";

/// Milliseconds in one day, used for age computations
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
