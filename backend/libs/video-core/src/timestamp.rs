//! Creation timestamp parsing
//!
//! The video API emits RFC 3339 instants, but older rows carry naive
//! `YYYY-MM-DDTHH:MM:SS` values or bare dates. Naive values are read as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp is empty")]
    Empty,

    #[error("unrecognized timestamp: {0}")]
    Unrecognized(String),
}

/// Parse a `createdAt` value into a UTC instant
pub fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TimestampError::Empty);
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .ok_or_else(|| TimestampError::Unrecognized(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let ts = parse_created_at("2024-05-10T08:30:00+02:00").unwrap();
        assert_eq!(ts.hour(), 6);
        assert_eq!(ts.day(), 10);
    }

    #[test]
    fn test_parse_rfc3339_millis() {
        let ts = parse_created_at("2024-05-10T08:30:00.123Z").unwrap();
        assert_eq!(ts.timestamp_millis() % 1000, 123);
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let ts = parse_created_at("2024-05-10T08:30:00").unwrap();
        assert_eq!(ts.hour(), 8);

        let ts = parse_created_at("2024-05-10 08:30:00.5").unwrap();
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_created_at("2024-05-10").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 5, 10));
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_created_at("   "), Err(TimestampError::Empty));
        assert!(matches!(
            parse_created_at("last tuesday"),
            Err(TimestampError::Unrecognized(_))
        ));
        assert!(parse_created_at("2024-13-45").is_err());
    }
}
