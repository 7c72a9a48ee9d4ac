//! Core video data models

use crate::constants::MOBILE_DEVICE;
use crate::timestamp::parse_created_at;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Video record as served by the video API
///
/// Counters and duration are optional because list endpoints omit them for
/// videos that are still processing. Every field except `id` decodes
/// leniently: a value of the wrong JSON type reads as absent instead of
/// failing the whole payload. `created_at` is kept as a string; epoch-millis
/// numbers are normalized to RFC 3339, anything else unusable becomes empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub category_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub views: Option<i64>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub likes: Option<i64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub duration: Option<f64>, // in seconds
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: String,
}

fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .filter(|n: &f64| n.is_finite())
}

/// Integers as-is; floats and numeric strings truncated toward zero
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    Ok(value.as_i64().or_else(|| number_from(&value).map(|n| n as i64)))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    Ok(number_from(&value))
}

/// Strings kept verbatim, numbers read as epoch milliseconds
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?.unwrap_or(Value::Null);
    let created_at = match value {
        Value::String(s) => s,
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single())
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_default(),
        _ => String::new(),
    };
    Ok(created_at)
}

impl VideoRecord {
    pub fn new(id: i64, created_at: impl Into<String>) -> Self {
        Self {
            id,
            category_id: None,
            views: None,
            likes: None,
            duration: None,
            created_at: created_at.into(),
        }
    }

    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_counts(mut self, views: i64, likes: i64) -> Self {
        self.views = Some(views);
        self.likes = Some(likes);
        self
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    /// Parsed creation instant, `None` when the stored string is not a valid timestamp
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_created_at(&self.created_at).ok()
    }
}

/// Viewer preferences attached to a ranking request
///
/// Only `preferredDevice` is recognized. Unknown fields are ignored and a
/// malformed payload (wrong JSON type, non-string device) decodes to the
/// empty preferences instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_device: Option<String>,
}

impl UserPreferences {
    pub fn with_device(device: impl Into<String>) -> Self {
        Self {
            preferred_device: Some(device.into()),
        }
    }

    /// Exact, case-sensitive match against the mobile device identifier
    pub fn prefers_mobile(&self) -> bool {
        self.preferred_device.as_deref() == Some(MOBILE_DEVICE)
    }
}

impl<'de> Deserialize<'de> for UserPreferences {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let preferred_device = value
            .get("preferredDevice")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self { preferred_device })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_default_to_none() {
        let video: VideoRecord = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(video.category_id, None);
        assert_eq!(video.views, None);
        assert_eq!(video.likes, None);
        assert_eq!(video.duration, None);
        assert!(video.created_at.is_empty());
        assert!(video.created_at_utc().is_none());
    }

    #[test]
    fn test_null_created_at_decodes_as_unparseable() {
        let video: VideoRecord =
            serde_json::from_str(r#"{"id": 1, "createdAt": null}"#).unwrap();
        assert!(video.created_at.is_empty());
        assert!(video.created_at_utc().is_none());
    }

    #[test]
    fn test_epoch_millis_created_at() {
        let video: VideoRecord =
            serde_json::from_str(r#"{"id": 1, "createdAt": 1717243200000}"#).unwrap();
        let expected = Utc.timestamp_millis_opt(1_717_243_200_000).single();
        assert_eq!(video.created_at_utc(), expected);
    }

    #[test]
    fn test_non_string_created_at_decodes_as_unparseable() {
        let video: VideoRecord =
            serde_json::from_str(r#"{"id": 1, "createdAt": {"seconds": 5}}"#).unwrap();
        assert!(video.created_at_utc().is_none());

        let video: VideoRecord =
            serde_json::from_str(r#"{"id": 1, "createdAt": 1e300}"#).unwrap();
        assert!(video.created_at_utc().is_none());
    }

    #[test]
    fn test_float_and_string_counts() {
        let video: VideoRecord = serde_json::from_str(
            r#"{"id": 1, "views": 1000.0, "likes": "42", "duration": "90.5", "categoryId": 3.0}"#,
        )
        .unwrap();
        assert_eq!(video.views, Some(1000));
        assert_eq!(video.likes, Some(42));
        assert_eq!(video.duration, Some(90.5));
        assert_eq!(video.category_id, Some(3));
    }

    #[test]
    fn test_wrong_typed_numbers_read_as_missing() {
        let video: VideoRecord = serde_json::from_str(
            r#"{"id": 1, "views": null, "likes": true, "duration": [1], "categoryId": "music"}"#,
        )
        .unwrap();
        assert_eq!(video.views, None);
        assert_eq!(video.likes, None);
        assert_eq!(video.duration, None);
        assert_eq!(video.category_id, None);
    }

    #[test]
    fn test_preferences_ignore_unknown_fields() {
        let prefs: UserPreferences = serde_json::from_str(
            r#"{"preferredDevice": "mobile", "theme": "dark", "autoplay": true}"#,
        )
        .unwrap();
        assert!(prefs.prefers_mobile());
    }

    #[test]
    fn test_malformed_preferences_decode_as_empty() {
        let prefs: UserPreferences =
            serde_json::from_str(r#"{"preferredDevice": 5}"#).unwrap();
        assert_eq!(prefs, UserPreferences::default());

        let prefs: UserPreferences = serde_json::from_str(r#""mobile""#).unwrap();
        assert_eq!(prefs, UserPreferences::default());

        let prefs: UserPreferences = serde_json::from_str("[1, 2]").unwrap();
        assert!(!prefs.prefers_mobile());
    }

    #[test]
    fn test_prefers_mobile_is_exact() {
        assert!(UserPreferences::with_device("mobile").prefers_mobile());
        assert!(!UserPreferences::with_device("Mobile").prefers_mobile());
        assert!(!UserPreferences::with_device("desktop").prefers_mobile());
        assert!(!UserPreferences::default().prefers_mobile());
    }
}
