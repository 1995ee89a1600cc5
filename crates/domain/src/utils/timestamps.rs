//! Timestamp (de)serialization helpers
//!
//! The backend writes naive ISO-8601 datetimes (`2024-05-01T09:30:00.123456`)
//! for server-owned timestamps and accepts datetimes for project dates. Form
//! inputs only ever carry a calendar date, so outgoing dates are pinned to
//! midnight.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse a naive or offset-qualified ISO-8601 datetime, or a bare date.
pub fn parse_lenient(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive);
    }
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    raw.parse::<NaiveDate>().ok().and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// `deserialize_with` target for optional server timestamps.
///
/// Unparseable values become `None` rather than failing the whole record;
/// timestamps are display-only on the client.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_lenient))
}

/// `serialize_with` target writing an optional date as midnight of that day.
pub fn serialize_date_as_midnight<S>(
    value: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(date) => serializer.serialize_str(&format!("{}T00:00:00", date.format("%Y-%m-%d"))),
        None => serializer.serialize_none(),
    }
}
