//! Timestamp parsing for backend payloads.
//!
//! The backend serializes naive datetimes (`2026-02-01T12:00:00`) for
//! wall-clock values and UTC instants without an offset for hold expiry.
//! Both forms, with or without fractional seconds, are accepted here.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse an instant. Values without an offset are taken as UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_naive(raw).map(|naive| naive.and_utc())
}

/// Parse a wall-clock datetime, dropping any offset.
pub fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Serde adapter for `Option<DateTime<Utc>>` fields.
pub mod optional_instant {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => parse_instant(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}"))),
        }
    }
}

/// Serde adapter for wall-clock `NaiveDateTime` fields.
pub mod naive {
    use super::*;

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_naive(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_parse_instant_without_offset_is_utc() {
        let dt = parse_instant("2026-02-01T12:05:30.123456").unwrap();
        let expected = Utc.with_ymd_and_hms(2026, 2, 1, 12, 5, 30).unwrap();
        assert_eq!(dt.timestamp(), expected.timestamp());
        assert_eq!(dt.timestamp_subsec_micros(), 123_456);
    }

    #[test]
    fn test_parse_instant_with_offset() {
        let dt = parse_instant("2026-02-01T14:05:30+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 2, 1, 12, 5, 30).unwrap());
    }

    #[test]
    fn test_parse_naive_accepts_minutes_only() {
        let dt = parse_naive("2026-02-01T12:30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        assert_eq!(dt, expected);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_instant("tomorrow-ish").is_none());
        assert!(parse_naive("").is_none());
    }
}
