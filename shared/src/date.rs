//! Timestamp type for backend payloads.
//!
//! The backend serialises `datetime` columns without an offset
//! (`2025-09-08T10:00:00.123456`) for values read back from the database,
//! and with one (`2025-09-08T10:00:00Z`) for literals. Both forms are
//! accepted here and normalised to UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

// =========================================================
// Timestamp
// =========================================================

/// A UTC point in time as exchanged with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    #[inline]
    pub const fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    #[inline]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Calendar date part, used by list views (`2024-01-15`).
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Parses either an RFC 3339 string or a naive ISO-8601 string (read as UTC).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(s) {
            return Some(Self(at.with_timezone(&Utc)));
        }
        if let Ok(naive) = NaiveDateTime::from_str(s) {
            return Some(Self(naive.and_utc()));
        }
        NaiveDate::from_str(s)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Self(naive.and_utc()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self(at)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_naive_backend_format() {
        let ts = Timestamp::parse("2024-01-15T10:30:00.123456").unwrap();
        let at = ts.as_datetime();
        assert_eq!((at.year(), at.month(), at.day()), (2024, 1, 15));
        assert_eq!(at.hour(), 10);
    }

    #[test]
    fn test_parse_rfc3339_with_offset_normalises_to_utc() {
        let ts = Timestamp::parse("2025-09-08T12:00:00+02:00").unwrap();
        assert_eq!(ts.as_datetime().hour(), 10);
    }

    #[test]
    fn test_parse_date_only() {
        let ts = Timestamp::parse("2024-01-13").unwrap();
        assert_eq!(ts.date().to_string(), "2024-01-13");
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let res: Result<Timestamp, _> = serde_json::from_str("\"yesterday\"");
        assert!(res.is_err());
    }
}
