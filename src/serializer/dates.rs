//! Lenient parsing of the date strings the API emits.
//!
//! Timestamps arrive in several shapes depending on the backend that
//! produced them: RFC 3339 with offset, the SQL-ish `YYYY-MM-DD HH:MM:SS`,
//! or a bare date. Offset-less values are taken as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses a timestamp string, returning `None` for unrecognized input.
#[must_use]
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight));
    }
    tracing::debug!(raw, "unrecognized timestamp format");
    None
}

/// Serde adapter: deserializes an optional timestamp leniently.
///
/// Non-string and unparseable values become `None` instead of failing the
/// surrounding structural pass.
///
/// # Errors
///
/// Only fails when the underlying deserializer itself fails.
pub fn deserialize_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(Value::as_str).and_then(parse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parses_rfc3339_with_offset() {
        let parsed = parse("2024-01-15T10:30:00+03:00").unwrap();
        assert_eq!(parsed.hour(), 7);
    }

    #[test]
    fn test_parses_rfc3339_utc() {
        let parsed = parse("2024-01-15T10:30:00Z").unwrap();
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn test_parses_sql_style_as_utc() {
        let parsed = parse("2024-01-15 10:30:00").unwrap();
        assert_eq!(parsed.hour(), 10);
    }

    #[test]
    fn test_parses_bare_date_as_midnight() {
        let parsed = parse("2024-01-15").unwrap();
        assert_eq!(parsed.hour(), 0);
    }

    #[test]
    fn test_unrecognized_input_is_none() {
        assert!(parse("yesterday").is_none());
        assert!(parse("").is_none());
    }
}
