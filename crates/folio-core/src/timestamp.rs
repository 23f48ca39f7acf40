//! Timestamp encoding shared by stored records and blog dates.
//!
//! Timestamps are written as RFC 3339 UTC with millisecond precision and a
//! `Z` suffix (`2024-01-15T00:00:00.000Z`). Reads are forgiving: a full
//! RFC 3339 string, a bare `YYYY-MM-DD` date (midnight UTC), or a number of
//! milliseconds since the Unix epoch. Only years 0 through 9999 (in UTC)
//! are accepted, since those are the only ones `format` writes in a shape
//! `parse` reads back.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer, de};
use serde_json::Value;

pub fn format(dt: &DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render only the calendar date, as the editing form shows it.
pub fn format_date(dt: &DateTime<Utc>) -> String {
  dt.format("%Y-%m-%d").to_string()
}

fn representable(dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
  (0..=9999).contains(&dt.year()).then_some(dt)
}

pub fn parse(s: &str) -> Option<DateTime<Utc>> {
  let s = s.trim();
  if s.is_empty() {
    return None;
  }
  if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
    return representable(dt.with_timezone(&Utc));
  }
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .ok()
    .and_then(|d| d.and_hms_opt(0, 0, 0))
    .map(|dt| dt.and_utc())
    .and_then(representable)
}

pub fn from_value(v: &Value) -> Option<DateTime<Utc>> {
  match v {
    Value::String(s) => parse(s),
    Value::Number(n) => n
      .as_i64()
      .or_else(|| n.as_f64().map(|f| f as i64))
      .and_then(DateTime::from_timestamp_millis)
      .and_then(representable),
    _ => None,
  }
}

pub fn serialize<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  s.serialize_str(&format(dt))
}

pub fn deserialize<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
where
  D: Deserializer<'de>,
{
  let v = Value::deserialize(d)?;
  from_value(&v).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {v}")))
}

pub fn serialize_opt<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
  S: Serializer,
{
  match dt {
    Some(dt) => serialize(dt, s),
    None => s.serialize_none(),
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn formats_with_millis_and_z() {
    let dt = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
    assert_eq!(format(&dt), "2024-01-15T09:30:00.000Z");
    assert_eq!(format_date(&dt), "2024-01-15");
  }

  #[test]
  fn parses_bare_date_as_midnight_utc() {
    let dt = parse("2024-01-15").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
  }

  #[test]
  fn parses_offset_timestamps_into_utc() {
    let dt = parse("2024-01-15T10:00:00+02:00").unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap());
  }

  #[test]
  fn epoch_millis_are_accepted() {
    let dt = from_value(&serde_json::json!(1_705_276_800_000_i64)).unwrap();
    assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
  }

  #[test]
  fn dates_past_year_9999_are_rejected() {
    assert!(parse("9999-12-31T23:59:59-01:00").is_none());
    // 10000-01-01T00:00:00Z
    assert!(from_value(&serde_json::json!(253_402_300_800_000_i64)).is_none());

    let last = parse("9999-12-31T23:59:59Z").unwrap();
    assert_eq!(parse(&format(&last)), Some(last));
  }

  #[test]
  fn garbage_is_rejected() {
    assert!(parse("").is_none());
    assert!(parse("next tuesday").is_none());
    assert!(from_value(&serde_json::json!(true)).is_none());
  }
}
