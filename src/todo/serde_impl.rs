//! Lenient calendar-date handling for stored todos
//!
//! Stored dates come in several shapes (TOML dates, plain `YYYY-MM-DD` strings,
//! full timestamps). Only the calendar day is kept. A value that cannot be read
//! as a date becomes `None` instead of an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Timestamp layouts accepted in addition to RFC 3339
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse a stored date string down to its calendar day
///
/// # Arguments
/// * `raw` - A date (`2024-01-14`) or timestamp (`2024-01-14T09:30:00Z`, `2024-01-14 09:30:00`)
///
/// # Returns
/// The calendar day, or `None` when the text is blank or malformed
pub fn parse_lenient_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    // The day is taken in the timestamp's own offset
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|datetime| datetime.date())
}

fn date_from_value(value: &toml::Value) -> Option<NaiveDate> {
    match value {
        toml::Value::String(text) => parse_lenient_date(text),
        toml::Value::Datetime(datetime) => {
            let date = datetime.date?;
            NaiveDate::from_ymd_opt(date.year.into(), date.month.into(), date.day.into())
        }
        _ => None,
    }
}

/// `#[serde(with = "lenient_date")]` adapter for `Option<NaiveDate>` fields
pub(crate) mod lenient_date {
    use super::date_from_value;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<toml::Value>::deserialize(deserializer)?;
        Ok(raw.as_ref().and_then(date_from_value))
    }
}
