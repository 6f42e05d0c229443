//! Lenient decoders for fields the analytics API sends in more than one shape.
//!
//! SQL `DECIMAL` columns come back as JSON strings, integer ids sometimes come
//! back as numbers and sometimes as strings, and `DATE` columns are rendered
//! either as ISO dates or as RFC 2822 timestamps.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {text:?}"))),
    }
}

pub fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match IdValue::deserialize(deserializer)? {
        IdValue::Integer(value) => value.to_string(),
        IdValue::Float(value) => value.to_string(),
        IdValue::Text(text) => text,
    })
}

pub fn date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_date(&text).ok_or_else(|| serde::de::Error::custom(format!("unrecognised date {text:?}")))
}

/// Accepts `2024-01-31`, `Wed, 31 Jan 2024 00:00:00 GMT` and RFC 3339.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc2822(text) {
        return Some(stamp.naive_utc().date());
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.naive_utc().date());
    }
    text.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Normalises a date label to `YYYY-MM-DD`, keeping the raw text when it
/// cannot be parsed.
pub fn normalise_date_label(text: &str) -> String {
    parse_date(text).map_or_else(|| text.to_string(), |date| date.format("%Y-%m-%d").to_string())
}
