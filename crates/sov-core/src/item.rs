//! The unified content record produced by collectors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One collected content record (search result or video).
///
/// Collectors emit records with this unified column set; any column a
/// collector does not populate deserializes to its default. Numeric
/// engagement fields are lenient: numbers, numeric strings, nulls, and
/// garbage all coerce to `0.0` rather than failing the row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub platform: String,
    pub query: String,
    #[serde(deserialize_with = "lenient_rank")]
    pub rank: Option<u32>,
    /// Unique key; rows are deduplicated on it.
    pub url: String,
    pub title: String,
    pub snippet: String,
    pub publisher: String,
    #[serde(deserialize_with = "lenient_f64")]
    pub views: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub likes: f64,
    #[serde(deserialize_with = "lenient_f64")]
    pub comments: f64,
    /// Raw timestamp string as collected; parsed downstream.
    #[serde(deserialize_with = "lenient_string")]
    pub published_at: Option<String>,
    pub raw_text: String,
}

/// Anything a collector might have put in a numeric column.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Num(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Num(n)) if n.is_finite() => n,
        Some(LooseNumber::Text(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn lenient_rank<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Num(n)) if n.is_finite() && n >= 0.0 => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            Some(n as u32)
        }
        Some(LooseNumber::Text(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseNumber::Text(s)) => Some(s),
        Some(LooseNumber::Num(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Parse a collected `published_at` value.
///
/// Accepts RFC 3339 (with offset or trailing `Z`) and the common naive
/// ISO-8601 shapes collectors emit. Unparseable values yield `None`,
/// never an error.
#[must_use]
pub fn parse_published_at(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let s = s.trim_end_matches('Z');
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_columns_take_defaults() {
        let item: Item = serde_json::from_str(r#"{"url": "https://a.example/1"}"#).unwrap();
        assert_eq!(item.url, "https://a.example/1");
        assert_eq!(item.views, 0.0);
        assert_eq!(item.likes, 0.0);
        assert_eq!(item.comments, 0.0);
        assert!(item.rank.is_none());
        assert!(item.published_at.is_none());
        assert_eq!(item.title, "");
    }

    #[test]
    fn numeric_strings_coerce() {
        let item: Item =
            serde_json::from_str(r#"{"url": "u", "views": "1200", "likes": " 34 "}"#).unwrap();
        assert_eq!(item.views, 1200.0);
        assert_eq!(item.likes, 34.0);
    }

    #[test]
    fn garbage_numerics_coerce_to_zero() {
        let item: Item =
            serde_json::from_str(r#"{"url": "u", "views": "N/A", "comments": null}"#).unwrap();
        assert_eq!(item.views, 0.0);
        assert_eq!(item.comments, 0.0);
    }

    #[test]
    fn rank_from_number_and_string() {
        let item: Item = serde_json::from_str(r#"{"url": "u", "rank": 3}"#).unwrap();
        assert_eq!(item.rank, Some(3));
        let item: Item = serde_json::from_str(r#"{"url": "u", "rank": "7"}"#).unwrap();
        assert_eq!(item.rank, Some(7));
        let item: Item = serde_json::from_str(r#"{"url": "u", "rank": "first"}"#).unwrap();
        assert_eq!(item.rank, None);
    }

    #[test]
    fn non_string_published_at_does_not_fail_the_row() {
        let item: Item = serde_json::from_str(r#"{"url": "u", "published_at": 20240301}"#).unwrap();
        assert_eq!(item.published_at.as_deref(), Some("20240301"));
        let item: Item = serde_json::from_str(r#"{"url": "u", "published_at": null}"#).unwrap();
        assert!(item.published_at.is_none());
    }

    #[test]
    fn parse_rfc3339_with_zulu() {
        let dt = parse_published_at("2024-03-01T12:30:00Z").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn parse_naive_datetime() {
        assert!(parse_published_at("2024-03-01T12:30:00").is_some());
        assert!(parse_published_at("2024-03-01 12:30:00.123").is_some());
    }

    #[test]
    fn parse_bare_date() {
        let dt = parse_published_at("2024-03-01").unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-03-01T00:00:00+00:00");
    }

    #[test]
    fn unparseable_dates_are_none() {
        assert!(parse_published_at("").is_none());
        assert!(parse_published_at("   ").is_none());
        assert!(parse_published_at("yesterday").is_none());
        assert!(parse_published_at("03/01/2024").is_none());
    }
}
