//! Serde helpers for timestamps.
//!
//! Timestamps are written as `YYYY-MM-DD HH:MM:SS`. Both the space separated form and
//! the ISO 8601 `T` separated form are accepted on input, with optional fractional
//! seconds. A bare `YYYY-MM-DD` date is read as midnight of that day.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const INPUT_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a timestamp in any accepted input format.
pub fn parse(value: &str) -> Result<NaiveDateTime, String> {
    INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            format!(
                "invalid datetime '{}', expected format YYYY-MM-DD HH:MM:SS",
                value
            )
        })
}

pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(D::Error::custom)
}

/// Same as the parent module for optional timestamps in patch payloads.
///
/// Use together with `#[serde(default)]` so an absent field becomes `None`.
pub mod option {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        Option::<String>::deserialize(deserializer)?
            .map(|value| super::parse(&value).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_space_separated_timestamp() {
        assert_eq!(parse("2023-01-05 10:00:00").unwrap(), expected());
    }

    #[test]
    fn parses_iso_timestamp_with_fraction() {
        assert_eq!(parse("2023-01-05T10:00:00.000").unwrap(), expected());
    }

    #[test]
    fn reads_bare_date_as_midnight() {
        let midnight = NaiveDate::from_ymd_opt(2023, 1, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        assert_eq!(parse("2023-01-05").unwrap(), midnight);
    }

    #[test]
    fn reads_bare_date_in_optional_field() {
        #[derive(serde::Deserialize)]
        struct Patch {
            #[serde(default, with = "option")]
            date_time: Option<NaiveDateTime>,
        }

        let patch: Patch = serde_json::from_str(r#"{"date_time": "2023-01-15"}"#).unwrap();
        assert_eq!(
            patch.date_time,
            NaiveDate::from_ymd_opt(2023, 1, 15).and_then(|d| d.and_hms_opt(0, 0, 0))
        );

        let empty: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.date_time, None);
    }

    #[test]
    fn rejects_malformed_timestamp() {
        assert!(parse("05/01/2023").is_err());
    }
}
