//! Omission predicates and tolerant field decoders
//!
//! Records omit zero/empty fields on the wire. These predicates back the
//! `skip_serializing_if` attributes so the rule lives in one place.

#![allow(clippy::trivially_copy_pass_by_ref)]

pub fn is_zero(value: &i64) -> bool {
    *value == 0
}

pub fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

pub fn is_false(value: &bool) -> bool {
    !*value
}

/// Serialize through `Display`, for enums whose wire form is their spelling.
pub fn as_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: serde::Serializer,
{
    serializer.collect_str(value)
}

/// Timestamps that may arrive empty (`<canceled_at nil="nil"></canceled_at>`).
///
/// An absent element, an empty element and whitespace-only text all decode
/// to `None`. Anything else must be RFC 3339; a zone-less timestamp is read
/// as UTC.
pub mod xml_datetime {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    struct RawText {
        #[serde(rename = "$text", default)]
        text: Option<String>,
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<RawText>::deserialize(deserializer)?;
        let text = raw.and_then(|r| r.text).unwrap_or_default();
        parse(text.trim()).map_err(D::Error::custom)
    }

    /// Parse the textual form used on the wire.
    pub fn parse(text: &str) -> Result<Option<DateTime<Utc>>, String> {
        if text.is_empty() {
            return Ok(None);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Some(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Some(naive.and_utc()))
            .map_err(|e| format!("invalid timestamp '{text}': {e}"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde::Deserialize;

    use super::xml_datetime;

    #[derive(Debug, Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "xml_datetime::deserialize")]
        created_at: Option<chrono::DateTime<Utc>>,
    }

    #[test]
    fn parses_offset_timestamps() {
        let parsed = xml_datetime::parse("2011-04-30T07:00:00-07:00").unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2011, 4, 30, 14, 0, 0).unwrap()));
    }

    #[test]
    fn zone_less_timestamp_is_utc() {
        let parsed = xml_datetime::parse("2011-04-30T07:00:00").unwrap();
        assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2011, 4, 30, 7, 0, 0).unwrap()));
    }

    #[test]
    fn blank_is_none() {
        assert_eq!(xml_datetime::parse("").unwrap(), None);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(xml_datetime::parse("yesterday").is_err());
    }

    #[test]
    fn tolerates_empty_and_missing_elements() {
        let empty: Stamped = quick_xml::de::from_str(
            r#"<stamped><created_at nil="nil"></created_at></stamped>"#,
        )
        .unwrap();
        assert!(empty.created_at.is_none());

        let missing: Stamped = quick_xml::de::from_str("<stamped></stamped>").unwrap();
        assert!(missing.created_at.is_none());

        let self_closing: Stamped =
            quick_xml::de::from_str("<stamped><created_at/></stamped>").unwrap();
        assert!(self_closing.created_at.is_none());

        let typed: Stamped = quick_xml::de::from_str(
            r#"<stamped><created_at type="datetime">2011-10-25T12:00:00Z</created_at></stamped>"#,
        )
        .unwrap();
        assert_eq!(typed.created_at, Some(Utc.with_ymd_and_hms(2011, 10, 25, 12, 0, 0).unwrap()));
    }
}
