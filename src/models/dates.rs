//! Timestamp parsing for the CSV sources.
//!
//! Clinical exports are inconsistent about date layout, so parsing tries a
//! small list of known formats in order instead of assuming ISO.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Formats accepted for `timestamp` columns, tried in order
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Format used when writing dates back out in checkpoint tables
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string against the accepted formats.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Serde adapter for `timestamp` columns.
///
/// An unparseable date is a structural error: it surfaces through the CSV
/// reader as a fatal load failure for the whole file.
pub fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unparseable date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_date("2017-03-12"),
            NaiveDate::from_ymd_opt(2017, 3, 12)
        );
    }

    #[test]
    fn test_parse_us_date() {
        assert_eq!(
            parse_date("03/12/2017"),
            NaiveDate::from_ymd_opt(2017, 3, 12)
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            parse_date(" 2017-03-12 "),
            NaiveDate::from_ymd_opt(2017, 3, 12)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2017-13-40"), None);
        assert_eq!(parse_date(""), None);
    }
}
