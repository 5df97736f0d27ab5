//! Date range for a download run.
//!
//! Both ends are parsed as `YYYY-MM-DD`. The caller's text is kept verbatim
//! because it names the output directory; the parsed dates drive the query.
//! There is no `start <= end` check: a reversed range is passed through to
//! the provider as-is.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Date format accepted on input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start date used when the driver is called without one.
pub const DEFAULT_START: &str = "2024-08-01";

/// End date used when the driver is called without one.
pub const DEFAULT_END: &str = "2024-12-31";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },
}

/// A validated `(start, end)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start_text: String,
    end_text: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Parse both ends. Fails on the first date that does not parse.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        Ok(Self {
            start: parse_date(start)?,
            end: parse_date(end)?,
            start_text: start.to_string(),
            end_text: end.to_string(),
        })
    }

    /// Parse with the driver-level defaults filling absent ends.
    pub fn with_defaults(start: Option<&str>, end: Option<&str>) -> Result<Self, RangeError> {
        Self::parse(start.unwrap_or(DEFAULT_START), end.unwrap_or(DEFAULT_END))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start date exactly as supplied.
    pub fn start_text(&self) -> &str {
        &self.start_text
    }

    /// End date exactly as supplied.
    pub fn end_text(&self) -> &str {
        &self.end_text
    }

    /// Output directory name: `{start}_to_{end}`.
    pub fn folder_name(&self) -> String {
        format!("{}_to_{}", self.start_text, self.end_text)
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self {
            start_text: DEFAULT_START.to_string(),
            end_text: DEFAULT_END.to_string(),
            start: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start_text, self.end_text)
    }
}

/// The year must be exactly four ASCII digits; chrono's `%Y` alone would
/// also take a sign or leading whitespace.
fn parse_date(value: &str) -> Result<NaiveDate, RangeError> {
    let invalid = || RangeError::InvalidDate {
        value: value.to_string(),
    };
    let year = value.split('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_range() {
        let r = DateRange::parse("2024-08-01", "2024-12-31").unwrap();
        assert_eq!(r.start(), NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
        assert_eq!(r.end(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn folder_name_is_exact() {
        let r = DateRange::parse("2024-08-01", "2024-12-31").unwrap();
        assert_eq!(r.folder_name(), "2024-08-01_to_2024-12-31");
    }

    #[test]
    fn rejects_slashes_and_garbage() {
        assert!(matches!(
            DateRange::parse("2024/08/01", "2024-12-31"),
            Err(RangeError::InvalidDate { value }) if value == "2024/08/01"
        ));
        assert!(DateRange::parse("2024-08-01", "not-a-date").is_err());
        assert!(DateRange::parse("2024-02-30", "2024-12-31").is_err());
        assert!(DateRange::parse("", "").is_err());
    }

    #[test]
    fn rejects_signed_or_padded_year() {
        for bad in ["+2024-08-01", "-2024-08-01", " 2024-08-01", "02024-08-01", "24-08-01"] {
            assert!(
                matches!(
                    DateRange::parse(bad, "2024-12-31"),
                    Err(RangeError::InvalidDate { ref value }) if value == bad
                ),
                "{bad:?} should be rejected"
            );
            assert!(DateRange::parse("2024-08-01", bad).is_err());
        }
    }

    #[test]
    fn unpadded_month_and_day_are_accepted() {
        let r = DateRange::parse("2024-8-1", "2024-12-31").unwrap();
        assert_eq!(r.start(), NaiveDate::from_ymd_opt(2024, 8, 1).unwrap());
        assert_eq!(r.folder_name(), "2024-8-1_to_2024-12-31");
    }

    #[test]
    fn reversed_range_is_accepted() {
        let r = DateRange::parse("2024-12-31", "2024-08-01").unwrap();
        assert!(r.start() > r.end());
    }

    #[test]
    fn defaults_fill_missing_ends() {
        let r = DateRange::with_defaults(None, None).unwrap();
        assert_eq!(r, DateRange::default());
        assert_eq!(r.folder_name(), "2024-08-01_to_2024-12-31");

        let r = DateRange::with_defaults(Some("2023-01-03"), None).unwrap();
        assert_eq!(r.folder_name(), "2023-01-03_to_2024-12-31");
    }
}
