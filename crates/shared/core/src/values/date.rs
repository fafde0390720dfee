//! Partially-known dates
//!
//! Funding records often only know the year or the month of an event. A
//! `DateWithPrecision` carries the raw API value with its precision tag and
//! memoizes both the parsed calendar date and its display string, so a
//! record can be normalized any number of times without re-parsing.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Granularity at which a date is known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum DatePrecision {
    Day,
    Month,
    #[default]
    Year,
}

impl DatePrecision {
    /// Number of calendar components rendered at this precision
    /// (year first, then month, then day).
    pub fn rank(self) -> usize {
        match self {
            DatePrecision::Year => 1,
            DatePrecision::Month => 2,
            DatePrecision::Day => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatePrecision::Day => "day",
            DatePrecision::Month => "month",
            DatePrecision::Year => "year",
        }
    }
}

impl From<&str> for DatePrecision {
    /// Unknown tags fall back to year precision.
    fn from(value: &str) -> Self {
        match value {
            "day" => DatePrecision::Day,
            "month" => DatePrecision::Month,
            _ => DatePrecision::Year,
        }
    }
}

impl From<String> for DatePrecision {
    fn from(value: String) -> Self {
        DatePrecision::from(value.as_str())
    }
}

impl fmt::Display for DatePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw date value with its precision and lazily derived fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateWithPrecision {
    pub value: String,
    pub precision: DatePrecision,
    #[serde(skip)]
    parsed: OnceLock<Option<NaiveDate>>,
    #[serde(skip)]
    formatted: OnceLock<Option<String>>,
}

impl DateWithPrecision {
    pub fn new(value: impl Into<String>, precision: DatePrecision) -> Self {
        Self {
            value: value.into(),
            precision,
            parsed: OnceLock::new(),
            formatted: OnceLock::new(),
        }
    }

    /// Parse the raw value once. Later calls return the memoized result
    /// without touching the raw value again.
    pub fn parse(&self) -> Option<NaiveDate> {
        *self.parsed.get_or_init(|| parse_calendar_date(&self.value))
    }

    /// The memoized parsed date, if `parse` already ran and succeeded.
    pub fn parsed(&self) -> Option<NaiveDate> {
        self.parsed.get().copied().flatten()
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed.get().is_some()
    }

    /// Display string at the value's own precision, computed once.
    ///
    /// Returns `None` when the raw value is not a date.
    pub fn formatted(&self) -> Option<&str> {
        self.formatted
            .get_or_init(|| self.parse().map(|date| format_date(date, self.precision)))
            .as_deref()
    }

    pub fn is_formatted(&self) -> bool {
        self.formatted.get().is_some()
    }
}

impl PartialEq for DateWithPrecision {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.precision == other.precision
    }
}

impl Eq for DateWithPrecision {}

/// Render `date` with as many components as `precision` includes,
/// most granular first: `DD-MM-YYYY`, `MM-YYYY` or `YYYY`.
pub fn format_date(date: NaiveDate, precision: DatePrecision) -> String {
    let components = [
        date.year().to_string(),
        format!("{:02}", date.month()),
        format!("{:02}", date.day()),
    ];
    components[..precision.rank()]
        .iter()
        .rev()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("-")
}

/// Formatted display of an optional date; absent input yields `None`.
pub fn format_optional(date: Option<&DateWithPrecision>) -> Option<&str> {
    date.and_then(DateWithPrecision::formatted)
}

/// Format a plain date string at the given precision.
pub fn format_raw(value: &str, precision: DatePrecision) -> Option<String> {
    parse_calendar_date(value).map(|date| format_date(date, precision))
}

/// Parse the date formats the API emits.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and the truncated `YYYY-MM`
/// and `YYYY` forms (missing components default to the first of the period).
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    if value.len() == 4 {
        let year = value.parse::<i32>().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// Serde helper for optional date fields that may hold a date, a timestamp
/// or garbage. Anything unparseable decodes as `None`.
pub fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_calendar_date))
}
