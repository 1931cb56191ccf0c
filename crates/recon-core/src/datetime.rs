//! Sale-date resolution.
//!
//! Marketplace exports disagree wildly about date formats, and some only ship
//! a combined date+time column. Resolution tries a fixed ordered list of
//! known formats and degrades to the batch's "today" instead of raising —
//! format irregularities are expected, not exceptional. The fallback stays
//! observable through [`DateResolution`] so callers and tests can tell which
//! path fired.

use chrono::{NaiveDate, NaiveDateTime};

/// Known combined date+time formats, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%m/%d/%y %I:%M %p",
];

/// Date-only formats, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Outcome of resolving one row's sale date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateResolution {
    /// Parsed from the input cell (time component stripped if present).
    Parsed(NaiveDate),
    /// Cell absent or unparseable; the batch's "today" applies.
    Defaulted(NaiveDate),
}

impl DateResolution {
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Parsed(date) | Self::Defaulted(date) => *date,
        }
    }

    #[must_use]
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }

    /// Renders the output form, always `YYYY-MM-DD`.
    #[must_use]
    pub fn to_ymd_string(&self) -> String {
        self.date().format("%Y-%m-%d").to_string()
    }
}

/// Resolves a raw date cell.
///
/// `datetime_like` reflects the inferred column: combined date+time columns
/// try the datetime formats first so only the date component survives, while
/// pure date columns try the date-only formats first. Either way the other
/// family is probed before giving up, since column names lie.
pub fn resolve_sale_date(
    raw: Option<&str>,
    datetime_like: bool,
    today: NaiveDate,
) -> DateResolution {
    let Some(raw) = raw else {
        return DateResolution::Defaulted(today);
    };
    let value = raw.trim();
    if value.is_empty() {
        return DateResolution::Defaulted(today);
    }
    let attempts: [fn(&str) -> Option<NaiveDate>; 2] = if datetime_like {
        [parse_datetime_date, parse_date]
    } else {
        [parse_date, parse_datetime_date]
    };
    for attempt in attempts {
        if let Some(date) = attempt(value) {
            return DateResolution::Parsed(date);
        }
    }
    DateResolution::Defaulted(today)
}

/// Parses a date-only value against the known formats.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

fn parse_datetime_date(value: &str) -> Option<NaiveDate> {
    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(datetime.date());
    }
    // Generic fallback: parse whatever precedes the time separator.
    let head = value.split(['T', ' ']).next()?;
    parse_date(head)
}
