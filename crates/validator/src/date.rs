//! Date normalization and parsing helpers
//!
//! Forms carry dates day-first (`DD/MM/YYYY`); storage wants them year-first
//! (`YYYY-MM-DD`). [`to_storage_order`] converts between the two without any
//! calendar check. The `parse_*` helpers and [`to_display_order`] do check the
//! calendar, through [`chrono::NaiveDate`].

use chrono::NaiveDate;

/// Errors produced when a date string cannot become a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DateError {
    /// The text is too short or its date parts are not numbers.
    #[error("malformed date: {input:?}")]
    Malformed {
        /// The rejected text.
        input: String,
    },

    /// The parts are numbers but do not form a calendar date.
    #[error("date out of range: {input:?}")]
    OutOfRange {
        /// The rejected text.
        input: String,
    },
}

/// Converts a day-first, slash-separated date into year-first,
/// hyphen-separated order.
///
/// The parts are reversed as they are, with no calendar validation. Empty
/// input is returned unchanged.
///
/// # Examples
///
/// ```
/// use toolbox_validator::date::to_storage_order;
///
/// assert_eq!(to_storage_order("25/12/2023"), "2023-12-25");
/// assert_eq!(to_storage_order("31/02/2020"), "2020-02-31");
/// assert_eq!(to_storage_order(""), "");
/// ```
pub fn to_storage_order(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.split('/').rev().collect::<Vec<_>>().join("-")
}

/// Parses a year-first date by position (`YYYY?MM?DD`, any separators).
///
/// Empty input yields `Ok(None)`.
pub fn parse_storage_date(text: &str) -> Result<Option<NaiveDate>, DateError> {
    if text.is_empty() {
        return Ok(None);
    }
    build_date(text, (0..4, 5..7, 8..10)).map(Some)
}

/// Parses a day-first date by position (`DD?MM?YYYY`, any separators).
///
/// Empty input yields `Ok(None)`.
pub fn parse_display_date(text: &str) -> Result<Option<NaiveDate>, DateError> {
    if text.is_empty() {
        return Ok(None);
    }
    build_date(text, (6..10, 3..5, 0..2)).map(Some)
}

/// Formats a year-first date as `DD/MM/YYYY`.
///
/// Empty input yields an empty string.
///
/// # Examples
///
/// ```
/// use toolbox_validator::date::to_display_order;
///
/// assert_eq!(to_display_order("2023-12-25").unwrap(), "25/12/2023");
/// assert!(to_display_order("2023-02-30").is_err());
/// ```
pub fn to_display_order(text: &str) -> Result<String, DateError> {
    Ok(parse_storage_date(text)?
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_default())
}

type Span = std::ops::Range<usize>;

fn build_date(text: &str, (year, month, day): (Span, Span, Span)) -> Result<NaiveDate, DateError> {
    let malformed = || DateError::Malformed {
        input: text.to_owned(),
    };

    let part = |span: Span| -> Result<u32, DateError> {
        text.get(span)
            .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(malformed)
    };

    let (year, month, day) = (part(year)?, part(month)?, part(day)?);
    let year = i32::try_from(year).map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateError::OutOfRange {
        input: text.to_owned(),
    })
}

// ============================================================================
// TESTS
// ============================================================================
