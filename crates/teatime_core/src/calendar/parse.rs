//! Strict parsers for canonical period names.
//!
//! # Invariants
//! - Names are matched exactly: zero padded, upper-case `W`/`Q`, ASCII digits.
//! - Weeks are 1..=53, months 1..=12, quarters 1..=4.
//! - Parsing never panics; every failure is a `PeriodParseError`.

use crate::model::period::PeriodCategory;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::error::Error;
use std::fmt::{Display, Formatter};

static DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid day regex"));
static WEEK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-W([0-9]{2})$").expect("valid week regex"));
static MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("valid month regex"));
static QUARTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-Q([1-4])$").expect("valid quarter regex"));
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]{4})$").expect("valid year regex"));

/// Malformed period name passed to a calendar function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodParseError {
    /// Category the name was parsed as.
    pub category: PeriodCategory,
    /// Offending input, verbatim.
    pub input: String,
}

impl PeriodParseError {
    pub(crate) fn new(category: PeriodCategory, input: &str) -> Self {
        Self {
            category,
            input: input.to_string(),
        }
    }
}

impl Display for PeriodParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} period name `{}`; expected {}",
            self.category.adjective().to_ascii_lowercase(),
            self.input,
            self.category.name_format()
        )
    }
}

impl Error for PeriodParseError {}

pub type ParseResult<T> = Result<T, PeriodParseError>;

/// Parses `YYYY-MM-DD` into a calendar date.
pub fn parse_day(name: &str) -> ParseResult<NaiveDate> {
    let category = PeriodCategory::Daily;
    let caps = DAY_RE
        .captures(name)
        .ok_or_else(|| PeriodParseError::new(category, name))?;
    let year = capture_number::<i32>(&caps, 1, category, name)?;
    let month = capture_number::<u32>(&caps, 2, category, name)?;
    let day = capture_number::<u32>(&caps, 3, category, name)?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| PeriodParseError::new(category, name))
}

/// Parses `YYYY-Www` into `(iso_year, week)`.
pub fn parse_week(name: &str) -> ParseResult<(i32, u32)> {
    let category = PeriodCategory::Weekly;
    let caps = WEEK_RE
        .captures(name)
        .ok_or_else(|| PeriodParseError::new(category, name))?;
    let year = capture_number::<i32>(&caps, 1, category, name)?;
    let week = capture_number::<u32>(&caps, 2, category, name)?;
    if !(1..=53).contains(&week) {
        return Err(PeriodParseError::new(category, name));
    }
    Ok((year, week))
}

/// Parses `YYYY-MM` into `(year, month)`.
pub fn parse_month(name: &str) -> ParseResult<(i32, u32)> {
    let category = PeriodCategory::Monthly;
    let caps = MONTH_RE
        .captures(name)
        .ok_or_else(|| PeriodParseError::new(category, name))?;
    let year = capture_number::<i32>(&caps, 1, category, name)?;
    let month = capture_number::<u32>(&caps, 2, category, name)?;
    if !(1..=12).contains(&month) {
        return Err(PeriodParseError::new(category, name));
    }
    Ok((year, month))
}

/// Parses `YYYY-Qq` into `(year, quarter)`.
pub fn parse_quarter(name: &str) -> ParseResult<(i32, u32)> {
    let category = PeriodCategory::Quarterly;
    let caps = QUARTER_RE
        .captures(name)
        .ok_or_else(|| PeriodParseError::new(category, name))?;
    let year = capture_number::<i32>(&caps, 1, category, name)?;
    let quarter = capture_number::<u32>(&caps, 2, category, name)?;
    Ok((year, quarter))
}

/// Parses `YYYY` into a year.
pub fn parse_year(name: &str) -> ParseResult<i32> {
    let category = PeriodCategory::Yearly;
    let caps = YEAR_RE
        .captures(name)
        .ok_or_else(|| PeriodParseError::new(category, name))?;
    capture_number::<i32>(&caps, 1, category, name)
}

fn capture_number<T: std::str::FromStr>(
    caps: &Captures<'_>,
    index: usize,
    category: PeriodCategory,
    name: &str,
) -> ParseResult<T> {
    caps.get(index)
        .and_then(|m| m.as_str().parse::<T>().ok())
        .ok_or_else(|| PeriodParseError::new(category, name))
}

#[cfg(test)]
mod tests {
    use super::{parse_day, parse_month, parse_quarter, parse_week, parse_year};
    use crate::model::period::PeriodCategory;
    use chrono::NaiveDate;

    #[test]
    fn parse_day_accepts_valid_dates_only() {
        assert_eq!(
            parse_day("2025-01-13").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 13).unwrap()
        );
        assert!(parse_day("2025-02-30").is_err());
        assert!(parse_day("2025-1-13").is_err());
        assert!(parse_day("notes").is_err());
        assert!(parse_day("2025-01-13.bak").is_err());
    }

    #[test]
    fn parse_week_rejects_out_of_range_and_loose_forms() {
        assert_eq!(parse_week("2025-W03").unwrap(), (2025, 3));
        assert_eq!(parse_week("2020-W53").unwrap(), (2020, 53));
        assert!(parse_week("2025-W00").is_err());
        assert!(parse_week("2025-W54").is_err());
        assert!(parse_week("2025-w03").is_err());
        assert!(parse_week("2025-W3").is_err());
    }

    #[test]
    fn parse_month_quarter_year() {
        assert_eq!(parse_month("2025-12").unwrap(), (2025, 12));
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("2025-00").is_err());
        assert_eq!(parse_quarter("2025-Q4").unwrap(), (2025, 4));
        assert!(parse_quarter("2025-Q5").is_err());
        assert!(parse_quarter("2025-q1").is_err());
        assert_eq!(parse_year("2025").unwrap(), 2025);
        assert!(parse_year("25").is_err());
    }

    #[test]
    fn error_names_category_and_input() {
        let error = parse_week("garbage").expect_err("garbage must not parse");
        assert_eq!(error.category, PeriodCategory::Weekly);
        assert_eq!(error.input, "garbage");
        let message = error.to_string();
        assert!(message.contains("garbage"));
        assert!(message.contains("YYYY-Www"));
    }
}
