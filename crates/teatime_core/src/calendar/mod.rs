//! Calendar arithmetic and canonical period naming.
//!
//! # Responsibility
//! - Map a date to its day/week/month/quarter/year identifiers.
//! - Expand a period identifier into the child periods it covers.
//!
//! # Invariants
//! - Every function is pure; "today" is always an argument, never read here.
//! - Weeks follow ISO 8601: Monday start, week 1 contains January 4th.
//! - Quarters are fixed 3-month blocks starting Jan/Apr/Jul/Oct.
//! - Malformed names yield `PeriodParseError`, never a panic.

mod parse;

pub use parse::{
    parse_day, parse_month, parse_quarter, parse_week, parse_year, ParseResult, PeriodParseError,
};

use crate::model::period::PeriodCategory;
use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

/// Returns the canonical name of the `category` period containing `date`.
pub fn period_identifier(date: NaiveDate, category: PeriodCategory) -> String {
    match category {
        PeriodCategory::Daily => format!(
            "{:04}-{:02}-{:02}",
            date.year(),
            date.month(),
            date.day()
        ),
        PeriodCategory::Weekly => {
            let week = date.iso_week();
            week_name(week.year(), week.week())
        }
        PeriodCategory::Monthly => month_name_id(date.year(), date.month()),
        PeriodCategory::Quarterly => quarter_of(date),
        PeriodCategory::Yearly => format!("{:04}", date.year()),
    }
}

/// Default name for a new note of `category`, relative to `today`.
pub fn default_name(category: PeriodCategory, today: NaiveDate) -> String {
    period_identifier(today, category)
}

/// Returns `YYYY-Qq` for the quarter containing `date`.
pub fn quarter_of(date: NaiveDate) -> String {
    format!("{:04}-Q{}", date.year(), quarter_number(date.month()))
}

/// Quarter number (1..=4) for a month number (1..=12).
pub fn quarter_number(month: u32) -> u32 {
    (month.saturating_sub(1)) / 3 + 1
}

/// Monday starting the ISO week named `name` (`YYYY-Www`).
///
/// Locates January 4th, steps back to that week's Monday, then adds
/// `(week - 1) * 7` days.
pub fn monday_of_iso_week(name: &str) -> ParseResult<NaiveDate> {
    let (year, week) = parse_week(name)?;
    let out_of_range = || PeriodParseError::new(PeriodCategory::Weekly, name);

    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).ok_or_else(out_of_range)?;
    // Sunday counts as 7.
    let back = u64::from(jan4.weekday().number_from_monday() - 1);
    let monday_week1 = jan4
        .checked_sub_days(Days::new(back))
        .ok_or_else(out_of_range)?;
    monday_week1
        .checked_add_days(Days::new(u64::from(week - 1) * 7))
        .ok_or_else(out_of_range)
}

/// The seven dates Monday..Sunday of the ISO week `name`.
pub fn days_of_week(name: &str) -> ParseResult<Vec<NaiveDate>> {
    let monday = monday_of_iso_week(name)?;
    let days: Vec<NaiveDate> = monday.iter_days().take(7).collect();
    if days.len() != 7 {
        return Err(PeriodParseError::new(PeriodCategory::Weekly, name));
    }
    Ok(days)
}

/// ISO week identifiers touching any day of month `name` (`YYYY-MM`), in
/// first-occurrence order without duplicates.
pub fn weeks_overlapping_month(name: &str) -> ParseResult<Vec<String>> {
    let (year, month) = parse_month(name)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| PeriodParseError::new(PeriodCategory::Monthly, name))?;

    let mut weeks: Vec<String> = first
        .iter_days()
        .take_while(|day| day.month() == month)
        .map(|day| period_identifier(day, PeriodCategory::Weekly))
        .collect();
    // Days are walked in order, so duplicates are always adjacent.
    weeks.dedup();
    Ok(weeks)
}

/// The three month identifiers of quarter `name` (`YYYY-Qq`).
pub fn months_of_quarter(name: &str) -> ParseResult<Vec<String>> {
    let (year, quarter) = parse_quarter(name)?;
    let start_month = (quarter - 1) * 3 + 1;
    Ok((start_month..start_month + 3)
        .map(|month| month_name_id(year, month))
        .collect())
}

/// The four quarter identifiers of year `name` (`YYYY`).
pub fn quarters_of_year(name: &str) -> ParseResult<Vec<String>> {
    let year = parse_year(name)?;
    Ok((1..=4).map(|q| format!("{year:04}-Q{q}")).collect())
}

/// Full English weekday name, e.g. `Monday`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Full English month name for a month number, e.g. `January`.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|value| Month::try_from(value).ok())
        .map(|value| value.name())
}

fn week_name(iso_year: i32, week: u32) -> String {
    format!("{iso_year:04}-W{week:02}")
}

fn month_name_id(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn period_identifier_formats_every_category() {
        let day = date(2025, 1, 15);
        assert_eq!(period_identifier(day, PeriodCategory::Daily), "2025-01-15");
        assert_eq!(period_identifier(day, PeriodCategory::Weekly), "2025-W03");
        assert_eq!(period_identifier(day, PeriodCategory::Monthly), "2025-01");
        assert_eq!(period_identifier(day, PeriodCategory::Quarterly), "2025-Q1");
        assert_eq!(period_identifier(day, PeriodCategory::Yearly), "2025");
    }

    #[test]
    fn weekly_identifier_uses_iso_year_at_boundaries() {
        assert_eq!(
            period_identifier(date(2024, 12, 30), PeriodCategory::Weekly),
            "2025-W01"
        );
        assert_eq!(
            period_identifier(date(2021, 1, 3), PeriodCategory::Weekly),
            "2020-W53"
        );
    }

    #[test]
    fn week_one_monday_is_between_dec_29_and_jan_4() {
        for year in 1990..=2060 {
            let monday = monday_of_iso_week(&format!("{year:04}-W01")).unwrap();
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert!(monday <= date(year, 1, 4), "year {year}");
            assert!(monday >= date(year - 1, 12, 29), "year {year}");
        }
    }

    #[test]
    fn monday_of_iso_week_known_values() {
        assert_eq!(monday_of_iso_week("2025-W03").unwrap(), date(2025, 1, 13));
        assert_eq!(monday_of_iso_week("2025-W01").unwrap(), date(2024, 12, 30));
        assert_eq!(monday_of_iso_week("2020-W53").unwrap(), date(2020, 12, 28));
        assert!(monday_of_iso_week("2025/03").is_err());
    }

    #[test]
    fn days_of_week_are_seven_consecutive_from_monday() {
        let days = days_of_week("2025-W03").unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].weekday(), Weekday::Mon);
        for pair in days.windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
        assert_eq!(days[6], date(2025, 1, 19));
    }

    #[test]
    fn every_date_is_in_its_own_week() {
        let mut day = date(2019, 12, 1);
        let end = date(2026, 2, 1);
        while day < end {
            let week = period_identifier(day, PeriodCategory::Weekly);
            assert!(days_of_week(&week).unwrap().contains(&day), "{day}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn weeks_overlapping_january_2025() {
        let weeks = weeks_overlapping_month("2025-01").unwrap();
        assert_eq!(
            weeks,
            vec!["2025-W01", "2025-W02", "2025-W03", "2025-W04", "2025-W05"]
        );
        let mut sorted = weeks.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, weeks);
    }

    #[test]
    fn boundary_weeks_appear_in_both_months() {
        let december = weeks_overlapping_month("2024-12").unwrap();
        let january = weeks_overlapping_month("2025-01").unwrap();
        assert_eq!(december.last().map(String::as_str), Some("2025-W01"));
        assert_eq!(january.first().map(String::as_str), Some("2025-W01"));
        assert_eq!(december.first().map(String::as_str), Some("2024-W48"));
    }

    #[test]
    fn months_of_quarter_and_quarter_of_agree() {
        for month in 1..=12 {
            let quarter = quarter_of(date(2025, month, 1));
            let months = months_of_quarter(&quarter).unwrap();
            assert_eq!(months.len(), 3);
            assert!(months.contains(&format!("2025-{month:02}")));
        }
        assert_eq!(
            months_of_quarter("2025-Q3").unwrap(),
            vec!["2025-07", "2025-08", "2025-09"]
        );
    }

    #[test]
    fn quarters_of_year_lists_all_four() {
        assert_eq!(
            quarters_of_year("2025").unwrap(),
            vec!["2025-Q1", "2025-Q2", "2025-Q3", "2025-Q4"]
        );
        assert!(quarters_of_year("twenty").is_err());
    }

    #[test]
    fn names_for_headers() {
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn default_name_uses_supplied_today() {
        let today = date(2025, 8, 14);
        assert_eq!(default_name(PeriodCategory::Daily, today), "2025-08-14");
        assert_eq!(default_name(PeriodCategory::Weekly, today), "2025-W33");
        assert_eq!(default_name(PeriodCategory::Quarterly, today), "2025-Q3");
    }
}
