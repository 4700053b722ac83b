//! Calendar helpers shared by the rule parser and the recurrence engine.
//!
//! Dates travel between the core and its callers as 8-digit `YYYYMMDD`
//! strings. `DD.MM.YYYY` is only used for free-text search.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// Storage/wire format of a task date.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Human display format, accepted by search.
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Gregorian leap year test.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the last day of `month` in `year`, taken as the day before the
/// first of the following month. `None` for an invalid month or a year
/// outside chrono's range.
pub fn last_day_of_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|d| d.day())
}

/// Weekday number with Monday = 1 ... Sunday = 7.
#[inline]
pub fn weekday_number(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// Shifts `date` by whole years. February 29 lands on March 1 when the
/// target year has no leap day.
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Parses a strict `YYYYMMDD` date.
pub fn parse_date(text: &str) -> Result<NaiveDate, CoreError> {
    let invalid = || CoreError::InvalidDate(text.to_string());

    if text.len() != 8 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let year: i32 = text[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = text[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = text[6..8].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `DD.MM.YYYY` date as typed into the search box.
pub fn parse_display_date(text: &str) -> Option<NaiveDate> {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'.' || bytes[5] != b'.' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let day: u32 = text[0..2].parse().ok()?;
    let month: u32 = text[3..5].parse().ok()?;
    let year: i32 = text[6..10].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
