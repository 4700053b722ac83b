//! Next due date computation for repeat rules.
//!
//! [`next_date`] is the string-level entry point used by the preview query and
//! the task paths; [`next_occurrence`] works on typed values.

use chrono::{Datelike, Days, NaiveDate};

use crate::calendar::{self, add_years, last_day_of_month, weekday_number};
use crate::error::CoreError;
use crate::rule::{Rule, LAST_DAY, SECOND_TO_LAST_DAY};

/// Upper bound on months visited by a single monthly search. Twelve years is
/// enough for any satisfiable rule (the longest gap is a February 29 across a
/// skipped century leap year, eight years).
pub const MONTH_SEARCH_LIMIT: u32 = 12 * 12;

/// Computes the next due date for `rule` anchored at `anchor`, relative to `now`.
///
/// Both dates use the `YYYYMMDD` format. An empty rule returns the anchor
/// unchanged.
pub fn next_date(now: NaiveDate, anchor: &str, rule: &str) -> Result<String, CoreError> {
    let anchor = calendar::parse_date(anchor)?;
    let rule: Rule = rule.parse()?;
    let next = occurrence(now, anchor, &rule)?;
    Ok(calendar::format_date(next))
}

/// Typed form of [`next_date`].
///
/// The rule is re-checked first, so a hand-built rule with out-of-range or
/// unsorted members behaves exactly like its parsed text.
pub fn next_occurrence(now: NaiveDate, anchor: NaiveDate, rule: &Rule) -> Result<NaiveDate, CoreError> {
    occurrence(now, anchor, &rule.validated()?)
}

/// `rule` must come from parsing or [`Rule::validated`].
fn occurrence(now: NaiveDate, anchor: NaiveDate, rule: &Rule) -> Result<NaiveDate, CoreError> {
    match rule {
        Rule::None => Ok(anchor),
        Rule::EveryNDays { n } => every_n_days(now, anchor, *n),
        Rule::Yearly => yearly(now, anchor),
        Rule::WeeklyOnDays { days } if days.is_empty() => Err(CoreError::NoOccurrence(rule.to_string())),
        Rule::WeeklyOnDays { days } => weekly(now, anchor, days).ok_or(CoreError::DateOverflow),
        Rule::MonthlyOnDays { days, months } => monthly(now, anchor, days, months)
            .ok_or_else(|| CoreError::NoOccurrence(rule.to_string())),
    }
}

/// Smallest `anchor + k*n` with `k >= 1` that is not before `now`.
fn every_n_days(now: NaiveDate, anchor: NaiveDate, n: u32) -> Result<NaiveDate, CoreError> {
    let step = i64::from(n);
    let behind = (now - anchor).num_days();
    let steps = if behind <= step {
        1
    } else {
        // ceil(behind / step)
        (behind + step - 1) / step
    };

    u64::try_from(steps * step)
        .ok()
        .and_then(|days| anchor.checked_add_days(Days::new(days)))
        .ok_or(CoreError::DateOverflow)
}

fn yearly(now: NaiveDate, anchor: NaiveDate) -> Result<NaiveDate, CoreError> {
    // A leap day becomes March 1 here; later steps keep March 1.
    let mut next = add_years(anchor, 1).ok_or(CoreError::DateOverflow)?;
    while next < now {
        next = add_years(next, 1).ok_or(CoreError::DateOverflow)?;
    }
    Ok(next)
}

fn weekly(now: NaiveDate, anchor: NaiveDate, days: &[u32]) -> Option<NaiveDate> {
    let mut next = next_weekday(anchor, days)?;
    while next < now {
        next = next_weekday(next.checked_add_days(Days::new(7))?, days)?;
    }
    Some(next)
}

/// Nearest listed weekday on or after `start`, wrapping into the next week.
/// `days` is sorted and non-empty.
fn next_weekday(start: NaiveDate, days: &[u32]) -> Option<NaiveDate> {
    let current = weekday_number(start);
    let offset = match days.iter().find(|&&day| day >= current) {
        Some(&day) => day - current,
        None => 7 - current + days.first()?,
    };
    start.checked_add_days(Days::new(u64::from(offset)))
}

/// Repeats the per-month search until it lands strictly after `now`.
/// `None` when no month within [`MONTH_SEARCH_LIMIT`] has a matching day.
fn monthly(now: NaiveDate, anchor: NaiveDate, days: &[i32], months: &[u32]) -> Option<NaiveDate> {
    // Months entirely before `now` can never hold a candidate.
    let start = (anchor.year(), anchor.month()).max((now.year(), now.month()));

    let mut next = search_months(start, now, days, months)?;
    while next <= now {
        let following = following_month(next.year(), next.month())?;
        next = search_months(following, now, days, months)?;
    }
    Some(next)
}

/// Walks forward month by month from `(year, month)` and returns the first
/// month's best candidate: its earliest day strictly after `now`, or `now`
/// itself when that is the only match in the month.
fn search_months(
    (mut year, mut month): (i32, u32),
    now: NaiveDate,
    days: &[i32],
    months: &[u32],
) -> Option<NaiveDate> {
    for _ in 0..MONTH_SEARCH_LIMIT {
        if let Some(&first) = months.first() {
            match months.iter().find(|&&m| m >= month) {
                Some(&m) => month = m,
                None => {
                    month = first;
                    year = year.checked_add(1)?;
                }
            }
        }

        let last_day = last_day_of_month(year, month)?;
        let mut after: Option<NaiveDate> = None;
        let mut on_now = false;

        for &code in days {
            let Some(candidate) = resolve_day(year, month, last_day, code) else {
                continue;
            };
            if candidate > now {
                after = Some(after.map_or(candidate, |best| best.min(candidate)));
            } else if candidate == now {
                on_now = true;
            }
        }

        match (after, on_now) {
            (Some(date), _) => return Some(date),
            (None, true) => return Some(now),
            (None, false) => (year, month) = following_month(year, month)?,
        }
    }
    None
}

/// Concrete date for a day-code in the given month; ordinary days past the
/// end of the month are skipped.
fn resolve_day(year: i32, month: u32, last_day: u32, code: i32) -> Option<NaiveDate> {
    let day = match code {
        LAST_DAY => last_day,
        SECOND_TO_LAST_DAY => last_day - 1,
        code if code > 0 && code as u32 <= last_day => code as u32,
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn following_month(year: i32, month: u32) -> Option<(i32, u32)> {
    if month == 12 {
        Some((year.checked_add(1)?, 1))
    } else {
        Some((year, month + 1))
    }
}
