//! Date rules applied to task records before they reach storage.

use chrono::NaiveDateTime;

use crate::calendar::{format_date, parse_date};
use crate::error::CoreError;
use crate::models::Task;
use crate::recurrence::next_date;

/// Decides the stored date of a newly created task.
///
/// * empty date: today
/// * past date, no rule: today
/// * past date with a rule: the rule's next date from the given one
/// * today: today, the rule is not evaluated
/// * future date: kept
///
/// Dates are compared by calendar day; the time of `now` is ignored.
pub fn normalize(task: &mut Task, now: NaiveDateTime) -> Result<(), CoreError> {
    if task.title.trim().is_empty() {
        return Err(CoreError::MissingTitle);
    }

    let today = now.date();
    if task.date.is_empty() {
        task.date = format_date(today);
    }
    let date = parse_date(&task.date)?;

    task.date = if date < today {
        if task.is_recurring() {
            next_date(today, &task.date, &task.repeat).map_err(CoreError::malformed_repeat)?
        } else {
            format_date(today)
        }
    } else if date == today {
        format_date(today)
    } else {
        format_date(date)
    };
    Ok(())
}

/// Checks an edited task before it replaces the stored one.
///
/// The record must carry its identifier and a title, a valid date, and a rule
/// that can produce a next date. The task itself is not modified.
pub fn validate_update(task: &Task, now: NaiveDateTime) -> Result<(), CoreError> {
    if task.id.trim().is_empty() {
        return Err(CoreError::MissingId);
    }
    if task.title.trim().is_empty() {
        return Err(CoreError::MissingTitle);
    }
    parse_date(&task.date)?;
    next_date(now.date(), &task.date, &task.repeat).map_err(CoreError::malformed_repeat)?;
    Ok(())
}
