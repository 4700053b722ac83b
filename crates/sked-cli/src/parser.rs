use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime, NaiveTime};
use sked_core::calendar::parse_date;

/// The moment commands treat as "now": midnight of `--today` when given,
/// otherwise the local clock.
pub fn reference_time(today: Option<&str>) -> Result<NaiveDateTime> {
    match today {
        Some(text) => {
            let date = parse_date(text).with_context(|| format!("invalid --today value '{}'", text))?;
            Ok(date.and_time(NaiveTime::MIN))
        }
        None => Ok(Local::now().naive_local()),
    }
}
