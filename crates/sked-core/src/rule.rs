//! Repeat rule grammar.
//!
//! | text             | rule                                   |
//! |------------------|----------------------------------------|
//! | `""`             | [`Rule::None`]                          |
//! | `d <n>`          | every `n` days, `n` in 1..=400          |
//! | `y`              | yearly on the anchor's anniversary      |
//! | `w <d,d,..>`     | on weekdays, 1 = Monday .. 7 = Sunday   |
//! | `m <c,..> [<m,..>]` | on day-codes (-1 last, -2 second-to-last), optionally only in the listed months |

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{CoreError, RuleField};

pub const MAX_INTERVAL_DAYS: u32 = 400;

/// Day-code for the last day of a month.
pub const LAST_DAY: i32 = -1;
/// Day-code for the second-to-last day of a month.
pub const SECOND_TO_LAST_DAY: i32 = -2;

const INTERVAL_RANGE: RangeInclusive<i32> = 1..=MAX_INTERVAL_DAYS as i32;
const WEEKDAY_RANGE: RangeInclusive<i32> = 1..=7;
const MONTH_DAY_RANGE: RangeInclusive<i32> = SECOND_TO_LAST_DAY..=31;
const MONTH_RANGE: RangeInclusive<i32> = 1..=12;

/// A validated repeat rule. List members are kept sorted and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Rule {
    #[default]
    None,
    EveryNDays {
        n: u32,
    },
    Yearly,
    WeeklyOnDays {
        days: Vec<u32>,
    },
    MonthlyOnDays {
        days: Vec<i32>,
        /// Empty means every month.
        months: Vec<u32>,
    },
}

impl Rule {
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Rule::None)
    }

    /// Checks a rule that may have been built by hand rather than parsed.
    ///
    /// Enforces the same ranges as parsing and returns the lists sorted and
    /// deduplicated. A parsed rule comes back unchanged.
    pub fn validated(&self) -> Result<Rule, CoreError> {
        let rule = match self {
            Rule::None | Rule::Yearly => self.clone(),
            Rule::EveryNDays { n } => {
                checked_list(&[*n], RuleField::Interval, &INTERVAL_RANGE)?;
                Rule::EveryNDays { n: *n }
            }
            Rule::WeeklyOnDays { days } => Rule::WeeklyOnDays {
                days: checked_list(days, RuleField::Weekday, &WEEKDAY_RANGE)?,
            },
            Rule::MonthlyOnDays { days, months } => Rule::MonthlyOnDays {
                days: checked_list(days, RuleField::MonthDay, &MONTH_DAY_RANGE)?,
                months: checked_list(months, RuleField::Month, &MONTH_RANGE)?,
            },
        };
        Ok(rule)
    }
}

impl FromStr for Rule {
    type Err = CoreError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Ok(Rule::None);
        }
        if text == "y" {
            return Ok(Rule::Yearly);
        }

        if let Some(rest) = text.strip_prefix("d ") {
            let n = parse_value(rest, RuleField::Interval, INTERVAL_RANGE)?;
            return Ok(Rule::EveryNDays { n: n as u32 });
        }

        if let Some(rest) = text.strip_prefix("w ") {
            let days = parse_list(rest, RuleField::Weekday, WEEKDAY_RANGE)?
                .into_iter()
                .map(|d| d as u32)
                .collect();
            return Ok(Rule::WeeklyOnDays { days });
        }

        if let Some(rest) = text.strip_prefix("m ") {
            let mut parts = rest.split(' ');
            let days = parse_list(
                parts.next().unwrap_or_default(),
                RuleField::MonthDay,
                MONTH_DAY_RANGE,
            )?;
            let months = match parts.next() {
                Some(list) => parse_list(list, RuleField::Month, MONTH_RANGE)?
                    .into_iter()
                    .map(|m| m as u32)
                    .collect(),
                None => Vec::new(),
            };
            if parts.next().is_some() {
                return Err(CoreError::UnsupportedRule(text.to_string()));
            }
            return Ok(Rule::MonthlyOnDays { days, months });
        }

        Err(CoreError::UnsupportedRule(text.to_string()))
    }
}

/// Renders the canonical rule text; parsing it yields an equal rule.
impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::None => Ok(()),
            Rule::EveryNDays { n } => write!(f, "d {n}"),
            Rule::Yearly => f.write_str("y"),
            Rule::WeeklyOnDays { days } => write!(f, "w {}", join(days)),
            Rule::MonthlyOnDays { days, months } => {
                write!(f, "m {}", join(days))?;
                if !months.is_empty() {
                    write!(f, " {}", join(months))?;
                }
                Ok(())
            }
        }
    }
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_value(token: &str, field: RuleField, range: RangeInclusive<i32>) -> Result<i32, CoreError> {
    match token.parse::<i32>() {
        Ok(value) if range.contains(&value) => Ok(value),
        _ => Err(CoreError::invalid_value(field, token)),
    }
}

fn parse_list(list: &str, field: RuleField, range: RangeInclusive<i32>) -> Result<Vec<i32>, CoreError> {
    let mut values = list
        .split(',')
        .map(|token| parse_value(token, field, range.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    values.sort_unstable();
    values.dedup();
    Ok(values)
}

fn checked_list<T>(values: &[T], field: RuleField, range: &RangeInclusive<i32>) -> Result<Vec<T>, CoreError>
where
    T: Copy + Ord + Into<i64> + ToString,
{
    let allowed = i64::from(*range.start())..=i64::from(*range.end());
    if let Some(bad) = values.iter().find(|&&value| !allowed.contains(&Into::<i64>::into(value))) {
        return Err(CoreError::invalid_value(field, &bad.to_string()));
    }
    let mut values = values.to_vec();
    values.sort_unstable();
    values.dedup();
    Ok(values)
}
