use std::fmt;

use thiserror::Error;

/// Which numeric field of a repeat rule a rejected token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    Interval,
    Weekday,
    MonthDay,
    Month,
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleField::Interval => "day interval (1-400)",
            RuleField::Weekday => "weekday (1-7)",
            RuleField::MonthDay => "day of month (-2..31)",
            RuleField::Month => "month (1-12)",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("invalid date: '{0}', expected format YYYYMMDD")]
    InvalidDate(String),

    #[error("unsupported repeat rule format: '{0}'")]
    UnsupportedRule(String),

    #[error("invalid {field} value: '{token}'")]
    InvalidRuleValue { field: RuleField, token: String },

    #[error("title is required")]
    MissingTitle,

    #[error("task identifier is required")]
    MissingId,

    #[error("repeat rule is malformed: {0}")]
    MalformedRepeat(#[source] Box<CoreError>),

    #[error("no date matches repeat rule '{0}'")]
    NoOccurrence(String),

    #[error("date arithmetic out of range")]
    DateOverflow,
}

impl CoreError {
    pub(crate) fn invalid_value(field: RuleField, token: &str) -> Self {
        CoreError::InvalidRuleValue {
            field,
            token: token.to_string(),
        }
    }

    /// Wraps a recurrence failure the way the task paths report it.
    pub(crate) fn malformed_repeat(err: CoreError) -> Self {
        CoreError::MalformedRepeat(Box::new(err))
    }
}
