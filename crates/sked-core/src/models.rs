use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::recurrence::next_date;
use crate::rule::Rule;

/// A task record as exchanged with storage and API callers.
///
/// All fields keep their wire representation: `date` is `YYYYMMDD` (empty
/// before normalization) and `repeat` is raw rule text (empty for one-off
/// tasks). Empty optional fields are omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque identifier assigned by storage.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repeat: String,
}

/// What storage should do with a task that was marked done.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Completion {
    /// One-off task: remove the record.
    Delete,
    /// Recurring task: keep the record, move it to `date`.
    Reschedule { date: String },
}

impl Task {
    pub fn is_recurring(&self) -> bool {
        !self.repeat.is_empty()
    }

    /// The stored repeat rule, parsed.
    pub fn rule(&self) -> Result<Rule, CoreError> {
        self.repeat.parse()
    }

    /// Decides the outcome of marking this task done at `now`.
    ///
    /// Recurring tasks advance from their stored date; the title, comment
    /// and rule are left as they are.
    pub fn complete(&self, now: NaiveDateTime) -> Result<Completion, CoreError> {
        if !self.is_recurring() {
            return Ok(Completion::Delete);
        }
        let date = next_date(now.date(), &self.date, &self.repeat)
            .map_err(CoreError::malformed_repeat)?;
        Ok(Completion::Reschedule { date })
    }

    /// Applies a completion outcome to the in-memory record.
    pub fn apply(&mut self, completion: &Completion) {
        if let Completion::Reschedule { date } = completion {
            self.date.clone_from(date);
        }
    }
}
