use chrono::NaiveDate;

use crate::calendar::{format_date, parse_display_date};
use crate::models::Task;

/// Default cap on the number of tasks returned by a listing.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// A free-text search over tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// Tasks due on exactly this date (typed as `DD.MM.YYYY`).
    OnDate(NaiveDate),
    /// Case-insensitive substring of the title or comment.
    Text(String),
}

impl SearchQuery {
    /// Interprets raw search input. Blank input means no filtering.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        Some(match parse_display_date(input) {
            Some(date) => SearchQuery::OnDate(date),
            None => SearchQuery::Text(input.to_string()),
        })
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            SearchQuery::OnDate(date) => task.date == format_date(*date),
            SearchQuery::Text(text) => {
                let needle = text.to_lowercase();
                task.title.to_lowercase().contains(&needle)
                    || task.comment.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Filters `tasks` by `query`, orders them by date (earliest first) and keeps
/// at most `limit` of them.
pub fn select(tasks: Vec<Task>, query: Option<&SearchQuery>, limit: usize) -> Vec<Task> {
    let mut selected: Vec<Task> = tasks
        .into_iter()
        .filter(|task| query.map_or(true, |q| q.matches(task)))
        .collect();
    selected.sort_by(|a, b| a.date.cmp(&b.date));
    selected.truncate(limit);
    selected
}
