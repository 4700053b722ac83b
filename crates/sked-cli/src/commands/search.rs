use anyhow::Result;
use serde_json::json;
use sked_core::query::{select, SearchQuery};

use crate::cli::SearchCommand;
use crate::config::Config;
use crate::util::read_tasks;
use crate::views::table::display_tasks;

pub fn search_tasks(command: SearchCommand, config: &Config) -> Result<()> {
    let tasks = read_tasks(&command.input)?;
    let query = SearchQuery::parse(&command.query);
    let limit = command.limit.unwrap_or(config.list_limit);

    let found = select(tasks, query.as_ref(), limit);
    tracing::debug!(?query, limit, found = found.len(), "search finished");

    if command.json {
        println!("{}", json!({ "tasks": found }));
    } else {
        display_tasks(&found);
    }
    Ok(())
}
