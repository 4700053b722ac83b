use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;
use sked_core::models::Completion;

use crate::cli::DoneCommand;
use crate::util::read_task;

/// Prints what storage should do with the completed task: delete it, or move
/// it to its next date.
pub fn complete_task(command: DoneCommand, now: NaiveDateTime) -> Result<()> {
    let mut task = read_task(&command.task)?;
    let completion = task
        .complete(now)
        .with_context(|| format!("cannot complete task '{}'", task.title))?;

    match &completion {
        Completion::Delete => {
            eprintln!("Completed task: '{}'", task.title.green());
        }
        Completion::Reschedule { date } => {
            eprintln!("Completed task: '{}', next due {}", task.title.green(), date.yellow());
        }
    }
    task.apply(&completion);
    tracing::info!(id = %task.id, date = %task.date, ?completion, "task completed");

    println!("{}", serde_json::to_string(&completion)?);
    Ok(())
}
