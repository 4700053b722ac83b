use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use owo_colors::{OwoColorize, Style};
use sked_core::models::Task;
use sked_core::normalize::normalize;

use crate::cli::AddCommand;

/// Settles the due date of a new task and prints the record, ready for
/// storage, as JSON on stdout.
pub fn add_task(command: AddCommand, now: NaiveDateTime) -> Result<()> {
    let mut task = Task {
        id: String::new(),
        date: command.date.unwrap_or_default(),
        title: command.title,
        comment: command.comment.unwrap_or_default(),
        repeat: command.repeat.unwrap_or_default(),
    };

    normalize(&mut task, now).context("task rejected")?;
    tracing::info!(date = %task.date, repeat = %task.repeat, "task date settled");

    let success_style = Style::new().green().bold();
    if task.is_recurring() {
        eprintln!(
            "{} Recurring task '{}' due {} ({})",
            "✓".style(success_style),
            task.title,
            task.date.yellow(),
            task.repeat
        );
    } else {
        eprintln!("{} Task '{}' due {}", "✓".style(success_style), task.title, task.date.yellow());
    }

    println!("{}", serde_json::to_string(&task)?);
    Ok(())
}
