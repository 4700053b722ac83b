use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use sked_core::normalize::validate_update;

use crate::cli::CheckCommand;
use crate::util::read_task;

pub fn check_task(command: CheckCommand, now: NaiveDateTime) -> Result<()> {
    let task = read_task(&command.task)?;
    validate_update(&task, now).context("task rejected")?;
    tracing::debug!(id = %task.id, "edited task is valid");
    println!("ok");
    Ok(())
}
