use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use sked_core::models::Task;

/// Loads a task given inline as JSON, as a file path, or as "-" for stdin.
pub fn read_task(source: &str) -> Result<Task> {
    let text = if source == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read task from stdin")?;
        buffer
    } else if source.trim_start().starts_with('{') {
        source.to_string()
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read task file '{}'", source))?
    };

    serde_json::from_str(&text).context("task is not valid JSON")
}

/// Loads a JSON array of tasks from `path`.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read task list '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("'{}' is not a JSON array of tasks", path.display()))
}
