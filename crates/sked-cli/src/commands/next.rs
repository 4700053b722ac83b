use anyhow::{bail, Context, Result};
use sked_core::calendar::parse_date;
use sked_core::recurrence::next_date;

use crate::cli::NextCommand;

/// Prints the bare next date, with no decoration, so scripts can use it.
pub fn preview_next_date(command: NextCommand) -> Result<()> {
    if command.now.is_empty() || command.date.is_empty() || command.repeat.is_empty() {
        bail!("--now, --date and --repeat are all required");
    }

    let now = parse_date(&command.now).context("invalid --now value")?;
    let next = next_date(now, &command.date, &command.repeat)
        .with_context(|| format!("cannot compute next date for rule '{}'", command.repeat))?;

    tracing::debug!(now = %command.now, date = %command.date, repeat = %command.repeat, next = %next, "computed next date");
    println!("{}", next);
    Ok(())
}
