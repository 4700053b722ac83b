use clap::{Parser, Subcommand};

/// Recurring task tracker: due dates from compact repeat rules
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Treat this day (YYYYMMDD) as today instead of the local date
    #[arg(long, global = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Preview the next due date for a repeat rule
    Next(NextCommand),
    /// Prepare a new task: check it and settle its due date
    Add(AddCommand),
    /// Mark a task as done
    Done(DoneCommand),
    /// Validate an edited task before it is saved
    Check(CheckCommand),
    /// Search a task list by text or by date (DD.MM.YYYY)
    Search(SearchCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct NextCommand {
    /// Reference date (YYYYMMDD)
    #[arg(long)]
    pub now: String,
    /// Anchor date the rule advances from (YYYYMMDD)
    #[arg(long)]
    pub date: String,
    /// Repeat rule, e.g. "d 7", "y", "w 1,4", "m -1,15 1,6"
    #[arg(long)]
    pub repeat: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The title of the task
    #[arg(long)]
    pub title: String,
    /// Due date (YYYYMMDD); defaults to today
    #[arg(long)]
    pub date: Option<String>,
    /// Free-form comment
    #[arg(long)]
    pub comment: Option<String>,
    /// Repeat rule; omit for a one-off task
    #[arg(long)]
    pub repeat: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// Task as JSON, a path to a JSON file, or "-" for stdin
    pub task: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckCommand {
    /// Task as JSON, a path to a JSON file, or "-" for stdin
    pub task: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchCommand {
    /// Text to look for in titles and comments, or a date as DD.MM.YYYY
    #[arg(default_value = "")]
    pub query: String,
    /// JSON file holding an array of tasks
    #[arg(short, long)]
    pub input: std::path::PathBuf,
    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
    /// Maximum number of tasks to show (overrides the configured limit)
    #[arg(long)]
    pub limit: Option<usize>,
}
