use clap::Parser;
use owo_colors::{OwoColorize, Style};
use sked_core::error::CoreError;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod parser;
mod util;
mod views;

fn main() {
    let cli = cli::Cli::parse();
    let config = config::Config::new().unwrap_or_else(|e| {
        eprintln!("{} ignoring configuration: {}", "Warning:".yellow().bold(), e);
        config::Config::default()
    });
    init_logging(&config);

    let today = cli.today.as_deref();
    let result = match cli.command {
        cli::Commands::Next(command) => commands::next::preview_next_date(command),
        cli::Commands::Add(command) => {
            parser::reference_time(today).and_then(|now| commands::add::add_task(command, now))
        }
        cli::Commands::Done(command) => {
            parser::reference_time(today).and_then(|now| commands::done::complete_task(command, now))
        }
        cli::Commands::Check(command) => {
            parser::reference_time(today).and_then(|now| commands::check::check_task(command, now))
        }
        cli::Commands::Search(command) => commands::search::search_tasks(command, &config),
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(config: &config::Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();
    tracing::debug!(error = ?err, "command failed");

    match err.chain().find_map(|e| e.downcast_ref::<CoreError>()) {
        Some(CoreError::MalformedRepeat(cause)) => {
            eprintln!(
                "{} repeat rule is malformed: {}",
                "Error:".style(error_style),
                cause.yellow()
            );
        }
        Some(CoreError::InvalidRuleValue { field, token }) => {
            eprintln!(
                "{} invalid {} value: '{}'",
                "Error:".style(error_style),
                field,
                token.yellow()
            );
        }
        Some(core_error @ (CoreError::MissingTitle | CoreError::MissingId | CoreError::InvalidDate(_))) => {
            eprintln!("{} {}", "Error:".style(error_style), core_error);
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
