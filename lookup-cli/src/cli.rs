use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Text;
use lookup_core::{Config, HttpRecordSource, LookupView, RecordSource};
use lookup_core::error::GENERIC_FAILURE_MESSAGE;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "lookup", version, about = "Weather record lookup CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and display a stored weather record.
    Get {
        /// Weather request ID; prompted for interactively when omitted.
        id: Option<String>,
    },

    /// Configure the backend endpoint.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Get { id } => run_get(id).await,
            Command::Configure => run_configure(),
        }
    }
}

async fn run_get(id: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let source = HttpRecordSource::new(config.backend_url());

    let id = match id {
        Some(id) => id,
        None => Text::new("Weather ID:")
            .with_placeholder("Enter your weather request ID")
            .prompt()
            .context("Failed to read the weather ID")?,
    };

    let mut view = LookupView::new();
    view.set_input(id);

    if let Some(submission) = view.submit() {
        let outcome = source.fetch(&submission.id).await;
        view.resolve(&submission, outcome);
    }

    if let Some(record) = view.record() {
        println!("{}", output::render_record(record));
        Ok(())
    } else {
        let message = view.error_message().unwrap_or(GENERIC_FAILURE_MESSAGE);
        println!("{}", output::render_error(message));
        std::process::exit(1)
    }
}

fn run_configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let url = Text::new("Backend URL:")
        .with_initial_value(config.backend_url())
        .prompt()
        .context("Failed to read the backend URL")?;

    config.set_backend_url(url.trim_end_matches('/'));
    config.save()?;

    println!("Saved backend URL to {}", Config::config_file_path()?.display());
    Ok(())
}
