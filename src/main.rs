// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dailymile feed command-line tool
//!
//! Fetches a user's Dailymile entries into a local JSON file and searches
//! and summarizes them.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use dailymile_feed::{
    config::Config,
    services::{storage, DailymileClient},
    EntryCollection, FilterCriteria,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "dailymile", version, about = "Fetch and query a Dailymile feed")]
struct Cli {
    /// Local entries file (overrides DAILYMILE_ENTRIES_FILE)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Dailymile username (overrides DAILYMILE_USER)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch one page of entries and replace the local file
    Fetch {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Fetch entries newer than the newest stored one and merge them
    Sync,
    /// List entries matching the search criteria
    Find(SearchArgs),
    /// Print total distance and average pace of matching entries
    Stats(SearchArgs),
    /// Remove an entry by id (-1 removes the first entry)
    Remove {
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Start date, YY/M/D or YY/M
    #[arg(long, default_value = "")]
    from: String,
    /// End date (inclusive), YY/M/D or YY/M
    #[arg(long, default_value = "")]
    to: String,
    /// Regular expression matched against title and message
    #[arg(long, default_value = "")]
    pattern: String,
    /// Workout type, e.g. running
    #[arg(long = "type", default_value = "")]
    workout_type: String,
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(&self.from, &self.to, &self.pattern, &self.workout_type)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(file) = cli.file {
        config.entries_file = file;
    }
    if let Some(user) = cli.user {
        config.user = Some(user);
    }

    match cli.command {
        Command::Fetch { page } => {
            let client = DailymileClient::with_timeout(&config.api_url, config.timeout)?;
            let user = config.require_user()?;
            let entries = client.entries_by_page(user, page).await?;
            storage::save(&config.entries_file, &entries)?;
            tracing::info!(user, page, count = entries.len(), "Fetched entries");
            println!("Saved {} entries", entries.len());
        }
        Command::Sync => {
            let client = DailymileClient::with_timeout(&config.api_url, config.timeout)?;
            let user = config.require_user()?;
            let mut entries = load_or_empty(&config)?;
            let since = entries.latest_time().map(|t| t.timestamp()).unwrap_or(0);
            let newer = client.entries_since(user, since).await?;
            let added = entries.merge_newer(newer);
            storage::save(&config.entries_file, &entries)?;
            tracing::info!(user, since, added, "Synced entries");
            println!("Added {} entries ({} total)", added, entries.len());
        }
        Command::Find(args) => {
            let entries = storage::load(&config.entries_file)?.filter(&args.criteria())?;
            for entry in &entries {
                print_entry(entry);
            }
        }
        Command::Stats(args) => {
            let entries = storage::load(&config.entries_file)?.filter(&args.criteria())?;
            println!("Workouts:       {}", entries.len());
            println!("Total distance: {:.2}", entries.total_distance());
            println!("Average pace:   {}", entries.average_pace_str());
        }
        Command::Remove { id } => {
            let mut entries = storage::load(&config.entries_file)?;
            let removed = entries.remove(id)?;
            storage::save(&config.entries_file, &entries)?;
            println!("Removed entry {}", removed.id);
        }
    }

    Ok(())
}

fn load_or_empty(config: &Config) -> anyhow::Result<EntryCollection> {
    if !config.entries_file.exists() {
        return Ok(EntryCollection::default());
    }
    storage::load(&config.entries_file)
        .with_context(|| format!("Failed to load {}", config.entries_file.display()))
}

fn print_entry(entry: &dailymile_feed::Entry) {
    let Some(workout) = entry.active_workout() else {
        return;
    };
    let pace = workout.pace_str().unwrap_or_default();
    println!(
        "{:>10}  {}  {:<10} {:>6.2} {:<10} {:>8}  {:>7}/unit  {}",
        entry.id,
        entry.at,
        workout.kind,
        workout.distance.value,
        workout.distance.units,
        workout.duration_str(),
        pace,
        workout.title
    );
}

/// Initialize logging to stderr; `LOG_FORMAT=json` selects structured JSON.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dailymile_feed=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
