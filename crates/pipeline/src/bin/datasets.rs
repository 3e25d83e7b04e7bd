use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pipeline::run::{self, DataPaths, ProgressTarget};
use records::QualificationGating;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cfc-datasets")]
#[command(about = "Derives the published chess-federation tables from the raw CSV exports", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding players.csv, events.csv and results.csv.
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    data_dir: PathBuf,

    /// Directory the derived tables are written to.
    #[arg(long, env = "OUT_DIR", default_value = "./derived")]
    out_dir: PathBuf,

    /// Override the players table location.
    #[arg(long)]
    players: Option<PathBuf>,

    /// Override the events table location.
    #[arg(long)]
    events: Option<PathBuf>,

    /// Override the results table location.
    #[arg(long)]
    results: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the national-masters table.
    Masters {
        /// Let quick and blitz sections count toward the title checks.
        #[arg(long)]
        all_types: bool,
    },
    /// Write the tournament history for one player, or for every master.
    Progress {
        /// Player to track; defaults to a demo id.
        cfc_id: Option<String>,

        /// Write one history report per national master instead.
        #[arg(long, conflicts_with = "cfc_id")]
        all: bool,

        /// Sort entries by event date instead of source order.
        #[arg(long)]
        chronological: bool,

        /// Let quick and blitz sections count toward the title checks.
        #[arg(long)]
        all_types: bool,
    },
    /// Count members whose registration is still valid.
    Active {
        /// Date to check against; defaults to today.
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Rank organizers by number of events run.
    Organizers,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("datasets={},pipeline={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut paths = DataPaths::from_dir(&cli.data_dir);
    if let Some(players) = cli.players {
        paths.players = players;
    }
    if let Some(events) = cli.events {
        paths.events = events;
    }
    if let Some(results) = cli.results {
        paths.results = results;
    }

    let outcome = match cli.command {
        Commands::Masters { all_types } => {
            run::run_masters(paths, cli.out_dir, gating(all_types)).await.map(|_| ())
        }
        Commands::Progress {
            cfc_id,
            all,
            chronological,
            all_types,
        } => {
            let target = if all {
                ProgressTarget::AllMasters
            } else {
                ProgressTarget::Single(cfc_id.unwrap_or_else(|| run::DEFAULT_PROGRESS_ID.to_string()))
            };
            run::run_progress(paths, cli.out_dir, target, chronological, gating(all_types))
                .await
                .map(|_| ())
        }
        Commands::Active { as_of } => {
            let as_of = as_of.unwrap_or_else(|| chrono::Utc::now().date_naive());
            run::run_active(paths.players, cli.out_dir, as_of).await.map(|_| ())
        }
        Commands::Organizers => run::run_organizers(paths.events, cli.out_dir).await.map(|_| ()),
    };

    if let Err(err) = outcome {
        if err.is_fatal() {
            return Err(err.into());
        }
        // A failed report write leaves the rest of the run's output in
        // place and exits clean.
        tracing::error!("run finished with partial output: {}", err);
    }

    Ok(())
}

fn gating(all_types: bool) -> QualificationGating {
    if all_types {
        QualificationGating::AllRatingTypes
    } else {
        QualificationGating::RegularOnly
    }
}
