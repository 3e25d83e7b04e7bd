use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use records::models::{Event, Player, RatingHistoryEntry, sort_history_by_date};
use records::services::membership::active_players;
use records::services::organizers::organizer_leaderboard;
use records::{
    Aggregation, Aggregator, AggregatorOptions, EventIndex, HistoryCapture, NationalMaster,
    QualificationGating, RegularRoster, national_masters,
};
use tracing::{error, info, warn};

use crate::error::Result;
use crate::{reports, sources};

/// Player shown by the history command when no id is given.
pub const DEFAULT_PROGRESS_ID: &str = "106488";

/// Locations of the three raw federation tables.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub players: PathBuf,
    pub events: PathBuf,
    pub results: PathBuf,
}

impl DataPaths {
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            players: dir.join("players.csv"),
            events: dir.join("events.csv"),
            results: dir.join("results.csv"),
        }
    }
}

/// Whose history the progress run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressTarget {
    Single(String),
    AllMasters,
}

/// Outcome of a progress run: reports written and write failures absorbed.
#[derive(Debug, Default)]
pub struct ProgressOutcome {
    pub written: Vec<PathBuf>,
    pub failed: usize,
}

/// Loads the two lookup tables in parallel and joins before returning. The
/// results stream must never race the reference data: eligibility and
/// enrichment are read-only by the time the main pass starts.
pub async fn load_reference(paths: &DataPaths) -> Result<(Vec<Player>, Vec<Event>)> {
    let players_path = paths.players.clone();
    let events_path = paths.events.clone();
    let (players, events) = tokio::try_join!(
        tokio::task::spawn_blocking(move || sources::load_players(&players_path)),
        tokio::task::spawn_blocking(move || sources::load_events(&events_path)),
    )?;
    Ok((players?, events?))
}

fn aggregate(
    paths: &DataPaths,
    players: &[Player],
    events: Vec<Event>,
    options: AggregatorOptions,
) -> Result<Aggregation> {
    let roster = RegularRoster::build(players);
    let index = EventIndex::build(events);
    if roster.is_empty() {
        warn!("players table has no regular-rated players; nothing can qualify");
    }
    info!(
        "aggregating: {} eligible players, {} indexed events",
        roster.len(),
        index.len()
    );
    let rows = sources::stream_results(&paths.results)?;
    Ok(Aggregator::process(rows, &roster, &index, options))
}

/// Derives the national-masters table and writes it to the output directory.
pub async fn run_masters(
    paths: DataPaths,
    out_dir: PathBuf,
    gating: QualificationGating,
) -> Result<Vec<NationalMaster>> {
    let (players, events) = load_reference(&paths).await?;
    let masters = tokio::task::spawn_blocking(move || -> Result<Vec<NationalMaster>> {
        let options = AggregatorOptions {
            gating,
            history: HistoryCapture::Off,
        };
        let outcome = aggregate(&paths, &players, events, options)?;
        Ok(national_masters(&outcome.aggregates))
    })
    .await??;

    let report = out_dir.join("national_masters.csv");
    reports::write_masters(&report, &masters)?;
    info!("wrote {} national masters to {}", masters.len(), report.display());
    Ok(masters)
}

/// Writes the tournament history for one player, or one report per national
/// master. Per-file write failures are logged and counted, never fatal.
pub async fn run_progress(
    paths: DataPaths,
    out_dir: PathBuf,
    target: ProgressTarget,
    chronological: bool,
    gating: QualificationGating,
) -> Result<ProgressOutcome> {
    let (players, events) = load_reference(&paths).await?;
    let capture = match &target {
        ProgressTarget::Single(cfc_id) => HistoryCapture::Single(cfc_id.clone()),
        ProgressTarget::AllMasters => HistoryCapture::Everyone,
    };
    let outcome = tokio::task::spawn_blocking(move || -> Result<Aggregation> {
        let options = AggregatorOptions {
            gating,
            history: capture,
        };
        aggregate(&paths, &players, events, options)
    })
    .await??;

    let tracked: Vec<String> = match &target {
        ProgressTarget::Single(cfc_id) => vec![cfc_id.clone()],
        ProgressTarget::AllMasters => national_masters(&outcome.aggregates)
            .into_iter()
            .map(|master| master.cfc_id)
            .collect(),
    };

    let mut progress = ProgressOutcome::default();
    for cfc_id in &tracked {
        let mut history: Vec<RatingHistoryEntry> =
            outcome.histories.get(cfc_id).cloned().unwrap_or_default();
        if chronological {
            sort_history_by_date(&mut history);
        }
        let path = reports::history_path(&out_dir, cfc_id);
        match reports::write_history(&path, &history) {
            Ok(()) => {
                info!("wrote {} history entries to {}", history.len(), path.display());
                progress.written.push(path);
            }
            Err(err) => {
                error!("{err}");
                progress.failed += 1;
            }
        }
    }
    Ok(progress)
}

/// Counts members whose registration is valid on `as_of` and writes them to
/// the active-players table.
pub async fn run_active(players_path: PathBuf, out_dir: PathBuf, as_of: NaiveDate) -> Result<usize> {
    let players = tokio::task::spawn_blocking(move || sources::load_players(&players_path)).await??;
    let active = active_players(&players, as_of);

    let report = out_dir.join("active_players.csv");
    reports::write_active(&report, &active)?;
    info!(
        "{} of {} players active on {}, written to {}",
        active.len(),
        players.len(),
        as_of,
        report.display()
    );
    Ok(active.len())
}

/// Ranks organizers by events run and writes the leaderboard.
pub async fn run_organizers(events_path: PathBuf, out_dir: PathBuf) -> Result<usize> {
    let events = tokio::task::spawn_blocking(move || sources::load_events(&events_path)).await??;
    let board = organizer_leaderboard(&events);

    let report = out_dir.join("organizers.csv");
    reports::write_organizers(&report, &board)?;
    info!("{} organizers ranked, written to {}", board.len(), report.display());
    Ok(board.len())
}
