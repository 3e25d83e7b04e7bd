use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use records::NationalMaster;
use records::models::{Player, RatingHistoryEntry};
use records::services::organizers::OrganizerCount;
use serde::Serialize;

use crate::error::{PipelineError, Result};

const MASTERS_HEADERS: [&str; 2] = ["cfc_id", "tournaments"];
const HISTORY_HEADERS: [&str; 9] = [
    "eventId",
    "eventDate",
    "eventName",
    "eventLocation",
    "numPlayers",
    "organizer",
    "score",
    "ratingPerf",
    "ratingPost",
];
const ACTIVE_HEADERS: [&str; 3] = ["cfc_id", "cfc_expiry", "regular_rating"];
const ORGANIZER_HEADERS: [&str; 2] = ["organizer_id", "events"];

pub fn write_masters(path: &Path, masters: &[NationalMaster]) -> Result<()> {
    write_table(path, &MASTERS_HEADERS, masters)
}

/// Path of the per-player history report inside the output directory.
pub fn history_path(out_dir: &Path, cfc_id: &str) -> PathBuf {
    out_dir.join(format!("rating-history-{cfc_id}.csv"))
}

pub fn write_history(path: &Path, entries: &[RatingHistoryEntry]) -> Result<()> {
    write_table(path, &HISTORY_HEADERS, entries)
}

#[derive(Serialize)]
struct ActiveRow<'a> {
    cfc_id: &'a str,
    cfc_expiry: String,
    regular_rating: Option<i32>,
}

pub fn write_active(path: &Path, players: &[&Player]) -> Result<()> {
    let rows: Vec<ActiveRow> = players
        .iter()
        .map(|player| ActiveRow {
            cfc_id: &player.cfc_id,
            cfc_expiry: format_date(player.expiry),
            regular_rating: player.regular_rating,
        })
        .collect();
    write_table(path, &ACTIVE_HEADERS, &rows)
}

pub fn write_organizers(path: &Path, board: &[OrganizerCount]) -> Result<()> {
    write_table(path, &ORGANIZER_HEADERS, board)
}

/// Writes one report table. The header row is written explicitly so an
/// empty report is still a valid table, and the output directory is created
/// on demand.
fn write_table<S: Serialize>(path: &Path, headers: &[&str], rows: &[S]) -> Result<()> {
    let report_error = |source: csv::Error| PipelineError::ReportWrite {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| report_error(csv::Error::from(err)))?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(report_error)?;
    writer.write_record(headers).map_err(report_error)?;
    for row in rows {
        writer.serialize(row).map_err(report_error)?;
    }
    writer.flush().map_err(|err| report_error(csv::Error::from(err)))?;
    Ok(())
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}
