use std::path::Path;

use records::models::Player;
use records::parse;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Raw shape of one players-table row. Numeric and date columns stay strings
/// here; per-field fallbacks are applied during conversion instead of
/// failing the row.
#[derive(Debug, Deserialize)]
struct PlayerRow {
    cfc_id: String,
    regular_rating: Option<String>,
    cfc_expiry: Option<String>,
}

impl PlayerRow {
    fn into_player(self) -> Player {
        Player {
            cfc_id: self.cfc_id,
            regular_rating: parse::rating(self.regular_rating.as_deref()),
            expiry: parse::date(self.cfc_expiry.as_deref()),
        }
    }
}

/// Loads the players table in file order. Rows the csv layer cannot
/// deserialize are skipped with a debug trace.
pub fn load_players(path: &Path) -> Result<Vec<Player>> {
    let reader = super::open_table(path)?;
    let mut players = Vec::new();
    for record in reader.into_deserialize::<PlayerRow>() {
        match record {
            Ok(row) => players.push(row.into_player()),
            Err(err) => debug!("skipping unreadable players row: {err}"),
        }
    }
    Ok(players)
}
