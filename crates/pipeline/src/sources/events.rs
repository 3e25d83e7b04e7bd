use std::path::Path;

use records::models::Event;
use records::parse;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Raw shape of one events-table row.
#[derive(Debug, Deserialize)]
struct EventRow {
    id: String,
    date_end: Option<String>,
    name: Option<String>,
    province: Option<String>,
    n_players: Option<String>,
    organizer_id: Option<String>,
}

impl EventRow {
    fn into_event(self) -> Event {
        Event {
            id: self.id,
            end_date: parse::date(self.date_end.as_deref()),
            name: self.name.unwrap_or_default(),
            province: self.province.unwrap_or_default(),
            players: parse::count(self.n_players.as_deref()),
            organizer: self.organizer_id.unwrap_or_default(),
        }
    }
}

/// Loads the events table in file order. Rows the csv layer cannot
/// deserialize are skipped with a debug trace.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    let reader = super::open_table(path)?;
    let mut events = Vec::new();
    for record in reader.into_deserialize::<EventRow>() {
        match record {
            Ok(row) => events.push(row.into_event()),
            Err(err) => debug!("skipping unreadable events row: {err}"),
        }
    }
    Ok(events)
}
