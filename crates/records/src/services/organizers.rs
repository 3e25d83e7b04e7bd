use std::collections::HashMap;

use serde::Serialize;

use crate::models::Event;

/// Output row of the organizer leaderboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrganizerCount {
    pub organizer_id: String,
    pub events: u32,
}

/// Ranks organizers by number of events run, busiest first. Ties break on
/// organizer id so the table is stable across runs. Events with no recorded
/// organizer are left out.
pub fn organizer_leaderboard(events: &[Event]) -> Vec<OrganizerCount> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for event in events {
        if event.organizer.is_empty() {
            continue;
        }
        *counts.entry(event.organizer.as_str()).or_default() += 1;
    }

    let mut board: Vec<OrganizerCount> = counts
        .into_iter()
        .map(|(organizer_id, events)| OrganizerCount {
            organizer_id: organizer_id.to_string(),
            events,
        })
        .collect();
    board.sort_by(|a, b| b.events.cmp(&a.events).then_with(|| a.organizer_id.cmp(&b.organizer_id)));
    board
}
