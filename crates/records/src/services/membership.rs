use chrono::NaiveDate;

use crate::models::Player;

/// Players whose membership is still valid on the given date, sorted by id.
/// A regular rating is deliberately not required here: unrated members are
/// still members.
pub fn active_players(players: &[Player], as_of: NaiveDate) -> Vec<&Player> {
    let mut active: Vec<&Player> = players
        .iter()
        .filter(|player| player.is_active_on(as_of))
        .collect();
    active.sort_by(|a, b| a.cfc_id.cmp(&b.cfc_id));
    active
}
