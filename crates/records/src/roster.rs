use std::collections::HashSet;

use crate::models::Player;

/// The set of players eligible for qualification accounting. A cross-table
/// row whose player is not on the roster is skipped entirely: results alone
/// cannot make a player eligible.
#[derive(Debug, Default)]
pub struct RegularRoster {
    ids: HashSet<String>,
}

impl RegularRoster {
    pub fn build(players: &[Player]) -> Self {
        let ids = players
            .iter()
            .filter(|player| player.has_regular_rating())
            .map(|player| player.cfc_id.clone())
            .collect();
        Self { ids }
    }

    pub fn contains(&self, cfc_id: &str) -> bool {
        self.ids.contains(cfc_id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
