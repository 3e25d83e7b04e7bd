use std::collections::HashMap;

use serde::Serialize;

use crate::models::PlayerAggregate;

/// Minimum regular-rated games before the title can be awarded at all.
pub const MIN_REGULAR_GAMES: u32 = 25;
/// Per-event performance rating that counts as one qualifying result.
pub const QUALIFYING_PERFORMANCE: i32 = 2300;
/// Number of qualifying results needed on the performance route.
pub const MIN_QUALIFYING_PERFORMANCES: u32 = 3;
/// Indicator level that completes the title when paired with three
/// qualifying performances. Indicators below this never enter the running
/// best.
pub const SUPPORTING_INDICATOR: i32 = 2200;
/// Indicator level sufficient for the title on its own.
pub const QUALIFYING_INDICATOR: i32 = 2300;

/// Title predicate over the finished totals of one player. Mid-stream totals
/// are not meaningful here: the games floor can be crossed after the last
/// qualifying performance was seen.
pub fn is_national_master(aggregate: &PlayerAggregate) -> bool {
    aggregate.total_regular_games >= MIN_REGULAR_GAMES
        && ((aggregate.qualifying_performances >= MIN_QUALIFYING_PERFORMANCES
            && aggregate.best_indicator >= SUPPORTING_INDICATOR)
            || aggregate.best_indicator >= QUALIFYING_INDICATOR)
}

/// Output row of the national-masters table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NationalMaster {
    pub cfc_id: String,
    pub tournaments: String,
}

/// Applies the title predicate to every aggregated player and flattens the
/// qualifying tournament list into its published form. Rows sort by player
/// id so repeated runs over the same exports emit byte-identical tables.
pub fn national_masters(aggregates: &HashMap<String, PlayerAggregate>) -> Vec<NationalMaster> {
    let mut masters: Vec<NationalMaster> = aggregates
        .iter()
        .filter(|(_, aggregate)| is_national_master(aggregate))
        .map(|(cfc_id, aggregate)| NationalMaster {
            cfc_id: cfc_id.clone(),
            tournaments: aggregate
                .tournaments
                .iter()
                .map(|tournament| tournament.to_field())
                .collect::<Vec<_>>()
                .join("; "),
        })
        .collect();
    masters.sort_by(|a, b| a.cfc_id.cmp(&b.cfc_id));
    masters
}
