use chrono::NaiveDate;
use serde::Serialize;

use crate::models::RatingType;

/// One data point in a tracked player's tournament history. Serialized
/// column names match the published per-player history tables; the rating
/// category rides along for downstream filtering but is not a published
/// column.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingHistoryEntry {
    pub event_id: String,
    pub event_date: Option<NaiveDate>,
    pub event_name: String,
    pub event_location: String,
    pub num_players: Option<u32>,
    pub organizer: String,
    pub score: String,
    pub rating_perf: Option<i32>,
    pub rating_post: Option<i32>,
    #[serde(skip)]
    pub rating_type: RatingType,
}

/// Source export order is not guaranteed chronological. Undated entries sink
/// to the end and keep their relative order.
pub fn sort_history_by_date(entries: &mut [RatingHistoryEntry]) {
    entries.sort_by_key(|entry| (entry.event_date.is_none(), entry.event_date));
}
