use chrono::NaiveDate;

/// Tournament metadata used to enrich cross-table rows. `Default` doubles as
/// the empty enrichment returned for event ids missing from the index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Event {
    pub id: String,
    pub end_date: Option<NaiveDate>,
    pub name: String,
    pub province: String,
    pub players: Option<u32>,
    pub organizer: String,
}
