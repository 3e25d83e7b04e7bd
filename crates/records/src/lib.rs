pub mod index;
pub mod models;
pub mod parse;
pub mod roster;
pub mod services;

pub use index::EventIndex;
pub use models::{
    Event, Player, PlayerAggregate, RatingHistoryEntry, RatingType, ResultRow, TournamentDetail,
};
pub use roster::RegularRoster;
pub use services::aggregator::{
    Aggregation, Aggregator, AggregatorOptions, HistoryCapture, QualificationGating,
};
pub use services::qualification::{NationalMaster, is_national_master, national_masters};
