mod aggregate;
mod event;
mod history;
mod player;
mod result;

pub use aggregate::{PlayerAggregate, TournamentDetail};
pub use event::Event;
pub use history::{RatingHistoryEntry, sort_history_by_date};
pub use player::Player;
pub use result::{RatingType, ResultRow};
