use chrono::NaiveDate;

/// One tournament that contributed a qualifying performance, carrying the
/// enrichment fields published alongside the title.
#[derive(Debug, Clone, PartialEq)]
pub struct TournamentDetail {
    pub event_id: String,
    pub date: Option<NaiveDate>,
    pub name: String,
    pub location: String,
    pub players: Option<u32>,
    pub organizer: String,
    pub performance: i32,
}

impl TournamentDetail {
    /// Colon-joined form used in the published masters table:
    /// `eventId:eventDate:eventName:eventLocation:numPlayers:organizer:performanceRating`.
    /// Absent enrichment fields render as empty segments.
    pub fn to_field(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}:{}:{}",
            self.event_id,
            self.date.map(|d| d.to_string()).unwrap_or_default(),
            self.name,
            self.location,
            self.players.map(|n| n.to_string()).unwrap_or_default(),
            self.organizer,
            self.performance,
        )
    }
}

/// Running qualification totals for one player, updated row by row during
/// the streaming pass. The title predicate reads these only after the whole
/// stream has been consumed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerAggregate {
    pub total_regular_games: u32,
    pub qualifying_performances: u32,
    pub best_indicator: i32,
    pub tournaments: Vec<TournamentDetail>,
}

impl PlayerAggregate {
    /// The total saturates at `u32::MAX`: game counts come straight from
    /// the export, and a dirty row must not abort the pass.
    pub fn record_games(&mut self, games: u32) {
        self.total_regular_games = self.total_regular_games.saturating_add(games);
    }

    /// Counter and tournament list move together, so the performance count
    /// always equals the number of captured tournaments.
    pub fn record_performance(&mut self, tournament: TournamentDetail) {
        self.qualifying_performances += 1;
        self.tournaments.push(tournament);
    }

    pub fn record_indicator(&mut self, indicator: i32) {
        self.best_indicator = self.best_indicator.max(indicator);
    }
}
