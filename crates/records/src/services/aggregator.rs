use std::collections::HashMap;

use crate::index::EventIndex;
use crate::models::{Event, PlayerAggregate, RatingHistoryEntry, ResultRow, TournamentDetail};
use crate::roster::RegularRoster;
use crate::services::qualification::{QUALIFYING_PERFORMANCE, SUPPORTING_INDICATOR};

/// How rating-category codes gate the title accounting. The federation's
/// historical scripts disagreed on this, so both behaviors are first-class:
/// `RegularOnly` drops non-regular rows before any accounting, while
/// `AllRatingTypes` lets the performance and indicator checks see every row.
/// Game accumulation stays regular-only in both modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QualificationGating {
    #[default]
    RegularOnly,
    AllRatingTypes,
}

/// Which players' tournament histories to capture during the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HistoryCapture {
    #[default]
    Off,
    Single(String),
    Everyone,
}

impl HistoryCapture {
    fn wants(&self, cfc_id: &str) -> bool {
        match self {
            Self::Off => false,
            Self::Single(id) => id == cfc_id,
            Self::Everyone => true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AggregatorOptions {
    pub gating: QualificationGating,
    pub history: HistoryCapture,
}

/// Everything one pass over the results stream produced: per-player running
/// totals plus any captured tournament histories, both keyed by player id.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub aggregates: HashMap<String, PlayerAggregate>,
    pub histories: HashMap<String, Vec<RatingHistoryEntry>>,
}

/// Single-pass accumulator over the results cross-table. Rows are observed
/// in source order; the title predicate is only meaningful once the whole
/// stream has been drained, so callers read totals through `finish`.
pub struct Aggregator<'a> {
    roster: &'a RegularRoster,
    events: &'a EventIndex,
    options: AggregatorOptions,
    outcome: Aggregation,
}

impl<'a> Aggregator<'a> {
    pub fn new(roster: &'a RegularRoster, events: &'a EventIndex, options: AggregatorOptions) -> Self {
        Self {
            roster,
            events,
            options,
            outcome: Aggregation::default(),
        }
    }

    /// Drains a whole results stream and returns the outcome.
    pub fn process<I>(
        rows: I,
        roster: &RegularRoster,
        events: &EventIndex,
        options: AggregatorOptions,
    ) -> Aggregation
    where
        I: IntoIterator<Item = ResultRow>,
    {
        let mut aggregator = Aggregator::new(roster, events, options);
        for row in rows {
            aggregator.observe(row);
        }
        aggregator.finish()
    }

    pub fn observe(&mut self, row: ResultRow) {
        if !self.roster.contains(&row.cfc_id) {
            return;
        }

        let event = self.events.get(&row.event_id);

        // History is captured before any rating-type gating: the published
        // trajectories include quick and blitz sections.
        if self.options.history.wants(&row.cfc_id) {
            self.outcome
                .histories
                .entry(row.cfc_id.clone())
                .or_default()
                .push(history_entry(event, &row));
        }

        let regular = row.rating_type.is_regular();
        if !regular && self.options.gating == QualificationGating::RegularOnly {
            return;
        }

        let aggregate = self.outcome.aggregates.entry(row.cfc_id.clone()).or_default();

        if regular {
            aggregate.record_games(row.games_played);
        }
        if let Some(performance) = row.performance.filter(|p| *p >= QUALIFYING_PERFORMANCE) {
            aggregate.record_performance(tournament_detail(event, &row, performance));
        }
        if let Some(indicator) = row.indicator.filter(|i| *i >= SUPPORTING_INDICATOR) {
            aggregate.record_indicator(indicator);
        }
    }

    pub fn finish(self) -> Aggregation {
        self.outcome
    }
}

fn tournament_detail(event: &Event, row: &ResultRow, performance: i32) -> TournamentDetail {
    TournamentDetail {
        event_id: row.event_id.clone(),
        date: event.end_date,
        name: event.name.clone(),
        location: event.province.clone(),
        players: event.players,
        organizer: event.organizer.clone(),
        performance,
    }
}

fn history_entry(event: &Event, row: &ResultRow) -> RatingHistoryEntry {
    RatingHistoryEntry {
        event_id: row.event_id.clone(),
        event_date: event.end_date,
        event_name: event.name.clone(),
        event_location: event.province.clone(),
        num_players: event.players,
        organizer: event.organizer.clone(),
        score: row.score.clone(),
        rating_perf: row.performance,
        rating_post: row.post_rating,
        rating_type: row.rating_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, RatingType};

    fn player(cfc_id: &str, rating: Option<i32>) -> Player {
        Player {
            cfc_id: cfc_id.to_string(),
            regular_rating: rating,
            expiry: None,
        }
    }

    fn event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            end_date: Some("2020-01-01".parse().unwrap()),
            name: "Cup".to_string(),
            province: "ON".to_string(),
            players: Some(10),
            organizer: "O1".to_string(),
        }
    }

    fn row(
        cfc_id: &str,
        event_id: &str,
        rating_type: RatingType,
        games: u32,
        performance: Option<i32>,
        indicator: Option<i32>,
    ) -> ResultRow {
        ResultRow {
            cfc_id: cfc_id.to_string(),
            event_id: event_id.to_string(),
            rating_type,
            games_played: games,
            performance,
            indicator,
            score: "4.0".to_string(),
            post_rating: Some(2100),
        }
    }

    fn fixtures() -> (RegularRoster, EventIndex) {
        let roster = RegularRoster::build(&[player("1", Some(2000)), player("2", Some(1600))]);
        let index = EventIndex::build(vec![event("E1"), event("E2"), event("E3")]);
        (roster, index)
    }

    #[test]
    fn test_three_qualifying_performances_accumulate() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("1", "E1", RatingType::Regular, 10, Some(2350), Some(2250)),
            row("1", "E2", RatingType::Regular, 10, Some(2350), Some(2250)),
            row("1", "E3", RatingType::Regular, 10, Some(2350), Some(2250)),
        ];
        let outcome = Aggregator::process(rows, &roster, &index, AggregatorOptions::default());

        let aggregate = &outcome.aggregates["1"];
        assert_eq!(aggregate.total_regular_games, 30);
        assert_eq!(aggregate.qualifying_performances, 3);
        assert_eq!(aggregate.best_indicator, 2250);
        assert_eq!(aggregate.tournaments.len(), 3);
        assert_eq!(
            aggregate.tournaments[0].to_field(),
            "E1:2020-01-01:Cup:ON:10:O1:2350"
        );
    }

    #[test]
    fn test_huge_game_counts_saturate_the_total() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("1", "E1", RatingType::Regular, u32::MAX, None, None),
            row("1", "E2", RatingType::Regular, u32::MAX, None, None),
        ];
        let outcome = Aggregator::process(rows, &roster, &index, AggregatorOptions::default());

        assert_eq!(outcome.aggregates["1"].total_regular_games, u32::MAX);
    }

    #[test]
    fn test_rows_for_unlisted_or_unrated_players_are_skipped() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("9", "E1", RatingType::Regular, 10, Some(2400), Some(2400)),
            row("2", "E1", RatingType::Regular, 5, None, None),
        ];
        let outcome = Aggregator::process(rows, &roster, &index, AggregatorOptions::default());

        assert!(!outcome.aggregates.contains_key("9"));
        assert_eq!(outcome.aggregates["2"].total_regular_games, 5);
    }

    #[test]
    fn test_regular_only_gating_drops_quick_and_blitz_rows() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("1", "E1", RatingType::Quick, 8, Some(2400), Some(2400)),
            row("1", "E2", RatingType::Blitz, 8, Some(2400), Some(2400)),
        ];
        let outcome = Aggregator::process(rows, &roster, &index, AggregatorOptions::default());

        // Nothing regular was seen, so the player never enters the totals.
        assert!(!outcome.aggregates.contains_key("1"));
    }

    #[test]
    fn test_all_types_gating_counts_performances_but_not_games() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("1", "E1", RatingType::Quick, 8, Some(2400), Some(2280)),
            row("1", "E2", RatingType::Regular, 12, None, None),
        ];
        let options = AggregatorOptions {
            gating: QualificationGating::AllRatingTypes,
            ..AggregatorOptions::default()
        };
        let outcome = Aggregator::process(rows, &roster, &index, options);

        let aggregate = &outcome.aggregates["1"];
        assert_eq!(aggregate.total_regular_games, 12);
        assert_eq!(aggregate.qualifying_performances, 1);
        assert_eq!(aggregate.best_indicator, 2280);
    }

    #[test]
    fn test_indicator_below_supporting_floor_is_ignored() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("1", "E1", RatingType::Regular, 10, None, Some(2199)),
            row("1", "E2", RatingType::Regular, 10, None, Some(2200)),
        ];
        let outcome = Aggregator::process(rows, &roster, &index, AggregatorOptions::default());

        assert_eq!(outcome.aggregates["1"].best_indicator, 2200);
    }

    #[test]
    fn test_best_indicator_is_non_decreasing_across_observations() {
        let (roster, index) = fixtures();
        let mut aggregator = Aggregator::new(&roster, &index, AggregatorOptions::default());
        let mut last = 0;
        for indicator in [2250, 2400, 2300] {
            aggregator.observe(row("1", "E1", RatingType::Regular, 1, None, Some(indicator)));
            let best = aggregator.outcome.aggregates["1"].best_indicator;
            assert!(best >= last);
            last = best;
        }
        assert_eq!(last, 2400);
    }

    #[test]
    fn test_performance_below_threshold_captures_nothing() {
        let (roster, index) = fixtures();
        let rows = vec![row("1", "E1", RatingType::Regular, 10, Some(2299), None)];
        let outcome = Aggregator::process(rows, &roster, &index, AggregatorOptions::default());

        let aggregate = &outcome.aggregates["1"];
        assert_eq!(aggregate.qualifying_performances, 0);
        assert!(aggregate.tournaments.is_empty());
        assert_eq!(aggregate.total_regular_games, 10);
    }

    #[test]
    fn test_unknown_event_id_still_counts_with_empty_enrichment() {
        let (roster, index) = fixtures();
        let rows = vec![row("1", "E404", RatingType::Regular, 6, Some(2360), None)];
        let outcome = Aggregator::process(rows, &roster, &index, AggregatorOptions::default());

        let aggregate = &outcome.aggregates["1"];
        assert_eq!(aggregate.total_regular_games, 6);
        assert_eq!(aggregate.qualifying_performances, 1);
        assert_eq!(aggregate.tournaments[0].to_field(), "E404::::::2360");
    }

    #[test]
    fn test_history_single_captures_before_gating() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("1", "E1", RatingType::Quick, 8, Some(1900), None),
            row("1", "E2", RatingType::Regular, 10, Some(2000), None),
            row("2", "E3", RatingType::Regular, 4, None, None),
        ];
        let options = AggregatorOptions {
            history: HistoryCapture::Single("1".to_string()),
            ..AggregatorOptions::default()
        };
        let outcome = Aggregator::process(rows, &roster, &index, options);

        // The quick section is in the history even though regular-only
        // gating keeps it out of the totals.
        let history = &outcome.histories["1"];
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].event_id, "E1");
        assert_eq!(history[0].rating_type, RatingType::Quick);
        assert_eq!(history[0].rating_perf, Some(1900));
        assert_eq!(history[1].event_id, "E2");
        assert!(!outcome.histories.contains_key("2"));
    }

    #[test]
    fn test_history_everyone_captures_each_eligible_player() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("1", "E1", RatingType::Regular, 10, None, None),
            row("2", "E2", RatingType::Regular, 4, None, None),
            row("9", "E3", RatingType::Regular, 4, None, None),
        ];
        let options = AggregatorOptions {
            history: HistoryCapture::Everyone,
            ..AggregatorOptions::default()
        };
        let outcome = Aggregator::process(rows, &roster, &index, options);

        assert_eq!(outcome.histories.len(), 2);
        assert!(outcome.histories.contains_key("1"));
        assert!(outcome.histories.contains_key("2"));
        assert!(!outcome.histories.contains_key("9"));
    }

    #[test]
    fn test_history_entry_carries_event_enrichment_and_row_fields() {
        let (roster, index) = fixtures();
        let rows = vec![row("1", "E2", RatingType::Regular, 10, Some(2100), None)];
        let options = AggregatorOptions {
            history: HistoryCapture::Single("1".to_string()),
            ..AggregatorOptions::default()
        };
        let outcome = Aggregator::process(rows, &roster, &index, options);

        let entry = &outcome.histories["1"][0];
        assert_eq!(entry.event_name, "Cup");
        assert_eq!(entry.event_location, "ON");
        assert_eq!(entry.num_players, Some(10));
        assert_eq!(entry.organizer, "O1");
        assert_eq!(entry.score, "4.0");
        assert_eq!(entry.rating_post, Some(2100));
    }

    #[test]
    fn test_same_input_yields_identical_totals() {
        let (roster, index) = fixtures();
        let rows = vec![
            row("1", "E1", RatingType::Regular, 10, Some(2350), Some(2250)),
            row("2", "E2", RatingType::Regular, 4, None, Some(2310)),
            row("1", "E3", RatingType::Quick, 3, Some(2500), None),
        ];
        let first = Aggregator::process(rows.clone(), &roster, &index, AggregatorOptions::default());
        let second = Aggregator::process(rows, &roster, &index, AggregatorOptions::default());

        assert_eq!(first.aggregates, second.aggregates);
    }
}
