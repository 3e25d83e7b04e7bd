use std::fs::File;
use std::path::Path;

use records::models::{RatingType, ResultRow};
use records::parse;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

/// Raw shape of one results cross-table row.
#[derive(Debug, Deserialize)]
struct ResultRecord {
    cfc_id: String,
    event_id: String,
    rating_type: Option<String>,
    games_played: Option<String>,
    rating_perf: Option<String>,
    rating_indicator: Option<String>,
    score: Option<String>,
    rating_post: Option<String>,
}

impl ResultRecord {
    fn into_row(self) -> ResultRow {
        ResultRow {
            cfc_id: self.cfc_id,
            event_id: self.event_id,
            rating_type: RatingType::from_code(self.rating_type.as_deref().unwrap_or_default()),
            games_played: parse::games(self.games_played.as_deref()),
            performance: parse::rating(self.rating_perf.as_deref()),
            indicator: parse::rating(self.rating_indicator.as_deref()),
            score: self.score.unwrap_or_default(),
            post_rating: parse::rating(self.rating_post.as_deref()),
        }
    }
}

/// Lazily yields parsed cross-table rows in file order. The results table is
/// far larger than the other two, so it is streamed rather than collected.
/// Rows the csv layer cannot deserialize are skipped with a debug trace; a
/// dirty row never aborts the stream.
pub struct ResultStream {
    rows: csv::DeserializeRecordsIntoIter<File, ResultRecord>,
}

impl Iterator for ResultStream {
    type Item = ResultRow;

    fn next(&mut self) -> Option<ResultRow> {
        loop {
            match self.rows.next()? {
                Ok(record) => return Some(record.into_row()),
                Err(err) => debug!("skipping unreadable results row: {err}"),
            }
        }
    }
}

pub fn stream_results(path: &Path) -> Result<ResultStream> {
    let reader = super::open_table(path)?;
    Ok(ResultStream {
        rows: reader.into_deserialize(),
    })
}
