mod events;
mod players;
mod results;

pub use events::load_events;
pub use players::load_players;
pub use results::{ResultStream, stream_results};

use std::fs::File;
use std::path::Path;

use crate::error::{PipelineError, Result};

/// Opens one of the raw federation tables. The reader is flexible about row
/// widths and trims whitespace; only a file that cannot be opened or whose
/// header row cannot be read is an error.
fn open_table(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).map_err(|source| PipelineError::MissingSource {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);
    reader.headers().map_err(|source| PipelineError::SourceFormat {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(reader)
}
