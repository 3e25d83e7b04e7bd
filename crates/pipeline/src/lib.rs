pub mod error;
pub mod reports;
pub mod run;
pub mod sources;

pub use error::{PipelineError, Result};
