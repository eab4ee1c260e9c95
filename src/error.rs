use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the load → extract → render → display pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file is missing, unreadable, or not parseable as CSV.
    #[error("failed to load dataset from {}: {source}", path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A required coordinate column is absent from the header.
    #[error("required column `{column}` not found in dataset")]
    MissingColumn { column: String },

    /// A coordinate cell holds something that is not a number.
    #[error("row {row}: column `{column}` has non-numeric value {value:?}")]
    InvalidCoordinate {
        row: usize,
        column: String,
        value: String,
    },

    #[error("invalid plot configuration: {0}")]
    InvalidConfig(String),

    #[error("rendering failed: {0}")]
    Render(String),

    #[error("display failed: {0}")]
    Display(String),
}

pub type Result<T> = std::result::Result<T, Error>;
