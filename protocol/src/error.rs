use strands_core::{PuzzleError, PuzzleIssue};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read puzzle data")]
    Io(#[from] std::io::Error),
    #[error("Malformed puzzle data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Board cell at row {row}, column {col} must be a single letter, found {found:?}")]
    InvalidCell { row: usize, col: usize, found: String },
    #[error(transparent)]
    Puzzle(#[from] PuzzleError),
    #[error("Puzzle failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<PuzzleIssue>),
}

pub type Result<T> = std::result::Result<T, LoadError>;
