use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("Board has no cells")]
    EmptyBoard,
    #[error("Board rows do not all have the same length")]
    InvalidBoardShape,
    #[error("Board does not fit in {max}x{max} cells", max = Coord::MAX)]
    BoardTooLarge,
    #[error("Board cell at row {row}, column {col} is not a letter")]
    InvalidLetter { row: Coord, col: Coord },
}

pub type Result<T> = core::result::Result<T, PuzzleError>;
