#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use classify::*;
pub use error::*;
pub use hints::*;
pub use ledger::*;
pub use path::*;
pub use puzzle::*;
pub use session::*;
pub use types::*;

mod classify;
mod error;
mod hints;
mod ledger;
mod path;
mod puzzle;
mod session;
mod types;

/// Rectangular grid of upper-case letters, fixed for the whole session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    letters: Array2<char>,
}

impl Board {
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if height == 0 || width == 0 {
            return Err(PuzzleError::EmptyBoard);
        }
        let max_side = usize::from(Coord::MAX);
        if height > max_side || width > max_side {
            return Err(PuzzleError::BoardTooLarge);
        }

        let mut letters = Vec::with_capacity(height * width);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(PuzzleError::InvalidBoardShape);
            }
            for (col, &letter) in cells.iter().enumerate() {
                if !letter.is_alphabetic() {
                    return Err(PuzzleError::InvalidLetter {
                        row: row as Coord,
                        col: col as Coord,
                    });
                }
                letters.push(letter.to_ascii_uppercase());
            }
        }

        let letters = Array2::from_shape_vec((height, width), letters)
            .map_err(|_| PuzzleError::InvalidBoardShape)?;
        Ok(Self { letters })
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.letters.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn letter_at(&self, coords: Coord2) -> Option<char> {
        self.letters.get(coords.to_nd_index()).copied()
    }

    /// Concatenates the letters under `path` in order.
    pub fn spell(&self, path: &Path) -> String {
        path.iter().filter_map(|pos| self.letter_at(pos)).collect()
    }

    /// Searches for any adjacency-connected, non-repeating path spelling `word`.
    pub fn trace(&self, word: &str) -> Option<Path> {
        let target: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
        let &first = target.first()?;

        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                if self[(row, col)] != first {
                    continue;
                }
                let mut path = Path::from_iter([(row, col)]);
                if self.trace_from(&target, &mut path) {
                    return Some(path);
                }
            }
        }
        None
    }

    fn trace_from(&self, target: &[char], path: &mut Path) -> bool {
        if path.len() == target.len() {
            return true;
        }
        let Some(last) = path.last() else {
            return false;
        };
        let next = target[path.len()];

        for pos in self.letters.iter_neighbors(last) {
            if self[pos] != next || path.contains(pos) {
                continue;
            }
            path.push(pos);
            if self.trace_from(target, path) {
                return true;
            }
            path.pop();
        }
        false
    }
}

impl Index<Coord2> for Board {
    type Output = char;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.letters[coords.to_nd_index()]
    }
}

/// Parses one row per line; whitespace inside a line is ignored so both `EOLATI` and `E O L A T I` work.
impl FromStr for Board {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SelectOutcome {
    NoChange,
    Started,
    Extended,
    Cleared,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// No selection was in progress.
    NoChange,
    /// The selection spelled nothing new and was dropped.
    Discarded,
    Found(Category),
    /// The submission completed the puzzle.
    Won,
}

impl SubmitOutcome {
    pub const fn has_update(self) -> bool {
        use SubmitOutcome::*;
        match self {
            NoChange => false,
            Discarded => true,
            Found(_) => true,
            Won => true,
        }
    }

    pub const fn category(self) -> Option<Category> {
        match self {
            Self::Found(category) => Some(category),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const GRID: &str = "
        EOLATI
        VGRSTU
        INEISD
        PPHTOE
        EAOENS
        IMXPLA
        TCNTES
        EMEERU
    ";

    fn board() -> Board {
        GRID.parse().unwrap()
    }

    #[test]
    fn parses_rows_and_reports_size() {
        let board = board();

        assert_eq!(board.size(), (8, 6));
        assert_eq!(board.total_cells(), 48);
        assert_eq!(board[(0, 2)], 'L');
        assert_eq!(board.letter_at((7, 5)), Some('U'));
        assert_eq!(board.letter_at((8, 0)), None);
        assert!(!board.contains((0, 6)));
    }

    #[test]
    fn letters_are_upper_cased() {
        let board = Board::from_rows(&[vec!['a', 'b'], vec!['c', 'd']]).unwrap();

        assert_eq!(board[(1, 0)], 'C');
    }

    #[test]
    fn rejects_malformed_rows() {
        let empty: [Vec<char>; 0] = [];
        assert_eq!(Board::from_rows(&empty), Err(PuzzleError::EmptyBoard));
        assert_eq!(
            Board::from_rows(&[vec!['A', 'B'], vec!['C']]),
            Err(PuzzleError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_rows(&[vec!['A', ' ']]),
            Err(PuzzleError::InvalidLetter { row: 0, col: 1 })
        );
    }

    #[test]
    fn spell_follows_path_order() {
        let board = board();
        let path = Path::from_iter([(0, 2), (0, 1), (1, 0), (0, 0)]);

        assert_eq!(board.spell(&path), "LOVE");
    }

    #[test]
    fn trace_finds_connected_path() {
        let board = board();

        let path = board.trace("emotions").unwrap();

        assert_eq!(board.spell(&path), "EMOTIONS");
        assert!(path.is_connected());
    }

    #[test]
    fn trace_does_not_reuse_cells() {
        let board = Board::from_str("AB\nCD").unwrap();

        assert!(board.trace("ABA").is_none());
        assert!(board.trace("ABDC").is_some());
    }

    #[test]
    fn trace_rejects_untraceable_word() {
        let board = board();

        assert!(board.trace("ELOPE").is_none());
        assert!(board.trace("").is_none());
    }

    #[test]
    fn submit_outcome_exposes_category() {
        assert_eq!(
            SubmitOutcome::Found(Category::Answer).category(),
            Some(Category::Answer)
        );
        assert_eq!(SubmitOutcome::Won.category(), None);
        assert!(!SubmitOutcome::NoChange.has_update());
    }
}
