use alloc::string::String;
use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Path,
    pub category: Category,
}

/// Which confirmed word, if any, owns a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellClaim {
    Free,
    Answer,
    Spangram,
}

impl CellClaim {
    pub const fn is_free(self) -> bool {
        matches!(self, Self::Free)
    }
}

impl Default for CellClaim {
    fn default() -> Self {
        Self::Free
    }
}

/// Append-only record of confirmed words, in discovery order.
///
/// Cells of answers and the spangram are also claimed on a board-shaped grid so selection checks don't have to
/// walk every entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    entries: Vec<FoundWord>,
    claims: Array2<CellClaim>,
}

impl Ledger {
    pub fn new(size: Coord2) -> Self {
        Self {
            entries: Vec::new(),
            claims: Array2::default(size.to_nd_index()),
        }
    }

    /// Adds `word` unless an entry with the same text exists. Returns whether the ledger grew.
    pub fn record(&mut self, word: String, path: Path, category: Category) -> bool {
        if self.is_found(&word) {
            log::trace!("{word} already recorded");
            return false;
        }

        let claim = match category {
            Category::Spangram => CellClaim::Spangram,
            Category::Answer => CellClaim::Answer,
            Category::HintWord => CellClaim::Free,
        };
        if category.locks_cells() {
            for pos in path.iter() {
                if let Some(cell) = self.claims.get_mut(pos.to_nd_index()) {
                    *cell = claim;
                }
            }
        }

        log::debug!("Found {category:?} {word}");
        self.entries.push(FoundWord {
            word,
            path,
            category,
        });
        true
    }

    pub fn entries(&self) -> &[FoundWord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.entries.iter().any(|entry| entry.word == word)
    }

    pub fn count(&self, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.category == category)
            .count()
    }

    /// Out-of-bounds cells report as free.
    pub fn claim_at(&self, coords: Coord2) -> CellClaim {
        self.claims
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or_default()
    }

    pub fn is_claimed(&self, coords: Coord2) -> bool {
        !self.claim_at(coords).is_free()
    }

    pub fn spangram_found(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.category == Category::Spangram)
    }

    /// Answer words of `puzzle` not yet recorded as answers, in puzzle order.
    pub fn remaining_answer_words<'a>(
        &'a self,
        puzzle: &'a PuzzleDefinition,
    ) -> impl Iterator<Item = &'a str> + 'a {
        puzzle
            .answer_words()
            .iter()
            .map(String::as_str)
            .filter(|&word| {
                !self
                    .entries
                    .iter()
                    .any(|entry| entry.category == Category::Answer && entry.word == word)
            })
    }

    pub fn has_won(&self, puzzle: &PuzzleDefinition) -> bool {
        self.spangram_found() && self.remaining_answer_words(puzzle).next().is_none()
    }
}
