use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Spangram,
    Answer,
    HintWord,
}

impl Category {
    /// Cells of words in this category can not be selected again.
    pub const fn locks_cells(self) -> bool {
        matches!(self, Self::Spangram | Self::Answer)
    }
}

/// Decides what a finished selection spelled. Words already in the ledger never classify again.
pub fn classify(word: &str, puzzle: &PuzzleDefinition, ledger: &Ledger) -> Option<Category> {
    if ledger.is_found(word) {
        return None;
    }

    if puzzle.is_spangram(word) {
        Some(Category::Spangram)
    } else if puzzle.is_answer_word(word) {
        Some(Category::Answer)
    } else if puzzle.is_hint_word(word) {
        Some(Category::HintWord)
    } else {
        None
    }
}
