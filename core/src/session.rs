use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Display state of a board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    Unselected,
    Selected,
    FoundAnswer,
    FoundSpangram,
}

/// One play session over a puzzle.
///
/// Each signal is handled to completion before returning. None of them fail: input that does not apply to the
/// current state leaves it untouched and reports `NoChange`. The host must deliver [`Session::release`] after every
/// drag start, even when the pointer is let go outside the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    puzzle: PuzzleDefinition,
    builder: PathBuilder,
    ledger: Ledger,
    hints: HintEconomy,
}

impl Session {
    pub fn new(puzzle: PuzzleDefinition) -> Self {
        Self::with_config(puzzle, HintConfig::default())
    }

    pub fn with_config(puzzle: PuzzleDefinition, config: HintConfig) -> Self {
        let ledger = Ledger::new(puzzle.board().size());
        Self {
            puzzle,
            builder: PathBuilder::new(),
            ledger,
            hints: HintEconomy::new(config),
        }
    }

    pub fn puzzle(&self) -> &PuzzleDefinition {
        &self.puzzle
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn hints(&self) -> &HintEconomy {
        &self.hints
    }

    /// In-bounds and not part of a confirmed answer or the spangram.
    pub fn is_selectable(&self, coords: Coord2) -> bool {
        self.puzzle.board().contains(coords) && !self.ledger.is_claimed(coords)
    }

    pub fn drag_start(&mut self, coords: Coord2) -> SelectOutcome {
        let selectable = self.is_selectable(coords);
        self.builder.start(coords, selectable)
    }

    pub fn drag_enter(&mut self, coords: Coord2) -> SelectOutcome {
        let selectable = self.is_selectable(coords);
        self.builder.extend(coords, selectable)
    }

    /// Touch moves are resolved to a cell by the host and then behave exactly like entering that cell.
    pub fn touch_move(&mut self, coords: Coord2) -> SelectOutcome {
        self.drag_enter(coords)
    }

    /// Ends the drag and submits whatever was selected. The selection is cleared whether or not it matched.
    pub fn release(&mut self) -> SubmitOutcome {
        let Some(path) = self.builder.finish() else {
            return SubmitOutcome::NoChange;
        };

        let word = self.puzzle.board().spell(&path);
        let Some(category) = classify(&word, &self.puzzle, &self.ledger) else {
            log::trace!("Dropped selection {word}");
            return SubmitOutcome::Discarded;
        };

        let was_won = self.has_won();
        if !self.ledger.record(word, path, category) {
            return SubmitOutcome::Discarded;
        }
        if category == Category::HintWord {
            self.hints.on_hint_word_found();
        }

        if !was_won && self.has_won() {
            log::debug!("Puzzle solved");
            SubmitOutcome::Won
        } else {
            SubmitOutcome::Found(category)
        }
    }

    /// Spends an available hint, choosing among remaining words with `picker`. Ignored once the puzzle is solved.
    pub fn claim_hint(&mut self, picker: &mut impl HintPicker) -> Option<&str> {
        if self.has_won() {
            log::trace!("Hint claim after the puzzle was solved");
            return None;
        }
        self.hints.claim(&self.puzzle, &self.ledger, picker)
    }

    pub fn current_path(&self) -> &Path {
        self.builder.path()
    }

    pub fn is_dragging(&self) -> bool {
        self.builder.is_active()
    }

    pub fn cell_status(&self, coords: Coord2) -> CellStatus {
        match self.ledger.claim_at(coords) {
            CellClaim::Spangram => CellStatus::FoundSpangram,
            CellClaim::Answer => CellStatus::FoundAnswer,
            CellClaim::Free if self.builder.path().contains(coords) => CellStatus::Selected,
            CellClaim::Free => CellStatus::Unselected,
        }
    }

    pub fn found_words(&self) -> &[FoundWord] {
        self.ledger.entries()
    }

    pub fn remaining_answer_words(&self) -> impl Iterator<Item = &str> {
        self.ledger.remaining_answer_words(&self.puzzle)
    }

    pub fn spangram_found(&self) -> bool {
        self.ledger.spangram_found()
    }

    pub fn has_won(&self) -> bool {
        self.ledger.has_won(&self.puzzle)
    }

    pub fn hint_progress(&self) -> u8 {
        self.hints.progress()
    }

    pub fn hint_progress_fraction(&self) -> f32 {
        self.hints.progress_fraction()
    }

    pub fn available_hints(&self) -> u8 {
        self.hints.available()
    }

    pub fn used_hints(&self) -> u8 {
        self.hints.used()
    }

    pub fn revealed_hints(&self) -> &[String] {
        self.hints.revealed()
    }
}
