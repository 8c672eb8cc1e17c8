use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

pub const ONLY_SPANGRAM_LEFT: &str = "Only the spangram is left to find!";
pub const ALL_WORDS_FOUND: &str = "You found every word, there is nothing left to hint.";
pub const NO_HINTS_LEFT: &str = "Every remaining word has already been hinted.";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintConfig {
    /// Hint words to find for each earned hint.
    pub words_per_hint: u8,
    /// Lifetime cap on earned hints, claimed or not.
    pub max_hints: u8,
}

impl HintConfig {
    pub const fn new_unchecked(words_per_hint: u8, max_hints: u8) -> Self {
        Self {
            words_per_hint,
            max_hints,
        }
    }

    pub fn new(words_per_hint: u8, max_hints: u8) -> Self {
        Self::new_unchecked(words_per_hint.max(1), max_hints)
    }
}

impl Default for HintConfig {
    fn default() -> Self {
        Self::new_unchecked(3, 3)
    }
}

/// Source of the index used to choose which remaining word gets hinted.
///
/// `pick` receives the number of candidates, always at least one. Results past the end are clamped to the last
/// candidate.
pub trait HintPicker {
    fn pick(&mut self, len: usize) -> usize;
}

impl<F: FnMut(usize) -> usize> HintPicker for F {
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniform picker over a seeded [`SmallRng`], reproducible for a given seed.
#[derive(Clone, Debug)]
pub struct SeededPicker {
    rng: SmallRng,
}

impl SeededPicker {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;

        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl HintPicker for SeededPicker {
    fn pick(&mut self, len: usize) -> usize {
        use rand::prelude::*;

        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Earning and spending of hints.
///
/// Every `words_per_hint` hint words found earn one hint, until `available + used` reaches `max_hints`. Claiming
/// a hint reveals the definition of a remaining answer word that was not hinted before.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HintEconomy {
    config: HintConfig,
    progress: u8,
    available: u8,
    used: u8,
    revealed: Vec<String>,
    hinted_words: BTreeSet<String>,
}

impl HintEconomy {
    pub fn new(config: HintConfig) -> Self {
        Self {
            config,
            progress: 0,
            available: 0,
            used: 0,
            revealed: Vec::new(),
            hinted_words: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> HintConfig {
        self.config
    }

    /// Hint words found toward the next hint.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn progress_fraction(&self) -> f32 {
        f32::from(self.progress) / f32::from(self.config.words_per_hint.max(1))
    }

    pub fn available(&self) -> u8 {
        self.available
    }

    pub fn used(&self) -> u8 {
        self.used
    }

    pub fn is_capped(&self) -> bool {
        self.available + self.used >= self.config.max_hints
    }

    /// Hint texts in claim order.
    pub fn revealed(&self) -> &[String] {
        &self.revealed
    }

    pub fn was_hinted(&self, word: &str) -> bool {
        self.hinted_words.contains(word)
    }

    /// Counts a found hint word. Returns whether it completed a new hint.
    pub fn on_hint_word_found(&mut self) -> bool {
        if self.is_capped() {
            log::trace!("Hint cap of {} reached, progress not counted", self.config.max_hints);
            return false;
        }

        self.progress += 1;
        if self.progress < self.config.words_per_hint {
            return false;
        }

        self.progress = 0;
        self.available = (self.available + 1).min(self.config.max_hints - self.used);
        log::debug!("Hint earned, {} available", self.available);
        true
    }

    /// Spends one available hint and returns its text, or `None` when there is nothing to spend.
    pub fn claim(
        &mut self,
        puzzle: &PuzzleDefinition,
        ledger: &Ledger,
        picker: &mut impl HintPicker,
    ) -> Option<&str> {
        if self.available == 0 {
            log::trace!("Hint claim with none available");
            return None;
        }

        let text = self.select_text(puzzle, ledger, picker);
        log::debug!("Hint claimed: {text}");
        self.revealed.push(text);
        self.available -= 1;
        self.used += 1;
        self.revealed.last().map(String::as_str)
    }

    fn select_text(
        &mut self,
        puzzle: &PuzzleDefinition,
        ledger: &Ledger,
        picker: &mut impl HintPicker,
    ) -> String {
        let remaining: Vec<&str> = ledger.remaining_answer_words(puzzle).collect();
        if remaining.is_empty() {
            return if ledger.spangram_found() {
                ALL_WORDS_FOUND.into()
            } else {
                ONLY_SPANGRAM_LEFT.into()
            };
        }

        let candidates: Vec<&str> = remaining
            .into_iter()
            .filter(|&word| !self.was_hinted(word))
            .collect();
        if candidates.is_empty() {
            return NO_HINTS_LEFT.into();
        }

        let index = picker.pick(candidates.len()).min(candidates.len() - 1);
        let word = candidates[index];
        self.hinted_words.insert(word.into());
        puzzle.hint_text_for(word)
    }
}

impl Default for HintEconomy {
    fn default() -> Self {
        Self::new(HintConfig::default())
    }
}
