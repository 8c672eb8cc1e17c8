use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Problems found by [`PuzzleDefinition::validate`].
#[derive(Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleIssue {
    #[error("Spangram is empty")]
    EmptySpangram,
    #[error("Spangram {0} cannot be traced on the board")]
    SpangramNotOnBoard(String),
    #[error("Puzzle has no answer words")]
    NoAnswerWords,
    #[error("Answer word {0} cannot be traced on the board")]
    AnswerNotOnBoard(String),
    #[error("Answer word {0} has no definition")]
    MissingDefinition(String),
    #[error("{0} is listed both as an answer and as a hint word")]
    HintWordIsAnswer(String),
}

impl PuzzleIssue {
    /// Whether a puzzle with this issue can still be played to completion.
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::MissingDefinition(_))
    }
}

/// Trims and upper-cases a word so lookups are independent of how the source data was written.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}

/// Immutable description of one day's puzzle.
///
/// The spangram is kept apart from the answer words: if the source data also lists it as an answer it is dropped
/// from `answer_words` so it is never counted twice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    theme: String,
    board: Board,
    spangram: String,
    answer_words: Vec<String>,
    hint_words: BTreeSet<String>,
    definitions: BTreeMap<String, String>,
}

impl PuzzleDefinition {
    pub fn new(theme: impl Into<String>, board: Board, spangram: &str) -> Self {
        Self {
            theme: theme.into(),
            board,
            spangram: normalize_word(spangram),
            answer_words: Vec::new(),
            hint_words: BTreeSet::new(),
            definitions: BTreeMap::new(),
        }
    }

    /// Adds answer words, keeping their order and skipping duplicates and the spangram.
    pub fn with_answer_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = normalize_word(word.as_ref());
            if word.is_empty() {
                continue;
            }
            if word == self.spangram {
                log::warn!("Spangram {word} also listed as an answer word, keeping it as spangram only");
                continue;
            }
            if self.answer_words.contains(&word) {
                log::warn!("Duplicate answer word {word}");
                continue;
            }
            self.answer_words.push(word);
        }
        self
    }

    pub fn with_hint_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hint_words.extend(
            words
                .into_iter()
                .map(|word| normalize_word(word.as_ref()))
                .filter(|word| !word.is_empty()),
        );
        self
    }

    pub fn with_definitions<I, K, V>(mut self, definitions: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.definitions.extend(
            definitions
                .into_iter()
                .map(|(word, text)| (normalize_word(word.as_ref()), text.into())),
        );
        self
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn spangram(&self) -> &str {
        &self.spangram
    }

    /// Answer words in the order they were supplied, spangram excluded.
    pub fn answer_words(&self) -> &[String] {
        &self.answer_words
    }

    pub fn hint_words(&self) -> impl Iterator<Item = &str> {
        self.hint_words.iter().map(String::as_str)
    }

    pub fn is_spangram(&self, word: &str) -> bool {
        self.spangram == word
    }

    pub fn is_answer_word(&self, word: &str) -> bool {
        self.answer_words.iter().any(|answer| answer == word)
    }

    pub fn is_hint_word(&self, word: &str) -> bool {
        self.hint_words.contains(word)
    }

    pub fn definition_for(&self, word: &str) -> Option<&str> {
        self.definitions.get(word).map(String::as_str)
    }

    /// Hint text revealed for `word`, with a generic fallback when no definition was supplied.
    pub fn hint_text_for(&self, word: &str) -> String {
        match self.definition_for(word) {
            Some(text) => text.into(),
            None => {
                log::warn!("No definition for {word}, using placeholder hint");
                let theme = if self.theme.is_empty() { "the theme" } else { self.theme.as_str() };
                format!("A {}-letter word related to {}.", word.chars().count(), theme)
            }
        }
    }

    /// Checks the data-integrity assumptions the engine relies on without enforcing them.
    pub fn validate(&self) -> Vec<PuzzleIssue> {
        let mut issues = Vec::new();

        if self.spangram.is_empty() {
            issues.push(PuzzleIssue::EmptySpangram);
        } else if self.board.trace(&self.spangram).is_none() {
            issues.push(PuzzleIssue::SpangramNotOnBoard(self.spangram.clone()));
        }
        if self.hint_words.contains(&self.spangram) {
            issues.push(PuzzleIssue::HintWordIsAnswer(self.spangram.clone()));
        }

        if self.answer_words.is_empty() {
            issues.push(PuzzleIssue::NoAnswerWords);
        }
        for word in &self.answer_words {
            if self.board.trace(word).is_none() {
                issues.push(PuzzleIssue::AnswerNotOnBoard(word.clone()));
            }
            if !self.definitions.contains_key(word) {
                issues.push(PuzzleIssue::MissingDefinition(word.clone()));
            }
            if self.hint_words.contains(word) {
                issues.push(PuzzleIssue::HintWordIsAnswer(word.clone()));
            }
        }

        issues
    }
}
