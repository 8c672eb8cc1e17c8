//! Puzzle data files and their conversion into a [`PuzzleDefinition`].
//!
//! Two layouts are understood: a single combined puzzle file, and the four files written by the daily scraping
//! scripts (board, words, hint words and definitions), which [`PuzzleData::from_parts`] merges.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use strands_core::{Board, PuzzleDefinition, PuzzleIssue, normalize_word};

pub use error::*;

mod error;

/// Word list written either as a JSON array or as one comma/space separated string (`"LOVE, PLEASURE"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WordListRepr", into = "Vec<String>")]
pub struct WordList(Vec<String>);

impl WordList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WordListRepr {
    Joined(String),
    List(Vec<String>),
}

impl From<WordListRepr> for WordList {
    fn from(repr: WordListRepr) -> Self {
        match repr {
            WordListRepr::Joined(joined) => joined
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|word| !word.is_empty())
                .collect(),
            WordListRepr::List(words) => Self(words),
        }
    }
}

impl From<WordList> for Vec<String> {
    fn from(list: WordList) -> Self {
        list.0
    }
}

/// Board row, either one string per cell (`["E", "O", "L"]`) or a single line (`"EOL"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoardRow {
    Cells(Vec<String>),
    Line(String),
}

impl BoardRow {
    fn letters(&self, row: usize) -> Result<Vec<char>> {
        match self {
            Self::Line(line) => Ok(line.chars().filter(|c| !c.is_whitespace()).collect()),
            Self::Cells(cells) => cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let mut chars = cell.trim().chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) => Ok(letter),
                        _ => Err(LoadError::InvalidCell {
                            row,
                            col,
                            found: cell.clone(),
                        }),
                    }
                })
                .collect(),
        }
    }
}

/// Everything needed to start a session, as stored in a puzzle file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub theme: String,
    pub board: Vec<BoardRow>,
    pub spangram: String,
    #[serde(alias = "words")]
    pub answer_words: WordList,
    #[serde(default)]
    pub hint_words: WordList,
    #[serde(default)]
    pub definitions: BTreeMap<String, String>,
}

/// `BOARD.json`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardFile {
    pub date: Option<NaiveDate>,
    pub board: Vec<BoardRow>,
}

/// `WORDS.json`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordsFile {
    pub date: Option<NaiveDate>,
    pub theme: String,
    pub spangram: String,
    pub words: WordList,
}

/// `HINTS_<date>.json`, every dictionary word findable on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HintsFile {
    pub date: Option<NaiveDate>,
    pub words: WordList,
}

/// `DEFINE.json`, answer word to hint text.
pub type DefinitionsFile = BTreeMap<String, String>;

pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

impl PuzzleData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        read_json(path)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Merges the scraped files into one puzzle.
    ///
    /// The scraped hint list contains every word on the board, so answers and the spangram are removed from it.
    pub fn from_parts(
        board: BoardFile,
        words: WordsFile,
        hints: Option<HintsFile>,
        definitions: DefinitionsFile,
    ) -> Self {
        if let (Some(board_date), Some(words_date)) = (board.date, words.date) {
            if board_date != words_date {
                log::warn!("Board is dated {board_date} but words are dated {words_date}");
            }
        }

        let spangram = normalize_word(&words.spangram);
        let answers: Vec<String> = words.words.iter().map(normalize_word).collect();
        let hint_words: WordList = hints
            .map(|hints| {
                hints
                    .words
                    .iter()
                    .map(normalize_word)
                    .filter(|word| *word != spangram && !answers.contains(word))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            date: board.date.or(words.date),
            theme: words.theme,
            board: board.board,
            spangram: words.spangram,
            answer_words: words.words,
            hint_words,
            definitions,
        }
    }

    fn board_rows(&self) -> Result<Vec<Vec<char>>> {
        self.board
            .iter()
            .enumerate()
            .map(|(row, cells)| cells.letters(row))
            .collect()
    }

    /// Builds the definition without checking that the words can actually be found on the board.
    pub fn into_definition_unchecked(self) -> Result<PuzzleDefinition> {
        let board = Board::from_rows(&self.board_rows()?)?;
        let Self {
            theme,
            spangram,
            answer_words,
            hint_words,
            definitions,
            ..
        } = self;

        Ok(PuzzleDefinition::new(theme, board, &spangram)
            .with_answer_words(answer_words.iter())
            .with_hint_words(hint_words.iter())
            .with_definitions(definitions))
    }

    /// Builds and validates the definition. Issues that still leave the puzzle playable are only logged.
    pub fn into_definition(self) -> Result<PuzzleDefinition> {
        let definition = self.into_definition_unchecked()?;

        let issues = definition.validate();
        for issue in &issues {
            log::warn!("{issue}");
        }
        if issues.iter().any(PuzzleIssue::is_fatal) {
            return Err(LoadError::Invalid(issues));
        }
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strands_core::{PuzzleError, Session};

    const PUZZLE: &str = r#"{
        "date": "2024-09-14",
        "theme": "Positive emotions",
        "board": [
            ["E", "O", "L", "A", "T", "I"],
            ["V", "G", "R", "S", "T", "U"],
            ["I", "N", "E", "I", "S", "D"],
            ["P", "P", "H", "T", "O", "E"],
            ["E", "A", "O", "E", "N", "S"],
            ["I", "M", "X", "P", "L", "A"],
            ["T", "C", "N", "T", "E", "S"],
            ["E", "M", "E", "E", "R", "U"]
        ],
        "spangram": "EMOTIONS",
        "answerWords": "LOVE, PINE",
        "hintWords": ["rats", "dust", "meet"],
        "definitions": {
            "LOVE": "An intense feeling of deep affection",
            "PINE": "To long for something"
        }
    }"#;

    #[test]
    fn parses_combined_puzzle() {
        let data = PuzzleData::from_json_str(PUZZLE).unwrap();

        assert_eq!(data.date, NaiveDate::from_ymd_opt(2024, 9, 14));
        assert_eq!(data.answer_words.iter().collect::<Vec<_>>(), ["LOVE", "PINE"]);
        assert_eq!(data.hint_words.len(), 3);

        let definition = data.into_definition().unwrap();
        assert_eq!(definition.theme(), "Positive emotions");
        assert_eq!(definition.board().size(), (8, 6));
        assert!(definition.is_hint_word("RATS"));
    }

    #[test]
    fn word_list_accepts_string_or_array() {
        let joined: WordList = serde_json::from_str(r#""LOVE, PINE  GRIT""#).unwrap();
        let list: WordList = serde_json::from_str(r#"["LOVE", "PINE", "GRIT"]"#).unwrap();

        assert_eq!(joined, list);
        assert_eq!(serde_json::to_string(&joined).unwrap(), r#"["LOVE","PINE","GRIT"]"#);
    }

    #[test]
    fn board_rows_may_be_lines() {
        let data = PuzzleData {
            board: vec![BoardRow::Line("AB".into()), BoardRow::Line("C D".into())],
            spangram: "ABDC".into(),
            answer_words: ["BAD"].into_iter().collect(),
            ..Default::default()
        };

        let definition = data.into_definition_unchecked().unwrap();

        assert_eq!(definition.board().size(), (2, 2));
        assert_eq!(definition.board()[(1, 1)], 'D');
    }

    #[test]
    fn multi_letter_cell_is_rejected() {
        let data = PuzzleData {
            board: vec![BoardRow::Cells(vec!["A".into(), "QU".into()])],
            spangram: "AQU".into(),
            ..Default::default()
        };

        let err = data.into_definition_unchecked().unwrap_err();

        assert!(matches!(err, LoadError::InvalidCell { row: 0, col: 1, .. }));
    }

    #[test]
    fn ragged_board_is_a_puzzle_error() {
        let data = PuzzleData {
            board: vec![BoardRow::Line("AB".into()), BoardRow::Line("C".into())],
            ..Default::default()
        };

        let err = data.into_definition_unchecked().unwrap_err();

        assert!(matches!(err, LoadError::Puzzle(PuzzleError::InvalidBoardShape)));
    }

    #[test]
    fn untraceable_spangram_fails_validation() {
        let mut data = PuzzleData::from_json_str(PUZZLE).unwrap();
        data.spangram = "ELOPE".into();

        let err = data.into_definition().unwrap_err();

        match err {
            LoadError::Invalid(issues) => {
                assert_eq!(issues, [PuzzleIssue::SpangramNotOnBoard("ELOPE".into())])
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_definition_still_loads() {
        let mut data = PuzzleData::from_json_str(PUZZLE).unwrap();
        data.definitions.remove("PINE");

        let definition = data.into_definition().unwrap();

        assert_eq!(
            definition.hint_text_for("PINE"),
            "A 4-letter word related to Positive emotions."
        );
    }

    #[test]
    fn merges_scraped_files() {
        let board: BoardFile = serde_json::from_str(
            r#"{"date": "2024-09-14", "board": ["EOLATI", "VGRSTU", "INEISD", "PPHTOE",
                "EAOENS", "IMXPLA", "TCNTES", "EMEERU"]}"#,
        )
        .unwrap();
        let words: WordsFile = serde_json::from_str(
            r#"{"date": "2024-09-14", "theme": "Positive emotions",
                "spangram": "EMOTIONS", "words": "LOVE, PINE, EMOTIONS"}"#,
        )
        .unwrap();
        let hints: HintsFile = serde_json::from_str(
            r#"{"date": "2024-09-14", "words": ["DUST", "EMOTIONS", "LOVE", "RATS"]}"#,
        )
        .unwrap();
        let definitions = DefinitionsFile::from([
            ("LOVE".to_string(), "An intense feeling of deep affection".to_string()),
            ("PINE".to_string(), "To long for something".to_string()),
        ]);

        let data = PuzzleData::from_parts(board, words, Some(hints), definitions);

        assert_eq!(data.hint_words.iter().collect::<Vec<_>>(), ["DUST", "RATS"]);
        let definition = data.into_definition().unwrap();
        assert_eq!(definition.answer_words(), ["LOVE", "PINE"]);
        assert!(Session::new(definition).remaining_answer_words().eq(["LOVE", "PINE"]));
    }

    #[test]
    fn round_trips_through_pretty_json() {
        let data = PuzzleData::from_json_str(PUZZLE).unwrap();

        let json = data.to_json_string_pretty().unwrap();

        assert_eq!(PuzzleData::from_json_str(&json).unwrap(), data);
    }
}
