use anyhow::Context;
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::path::Path;
use strands_core::PuzzleDefinition;
use strands_protocol::{LoadError, PuzzleData};

fn summary(puzzle: &PuzzleDefinition, date: Option<NaiveDate>) -> Result<String, std::fmt::Error> {
    let board = puzzle.board();
    let (rows, cols) = board.size();

    let mut out = String::new();
    if let Some(date) = date {
        writeln!(out, "Date:     {date}")?;
    }
    writeln!(out, "Theme:    {}", puzzle.theme())?;
    writeln!(out, "Board:    {rows}x{cols}, {} cells", board.total_cells())?;
    writeln!(out, "Spangram: {}", puzzle.spangram())?;
    writeln!(out, "Answers:  {}", puzzle.answer_words().join(", "))?;
    write!(out, "Hints:    {} bonus words", puzzle.hint_words().count())?;
    Ok(out)
}

pub(crate) fn run(path: &Path) -> anyhow::Result<()> {
    let data = PuzzleData::from_path(path)
        .with_context(|| format!("Could not load {}", path.display()))?;
    let date = data.date;

    let puzzle = match data.into_definition() {
        Ok(puzzle) => puzzle,
        Err(LoadError::Invalid(issues)) => {
            for issue in &issues {
                println!("  {issue}");
            }
            anyhow::bail!("{} is not playable", path.display());
        }
        Err(err) => return Err(err).context("Could not build the puzzle"),
    };

    println!("{}", summary(&puzzle, date)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_puzzle_contents() {
        let board = "EOLATI\nVGRSTU\nINEISD\nPPHTOE\nEAOENS\nIMXPLA\nTCNTES\nEMEERU"
            .parse()
            .unwrap();
        let puzzle = PuzzleDefinition::new("Positive emotions", board, "EMOTIONS")
            .with_answer_words(["LOVE", "PINE"])
            .with_hint_words(["RATS", "DUST"]);
        let date = NaiveDate::from_ymd_opt(2024, 9, 14);

        assert_eq!(
            summary(&puzzle, date).unwrap(),
            "Date:     2024-09-14\n\
             Theme:    Positive emotions\n\
             Board:    8x6, 48 cells\n\
             Spangram: EMOTIONS\n\
             Answers:  LOVE, PINE\n\
             Hints:    2 bonus words"
        );
    }
}
