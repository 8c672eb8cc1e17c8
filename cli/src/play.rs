use anyhow::Context;
use std::fmt::Write as _;
use std::io::BufRead;
use std::path::Path;
use strands_core::{
    Category, CellStatus, Coord, Coord2, SeededPicker, Session, SubmitOutcome,
};
use strands_protocol::PuzzleData;

const HELP: &str = "\
Commands:
  drag R,C R,C ...   select cells in order and release
  hint               spend an earned hint
  board              show the board
  found              list found words
  status             show progress
  quit               leave the game";

#[derive(Clone, Debug, PartialEq)]
enum Input {
    Drag(Vec<Coord2>),
    Hint,
    Board,
    Found,
    Status,
    Help,
    Quit,
}

fn parse_coords(token: &str) -> anyhow::Result<Coord2> {
    let (row, col) = token
        .split_once(',')
        .with_context(|| format!("Expected ROW,COL but got {token:?}"))?;
    let row: Coord = row.trim().parse().with_context(|| format!("Bad row in {token:?}"))?;
    let col: Coord = col.trim().parse().with_context(|| format!("Bad column in {token:?}"))?;
    Ok((row, col))
}

/// `None` for blank lines.
fn parse_input(line: &str) -> anyhow::Result<Option<Input>> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(None);
    };

    let input = match command.to_ascii_lowercase().as_str() {
        "drag" | "d" => {
            let cells = tokens.map(parse_coords).collect::<anyhow::Result<Vec<_>>>()?;
            if cells.is_empty() {
                anyhow::bail!("drag needs at least one cell");
            }
            Input::Drag(cells)
        }
        "hint" | "h" => Input::Hint,
        "board" | "b" => Input::Board,
        "found" | "f" => Input::Found,
        "status" | "s" => Input::Status,
        "help" | "?" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        other => anyhow::bail!("Unknown command {other:?}, try help"),
    };
    Ok(Some(input))
}

/// Spangram cells are shown in brackets, answer cells in parentheses.
fn render_board(session: &Session) -> Result<String, std::fmt::Error> {
    let board = session.puzzle().board();
    let (rows, cols) = board.size();

    let mut out = String::from("   ");
    for col in 0..cols {
        write!(out, " {col} ")?;
    }
    for row in 0..rows {
        write!(out, "\n{row:>2} ")?;
        for col in 0..cols {
            let letter = board[(row, col)];
            match session.cell_status((row, col)) {
                CellStatus::FoundSpangram => write!(out, "[{letter}]")?,
                CellStatus::FoundAnswer => write!(out, "({letter})")?,
                CellStatus::Selected => write!(out, "<{letter}>")?,
                CellStatus::Unselected => write!(out, " {letter} ")?,
            }
        }
    }
    Ok(out)
}

fn drag(session: &mut Session, cells: &[Coord2]) -> SubmitOutcome {
    if let Some((&first, rest)) = cells.split_first() {
        session.drag_start(first);
        for &pos in rest {
            session.drag_enter(pos);
        }
    }
    session.release()
}

fn describe(session: &Session, outcome: SubmitOutcome) -> String {
    let word = session
        .found_words()
        .last()
        .map(|found| found.word.as_str())
        .unwrap_or_default();
    match outcome {
        SubmitOutcome::NoChange => "Nothing was selected".into(),
        SubmitOutcome::Discarded => "Not a word in this puzzle".into(),
        SubmitOutcome::Found(Category::Spangram) => format!("Spangram! {word}"),
        SubmitOutcome::Found(Category::Answer) => format!("Found {word}"),
        SubmitOutcome::Found(Category::HintWord) => format!(
            "Bonus word {word}, hint progress {}/{}",
            session.hint_progress(),
            session.hints().config().words_per_hint
        ),
        SubmitOutcome::Won => format!("Found {word}. Puzzle solved!"),
    }
}

fn status(session: &Session) -> String {
    let remaining = session.remaining_answer_words().count();
    format!(
        "{} answers left, spangram {}, hints: {} available, {} used, {:.0}% toward the next",
        remaining,
        if session.spangram_found() { "found" } else { "not found" },
        session.available_hints(),
        session.used_hints(),
        session.hint_progress_fraction() * 100.0,
    )
}

pub(crate) fn run(path: &Path, seed: u64) -> anyhow::Result<()> {
    let puzzle = PuzzleData::from_path(path)
        .with_context(|| format!("Could not load {}", path.display()))?
        .into_definition()
        .context("Puzzle is not playable")?;
    let mut session = Session::new(puzzle);
    let mut picker = SeededPicker::new(seed);

    println!("Theme: {}", session.puzzle().theme());
    println!("{}", render_board(&session)?);
    println!("{HELP}");

    for line in std::io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        let input = match parse_input(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(err) => {
                println!("{err:#}");
                continue;
            }
        };

        match input {
            Input::Drag(cells) => {
                let outcome = drag(&mut session, &cells);
                println!("{}", describe(&session, outcome));
                if outcome.category().is_some_and(Category::locks_cells)
                    || outcome == SubmitOutcome::Won
                {
                    println!("{}", render_board(&session)?);
                }
            }
            Input::Hint => match session.claim_hint(&mut picker) {
                Some(text) => println!("Hint: {text}"),
                None => println!("No hint available"),
            },
            Input::Board => println!("{}", render_board(&session)?),
            Input::Found => {
                for found in session.found_words() {
                    println!("{:?}: {}", found.category, found.word);
                }
            }
            Input::Status => println!("{}", status(&session)),
            Input::Help => println!("{HELP}"),
            Input::Quit => break,
        }

        if session.has_won() {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strands_core::PuzzleDefinition;

    fn session() -> Session {
        let board = "EOLATI\nVGRSTU\nINEISD\nPPHTOE\nEAOENS\nIMXPLA\nTCNTES\nEMEERU"
            .parse()
            .unwrap();
        Session::new(
            PuzzleDefinition::new("Positive emotions", board, "EMOTIONS")
                .with_answer_words(["LOVE"])
                .with_hint_words(["RATS"]),
        )
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_input("drag 0,2 0,1  1,0 0,0").unwrap(),
            Some(Input::Drag(vec![(0, 2), (0, 1), (1, 0), (0, 0)]))
        );
        assert_eq!(parse_input("HINT").unwrap(), Some(Input::Hint));
        assert_eq!(parse_input("q").unwrap(), Some(Input::Quit));
        assert_eq!(parse_input("   ").unwrap(), None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_input("drag").is_err());
        assert!(parse_input("drag 1;2").is_err());
        assert!(parse_input("drag 1,x").is_err());
        assert!(parse_input("drag 1, 2").is_err());
        assert!(parse_input("drag 300,0").is_err());
        assert!(parse_input("dance").is_err());
    }

    #[test]
    fn drag_reports_found_words() {
        let mut session = session();

        let outcome = drag(&mut session, &[(0, 2), (0, 1), (1, 0), (0, 0)]);
        assert_eq!(describe(&session, outcome), "Found LOVE");

        let outcome = drag(&mut session, &[(1, 2), (0, 3), (0, 4), (1, 3)]);
        assert_eq!(describe(&session, outcome), "Bonus word RATS, hint progress 1/3");

        let outcome = drag(&mut session, &[(7, 0), (7, 1)]);
        assert_eq!(describe(&session, outcome), "Not a word in this puzzle");
    }

    #[test]
    fn board_marks_found_cells() {
        let mut session = session();
        drag(&mut session, &[(0, 2), (0, 1), (1, 0), (0, 0)]);

        let rendered = render_board(&session).unwrap();
        let first_row = rendered.lines().nth(1).unwrap();

        assert_eq!(first_row, " 0 (E)(O)(L) A  T  I ");
        assert_eq!(rendered.lines().count(), 9);
    }

    #[test]
    fn status_summarizes_progress() {
        let session = session();

        assert_eq!(
            status(&session),
            "1 answers left, spangram not found, hints: 0 available, 0 used, 0% toward the next"
        );
    }
}
