use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
use strands_protocol::{BoardFile, DefinitionsFile, HintsFile, PuzzleData, WordsFile, read_json};

#[derive(Args, Debug)]
pub(crate) struct BundleArgs {
    /// Board file with `date` and `board`
    #[arg(long, default_value = "BOARD.json")]
    board: PathBuf,

    /// Words file with `theme`, `spangram` and the joined answer `words`
    #[arg(long, default_value = "WORDS.json")]
    words: PathBuf,

    /// Hint word list; without it the puzzle has no bonus words
    #[arg(long)]
    hints: Option<PathBuf>,

    /// Answer definitions
    #[arg(long, default_value = "DEFINE.json")]
    definitions: PathBuf,

    /// Where to write the puzzle, stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    read_json(path).with_context(|| format!("Could not load {}", path.display()))
}

pub(crate) fn run(args: &BundleArgs) -> anyhow::Result<()> {
    let board: BoardFile = load(&args.board)?;
    let words: WordsFile = load(&args.words)?;
    let hints: Option<HintsFile> = args.hints.as_deref().map(load).transpose()?;
    let definitions: DefinitionsFile = load(&args.definitions)?;

    let data = PuzzleData::from_parts(board, words, hints, definitions);
    // refuse to write a puzzle that can't be played
    data.clone()
        .into_definition()
        .context("Bundled puzzle failed validation")?;

    let json = data.to_json_string_pretty()?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Could not write {}", path.display()))?;
            log::info!("Puzzle written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
