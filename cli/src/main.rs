use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod bundle;
mod check;
mod play;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a puzzle file and report any problems with it
    Check {
        puzzle: PathBuf,
    },
    /// Merge the scraped board, words, hints and definitions files into one puzzle file
    Bundle(bundle::BundleArgs),
    /// Play a puzzle, reading moves from stdin
    Play {
        puzzle: PathBuf,

        /// Force a seed for hint selection instead of random
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Command::Check { puzzle } => check::run(&puzzle),
        Command::Bundle(bundle_args) => bundle::run(&bundle_args),
        Command::Play { puzzle, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            log::debug!("seed: {seed}");
            play::run(&puzzle, seed)
        }
    }
}
