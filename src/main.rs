//! Wordle Guesser - CLI
//!
//! Filters `words.txt` by the letters and positions a Wordle game has revealed
//! and prints the matches with a letter-frequency ranking.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use wordle_guesser::{
    commands::{Config, generate_report},
    output::print_report,
    wordlists::{DEFAULT_WORDLIST, WORD_LENGTH, filter_by_length, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "guesser",
    about = "An application to guess words based on a pattern",
    version,
    author
)]
struct Cli {
    /// The letters to include
    #[arg(short, long, default_value = "")]
    include: String,

    /// The letters to exclude
    #[arg(short, long, default_value = "")]
    exclude: String,

    /// A string of letters that are in the right position, '-' for unknown (e.g. "j----")
    #[arg(short, long, default_value = "")]
    pattern: String,

    /// A string of letters that are in the wrong position, '-' for none (e.g. "-e---")
    #[arg(short = 'a', long = "antipattern", default_value = "")]
    anti_pattern: String,

    /// Newline-delimited word list to filter
    #[arg(short = 'w', long, default_value = DEFAULT_WORDLIST)]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the report without terminal colors
    #[arg(long)]
    no_color: bool,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            include: cli.include.clone(),
            exclude: cli.exclude.clone(),
            pattern: cli.pattern.clone(),
            anti_pattern: cli.anti_pattern.clone(),
        }
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .format_timestamp(None)
        .init();

    log::debug!("guesser called");

    let words = load_from_file(&cli.wordlist)
        .with_context(|| format!("Error opening file {}", cli.wordlist))?;
    let words = filter_by_length(&words, WORD_LENGTH);
    log::debug!("{} words of length {WORD_LENGTH}", words.len());

    let report = generate_report(&words, &Config::from(&cli))?;
    print_report(&report, !cli.no_color);
    Ok(())
}
