//! Wordle Pilot - CLI
//!
//! Candidate filtering and ranking engine for 5-letter word games, with
//! self-play, interactive, benchmark, and corpus-building commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use wordle_pilot::{
    commands::{
        SolveConfig, build_commonality, rank_word, run_benchmark, run_simple, sample_targets,
        solve_word,
    },
    lexicon::LexiconIndex,
    output::{print_benchmark_result, print_rank_result, print_solve_result},
    solver::{CommonalityTable, Engine, Scoring},
    wordlists::{WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_pilot",
    about = "Wordle solver using lexicon filtering and letter-frequency ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scorer: positional (default) or letters (static weight table)
    #[arg(short, long, global = true, default_value = "positional")]
    scorer: String,

    /// Wordlist: 'embedded' (default) or path to a file of 5-letter words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Path to a commonality.json artifact (see the corpus command)
    #[arg(short = 'c', long, global = true)]
    commonality: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): suggests guesses, you enter feedback
    Simple {
        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Self-play against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,

        /// Override the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Show how a word scores against the lexicon
    Rank {
        /// Word to rank
        word: String,
    },

    /// Benchmark self-play over random lexicon words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Build a commonality.json artifact from a directory of .txt files
    Corpus {
        /// Directory of corpus text files
        dir: PathBuf,

        /// Output path for the JSON artifact
        #[arg(short, long, default_value = "commonality.json")]
        output: PathBuf,
    },
}

/// Load the lexicon based on the -w flag
fn load_lexicon(wordlist_mode: &str) -> Result<LexiconIndex> {
    let raw: Vec<String> = match wordlist_mode {
        "embedded" => WORDS.iter().map(|&w| w.to_owned()).collect(),
        path => load_from_file(path).with_context(|| format!("cannot read wordlist {path}"))?,
    };

    LexiconIndex::build(raw).context("invalid wordlist entry")
}

/// Load the optional commonality table
fn load_commonality(path: Option<&PathBuf>) -> Result<Option<CommonalityTable>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read commonality table {}", path.display()))?;
    let table = CommonalityTable::from_json(&json).context("invalid commonality table")?;

    Ok(Some(table))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let index = load_lexicon(&cli.wordlist)?;
    let commonality = load_commonality(cli.commonality.as_ref())?;

    let mut engine = Engine::new(&index, Scoring::from_name(&cli.scorer));
    if let Some(table) = commonality.as_ref() {
        engine = engine.with_commonality(table);
    }

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple { first_word: None });

    match command {
        Commands::Simple { first_word } => {
            run_simple(&engine, first_word.as_deref()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve {
            word,
            verbose,
            first_word,
        } => {
            let mut config = SolveConfig::new(word);
            config.first_word = first_word;

            let result = solve_word(config, &engine).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Rank { word } => {
            let result =
                rank_word(&word, &engine, commonality.as_ref()).map_err(|e| anyhow::anyhow!(e))?;
            print_rank_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} random words...");

            let targets = sample_targets(index.words(), count);
            let result = run_benchmark(&engine, &targets);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Corpus { dir, output } => {
            let table = build_commonality(&dir, &index).map_err(|e| anyhow::anyhow!(e))?;
            let json = table.to_json().context("cannot serialize commonality table")?;
            fs::write(&output, json)
                .with_context(|| format!("cannot write {}", output.display()))?;

            println!(
                "Wrote {} attested words to {}",
                table.len(),
                output.display()
            );
            Ok(())
        }
    }
}
