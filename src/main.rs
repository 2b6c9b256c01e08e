//! Wordlemind - CLI
//!
//! Solves Mastermind-style word games where the hidden word is only visible
//! through (correct, close) feedback counts.

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordlemind::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, solve_target},
    dictionary::{Dictionary, SAMPLE_WORDS, loader},
    output::{print_benchmark_report, print_solve_report},
    solver::StrategyKind,
};

#[derive(Parser)]
#[command(
    name = "wordlemind",
    about = "Word-guessing solver with backtracking, minimax, and genetic strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: backtrack, forward (default), minimax, genetic, random
    #[arg(short, long, global = true, default_value = "forward")]
    strategy: String,

    /// Path to a word list file (one word per line); built-in list by default
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Seed for the stochastic strategies and target generation
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a target word (random when none is given)
    Solve {
        /// The hidden word to solve for
        word: Option<String>,

        /// Length of the random target when no word is given
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Show the full attempt trace
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark a strategy over many random targets
    Benchmark {
        /// Sessions per word length
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word lengths to test
        #[arg(short, long, num_args = 1.., default_values_t = [4, 5, 6])]
        lengths: Vec<usize>,
    },
}

fn load_dictionary(path: Option<&PathBuf>) -> Result<Dictionary> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to load word list from {}", path.display())),
        None => Ok(loader::dictionary_from_slice(SAMPLE_WORDS)),
    }
}

fn parse_strategy(name: &str) -> Result<StrategyKind> {
    StrategyKind::from_name(name).ok_or_else(|| {
        anyhow!(
            "Unknown strategy '{name}', expected one of: {}",
            StrategyKind::names().join(", ")
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dict.as_ref())?;
    if dictionary.word_count() == 0 {
        bail!("Word list is empty");
    }
    let strategy = parse_strategy(&cli.strategy)?;

    let command = cli.command.unwrap_or(Commands::Solve {
        word: None,
        length: 5,
        verbose: true,
    });

    match command {
        Commands::Solve {
            word,
            length,
            verbose,
        } => run_solve_command(word, length, verbose, strategy, cli.seed, &dictionary),
        Commands::Benchmark { count, lengths } => {
            let config = BenchmarkConfig {
                strategy,
                seed: cli.seed,
                count,
                lengths,
            };
            let report = run_benchmark(&config, &dictionary);
            if report.lengths.is_empty() {
                bail!("No requested word length exists in the word list");
            }
            print_benchmark_report(&report);
            Ok(())
        }
    }
}

fn run_solve_command(
    word: Option<String>,
    length: usize,
    verbose: bool,
    strategy: StrategyKind,
    seed: Option<u64>,
    dictionary: &Dictionary,
) -> Result<()> {
    let target = match word {
        Some(word) => word,
        None => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };
            dictionary
                .random_word(length, &mut rng)
                .ok_or_else(|| anyhow!("Word list has no words of length {length}"))?
                .text()
                .to_string()
        }
    };

    let config = SolveConfig::new(target, strategy, seed);
    let report = solve_target(config, dictionary).map_err(|e| anyhow!(e))?;
    print_solve_report(&report, verbose);

    if !report.solved() {
        let reason = report.failure.clone().unwrap_or_default();
        bail!("Solve failed: {reason}");
    }
    Ok(())
}
