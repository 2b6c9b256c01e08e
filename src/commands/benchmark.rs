//! Benchmark command
//!
//! Runs many fresh sessions per word length with randomly drawn targets and
//! aggregates attempt statistics. Targets run in parallel; each gets its own
//! seed derived from the master generator so runs stay reproducible.

use crate::core::Word;
use crate::dictionary::Dictionary;
use crate::solver::{FAILURE_SENTINEL, Session, StrategyKind};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub strategy: StrategyKind,
    pub seed: Option<u64>,
    /// Sessions per word length
    pub count: usize,
    pub lengths: Vec<usize>,
}

/// Aggregated statistics for one word length
pub struct LengthReport {
    pub length: usize,
    pub words_tested: usize,
    pub solved: usize,
    pub failed: usize,
    /// Mean attempts over solved sessions only
    pub mean_attempts: f64,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub distribution: HashMap<usize, usize>,
    pub mean_duration: Duration,
}

/// Full benchmark result across all requested lengths
pub struct BenchmarkReport {
    pub strategy: StrategyKind,
    pub lengths: Vec<LengthReport>,
    pub total_time: Duration,
}

/// Run the benchmark
///
/// Lengths the dictionary has no words for are skipped. Progress is shown
/// per target; failed sessions count toward `failed` and the mean duration
/// but not the attempt statistics.
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig, dictionary: &Dictionary) -> BenchmarkReport {
    let mut master = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let total_start = Instant::now();
    let mut reports = Vec::new();

    for &length in &config.lengths {
        if dictionary.words_of_length(length).is_none() {
            continue;
        }

        // Draw targets and per-target seeds up front so the parallel runs
        // stay deterministic for a given master seed.
        let runs: Vec<(Word, u64)> = (0..config.count)
            .filter_map(|_| {
                let target = dictionary.random_word(length, &mut master)?.clone();
                Some((target, master.random()))
            })
            .collect();

        let pb = ProgressBar::new(runs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb.set_message(format!("length {length}"));

        let outcomes: Vec<(i64, Duration)> = runs
            .par_iter()
            .map(|(target, seed)| {
                let start = Instant::now();
                let outcome = Session::new(target.clone(), dictionary)
                    .map_err(|e| e.to_string())
                    .and_then(|mut session| {
                        let mut strategy = config.strategy.build(Some(*seed));
                        strategy.solve(&mut session).map_err(|e| e.to_string())
                    })
                    .map_or(FAILURE_SENTINEL, |attempts| attempts as i64);
                pb.inc(1);
                (outcome, start.elapsed())
            })
            .collect();

        pb.finish_and_clear();
        reports.push(aggregate(length, &outcomes));
    }

    BenchmarkReport {
        strategy: config.strategy,
        lengths: reports,
        total_time: total_start.elapsed(),
    }
}

fn aggregate(length: usize, outcomes: &[(i64, Duration)]) -> LengthReport {
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut solved = 0;
    let mut failed = 0;
    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut total_duration = Duration::ZERO;

    for &(outcome, duration) in outcomes {
        total_duration += duration;
        if outcome == FAILURE_SENTINEL {
            failed += 1;
            continue;
        }
        let attempts = outcome as usize;
        solved += 1;
        total_attempts += attempts;
        min_attempts = min_attempts.min(attempts);
        max_attempts = max_attempts.max(attempts);
        *distribution.entry(attempts).or_insert(0) += 1;
    }

    let mean_attempts = if solved > 0 {
        total_attempts as f64 / solved as f64
    } else {
        0.0
    };
    let mean_duration = if outcomes.is_empty() {
        Duration::ZERO
    } else {
        total_duration / outcomes.len() as u32
    };

    LengthReport {
        length,
        words_tested: outcomes.len(),
        solved,
        failed,
        mean_attempts,
        min_attempts: if solved > 0 { min_attempts } else { 0 },
        max_attempts,
        distribution,
        mean_duration,
    }
}
