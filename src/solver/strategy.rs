//! Strategy trait and dispatch
//!
//! Every solving algorithm drives a [`Session`] through the same trait, so
//! commands can swap strategies by name without caring which one runs.

use super::backtracking::BacktrackingStrategy;
use super::error::SolveError;
use super::genetic::{GeneticConfig, GeneticStrategy};
use super::minimax::MinimaxStrategy;
use super::session::Session;
use crate::core::{Word, compatible};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A solving algorithm
///
/// `solve` drives the session until the target is found or the strategy
/// gives up, answering the number of attempts consumed on success.
pub trait Strategy {
    fn solve(&mut self, session: &mut Session) -> Result<usize, SolveError>;
}

/// Baseline: guess uniformly from the words still compatible with feedback
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn solve(&mut self, session: &mut Session) -> Result<usize, SolveError> {
        let length = session.word_length();
        let mut pool: Vec<Word> = session
            .dictionary()
            .words_of_length(length)
            .ok_or(SolveError::MissingLength(length))?
            .to_vec();

        loop {
            let guess = pool
                .choose(&mut self.rng)
                .ok_or(SolveError::SearchExhausted)?
                .clone();

            let (solved, feedback) = session.attempt(&guess);
            if solved {
                return Ok(session.attempt_count());
            }
            pool.retain(|candidate| {
                compatible(&guess, feedback, candidate) && *candidate != guess
            });
        }
    }
}

/// Named strategy selection for the command layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Plain chronological backtracking
    Backtrack,
    /// Backtracking with prefix-tree forward checking
    Forward,
    /// Pool-filtering minimax
    Minimax,
    /// Population-based stochastic search
    Genetic,
    /// Uniform random baseline
    Random,
}

impl StrategyKind {
    /// Parse a strategy name as given on the command line
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "backtrack" => Some(Self::Backtrack),
            "forward" => Some(Self::Forward),
            "minimax" => Some(Self::Minimax),
            "genetic" => Some(Self::Genetic),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Every recognized name, for help text and error messages
    #[must_use]
    pub const fn names() -> &'static [&'static str] {
        &["backtrack", "forward", "minimax", "genetic", "random"]
    }

    /// Build a fresh strategy instance
    ///
    /// The seed only affects the stochastic strategies; the deterministic
    /// ones ignore it.
    #[must_use]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            Self::Backtrack => Box::new(BacktrackingStrategy::new(false)),
            Self::Forward => Box::new(BacktrackingStrategy::new(true)),
            Self::Minimax => Box::new(MinimaxStrategy),
            Self::Genetic => Box::new(GeneticStrategy::new(GeneticConfig::default(), seed)),
            Self::Random => Box::new(RandomStrategy::new(seed)),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Backtrack => "backtrack",
            Self::Forward => "forward",
            Self::Minimax => "minimax",
            Self::Genetic => "genetic",
            Self::Random => "random",
        };
        f.write_str(name)
    }
}
