//! Single-target solving command
//!
//! Solves one hidden word with a chosen strategy and returns the full
//! attempt trace.

use crate::core::{Feedback, Word};
use crate::dictionary::Dictionary;
use crate::solver::{AttemptTracer, FAILURE_SENTINEL, Session, SolveError, StrategyKind};
use std::time::{Duration, Instant};

/// Configuration for solving one target
pub struct SolveConfig {
    pub target: String,
    pub strategy: StrategyKind,
    pub seed: Option<u64>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, strategy: StrategyKind, seed: Option<u64>) -> Self {
        Self {
            target,
            strategy,
            seed,
        }
    }
}

/// One attempt as seen from the outside
pub struct AttemptStep {
    pub word: String,
    pub feedback: Feedback,
}

/// Result of solving one target
pub struct SolveReport {
    pub target: String,
    pub strategy: StrategyKind,
    /// Attempts consumed, or `-1` when the strategy gave up
    pub outcome: i64,
    pub steps: Vec<AttemptStep>,
    pub duration: Duration,
    /// Why the solve gave up, when it did
    pub failure: Option<String>,
}

impl SolveReport {
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.outcome != FAILURE_SENTINEL
    }
}

/// Records every attempt the session makes
#[derive(Default)]
struct TraceRecorder {
    steps: Vec<AttemptStep>,
}

impl AttemptTracer for TraceRecorder {
    fn on_attempt(&mut self, guess: &Word, feedback: Feedback) {
        self.steps.push(AttemptStep {
            word: guess.text().to_string(),
            feedback,
        });
    }
}

/// Solve a specific target word
///
/// # Errors
///
/// Returns an error if the target is not a well-formed word or the
/// dictionary has no bucket for its length. A strategy that runs out of
/// search space or budget is not an error here; the report carries the
/// `-1` outcome and the reason instead.
pub fn solve_target(config: SolveConfig, dictionary: &Dictionary) -> Result<SolveReport, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut recorder = TraceRecorder::default();
    let start = Instant::now();

    let result = {
        let mut session = Session::new(target, dictionary).map_err(|e| e.to_string())?;
        session.set_tracer(&mut recorder);
        let mut strategy = config.strategy.build(config.seed);
        strategy.solve(&mut session)
    };
    let duration = start.elapsed();

    let (outcome, failure) = match result {
        Ok(attempts) => (attempts as i64, None),
        // Structural failures are caught at session construction; anything
        // here means the search itself gave up.
        Err(error @ (SolveError::SearchExhausted | SolveError::StochasticTimeout(_))) => {
            (FAILURE_SENTINEL, Some(error.to_string()))
        }
        Err(error) => return Err(error.to_string()),
    };

    Ok(SolveReport {
        target: config.target,
        strategy: config.strategy,
        outcome,
        steps: recorder.steps,
        duration,
        failure,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::dictionary_from_slice;

    #[test]
    fn solve_reports_trace_and_outcome() {
        let dictionary = dictionary_from_slice(&["bat", "cat", "rat", "bad"]);
        let config = SolveConfig::new("cat".to_string(), StrategyKind::Minimax, None);

        let report = solve_target(config, &dictionary).unwrap();

        assert!(report.solved());
        assert_eq!(report.outcome, report.steps.len() as i64);
        assert_eq!(report.steps.last().unwrap().word, "cat");
        assert!(report.failure.is_none());
    }

    #[test]
    fn solve_rejects_malformed_target() {
        let dictionary = dictionary_from_slice(&["bat"]);
        let config = SolveConfig::new("b4t".to_string(), StrategyKind::Backtrack, None);
        assert!(solve_target(config, &dictionary).is_err());
    }

    #[test]
    fn solve_rejects_missing_length() {
        let dictionary = dictionary_from_slice(&["bat"]);
        let config = SolveConfig::new("horse".to_string(), StrategyKind::Backtrack, None);
        assert!(solve_target(config, &dictionary).is_err());
    }

    #[test]
    fn unreachable_target_reports_sentinel() {
        // "cow" has the right length but is not in the dictionary.
        let dictionary = dictionary_from_slice(&["bat", "rat"]);
        let config = SolveConfig::new("cow".to_string(), StrategyKind::Backtrack, None);

        let report = solve_target(config, &dictionary).unwrap();

        assert!(!report.solved());
        assert_eq!(report.outcome, FAILURE_SENTINEL);
        assert!(report.failure.is_some());
    }

    #[test]
    fn seeded_solves_are_reproducible() {
        let dictionary = dictionary_from_slice(&["bat", "cat", "rat", "bad", "can", "cap"]);

        let run = || {
            let config = SolveConfig::new("cat".to_string(), StrategyKind::Random, Some(5));
            solve_target(config, &dictionary).unwrap()
        };

        let (a, b) = (run(), run());
        assert_eq!(a.outcome, b.outcome);
        let words_a: Vec<&str> = a.steps.iter().map(|s| s.word.as_str()).collect();
        let words_b: Vec<&str> = b.steps.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words_a, words_b);
    }
}
