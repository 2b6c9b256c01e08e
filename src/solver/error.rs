//! Solver error types

use std::fmt;
use std::time::Duration;

/// Attempt count reported to callers when a session ends without success
pub const FAILURE_SENTINEL: i64 = -1;

/// Errors a solving session can end with
///
/// All variants are local to one session; the shared dictionary is read-only
/// and never affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// No dictionary bucket exists for the requested word length
    ///
    /// Structural: reported before any guess is made.
    MissingLength(usize),
    /// Backtracking exhausted every domain at position 0 without success
    ///
    /// The target is not reachable under the current dictionary and
    /// constraints. Never silently retried.
    SearchExhausted,
    /// The population strategy produced no compatible candidate in its budget
    StochasticTimeout(Duration),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLength(length) => {
                write!(f, "Dictionary has no words of length {length}")
            }
            Self::SearchExhausted => {
                write!(f, "Search space exhausted without reaching the target")
            }
            Self::StochasticTimeout(budget) => {
                write!(
                    f,
                    "No compatible candidate found within {:.0}s budget",
                    budget.as_secs_f64()
                )
            }
        }
    }
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            SolveError::MissingLength(7).to_string(),
            "Dictionary has no words of length 7"
        );
        assert!(SolveError::SearchExhausted.to_string().contains("exhausted"));
        assert!(
            SolveError::StochasticTimeout(Duration::from_secs(300))
                .to_string()
                .contains("300s")
        );
    }
}
