//! Minimax proposal strategy
//!
//! Works on a pool of dictionary words still consistent with all feedback
//! received. Each round it proposes the pool member whose worst possible
//! feedback outcome leaves the fewest indistinguishable alternatives, then
//! filters the pool with the actual feedback.

use super::error::SolveError;
use super::session::Session;
use super::strategy::Strategy;
use crate::core::{Feedback, Word, compatible};
use rustc_hash::FxHashMap;

/// Keep the pool members that could still be the hidden word
///
/// A candidate survives when it is compatible with the guess's feedback and
/// is not the rejected guess itself.
#[must_use]
pub fn filter_pool(pool: &[Word], guess: &Word, feedback: Feedback) -> Vec<Word> {
    pool.iter()
        .filter(|candidate| compatible(guess, feedback, candidate) && *candidate != guess)
        .cloned()
        .collect()
}

/// Size of the largest feedback group this guess can leave behind
///
/// Groups the other pool members by the feedback they would produce if the
/// guess were played against them; the biggest group is the worst case.
#[must_use]
pub fn worst_case_remaining(guess: &Word, pool: &[Word]) -> usize {
    let mut groups: FxHashMap<Feedback, usize> = FxHashMap::default();

    for member in pool {
        if member == guess {
            continue;
        }
        let feedback = Feedback::score(member, guess);
        *groups.entry(feedback).or_insert(0) += 1;
    }

    groups.values().max().copied().unwrap_or(0)
}

/// Pool member minimizing the worst-case residual pool
///
/// Ties break to the first-seen member, so the choice is deterministic for
/// a given pool order.
#[must_use]
pub fn choose_next(pool: &[Word]) -> Option<&Word> {
    let mut best: Option<(&Word, usize)> = None;

    for candidate in pool {
        let worst = worst_case_remaining(candidate, pool);
        match best {
            Some((_, current)) if worst >= current => {}
            _ => best = Some((candidate, worst)),
        }
    }

    best.map(|(word, _)| word)
}

/// Pool-filtering minimax strategy
#[derive(Debug, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn solve(&mut self, session: &mut Session) -> Result<usize, SolveError> {
        let length = session.word_length();
        let mut pool: Vec<Word> = session
            .dictionary()
            .words_of_length(length)
            .ok_or(SolveError::MissingLength(length))?
            .to_vec();

        loop {
            let guess = choose_next(&pool)
                .ok_or(SolveError::SearchExhausted)?
                .clone();

            let (solved, feedback) = session.attempt(&guess);
            if solved {
                return Ok(session.attempt_count());
            }
            pool = filter_pool(&pool, &guess, feedback);
        }
    }
}
