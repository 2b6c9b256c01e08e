//! Chronological backtracking search
//!
//! Assigns letters position by position, each position trying its domain's
//! letters in fixed a..z order. Complete assignments are validated against
//! the dictionary and the attempt history before being issued as a real
//! guess; a rejected guess prunes the session's persistent domains and the
//! search resumes at the same position, since other words may share the
//! prefix. When a position runs out of letters the search restores that
//! branch's domain snapshot and backs up one position. Running out at
//! position 0 is fatal.
//!
//! With forward checking enabled, every advance walks the prefix-tree
//! subtree under the current partial assignment and prunes unassigned
//! positions down to the letters actually reachable by some completion.

use super::domain::{Domain, DomainStore};
use super::error::SolveError;
use super::session::Session;
use super::strategy::Strategy;
use crate::core::{Word, incompatibilities};
use crate::dictionary::TrieNode;

/// Counters from the most recent search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Partial assignments extended (states visited)
    pub nodes: usize,
    /// Complete words checked against dictionary and history
    pub validations: usize,
}

/// One branch point of the search
struct Frame {
    /// Letters to try at this position, in fixed order
    candidates: Vec<u8>,
    next: usize,
    /// Working domains as they were on entry: this position only (plain),
    /// or this position through the end (forward checking)
    saved: Vec<Domain>,
}

/// Backtracking constraint-search strategy
///
/// `forward_checking` switches on prefix-tree pruning of unassigned
/// positions after every successful advance.
pub struct BacktrackingStrategy {
    forward_checking: bool,
    stats: SearchStats,
}

impl BacktrackingStrategy {
    #[must_use]
    pub const fn new(forward_checking: bool) -> Self {
        Self {
            forward_checking,
            stats: SearchStats {
                nodes: 0,
                validations: 0,
            },
        }
    }

    /// Counters from the most recent [`solve`](Strategy::solve) call
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Snapshot of the working domains a new frame must restore on backtrack
    fn branch_snapshot(&self, working: &DomainStore, position: usize) -> Vec<Domain> {
        if self.forward_checking {
            working.snapshot_from(position)
        } else {
            vec![working.get(position)]
        }
    }
}

impl Strategy for BacktrackingStrategy {
    fn solve(&mut self, session: &mut Session) -> Result<usize, SolveError> {
        let length = session.word_length();
        self.stats = SearchStats::default();

        // Working copy of the persistent domains; frames snapshot slices of
        // it, feedback reductions land on the persistent store and are
        // intersected back in so a restore can never resurrect them.
        let mut working = session.domains().clone();
        let mut assignment: Vec<u8> = Vec::with_capacity(length);
        let mut frames: Vec<Frame> = vec![Frame {
            candidates: working.get(0).letters().collect(),
            next: 0,
            saved: self.branch_snapshot(&working, 0),
        }];

        loop {
            let position = frames.len() - 1;
            let frame = match frames.last_mut() {
                Some(frame) => frame,
                None => return Err(SolveError::SearchExhausted),
            };

            // Advance: next letter still allowed at this position.
            let mut letter = None;
            while frame.next < frame.candidates.len() {
                let candidate = frame.candidates[frame.next];
                frame.next += 1;
                if working.get(position).contains(candidate) {
                    letter = Some(candidate);
                    break;
                }
            }

            let Some(letter) = letter else {
                // Backtrack: restore this branch's snapshot and back up.
                if let Some(frame) = frames.pop() {
                    working.restore(position, &frame.saved);
                    working.intersect_from(position, session.domains());
                }
                if frames.is_empty() {
                    return Err(SolveError::SearchExhausted);
                }
                assignment.pop();
                continue;
            };

            assignment.push(letter);
            self.stats.nodes += 1;

            if assignment.len() == length {
                // Validate the complete word.
                self.stats.validations += 1;
                let candidate = Word::from_letters(&assignment);
                let valid = session.dictionary().contains(&candidate)
                    && incompatibilities(&candidate, session.attempts()) == 0;

                if valid {
                    let (solved, feedback) = session.attempt(&candidate);
                    if solved {
                        return Ok(session.attempt_count());
                    }
                    // Prune persistently, then fold the new constraints into
                    // the working domains and every live snapshot.
                    session.domains_mut().reduce(&candidate, feedback);
                    working.intersect_from(0, session.domains());
                    for (base, frame) in frames.iter_mut().enumerate() {
                        for (offset, slot) in frame.saved.iter_mut().enumerate() {
                            slot.intersect(session.domains().get(base + offset));
                        }
                    }
                }

                // Same position next: other candidates may share the prefix.
                assignment.pop();
                continue;
            }

            // Push the next position's frame.
            let next_position = position + 1;
            let saved = self.branch_snapshot(&working, next_position);

            if self.forward_checking {
                match session
                    .dictionary()
                    .trie()
                    .descend_prefix(length, &assignment)
                {
                    Some(subtree) => forward_check(subtree, &mut working, next_position),
                    // No dictionary word starts with this prefix.
                    None => working.clear_from(next_position),
                }
            }

            frames.push(Frame {
                candidates: working.get(next_position).letters().collect(),
                next: 0,
                saved,
            });
        }
    }
}

/// Prune unassigned positions to the letters reachable through the trie
///
/// `subtree` is the node reached by consuming the current assignment.
/// A depth-first walk descends only through letters still in each depth's
/// domain, accumulating the reachable letters per depth; every domain from
/// `from` on is then intersected with its reachable set. Letters of any
/// dictionary word consistent with the domains are reachable by
/// construction, so the true target is never pruned.
pub(crate) fn forward_check(subtree: &TrieNode, working: &mut DomainStore, from: usize) {
    let length = working.len();
    let mut reachable = vec![Domain::EMPTY; length - from];

    walk(subtree, from, working, &mut reachable);

    for (offset, allowed) in reachable.iter().enumerate() {
        working.get_mut(from + offset).intersect(*allowed);
    }

    fn walk(node: &TrieNode, depth: usize, working: &DomainStore, reachable: &mut [Domain]) {
        if depth == working.len() {
            return;
        }
        let offset = depth - (working.len() - reachable.len());
        for letter in node.child_letters() {
            reachable[offset].insert(letter);
        }
        for letter in working.get(depth).letters() {
            if let Some(child) = node.descend(letter) {
                walk(child, depth + 1, working, reachable);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;
    use crate::dictionary::{Dictionary, loader::dictionary_from_slice};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dict(words: &[&str]) -> Dictionary {
        dictionary_from_slice(words)
    }

    fn solve_with(
        target: &str,
        words: &[&str],
        forward_checking: bool,
    ) -> (Result<usize, SolveError>, SearchStats) {
        let dictionary = dict(words);
        let mut session = Session::new(word(target), &dictionary).unwrap();
        let mut strategy = BacktrackingStrategy::new(forward_checking);
        let result = strategy.solve(&mut session);
        (result, strategy.stats())
    }

    #[test]
    fn plain_search_finds_target() {
        let (result, stats) = solve_with("cat", &["bat", "cat", "rat", "bad"], false);
        let attempts = result.unwrap();
        assert!(attempts >= 1);
        assert!(stats.nodes > 0);
        // Finite bound on the state space.
        assert!(stats.nodes <= 26usize.pow(3));
    }

    #[test]
    fn forward_checking_finds_target() {
        let (result, _) = solve_with("cat", &["bat", "cat", "rat", "bad"], true);
        assert!(result.unwrap() >= 1);
    }

    #[test]
    fn forward_checking_validates_no_more_words() {
        let words = &[
            "bat", "bad", "bag", "can", "cap", "car", "cat", "cow", "dog", "rat",
        ];
        for target in ["cat", "rat", "dog"] {
            let (plain, plain_stats) = solve_with(target, words, false);
            let (forward, forward_stats) = solve_with(target, words, true);

            assert_eq!(plain.unwrap(), forward.unwrap());
            assert!(
                forward_stats.validations <= plain_stats.validations,
                "target {target}: forward {} > plain {}",
                forward_stats.validations,
                plain_stats.validations
            );
        }
    }

    #[test]
    fn search_is_deterministic() {
        let words = &["bat", "cat", "rat", "bad", "cab", "tab"];
        let (a, stats_a) = solve_with("tab", words, true);
        let (b, stats_b) = solve_with("tab", words, true);
        assert_eq!(a.unwrap(), b.unwrap());
        assert_eq!(stats_a, stats_b);
    }

    #[test]
    fn exhausts_when_target_unreachable() {
        // The target is not a dictionary word, so validation can never
        // issue it and every domain eventually empties.
        let dictionary = dict(&["bat", "rat"]);
        let mut session = Session::new(word("cow"), &dictionary).unwrap();
        let mut strategy = BacktrackingStrategy::new(false);
        assert_eq!(
            strategy.solve(&mut session),
            Err(SolveError::SearchExhausted)
        );
    }

    #[test]
    fn exhausts_with_forward_checking_too() {
        let dictionary = dict(&["bat", "rat"]);
        let mut session = Session::new(word("cow"), &dictionary).unwrap();
        let mut strategy = BacktrackingStrategy::new(true);
        assert_eq!(
            strategy.solve(&mut session),
            Err(SolveError::SearchExhausted)
        );
    }

    #[test]
    fn forward_check_prunes_to_reachable_letters() {
        // After assigning the prefix "ca", position 2 must prune from the
        // full alphabet to exactly the dictionary completions.
        let dictionary = dict(&["cat", "car", "can"]);
        let mut working = DomainStore::full(3);

        let subtree = dictionary.trie().descend_prefix(3, b"ca").unwrap();
        forward_check(subtree, &mut working, 2);

        let letters: Vec<u8> = working.get(2).letters().collect();
        assert_eq!(letters, vec![b'n', b'r', b't']);
    }

    #[test]
    fn forward_check_respects_current_domains() {
        // If 'a' is already excluded at position 1, completions through it
        // must not count as reachable.
        let dictionary = dict(&["cat", "cot", "cup"]);
        let mut working = DomainStore::full(3);
        working.get_mut(1).remove(b'a');

        let subtree = dictionary.trie().root_of(3).unwrap();
        forward_check(subtree, &mut working, 0);

        let last: Vec<u8> = working.get(2).letters().collect();
        // "cat" is unreachable, so only 't' (cot) and 'p' (cup) survive.
        assert_eq!(last, vec![b'p', b't']);
    }

    #[test]
    fn forward_check_never_prunes_target() {
        let dictionary = dict(&["cat", "car", "can", "bat", "bad"]);
        let target = word("can");

        let mut working = DomainStore::full(3);
        let subtree = dictionary.trie().root_of(3).unwrap();
        forward_check(subtree, &mut working, 0);

        for (position, &letter) in target.letters().iter().enumerate() {
            assert!(working.get(position).contains(letter));
        }
    }

    #[test]
    fn solved_session_recorded_history_is_consistent() {
        let dictionary = dict(&["bat", "cat", "rat", "bad", "tab"]);
        let target = word("rat");
        let mut session = Session::new(target.clone(), &dictionary).unwrap();
        let mut strategy = BacktrackingStrategy::new(true);

        let attempts = strategy.solve(&mut session).unwrap();
        assert_eq!(session.attempt_count(), attempts);

        // Every recorded feedback matches the oracle for the real target.
        for attempt in session.attempts() {
            assert_eq!(Feedback::score(&target, &attempt.guess), attempt.feedback);
        }
    }

    #[test]
    fn single_letter_words() {
        let (result, _) = solve_with("c", &["a", "b", "c"], false);
        let attempts = result.unwrap();
        // Fixed a..z order guesses a, b, then c.
        assert_eq!(attempts, 3);
    }
}
