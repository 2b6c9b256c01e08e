//! Feedback oracle
//!
//! Scores a guess against a reference word as a pair of counts:
//! - `correct`: letters matching the reference at the same position
//! - `close`: additional reference letters matched at the wrong position
//!
//! Each reference letter is consumable at most once across both counts, which
//! is what makes duplicate letters behave: scoring "aba" against "aab" gives
//! one correct (the leading 'a') and two close (the displaced 'a' and 'b').

use super::{ALPHABET_LEN, Word};
use std::fmt;

/// Feedback for one guess: (correct, close) letter counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub correct: u8,
    pub close: u8,
}

impl Feedback {
    #[must_use]
    pub const fn new(correct: u8, close: u8) -> Self {
        Self { correct, close }
    }

    /// The feedback reported when a guess equals the reference
    #[must_use]
    pub fn perfect(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Score `guess` against `reference`
    ///
    /// First pass counts exact position matches and consumes those reference
    /// letters. Second pass walks the remaining guess letters and consumes one
    /// remaining reference occurrence per close match, so no reference letter
    /// is ever counted twice.
    ///
    /// Pure, deterministic, O(length). Both words must have the same length.
    ///
    /// # Panics
    /// Panics in debug mode if the lengths differ.
    #[must_use]
    pub fn score(reference: &Word, guess: &Word) -> Self {
        debug_assert_eq!(reference.len(), guess.len());

        let mut remaining: [u8; ALPHABET_LEN] = reference.letter_counts();
        let mut correct = 0u8;

        for (&r, &g) in reference.letters().iter().zip(guess.letters()) {
            if r == g {
                correct += 1;
                remaining[usize::from(r - b'a')] -= 1;
            }
        }

        let mut close = 0u8;
        for (&r, &g) in reference.letters().iter().zip(guess.letters()) {
            if r == g {
                continue;
            }
            let slot = &mut remaining[usize::from(g - b'a')];
            if *slot > 0 {
                close += 1;
                *slot -= 1;
            }
        }

        Self { correct, close }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} correct, {} close)", self.correct, self.close)
    }
}

/// One recorded guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub feedback: Feedback,
}

impl Attempt {
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }
}

/// Could `candidate` still be the hidden word, given a past guess and its feedback?
///
/// True exactly when `candidate` as the hidden word would have produced the
/// same feedback for that guess.
#[must_use]
pub fn compatible(past_guess: &Word, past_feedback: Feedback, candidate: &Word) -> bool {
    Feedback::score(candidate, past_guess) == past_feedback
}

/// Number of recorded attempts the given word is inconsistent with
///
/// Zero means the word is globally consistent with the whole history.
#[must_use]
pub fn incompatibilities(word: &Word, attempts: &[Attempt]) -> usize {
    attempts
        .iter()
        .filter(|attempt| !compatible(&attempt.guess, attempt.feedback, word))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn score_identical_words() {
        let w = word("crane");
        assert_eq!(Feedback::score(&w, &w), Feedback::perfect(5));
    }

    #[test]
    fn score_no_overlap() {
        let fb = Feedback::score(&word("abc"), &word("def"));
        assert_eq!(fb, Feedback::new(0, 0));
    }

    #[test]
    fn score_all_misplaced() {
        let fb = Feedback::score(&word("abc"), &word("cab"));
        assert_eq!(fb, Feedback::new(0, 3));
    }

    #[test]
    fn score_duplicate_letters() {
        // The canonical duplicate case: one 'a' correct, the other 'a' and
        // the 'b' close.
        let fb = Feedback::score(&word("aab"), &word("aba"));
        assert_eq!(fb, Feedback::new(1, 2));
    }

    #[test]
    fn score_duplicate_guess_letters_not_double_counted() {
        // Reference has a single 'a'; a guess with three misplaced 'a's may
        // only consume it once.
        let fb = Feedback::score(&word("xya"), &word("aax"));
        assert_eq!(fb, Feedback::new(0, 2));
    }

    #[test]
    fn score_correct_consumes_before_close() {
        // The matched 'a' at position 0 is no longer available for the
        // guess's second 'a'.
        let fb = Feedback::score(&word("abc"), &word("aab"));
        assert_eq!(fb, Feedback::new(1, 1));
    }

    #[test]
    fn score_counts_bounded_by_length() {
        let words = ["bat", "tab", "abt", "tta", "bbb"];
        for a in words {
            for b in words {
                let fb = Feedback::score(&word(a), &word(b));
                assert!(usize::from(fb.correct + fb.close) <= a.len());
            }
        }
    }

    #[test]
    fn compatible_with_own_feedback() {
        // The hidden word is always compatible with feedback it produced.
        let target = word("cat");
        let guess = word("bat");
        let fb = Feedback::score(&target, &guess);
        assert!(compatible(&guess, fb, &target));
    }

    #[test]
    fn compatible_rejects_wrong_candidate() {
        let target = word("cat");
        let guess = word("bat");
        let fb = Feedback::score(&target, &guess);
        // "bad" scores differently against "bat" than "cat" does.
        assert!(!compatible(&guess, fb, &word("bad")));
    }

    #[test]
    fn incompatibilities_counts_mismatches() {
        let target = word("cat");
        let guesses = [word("bat"), word("rat"), word("dog")];
        let attempts: Vec<Attempt> = guesses
            .iter()
            .map(|g| Attempt::new(g.clone(), Feedback::score(&target, g)))
            .collect();

        assert_eq!(incompatibilities(&target, &attempts), 0);
        // "cap" disagrees with at least one attempt's feedback.
        assert!(incompatibilities(&word("cap"), &attempts) > 0);
    }

    #[test]
    fn feedback_display() {
        assert_eq!(format!("{}", Feedback::new(2, 1)), "(2 correct, 1 close)");
    }
}
