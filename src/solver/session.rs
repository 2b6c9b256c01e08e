//! Game session
//!
//! A Session owns everything one game mutates: the hidden target, the
//! append-only attempt history, the attempt counter, and the persistent
//! domain store. Strategies only ever see the target through the feedback
//! returned by [`Session::attempt`].

use super::domain::DomainStore;
use super::error::SolveError;
use crate::core::{Attempt, Feedback, Word};
use crate::dictionary::Dictionary;

/// Passive observer of every attempt a session makes
///
/// Push-only: implementations may display or record attempts but cannot
/// influence the solve.
pub trait AttemptTracer {
    fn on_attempt(&mut self, guess: &Word, feedback: Feedback);
}

/// One game: hidden target, history, counters, and domain state
pub struct Session<'a> {
    target: Word,
    dictionary: &'a Dictionary,
    domains: DomainStore,
    attempts: Vec<Attempt>,
    attempt_count: usize,
    tracer: Option<&'a mut dyn AttemptTracer>,
}

impl<'a> Session<'a> {
    /// Start a session for the given hidden target
    ///
    /// # Errors
    /// Returns [`SolveError::MissingLength`] when the dictionary has no
    /// bucket for the target's length, before any guess is made.
    pub fn new(target: Word, dictionary: &'a Dictionary) -> Result<Self, SolveError> {
        let length = target.len();
        if dictionary.words_of_length(length).is_none() {
            return Err(SolveError::MissingLength(length));
        }

        Ok(Self {
            target,
            dictionary,
            domains: DomainStore::full(length),
            attempts: Vec::new(),
            attempt_count: 0,
            tracer: None,
        })
    }

    /// Attach a passive attempt observer
    pub fn set_tracer(&mut self, tracer: &'a mut dyn AttemptTracer) {
        self.tracer = Some(tracer);
    }

    /// Submit a real guess and receive its feedback
    ///
    /// Consumes one attempt. Returns `(true, perfect)` when the guess is the
    /// target; the winning guess is not appended to the history. Failed
    /// guesses are recorded and reported to the tracer.
    pub fn attempt(&mut self, guess: &Word) -> (bool, Feedback) {
        self.attempt_count += 1;

        if *guess == self.target {
            let feedback = Feedback::perfect(guess.len());
            if let Some(tracer) = self.tracer.as_deref_mut() {
                tracer.on_attempt(guess, feedback);
            }
            return (true, feedback);
        }

        let feedback = Feedback::score(&self.target, guess);
        self.attempts.push(Attempt::new(guess.clone(), feedback));
        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.on_attempt(guess, feedback);
        }

        (false, feedback)
    }

    /// Number of letters in the hidden word
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// Attempts consumed so far, including the winning one
    #[must_use]
    pub const fn attempt_count(&self) -> usize {
        self.attempt_count
    }

    /// Ordered history of failed attempts
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// Persistent per-position domains, pruned as feedback accumulates
    #[must_use]
    pub const fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub const fn domains_mut(&mut self) -> &mut DomainStore {
        &mut self.domains
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::loader::dictionary_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn dict() -> Dictionary {
        dictionary_from_slice(&["bat", "cat", "rat", "bad"])
    }

    #[test]
    fn new_session_rejects_missing_bucket() {
        let dictionary = dict();
        let result = Session::new(word("horse"), &dictionary);
        assert_eq!(result.err(), Some(SolveError::MissingLength(5)));
    }

    #[test]
    fn attempt_scores_and_records() {
        let dictionary = dict();
        let mut session = Session::new(word("cat"), &dictionary).unwrap();

        let (done, feedback) = session.attempt(&word("bat"));
        assert!(!done);
        assert_eq!(feedback, Feedback::new(2, 0));
        assert_eq!(session.attempt_count(), 1);
        assert_eq!(session.attempts().len(), 1);
        assert_eq!(session.attempts()[0].guess, word("bat"));
    }

    #[test]
    fn winning_attempt_not_recorded() {
        let dictionary = dict();
        let mut session = Session::new(word("cat"), &dictionary).unwrap();

        session.attempt(&word("bat"));
        let (done, feedback) = session.attempt(&word("cat"));

        assert!(done);
        assert_eq!(feedback, Feedback::perfect(3));
        assert_eq!(session.attempt_count(), 2);
        // Only the failed guess is in the history.
        assert_eq!(session.attempts().len(), 1);
    }

    #[test]
    fn history_is_append_only() {
        let dictionary = dict();
        let mut session = Session::new(word("cat"), &dictionary).unwrap();

        session.attempt(&word("bat"));
        session.attempt(&word("rat"));

        let guesses: Vec<&str> = session
            .attempts()
            .iter()
            .map(|a| a.guess.text())
            .collect();
        assert_eq!(guesses, vec!["bat", "rat"]);
    }

    #[test]
    fn tracer_sees_every_attempt() {
        #[derive(Default)]
        struct Recorder(Vec<(String, Feedback)>);

        impl AttemptTracer for Recorder {
            fn on_attempt(&mut self, guess: &Word, feedback: Feedback) {
                self.0.push((guess.text().to_string(), feedback));
            }
        }

        let dictionary = dict();
        let mut recorder = Recorder::default();
        {
            let mut session = Session::new(word("cat"), &dictionary).unwrap();
            session.set_tracer(&mut recorder);
            session.attempt(&word("bat"));
            session.attempt(&word("cat"));
        }

        assert_eq!(recorder.0.len(), 2);
        assert_eq!(recorder.0[0].0, "bat");
        assert_eq!(recorder.0[1], ("cat".to_string(), Feedback::perfect(3)));
    }

    #[test]
    fn domains_start_full() {
        let dictionary = dict();
        let session = Session::new(word("cat"), &dictionary).unwrap();
        assert_eq!(session.domains().len(), 3);
        assert_eq!(session.domains().get(0).len(), 26);
    }
}
