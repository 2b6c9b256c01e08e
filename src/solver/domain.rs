//! Per-position candidate-letter domains
//!
//! A domain is the set of letters still possible at one position of the
//! hidden word, stored as a 26-bit mask. Iteration is always in a..z order,
//! which gives the search its fixed, reproducible letter ordering, and makes
//! snapshots plain copies.

use crate::core::{ALPHABET_LEN, Feedback, Word};
use std::fmt;

/// Set of letters still possible at one position
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Domain(u32);

impl Domain {
    /// All 26 letters
    pub const FULL: Self = Self((1 << ALPHABET_LEN) - 1);

    /// No letters left
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        1 << (letter - b'a')
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !Self::bit(letter);
    }

    #[inline]
    pub const fn intersect(&mut self, other: Self) {
        self.0 &= other.0;
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters of the domain in ascending (a..z) order
    pub fn letters(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&l| self.contains(l))
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Debug for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.letters().map(char::from).collect();
        write!(f, "Domain({letters})")
    }
}

/// Mutable store of one domain per word position
///
/// Owned by a [`Session`](super::Session) as persistent constraint state;
/// the backtracking search works on a clone and snapshots slices of it at
/// each branch point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    slots: Vec<Domain>,
}

impl DomainStore {
    /// All positions start with the full alphabet
    #[must_use]
    pub fn full(length: usize) -> Self {
        Self {
            slots: vec![Domain::FULL; length],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Domain at one position
    ///
    /// # Panics
    /// Panics if `position` is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Domain {
        self.slots[position]
    }

    #[inline]
    pub fn get_mut(&mut self, position: usize) -> &mut Domain {
        &mut self.slots[position]
    }

    /// Copy of the domains from `from` to the end
    #[must_use]
    pub fn snapshot_from(&self, from: usize) -> Vec<Domain> {
        self.slots[from..].to_vec()
    }

    /// Write a snapshot back, starting at `from`
    ///
    /// # Panics
    /// Panics if the snapshot extends past the end of the store.
    pub fn restore(&mut self, from: usize, saved: &[Domain]) {
        self.slots[from..from + saved.len()].copy_from_slice(saved);
    }

    /// Intersect every position from `from` on with the other store
    pub fn intersect_from(&mut self, from: usize, other: &Self) {
        for (slot, &constraint) in self.slots[from..].iter_mut().zip(&other.slots[from..]) {
            slot.intersect(constraint);
        }
    }

    /// Empty out every domain from `from` on
    pub fn clear_from(&mut self, from: usize) {
        for slot in &mut self.slots[from..] {
            *slot = Domain::EMPTY;
        }
    }

    /// Apply the domain reduction a rejected guess and its feedback justify
    ///
    /// - no correct, no close: none of the guessed letters occur anywhere,
    ///   so remove them all from every position;
    /// - no correct, some close: each guessed letter is misplaced, so remove
    ///   `guess[i]` from position `i` only;
    /// - any correct: no removal is sound without knowing which positions
    ///   matched, so leave the domains alone.
    ///
    /// Never removes the hidden word's letter at any position.
    pub fn reduce(&mut self, guess: &Word, feedback: Feedback) {
        if feedback.correct > 0 {
            return;
        }

        if feedback.close == 0 {
            for slot in &mut self.slots {
                for &letter in guess.letters() {
                    slot.remove(letter);
                }
            }
        } else {
            for (slot, &letter) in self.slots.iter_mut().zip(guess.letters()) {
                slot.remove(letter);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn domain_full_and_empty() {
        assert_eq!(Domain::FULL.len(), 26);
        assert!(Domain::FULL.contains(b'a'));
        assert!(Domain::FULL.contains(b'z'));
        assert!(Domain::EMPTY.is_empty());
        assert_eq!(Domain::EMPTY.len(), 0);
    }

    #[test]
    fn domain_insert_remove() {
        let mut d = Domain::FULL;
        d.remove(b'c');
        assert!(!d.contains(b'c'));
        assert_eq!(d.len(), 25);

        d.insert(b'c');
        assert!(d.contains(b'c'));
        assert_eq!(d, Domain::FULL);
    }

    #[test]
    fn domain_letters_ascending() {
        let mut d = Domain::EMPTY;
        d.insert(b't');
        d.insert(b'a');
        d.insert(b'm');

        let letters: Vec<u8> = d.letters().collect();
        assert_eq!(letters, vec![b'a', b'm', b't']);
    }

    #[test]
    fn domain_intersect() {
        let mut a = Domain::EMPTY;
        a.insert(b'a');
        a.insert(b'b');
        let mut b = Domain::EMPTY;
        b.insert(b'b');
        b.insert(b'c');

        a.intersect(b);
        let letters: Vec<u8> = a.letters().collect();
        assert_eq!(letters, vec![b'b']);
    }

    #[test]
    fn store_snapshot_restore() {
        let mut store = DomainStore::full(4);
        let saved = store.snapshot_from(1);

        store.get_mut(1).remove(b'a');
        store.get_mut(3).remove(b'z');
        assert_ne!(store.get(1), Domain::FULL);

        store.restore(1, &saved);
        assert_eq!(store.get(1), Domain::FULL);
        assert_eq!(store.get(3), Domain::FULL);
    }

    #[test]
    fn store_clear_from() {
        let mut store = DomainStore::full(3);
        store.clear_from(1);
        assert_eq!(store.get(0), Domain::FULL);
        assert!(store.get(1).is_empty());
        assert!(store.get(2).is_empty());
    }

    #[test]
    fn reduce_all_absent_removes_everywhere() {
        let mut store = DomainStore::full(3);
        store.reduce(&word("bat"), Feedback::new(0, 0));

        for position in 0..3 {
            let d = store.get(position);
            assert!(!d.contains(b'b'));
            assert!(!d.contains(b'a'));
            assert!(!d.contains(b't'));
            assert_eq!(d.len(), 23);
        }
    }

    #[test]
    fn reduce_misplaced_removes_per_position() {
        let mut store = DomainStore::full(3);
        store.reduce(&word("bat"), Feedback::new(0, 2));

        assert!(!store.get(0).contains(b'b'));
        assert!(store.get(0).contains(b'a'));
        assert!(!store.get(1).contains(b'a'));
        assert!(store.get(1).contains(b'b'));
        assert!(!store.get(2).contains(b't'));
        assert!(store.get(2).contains(b'a'));
    }

    #[test]
    fn reduce_with_correct_is_conservative() {
        let mut store = DomainStore::full(3);
        store.reduce(&word("bat"), Feedback::new(1, 1));
        for position in 0..3 {
            assert_eq!(store.get(position), Domain::FULL);
        }
    }

    #[test]
    fn reduce_never_excludes_target() {
        // Whatever was guessed, the true target's letters survive reduction.
        let target = word("cat");
        let guesses = ["dog", "bat", "tac", "fig", "cat"];

        let mut store = DomainStore::full(3);
        for g in guesses {
            let guess = word(g);
            if guess == target {
                continue;
            }
            let feedback = Feedback::score(&target, &guess);
            store.reduce(&guess, feedback);

            for (position, &letter) in target.letters().iter().enumerate() {
                assert!(
                    store.get(position).contains(letter),
                    "reduction for {g} removed target letter {} at {position}",
                    char::from(letter)
                );
            }
        }
    }
}
