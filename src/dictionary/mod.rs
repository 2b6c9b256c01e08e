//! Dictionary index
//!
//! Two read-only views over the same word set: a flat list per word length
//! (enumeration, minimax pools) and a prefix tree (membership tests, forward
//! checking). Built once by the loader, then shared immutably.

mod embedded;
pub mod loader;
mod trie;

pub use embedded::SAMPLE_WORDS;
pub use trie::{Trie, TrieNode};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;

/// Length-partitioned dictionary with flat and prefix-tree views
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<Word>>,
    trie: Trie,
}

impl Dictionary {
    /// Build a dictionary from an iterator of words
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Self {
        let mut dict = Self::default();
        for word in words {
            dict.insert(word);
        }
        dict
    }

    fn insert(&mut self, word: Word) {
        self.trie.insert(&word);
        self.by_length.entry(word.len()).or_default().push(word);
    }

    /// Flat view: all words of a given length, in insertion order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Option<&[Word]> {
        self.by_length.get(&length).map(Vec::as_slice)
    }

    /// Tree view over the same words
    #[must_use]
    pub const fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Full-word membership via the prefix tree
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.trie.contains(word)
    }

    /// Smallest and largest word length present, if any words were loaded
    #[must_use]
    pub fn length_bounds(&self) -> Option<(usize, usize)> {
        let min = self.by_length.keys().min()?;
        let max = self.by_length.keys().max()?;
        Some((*min, *max))
    }

    /// Total number of words across all lengths
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.by_length.values().map(Vec::len).sum()
    }

    /// Pick a uniformly random word of the given length
    ///
    /// Returns `None` when no bucket exists for that length. Used to generate
    /// hidden targets for games and benchmarks.
    pub fn random_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&Word> {
        self.by_length.get(&length)?.choose(rng)
    }
}
