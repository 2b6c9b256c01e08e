//! Prefix tree over the dictionary
//!
//! One root per word length; each node maps a letter to its child and carries
//! an end-of-word marker. The per-length roots keep a word from ever matching
//! a prefix of a longer word: "car" and "cart" live in different subtrees.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// A node of the prefix tree
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Child reached by consuming one letter
    #[inline]
    #[must_use]
    pub fn descend(&self, letter: u8) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// True if a word ends exactly at this node
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Letters with a child under this node
    pub fn child_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.children.keys().copied()
    }
}

/// Prefix tree with one root per word length
#[derive(Debug, Default, Clone)]
pub struct Trie {
    roots: FxHashMap<usize, TrieNode>,
}

impl Trie {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word under the root for its length
    pub fn insert(&mut self, word: &Word) {
        let mut node = self.roots.entry(word.len()).or_default();
        for &letter in word.letters() {
            node = node.children.entry(letter).or_default();
        }
        node.terminal = true;
    }

    /// Root of the subtree holding words of the given length
    #[must_use]
    pub fn root_of(&self, length: usize) -> Option<&TrieNode> {
        self.roots.get(&length)
    }

    /// Node reached by consuming `prefix` from the root for `length`
    ///
    /// Supports partial descent for forward checking: the returned subtree
    /// contains every completion of the prefix into a word of that length.
    #[must_use]
    pub fn descend_prefix(&self, length: usize, prefix: &[u8]) -> Option<&TrieNode> {
        let mut node = self.root_of(length)?;
        for &letter in prefix {
            node = node.descend(letter)?;
        }
        Some(node)
    }

    /// Full-word membership: walk from the length root and check the end marker
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.descend_prefix(word.len(), word.letters())
            .is_some_and(TrieNode::is_terminal)
    }
}
