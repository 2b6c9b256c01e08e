//! Word representation
//!
//! A Word is an immutable, fixed-length sequence of lowercase ASCII letters.
//! Unlike classic Wordle the puzzle accepts any length, so the letters are
//! stored in a heap-allocated buffer rather than a fixed array.

use std::fmt;

/// Number of letters in the puzzle alphabet (a..z)
pub const ALPHABET_LEN: usize = 26;

/// An immutable word from the 26-letter alphabet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: Box<[u8]>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Uppercase input is normalized to lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if the string is empty, not ASCII, or contains
    /// anything other than alphabetic characters.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.as_bytes().to_vec().into_boxed_slice();

        Ok(Self { text, letters })
    }

    /// Build a Word from raw letters already known to be valid
    ///
    /// Used by the backtracking search, which only ever assembles letters
    /// drawn from the alphabet.
    #[must_use]
    pub(crate) fn from_letters(letters: &[u8]) -> Self {
        debug_assert!(!letters.is_empty());
        debug_assert!(letters.iter().all(u8::is_ascii_lowercase));

        Self {
            text: String::from_utf8_lossy(letters).into_owned(),
            letters: letters.to_vec().into_boxed_slice(),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte slice
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; the constructor rejects empty input
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Count of each letter, indexed by `letter - b'a'`
    ///
    /// Used by the feedback oracle for duplicate-letter accounting.
    #[inline]
    pub(crate) fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &ch in &self.letters {
            counts[usize::from(ch - b'a')] += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_any_length() {
        assert_eq!(Word::new("ox").unwrap().len(), 2);
        assert_eq!(Word::new("bat").unwrap().len(), 3);
        assert_eq!(Word::new("anticonstitutionnellement").unwrap().len(), 25);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_empty() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(Word::new("caf\u{e9}").is_err()); // Accented letter
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("bat").unwrap();
        assert_eq!(word.letter_at(0), b'b');
        assert_eq!(word.letter_at(1), b'a');
        assert_eq!(word.letter_at(2), b't');
    }

    #[test]
    fn word_from_letters_round_trip() {
        let word = Word::from_letters(b"rat");
        assert_eq!(word.text(), "rat");
        assert_eq!(word, Word::new("rat").unwrap());
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[usize::from(b's' - b'a')], 1);
        assert_eq!(counts[usize::from(b'p' - b'a')], 1);
        assert_eq!(counts[usize::from(b'e' - b'a')], 2);
        assert_eq!(counts[usize::from(b'd' - b'a')], 1);
        assert_eq!(counts[usize::from(b'z' - b'a')], 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("crane").unwrap();
        let word2 = Word::new("CRANE").unwrap();
        let word3 = Word::new("slate").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
