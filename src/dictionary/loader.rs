//! Dictionary loading utilities
//!
//! Builds a [`Dictionary`] from a newline-delimited word file or from the
//! embedded fallback list. Invalid lines are skipped rather than rejected, so
//! a real-world word file with stray punctuation still loads.

use super::Dictionary;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file, one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;

    let words = content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    });

    Ok(Dictionary::from_words(words))
}

/// Build a dictionary from a slice of string literals
///
/// Invalid entries are skipped.
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice.iter().filter_map(|&s| Word::new(s).ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::SAMPLE_WORDS;

    #[test]
    fn from_slice_partitions_by_length() {
        let dict = dictionary_from_slice(&["bat", "cat", "bird", "horse"]);

        assert_eq!(dict.words_of_length(3).unwrap().len(), 2);
        assert_eq!(dict.words_of_length(4).unwrap().len(), 1);
        assert_eq!(dict.words_of_length(5).unwrap().len(), 1);
        assert!(dict.words_of_length(6).is_none());
    }

    #[test]
    fn from_slice_skips_invalid() {
        let dict = dictionary_from_slice(&["bat", "b4t", "", "ox!"]);
        assert_eq!(dict.words_of_length(3).unwrap().len(), 1);
    }

    #[test]
    fn embedded_list_loads() {
        let dict = dictionary_from_slice(SAMPLE_WORDS);
        let (min, max) = dict.length_bounds().unwrap();

        assert_eq!(min, 3);
        assert_eq!(max, 6);
        for length in min..=max {
            assert!(!dict.words_of_length(length).unwrap().is_empty());
        }
    }

    #[test]
    fn load_from_file_skips_blank_lines() {
        let dir = std::env::temp_dir().join("wordlemind-loader-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("words.txt");
        fs::write(&path, "bat\n\ncat\n  dog  \nnope!\n").unwrap();

        let dict = load_from_file(&path).unwrap();
        assert_eq!(dict.words_of_length(3).unwrap().len(), 3);

        fs::remove_file(path).ok();
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }
}
