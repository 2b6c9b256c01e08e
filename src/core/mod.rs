//! Core domain types: words, feedback scoring, and attempt history

mod feedback;
mod word;

pub use feedback::{Attempt, Feedback, compatible, incompatibilities};
pub use word::{ALPHABET_LEN, Word, WordError};
