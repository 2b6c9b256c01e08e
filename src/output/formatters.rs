//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Format feedback as a compact mark string, one symbol per counted letter
///
/// `●` per correct letter, `○` per close letter, `·` for the rest of the
/// word. "cat" scored (2, 0) against a 3-letter word renders as `●●·`.
#[must_use]
pub fn feedback_marks(feedback: Feedback, length: usize) -> String {
    let correct = usize::from(feedback.correct);
    let close = usize::from(feedback.close);
    let rest = length.saturating_sub(correct + close);

    let mut marks = String::with_capacity(length);
    for _ in 0..correct {
        marks.push('●');
    }
    for _ in 0..close {
        marks.push('○');
    }
    for _ in 0..rest {
        marks.push('·');
    }
    marks
}

/// Create a horizontal bar for distribution charts
#[must_use]
pub fn distribution_bar(count: usize, max: usize, width: usize) -> String {
    let filled = if max > 0 {
        (count * width / max).max(usize::from(count > 0))
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
