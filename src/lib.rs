//! Wordlemind
//!
//! A solving engine for the Mastermind-style word game: the hidden word is
//! only observable through (correct, close) feedback counts, and several
//! strategies — backtracking constraint search with optional prefix-tree
//! forward checking, pool-filtering minimax, and a population-based
//! stochastic search — compete to find it in as few attempts as possible.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlemind::core::{Feedback, Word};
//!
//! let hidden = Word::new("aab").unwrap();
//! let guess = Word::new("aba").unwrap();
//!
//! // One 'a' in place, the other 'a' and the 'b' misplaced.
//! assert_eq!(Feedback::score(&hidden, &guess), Feedback::new(1, 2));
//! ```

// Core domain types
pub mod core;

// Length-partitioned word index
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
