//! Solving strategies and session state
//!
//! A [`Session`] holds one game's mutable state; every algorithm implements
//! [`Strategy`] and only learns about the hidden word through feedback.

pub mod backtracking;
pub mod domain;
pub mod error;
pub mod genetic;
pub mod minimax;
pub mod session;
pub mod strategy;

pub use backtracking::{BacktrackingStrategy, SearchStats};
pub use domain::{Domain, DomainStore};
pub use error::{FAILURE_SENTINEL, SolveError};
pub use genetic::{GeneticConfig, GeneticStrategy};
pub use minimax::MinimaxStrategy;
pub use session::{AttemptTracer, Session};
pub use strategy::{RandomStrategy, Strategy, StrategyKind};
