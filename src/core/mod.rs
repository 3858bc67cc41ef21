//! Core domain types for Mastermind
//!
//! Sequences, feedback scoring, game configuration and the error taxonomy.
//! Everything here is pure and has no dependence on the terminal.

mod config;
mod error;
mod feedback;
mod sequence;

pub use config::{DEFAULT_COLORS, DEFAULT_HOLES, GameConfig, MAX_SPACE};
pub use error::GameError;
pub use feedback::{Feedback, score};
pub use sequence::{MAX_COLORS, Sequence, SequenceError};
