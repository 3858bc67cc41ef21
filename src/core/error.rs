//! Error taxonomy for the candidate-elimination core
//!
//! All of these are fatal from the core's point of view: the core never retries.

use thiserror::Error;

/// Errors raised by the game core
#[derive(Debug, Error)]
pub enum GameError {
    /// Color or hole count outside the supported range
    #[error("invalid configuration: {colors} colors, {holes} holes ({reason})")]
    InvalidConfiguration {
        colors: u32,
        holes: usize,
        reason: &'static str,
    },

    /// A guess and a candidate of different lengths were scored against each other
    #[error("sequence length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Narrowing was requested on an empty candidate set
    #[error("candidate set is empty")]
    EmptyCandidateSet,

    /// A guess was submitted after the candidate set had already converged
    #[error("game is already over")]
    GameOver,

    /// The input collaborator failed to produce a request
    #[error("failed to read player input")]
    Input(#[from] std::io::Error),
}
