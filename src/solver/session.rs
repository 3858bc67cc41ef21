//! Game session state
//!
//! One session owns the configuration, the current candidates and the
//! append-only log of rounds played.

use super::CandidateSet;
use crate::core::{Feedback, GameConfig, Sequence};

/// One guess and the feedback the adversary answered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub guess: Sequence,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    candidates: CandidateSet,
    rounds: Vec<RoundRecord>,
}

impl GameSession {
    /// Start a game with the full hypothesis space
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            candidates: CandidateSet::full(&config),
            rounds: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Rounds played so far, oldest first
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    /// Whether exactly one candidate remains
    #[inline]
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.candidates.len() == 1
    }

    /// Append a round and replace the candidates with its survivors
    pub(crate) fn record(&mut self, record: RoundRecord, survivors: CandidateSet) {
        self.rounds.push(record);
        self.candidates = survivors;
    }
}
