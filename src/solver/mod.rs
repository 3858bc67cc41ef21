//! Candidate elimination and game flow
//!
//! This module contains the hypothesis space, minimax narrowing, the round
//! engine, the game loop and the automated guessing strategies.

mod candidates;
mod engine;
pub mod game;
pub mod minimax;
mod session;
pub mod space;
pub mod strategy;

pub use candidates::{CandidateSet, Partition};
pub use engine::{EngineState, RoundEngine};
pub use game::{GameOutcome, GuessSource, PlayerRequest, RoundObserver, run_game};
pub use session::{GameSession, RoundRecord};
pub use strategy::{
    FirstCandidateStrategy, MINIMAX_LIMIT, MinimaxStrategy, RandomStrategy, Strategy,
    StrategyPlayer, StrategyType,
};
