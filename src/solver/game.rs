//! Game loop and collaborator seams
//!
//! The core never touches the terminal. Guesses arrive through a
//! [`GuessSource`] and results leave through a [`RoundObserver`].

use super::{CandidateSet, GameSession, RoundEngine, RoundRecord};
use crate::core::{GameError, Sequence};
use std::io;
use tracing::info;

/// What the player asked for when prompted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerRequest {
    /// A well-formed guess for this game
    Guess(Sequence),
    /// Show the remaining candidates without changing anything
    Reveal,
    /// Abandon the game
    Quit,
}

/// Supplies one validated request at a time
pub trait GuessSource {
    /// Produce the next request for the given session
    ///
    /// Guesses must already match the session's hole count and colors.
    ///
    /// # Errors
    /// Returns an I/O error if the underlying input fails.
    fn next_request(&mut self, session: &GameSession) -> io::Result<PlayerRequest>;
}

/// Receives results for display; nothing in the core depends on it
pub trait RoundObserver {
    fn round_played(&mut self, _record: &RoundRecord, _remaining: usize) {}

    fn candidates_revealed(&mut self, _candidates: &CandidateSet) {}

    fn game_finished(&mut self, _outcome: &GameOutcome) {}
}

/// An observer that ignores everything
pub struct Silent;

impl RoundObserver for Silent {}

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// One candidate remained: the feedback-consistent secret
    Solved { secret: Sequence, rounds: usize },
    /// The player quit
    Abandoned { rounds: usize },
}

impl GameOutcome {
    #[must_use]
    pub const fn rounds(&self) -> usize {
        match self {
            Self::Solved { rounds, .. } | Self::Abandoned { rounds } => *rounds,
        }
    }
}

/// Play rounds until one candidate remains or the player quits
///
/// # Errors
/// Returns `GameError::Input` if the source fails, or any error from the
/// engine.
pub fn run_game<I, O>(
    engine: &mut RoundEngine,
    input: &mut I,
    output: &mut O,
) -> Result<GameOutcome, GameError>
where
    I: GuessSource + ?Sized,
    O: RoundObserver + ?Sized,
{
    info!(
        colors = engine.session().config().colors(),
        holes = engine.session().config().holes(),
        candidates = engine.session().candidates().len(),
        "game started"
    );

    let outcome = loop {
        if let Some(secret) = engine.session().candidates().single() {
            break GameOutcome::Solved {
                secret: secret.clone(),
                rounds: engine.session().rounds().len(),
            };
        }
        if engine.run_round(input, output)?.is_none() {
            break GameOutcome::Abandoned {
                rounds: engine.session().rounds().len(),
            };
        }
    };

    info!(?outcome, "game finished");
    output.game_finished(&outcome);
    Ok(outcome)
}
