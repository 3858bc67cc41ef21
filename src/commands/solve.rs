//! Auto-play command
//!
//! Lets a strategy play a whole game against the adversary and returns the
//! rounds it took.

use crate::core::{GameConfig, GameError, Sequence};
use crate::solver::{
    GameOutcome, GameSession, RoundEngine, RoundRecord, Strategy, StrategyPlayer, run_game,
    game::Silent,
};
use tracing::instrument;

/// Result of an automated game
pub struct AutoPlayResult {
    pub config: GameConfig,
    pub rounds: Vec<RoundRecord>,
    pub outcome: GameOutcome,
}

/// Play one game with `strategy`, optionally forcing the opening guess
///
/// # Errors
///
/// Returns an error if the opening guess does not fit the configuration.
#[instrument(skip(strategy))]
pub fn auto_play<S: Strategy>(
    config: GameConfig,
    strategy: S,
    opening: Option<Sequence>,
) -> Result<AutoPlayResult, GameError> {
    let mut player = StrategyPlayer::new(strategy);
    if let Some(opening) = opening {
        player = player.with_opening(opening);
    }

    let mut engine = RoundEngine::new(GameSession::new(config));
    let outcome = run_game(&mut engine, &mut player, &mut Silent)?;

    Ok(AutoPlayResult {
        config,
        rounds: engine.into_session().rounds().to_vec(),
        outcome,
    })
}
