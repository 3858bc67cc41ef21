//! Guess selection strategies for automated players
//!
//! Defines the Strategy trait and concrete implementations. These only ever
//! play the guessing side; the adversary is always the reactive narrowing in
//! [`CandidateSet::narrow`].

use super::game::{GuessSource, PlayerRequest};
use super::{CandidateSet, GameSession};
use crate::core::Sequence;
use std::io;
use tracing::debug;

/// Above this many candidates `MinimaxStrategy` guesses the first candidate,
/// since its search scores every candidate against every other
pub const MINIMAX_LIMIT: usize = 1500;

/// A strategy for choosing the next guess
pub trait Strategy {
    /// Select the next guess given the current candidates
    ///
    /// Returns `None` if there are no candidates to pick from.
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Sequence>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Lexicographically first candidate
    First(FirstCandidateStrategy),
    /// Uniformly random candidate
    Random(RandomStrategy),
    /// Candidate with the smallest worst-case class
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Sequence> {
        match self {
            Self::First(s) => s.select_guess(candidates),
            Self::Random(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "random", "minimax".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First(FirstCandidateStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::First(_) => "first",
            Self::Random(_) => "random",
            Self::Minimax(_) => "minimax",
        }
    }
}

/// Always guesses the first remaining candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Sequence> {
        candidates.iter().next().cloned()
    }
}

/// Guesses a uniformly random remaining candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Sequence> {
        use rand::prelude::IndexedRandom;

        candidates.as_slice().choose(&mut rand::rng()).cloned()
    }
}

/// Guesses the candidate whose worst-case class is smallest
///
/// Every remaining candidate is scored against every other, so this is
/// quadratic in the candidate count. Above [`MINIMAX_LIMIT`] candidates it
/// plays like [`FirstCandidateStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Sequence> {
        if candidates.len() > MINIMAX_LIMIT {
            debug!(
                candidates = candidates.len(),
                limit = MINIMAX_LIMIT,
                "too many candidates for minimax, guessing the first"
            );
            return FirstCandidateStrategy.select_guess(candidates);
        }

        let pool = candidates.as_slice();
        super::minimax::select_best_guess(pool, pool).map(|(best, _)| best.clone())
    }
}

/// Adapts a strategy to the [`GuessSource`] seam
///
/// An optional opening guess is played first, whatever the strategy says.
pub struct StrategyPlayer<S: Strategy> {
    strategy: S,
    opening: Option<Sequence>,
}

impl<S: Strategy> StrategyPlayer<S> {
    #[must_use]
    pub const fn new(strategy: S) -> Self {
        Self {
            strategy,
            opening: None,
        }
    }

    /// Force the first guess of the game
    #[must_use]
    pub fn with_opening(mut self, opening: Sequence) -> Self {
        self.opening = Some(opening);
        self
    }
}

impl<S: Strategy> GuessSource for StrategyPlayer<S> {
    fn next_request(&mut self, session: &GameSession) -> io::Result<PlayerRequest> {
        if let Some(opening) = self.opening.take() {
            return Ok(PlayerRequest::Guess(opening));
        }

        Ok(self
            .strategy
            .select_guess(session.candidates())
            .map_or(PlayerRequest::Quit, PlayerRequest::Guess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::solver::game::{GameOutcome, Silent, run_game};
    use crate::solver::RoundEngine;

    fn seq(colors: &[u8]) -> Sequence {
        Sequence::new(colors.to_vec()).unwrap()
    }

    fn play<S: Strategy>(player: &mut StrategyPlayer<S>, colors: u32, holes: usize) -> GameOutcome {
        let config = GameConfig::new(colors, holes).unwrap();
        let mut engine = RoundEngine::new(GameSession::new(config));
        run_game(&mut engine, player, &mut Silent).unwrap()
    }

    #[test]
    fn first_strategy_picks_smallest() {
        let candidates = CandidateSet::from_sequences(vec![seq(&[2, 1]), seq(&[0, 3])]);
        assert_eq!(
            FirstCandidateStrategy.select_guess(&candidates),
            Some(seq(&[0, 3]))
        );
    }

    #[test]
    fn random_strategy_picks_a_member() {
        let candidates = CandidateSet::from_sequences(vec![seq(&[2, 1]), seq(&[0, 3])]);
        for _ in 0..10 {
            let guess = RandomStrategy.select_guess(&candidates).unwrap();
            assert!(candidates.contains(&guess));
        }
    }

    #[test]
    fn strategies_return_none_when_empty() {
        let empty = CandidateSet::from_sequences(Vec::new());
        assert!(FirstCandidateStrategy.select_guess(&empty).is_none());
        assert!(RandomStrategy.select_guess(&empty).is_none());
        assert!(MinimaxStrategy.select_guess(&empty).is_none());
    }

    #[test]
    fn minimax_strategy_splits_best() {
        // 012 separates all four; 333 only isolates itself
        let candidates = CandidateSet::from_sequences(vec![
            seq(&[0, 1, 2]),
            seq(&[1, 2, 0]),
            seq(&[2, 1, 0]),
            seq(&[3, 3, 3]),
        ]);
        assert_eq!(
            MinimaxStrategy.select_guess(&candidates),
            Some(seq(&[0, 1, 2]))
        );
    }

    #[test]
    fn minimax_falls_back_to_first_on_large_sets() {
        let candidates = CandidateSet::full(&GameConfig::default());
        assert!(candidates.len() > MINIMAX_LIMIT);
        assert_eq!(
            MinimaxStrategy.select_guess(&candidates),
            Some(seq(&[0, 0, 0, 0, 0]))
        );
    }

    #[test]
    fn minimax_searches_at_the_limit() {
        // 6^4 = 1296 candidates: 0000 leaves 625 at worst, the search does better
        let candidates = CandidateSet::full(&GameConfig::new(6, 4).unwrap());
        assert!(candidates.len() <= MINIMAX_LIMIT);
        let guess = MinimaxStrategy.select_guess(&candidates).unwrap();
        assert_ne!(guess, seq(&[0, 0, 0, 0]));
    }

    #[test]
    fn from_name_round_trips() {
        for name in ["first", "random", "minimax"] {
            assert_eq!(StrategyType::from_name(name).name(), name);
        }
        assert_eq!(StrategyType::from_name("unknown").name(), "minimax");
    }

    #[test]
    fn first_candidate_game_on_four_by_four() {
        let outcome = play(&mut StrategyPlayer::new(FirstCandidateStrategy), 4, 4);
        assert_eq!(
            outcome,
            GameOutcome::Solved {
                secret: seq(&[3, 3, 0, 2]),
                rounds: 5
            }
        );
    }

    #[test]
    fn minimax_game_on_four_by_four() {
        let outcome = play(&mut StrategyPlayer::new(MinimaxStrategy), 4, 4);
        assert_eq!(outcome.rounds(), 3);
    }

    #[test]
    fn random_games_converge_within_bound() {
        for _ in 0..5 {
            let outcome = play(&mut StrategyPlayer::new(RandomStrategy), 4, 4);
            assert!(matches!(outcome, GameOutcome::Solved { .. }));
            assert!(outcome.rounds() <= 16);
        }
    }

    #[test]
    fn opening_is_played_first() {
        let mut player = StrategyPlayer::new(FirstCandidateStrategy).with_opening(seq(&[1, 1]));
        let config = GameConfig::new(2, 2).unwrap();
        let mut engine = RoundEngine::new(GameSession::new(config));
        run_game(&mut engine, &mut player, &mut Silent).unwrap();

        assert_eq!(engine.session().rounds()[0].guess, seq(&[1, 1]));
    }
}
