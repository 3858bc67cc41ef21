//! Round engine
//!
//! Runs one guess, score and narrow cycle against the session. States move
//! `AwaitingGuess -> Scoring -> Narrowed` and then either back to
//! `AwaitingGuess` or to `Terminal` once one candidate remains.

use super::game::{GuessSource, PlayerRequest, RoundObserver};
use super::{GameSession, RoundRecord};
use crate::core::{GameError, Sequence};
use tracing::{debug, instrument, trace};

/// Where the engine is within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    AwaitingGuess,
    Scoring,
    Narrowed,
    Terminal,
}

/// Drives rounds for a single game session
#[derive(Debug, Clone)]
pub struct RoundEngine {
    session: GameSession,
    state: EngineState,
}

impl RoundEngine {
    /// Wrap a session, which may already be converged
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let state = if session.is_converged() {
            EngineState::Terminal
        } else {
            EngineState::AwaitingGuess
        };
        Self { session, state }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn into_session(self) -> GameSession {
        self.session
    }

    /// Score a guess against the candidates and keep the largest class
    ///
    /// The guess is assumed to be well formed; a wrong length still surfaces
    /// as `GameError::LengthMismatch` and leaves the session untouched.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the engine is terminal, or any error
    /// raised while narrowing.
    #[instrument(skip_all, fields(guess = %guess))]
    pub fn submit(&mut self, guess: Sequence) -> Result<RoundRecord, GameError> {
        if self.state == EngineState::Terminal {
            return Err(GameError::GameOver);
        }

        self.state = EngineState::Scoring;
        let candidates_before = self.session.candidates().len();
        let (feedback, survivors) = match self.session.candidates().narrow(&guess) {
            Ok(narrowed) => narrowed,
            Err(e) => {
                self.state = EngineState::AwaitingGuess;
                return Err(e);
            }
        };

        self.state = EngineState::Narrowed;
        let record = RoundRecord {
            guess,
            feedback,
            candidates_before,
            candidates_after: survivors.len(),
        };
        trace!(?record, "narrowed");
        self.session.record(record.clone(), survivors);

        self.state = if self.session.is_converged() {
            EngineState::Terminal
        } else {
            EngineState::AwaitingGuess
        };
        debug!(
            feedback = %record.feedback,
            before = record.candidates_before,
            after = record.candidates_after,
            state = ?self.state,
            "round complete"
        );

        Ok(record)
    }

    /// Run one round with external collaborators
    ///
    /// Reveal requests are forwarded to the observer and the source is asked
    /// again. Returns `None` if the player quit before guessing.
    ///
    /// # Errors
    /// Returns `GameError::Input` if the source fails, or any `submit` error.
    pub fn run_round<I, O>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<Option<RoundRecord>, GameError>
    where
        I: GuessSource + ?Sized,
        O: RoundObserver + ?Sized,
    {
        loop {
            match input.next_request(&self.session)? {
                PlayerRequest::Reveal => output.candidates_revealed(self.session.candidates()),
                PlayerRequest::Quit => return Ok(None),
                PlayerRequest::Guess(guess) => {
                    let record = self.submit(guess)?;
                    output.round_played(&record, self.session.candidates().len());
                    return Ok(Some(record));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, GameConfig, score};
    use crate::solver::space;
    use proptest::prelude::*;

    fn seq(colors: &[u8]) -> Sequence {
        Sequence::new(colors.to_vec()).unwrap()
    }

    fn engine(colors: u32, holes: usize) -> RoundEngine {
        RoundEngine::new(GameSession::new(GameConfig::new(colors, holes).unwrap()))
    }

    #[test]
    fn starts_awaiting_guess() {
        assert_eq!(engine(2, 2).state(), EngineState::AwaitingGuess);
        assert_eq!(engine(1, 3).state(), EngineState::Terminal);
    }

    #[test]
    fn submit_records_round_and_narrows() {
        let mut engine = engine(2, 2);
        let record = engine.submit(seq(&[0, 0])).unwrap();

        assert_eq!(record.feedback, Feedback::new(1, 0));
        assert_eq!(record.candidates_before, 4);
        assert_eq!(record.candidates_after, 2);
        assert_eq!(engine.session().rounds(), &[record]);
        assert_eq!(engine.state(), EngineState::AwaitingGuess);
    }

    #[test]
    fn converges_to_terminal() {
        let mut engine = engine(2, 2);
        engine.submit(seq(&[0, 0])).unwrap();
        let record = engine.submit(seq(&[0, 1])).unwrap();

        // 01 vs {01, 10}: (2, 0) and (0, 2) tie, smaller feedback wins
        assert_eq!(record.feedback, Feedback::new(0, 2));
        assert_eq!(engine.state(), EngineState::Terminal);
        assert_eq!(engine.session().candidates().single(), Some(&seq(&[1, 0])));
    }

    #[test]
    fn submit_after_terminal_fails() {
        let mut engine = engine(1, 2);
        assert!(matches!(
            engine.submit(seq(&[0, 0])),
            Err(GameError::GameOver)
        ));
    }

    #[test]
    fn wrong_length_leaves_session_untouched() {
        let mut engine = engine(3, 3);
        assert!(matches!(
            engine.submit(seq(&[0, 1])),
            Err(GameError::LengthMismatch { .. })
        ));
        assert_eq!(engine.state(), EngineState::AwaitingGuess);
        assert_eq!(engine.session().candidates().len(), 27);
        assert!(engine.session().rounds().is_empty());
    }

    #[test]
    fn candidate_count_never_grows() {
        let mut engine = engine(3, 3);
        let mut previous = engine.session().candidates().len();
        for guess in [[0, 0, 0], [1, 1, 1], [0, 1, 2], [2, 2, 2], [1, 0, 2]] {
            if engine.state() == EngineState::Terminal {
                break;
            }
            let record = engine.submit(seq(&guess)).unwrap();
            assert!(record.candidates_after <= previous);
            assert!(record.candidates_after >= 1);
            previous = record.candidates_after;
        }
    }

    /// Sequences of the full space consistent with every logged round
    fn consistent_with_log(engine: &RoundEngine) -> Vec<Sequence> {
        space::generate(engine.session().config())
            .into_iter()
            .filter(|candidate| {
                engine
                    .session()
                    .rounds()
                    .iter()
                    .all(|round| score(&round.guess, candidate).unwrap() == round.feedback)
            })
            .collect()
    }

    #[test]
    fn candidates_equal_sequences_consistent_with_log() {
        let mut engine = engine(4, 4);
        let guesses = [
            [0, 0, 1, 1],
            [0, 1, 2, 3],
            [1, 1, 2, 2],
            [3, 2, 1, 0],
            [2, 3, 3, 1],
            [0, 0, 0, 0],
            [3, 3, 3, 3],
        ];
        for guess in guesses {
            if engine.state() == EngineState::Terminal {
                break;
            }
            engine.submit(seq(&guess)).unwrap();
            assert_eq!(
                engine.session().candidates().as_slice(),
                consistent_with_log(&engine).as_slice()
            );
        }
        assert!(engine.session().rounds().len() >= 2);
    }

    proptest! {
        #[test]
        fn candidates_track_log_for_any_guesses(
            guesses in prop::collection::vec(prop::collection::vec(0u8..3, 3), 1..6),
        ) {
            let mut engine = engine(3, 3);
            for guess in guesses {
                if engine.state() == EngineState::Terminal {
                    break;
                }
                engine.submit(seq(&guess)).unwrap();
                let expected = consistent_with_log(&engine);
                prop_assert_eq!(
                    engine.session().candidates().as_slice(),
                    expected.as_slice()
                );
            }
        }
    }
}
