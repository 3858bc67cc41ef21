//! Minimax-based guess selection
//!
//! Picks the guess that minimizes the worst-case remaining candidates. This
//! serves automated players; the adversary never searches over guesses.

use super::calculator::calculate_max_remaining;
use crate::core::Sequence;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the guess with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties go to the earliest guess
/// in the pool.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Sequence;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let pool = vec![
///     Sequence::new(vec![2, 2]).unwrap(),
///     Sequence::new(vec![0, 1]).unwrap(),
/// ];
/// let candidates = vec![
///     Sequence::new(vec![0, 1]).unwrap(),
///     Sequence::new(vec![1, 0]).unwrap(),
/// ];
///
/// let (best, max_remaining) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "01");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Sequence],
    candidates: &[Sequence],
) -> Option<(&'a Sequence, usize)> {
    guess_pool
        .par_iter()
        .map(|guess| (guess, calculate_max_remaining(guess, candidates)))
        .min_by_key(|(_, max)| *max)
}
