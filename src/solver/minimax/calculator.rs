//! Worst-case calculation for Mastermind feedback
//!
//! Given a guess and set of candidates, computes the largest feedback class,
//! i.e. how many candidates the adversary can keep alive after that guess.

use crate::core::{Feedback, Sequence, score};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
/// Every candidate must have the guess's length. A mismatch is a caller bug:
/// it panics in debug builds and the candidate is skipped otherwise.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Sequence;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Sequence::new(vec![0, 1]).unwrap();
/// let candidates = vec![
///     Sequence::new(vec![0, 1]).unwrap(),
///     Sequence::new(vec![1, 0]).unwrap(),
///     Sequence::new(vec![2, 2]).unwrap(),
/// ];
///
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Sequence, candidates: &[Sequence]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let feedback_counts = group_by_feedback(guess, candidates);

    feedback_counts.values().max().copied().unwrap_or(0)
}

/// Count candidates per feedback class
fn group_by_feedback(guess: &Sequence, candidates: &[Sequence]) -> FxHashMap<Feedback, usize> {
    debug_assert!(
        candidates.iter().all(|candidate| candidate.len() == guess.len()),
        "guess and candidates differ in length"
    );
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        if let Ok(feedback) = score(guess, candidate) {
            *counts.entry(feedback).or_insert(0) += 1;
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(colors: &[u8]) -> Sequence {
        Sequence::new(colors.to_vec()).unwrap()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let guess = seq(&[0, 0]);
        let candidates = [seq(&[0, 0]), seq(&[1, 1])];

        assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn max_remaining_all_same_feedback() {
        // None of these share a color with the guess
        let guess = seq(&[9, 9]);
        let candidates = [seq(&[0, 0]), seq(&[1, 1]), seq(&[2, 2])];

        assert_eq!(calculate_max_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        assert_eq!(calculate_max_remaining(&seq(&[0]), &[]), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "differ in length")]
    fn max_remaining_length_mismatch_panics_in_debug() {
        let candidates = [seq(&[0, 1]), seq(&[0, 1, 2])];
        let _ = calculate_max_remaining(&seq(&[0, 1]), &candidates);
    }

    #[test]
    fn group_by_feedback_counts_everything() {
        let guess = seq(&[0, 1, 2]);
        let candidates = [seq(&[0, 1, 2]), seq(&[2, 1, 0]), seq(&[1, 2, 0]), seq(&[3, 3, 3])];

        let groups = group_by_feedback(&guess, &candidates);

        assert_eq!(groups.values().sum::<usize>(), 4);
        assert_eq!(groups[&Feedback::new(3, 0)], 1);
        assert_eq!(groups[&Feedback::new(1, 2)], 1);
        assert_eq!(groups[&Feedback::new(0, 3)], 1);
        assert_eq!(groups[&Feedback::new(0, 0)], 1);
    }

    #[test]
    fn candidate_guess_beats_non_overlapping_guess() {
        let candidates = [seq(&[0, 0]), seq(&[1, 1])];

        let bad = calculate_max_remaining(&seq(&[2, 2]), &candidates);
        let good = calculate_max_remaining(&seq(&[0, 0]), &candidates);

        assert!(good < bad);
    }
}
