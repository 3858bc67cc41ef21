//! Feedback scoring between two sequences
//!
//! Feedback is the classic Mastermind peg pair:
//! - `exact`: holes where guess and candidate agree (black pegs)
//! - `color`: further color overlap outside those holes (white pegs)
//!
//! Ordering is by `exact`, then `color`. That ordering is what breaks ties
//! between equally large feedback classes during narrowing.

use super::{GameError, MAX_COLORS, Sequence};
use std::fmt;

/// Feedback for one guess against one candidate secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback {
    exact: usize,
    color: usize,
}

impl Feedback {
    /// Create feedback from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color: usize) -> Self {
        Self { exact, color }
    }

    /// Holes with the right color in the right place
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Right colors in the wrong place
    #[inline]
    #[must_use]
    pub const fn color(self) -> usize {
        self.color
    }

    /// Total multiset color overlap
    #[inline]
    #[must_use]
    pub const fn total(self) -> usize {
        self.exact + self.color
    }

    /// Whether this feedback means every hole matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, holes: usize) -> bool {
        self.exact == holes && self.color == 0
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.exact, self.color)
    }
}

/// Score `guess` against `candidate`
///
/// # Algorithm
/// 1. Count holes where both sequences hold the same color
/// 2. Sum, over every color, the smaller of its two occurrence counts
/// 3. Color matches are that sum minus the exact matches
///
/// The function is pure, so callers are free to memoize it.
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the sequences differ in length.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Feedback, Sequence, score};
///
/// let guess = Sequence::new(vec![0, 1, 2, 3]).unwrap();
/// let candidate = Sequence::new(vec![0, 2, 1, 4]).unwrap();
///
/// assert_eq!(score(&guess, &candidate).unwrap(), Feedback::new(1, 2));
/// ```
pub fn score(guess: &Sequence, candidate: &Sequence) -> Result<Feedback, GameError> {
    if guess.len() != candidate.len() {
        return Err(GameError::LengthMismatch {
            expected: guess.len(),
            actual: candidate.len(),
        });
    }

    let exact = guess
        .colors()
        .iter()
        .zip(candidate.colors())
        .filter(|(g, c)| g == c)
        .count();

    let guess_counts = guess.color_counts();
    let candidate_counts = candidate.color_counts();
    let overlap: usize = (0..usize::from(MAX_COLORS))
        .map(|color| guess_counts[color].min(candidate_counts[color]))
        .sum();

    Ok(Feedback::new(exact, overlap - exact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seq(colors: &[u8]) -> Sequence {
        Sequence::new(colors.to_vec()).unwrap()
    }

    #[test]
    fn score_mixed_feedback() {
        // 0 in place; 1 and 2 swapped; 3 absent
        let feedback = score(&seq(&[0, 1, 2, 3]), &seq(&[0, 2, 1, 4])).unwrap();
        assert_eq!(feedback, Feedback::new(1, 2));
        assert_eq!(feedback.total(), 3);
    }

    #[test]
    fn score_no_overlap() {
        let feedback = score(&seq(&[0, 0, 1, 1]), &seq(&[2, 3, 4, 5])).unwrap();
        assert_eq!(feedback, Feedback::new(0, 0));
    }

    #[test]
    fn score_repeated_colors_counted_once_each() {
        // Guess has three 1s, candidate has one: only one peg for color 1
        let feedback = score(&seq(&[1, 1, 1, 0]), &seq(&[2, 3, 4, 1])).unwrap();
        assert_eq!(feedback, Feedback::new(0, 1));

        let feedback = score(&seq(&[1, 1, 2, 2]), &seq(&[1, 2, 1, 2])).unwrap();
        assert_eq!(feedback, Feedback::new(2, 2));
    }

    #[test]
    fn score_self_is_all_exact() {
        let guess = seq(&[3, 1, 3, 9, 0]);
        let feedback = score(&guess, &guess).unwrap();
        assert_eq!(feedback, Feedback::new(5, 0));
        assert!(feedback.is_solved(5));
    }

    #[test]
    fn score_length_mismatch() {
        let result = score(&seq(&[0, 1, 2]), &seq(&[0, 1]));
        assert!(matches!(
            result,
            Err(GameError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn feedback_ordering_exact_first() {
        assert!(Feedback::new(0, 4) < Feedback::new(1, 0));
        assert!(Feedback::new(1, 0) < Feedback::new(1, 2));
    }

    #[test]
    fn feedback_display() {
        assert_eq!(Feedback::new(1, 2).to_string(), "(1, 2)");
    }

    fn pair(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
        (1..=max_len).prop_flat_map(|len| {
            (
                prop::collection::vec(0u8..MAX_COLORS, len),
                prop::collection::vec(0u8..MAX_COLORS, len),
            )
        })
    }

    proptest! {
        #[test]
        fn score_is_symmetric((a, b) in pair(8)) {
            let (a, b) = (seq(&a), seq(&b));
            let ab = score(&a, &b).unwrap();
            let ba = score(&b, &a).unwrap();
            prop_assert_eq!(ab.exact(), ba.exact());
            prop_assert_eq!(ab.total(), ba.total());
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn score_within_bounds((a, b) in pair(8)) {
            let holes = a.len();
            let feedback = score(&seq(&a), &seq(&b)).unwrap();
            prop_assert!(feedback.exact() <= holes);
            prop_assert!(feedback.total() <= holes);
        }

        #[test]
        fn score_self_match(a in prop::collection::vec(0u8..MAX_COLORS, 1..8)) {
            let a = seq(&a);
            prop_assert_eq!(score(&a, &a).unwrap(), Feedback::new(a.len(), 0));
        }
    }
}
