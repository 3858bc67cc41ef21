//! Candidate set and minimax narrowing
//!
//! The candidate set holds every secret still consistent with the feedback
//! given so far. Narrowing partitions it by feedback against a guess and keeps
//! the largest class, i.e. the answer that is worst for the guesser.

use super::space;
use crate::core::{Feedback, GameConfig, GameError, Sequence, score};
use rustc_hash::FxHashMap;

/// Candidates grouped by the feedback they produce against one guess
pub type Partition = FxHashMap<Feedback, Vec<Sequence>>;

/// The secrets still consistent with all feedback so far
///
/// Members are unique and kept in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    members: Vec<Sequence>,
}

impl CandidateSet {
    /// The full hypothesis space for a configuration
    #[must_use]
    pub fn full(config: &GameConfig) -> Self {
        Self {
            members: space::generate(config),
        }
    }

    /// Build a set from arbitrary sequences, sorting and removing duplicates
    #[must_use]
    pub fn from_sequences(mut members: Vec<Sequence>) -> Self {
        members.sort_unstable();
        members.dedup();
        Self { members }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.members.binary_search(sequence).is_ok()
    }

    /// Members in lexicographic order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.members.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Sequence] {
        &self.members
    }

    /// The only remaining member, once the set has converged
    #[must_use]
    pub fn single(&self) -> Option<&Sequence> {
        match self.members.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Group every member by its feedback against `guess`
    ///
    /// The guess is scored like any other candidate, including when it is a
    /// member itself. Each group keeps lexicographic order.
    ///
    /// # Errors
    /// Returns `GameError::LengthMismatch` if `guess` has the wrong length.
    pub fn partition(&self, guess: &Sequence) -> Result<Partition, GameError> {
        let mut groups = Partition::default();
        for candidate in &self.members {
            let feedback = score(guess, candidate)?;
            groups.entry(feedback).or_default().push(candidate.clone());
        }
        Ok(groups)
    }

    /// Narrow the set with the minimax rule
    ///
    /// Returns the feedback of the largest class and that class as the new set.
    /// Among equally large classes the smallest feedback (by exact, then
    /// color) is kept.
    ///
    /// # Errors
    /// Returns `GameError::EmptyCandidateSet` on an empty set and
    /// `GameError::LengthMismatch` if `guess` has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Feedback, GameConfig, Sequence};
    /// use mastermind_solver::solver::CandidateSet;
    ///
    /// let candidates = CandidateSet::full(&GameConfig::new(2, 2).unwrap());
    /// let guess = Sequence::new(vec![0, 0]).unwrap();
    ///
    /// let (feedback, survivors) = candidates.narrow(&guess).unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 0));
    /// assert_eq!(survivors.len(), 2);
    /// ```
    pub fn narrow(&self, guess: &Sequence) -> Result<(Feedback, Self), GameError> {
        if self.members.is_empty() {
            return Err(GameError::EmptyCandidateSet);
        }

        let (feedback, members) = self
            .partition(guess)?
            .into_iter()
            .max_by(|(fa, a), (fb, b)| a.len().cmp(&b.len()).then_with(|| fb.cmp(fa)))
            .ok_or(GameError::EmptyCandidateSet)?;

        Ok((feedback, Self { members }))
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
