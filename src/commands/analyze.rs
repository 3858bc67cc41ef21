//! Guess analysis command
//!
//! Shows how a single guess partitions a fresh game's candidates and which
//! class the adversary would keep.

use crate::core::{Feedback, GameConfig, Sequence};
use crate::solver::CandidateSet;
use anyhow::{Context, Result};

/// One feedback class of the partition
pub struct FeedbackClass {
    pub feedback: Feedback,
    pub size: usize,
    pub sample: Vec<Sequence>,
}

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Sequence,
    pub holes: usize,
    pub total_candidates: usize,
    /// Largest class first, ties by ascending feedback
    pub classes: Vec<FeedbackClass>,
    pub kept: Feedback,
}

impl AnalysisResult {
    /// Survivors if the adversary answers this guess
    #[must_use]
    pub fn worst_case(&self) -> usize {
        self.classes.first().map_or(0, |class| class.size)
    }
}

/// Analyze how a guess splits the full space of a configuration
///
/// # Errors
///
/// Returns an error if the guess text is not a valid sequence for the
/// configuration.
pub fn analyze_guess(guess: &str, config: &GameConfig, sample_size: usize) -> Result<AnalysisResult> {
    let guess = Sequence::parse(guess, config).with_context(|| format!("Invalid guess '{guess}'"))?;

    let candidates = CandidateSet::full(config);
    let (kept, _) = candidates.narrow(&guess)?;

    let mut classes: Vec<FeedbackClass> = candidates
        .partition(&guess)?
        .into_iter()
        .map(|(feedback, members)| FeedbackClass {
            feedback,
            size: members.len(),
            sample: members.into_iter().take(sample_size).collect(),
        })
        .collect();
    classes.sort_by(|a, b| b.size.cmp(&a.size).then(a.feedback.cmp(&b.feedback)));

    Ok(AnalysisResult {
        guess,
        holes: config.holes(),
        total_candidates: candidates.len(),
        classes,
        kept,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_classic_opening() {
        let config = GameConfig::new(6, 4).unwrap();
        let result = analyze_guess("0123", &config, 3).unwrap();

        assert_eq!(result.total_candidates, 1296);
        assert_eq!(result.kept, Feedback::new(0, 2));
        assert_eq!(result.worst_case(), 312);
        assert_eq!(result.classes[0].feedback, result.kept);
        assert_eq!(
            result.classes.iter().map(|c| c.size).sum::<usize>(),
            1296
        );
        assert!(result.classes.iter().all(|c| c.sample.len() <= 3));
    }

    #[test]
    fn classes_sorted_largest_first() {
        let config = GameConfig::new(4, 3).unwrap();
        let result = analyze_guess("001", &config, 1).unwrap();

        assert!(result.classes.windows(2).all(|w| w[0].size >= w[1].size));
    }

    #[test]
    fn analyze_invalid_guess() {
        let config = GameConfig::new(6, 4).unwrap();
        assert!(analyze_guess("01", &config, 3).is_err());
        assert!(analyze_guess("0169", &config, 3).is_err());
    }
}
