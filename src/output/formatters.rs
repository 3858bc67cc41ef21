//! Formatting utilities for terminal output

use crate::core::Feedback;
use crate::solver::CandidateSet;

/// Format feedback as key pegs: `●` exact, `○` color, `·` empty
#[must_use]
pub fn feedback_pegs(feedback: Feedback, holes: usize) -> String {
    let empty = holes.saturating_sub(feedback.total());
    let mut result = String::with_capacity(holes * 3);
    result.push_str(&"●".repeat(feedback.exact()));
    result.push_str(&"○".repeat(feedback.color()));
    result.push_str(&"·".repeat(empty));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// List candidates separated by spaces, eliding past `limit`
#[must_use]
pub fn candidate_list(candidates: &CandidateSet, limit: usize) -> String {
    let mut shown: Vec<String> = candidates
        .iter()
        .take(limit)
        .map(ToString::to_string)
        .collect();

    if candidates.len() > limit {
        shown.push(format!("… (+{} more)", candidates.len() - limit));
    }

    shown.join(" ")
}

/// Bits of information still needed to single out one candidate
#[must_use]
pub fn bits_remaining(candidates: usize) -> f64 {
    if candidates <= 1 {
        0.0
    } else {
        (candidates as f64).log2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Sequence};

    #[test]
    fn pegs_mixed() {
        assert_eq!(feedback_pegs(Feedback::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn pegs_solved() {
        assert_eq!(feedback_pegs(Feedback::new(5, 0), 5), "●●●●●");
    }

    #[test]
    fn pegs_empty() {
        assert_eq!(feedback_pegs(Feedback::new(0, 0), 3), "···");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn candidate_list_elides() {
        let candidates = CandidateSet::full(&GameConfig::new(2, 2).unwrap());
        assert_eq!(candidate_list(&candidates, 10), "00 01 10 11");
        assert_eq!(candidate_list(&candidates, 2), "00 01 … (+2 more)");
    }

    #[test]
    fn candidate_list_single() {
        let candidates = CandidateSet::from_sequences(vec![Sequence::new(vec![4, 2]).unwrap()]);
        assert_eq!(candidate_list(&candidates, 5), "42");
    }

    #[test]
    fn bits_remaining_values() {
        assert!(bits_remaining(1).abs() < f64::EPSILON);
        assert!((bits_remaining(1024) - 10.0).abs() < 1e-9);
    }
}
