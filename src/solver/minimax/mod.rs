//! Worst-case (minimax) partition metrics
//!
//! Measures how large a feedback class the adversary can keep for a guess.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
