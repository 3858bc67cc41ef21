//! Mastermind Solver
//!
//! An adversarial Mastermind code-keeper: it never commits to a secret, and
//! instead answers every guess with the feedback that keeps the most secrets
//! alive, until only one remains.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{GameConfig, Sequence};
//! use mastermind_solver::solver::{GameSession, RoundEngine};
//!
//! let config = GameConfig::new(6, 4).unwrap();
//! let mut engine = RoundEngine::new(GameSession::new(config));
//!
//! let guess = Sequence::parse("0123", &config).unwrap();
//! let record = engine.submit(guess).unwrap();
//! println!("Feedback {} leaves {} candidates", record.feedback, record.candidates_after);
//! ```

// Core domain types
pub mod core;

// Candidate elimination and game flow
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
