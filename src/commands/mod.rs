//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, FeedbackClass, analyze_guess};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{ConsoleReporter, LinePlayer, prompt_config, run_simple};
pub use solve::{AutoPlayResult, auto_play};
