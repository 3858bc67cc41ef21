//! Benchmark command
//!
//! Plays one game per opening guess and measures how long the adversary can
//! hold out against a strategy.

use super::solve::auto_play;
use crate::core::{GameConfig, GameError, Sequence};
use crate::solver::{Strategy, space};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds played mapped to how many games took that long
    pub distribution: BTreeMap<usize, usize>,
    /// Opening guesses that let the adversary last longest
    pub hardest_openings: Vec<(Sequence, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run one game for each opening guess in the space, or the first `limit`
///
/// Games run in parallel. The strategy picks every guess after the opening.
///
/// # Errors
///
/// Returns the first error any game raised.
pub fn run_benchmark<S>(
    config: GameConfig,
    strategy: S,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError>
where
    S: Strategy + Copy + Send + Sync,
{
    let openings: Vec<Sequence> = space::generate(&config)
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    info!(games = openings.len(), "starting benchmark");

    let pb = if show_progress {
        ProgressBar::new(openings.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let results: Vec<(Sequence, usize)> = openings
        .into_par_iter()
        .map(|opening| -> Result<(Sequence, usize), GameError> {
            let result = auto_play(config, strategy, Some(opening.clone()))?;
            pb.inc(1);
            Ok((opening, result.outcome.rounds()))
        })
        .collect::<Result<_, _>>()?;
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let total_games = results.len();
    let total_rounds: usize = results.iter().map(|(_, rounds)| rounds).sum();
    let mut distribution = BTreeMap::new();
    for (_, rounds) in &results {
        *distribution.entry(*rounds).or_insert(0) += 1;
    }

    let mut hardest_openings = results.clone();
    hardest_openings.sort_by(|(a, ra), (b, rb)| rb.cmp(ra).then_with(|| a.cmp(b)));
    hardest_openings.truncate(5);

    Ok(BenchmarkResult {
        total_games,
        total_rounds,
        average_rounds: if total_games > 0 {
            total_rounds as f64 / total_games as f64
        } else {
            0.0
        },
        min_rounds: results.iter().map(|(_, r)| *r).min().unwrap_or(0),
        max_rounds: results.iter().map(|(_, r)| *r).max().unwrap_or(0),
        distribution,
        hardest_openings,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
