//! Display functions for command results

use super::formatters::{bits_remaining, create_progress_bar, feedback_pegs};
use crate::commands::{AnalysisResult, AutoPlayResult, BenchmarkResult};
use crate::solver::GameOutcome;
use colored::Colorize;

/// Print the rounds of an automated game
pub fn print_auto_play_result(result: &AutoPlayResult, strategy: &str, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Auto-play: {} colors, {} holes, strategy {}",
        result.config.colors(),
        result.config.holes(),
        strategy.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {} {}",
            i + 1,
            round.guess.to_string().bright_white().bold(),
            feedback_pegs(round.feedback, result.config.holes()).bright_yellow(),
            round.feedback
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.candidates_after
            );
            let gained =
                bits_remaining(round.candidates_before) - bits_remaining(round.candidates_after);
            println!("  Info gained: {gained:.3} bits");
        }
    }

    println!();
    match &result.outcome {
        GameOutcome::Solved { secret, rounds } => println!(
            "{}",
            format!("✅ Cornered the secret {secret} in {rounds} rounds!")
                .green()
                .bold()
        ),
        GameOutcome::Abandoned { rounds } => println!(
            "{}",
            format!("❌ Gave up after {rounds} rounds").red().bold()
        ),
    }
}

/// Print how a guess partitions the candidates
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} possible secrets, {} feedback classes:",
        result.total_candidates,
        result.classes.len()
    );

    let largest = result.worst_case() as f64;
    for class in &result.classes {
        let bar = create_progress_bar(class.size as f64, largest, 30);
        let samples: Vec<String> = class.sample.iter().map(ToString::to_string).collect();
        let marker = if class.feedback == result.kept {
            "◀ kept".red().bold().to_string()
        } else {
            String::new()
        };
        println!(
            "   {} {:<7} [{}] {:>6}  {} {}",
            feedback_pegs(class.feedback, result.holes),
            class.feedback.to_string(),
            bar.green(),
            class.size,
            samples.join(" ").bright_black(),
            marker
        );
    }

    println!(
        "\n   Worst case:  {} candidates survive ({:.1}% of the space)",
        result.worst_case(),
        result.worst_case() as f64 / result.total_candidates.max(1) as f64 * 100.0
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&rounds, &count) in &result.distribution {
        let pct = (count as f64 / result.total_games.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {rounds:>2}: {bar} {count:6} ({pct:5.1}%)");
    }

    if !result.hardest_openings.is_empty() {
        println!("\n😰 {}", "Hardest openings:".yellow().bold());
        for (opening, rounds) in &result.hardest_openings {
            println!("   {} ({rounds} rounds)", opening.to_string().yellow());
        }
    }
}
