//! Mastermind Solver - CLI
//!
//! Adversarial Mastermind with TUI and CLI modes: the code-keeper answers
//! every guess with the feedback that leaves the most secrets possible.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{analyze_guess, auto_play, run_benchmark, run_simple},
    core::{DEFAULT_COLORS, DEFAULT_HOLES, GameConfig, Sequence},
    output::{print_analysis_result, print_auto_play_result, print_benchmark_result},
    solver::StrategyType,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind against a code-keeper that never commits to a secret",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors, digits 0 to colors-1 (values above 10 become 10)
    #[arg(short, long, global = true)]
    colors: Option<u32>,

    /// Number of holes in a sequence
    #[arg(short = 'H', long, global = true)]
    holes: Option<usize>,

    /// Guessing strategy for automated play: minimax (default), first, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (asks for the board size unless given)
    Simple,

    /// Let the strategy play one game against the code-keeper
    Solve {
        /// Force the opening guess, e.g. 0011
        #[arg(short, long)]
        opening: Option<String>,

        /// Show candidate counts for each round
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the full space
    Analyze {
        /// Guess to analyze, e.g. 0123
        guess: String,

        /// Sequences listed per feedback class
        #[arg(short = 'n', long, default_value = "5")]
        sample: usize,
    },

    /// Play one game per opening guess and report round statistics
    Benchmark {
        /// Only play the first N openings
        #[arg(short, long)]
        limit: Option<usize>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(resolve_config(cli.colors, cli.holes)?),
        Commands::Simple => {
            let config = if cli.colors.is_none() && cli.holes.is_none() {
                None
            } else {
                Some(resolve_config(cli.colors, cli.holes)?)
            };
            run_simple(config)?;
            Ok(())
        }
        Commands::Solve { opening, verbose } => run_solve_command(
            resolve_config(cli.colors, cli.holes)?,
            strategy,
            opening.as_deref(),
            verbose,
        ),
        Commands::Analyze { guess, sample } => {
            let config = resolve_config(cli.colors, cli.holes)?;
            let result = analyze_guess(&guess, &config, sample)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { limit, no_progress } => {
            run_benchmark_command(resolve_config(cli.colors, cli.holes)?, strategy, limit, !no_progress)
        }
    }
}

/// Build the configuration from flags, falling back to the defaults
fn resolve_config(colors: Option<u32>, holes: Option<usize>) -> Result<GameConfig> {
    Ok(GameConfig::clamped(
        colors.unwrap_or(DEFAULT_COLORS),
        holes.unwrap_or(DEFAULT_HOLES),
    )?)
}

fn run_solve_command(
    config: GameConfig,
    strategy: StrategyType,
    opening: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let opening = opening
        .map(|text| Sequence::parse(text, &config))
        .transpose()?;

    let result = auto_play(config, strategy, opening)?;
    print_auto_play_result(&result, strategy.name(), verbose);
    Ok(())
}

fn run_benchmark_command(
    config: GameConfig,
    strategy: StrategyType,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<()> {
    let games = limit.map_or(config.space_size(), |n| n.min(config.space_size()));
    println!(
        "Benchmarking {} against {games} openings ({} colors, {} holes)...",
        strategy.name(),
        config.colors(),
        config.holes()
    );

    let result = run_benchmark(config, strategy, limit, show_progress)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(config: GameConfig) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    let app = App::new(config);
    run_tui(app)
}
