//! Simple line-mode game
//!
//! Text-based game without TUI: the player types guesses as digit strings and
//! the adversary answers with the most evasive feedback.

use crate::core::{GameConfig, Sequence};
use crate::output::formatters::{candidate_list, feedback_pegs};
use crate::solver::{
    CandidateSet, GameOutcome, GameSession, GuessSource, PlayerRequest, RoundEngine,
    RoundObserver, RoundRecord, run_game,
};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Most candidates listed when the player asks to reveal them
pub const REVEAL_LIMIT: usize = 200;

/// Run the line-mode game on stdin/stdout
///
/// Prompts for the board size first when `config` is `None`.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the core
/// reports an internal inconsistency.
pub fn run_simple(config: Option<GameConfig>) -> Result<GameOutcome> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let config = match config {
        Some(config) => config,
        None => prompt_config(&mut input, &mut io::stdout())?,
    };

    println!("Game is starting.");
    let mut player = LinePlayer::new(input, io::stdout());
    let mut reporter = ConsoleReporter::new(io::stdout(), config.holes());
    let mut engine = RoundEngine::new(GameSession::new(config));

    Ok(run_game(&mut engine, &mut player, &mut reporter)?)
}

/// Ask for the color and hole counts until both are usable
///
/// Color counts above ten are reduced to ten, as the setup policy requires.
///
/// # Errors
///
/// Returns an I/O error if reading or writing fails, including end of input.
pub fn prompt_config<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<GameConfig> {
    loop {
        let colors: u32 = prompt_number(input, output, "How many colors do you want to play with? ")?;
        if colors > 10 {
            writeln!(
                output,
                "--> Only 10 colors are handled at the moment. Setting the number of colors to 10..."
            )?;
        }
        let holes: usize = prompt_number(input, output, "How many holes do you want to play with? ")?;

        match GameConfig::clamped(colors, holes) {
            Ok(config) => return Ok(config),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

fn prompt_number<R, W, T>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    T: std::str::FromStr,
{
    loop {
        let line = read_prompted(input, output, prompt)?
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))?;
        match line.parse() {
            Ok(value) => return Ok(value),
            Err(_) => writeln!(output, "Please enter a whole number.")?,
        }
    }
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn read_prompted<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Reads guesses from a line-oriented reader
///
/// An empty line asks to reveal the candidates; `quit` or end of input
/// abandons the game. Anything malformed is re-prompted and never reaches the
/// core.
pub struct LinePlayer<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePlayer<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> GuessSource for LinePlayer<R, W> {
    fn next_request(&mut self, session: &GameSession) -> io::Result<PlayerRequest> {
        loop {
            let Some(text) =
                read_prompted(&mut self.input, &mut self.output, "What would you like to guess? ")?
            else {
                return Ok(PlayerRequest::Quit);
            };

            match text.as_str() {
                "" => return Ok(PlayerRequest::Reveal),
                "quit" | "q" | "exit" => return Ok(PlayerRequest::Quit),
                _ => {}
            }

            match Sequence::parse(&text, session.config()) {
                Ok(guess) => return Ok(PlayerRequest::Guess(guess)),
                Err(e) => writeln!(self.output, "{e}\n")?,
            }
        }
    }
}

/// Prints rounds, reveals and the final result
pub struct ConsoleReporter<W> {
    output: W,
    holes: usize,
    history: Vec<RoundRecord>,
}

impl<W: Write> ConsoleReporter<W> {
    pub const fn new(output: W, holes: usize) -> Self {
        Self {
            output,
            holes,
            history: Vec::new(),
        }
    }

    fn write_lines(&mut self, lines: &[String]) {
        for line in lines {
            if let Err(e) = writeln!(self.output, "{line}") {
                warn!(error = %e, "failed to write game output");
                return;
            }
        }
    }
}

impl<W: Write> RoundObserver for ConsoleReporter<W> {
    fn round_played(&mut self, record: &RoundRecord, remaining: usize) {
        self.history.push(record.clone());

        let mut lines = vec![
            format!("You guessed {}", record.guess.to_string().bright_white().bold()),
            format!(
                "Feedback: {} {}  ({remaining} possibilities left)",
                record.feedback,
                feedback_pegs(record.feedback, self.holes).bright_yellow()
            ),
            String::new(),
        ];
        for (i, round) in self.history.iter().enumerate() {
            lines.push(format!("Round {}: {}      {}", i + 1, round.guess, round.feedback));
        }
        lines.push(String::new());

        self.write_lines(&lines);
    }

    fn candidates_revealed(&mut self, candidates: &CandidateSet) {
        let lines = [
            format!("There are {} possibilities.", candidates.len()),
            candidate_list(candidates, REVEAL_LIMIT),
            "Possibilities revealed.".to_string(),
            String::new(),
        ];
        self.write_lines(&lines);
    }

    fn game_finished(&mut self, outcome: &GameOutcome) {
        let line = match outcome {
            GameOutcome::Solved { secret, rounds } => format!(
                "{} The secret was {}.",
                format!("You won in {rounds}!").green().bold(),
                secret
            ),
            GameOutcome::Abandoned { rounds } => {
                format!("Game abandoned after {rounds} rounds.")
            }
        };
        self.write_lines(&[line]);
    }
}
