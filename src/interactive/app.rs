//! TUI application state and logic

use crate::core::{GameConfig, Sequence};
use crate::solver::minimax::select_best_guess;
use crate::solver::{EngineState, GameSession, MINIMAX_LIMIT, RoundEngine};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, error};

/// Hints are only computed at or below this many candidates
pub const HINT_LIMIT: usize = MINIMAX_LIMIT;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub engine: RoundEngine,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub show_candidates: bool,
    pub hint: Option<Hint>,
}

/// A suggested guess and how many candidates it can leave at worst
#[derive(Debug, Clone)]
pub struct Hint {
    pub guess: Sequence,
    pub worst_case: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_solved: usize,
    pub total_rounds: usize,
    pub best_rounds: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_rounds(&self) -> f64 {
        if self.games_solved == 0 {
            0.0
        } else {
            self.total_rounds as f64 / self.games_solved as f64
        }
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let mut app = Self {
            config,
            engine: RoundEngine::new(GameSession::new(config)),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            show_candidates: false,
            hint: None,
        };
        app.add_message(
            &format!(
                "Guess {} digits from 0 to {}. I'll dodge for as long as I can.",
                config.holes(),
                config.colors() - 1
            ),
            MessageStyle::Info,
        );
        app.add_message(
            "Enter: submit | Tab: reveal candidates | ?: hint",
            MessageStyle::Info,
        );
        if app.is_over() {
            app.add_message(
                "With a single color there is nothing left to guess.",
                MessageStyle::Success,
            );
        }
        app
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        self.engine.session()
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session().candidates().len()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.engine.state() == EngineState::Terminal
    }

    /// Submit the typed guess; an empty buffer reveals the candidates
    pub fn submit_guess(&mut self) {
        if self.is_over() {
            return;
        }

        let text = self.input_buffer.trim().to_string();
        if text.is_empty() {
            self.toggle_candidates();
            return;
        }

        let guess = match Sequence::parse(&text, &self.config) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match self.engine.submit(guess) {
            Ok(record) => {
                self.input_buffer.clear();
                self.hint = None;
                self.add_message(
                    &format!(
                        "{} → {}: {} possibilities left",
                        record.guess, record.feedback, record.candidates_after
                    ),
                    MessageStyle::Info,
                );
                if self.is_over() {
                    self.finish_game();
                }
            }
            Err(e) => {
                error!(error = %e, "round failed");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self) {
        let rounds = self.session().rounds().len();
        self.stats.total_games += 1;
        self.stats.games_solved += 1;
        self.stats.total_rounds += rounds;
        self.stats.best_rounds = Some(self.stats.best_rounds.map_or(rounds, |b| b.min(rounds)));

        let secret = self
            .session()
            .candidates()
            .single()
            .map(ToString::to_string)
            .unwrap_or_default();
        self.add_message(
            &format!("🎉 You won in {rounds}! The secret was {secret}."),
            MessageStyle::Success,
        );
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn toggle_candidates(&mut self) {
        self.show_candidates = !self.show_candidates;
        if self.show_candidates {
            self.add_message(
                &format!("Possibilities revealed ({}).", self.candidates_count()),
                MessageStyle::Info,
            );
        }
    }

    /// Suggest the candidate with the smallest worst-case class
    pub fn compute_hint(&mut self) {
        let count = self.candidates_count();
        if count > HINT_LIMIT {
            self.add_message(
                &format!("Too many candidates for a hint ({count} > {HINT_LIMIT})"),
                MessageStyle::Error,
            );
            return;
        }

        let pool = self.engine.session().candidates().as_slice();
        let hint = select_best_guess(pool, pool).map(|(guess, worst_case)| Hint {
            guess: guess.clone(),
            worst_case,
        });
        self.hint = hint;

        if let Some(hint) = &self.hint {
            let text = format!("Hint: {} (at worst {} left)", hint.guess, hint.worst_case);
            self.add_message(&text, MessageStyle::Success);
        }
    }

    pub fn new_game(&mut self) {
        if !self.is_over() && !self.session().rounds().is_empty() {
            self.stats.total_games += 1;
        }
        self.engine = RoundEngine::new(GameSession::new(self.config));
        self.input_buffer.clear();
        self.messages.clear();
        self.show_candidates = false;
        self.hint = None;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.is_over() => self.should_quit = true,
            KeyCode::Char('n') if self.is_over() => self.new_game(),
            _ if self.is_over() => {}
            KeyCode::Tab => self.toggle_candidates(),
            KeyCode::Char('?') => self.compute_hint(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if self.input_buffer.len() < self.config.holes() {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            debug!(code = ?key.code, "key pressed");
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
