//! TUI rendering with ratatui
//!
//! Board, candidate and progress panels for the Mastermind interface.

use super::app::{App, MessageStyle};
use crate::output::formatters::{bits_remaining, feedback_pegs};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates are listed one by one up to this count unless revealed
const LIST_THRESHOLD: usize = 12;

/// Most candidates drawn when the list is revealed
const REVEAL_CAP: usize = 120;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🎯 MASTERMIND - {} colors, {} holes",
        app.config.colors(),
        app.config.holes()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let holes = app.config.holes();
    let rounds = app.session().rounds();

    let items: Vec<ListItem> = if rounds.is_empty() {
        vec![ListItem::new("No guesses yet").style(Style::default().fg(Color::DarkGray))]
    } else {
        rounds
            .iter()
            .enumerate()
            .map(|(i, round)| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:>2}: ", i + 1)),
                    Span::styled(
                        round.guess.to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        feedback_pegs(round.feedback, holes),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(format!(
                        "  {}  {} → {}",
                        round.feedback, round.candidates_before, round.candidates_after
                    )),
                ]))
            })
            .collect()
    };

    let board = List::new(items).block(
        Block::default()
            .title(" Rounds ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Progress gauge
            Constraint::Percentage(55), // Candidates
            Constraint::Min(5),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total_bits = bits_remaining(app.config.space_size());
    let left_bits = bits_remaining(app.candidates_count());
    let gained = total_bits - left_bits;
    let progress_pct = if total_bits > 0.0 {
        ((gained / total_bits * 100.0).clamp(0.0, 100.0)) as u16
    } else {
        100
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Information Gained ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{gained:.1}/{total_bits:.1} bits"));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session().candidates();
    let count = candidates.len();

    let mut lines = Vec::new();
    if let Some(hint) = &app.hint {
        lines.push(Line::from(vec![
            Span::raw("Hint: "),
            Span::styled(
                hint.guess.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" (worst case {})", hint.worst_case)),
        ]));
    }

    if app.show_candidates || count <= LIST_THRESHOLD {
        let shown: Vec<String> = candidates
            .iter()
            .take(REVEAL_CAP)
            .map(ToString::to_string)
            .collect();
        lines.push(Line::from(shown.join(" ")));
        if count > REVEAL_CAP {
            lines.push(Line::from(format!("… (+{} more)", count - REVEAL_CAP)));
        }
    } else {
        lines.push(Line::from(format!("{count} candidates remaining")));
        lines.push(Line::from(format!(
            "Information needed: {:.2} bits",
            bits_remaining(count)
        )));
        lines.push(Line::from("Tab to reveal them"));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(format!(" Candidates ({count}) "))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = if app.is_over() {
        (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            String::new(),
            Color::Green,
        )
    } else {
        (
            format!(
                " Enter {} digits (0-{}) | Enter with nothing typed reveals candidates ",
                app.config.holes(),
                app.config.colors() - 1
            ),
            app.input_buffer.clone(),
            Color::Yellow,
        )
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round_text = format!("Round: {}", app.session().rounds().len() + 1);
    f.render_widget(
        Paragraph::new(round_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Solved: {}/{} | Avg: {:.1}",
        app.stats.games_solved,
        app.stats.total_games,
        app.stats.average_rounds()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let best_text = app
        .stats
        .best_rounds
        .map_or_else(|| "Best: -".to_string(), |best| format!("Best: {best}"));
    f.render_widget(
        Paragraph::new(best_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help_text = if app.is_over() {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | ?: Hint | Tab: Reveal | ^N: New"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
