//! TUI rendering with ratatui
//!
//! Board, hints and status panels for the year guessing game.

use super::app::{App, MessageStyle};
use crate::core::{DigitStatus, Direction};
use crate::game::{Cell, MAX_ATTEMPTS, Outcome, Round, Row};
use crate::output::formatters::attempts_bar;
use crate::storage::Store;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<S: Store>(f: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board with hints
            Constraint::Percentage(40), // Result and messages
        ])
        .split(chunks[1]);

    let round = app.session.round();
    render_board(f, round, app.session.buffer(), main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_status(f, round, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⏳ CHRONOS - Guess the year of history")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

const fn status_style(status: DigitStatus) -> Style {
    match status {
        DigitStatus::Correct => Style::new().fg(Color::White).bg(Color::Green),
        DigitStatus::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        DigitStatus::Absent => Style::new().fg(Color::White).bg(Color::Red),
        DigitStatus::Pending => Style::new().fg(Color::White).bg(Color::DarkGray),
        DigitStatus::Empty => Style::new().fg(Color::DarkGray),
    }
}

fn cell_span(cell: &Cell) -> Span<'static> {
    let text = format!(" {} ", cell.digit.unwrap_or('·'));
    Span::styled(text, status_style(cell.status).add_modifier(Modifier::BOLD))
}

fn direction_span(direction: Direction) -> Span<'static> {
    let color = match direction {
        Direction::Exact => Color::Green,
        Direction::Later | Direction::Earlier => Color::LightBlue,
    };
    Span::styled(
        format!("  {direction}"),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn row_lines<'a>(index: usize, row: &Row<'a>) -> Vec<Line<'a>> {
    let mut spans = vec![Span::raw(" ")];
    for cell in &row.cells {
        spans.push(cell_span(cell));
        spans.push(Span::raw(" "));
    }
    if let Some(direction) = row.direction {
        spans.push(direction_span(direction));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(hint) = row.hint {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" #0{} ", index + 1),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM),
            ),
            Span::raw(hint),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

fn render_board(f: &mut Frame, round: &Round, buffer: &str, area: Rect) {
    let lines: Vec<Line> = round
        .board(buffer)
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row_lines(i, row))
        .collect();

    let title = round
        .puzzle()
        .title
        .as_deref()
        .filter(|_| round.is_over())
        .map_or_else(|| " Board ".to_string(), |t| format!(" {t} "));

    let board = Paragraph::new(lines)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(board, area);
}

fn render_side_panel<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Percentage(55), // Result or key help
            Constraint::Percentage(45), // Messages
        ])
        .split(area);

    render_result(f, app.session.round(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_result(f: &mut Frame, round: &Round, area: Rect) {
    let puzzle = round.puzzle();

    let (title, color, content) = match round.outcome() {
        Outcome::InProgress => (
            " Keys ",
            Color::Yellow,
            vec![
                Line::from("0-9        type a digit"),
                Line::from("Backspace  delete last digit"),
                Line::from("Enter      submit guess"),
                Line::from("q / Esc    quit"),
            ],
        ),
        outcome => {
            let (title, color) = if outcome == Outcome::Won {
                (" 🎉 Excellent! ", Color::Green)
            } else {
                (" Time's up ", Color::Red)
            };
            let mut lines = vec![
                Line::from(Span::styled(
                    puzzle.year.text().to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
            ];
            if let Some(explanation) = &puzzle.explanation {
                lines.push(Line::from(Span::styled(
                    explanation.clone(),
                    Style::default().add_modifier(Modifier::ITALIC),
                )));
                lines.push(Line::from(""));
            }
            lines.push(Line::from("Press 'n' for the next round"));
            (title, color, lines)
        }
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(paragraph, area);
}

fn render_messages<S: Store>(f: &mut Frame, app: &App<S>, area: Rect) {
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

fn render_status(f: &mut Frame, round: &Round, area: Rect) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(area);

    let attempts_text = format!(
        "Attempts: {} ({} left)",
        attempts_bar(round.guesses().len(), MAX_ATTEMPTS),
        round.attempts_left()
    );
    let attempts = Paragraph::new(attempts_text).alignment(Alignment::Center);
    f.render_widget(attempts, chunks[0]);

    let help_text = if round.is_over() {
        "q: Quit | n: Next round"
    } else {
        "q: Quit | Enter: Submit | Backspace: Delete"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
