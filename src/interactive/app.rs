//! TUI application state and logic

use crate::game::{Outcome, Session};
use crate::storage::Store;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Most recent messages kept for the message panel
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<S: Store> {
    pub session: Session<S>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
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

impl<S: Store> App<S> {
    #[must_use]
    pub fn new(session: Session<S>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };

        if app.session.round().is_over() {
            app.add_message(
                "Last round is finished. Press 'n' for the next one.",
                MessageStyle::Info,
            );
        } else if app.session.round().guesses().is_empty() {
            app.add_message(
                "Which year is it? Type 4 digits and press Enter.",
                MessageStyle::Info,
            );
        } else {
            app.add_message("Welcome back! Your round continues.", MessageStyle::Info);
        }
        app
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') if self.session.round().is_over() => self.new_round(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                self.session.push_digit(c);
            }
            KeyCode::Backspace => {
                self.session.pop_digit();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn submit(&mut self) {
        match self.session.enter() {
            Ok(Outcome::Won) => {
                let count = self.session.round().guesses().len();
                let celebration = match count {
                    1 => "🎯 First try! Extraordinary!",
                    2 => "🔥 Excellent! Two guesses!",
                    3 => "✨ Well done! Three guesses!",
                    _ => "😅 Phew! Got it on the last attempt!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    "Press 'n' for the next round or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            Ok(Outcome::Lost) => {
                let year = self.session.round().puzzle().year.text().to_string();
                self.add_message(&format!("Time's up! It was {year}."), MessageStyle::Error);
                self.add_message(
                    "Press 'n' for the next round or 'q' to quit.",
                    MessageStyle::Info,
                );
            }
            Ok(Outcome::InProgress) => {
                let left = self.session.round().attempts_left();
                self.add_message(&format!("{left} attempts left"), MessageStyle::Info);
            }
            Err(error) => self.add_message(&error.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_round(&mut self) {
        self.session.start_round();
        self.messages.clear();
        self.add_message("New round started! Here is your first hint.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: Store>(app: App<S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: Store>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
