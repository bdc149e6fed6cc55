//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a year and press enter.

use crate::game::{Outcome, Session};
use crate::output::print_board;
use crate::storage::Store;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the player asked for on one input line
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Quit,
    NewRound,
    Guess(&'a str),
}

fn parse_input(line: &str) -> Input<'_> {
    match line.to_lowercase().as_str() {
        "quit" | "q" | "exit" => Input::Quit,
        "new" | "n" => Input::NewRound,
        _ => Input::Guess(line),
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S: Store>(session: &mut Session<S>) -> io::Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, &mut stdin.lock())
}

/// Run the simple mode reading lines from `input`
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple_with<S: Store, R: BufRead>(
    session: &mut Session<S>,
    input: &mut R,
) -> io::Result<()> {
    println!("Type a 4-digit year and press enter.");
    println!("Commands: 'new' for a new round, 'quit' to exit\n");

    loop {
        print_board(session.round(), "");

        let prompt = if session.round().is_over() {
            "Play again? (new/quit)"
        } else {
            "Your guess"
        };
        let Some(line) = read_line(prompt, input)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match parse_input(&line) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewRound => {
                session.start_round();
                println!("\n🔄 New round started!");
            }
            Input::Guess(text) => match session.submit_guess(text) {
                Ok(Outcome::Won) => println!("\n{}", "✓ Correct!".green().bold()),
                Ok(Outcome::Lost) => println!("\n{}", "✗ Out of attempts".red().bold()),
                Ok(Outcome::InProgress) => {}
                Err(error) => println!("\n{} {error}", "❌".red()),
            },
        }
    }
}

/// Read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
