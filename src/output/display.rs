//! Display functions for rounds and command results

use super::formatters::{attempts_bar, cell_text, direction_badge};
use crate::commands::EvaluationResult;
use crate::core::status_emoji;
use crate::game::{MAX_ATTEMPTS, Outcome, Round};
use colored::Colorize;

/// Print the board with the typed digits in the open row
pub fn print_board(round: &Round, buffer: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{}  {}",
        "CHRONOS".bright_green().bold(),
        "Guess the year of history".bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, row) in round.board(buffer).iter().enumerate() {
        let cells: String = row.cells.iter().map(|c| cell_text(c).to_string()).collect();
        let badge = row
            .direction
            .map(|d| direction_badge(d).to_string())
            .unwrap_or_default();
        println!("\n  {cells}  {badge}");

        if let Some(hint) = row.hint {
            println!("  {} {}", format!("#0{}", i + 1).bright_blue(), hint);
        }
    }

    println!(
        "\n  Attempts: {} ({} left)",
        attempts_bar(round.guesses().len(), MAX_ATTEMPTS),
        round.attempts_left()
    );

    if round.is_over() {
        print_round_end(round);
    }
}

/// Print the end-of-round panel
pub fn print_round_end(round: &Round) {
    let puzzle = round.puzzle();
    println!("\n{}", "═".repeat(60).bright_cyan());
    match round.outcome() {
        Outcome::Won => println!(
            "  {} Solved in {} {}",
            "Excellent!".green().bold(),
            round.guesses().len(),
            if round.guesses().len() == 1 { "guess" } else { "guesses" }
        ),
        Outcome::Lost => println!("  {}", "Time's up!".red().bold()),
        Outcome::InProgress => {}
    }

    println!(
        "  {}{}",
        puzzle.year.text().bright_white().bold(),
        puzzle
            .title
            .as_ref()
            .map(|t| format!(" · {t}"))
            .unwrap_or_default()
    );
    if let Some(explanation) = &puzzle.explanation {
        println!("  {}", explanation.italic());
    }

    println!("\n  Your guesses:");
    for (i, (guess, feedback, direction)) in round.evaluations().enumerate() {
        println!(
            "    {}. {} {} {}",
            (i + 1).to_string().bright_black(),
            guess.text().bright_white().bold(),
            feedback.to_emoji(),
            direction_badge(direction)
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print a one-shot evaluation
pub fn print_evaluation(result: &EvaluationResult) {
    let emoji: String = result.statuses.iter().map(|&s| status_emoji(s)).collect();
    println!(
        "{} vs {}: {} {}",
        result.guess.bright_white().bold(),
        result.target.bright_white().bold(),
        emoji,
        direction_badge(result.direction)
    );
    for (digit, status) in result.guess.chars().zip(result.statuses) {
        println!("  {digit}  {status:?}");
    }
}
