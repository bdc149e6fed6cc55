//! Formatting utilities for terminal output

use crate::core::{DigitStatus, Direction};
use crate::game::Cell;
use colored::{ColoredString, Colorize};

/// Render a board cell as a padded, coloured digit like ` 7 `
#[must_use]
pub fn cell_text(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.digit.unwrap_or('·'));
    match cell.status {
        DigitStatus::Correct => text.white().bold().on_green(),
        DigitStatus::Present => text.white().bold().on_yellow(),
        DigitStatus::Absent => text.bright_white().on_red(),
        DigitStatus::Pending => text.white().bold().on_bright_black(),
        DigitStatus::Empty => text.bright_black(),
    }
}

/// Coloured earlier/later badge
#[must_use]
pub fn direction_badge(direction: Direction) -> ColoredString {
    let text = direction.to_string();
    match direction {
        Direction::Exact => text.green().bold(),
        Direction::Later | Direction::Earlier => text.bright_blue().bold(),
    }
}

/// Create an attempts bar such as "●●○○"
#[must_use]
pub fn attempts_bar(used: usize, max: usize) -> String {
    let used = used.min(max);
    format!("{}{}", "●".repeat(used), "○".repeat(max - used))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_bar_empty() {
        assert_eq!(attempts_bar(0, 4), "○○○○");
    }

    #[test]
    fn attempts_bar_partial() {
        assert_eq!(attempts_bar(3, 4), "●●●○");
    }

    #[test]
    fn attempts_bar_clamped() {
        assert_eq!(attempts_bar(9, 4), "●●●●");
    }

    #[test]
    fn cell_text_shows_digit_or_dot() {
        colored::control::set_override(false);

        let typed = Cell {
            digit: Some('4'),
            status: DigitStatus::Pending,
        };
        assert_eq!(cell_text(&typed).to_string(), " 4 ");
        assert_eq!(cell_text(&Cell::EMPTY).to_string(), " · ");
    }
}
