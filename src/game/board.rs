//! Board view of a round for front-ends
//!
//! Turns the round plus the digits typed so far into fixed rows of cells. Front-ends
//! only draw what this returns.

use super::round::{MAX_ATTEMPTS, Round};
use crate::core::{DigitStatus, Direction, YEAR_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub digit: Option<char>,
    pub status: DigitStatus,
}

impl Cell {
    pub const EMPTY: Self = Self {
        digit: None,
        status: DigitStatus::Empty,
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub cells: [Cell; YEAR_LENGTH],
    /// Set once the row's guess has been submitted
    pub direction: Option<Direction>,
    /// Hint for this row, when it has been revealed
    pub hint: Option<&'a str>,
}

impl Round {
    /// Rows for every attempt, with `buffer` shown in the next open row
    ///
    /// # Examples
    /// ```
    /// use chronos::core::{DigitStatus, Puzzle, Year};
    /// use chronos::game::Round;
    ///
    /// let hints = ["a", "b", "c", "d"].map(String::from);
    /// let mut round = Round::new(Puzzle::new("1", Year::new("1789").unwrap(), hints));
    /// round.submit("1800").unwrap();
    ///
    /// let board = round.board("17");
    /// assert_eq!(board.len(), 4);
    /// assert_eq!(board[1].cells[0].status, DigitStatus::Pending);
    /// assert_eq!(board[1].cells[2].status, DigitStatus::Empty);
    /// ```
    #[must_use]
    pub fn board(&self, buffer: &str) -> Vec<Row<'_>> {
        let visible = self
            .puzzle()
            .visible_hints(self.guesses().len(), self.is_over());

        let mut rows: Vec<Row<'_>> = self
            .evaluations()
            .map(|(guess, feedback, direction)| {
                let mut cells = [Cell::EMPTY; YEAR_LENGTH];
                for ((cell, digit), &status) in cells
                    .iter_mut()
                    .zip(guess.text().chars())
                    .zip(feedback.statuses())
                {
                    *cell = Cell {
                        digit: Some(digit),
                        status,
                    };
                }
                Row {
                    cells,
                    direction: Some(direction),
                    hint: None,
                }
            })
            .collect();

        if !self.is_over() && rows.len() < MAX_ATTEMPTS {
            let mut cells = [Cell::EMPTY; YEAR_LENGTH];
            for (cell, digit) in cells.iter_mut().zip(buffer.chars()) {
                *cell = Cell {
                    digit: Some(digit),
                    status: DigitStatus::Pending,
                };
            }
            rows.push(Row {
                cells,
                direction: None,
                hint: None,
            });
        }

        rows.resize(
            MAX_ATTEMPTS,
            Row {
                cells: [Cell::EMPTY; YEAR_LENGTH],
                direction: None,
                hint: None,
            },
        );

        for (row, hint) in rows.iter_mut().zip(visible) {
            row.hint = Some(hint.as_str());
        }

        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Puzzle, Year};

    fn round(year: &str) -> Round {
        let hints = ["h1", "h2", "h3", "h4"].map(String::from);
        Round::new(Puzzle::new("p", Year::new(year).unwrap(), hints))
    }

    #[test]
    fn fresh_board_shows_first_hint_and_empty_cells() {
        let round = round("1945");
        let board = round.board("");

        assert_eq!(board.len(), MAX_ATTEMPTS);
        assert_eq!(board[0].hint, Some("h1"));
        assert_eq!(board[1].hint, None);
        assert!(
            board
                .iter()
                .all(|row| row.cells == [Cell::EMPTY; YEAR_LENGTH] && row.direction.is_none())
        );
    }

    #[test]
    fn submitted_rows_are_evaluated() {
        let mut round = round("1945");
        round.submit("1954").unwrap();
        let board = round.board("");

        let statuses: Vec<_> = board[0].cells.iter().map(|c| c.status).collect();
        assert_eq!(
            statuses,
            [
                DigitStatus::Correct,
                DigitStatus::Correct,
                DigitStatus::Present,
                DigitStatus::Present
            ]
        );
        assert_eq!(board[0].cells[2].digit, Some('5'));
        assert_eq!(board[0].direction, Some(Direction::Earlier));
        assert_eq!(board[1].hint, Some("h2"));
        assert_eq!(board[2].hint, None);
    }

    #[test]
    fn buffer_fills_next_row_as_pending() {
        let mut round = round("1945");
        round.submit("2000").unwrap();
        let board = round.board("19");

        assert_eq!(
            board[1].cells[0],
            Cell {
                digit: Some('1'),
                status: DigitStatus::Pending
            }
        );
        assert_eq!(board[1].cells[1].status, DigitStatus::Pending);
        assert_eq!(board[1].cells[2], Cell::EMPTY);
        assert_eq!(board[2].cells[0], Cell::EMPTY);
    }

    #[test]
    fn finished_round_reveals_all_hints_and_ignores_buffer() {
        let mut round = round("1945");
        round.submit("1945").unwrap();
        let board = round.board("12");

        assert!(board.iter().all(|row| row.hint.is_some()));
        assert_eq!(board[1].cells[0], Cell::EMPTY);
        assert_eq!(board[0].direction, Some(Direction::Exact));
    }

    #[test]
    fn lost_round_has_four_evaluated_rows() {
        let mut round = round("1945");
        for guess in ["1000", "1100", "1200", "1300"] {
            round.submit(guess).unwrap();
        }
        let board = round.board("");

        assert!(board.iter().all(|row| row.direction == Some(Direction::Later)));
        assert!(board.iter().all(|row| row.cells.iter().all(|c| c.status.is_revealed())));
    }
}
