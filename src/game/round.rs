//! Round state machine
//!
//! A round starts `InProgress` and ends `Won` or `Lost`. Finished rounds are never
//! reopened; a new round is a new value.

use crate::core::{Direction, Feedback, Puzzle, Year, YearError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    #[serde(alias = "playing")]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a guess was turned away
///
/// Rejections never change the round. Messages are meant for the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("The round is over. Start a new one!")]
    RoundOver,
    #[error(transparent)]
    Invalid(#[from] YearError),
}

/// One play session against a single puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    puzzle: Puzzle,
    guesses: Vec<Year>,
    outcome: Outcome,
}

impl Round {
    /// Fresh round with no guesses
    #[must_use]
    pub const fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            guesses: Vec::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Rebuild a round from saved parts as-is
    ///
    /// The outcome is taken verbatim, not recomputed from the guesses.
    pub(crate) const fn restore(puzzle: Puzzle, guesses: Vec<Year>, outcome: Outcome) -> Self {
        Self {
            puzzle,
            guesses,
            outcome,
        }
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub fn guesses(&self) -> &[Year] {
        &self.guesses
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    #[must_use]
    pub fn attempts_left(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.guesses.len())
    }

    /// Submit a guess
    ///
    /// Returns the outcome after the guess. The fourth miss loses immediately.
    ///
    /// # Errors
    /// Returns `GuessError` without touching the round if it is already over or the
    /// candidate is not 4 digits.
    ///
    /// # Examples
    /// ```
    /// use chronos::core::{Puzzle, Year};
    /// use chronos::game::{Outcome, Round};
    ///
    /// let hints = ["a", "b", "c", "d"].map(String::from);
    /// let mut round = Round::new(Puzzle::new("1", Year::new("1789").unwrap(), hints));
    ///
    /// assert_eq!(round.submit("1800"), Ok(Outcome::InProgress));
    /// assert_eq!(round.submit("1789"), Ok(Outcome::Won));
    /// assert!(round.submit("1234").is_err());
    /// ```
    pub fn submit(&mut self, candidate: &str) -> Result<Outcome, GuessError> {
        if self.outcome.is_over() {
            return Err(GuessError::RoundOver);
        }

        let guess = Year::new(candidate)?;
        let hit = guess == self.puzzle.year;
        self.guesses.push(guess);

        self.outcome = if hit {
            Outcome::Won
        } else if self.guesses.len() >= MAX_ATTEMPTS {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };

        tracing::debug!(
            puzzle = %self.puzzle.id,
            guess = candidate,
            attempt = self.guesses.len(),
            outcome = ?self.outcome,
            "guess submitted"
        );
        Ok(self.outcome)
    }

    /// Feedback and direction for every submitted guess, in order
    pub fn evaluations(&self) -> impl Iterator<Item = (&Year, Feedback, Direction)> {
        let target = &self.puzzle.year;
        self.guesses.iter().map(move |guess| {
            (
                guess,
                Feedback::calculate(guess, target),
                Direction::between(guess, target),
            )
        })
    }
}
