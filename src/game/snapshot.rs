//! Persisted form of a round
//!
//! A snapshot stores the puzzle id instead of the puzzle, so saves stay small and a
//! catalog edit does not leave stale hints behind.

use super::round::{MAX_ATTEMPTS, Outcome, Round};
use crate::catalog::Catalog;
use crate::core::{Year, YearError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a saved round cannot be resumed
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("saved round is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("saved round refers to unknown puzzle '{0}'")]
    UnknownPuzzle(String),
    #[error("saved round holds an invalid guess: {0}")]
    InvalidGuess(#[from] YearError),
    #[error("saved round holds {0} guesses, more than {MAX_ATTEMPTS}")]
    TooManyGuesses(usize),
    #[error("saved round is marked {saved:?} but its guesses mean {implied:?}")]
    InconsistentOutcome { saved: Outcome, implied: Outcome },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub puzzle_id: String,
    pub guesses: Vec<String>,
    #[serde(alias = "status")]
    pub outcome: Outcome,
}

impl Snapshot {
    #[must_use]
    pub fn of(round: &Round) -> Self {
        Self {
            puzzle_id: round.puzzle().id.clone(),
            guesses: round.guesses().iter().map(|g| g.text().to_string()).collect(),
            outcome: round.outcome(),
        }
    }

    /// Encode as compact JSON
    ///
    /// # Errors
    /// Serialization of this plain struct does not fail in practice; the error is
    /// passed through from `serde_json`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode from JSON
    ///
    /// # Errors
    /// Returns `SnapshotError::Decode` for malformed input.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Rebuild the round against `catalog`
    ///
    /// The saved outcome must match the one the guesses imply, so a finished round
    /// comes back finished and an open one stays open.
    ///
    /// # Errors
    /// Fails if the puzzle id is unknown, a guess is not a 4-digit year, there are
    /// more guesses than attempts, or the saved outcome contradicts the guesses.
    pub fn restore(self, catalog: &Catalog) -> Result<Round, SnapshotError> {
        let puzzle = catalog
            .find(&self.puzzle_id)
            .ok_or(SnapshotError::UnknownPuzzle(self.puzzle_id))?;

        if self.guesses.len() > MAX_ATTEMPTS {
            return Err(SnapshotError::TooManyGuesses(self.guesses.len()));
        }

        let guesses = self
            .guesses
            .into_iter()
            .map(Year::new)
            .collect::<Result<Vec<_>, _>>()?;

        let implied = if guesses.contains(&puzzle.year) {
            Outcome::Won
        } else if guesses.len() == MAX_ATTEMPTS {
            Outcome::Lost
        } else {
            Outcome::InProgress
        };
        if implied != self.outcome {
            return Err(SnapshotError::InconsistentOutcome {
                saved: self.outcome,
                implied,
            });
        }

        Ok(Round::restore(puzzle.clone(), guesses, self.outcome))
    }
}
