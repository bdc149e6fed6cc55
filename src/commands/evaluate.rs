//! One-shot evaluation command
//!
//! Scores a guess against an arbitrary target year without touching the save slot.

use crate::core::{DigitStatus, Direction, Feedback, YEAR_LENGTH, Year, YearError};

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub guess: String,
    pub target: String,
    pub statuses: [DigitStatus; YEAR_LENGTH],
    pub direction: Direction,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either side is not a 4-digit year.
pub fn evaluate_pair(guess: &str, target: &str) -> Result<EvaluationResult, YearError> {
    let guess = Year::new(guess.trim())?;
    let target = Year::new(target.trim())?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(EvaluationResult {
        statuses: *feedback.statuses(),
        direction: Direction::between(&guess, &target),
        guess: guess.into(),
        target: target.into(),
    })
}
