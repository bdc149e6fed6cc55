//! Per-digit feedback calculation and representation
//!
//! Each guessed digit is scored against the target year:
//! - Correct: digit in the right position
//! - Present: digit occurs in the target at another position
//! - Absent: digit not in the target (or all its occurrences already used)
//!
//! `Pending` and `Empty` never come out of an evaluation; they describe cells that
//! are typed but not submitted, or not typed yet.

use super::year::{YEAR_LENGTH, Year};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Outcome of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigitStatus {
    Correct,
    Present,
    Absent,
    Pending,
    Empty,
}

impl DigitStatus {
    /// Whether this status is the result of an evaluation
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }
}

/// Evaluate a guess against a target year
///
/// Works on arbitrary text so that callers holding unvalidated input cannot crash it:
/// if either side is not exactly 4 characters, all four cells come back `Absent`.
/// That fallback only guarantees not panicking; validate with [`Year::new`] first.
///
/// # Examples
/// ```
/// use chronos::core::{DigitStatus::*, evaluate};
///
/// assert_eq!(evaluate("1122", "1111"), [Correct, Correct, Absent, Absent]);
/// assert_eq!(evaluate("4321", "1234"), [Present, Present, Present, Present]);
/// assert_eq!(evaluate("12", "1234"), [Absent; 4]);
/// ```
#[must_use]
pub fn evaluate(guess: &str, target: &str) -> [DigitStatus; YEAR_LENGTH] {
    let guess: Vec<char> = guess.chars().collect();
    let target: Vec<char> = target.chars().collect();

    match (
        <[char; YEAR_LENGTH]>::try_from(guess),
        <[char; YEAR_LENGTH]>::try_from(target),
    ) {
        (Ok(guess), Ok(target)) => {
            let mut available: FxHashMap<char, u8> = FxHashMap::default();
            for &ch in &target {
                *available.entry(ch).or_insert(0) += 1;
            }
            score(&guess, &target, available)
        }
        _ => [DigitStatus::Absent; YEAR_LENGTH],
    }
}

/// Two-pass scoring shared by [`evaluate`] and [`Feedback::calculate`]
///
/// `available` holds the target's symbol counts and is consumed as matches are made.
fn score<T: Copy + Eq + Hash>(
    guess: &[T; YEAR_LENGTH],
    target: &[T; YEAR_LENGTH],
    mut available: FxHashMap<T, u8>,
) -> [DigitStatus; YEAR_LENGTH] {
    let mut result = [DigitStatus::Absent; YEAR_LENGTH];

    // First pass: exact positions, so a later exact match cannot lose its count
    for (i, (g, t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = DigitStatus::Correct;
            if let Some(count) = available.get_mut(g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: remaining positions, left to right
    for (i, g) in guess.iter().enumerate() {
        if result[i] == DigitStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(g)
            && *count > 0
        {
            result[i] = DigitStatus::Present;
            *count -= 1;
        }
    }

    result
}

/// Evaluated feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([DigitStatus; YEAR_LENGTH]);

impl Feedback {
    /// All digits correct
    pub const PERFECT: Self = Self([DigitStatus::Correct; YEAR_LENGTH]);

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use chronos::core::{Feedback, Year};
    ///
    /// let guess = Year::new("1989").unwrap();
    /// let target = Year::new("1969").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟥🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Year, target: &Year) -> Self {
        Self(score(guess.digits(), target.digits(), target.digit_counts()))
    }

    /// Per-digit statuses, left to right
    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[DigitStatus; YEAR_LENGTH] {
        &self.0
    }

    /// Check if every digit is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the cells with the given status
    #[must_use]
    pub fn count(&self, status: DigitStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert feedback to an emoji string such as "🟩🟨🟥🟥"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|&s| status_emoji(s)).collect()
    }
}

impl From<[DigitStatus; YEAR_LENGTH]> for Feedback {
    fn from(statuses: [DigitStatus; YEAR_LENGTH]) -> Self {
        Self(statuses)
    }
}

/// Emoji for a single cell
#[must_use]
pub const fn status_emoji(status: DigitStatus) -> char {
    match status {
        DigitStatus::Correct => '🟩',
        DigitStatus::Present => '🟨',
        DigitStatus::Absent => '🟥',
        DigitStatus::Pending => '⬛',
        DigitStatus::Empty => '⬜',
    }
}
