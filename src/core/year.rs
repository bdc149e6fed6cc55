//! Year representation
//!
//! A Year stores a 4-digit year as text and as digit bytes for feedback calculation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of digits in every guess and target
pub const YEAR_LENGTH: usize = 4;

/// A validated 4-digit year such as `1789`
///
/// Leading zeros are kept, so `0476` is a valid year distinct from `476`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Year {
    text: String,
    digits: [u8; YEAR_LENGTH],
}

/// Error type for text that is not a 4-digit year
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearError {
    #[error("A year needs exactly {YEAR_LENGTH} digits, got {0}")]
    InvalidLength(usize),
    #[error("A year may only contain the digits 0-9")]
    NonDigit,
}

impl Year {
    /// Create a new Year from a string
    ///
    /// # Errors
    /// Returns `YearError` if:
    /// - Length is not exactly 4 characters
    /// - Any character is not an ASCII digit
    ///
    /// # Examples
    /// ```
    /// use chronos::core::Year;
    ///
    /// let year = Year::new("1789").unwrap();
    /// assert_eq!(year.text(), "1789");
    /// assert_eq!(year.value(), 1789);
    ///
    /// assert!(Year::new("178").is_err());
    /// assert!(Year::new("17a9").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, YearError> {
        let text: String = text.into();

        let length = text.chars().count();
        if length != YEAR_LENGTH {
            return Err(YearError::InvalidLength(length));
        }

        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(YearError::NonDigit);
        }

        let digits: [u8; YEAR_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| YearError::InvalidLength(text.len()))?;

        Ok(Self { text, digits })
    }

    /// Get the year as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the year as ASCII digit bytes
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; YEAR_LENGTH] {
        &self.digits
    }

    /// Numeric value of the year
    #[must_use]
    pub fn value(&self) -> u16 {
        self.digits
            .iter()
            .fold(0, |acc, &d| acc * 10 + u16::from(d - b'0'))
    }

    /// Count of each digit in the year
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &d in &self.digits {
            *counts.entry(d).or_insert(0) += 1;
        }
        counts
    }
}

impl TryFrom<String> for Year {
    type Error = YearError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for String {
    fn from(year: Year) -> Self {
        year.text
    }
}

impl std::str::FromStr for Year {
    type Err = YearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
