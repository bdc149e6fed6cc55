//! Puzzle record: a target year with four ordered hints

use super::year::Year;
use serde::{Deserialize, Serialize};

/// Number of hints per puzzle, one per attempt
pub const HINT_COUNT: usize = 4;

/// A historical event to be dated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub id: String,
    pub year: Year,
    pub hints: [String; HINT_COUNT],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Puzzle {
    #[must_use]
    pub fn new(id: impl Into<String>, year: Year, hints: [String; HINT_COUNT]) -> Self {
        Self {
            id: id.into(),
            year,
            hints,
            title: None,
            explanation: None,
            source: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    /// Hints visible after `guesses` submitted guesses
    ///
    /// The first hint is shown before any guess and each guess uncovers the next one.
    /// A finished round shows everything.
    #[must_use]
    pub fn visible_hints(&self, guesses: usize, finished: bool) -> &[String] {
        if finished {
            &self.hints
        } else {
            &self.hints[..(guesses + 1).min(HINT_COUNT)]
        }
    }
}
