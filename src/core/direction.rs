//! Earlier/later hint shown next to every submitted guess

use super::year::Year;
use std::cmp::Ordering;
use std::fmt;

/// Where the next guess has to move to reach the target year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The true year is later than the guess
    Later,
    /// The true year is earlier than the guess
    Earlier,
    /// The guess is the target
    Exact,
}

impl Direction {
    /// Compare a guess with the target year numerically
    ///
    /// # Examples
    /// ```
    /// use chronos::core::{Direction, Year};
    ///
    /// let target = Year::new("1789").unwrap();
    /// let guess = Year::new("1700").unwrap();
    /// assert_eq!(Direction::between(&guess, &target), Direction::Later);
    /// ```
    #[must_use]
    pub fn between(guess: &Year, target: &Year) -> Self {
        match guess.value().cmp(&target.value()) {
            Ordering::Less => Self::Later,
            Ordering::Greater => Self::Earlier,
            Ordering::Equal => Self::Exact,
        }
    }

    #[must_use]
    pub const fn arrow(self) -> char {
        match self {
            Self::Later => '↑',
            Self::Earlier => '↓',
            Self::Exact => '✓',
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Later => "LATER",
            Self::Earlier => "EARLIER",
            Self::Exact => "CORRECT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.arrow(), self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(text: &str) -> Year {
        Year::new(text).unwrap()
    }

    #[test]
    fn guess_too_early_points_later() {
        assert_eq!(Direction::between(&year("1492"), &year("1789")), Direction::Later);
    }

    #[test]
    fn guess_too_late_points_earlier() {
        assert_eq!(Direction::between(&year("1989"), &year("1914")), Direction::Earlier);
    }

    #[test]
    fn exact_guess() {
        assert_eq!(Direction::between(&year("1945"), &year("1945")), Direction::Exact);
    }

    #[test]
    fn comparison_is_numeric() {
        assert_eq!(Direction::between(&year("0999"), &year("1000")), Direction::Later);
        assert_eq!(Direction::between(&year("1000"), &year("0999")), Direction::Earlier);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Later.to_string(), "↑ LATER");
        assert_eq!(Direction::Earlier.to_string(), "↓ EARLIER");
        assert_eq!(Direction::Exact.to_string(), "✓ CORRECT");
    }
}
