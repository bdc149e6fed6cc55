//! Core domain types for the year puzzle
//!
//! This module contains the validated year type, puzzle records and the pure
//! feedback functions. Nothing here performs I/O.

mod direction;
mod feedback;
mod puzzle;
mod year;

pub use direction::Direction;
pub use feedback::{DigitStatus, Feedback, evaluate, status_emoji};
pub use puzzle::{HINT_COUNT, Puzzle};
pub use year::{YEAR_LENGTH, Year, YearError};
