//! Chronos
//!
//! A history year guessing game: four hints, four attempts, one year. Each guess is
//! scored digit by digit and tells you whether the event happened earlier or later.
//!
//! # Quick Start
//!
//! ```rust
//! use chronos::core::{DigitStatus, Direction, Feedback, Year};
//!
//! let guess = Year::new("1492").unwrap();
//! let target = Year::new("1789").unwrap();
//!
//! let feedback = Feedback::calculate(&guess, &target);
//! assert_eq!(feedback.statuses()[0], DigitStatus::Correct);
//! assert_eq!(Direction::between(&guess, &target), Direction::Later);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Puzzle catalog
pub mod catalog;

// Save-slot persistence
pub mod storage;

// Round rules and session state
pub mod game;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
