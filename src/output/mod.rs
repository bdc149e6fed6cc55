//! Terminal output formatting
//!
//! Display utilities for the line-based mode and one-shot commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_evaluation, print_round_end};
