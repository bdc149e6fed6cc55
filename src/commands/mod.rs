//! Command implementations

pub mod evaluate;
pub mod simple;

pub use evaluate::{EvaluationResult, evaluate_pair};
pub use simple::{run_simple, run_simple_with};
