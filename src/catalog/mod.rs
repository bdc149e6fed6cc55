//! Puzzle catalogs
//!
//! A catalog is the ordered, read-only set of puzzles a session draws from. The
//! built-in one is compiled into the binary; custom ones are loaded from JSON.

mod embedded;
pub mod loader;

pub use embedded::{PUZZLES, PUZZLES_COUNT, PuzzleRecord};

use crate::core::Puzzle;
use rustc_hash::FxHashSet;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for catalogs that cannot be used
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("catalog is not a valid puzzle list: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no puzzles")]
    Empty,
    #[error("puzzle id '{0}' appears more than once")]
    DuplicateId(String),
}

/// Validated, non-empty list of puzzles with unique ids
#[derive(Debug, Clone)]
pub struct Catalog {
    puzzles: Vec<Puzzle>,
}

impl Catalog {
    /// Build a catalog from puzzles
    ///
    /// # Errors
    /// Returns `CatalogError::Empty` for no puzzles and `CatalogError::DuplicateId`
    /// if two puzzles share an id.
    pub fn new(puzzles: Vec<Puzzle>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = FxHashSet::default();
        for puzzle in &puzzles {
            if !seen.insert(puzzle.id.as_str()) {
                return Err(CatalogError::DuplicateId(puzzle.id.clone()));
            }
        }

        if puzzles.len() < 2 {
            tracing::warn!(
                count = puzzles.len(),
                "catalog has fewer than 2 puzzles; new rounds may repeat the same puzzle"
            );
        }

        Ok(Self { puzzles })
    }

    /// The catalog compiled into the binary
    ///
    /// # Errors
    /// Fails only if every embedded record is invalid.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::new(loader::puzzles_from_records(PUZZLES))
    }

    /// Find a puzzle by id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.iter().find(|p| p.id == id)
    }

    /// Get the puzzle at a position
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Puzzle> {
        self.puzzles.get(index)
    }

    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}
