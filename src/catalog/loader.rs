//! Catalog loading utilities
//!
//! Provides functions to load puzzles from JSON files or convert the embedded records.

use super::CatalogError;
use super::embedded::PuzzleRecord;
use crate::core::{Puzzle, Year};
use std::fs;
use std::path::Path;

/// Load puzzles from a JSON file
///
/// The file holds an array of puzzle objects:
/// `[{"id": "1", "year": "1789", "hints": ["..", "..", "..", ".."], "title": ".."}]`
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if it is not a JSON array of
/// valid puzzles (4-digit year, exactly 4 hints).
///
/// # Examples
/// ```no_run
/// use chronos::catalog::loader::load_from_file;
///
/// let puzzles = load_from_file("my_puzzles.json").unwrap();
/// println!("Loaded {} puzzles", puzzles.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Puzzle>, CatalogError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let puzzles: Vec<Puzzle> = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), count = puzzles.len(), "loaded puzzle catalog");
    Ok(puzzles)
}

/// Convert embedded records to puzzles
///
/// Records with an invalid year are skipped. Empty titles and explanations become `None`.
///
/// # Examples
/// ```
/// use chronos::catalog::loader::puzzles_from_records;
/// use chronos::catalog::PUZZLES;
///
/// let puzzles = puzzles_from_records(PUZZLES);
/// assert_eq!(puzzles.len(), PUZZLES.len());
/// ```
#[must_use]
pub fn puzzles_from_records(records: &[PuzzleRecord]) -> Vec<Puzzle> {
    records
        .iter()
        .filter_map(|record| match Year::new(record.year) {
            Ok(year) => Some(puzzle_from_record(record, year)),
            Err(error) => {
                tracing::warn!(id = record.id, %error, "skipping embedded puzzle");
                None
            }
        })
        .collect()
}

fn puzzle_from_record(record: &PuzzleRecord, year: Year) -> Puzzle {
    let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_string());

    Puzzle {
        id: record.id.to_string(),
        year,
        hints: record.hints.map(str::to_string),
        title: non_empty(record.title),
        explanation: non_empty(record.explanation),
        source: None,
    }
}
