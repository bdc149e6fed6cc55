//! Embedded puzzle catalog
//!
//! Puzzles compiled into the binary at build time.

/// A puzzle as written in `data/puzzles.tsv`, before validation
#[derive(Debug, Clone, Copy)]
pub struct PuzzleRecord {
    pub id: &'static str,
    pub year: &'static str,
    pub title: &'static str,
    pub hints: [&'static str; 4],
    pub explanation: &'static str,
}

// Include generated catalog from build script
include!(concat!(env!("OUT_DIR"), "/puzzles.rs"));
