//! Puzzle selection: random with exclusion, or by date

use crate::catalog::Catalog;
use crate::core::Puzzle;
use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Pick a puzzle uniformly at random, avoiding `exclude`
///
/// With fewer than two puzzles the exclusion is dropped, so the only puzzle may repeat.
/// Catalogs are never empty and ids are unique, so the pool always has a puzzle.
pub fn pick_puzzle<'a, R: Rng>(
    catalog: &'a Catalog,
    exclude: Option<&str>,
    rng: &mut R,
) -> &'a Puzzle {
    let puzzles = catalog.puzzles();

    let pool: Vec<&Puzzle> = match exclude {
        Some(id) if puzzles.len() >= 2 => puzzles.iter().filter(|p| p.id != id).collect(),
        _ => puzzles.iter().collect(),
    };

    pool[rng.random_range(0..pool.len())]
}

/// Index of the puzzle of the day
///
/// The seed is the date written as `YYYYMMDD`; `None` for an empty catalog.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use chronos::game::daily_index;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// assert_eq!(daily_index(date, 7), Some(20_240_315 % 7));
/// assert_eq!(daily_index(date, 0), None);
/// ```
#[must_use]
pub fn daily_index(date: NaiveDate, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let seed = i64::from(date.year()) * 10_000
        + i64::from(date.month()) * 100
        + i64::from(date.day());
    let count = i64::try_from(count).ok()?;
    usize::try_from(seed.rem_euclid(count)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Year;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rustc_hash::FxHashSet;

    fn catalog(ids: &[&str]) -> Catalog {
        let puzzles = ids
            .iter()
            .map(|id| {
                Puzzle::new(
                    *id,
                    Year::new("1500").unwrap(),
                    ["a", "b", "c", "d"].map(String::from),
                )
            })
            .collect();
        Catalog::new(puzzles).unwrap()
    }

    #[test]
    fn excluded_puzzle_never_picked() {
        let catalog = catalog(&["1", "2", "3"]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            assert_ne!(pick_puzzle(&catalog, Some("2"), &mut rng).id, "2");
        }
    }

    #[test]
    fn two_puzzles_alternate() {
        let catalog = catalog(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut current = pick_puzzle(&catalog, None, &mut rng).id.clone();
        for _ in 0..20 {
            let next = pick_puzzle(&catalog, Some(&current), &mut rng).id.clone();
            assert_ne!(next, current);
            current = next;
        }
    }

    #[test]
    fn every_other_puzzle_reachable() {
        let catalog = catalog(&["1", "2", "3", "4"]);
        let mut rng = StdRng::seed_from_u64(7);

        let seen: FxHashSet<String> = (0..400)
            .map(|_| pick_puzzle(&catalog, Some("1"), &mut rng).id.clone())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn single_puzzle_catalog_repeats() {
        let catalog = catalog(&["only"]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(pick_puzzle(&catalog, Some("only"), &mut rng).id, "only");
    }

    #[test]
    fn unknown_exclusion_ignored() {
        let catalog = catalog(&["1", "2"]);
        let mut rng = StdRng::seed_from_u64(3);
        let picked = pick_puzzle(&catalog, Some("zzz"), &mut rng);
        assert!(picked.id == "1" || picked.id == "2");
    }

    #[test]
    fn daily_index_uses_calendar_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(daily_index(date, 7), Some(20_250_102 % 7));
        assert_eq!(daily_index(date, 1), Some(0));

        let next = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        assert_eq!(daily_index(next, 7), Some((20_250_102 + 1) % 7));
    }

    #[test]
    fn daily_index_in_range() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for day in start.iter_days().take(366) {
            let index = daily_index(day, 5).unwrap();
            assert!(index < 5);
        }
        assert_eq!(daily_index(start, 0), None);
    }
}
