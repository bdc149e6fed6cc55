//! Game session: the single active round and everything it needs
//!
//! A session is created once with [`Session::load_or_create`], mutated through its
//! methods, and saves itself after every change. There is nothing to tear down.

use super::round::{GuessError, Outcome, Round};
use super::selection::{daily_index, pick_puzzle};
use super::snapshot::Snapshot;
use crate::catalog::Catalog;
use crate::core::YEAR_LENGTH;
use crate::storage::Store;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Store key of the save slot
pub const SNAPSHOT_KEY: &str = "history-guesser-v1";

pub struct Session<S: Store> {
    catalog: Catalog,
    store: S,
    round: Round,
    buffer: String,
    rng: StdRng,
}

impl<S: Store> Session<S> {
    /// Resume the saved round, or start a new one
    ///
    /// A missing, corrupt or stale save is logged and replaced by a fresh round.
    pub fn load_or_create(catalog: Catalog, store: S) -> Self {
        Self::load_or_create_with_rng(catalog, store, StdRng::from_rng(&mut rand::rng()))
    }

    /// Same as [`Session::load_or_create`] with a caller-provided RNG
    pub fn load_or_create_with_rng(catalog: Catalog, store: S, mut rng: StdRng) -> Self {
        let restored = store
            .get(SNAPSHOT_KEY)
            .and_then(|raw| match Snapshot::from_json(&raw).and_then(|s| s.restore(&catalog)) {
                Ok(round) => Some(round),
                Err(error) => {
                    tracing::warn!(%error, "discarding saved round");
                    None
                }
            });

        match restored {
            Some(round) => {
                tracing::debug!(
                    puzzle = %round.puzzle().id,
                    guesses = round.guesses().len(),
                    outcome = ?round.outcome(),
                    "resumed saved round"
                );
                Self {
                    catalog,
                    store,
                    round,
                    buffer: String::new(),
                    rng,
                }
            }
            None => {
                let round = Round::new(pick_puzzle(&catalog, None, &mut rng).clone());
                let mut session = Self {
                    catalog,
                    store,
                    round,
                    buffer: String::new(),
                    rng,
                };
                session.persist();
                session
            }
        }
    }

    #[must_use]
    pub const fn round(&self) -> &Round {
        &self.round
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Digits typed but not yet submitted
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Start a new round on a random puzzle other than the current one
    pub fn start_round(&mut self) -> &Round {
        let current = self.round.puzzle().id.clone();
        let puzzle = pick_puzzle(&self.catalog, Some(&current), &mut self.rng).clone();
        self.replace_round(Round::new(puzzle))
    }

    /// Start a new round on the puzzle of the day
    pub fn start_daily(&mut self, date: NaiveDate) -> &Round {
        let puzzle = daily_index(date, self.catalog.len())
            .and_then(|index| self.catalog.get(index))
            .unwrap_or_else(|| pick_puzzle(&self.catalog, None, &mut self.rng))
            .clone();
        self.replace_round(Round::new(puzzle))
    }

    fn replace_round(&mut self, round: Round) -> &Round {
        tracing::debug!(puzzle = %round.puzzle().id, "new round");
        self.round = round;
        self.buffer.clear();
        self.persist();
        &self.round
    }

    /// Submit a guess and save the round
    ///
    /// # Errors
    /// Returns `GuessError` if the round is over or the guess is not 4 digits; nothing
    /// is changed or saved in that case.
    pub fn submit_guess(&mut self, candidate: &str) -> Result<Outcome, GuessError> {
        let outcome = self.round.submit(candidate)?;
        self.persist();
        Ok(outcome)
    }

    /// Append a digit to the input buffer
    ///
    /// Returns `false` if the character is not a digit, the buffer is full, or the
    /// round is over.
    pub fn push_digit(&mut self, digit: char) -> bool {
        if self.round.is_over() || !digit.is_ascii_digit() || self.buffer.len() >= YEAR_LENGTH {
            return false;
        }
        self.buffer.push(digit);
        true
    }

    /// Remove the last typed digit
    pub fn pop_digit(&mut self) -> Option<char> {
        if self.round.is_over() {
            return None;
        }
        self.buffer.pop()
    }

    /// Submit the input buffer as a guess
    ///
    /// The buffer is cleared only when the guess is accepted.
    ///
    /// # Errors
    /// Same as [`Session::submit_guess`].
    pub fn enter(&mut self) -> Result<Outcome, GuessError> {
        let candidate = self.buffer.clone();
        let outcome = self.submit_guess(&candidate)?;
        self.buffer.clear();
        Ok(outcome)
    }

    fn persist(&mut self) {
        let json = match Snapshot::of(&self.round).to_json() {
            Ok(json) => json,
            Err(error) => {
                tracing::error!(%error, "could not encode round");
                return;
            }
        };

        if let Err(error) = self.store.set(SNAPSHOT_KEY, &json) {
            tracing::error!(%error, "could not save round; continuing without saving");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Puzzle, Year, YearError};
    use crate::storage::{MemoryStore, StorageError};

    fn catalog() -> Catalog {
        let hints = || ["a", "b", "c", "d"].map(String::from);
        Catalog::new(vec![
            Puzzle::new("1", Year::new("1789").unwrap(), hints()),
            Puzzle::new("2", Year::new("1969").unwrap(), hints()),
            Puzzle::new("3", Year::new("1492").unwrap(), hints()),
        ])
        .unwrap()
    }

    fn session(store: MemoryStore) -> Session<MemoryStore> {
        Session::load_or_create_with_rng(catalog(), store, StdRng::seed_from_u64(11))
    }

    fn saved(store: &MemoryStore) -> Snapshot {
        Snapshot::from_json(&store.get(SNAPSHOT_KEY).unwrap()).unwrap()
    }

    // Not the year of any puzzle in the test catalog
    const MISS: &str = "1000";

    #[test]
    fn first_launch_starts_and_saves_a_round() {
        let session = session(MemoryStore::new());

        assert_eq!(session.round().outcome(), Outcome::InProgress);
        assert!(session.round().guesses().is_empty());
        let snapshot = saved(session.store());
        assert_eq!(snapshot.puzzle_id, session.round().puzzle().id);
        assert!(snapshot.guesses.is_empty());
    }

    #[test]
    fn reload_after_guess_reproduces_round() {
        let mut first = session(MemoryStore::new());
        first.submit_guess("1111").unwrap();
        first.submit_guess(MISS).unwrap();

        let reloaded = session(first.store().clone());
        assert_eq!(reloaded.round(), first.round());
        assert_eq!(reloaded.round().guesses().len(), 2);
        assert_eq!(reloaded.round().outcome(), Outcome::InProgress);
    }

    #[test]
    fn reload_keeps_finished_round_finished() {
        let mut first = session(MemoryStore::new());
        first.submit_guess(MISS).unwrap();
        let target = first.round().puzzle().year.text().to_string();
        first.submit_guess(&target).unwrap();

        let reloaded = session(first.store().clone());
        assert_eq!(reloaded.round().outcome(), Outcome::Won);
        assert_eq!(reloaded.round().guesses(), first.round().guesses());
    }

    #[test]
    fn corrupt_save_starts_fresh_round() {
        let mut store = MemoryStore::new();
        store.set(SNAPSHOT_KEY, "{ definitely not json").unwrap();

        let session = session(store);
        assert!(session.round().guesses().is_empty());
        // The fresh round replaced the corrupt save
        assert_eq!(saved(session.store()).puzzle_id, session.round().puzzle().id);
    }

    #[test]
    fn save_for_unknown_puzzle_starts_fresh_round() {
        let mut store = MemoryStore::new();
        store
            .set(SNAPSHOT_KEY, r#"{"puzzleId":"404","guesses":["1000"],"outcome":"in_progress"}"#)
            .unwrap();

        let session = session(store);
        assert_ne!(session.round().puzzle().id, "404");
        assert!(session.round().guesses().is_empty());
    }

    #[test]
    fn save_contradicting_its_guesses_starts_fresh_round() {
        for raw in [
            r#"{"puzzleId":"1","guesses":["1000","1001","1002","1003"],"outcome":"in_progress"}"#,
            r#"{"puzzleId":"1","guesses":["1789"],"outcome":"in_progress"}"#,
        ] {
            let mut store = MemoryStore::new();
            store.set(SNAPSHOT_KEY, raw).unwrap();

            let mut session = session(store);
            assert!(session.round().guesses().is_empty());
            assert_eq!(session.round().outcome(), Outcome::InProgress);

            session.submit_guess(MISS).unwrap();
            assert_eq!(session.round().guesses().len(), 1);
        }
    }

    #[test]
    fn legacy_save_is_resumed() {
        let mut store = MemoryStore::new();
        store
            .set(SNAPSHOT_KEY, r#"{"puzzleId":"2","guesses":["1970","1960"],"status":"playing"}"#)
            .unwrap();

        let session = session(store);
        assert_eq!(session.round().puzzle().id, "2");
        assert_eq!(session.round().guesses().len(), 2);
    }

    #[test]
    fn new_round_never_repeats_current_puzzle() {
        let mut session = session(MemoryStore::new());
        for _ in 0..50 {
            let previous = session.round().puzzle().id.clone();
            let next = session.start_round().puzzle().id.clone();
            assert_ne!(previous, next);
            assert_eq!(saved(session.store()).puzzle_id, next);
        }
    }

    #[test]
    fn four_misses_lose_and_further_guesses_bounce() {
        let mut session = session(MemoryStore::new());
        let target = session.round().puzzle().year.text().to_string();
        let misses = ["0000", "0001", "0002", "0003"];
        assert!(!misses.contains(&target.as_str()));

        for guess in misses {
            session.submit_guess(guess).unwrap();
        }
        assert_eq!(session.round().outcome(), Outcome::Lost);
        assert_eq!(saved(session.store()).outcome, Outcome::Lost);

        assert_eq!(session.submit_guess(&target), Err(GuessError::RoundOver));
        assert_eq!(session.round().guesses().len(), 4);
        assert_eq!(saved(session.store()).guesses.len(), 4);
    }

    #[test]
    fn rejected_guess_is_not_saved() {
        let mut session = session(MemoryStore::new());
        assert_eq!(
            session.submit_guess("12"),
            Err(GuessError::Invalid(YearError::InvalidLength(2)))
        );
        assert!(saved(session.store()).guesses.is_empty());
    }

    #[test]
    fn buffer_editing() {
        let mut session = session(MemoryStore::new());

        assert!(!session.push_digit('x'));
        for digit in MISS.chars() {
            assert!(session.push_digit(digit));
        }
        assert!(!session.push_digit('9'), "buffer holds at most 4 digits");
        assert_eq!(session.buffer(), MISS);

        assert_eq!(session.pop_digit(), Some('0'));
        assert_eq!(session.buffer(), "100");

        // Short buffer is rejected and kept
        assert!(matches!(session.enter(), Err(GuessError::Invalid(_))));
        assert_eq!(session.buffer(), "100");

        assert!(session.push_digit('0'));
        assert_eq!(session.enter(), Ok(Outcome::InProgress));
        assert_eq!(session.buffer(), "");
        assert_eq!(session.round().guesses().len(), 1);
    }

    #[test]
    fn buffer_frozen_after_round_ends() {
        let mut session = session(MemoryStore::new());
        let target = session.round().puzzle().year.text().to_string();
        for digit in target.chars() {
            session.push_digit(digit);
        }
        assert_eq!(session.enter(), Ok(Outcome::Won));

        assert!(!session.push_digit('1'));
        assert_eq!(session.pop_digit(), None);
        assert!(matches!(session.enter(), Err(GuessError::RoundOver)));
    }

    #[test]
    fn new_round_clears_buffer() {
        let mut session = session(MemoryStore::new());
        session.push_digit('1');
        session.start_round();
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn daily_round_uses_date_index() {
        let mut session = session(MemoryStore::new());
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let expected = catalog().get(20_240_315 % 3).unwrap().id.clone();

        assert_eq!(session.start_daily(date).puzzle().id, expected);
        assert_eq!(saved(session.store()).puzzle_id, expected);
    }

    struct FailingStore;

    impl Store for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::InvalidKey(key.to_string()))
        }
    }

    #[test]
    fn failed_saves_do_not_stop_play() {
        let mut session =
            Session::load_or_create_with_rng(catalog(), FailingStore, StdRng::seed_from_u64(5));
        assert_eq!(session.submit_guess("0000"), Ok(Outcome::InProgress));
        assert_eq!(session.round().guesses().len(), 1);
    }
}
