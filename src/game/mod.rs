//! Round state machine, persistence and the session that ties them together

mod board;
mod round;
mod selection;
mod session;
mod snapshot;

pub use board::{Cell, Row};
pub use round::{GuessError, MAX_ATTEMPTS, Outcome, Round};
pub use selection::{daily_index, pick_puzzle};
pub use session::{SNAPSHOT_KEY, Session};
pub use snapshot::{Snapshot, SnapshotError};
