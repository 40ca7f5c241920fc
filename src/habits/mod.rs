//! Habit domain types and the log index.
//!
//! This module contains:
//! - `types`: habits, completion logs and snapshots
//! - `index`: per-habit log lookup

mod index;
mod types;

pub use index::LogIndex;
pub use types::{CompletionLog, Frequency, Habit, NewHabit, Snapshot};
