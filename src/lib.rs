//! habits - A habit tracker for the terminal
//!
//! This crate stores habits and their daily completion logs in `SQLite` and
//! derives streaks and completion statistics from snapshots of that state.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod habits;
pub mod logging;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::HabitsError;
pub use features::stats::{streak_of, HabitStatistics};
pub use habits::{CompletionLog, Habit, Snapshot};
pub use storage::{HabitStore, SqliteStore};
