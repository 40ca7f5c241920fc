//! Storage layer for habits.
//!
//! SQLite-backed persistence for habits and completion logs, exposed to the
//! rest of the crate through the [`HabitStore`] trait.

mod database;
mod migrations;
mod store;

pub use database::Database;
#[cfg(test)]
pub use store::MockHabitStore;
pub use store::{HabitStore, SqliteStore};
