//! Core abstractions for habits.
//!
//! Day normalization shared by the log index, the engine and the store.

mod datetime;

pub use datetime::{format_day, local_day, local_today, noon_of, start_of_day};
