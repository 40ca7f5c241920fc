//! Feature implementations for habits.
//!
//! - Statistics: streaks, completion rates, visualizations

pub mod stats;
