//! Streak and statistics engine.
//!
//! Pure computations over a [`Snapshot`](crate::habits::Snapshot):
//! - Consecutive-day streaks per habit
//! - Completion rates and today's progress
//! - Per-habit list and detail views
//! - Terminal visualizations

pub mod metrics;
pub mod streak;
pub mod visualization;

pub use metrics::{percent, HabitDetail, HabitStatistics, HabitSummary};
pub use streak::{streak_from_logs, streak_of};
pub use visualization::{
    render_history, render_progress_bar, render_summary_box, MAX_HISTORY_DAYS,
};
