//! Output formatting for habits.
//!
//! This module provides formatters for displaying habits and statistics in
//! various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::HabitsError;
use crate::features::stats::{HabitDetail, HabitStatistics, HabitSummary};
use crate::habits::{CompletionLog, Habit};

pub use json::*;
pub use pretty::*;

/// Format the habit list based on output format
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_habits(habits: &[HabitSummary], format: OutputFormat) -> Result<String, HabitsError> {
    match format {
        OutputFormat::Pretty => Ok(format_habits_pretty(habits)),
        OutputFormat::Json => format_habits_json(habits),
    }
}

/// Format a habit detail view based on output format
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_habit_detail(
    detail: &HabitDetail,
    history: &str,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    match format {
        OutputFormat::Pretty => Ok(format_habit_detail_pretty(detail, history)),
        OutputFormat::Json => format_habit_detail_json(detail),
    }
}

/// Format aggregate statistics based on output format
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_statistics(
    stats: &HabitStatistics,
    bar_width: usize,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    match format {
        OutputFormat::Pretty => Ok(format_statistics_pretty(stats, bar_width)),
        OutputFormat::Json => format_statistics_json(stats),
    }
}

/// Format a written log entry based on output format
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_log(
    habit: &Habit,
    log: &CompletionLog,
    streak: usize,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    match format {
        OutputFormat::Pretty => Ok(format_log_pretty(habit, log, streak)),
        OutputFormat::Json => format_log_json(habit, log, streak),
    }
}
