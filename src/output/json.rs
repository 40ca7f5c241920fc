//! JSON output formatting for habits.

use serde::Serialize;
use serde_json::json;

use crate::error::HabitsError;
use crate::features::stats::{HabitDetail, HabitStatistics, HabitSummary};
use crate::habits::{CompletionLog, Habit};

/// Format the habit list as JSON
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_habits_json(habits: &[HabitSummary]) -> Result<String, HabitsError> {
    let output = json!({
        "count": habits.len(),
        "items": habits
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a habit detail view as JSON
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_habit_detail_json(detail: &HabitDetail) -> Result<String, HabitsError> {
    Ok(serde_json::to_string_pretty(detail)?)
}

/// Format aggregate statistics as JSON
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_statistics_json(stats: &HabitStatistics) -> Result<String, HabitsError> {
    Ok(serde_json::to_string_pretty(stats)?)
}

/// Format a freshly written log with the habit's resulting streak
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn format_log_json(
    habit: &Habit,
    log: &CompletionLog,
    streak: usize,
) -> Result<String, HabitsError> {
    let output = json!({
        "habit": habit,
        "log": log,
        "streak": streak
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `HabitsError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, HabitsError> {
    Ok(serde_json::to_string_pretty(value)?)
}
