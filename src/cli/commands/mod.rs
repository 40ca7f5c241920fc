//! Command implementations for habits.
//!
//! Every command takes the store by trait object and returns the text to
//! print, so they run the same against `SQLite` and a mock.

mod config;
mod stats;

pub use config::config;
pub use stats::stats;

use clap::CommandFactory;
use clap_complete::Shell;
use tracing::debug;

use crate::cli::args::{Cli, OutputFormat};
use crate::core::local_today;
use crate::error::HabitsError;
use crate::features::stats::{render_history, streak_of, HabitDetail, HabitSummary};
use crate::habits::{Frequency, Habit, LogIndex, NewHabit, Snapshot};
use crate::output::{format_habit_detail, format_habits, format_log, to_json};
use crate::storage::HabitStore;

/// Find a habit by id, falling back to a case-insensitive name match.
///
/// # Errors
///
/// Returns `HabitsError::NotFound` if nothing matches and
/// `HabitsError::InvalidInput` if the name matches more than one habit.
pub fn resolve_habit<'a>(snapshot: &'a Snapshot, key: &str) -> Result<&'a Habit, HabitsError> {
    if let Some(habit) = snapshot.habit(key) {
        return Ok(habit);
    }

    let key = key.trim();
    let mut matches = snapshot
        .habits
        .iter()
        .filter(|h| h.name.eq_ignore_ascii_case(key));

    match (matches.next(), matches.next()) {
        (Some(habit), None) => Ok(habit),
        (Some(_), Some(_)) => Err(HabitsError::InvalidInput(format!(
            "more than one habit is named '{key}', use its id"
        ))),
        (None, _) => Err(HabitsError::NotFound(format!("habit '{key}'"))),
    }
}

/// Execute add command
///
/// # Errors
///
/// Returns an error if the name is blank or the store write fails.
pub fn add(
    store: &dyn HabitStore,
    name: &str,
    description: Option<&str>,
    frequency: Frequency,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let habit = store.add_habit(NewHabit::new(name, description, frequency)?)?;

    match format {
        OutputFormat::Json => to_json(&habit),
        OutputFormat::Pretty => Ok(format!("Added habit: {} (ID: {})", habit.name, habit.id)),
    }
}

/// Execute list command
///
/// # Errors
///
/// Returns an error if the store read or output formatting fails.
pub fn list(store: &dyn HabitStore, format: OutputFormat) -> Result<String, HabitsError> {
    let snapshot = store.snapshot()?;
    let summaries = HabitSummary::calculate_all(&snapshot, local_today());
    format_habits(&summaries, format)
}

/// Execute show command
///
/// # Errors
///
/// Returns an error if the habit cannot be found or the store read fails.
pub fn show(
    store: &dyn HabitStore,
    key: &str,
    history_days: usize,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let snapshot = store.snapshot()?;
    let habit = resolve_habit(&snapshot, key)?;
    let today = local_today();

    let detail = HabitDetail::calculate(&snapshot, &habit.id, today)
        .ok_or_else(|| HabitsError::NotFound(format!("habit '{key}'")))?;
    let history = render_history(&LogIndex::new(&snapshot.logs), &habit.id, today, history_days);

    format_habit_detail(&detail, &history, format)
}

/// Execute done and undo commands
///
/// # Errors
///
/// Returns an error if the habit cannot be found or the store write fails.
pub fn mark(
    store: &dyn HabitStore,
    key: &str,
    completed: bool,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let habit = resolve_habit(&store.snapshot()?, key)?.clone();
    let log = store.log_today(&habit.id, completed)?;

    let streak = streak_of(&store.snapshot()?, &habit.id);
    debug!(habit = %habit.id, completed, streak, "logged today");

    format_log(&habit, &log, streak, format)
}

/// Execute delete command
///
/// # Errors
///
/// Returns an error if the habit cannot be found or the store write fails.
pub fn delete(store: &dyn HabitStore, key: &str, format: OutputFormat) -> Result<String, HabitsError> {
    let habit = resolve_habit(&store.snapshot()?, key)?.clone();

    if !store.delete_habit(&habit.id)? {
        return Err(HabitsError::NotFound(format!("habit '{key}'")));
    }

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "deleted": habit.id,
            "name": habit.name
        })),
        OutputFormat::Pretty => Ok(format!("Deleted habit: {}", habit.name)),
    }
}

/// Generate shell completions for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, HabitsError> {
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut Cli::command(), "habits", &mut buf);
    String::from_utf8(buf)
        .map_err(|e| HabitsError::InvalidInput(format!("invalid completion script: {e}")))
}
