//! Statistics command implementation.

use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::error::HabitsError;
use crate::features::stats::HabitStatistics;
use crate::output::format_statistics;
use crate::storage::HabitStore;

/// Execute stats command.
///
/// # Errors
///
/// Returns an error if the store read or output formatting fails.
pub fn stats(
    store: &dyn HabitStore,
    bar_width: usize,
    format: OutputFormat,
) -> Result<String, HabitsError> {
    let snapshot = store.snapshot()?;
    let stats = HabitStatistics::calculate_now(&snapshot);
    debug!(
        habits = stats.total_habits,
        completions = stats.total_completions,
        "calculated statistics"
    );

    format_statistics(&stats, bar_width, format)
}
