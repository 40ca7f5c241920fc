//! Metric calculations for statistics.
//!
//! Whole-snapshot aggregates plus the per-habit views used by the list and
//! detail screens. Everything here is a pure function of a snapshot and the
//! current day.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::streak::{streak_from_logs, streak_of};
use crate::core::{local_day, local_today};
use crate::habits::{CompletionLog, Habit, LogIndex, Snapshot};

/// Aggregate statistics over all habits and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStatistics {
    /// Number of habits
    pub total_habits: usize,
    /// Completed log entries across all habits, not deduplicated by day
    pub total_completions: usize,
    /// Completed logs as a percentage of all logs (0-100)
    pub completion_rate: u32,
    /// Highest current streak of any habit
    pub longest_streak: usize,
    /// Name of the habit holding the longest streak
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longest_streak_habit: Option<String>,
    /// Completed logs dated today
    pub completions_today: usize,
    /// Today's completions as a percentage of habits (0-100)
    pub today_completion_rate: u32,
}

impl HabitStatistics {
    /// Calculate statistics as of the local day `today`.
    #[must_use]
    pub fn calculate(snapshot: &Snapshot, today: NaiveDate) -> Self {
        let total_habits = snapshot.habits.len();
        let total_logs = snapshot.logs.len();
        let total_completions = snapshot.logs.iter().filter(|l| l.completed).count();

        // Strict `>` keeps the first habit on ties.
        let (longest_streak, longest_streak_habit) =
            snapshot
                .habits
                .iter()
                .fold((0, None), |(best, holder), habit| {
                    let streak = streak_of(snapshot, &habit.id);
                    if streak > best {
                        (streak, Some(habit.name.clone()))
                    } else {
                        (best, holder)
                    }
                });

        let completions_today = snapshot
            .logs
            .iter()
            .filter(|l| l.completed && local_day(&l.date) == today)
            .count();

        Self {
            total_habits,
            total_completions,
            completion_rate: percent(total_completions, total_logs),
            longest_streak,
            longest_streak_habit,
            completions_today,
            today_completion_rate: percent(completions_today, total_habits),
        }
    }

    /// Calculate statistics as of the local clock.
    #[must_use]
    pub fn calculate_now(snapshot: &Snapshot) -> Self {
        Self::calculate(snapshot, local_today())
    }
}

/// `part / whole` as a whole percentage, rounded half away from zero.
///
/// Returns 0 when `whole` is 0.
#[must_use]
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rounded = (part as f64 * 100.0 / whole as f64).round() as u32;
    rounded
}

/// One row of the habit list: the habit with its streak and today's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitSummary {
    #[serde(flatten)]
    pub habit: Habit,
    pub streak: usize,
    pub completed_today: bool,
}

impl HabitSummary {
    /// Summaries for every habit, in snapshot order.
    #[must_use]
    pub fn calculate_all(snapshot: &Snapshot, today: NaiveDate) -> Vec<Self> {
        let index = LogIndex::new(&snapshot.logs);
        snapshot
            .habits
            .iter()
            .map(|habit| Self {
                habit: habit.clone(),
                streak: streak_from_logs(index.completed_for(&habit.id)),
                completed_today: index.is_completed_on(&habit.id, today),
            })
            .collect()
    }
}

/// A habit with its full log history, most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDetail {
    pub habit: Habit,
    pub streak: usize,
    pub completed_today: bool,
    pub logs: Vec<CompletionLog>,
}

impl HabitDetail {
    /// Detail view for `habit_id`, or `None` if the snapshot has no such habit.
    #[must_use]
    pub fn calculate(snapshot: &Snapshot, habit_id: &str, today: NaiveDate) -> Option<Self> {
        let habit = snapshot.habit(habit_id)?;
        let index = LogIndex::new(&snapshot.logs);

        let mut logs: Vec<CompletionLog> = index.logs_for(habit_id).into_iter().cloned().collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date));

        Some(Self {
            habit: habit.clone(),
            streak: streak_of(snapshot, habit_id),
            completed_today: index.is_completed_on(habit_id, today),
            logs,
        })
    }
}
