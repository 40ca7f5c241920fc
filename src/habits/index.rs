//! Per-habit lookup over a snapshot of completion logs.

use chrono::NaiveDate;

use super::types::CompletionLog;
use crate::core::local_day;

/// Read-only view answering "which logs belong to habit X" and
/// "was habit X completed on day D".
///
/// Lookups scan the whole slice; personal habit lists are small enough that
/// no secondary structure is kept.
#[derive(Debug, Clone, Copy)]
pub struct LogIndex<'a> {
    logs: &'a [CompletionLog],
}

impl<'a> LogIndex<'a> {
    #[must_use]
    pub const fn new(logs: &'a [CompletionLog]) -> Self {
        Self { logs }
    }

    /// All logs for `habit_id`, in the order they were received.
    #[must_use]
    pub fn logs_for(&self, habit_id: &str) -> Vec<&'a CompletionLog> {
        self.logs.iter().filter(|log| log.habit_id == habit_id).collect()
    }

    /// Completed logs for `habit_id`, in the order they were received.
    #[must_use]
    pub fn completed_for(&self, habit_id: &str) -> Vec<&'a CompletionLog> {
        self.logs
            .iter()
            .filter(|log| log.habit_id == habit_id && log.completed)
            .collect()
    }

    /// Whether `habit_id` has a completed log on the local day `day`.
    #[must_use]
    pub fn is_completed_on(&self, habit_id: &str, day: NaiveDate) -> bool {
        self.logs
            .iter()
            .any(|log| log.habit_id == habit_id && log.completed && local_day(&log.date) == day)
    }

    /// The log for `habit_id` on `day`, completed or not.
    ///
    /// If the store ever holds several entries for the same day the first one
    /// received wins.
    #[must_use]
    pub fn log_on(&self, habit_id: &str, day: NaiveDate) -> Option<&'a CompletionLog> {
        self.logs
            .iter()
            .find(|log| log.habit_id == habit_id && local_day(&log.date) == day)
    }

    /// All logs, completed or not.
    #[must_use]
    pub const fn all(&self) -> &'a [CompletionLog] {
        self.logs
    }
}
