use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::HabitsError;

/// A user-defined recurring task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub frequency: Frequency,
}

/// Target frequency of a habit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Frequency {
    type Err = HabitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(HabitsError::InvalidInput(format!("unknown frequency: {other}"))),
        }
    }
}

/// A per-day record of whether a habit was completed.
///
/// Only the local calendar day of `date` is meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionLog {
    pub id: String,
    pub habit_id: String,
    pub date: DateTime<Utc>,
    pub completed: bool,
}

/// Input for creating a habit. Id and creation time are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    pub frequency: Frequency,
}

impl NewHabit {
    /// Build a habit request from raw user input.
    ///
    /// The name is trimmed and must not be blank; a blank description is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns `HabitsError::InvalidInput` if the name is empty after trimming.
    pub fn new(
        name: &str,
        description: Option<&str>,
        frequency: Frequency,
    ) -> Result<Self, HabitsError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HabitsError::InvalidInput(
                "habit name must not be empty".to_string(),
            ));
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(ToString::to_string);

        Ok(Self {
            name: name.to_string(),
            description,
            frequency,
        })
    }
}

/// The full in-memory state of habits and logs at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub logs: Vec<CompletionLog>,
}

impl Snapshot {
    #[must_use]
    pub const fn new(habits: Vec<Habit>, logs: Vec<CompletionLog>) -> Self {
        Self { habits, logs }
    }

    /// Look up a habit by id.
    #[must_use]
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }
}
