//! Habit store adapter.
//!
//! The store owns persisted habits and logs. The engine never reads it
//! directly: callers take a [`Snapshot`] and hand that to the statistics
//! functions. Writers notify subscribers with a fresh snapshot after every
//! successful change.

use std::cell::RefCell;
use std::sync::mpsc::{channel, Receiver, Sender};

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};

use super::Database;
use crate::core::{local_day, local_today, start_of_day};
use crate::error::HabitsError;
use crate::habits::{CompletionLog, Frequency, Habit, NewHabit, Snapshot};

/// Read and write access to habits and their completion logs.
#[cfg_attr(test, mockall::automock)]
pub trait HabitStore {
    /// Current state of all habits and logs.
    fn snapshot(&self) -> Result<Snapshot, HabitsError>;

    /// Create a habit, assigning its id and creation time.
    fn add_habit(&self, habit: NewHabit) -> Result<Habit, HabitsError>;

    /// Delete a habit and all of its logs.
    ///
    /// Returns `false` if no habit had that id.
    fn delete_habit(&self, id: &str) -> Result<bool, HabitsError>;

    /// Record completion state for `habit_id` on the local day `day`.
    ///
    /// Updates the existing log for that day if there is one, otherwise
    /// creates a log dated at local midnight.
    fn log_day(
        &self,
        habit_id: &str,
        day: NaiveDate,
        completed: bool,
    ) -> Result<CompletionLog, HabitsError>;

    /// Record completion state for today.
    fn log_today(&self, habit_id: &str, completed: bool) -> Result<CompletionLog, HabitsError> {
        self.log_day(habit_id, local_today(), completed)
    }

    /// Receive a snapshot after every successful write.
    fn subscribe(&self) -> Receiver<Snapshot>;
}

/// `SQLite`-backed store.
pub struct SqliteStore {
    db: Database,
    subscribers: RefCell<Vec<Sender<Snapshot>>>,
}

impl SqliteStore {
    /// Create a store on an open database.
    pub const fn new(db: Database) -> Self {
        Self {
            db,
            subscribers: RefCell::new(Vec::new()),
        }
    }

    /// Create a store on a fresh in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn in_memory() -> Result<Self, HabitsError> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    fn habits(&self) -> Result<Vec<Habit>, HabitsError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                r"SELECT id, name, description, created_at, frequency
                  FROM habits
                  ORDER BY created_at, rowid",
            )
            .map_err(|e| HabitsError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_habit)
            .map_err(|e| HabitsError::Database(format!("Failed to query habits: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| HabitsError::Database(e.to_string()))
    }

    fn logs(&self) -> Result<Vec<CompletionLog>, HabitsError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                r"SELECT id, habit_id, date, completed
                  FROM habit_logs
                  ORDER BY rowid",
            )
            .map_err(|e| HabitsError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([], row_to_log)
            .map_err(|e| HabitsError::Database(format!("Failed to query logs: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| HabitsError::Database(e.to_string()))
    }

    fn logs_for(&self, habit_id: &str) -> Result<Vec<CompletionLog>, HabitsError> {
        let conn = self.db.connection();
        let mut stmt = conn
            .prepare(
                r"SELECT id, habit_id, date, completed
                  FROM habit_logs
                  WHERE habit_id = ?1
                  ORDER BY rowid",
            )
            .map_err(|e| HabitsError::Database(format!("Failed to prepare query: {e}")))?;

        let rows = stmt
            .query_map([habit_id], row_to_log)
            .map_err(|e| HabitsError::Database(format!("Failed to query logs: {e}")))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| HabitsError::Database(e.to_string()))
    }

    fn habit_exists(&self, id: &str) -> Result<bool, HabitsError> {
        let found: Option<i64> = self
            .db
            .connection()
            .query_row("SELECT 1 FROM habits WHERE id = ?1", [id], |row| row.get(0))
            .optional()
            .map_err(|e| HabitsError::Database(format!("Failed to query habit: {e}")))?;
        Ok(found.is_some())
    }

    /// Push the current snapshot to every live subscriber.
    ///
    /// Runs after a committed write, so a failed read is logged rather than
    /// returned.
    fn notify(&self) {
        let mut subscribers = self.subscribers.borrow_mut();
        if subscribers.is_empty() {
            return;
        }

        match self.snapshot() {
            Ok(snapshot) => {
                subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
                tracing::debug!(subscribers = subscribers.len(), "published snapshot");
            }
            Err(e) => tracing::warn!(error = %e, "failed to publish snapshot"),
        }
    }
}

impl HabitStore for SqliteStore {
    fn snapshot(&self) -> Result<Snapshot, HabitsError> {
        Ok(Snapshot::new(self.habits()?, self.logs()?))
    }

    fn add_habit(&self, habit: NewHabit) -> Result<Habit, HabitsError> {
        let habit = Habit {
            id: uuid::Uuid::new_v4().to_string(),
            name: habit.name,
            description: habit.description,
            created_at: Utc::now(),
            frequency: habit.frequency,
        };

        self.db
            .connection()
            .execute(
                r"INSERT INTO habits (id, name, description, created_at, frequency)
                  VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    habit.id,
                    habit.name,
                    habit.description,
                    habit.created_at.to_rfc3339(),
                    habit.frequency.as_str(),
                ],
            )
            .map_err(|e| HabitsError::Database(format!("Failed to insert habit: {e}")))?;

        tracing::info!(id = %habit.id, name = %habit.name, "added habit");
        self.notify();
        Ok(habit)
    }

    fn delete_habit(&self, id: &str) -> Result<bool, HabitsError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM habits WHERE id = ?1", [id])
            .map_err(|e| HabitsError::Database(format!("Failed to delete habit: {e}")))?;

        if rows > 0 {
            tracing::info!(id, "deleted habit and its logs");
            self.notify();
        }
        Ok(rows > 0)
    }

    fn log_day(
        &self,
        habit_id: &str,
        day: NaiveDate,
        completed: bool,
    ) -> Result<CompletionLog, HabitsError> {
        if !self.habit_exists(habit_id)? {
            return Err(HabitsError::NotFound(format!("habit {habit_id}")));
        }

        let existing = self
            .logs_for(habit_id)?
            .into_iter()
            .find(|log| local_day(&log.date) == day);

        let log = if let Some(mut log) = existing {
            self.db
                .connection()
                .execute(
                    "UPDATE habit_logs SET completed = ?1 WHERE id = ?2",
                    params![completed, log.id],
                )
                .map_err(|e| HabitsError::Database(format!("Failed to update log: {e}")))?;
            log.completed = completed;
            log
        } else {
            let log = CompletionLog {
                id: uuid::Uuid::new_v4().to_string(),
                habit_id: habit_id.to_string(),
                date: start_of_day(day),
                completed,
            };
            self.db
                .connection()
                .execute(
                    r"INSERT INTO habit_logs (id, habit_id, date, completed)
                      VALUES (?1, ?2, ?3, ?4)",
                    params![log.id, log.habit_id, log.date.to_rfc3339(), log.completed],
                )
                .map_err(|e| HabitsError::Database(format!("Failed to insert log: {e}")))?;
            log
        };

        tracing::info!(habit_id, %day, completed, "logged habit");
        self.notify();
        Ok(log)
    }

    fn subscribe(&self) -> Receiver<Snapshot> {
        let (tx, rx) = channel();
        self.subscribers.borrow_mut().push(tx);
        rx
    }
}

fn conversion_error<E>(idx: usize, e: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
}

fn parse_timestamp(idx: usize, raw: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

fn row_to_habit(row: &Row<'_>) -> Result<Habit, rusqlite::Error> {
    let created_at: String = row.get(3)?;
    let frequency: String = row.get(4)?;

    Ok(Habit {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        created_at: parse_timestamp(3, &created_at)?,
        frequency: frequency.parse::<Frequency>().map_err(|e| conversion_error(4, e))?,
    })
}

fn row_to_log(row: &Row<'_>) -> Result<CompletionLog, rusqlite::Error> {
    let date: String = row.get(2)?;

    Ok(CompletionLog {
        id: row.get(0)?,
        habit_id: row.get(1)?,
        date: parse_timestamp(2, &date)?,
        completed: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stats::HabitStatistics;
    use chrono::Duration;

    fn store() -> SqliteStore {
        SqliteStore::in_memory().unwrap()
    }

    fn add(store: &SqliteStore, name: &str) -> Habit {
        store
            .add_habit(NewHabit::new(name, None, Frequency::Daily).unwrap())
            .unwrap()
    }

    #[test]
    fn test_add_habit_assigns_id() {
        let store = store();
        let a = add(&store, "Read");
        let b = add(&store, "Run");

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);

        let snap = store.snapshot().unwrap();
        assert_eq!(snap.habits.len(), 2);
        assert_eq!(snap.habit(&a.id).unwrap().name, "Read");
    }

    #[test]
    fn test_add_habit_keeps_description_and_frequency() {
        let store = store();
        let habit = store
            .add_habit(NewHabit::new("Review", Some("weekly notes"), Frequency::Weekly).unwrap())
            .unwrap();

        let snap = store.snapshot().unwrap();
        let loaded = snap.habit(&habit.id).unwrap();
        assert_eq!(loaded.description.as_deref(), Some("weekly notes"));
        assert_eq!(loaded.frequency, Frequency::Weekly);
    }

    #[test]
    fn test_log_today_upserts_by_day() {
        let store = store();
        let habit = add(&store, "Read");

        let first = store.log_today(&habit.id, true).unwrap();
        let second = store.log_today(&habit.id, false).unwrap();
        assert_eq!(first.id, second.id);

        let snap = store.snapshot().unwrap();
        assert_eq!(snap.logs.len(), 1);
        assert!(!snap.logs[0].completed);
        assert_eq!(local_day(&snap.logs[0].date), local_today());
    }

    #[test]
    fn test_log_day_builds_streak() {
        let store = store();
        let habit = add(&store, "Read");
        let today = local_today();

        for back in 0..3 {
            store.log_day(&habit.id, today - Duration::days(back), true).unwrap();
        }

        let stats = HabitStatistics::calculate(&store.snapshot().unwrap(), today);
        assert_eq!(stats.longest_streak, 3);
        assert_eq!(stats.completions_today, 1);
        assert_eq!(stats.today_completion_rate, 100);
    }

    #[test]
    fn test_log_unknown_habit() {
        let store = store();
        let err = store.log_today("missing", true).unwrap_err();
        assert!(matches!(err, HabitsError::NotFound(_)));
    }

    #[test]
    fn test_delete_cascades_logs() {
        let store = store();
        let keep = add(&store, "Keep");
        let drop = add(&store, "Drop");
        store.log_today(&keep.id, true).unwrap();
        store.log_today(&drop.id, true).unwrap();
        store
            .log_day(&drop.id, local_today() - Duration::days(1), false)
            .unwrap();

        assert!(store.delete_habit(&drop.id).unwrap());
        assert!(!store.delete_habit(&drop.id).unwrap());

        let snap = store.snapshot().unwrap();
        assert_eq!(snap.habits.len(), 1);
        assert!(snap.logs.iter().all(|l| l.habit_id == keep.id));

        let stats = HabitStatistics::calculate(&snap, local_today());
        assert_eq!(stats.total_habits, 1);
        assert_eq!(stats.total_completions, 1);
        assert_eq!(stats.completion_rate, 100);
    }

    #[test]
    fn test_subscribers_receive_snapshots() {
        let store = store();
        let rx = store.subscribe();

        let habit = add(&store, "Read");
        let after_add = rx.try_recv().unwrap();
        assert_eq!(after_add.habits.len(), 1);

        store.log_today(&habit.id, true).unwrap();
        let after_log = rx.try_recv().unwrap();
        assert_eq!(after_log.logs.len(), 1);

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let store = store();
        drop(store.subscribe());

        add(&store, "Read");
        assert!(store.subscribers.borrow().is_empty());
    }

    fn corrupt_frequency(store: &SqliteStore, id: &str) {
        store
            .db
            .connection()
            .execute("UPDATE habits SET frequency = 'hourly' WHERE id = ?1", [id])
            .unwrap();
    }

    #[test]
    fn test_unknown_stored_frequency_is_an_error() {
        let store = store();
        let habit = add(&store, "Read");
        corrupt_frequency(&store, &habit.id);

        let err = store.snapshot().unwrap_err();
        assert!(matches!(err, HabitsError::Database(_)));
    }

    #[test]
    fn test_failed_publish_keeps_committed_write() {
        let store = store();
        let broken = add(&store, "Broken");
        corrupt_frequency(&store, &broken.id);
        let rx = store.subscribe();

        let added = store
            .add_habit(NewHabit::new("Run", None, Frequency::Daily).unwrap())
            .unwrap();
        store.log_today(&added.id, true).unwrap();
        assert!(store.delete_habit(&broken.id).unwrap());

        // Published only once the broken row is gone.
        let published = rx.try_recv().unwrap();
        assert!(rx.try_recv().is_err());
        assert_eq!(published.habits.len(), 1);

        let snap = store.snapshot().unwrap();
        assert_eq!(snap.habits.len(), 1);
        assert_eq!(snap.habits[0].id, added.id);
        assert_eq!(snap.logs.len(), 1);
    }

    #[test]
    fn test_snapshot_without_writes_is_stable() {
        let store = store();
        let habit = add(&store, "Read");
        store.log_today(&habit.id, true).unwrap();

        assert_eq!(store.snapshot().unwrap(), store.snapshot().unwrap());
    }
}
