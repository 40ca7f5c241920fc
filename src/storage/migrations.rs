//! Database migrations for habits.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::HabitsError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, HabitsError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| HabitsError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), HabitsError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| HabitsError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), HabitsError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::info!(version, "running schema migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), HabitsError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(HabitsError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: habits and their completion logs.
///
/// Timestamps are RFC 3339 UTC strings. Log rows reference their habit with
/// `ON DELETE CASCADE`.
fn migrate_v1(conn: &Connection) -> Result<(), HabitsError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS habits (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL,
            frequency TEXT NOT NULL DEFAULT 'daily'
        );

        CREATE TABLE IF NOT EXISTS habit_logs (
            id TEXT PRIMARY KEY,
            habit_id TEXT NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
            date TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_habit_logs_habit
        ON habit_logs(habit_id);
        ",
    )
    .map_err(|e| HabitsError::Database(format!("Migration v1 failed: {e}")))
}
