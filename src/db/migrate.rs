//! Versioned schema migrations, tracked through `PRAGMA user_version`.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Ordered list of (version, DDL). Versions must be strictly increasing.
const MIGRATIONS: &[(i64, &str)] = &[
    (
        1,
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            email        TEXT PRIMARY KEY,
            display_name TEXT NOT NULL DEFAULT '',
            role         TEXT NOT NULL DEFAULT 'volunteer'
                         CHECK(role IN ('volunteer','administrator'))
        );

        CREATE TABLE IF NOT EXISTS profiles (
            email  TEXT PRIMARY KEY,
            skills TEXT NOT NULL DEFAULT '[]'   -- JSON array
        );

        CREATE TABLE IF NOT EXISTS events (
            id              TEXT PRIMARY KEY,
            name            TEXT NOT NULL,
            date            TEXT NOT NULL,      -- YYYY-MM-DD
            location        TEXT NOT NULL,
            skills_required TEXT NOT NULL DEFAULT '[]',
            urgency         TEXT NOT NULL DEFAULT 'low'
                            CHECK(urgency IN ('low','medium','high')),
            details         TEXT NOT NULL DEFAULT '',
            created_at      TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS volunteer_history (
            id                 TEXT PRIMARY KEY,
            volunteer_email    TEXT NOT NULL,
            event_id           TEXT NOT NULL,
            role               TEXT,
            hours              REAL CHECK(hours IS NULL OR hours >= 0),
            status             TEXT NOT NULL DEFAULT 'completed',
            participation_date TEXT NOT NULL,
            created_at         TEXT NOT NULL,
            updated_at         TEXT NOT NULL
        );
        "#,
    ),
    (
        2,
        r#"
        CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
        CREATE INDEX IF NOT EXISTS idx_history_volunteer ON volunteer_history(volunteer_email);
        "#,
    ),
];

pub fn current_version(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("PRAGMA user_version", [], |row| row.get(0))?)
}

pub fn latest_version() -> i64 {
    MIGRATIONS.last().map(|(v, _)| *v).unwrap_or(0)
}

/// Applies every migration newer than the stored `user_version`.
/// Returns the number of migrations applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    let mut version = current_version(conn)?;
    let mut applied = 0;

    for (target, sql) in MIGRATIONS.iter().filter(move |(v, _)| *v > version) {
        log::debug!("applying schema migration {version} -> {target}");

        conn.execute_batch(&format!(
            "BEGIN;\n{sql}\nPRAGMA user_version = {target};\nCOMMIT;"
        ))
        .map_err(|e| {
            let _ = conn.execute_batch("ROLLBACK;");
            AppError::Migration(format!("step {target}: {e}"))
        })?;

        version = *target;
        applied += 1;
    }

    Ok(applied)
}
