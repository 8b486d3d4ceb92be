// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite storage for workout records.

use crate::error::Result;
use crate::model::{Workout, WorkoutRequest};
use camino::Utf8Path;
use chrono::NaiveDate;
use log::debug;
use rusqlite::{Connection, Row, params};

/// Initialize the database schema.
pub fn init_db(path: &Utf8Path) -> Result<Connection> {
    let conn = Connection::open(path.as_std_path())?;
    init_connection(conn)
}

/// Open an in-memory database with the full schema applied.
///
/// Nothing written here survives the connection; used for tests and
/// throwaway sessions.
pub fn init_db_in_memory() -> Result<Connection> {
    init_connection(Connection::open_in_memory()?)
}

fn init_connection(conn: Connection) -> Result<Connection> {
    // Note: Some pragmas (like journal_mode, synchronous) persist in the
    // database file. Others (like temp_store) are per-connection and must be
    // set each time.
    conn.execute_batch(
        r#"
        -- WAL mode for better concurrency and crash recovery (PERSISTENT)
        PRAGMA journal_mode = WAL;

        -- Synchronous mode: NORMAL is safe with WAL and much faster (PERSISTENT)
        PRAGMA synchronous = NORMAL;

        -- Foreign key constraints enforcement (PER-CONNECTION)
        PRAGMA foreign_keys = ON;

        -- Store temp tables in memory for better performance (PER-CONNECTION)
        PRAGMA temp_store = MEMORY;
        "#,
    )?;

    conn.execute_batch(
        r#"
        -- Workout entries. Dates are ISO8601 (YYYY-MM-DD); volume is derived
        -- from weight * sets * reps at read time and never stored.
        CREATE TABLE IF NOT EXISTS workouts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            workout_date TEXT NOT NULL,
            exercise TEXT NOT NULL,
            sets INTEGER NOT NULL,
            reps INTEGER NOT NULL,
            weight REAL NOT NULL,
            rpe REAL NOT NULL,
            created_at TEXT NOT NULL
        );

        -- Indexes for efficient queries
        CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts(workout_date, created_at);
        CREATE INDEX IF NOT EXISTS idx_workouts_exercise ON workouts(exercise);
        "#,
    )?;

    Ok(conn)
}

fn workout_from_row(row: &Row<'_>) -> rusqlite::Result<Workout> {
    let date_str: String = row.get(1)?;
    let created_str: String = row.get(7)?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;
    let created_at = NaiveDate::parse_from_str(&created_str, "%Y-%m-%d")
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(Workout {
        id: row.get(0)?,
        date,
        exercise: row.get(2)?,
        sets: row.get(3)?,
        reps: row.get(4)?,
        weight: row.get(5)?,
        rpe: row.get(6)?,
        created_at,
    })
}

const SELECT_COLUMNS: &str =
    "SELECT id, workout_date, exercise, sets, reps, weight, rpe, created_at FROM workouts";

/// Insert a new workout record, returning it with its assigned id.
pub fn insert_workout(
    conn: &Connection,
    request: &WorkoutRequest,
    created_at: NaiveDate,
) -> Result<Workout> {
    conn.execute(
        "INSERT INTO workouts (workout_date, exercise, sets, reps, weight, rpe, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            request.date.to_string(),
            request.exercise,
            request.sets,
            request.reps,
            request.weight,
            request.rpe,
            created_at.to_string(),
        ],
    )?;

    let id = conn.last_insert_rowid();
    debug!("inserted workout {id} ({})", request.exercise);

    Ok(Workout {
        id,
        date: request.date,
        exercise: request.exercise.clone(),
        sets: request.sets,
        reps: request.reps,
        weight: request.weight,
        rpe: request.rpe,
        created_at,
    })
}

/// Replace the mutable fields of an existing record.
///
/// `id` and `created_at` are left untouched. Returns the number of rows
/// affected (0 when no record has that id).
pub fn update_workout(conn: &Connection, id: i64, request: &WorkoutRequest) -> Result<usize> {
    let updated = conn.execute(
        "UPDATE workouts
         SET workout_date = ?1, exercise = ?2, sets = ?3, reps = ?4, weight = ?5, rpe = ?6
         WHERE id = ?7",
        params![
            request.date.to_string(),
            request.exercise,
            request.sets,
            request.reps,
            request.weight,
            request.rpe,
            id,
        ],
    )?;
    Ok(updated)
}

/// Look up a single workout by id.
pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Workout>> {
    let mut stmt = conn.prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))?;
    let mut rows = stmt.query_map([id], workout_from_row)?;
    match rows.next() {
        Some(workout) => Ok(Some(workout?)),
        None => Ok(None),
    }
}

/// Check whether a workout with the given id exists.
pub fn exists(conn: &Connection, id: i64) -> Result<bool> {
    let count: i64 =
        conn.query_row("SELECT COUNT(*) FROM workouts WHERE id = ?1", [id], |row| {
            row.get(0)
        })?;
    Ok(count > 0)
}

/// Delete a workout by id, returning the number of rows removed.
pub fn delete_by_id(conn: &Connection, id: i64) -> Result<usize> {
    let deleted = conn.execute("DELETE FROM workouts WHERE id = ?1", [id])?;
    Ok(deleted)
}

/// All workouts, most recent first.
pub fn find_all(conn: &Connection) -> Result<Vec<Workout>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_COLUMNS} ORDER BY workout_date DESC, created_at DESC"
    ))?;
    let rows = stmt.query_map([], workout_from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Workouts with `start <= date <= end`, most recent first.
pub fn find_by_date_range(
    conn: &Connection,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<Workout>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_COLUMNS}
         WHERE workout_date BETWEEN ?1 AND ?2
         ORDER BY workout_date DESC, created_at DESC"
    ))?;
    let rows = stmt.query_map([start.to_string(), end.to_string()], workout_from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Workouts whose exercise name contains the given text, case-insensitively.
pub fn find_by_exercise(conn: &Connection, text: &str) -> Result<Vec<Workout>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_COLUMNS}
         WHERE lower(exercise) LIKE '%' || lower(?1) || '%'
         ORDER BY workout_date DESC"
    ))?;
    let rows = stmt.query_map([text], workout_from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

/// Workouts on or after the given date, most recent first.
pub fn find_from_date(conn: &Connection, from: NaiveDate) -> Result<Vec<Workout>> {
    let mut stmt = conn.prepare(&format!(
        "{SELECT_COLUMNS}
         WHERE workout_date >= ?1
         ORDER BY workout_date DESC, created_at DESC"
    ))?;
    let rows = stmt.query_map([from.to_string()], workout_from_row)?;
    Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(day: NaiveDate, exercise: &str, weight: f64) -> WorkoutRequest {
        WorkoutRequest {
            date: day,
            exercise: exercise.to_string(),
            sets: 3,
            reps: 10,
            weight,
            rpe: 7.0,
        }
    }

    #[test]
    fn test_insert_assigns_ids() {
        let conn = init_db_in_memory().unwrap();
        let day = date(2024, 4, 1);

        let first = insert_workout(&conn, &request(day, "Bench Press", 80.0), day).unwrap();
        let second = insert_workout(&conn, &request(day, "Squat", 100.0), day).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(find_by_id(&conn, first.id).unwrap().unwrap(), first);
    }

    #[test]
    fn test_find_by_id_missing() {
        let conn = init_db_in_memory().unwrap();
        assert!(find_by_id(&conn, 999).unwrap().is_none());
        assert!(!exists(&conn, 999).unwrap());
    }

    #[test]
    fn test_update_preserves_created_at() {
        let conn = init_db_in_memory().unwrap();
        let created = date(2024, 4, 1);
        let workout = insert_workout(&conn, &request(created, "Deadlift", 120.0), created).unwrap();

        let mut changed = request(date(2024, 4, 2), "Deadlift", 130.0);
        changed.sets = 5;
        assert_eq!(update_workout(&conn, workout.id, &changed).unwrap(), 1);

        let reloaded = find_by_id(&conn, workout.id).unwrap().unwrap();
        assert_eq!(reloaded.weight, 130.0);
        assert_eq!(reloaded.sets, 5);
        assert_eq!(reloaded.date, date(2024, 4, 2));
        assert_eq!(reloaded.created_at, created);

        assert_eq!(update_workout(&conn, 999, &changed).unwrap(), 0);
    }

    #[test]
    fn test_delete() {
        let conn = init_db_in_memory().unwrap();
        let day = date(2024, 4, 1);
        let workout = insert_workout(&conn, &request(day, "Row", 60.0), day).unwrap();

        assert_eq!(delete_by_id(&conn, workout.id).unwrap(), 1);
        assert_eq!(delete_by_id(&conn, workout.id).unwrap(), 0);
        assert!(find_by_id(&conn, workout.id).unwrap().is_none());
    }

    #[test]
    fn test_date_range_is_inclusive_and_ordered() {
        let conn = init_db_in_memory().unwrap();
        for (day, exercise) in [
            (date(2024, 4, 1), "Bench Press"),
            (date(2024, 4, 3), "Squat"),
            (date(2024, 4, 10), "Deadlift"),
        ] {
            insert_workout(&conn, &request(day, exercise, 80.0), day).unwrap();
        }

        let in_range = find_by_date_range(&conn, date(2024, 4, 1), date(2024, 4, 3)).unwrap();
        let names: Vec<_> = in_range.iter().map(|w| w.exercise.as_str()).collect();
        assert_eq!(names, ["Squat", "Bench Press"]);

        let all = find_all(&conn).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].exercise, "Deadlift");
    }

    #[test]
    fn test_exercise_search_is_case_insensitive() {
        let conn = init_db_in_memory().unwrap();
        let day = date(2024, 4, 1);
        insert_workout(&conn, &request(day, "Bench Press", 80.0), day).unwrap();
        insert_workout(&conn, &request(day, "Incline bench", 60.0), day).unwrap();
        insert_workout(&conn, &request(day, "Squat", 100.0), day).unwrap();

        let found = find_by_exercise(&conn, "BENCH").unwrap();
        assert_eq!(found.len(), 2);
        assert!(find_by_exercise(&conn, "curl").unwrap().is_empty());
    }

    #[test]
    fn test_find_from_date() {
        let conn = init_db_in_memory().unwrap();
        for day in [date(2024, 4, 1), date(2024, 4, 5), date(2024, 4, 10)] {
            insert_workout(&conn, &request(day, "Press", 50.0), day).unwrap();
        }

        let recent = find_from_date(&conn, date(2024, 4, 5)).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].date, date(2024, 4, 10));
    }
}
