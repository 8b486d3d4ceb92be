// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout CRUD and read-filter operations.
//!
//! Thin pass-through persistence: each operation validates its input where
//! needed and delegates to a single storage call. The interesting logic
//! lives in [`crate::aggregate`] and [`crate::week`].

use crate::error::{Error, Result};
use crate::model::{Workout, WorkoutRequest};
use crate::{db, week};
use chrono::Utc;
use rusqlite::Connection;

/// Validate and persist a new workout.
///
/// The store assigns the id; `created_at` is set to today and never changes
/// afterwards.
pub fn create(conn: &Connection, request: &WorkoutRequest) -> Result<Workout> {
    request.validate()?;
    db::insert_workout(conn, request, Utc::now().date_naive())
}

/// Fetch a workout by id.
pub fn get(conn: &Connection, id: i64) -> Result<Workout> {
    db::find_by_id(conn, id)?.ok_or(Error::NotFound(id))
}

/// Replace all mutable fields of an existing workout.
///
/// `id` and `created_at` are preserved.
pub fn update(conn: &Connection, id: i64, request: &WorkoutRequest) -> Result<Workout> {
    request.validate()?;
    if db::update_workout(conn, id, request)? == 0 {
        return Err(Error::NotFound(id));
    }
    get(conn, id)
}

/// Permanently delete a workout by id.
pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    if !db::exists(conn, id)? {
        return Err(Error::NotFound(id));
    }
    db::delete_by_id(conn, id)?;
    Ok(())
}

/// All workouts, most recent first.
pub fn list_all(conn: &Connection) -> Result<Vec<Workout>> {
    db::find_all(conn)
}

/// Workouts in the given ISO week.
///
/// A blank identifier lists everything; otherwise the identifier is
/// resolved to its Monday..Sunday range and used as a date predicate.
pub fn list_by_week(conn: &Connection, week: &str) -> Result<Vec<Workout>> {
    if week.trim().is_empty() {
        return list_all(conn);
    }

    let (start_of_week, end_of_week) = week::week_bounds(week)?;
    db::find_by_date_range(conn, start_of_week, end_of_week)
}

/// Workouts whose exercise name contains `text` (case-insensitive).
pub fn search_by_exercise(conn: &Connection, text: &str) -> Result<Vec<Workout>> {
    db::find_by_exercise(conn, text)
}

/// Workouts from the last `days` days.
pub fn recent(conn: &Connection, days: i64) -> Result<Vec<Workout>> {
    let from_date = Utc::now().date_naive() - chrono::Duration::days(days);
    db::find_from_date(conn, from_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(day: NaiveDate, exercise: &str) -> WorkoutRequest {
        WorkoutRequest {
            date: day,
            exercise: exercise.to_string(),
            sets: 3,
            reps: 10,
            weight: 80.0,
            rpe: 7.5,
        }
    }

    #[test]
    fn test_create_then_get() {
        let conn = db::init_db_in_memory().unwrap();
        let created = create(&conn, &request(date(2024, 4, 1), "Bench Press")).unwrap();

        let fetched = get(&conn, created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_create_rejects_invalid_request() {
        let conn = db::init_db_in_memory().unwrap();
        let mut bad = request(date(2024, 4, 1), "Bench Press");
        bad.sets = 0;

        assert!(matches!(create(&conn, &bad), Err(Error::Validation(_))));
        assert!(list_all(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let conn = db::init_db_in_memory().unwrap();
        assert!(matches!(get(&conn, 42), Err(Error::NotFound(42))));
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let conn = db::init_db_in_memory().unwrap();
        let req = request(date(2024, 4, 1), "Squat");
        assert!(matches!(update(&conn, 42, &req), Err(Error::NotFound(42))));
    }

    #[test]
    fn test_update_replaces_fields() {
        let conn = db::init_db_in_memory().unwrap();
        let created = create(&conn, &request(date(2024, 4, 1), "Squat")).unwrap();

        let mut changed = request(date(2024, 4, 2), "Front Squat");
        changed.weight = 90.0;
        let updated = update(&conn, created.id, &changed).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.exercise, "Front Squat");
        assert_eq!(updated.weight, 90.0);
        assert_eq!(updated.date, date(2024, 4, 2));
    }

    #[test]
    fn test_update_rejects_invalid_request() {
        let conn = db::init_db_in_memory().unwrap();
        let created = create(&conn, &request(date(2024, 4, 1), "Squat")).unwrap();

        let mut bad = request(date(2024, 4, 1), "Squat");
        bad.rpe = 11.0;
        assert!(matches!(
            update(&conn, created.id, &bad),
            Err(Error::Validation(_))
        ));

        // Stored record is untouched.
        assert_eq!(get(&conn, created.id).unwrap().rpe, 7.5);
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let conn = db::init_db_in_memory().unwrap();
        assert!(matches!(delete(&conn, 7), Err(Error::NotFound(7))));
    }

    #[test]
    fn test_delete_removes_record() {
        let conn = db::init_db_in_memory().unwrap();
        let created = create(&conn, &request(date(2024, 4, 1), "Row")).unwrap();

        delete(&conn, created.id).unwrap();
        assert!(matches!(
            get(&conn, created.id),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_list_by_week_filters_to_week() {
        let conn = db::init_db_in_memory().unwrap();
        create(&conn, &request(date(2024, 4, 1), "Bench Press")).unwrap();
        create(&conn, &request(date(2024, 4, 7), "Squat")).unwrap();
        create(&conn, &request(date(2024, 4, 8), "Deadlift")).unwrap();

        let week14 = list_by_week(&conn, "2024-W14").unwrap();
        assert_eq!(week14.len(), 2);

        let week15 = list_by_week(&conn, "2024-W15").unwrap();
        assert_eq!(week15.len(), 1);
        assert_eq!(week15[0].exercise, "Deadlift");
    }

    #[test]
    fn test_list_by_week_blank_lists_all() {
        let conn = db::init_db_in_memory().unwrap();
        create(&conn, &request(date(2024, 4, 1), "Bench Press")).unwrap();
        create(&conn, &request(date(2024, 4, 8), "Squat")).unwrap();

        assert_eq!(list_by_week(&conn, "  ").unwrap().len(), 2);
    }

    #[test]
    fn test_list_by_week_invalid_identifier() {
        let conn = db::init_db_in_memory().unwrap();
        assert!(matches!(
            list_by_week(&conn, "bogus"),
            Err(Error::InvalidWeek(_))
        ));
    }
}
