// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command implementations.

use crate::config::Units;
use crate::model::WorkoutRequest;
use crate::query::ExportKind;
use crate::{aggregate, charts, db, query, workouts};
use anyhow::{Context, Result};
use camino::Utf8Path;
use log::info;

/// Run the add command.
pub fn run_add(database: &Utf8Path, request: &WorkoutRequest, units: Units) -> Result<()> {
    let conn = db::init_db(database).context("failed to open database")?;
    let workout = workouts::create(&conn, request)?;

    info!("created workout {}", workout.id);
    println!(
        "Logged workout {}: {} {}x{} @ {}{} (volume {}{})",
        workout.id,
        workout.exercise,
        workout.sets,
        workout.reps,
        workout.weight,
        units.label(),
        workout.volume(),
        units.label(),
    );
    Ok(())
}

/// Run the list command.
///
/// Filter precedence when several are given: exercise search, then recency
/// window, then week filter, else everything.
pub fn run_list(
    database: &Utf8Path,
    week: Option<&str>,
    exercise: Option<&str>,
    days: Option<i64>,
    units: Units,
) -> Result<()> {
    let conn = db::init_db(database).context("failed to open database")?;

    let workouts = match (exercise, days, week) {
        (Some(text), _, _) if !text.trim().is_empty() => {
            workouts::search_by_exercise(&conn, text)?
        }
        (_, Some(days), _) if days > 0 => workouts::recent(&conn, days)?,
        (_, _, Some(week)) if !week.trim().is_empty() => workouts::list_by_week(&conn, week)?,
        _ => workouts::list_all(&conn)?,
    };

    query::print_workouts(&workouts, units);
    Ok(())
}

/// Run the show command.
pub fn run_show(database: &Utf8Path, id: i64, units: Units) -> Result<()> {
    let conn = db::init_db(database).context("failed to open database")?;
    let workout = workouts::get(&conn, id)?;
    query::print_workouts(std::slice::from_ref(&workout), units);
    Ok(())
}

/// Run the update command.
pub fn run_update(
    database: &Utf8Path,
    id: i64,
    request: &WorkoutRequest,
    units: Units,
) -> Result<()> {
    let conn = db::init_db(database).context("failed to open database")?;
    let workout = workouts::update(&conn, id, request)?;

    println!("Updated workout {}.", workout.id);
    query::print_workouts(std::slice::from_ref(&workout), units);
    Ok(())
}

/// Run the delete command.
pub fn run_delete(database: &Utf8Path, id: i64) -> Result<()> {
    let conn = db::init_db(database).context("failed to open database")?;
    workouts::delete(&conn, id)?;
    println!("Deleted workout {}.", id);
    Ok(())
}

/// Run the stats command.
pub fn run_stats(database: &Utf8Path, range_spec: &str, units: Units) -> Result<()> {
    let conn = db::init_db(database).context("failed to open database")?;
    let stats = aggregate::weekly_stats(&conn, range_spec)?;
    query::print_weekly_stats(&stats, units);
    Ok(())
}

/// Run the charts command.
pub fn run_charts(
    database: &Utf8Path,
    output_dir: &Utf8Path,
    range_spec: &str,
    units: Units,
) -> Result<()> {
    let conn = db::init_db(database).context("failed to open database")?;
    charts::generate_all_charts(&conn, output_dir, range_spec, units)?;
    Ok(())
}

/// Run the export command.
pub fn run_export(database: &Utf8Path, export: ExportKind, range_spec: &str) -> Result<()> {
    let conn = db::init_db(database).context("failed to open database")?;
    query::run_export(&conn, export, range_spec)?;
    Ok(())
}
