// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weekly aggregation of workout statistics.

use crate::error::Result;
use crate::model::{WeeklyStats, Workout};
use crate::{db, week};
use chrono::{NaiveDate, Utc};
use log::debug;
use rusqlite::Connection;
use std::collections::HashMap;

/// Lookback applied when a range spec is absent or unparseable.
pub const DEFAULT_RANGE_WEEKS: i64 = 4;

/// Parse a stats range spec like `last4w` into a week count.
///
/// Accepted forms: empty (default), `last<n>w`, or a bare integer. This
/// parser is deliberately best-effort: malformed input degrades to
/// [`DEFAULT_RANGE_WEEKS`] instead of failing, so the stats report is
/// always available. A strict variant would replace this function.
pub fn parse_range_spec(spec: &str) -> i64 {
    let spec = spec.trim().to_lowercase();
    if spec.is_empty() {
        return DEFAULT_RANGE_WEEKS;
    }

    if let Some(number_part) = spec.strip_prefix("last").and_then(|s| s.strip_suffix('w')) {
        return number_part.parse().unwrap_or(DEFAULT_RANGE_WEEKS);
    }

    spec.parse().unwrap_or(DEFAULT_RANGE_WEEKS)
}

/// Compute weekly statistics for the lookback window named by `range_spec`,
/// ending today.
pub fn weekly_stats(conn: &Connection, range_spec: &str) -> Result<Vec<WeeklyStats>> {
    weekly_stats_as_of(conn, range_spec, Utc::now().date_naive())
}

/// Compute weekly statistics for the lookback window ending on `today`.
///
/// The window covers `parse_range_spec(range_spec)` weeks including the
/// current one; its start is snapped back to a Monday. The result has one
/// row per week in ascending week order, with zero-valued rows for weeks
/// that have no workouts.
pub fn weekly_stats_as_of(
    conn: &Connection,
    range_spec: &str,
    today: NaiveDate,
) -> Result<Vec<WeeklyStats>> {
    let weeks = parse_range_spec(range_spec);
    let end_date = today;
    let start_date = week::week_start(end_date - chrono::Duration::weeks(weeks - 1));

    let workouts = db::find_by_date_range(conn, start_date, end_date)?;
    debug!(
        "aggregating {} workouts between {start_date} and {end_date}",
        workouts.len()
    );

    // Group workouts by week identifier
    let mut workouts_by_week: HashMap<String, Vec<Workout>> = HashMap::new();
    for workout in workouts {
        workouts_by_week
            .entry(week::week_id(workout.date))
            .or_default()
            .push(workout);
    }

    // Generate stats for each week in the range, zero-filled where no
    // workouts were logged.
    let mut stats = Vec::new();
    let mut current_week_start = start_date;
    while current_week_start <= end_date {
        let week_id = week::week_id(current_week_start);
        let week_workouts = workouts_by_week.get(&week_id);

        let volume = week_workouts
            .map(|group| group.iter().map(Workout::volume).sum())
            .unwrap_or(0.0);
        let total_workouts = week_workouts.map_or(0, Vec::len);

        stats.push(WeeklyStats {
            week: week_id,
            volume,
            total_workouts,
        });
        current_week_start += chrono::Duration::weeks(1);
    }

    Ok(stats)
}
