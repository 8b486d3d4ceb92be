// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query output and export functionality for workout data.

use crate::config::Units;
use crate::model::{WeeklyStats, Workout};
use crate::{aggregate, workouts};
use anyhow::{Context, Result};
use camino::Utf8Path;
use rusqlite::Connection;
use std::{fs::File, io::Write};

pub enum ExportKind {
    Csv { output: String, table: String },
    Json { output: String, table: String },
}

/// Print a workout listing as an aligned table.
pub fn print_workouts(workouts: &[Workout], units: Units) {
    if workouts.is_empty() {
        println!("\nNo workouts found.");
        return;
    }

    println!(
        "\n{:<6} {:<12} {:<24} {:>4} {:>5} {:>9} {:>5} {:>11}",
        "ID",
        "Date",
        "Exercise",
        "Sets",
        "Reps",
        format!("Wt ({})", units.label()),
        "RPE",
        "Volume"
    );
    println!("{}", "=".repeat(82));

    for workout in workouts {
        println!(
            "{:<6} {:<12} {:<24} {:>4} {:>5} {:>9} {:>5} {:>11}",
            workout.id,
            workout.date.to_string(),
            workout.exercise,
            workout.sets,
            workout.reps,
            format_decimal(workout.weight),
            format_decimal(workout.rpe),
            format_decimal(workout.volume()),
        );
    }
    println!("\n{} workout(s)", workouts.len());
}

/// Print a weekly stats series as an aligned table.
pub fn print_weekly_stats(stats: &[WeeklyStats], units: Units) {
    println!(
        "\n{:<10} {:>9} {:>15}",
        "Week",
        "Workouts",
        format!("Volume ({})", units.label())
    );
    println!("{}", "=".repeat(36));

    for row in stats {
        println!(
            "{:<10} {:>9} {:>15}",
            row.week,
            row.total_workouts,
            format_decimal(row.volume)
        );
    }
}

pub fn run_export(conn: &Connection, export: ExportKind, range_spec: &str) -> Result<()> {
    match export {
        ExportKind::Csv { output, table } => {
            export_csv(conn, output.as_ref(), &table, range_spec)?
        }
        ExportKind::Json { output, table } => {
            export_json(conn, output.as_ref(), &table, range_spec)?
        }
    }
    Ok(())
}

fn export_csv(conn: &Connection, output: &Utf8Path, table: &str, range_spec: &str) -> Result<()> {
    let mut file = File::create(output.as_std_path())
        .with_context(|| format!("failed to create file at {}", output))?;

    match table {
        "workouts" => {
            writeln!(file, "id,date,exercise,sets,reps,weight,rpe,volume,created_at")?;
            for w in workouts::list_all(conn)? {
                writeln!(
                    file,
                    "{},{},{},{},{},{},{},{},{}",
                    w.id,
                    w.date,
                    csv_escape(&w.exercise),
                    w.sets,
                    w.reps,
                    w.weight,
                    w.rpe,
                    w.volume(),
                    w.created_at
                )?;
            }
        }
        "weekly" => {
            writeln!(file, "week,volume,total_workouts")?;
            for row in aggregate::weekly_stats(conn, range_spec)? {
                writeln!(file, "{},{},{}", row.week, row.volume, row.total_workouts)?;
            }
        }
        _ => anyhow::bail!("Unknown table type: {}. Use 'workouts' or 'weekly'", table),
    }

    println!("Exported to {}.", output);
    Ok(())
}

fn export_json(conn: &Connection, output: &Utf8Path, table: &str, range_spec: &str) -> Result<()> {
    let json = match table {
        "workouts" => serde_json::to_string_pretty(&workouts::list_all(conn)?)?,
        "weekly" => serde_json::to_string_pretty(&aggregate::weekly_stats(conn, range_spec)?)?,
        _ => anyhow::bail!("Unknown table type: {}. Use 'workouts' or 'weekly'", table),
    };

    let mut file = File::create(output.as_std_path())
        .with_context(|| format!("failed to create file at {}", output))?;
    file.write_all(json.as_bytes())?;

    println!("Exported to {}.", output);
    Ok(())
}

/// Quote a CSV field if it contains separators or quotes.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Format a decimal compactly: whole numbers without a trailing ".0".
fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(2400.0), "2400");
        assert_eq!(format_decimal(7.5), "7.5");
        assert_eq!(format_decimal(0.0), "0");
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("Bench Press"), "Bench Press");
        assert_eq!(csv_escape("Clean, Jerk"), "\"Clean, Jerk\"");
        assert_eq!(csv_escape("a\"b"), "\"a\"\"b\"");
    }
}
