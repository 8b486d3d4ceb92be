// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing and command dispatch.

use crate::model::WorkoutRequest;
use crate::{commands, config, query};
use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use chrono::{NaiveDate, Utc};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value = "liftlog.db", global = true)]
    database: Utf8PathBuf,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: Utf8PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Log a new workout
    Add {
        /// Workout date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Exercise name
        #[arg(short, long)]
        exercise: String,

        /// Number of sets
        #[arg(short, long)]
        sets: u32,

        /// Reps per set
        #[arg(short, long)]
        reps: u32,

        /// Weight used
        #[arg(short, long)]
        weight: f64,

        /// Rating of perceived exertion (1-10)
        #[arg(long)]
        rpe: f64,
    },

    /// List workouts, optionally filtered
    List {
        /// Only workouts in this ISO week (e.g. 2024-W15)
        #[arg(short, long)]
        week: Option<String>,

        /// Only workouts whose exercise name contains this text
        #[arg(short, long)]
        exercise: Option<String>,

        /// Only workouts from the last N days
        #[arg(long)]
        days: Option<i64>,
    },

    /// Show a single workout by id
    Show { id: i64 },

    /// Replace a workout's fields
    Update {
        id: i64,

        /// Workout date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Exercise name
        #[arg(short, long)]
        exercise: String,

        /// Number of sets
        #[arg(short, long)]
        sets: u32,

        /// Reps per set
        #[arg(short, long)]
        reps: u32,

        /// Weight used
        #[arg(short, long)]
        weight: f64,

        /// Rating of perceived exertion (1-10)
        #[arg(long)]
        rpe: f64,
    },

    /// Delete a workout by id
    Delete { id: i64 },

    /// Show weekly training statistics
    Stats {
        /// Lookback window, e.g. "last4w" or a bare week count
        #[arg(short, long)]
        range: Option<String>,
    },

    /// Generate charts from logged workouts
    Charts {
        /// Output directory for charts
        #[arg(short, long, default_value = "charts")]
        output: Utf8PathBuf,

        /// Lookback window, e.g. "last12w"
        #[arg(short, long)]
        range: Option<String>,
    },

    /// Export workout data to various formats
    Export {
        #[command(subcommand)]
        export_type: ExportType,
    },
}

#[derive(Parser, Debug)]
enum ExportType {
    /// Export to CSV format
    Csv {
        /// Output file path
        #[arg(short, long)]
        output: Utf8PathBuf,

        /// What to export: 'workouts' or 'weekly'
        #[arg(short = 't', long, default_value = "weekly")]
        table: String,

        /// Lookback window for the weekly table
        #[arg(short, long)]
        range: Option<String>,
    },

    /// Export to JSON format
    Json {
        /// Output file path
        #[arg(short, long)]
        output: Utf8PathBuf,

        /// What to export: 'workouts' or 'weekly'
        #[arg(short = 't', long, default_value = "weekly")]
        table: String,

        /// Lookback window for the weekly table
        #[arg(short, long)]
        range: Option<String>,
    },
}

/// Parse arguments and dispatch to the appropriate command.
pub fn dispatch() -> Result<()> {
    let args = Args::parse();
    let config =
        config::Config::load_or_default(&args.config).context("failed to load configuration")?;

    match args.command {
        Command::Add {
            date,
            exercise,
            sets,
            reps,
            weight,
            rpe,
        } => {
            let request = WorkoutRequest {
                date: date.unwrap_or_else(|| Utc::now().date_naive()),
                exercise,
                sets,
                reps,
                weight,
                rpe,
            };
            commands::run_add(&args.database, &request, config.units)?;
        }
        Command::List {
            week,
            exercise,
            days,
        } => {
            commands::run_list(
                &args.database,
                week.as_deref(),
                exercise.as_deref(),
                days,
                config.units,
            )?;
        }
        Command::Show { id } => {
            commands::run_show(&args.database, id, config.units)?;
        }
        Command::Update {
            id,
            date,
            exercise,
            sets,
            reps,
            weight,
            rpe,
        } => {
            let request = WorkoutRequest {
                date,
                exercise,
                sets,
                reps,
                weight,
                rpe,
            };
            commands::run_update(&args.database, id, &request, config.units)?;
        }
        Command::Delete { id } => {
            commands::run_delete(&args.database, id)?;
        }
        Command::Stats { range } => {
            let range = range.unwrap_or_else(|| config.default_range.clone());
            commands::run_stats(&args.database, &range, config.units)?;
        }
        Command::Charts { output, range } => {
            let range = range.unwrap_or_else(|| config.default_range.clone());
            commands::run_charts(&args.database, &output, &range, config.units)?;
        }
        Command::Export { export_type } => {
            let (export_kind, range) = match export_type {
                ExportType::Csv {
                    output,
                    table,
                    range,
                } => (
                    query::ExportKind::Csv {
                        output: output.to_string(),
                        table,
                    },
                    range,
                ),
                ExportType::Json {
                    output,
                    table,
                    range,
                } => (
                    query::ExportKind::Json {
                        output: output.to_string(),
                        table,
                    },
                    range,
                ),
            };
            let range = range.unwrap_or_else(|| config.default_range.clone());
            commands::run_export(&args.database, export_kind, &range)?;
        }
    }

    Ok(())
}
