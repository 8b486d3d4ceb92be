// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chart generation for training progress visualization.

use crate::config::Units;
use crate::model::WeeklyStats;
use crate::{aggregate, week};
use anyhow::{Context, Result};
use camino::Utf8Path;
use chrono::NaiveDate;
use plotters::coord::types::RangedCoordi64;
use plotters::prelude::*;
use rusqlite::Connection;

const CHART_WIDTH: u32 = 1600;
const CHART_HEIGHT: u32 = 900;

// Typography - Inter font family
const FONT_FAMILY: &str = "Inter";
const TITLE_SIZE: i32 = 24;
const AXIS_SIZE: i32 = 14;

// Colors - Modern, minimal palette
const BACKGROUND: RGBColor = RGBColor(250, 250, 252); // Off-white
const TEXT_PRIMARY: RGBColor = RGBColor(15, 23, 42); // Slate 900
const TEXT_SECONDARY: RGBColor = RGBColor(100, 116, 139); // Slate 500
const GRID_COLOR: RGBColor = RGBColor(226, 232, 240); // Slate 200
const ACCENT_BLUE: RGBColor = RGBColor(59, 130, 246); // Blue 500
const ACCENT_GREEN: RGBColor = RGBColor(34, 197, 94); // Green 500

/// Generate all charts for the given lookback window.
pub fn generate_all_charts(
    conn: &Connection,
    output_dir: &Utf8Path,
    range_spec: &str,
    units: Units,
) -> Result<()> {
    std::fs::create_dir_all(output_dir.as_std_path())
        .with_context(|| format!("failed to create output directory at {}", output_dir))?;

    println!("\nGenerating charts...");

    let stats = aggregate::weekly_stats(conn, range_spec)?;
    let series = weekly_series(&stats)?;

    generate_weekly_volume(&series, &output_dir.join("weekly-volume.png"), units)?;
    generate_weekly_workouts(&series, &output_dir.join("weekly-workouts.png"))?;

    println!("  Charts saved to {}", output_dir);
    Ok(())
}

/// Resolve each week identifier to its Monday for use as an x coordinate.
fn weekly_series(stats: &[WeeklyStats]) -> Result<Vec<(NaiveDate, &WeeklyStats)>> {
    stats
        .iter()
        .map(|row| {
            let (week_start, _) = week::week_bounds(&row.week)?;
            Ok((week_start, row))
        })
        .collect()
}

/// Create a styled drawing area with background.
fn create_drawing_area(
    output_path: &Utf8Path,
) -> Result<DrawingArea<BitMapBackend<'_>, plotters::coord::Shift>> {
    let root = BitMapBackend::new(output_path.as_std_path(), (CHART_WIDTH, CHART_HEIGHT))
        .into_drawing_area();
    root.fill(&BACKGROUND)?;
    Ok(root)
}

/// Configure common mesh styling for date-based charts.
fn configure_date_mesh<DB: DrawingBackend>(
    chart: &mut ChartContext<DB, Cartesian2d<RangedDate<NaiveDate>, RangedCoordi64>>,
) -> Result<()>
where
    <DB as DrawingBackend>::ErrorType: 'static,
{
    chart
        .configure_mesh()
        .bold_line_style(&GRID_COLOR.mix(0.3))
        .light_line_style(&TRANSPARENT)
        .x_labels(8)
        .y_labels(6)
        .x_label_style((FONT_FAMILY, AXIS_SIZE).into_font().color(&TEXT_SECONDARY))
        .y_label_style((FONT_FAMILY, AXIS_SIZE).into_font().color(&TEXT_SECONDARY))
        .x_label_formatter(&|date| week::week_id(*date))
        .disable_x_mesh()
        .draw()?;
    Ok(())
}

/// Generate the weekly training volume chart (area + line).
fn generate_weekly_volume(
    series: &[(NaiveDate, &WeeklyStats)],
    output_path: &Utf8Path,
    units: Units,
) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    let data: Vec<(NaiveDate, i64)> = series
        .iter()
        .map(|(week_start, row)| (*week_start, row.volume.round() as i64))
        .collect();

    let root = create_drawing_area(output_path)?;

    let min_date = data.first().unwrap().0;
    let max_date = data.last().unwrap().0;
    let max_volume = data.iter().map(|(_, v)| *v).max().unwrap().max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Weekly Training Volume ({})", units.label()),
            (FONT_FAMILY, TITLE_SIZE).into_font().color(&TEXT_PRIMARY),
        )
        .margin(60)
        .x_label_area_size(70)
        .y_label_area_size(100)
        .build_cartesian_2d(min_date..max_date, 0i64..max_volume)?;

    configure_date_mesh(&mut chart)?;

    chart.draw_series(AreaSeries::new(
        data.iter().map(|(d, v)| (*d, *v)),
        0,
        ACCENT_BLUE.mix(0.15),
    ))?;

    chart.draw_series(LineSeries::new(
        data.iter().map(|(d, v)| (*d, *v)),
        ShapeStyle {
            color: ACCENT_BLUE.to_rgba(),
            filled: true,
            stroke_width: 3,
        },
    ))?;

    root.present()?;
    println!("  - weekly-volume.png");
    Ok(())
}

/// Generate the weekly workout count chart (line).
fn generate_weekly_workouts(
    series: &[(NaiveDate, &WeeklyStats)],
    output_path: &Utf8Path,
) -> Result<()> {
    if series.is_empty() {
        return Ok(());
    }

    let data: Vec<(NaiveDate, i64)> = series
        .iter()
        .map(|(week_start, row)| (*week_start, row.total_workouts as i64))
        .collect();

    let root = create_drawing_area(output_path)?;

    let min_date = data.first().unwrap().0;
    let max_date = data.last().unwrap().0;
    let max_count = data.iter().map(|(_, v)| *v).max().unwrap().max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Workouts per Week",
            (FONT_FAMILY, TITLE_SIZE).into_font().color(&TEXT_PRIMARY),
        )
        .margin(60)
        .x_label_area_size(70)
        .y_label_area_size(100)
        .build_cartesian_2d(min_date..max_date, 0i64..max_count)?;

    configure_date_mesh(&mut chart)?;

    chart.draw_series(LineSeries::new(
        data.iter().map(|(d, v)| (*d, *v)),
        ShapeStyle {
            color: ACCENT_GREEN.to_rgba(),
            filled: true,
            stroke_width: 3,
        },
    ))?;

    root.present()?;
    println!("  - weekly-workouts.png");
    Ok(())
}
