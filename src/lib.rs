// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout logging backend with weekly training statistics.

pub mod aggregate;
pub mod charts;
pub mod commands;
pub mod config;
pub mod db;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod query;
pub mod week;
pub mod workouts;
