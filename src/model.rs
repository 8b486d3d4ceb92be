// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Workout records, validated construction requests, and weekly rollups.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted workout entry.
///
/// `id` and `created_at` are assigned by the store at creation and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    pub date: NaiveDate,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub rpe: f64,
    pub created_at: NaiveDate,
}

impl Workout {
    /// Training volume for this entry: `weight * sets * reps`.
    ///
    /// Computed on demand; never stored.
    pub fn volume(&self) -> f64 {
        self.weight * (self.sets as f64) * (self.reps as f64)
    }
}

/// Fields for creating or replacing a workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRequest {
    pub date: NaiveDate,
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
    pub rpe: f64,
}

impl WorkoutRequest {
    /// Check all field bounds, surfacing the first violation.
    ///
    /// Runs before any persistence attempt.
    pub fn validate(&self) -> Result<()> {
        let exercise = self.exercise.trim();
        if exercise.is_empty() {
            return Err(Error::Validation("Exercise name is required".to_string()));
        }
        if exercise.chars().count() < 2 || exercise.chars().count() > 100 {
            return Err(Error::Validation(
                "Exercise name must be between 2 and 100 characters".to_string(),
            ));
        }
        if self.sets < 1 {
            return Err(Error::Validation("Sets must be at least 1".to_string()));
        }
        if self.sets > 50 {
            return Err(Error::Validation("Sets cannot exceed 50".to_string()));
        }
        if self.reps < 1 {
            return Err(Error::Validation("Reps must be at least 1".to_string()));
        }
        if self.reps > 1000 {
            return Err(Error::Validation("Reps cannot exceed 1000".to_string()));
        }
        if self.weight <= 0.0 {
            return Err(Error::Validation(
                "Weight must be greater than 0".to_string(),
            ));
        }
        if self.weight > 1000.0 {
            return Err(Error::Validation("Weight cannot exceed 1000kg".to_string()));
        }
        if self.rpe < 1.0 {
            return Err(Error::Validation("RPE must be at least 1".to_string()));
        }
        if self.rpe > 10.0 {
            return Err(Error::Validation("RPE cannot exceed 10".to_string()));
        }
        Ok(())
    }
}

/// Aggregate statistics for one ISO week.
///
/// Computed fresh per request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    /// Week identifier in `YYYY-Wnn` format.
    pub week: String,
    /// Sum of constituent workout volumes; 0 for weeks with no workouts.
    pub volume: f64,
    /// Number of workouts logged in the week.
    pub total_workouts: usize,
}
