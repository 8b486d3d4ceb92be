// Copyright (c) The liftlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for workout storage and statistics operations.

use thiserror::Error;

/// Result type for liftlog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the workout service.
///
/// None of these are transient: they are reported directly to the caller
/// and never retried.
#[derive(Debug, Error)]
pub enum Error {
    /// No workout exists with the requested id.
    #[error("workout not found with id: {0}")]
    NotFound(i64),

    /// A week identifier did not match `YYYY-Wnn` (or bare `YYYY-nn`), or
    /// did not resolve to a valid ISO week.
    #[error("invalid week format: {0}. Expected format: YYYY-Wnn")]
    InvalidWeek(String),

    /// A workout request field was outside its declared bounds.
    #[error("{0}")]
    Validation(String),

    /// Underlying SQLite failure.
    #[error("database error")]
    Db(#[from] rusqlite::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NotFound(42).to_string(),
            "workout not found with id: 42"
        );
        assert_eq!(
            Error::InvalidWeek("2024-X1".to_string()).to_string(),
            "invalid week format: 2024-X1. Expected format: YYYY-Wnn"
        );
    }
}
