// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types shared by the feed client, storage and query engine.

/// Library error type.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Timestamp, duration or pace conversion failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Date string matched none of the accepted templates.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Search pattern is not a valid regular expression.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Entry not found: {0}")]
    NotFound(i64),

    #[error("Dailymile API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, FeedError>;
