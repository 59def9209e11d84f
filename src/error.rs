//! Error types for the race tracker
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Race tracker error types
#[derive(Error, Debug)]
pub enum Error {
    /// Distance outside the accepted range
    #[error("Invalid distance: {0} km\nDistance must be a finite value between 0 and 100 km")]
    InvalidDistance(f64),

    /// Finishing position below 1
    #[error("Invalid position: {0}\nFinal position must be 1 or greater")]
    InvalidPosition(i64),

    /// Age category label not recognised
    #[error("Unknown age category: {0:?}\nExpected one of: Junior (8-12), Teen (13-16), Youth (17-19)")]
    UnknownAgeCategory(String),

    /// Race date could not be parsed
    #[error("Invalid race date: {0:?}\nExpected format YYYY-MM-DD")]
    InvalidDate(String),

    /// Completion time could not be parsed
    #[error("Invalid completion time: {0:?}\nExpected format HH:MM or HH:MM:SS")]
    InvalidTime(String),

    /// Dashboard configuration rejected
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Arrow table construction error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
