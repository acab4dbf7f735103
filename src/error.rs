//! Error types
//!
//! The widget cores are total over their typed inputs, so errors only surface
//! for caller contract violations and configuration problems.

use chrono::NaiveDate;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by widgetkit
#[derive(Debug, Error)]
pub enum Error {
    /// A pagination value was NaN or infinite
    #[error("pagination {field} must be a finite number, got {value}")]
    NonFinitePagination { field: &'static str, value: f64 },

    /// Date bounds with `min` after `max`
    #[error("date bounds are inverted: min {min} is after max {max}")]
    InvertedBounds { min: NaiveDate, max: NaiveDate },

    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
