//! Error handling for BenchKit
//!
//! Provides error types for all layers of the application:
//! - Parameter errors (validation of the bench geometry inputs)
//! - Layout issues (recoverable numeric edge cases resolved by fallback)
//!
//! All error types use `thiserror` for ergonomic error handling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parameter validation error type
///
/// Raised when a geometry parameter violates its domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Value is NaN or infinite
    #[error("Parameter '{name}' must be finite, got {value}")]
    NotFinite {
        /// The parameter name.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// Value must be strictly positive
    #[error("Parameter '{name}' must be > 0, got {value}")]
    NotPositive {
        /// The parameter name.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// Value must not be negative
    #[error("Parameter '{name}' must be >= 0, got {value}")]
    Negative {
        /// The parameter name.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// Value is outside an open interval
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        /// The parameter name.
        name: String,
        /// The offending value.
        value: f64,
        /// Exclusive lower bound.
        min: f64,
        /// Exclusive upper bound.
        max: f64,
    },
}

impl ParameterError {
    /// Checks that `value` is finite.
    pub fn check_finite(name: &str, value: f64) -> std::result::Result<(), ParameterError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(ParameterError::NotFinite {
                name: name.to_string(),
                value,
            })
        }
    }

    /// Checks that `value` is finite and strictly positive.
    pub fn check_positive(name: &str, value: f64) -> std::result::Result<(), ParameterError> {
        Self::check_finite(name, value)?;
        if value > 0.0 {
            Ok(())
        } else {
            Err(ParameterError::NotPositive {
                name: name.to_string(),
                value,
            })
        }
    }

    /// Checks that `value` is finite and not negative.
    pub fn check_non_negative(name: &str, value: f64) -> std::result::Result<(), ParameterError> {
        Self::check_finite(name, value)?;
        if value >= 0.0 {
            Ok(())
        } else {
            Err(ParameterError::Negative {
                name: name.to_string(),
                value,
            })
        }
    }

    /// Checks that `value` lies strictly between `min` and `max`.
    pub fn check_open_range(
        name: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> std::result::Result<(), ParameterError> {
        Self::check_finite(name, value)?;
        if value > min && value < max {
            Ok(())
        } else {
            Err(ParameterError::OutOfRange {
                name: name.to_string(),
                value,
                min,
                max,
            })
        }
    }
}

/// Recoverable layout condition
///
/// None of these abort a layout pass. Each one is resolved by a defined
/// fallback and may be recorded on the resulting layout for inspection.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutIssue {
    /// A divisor was zero (or not usable); the dependent quantity fell back to zero
    #[error("Division undefined for {quantity}; using 0")]
    DivisionUndefined {
        /// The quantity that fell back to zero.
        quantity: String,
    },

    /// The burden is so small relative to the influence length that the
    /// candidate count was capped
    #[error("Hole count {requested:.0} exceeds {cap}; capped")]
    HoleCountCapped {
        /// The uncapped candidate count.
        requested: f64,
        /// The applied cap.
        cap: usize,
    },

    /// A candidate hole position fell at or below the tolerance and was dropped
    #[error("Hole candidate k={k} at x={x:.4} dropped")]
    DegenerateHolePosition {
        /// The 1-based candidate multiplier.
        k: usize,
        /// The computed position.
        x: f64,
    },

    /// A hole's charge or water length was outside `[0, length]` and was clamped
    #[error("Hole #{hole} {field} = {value} outside [0, {length}]; clamped")]
    InvalidSegmentRange {
        /// The 1-based hole number.
        hole: usize,
        /// The offending field name.
        field: String,
        /// The value supplied.
        value: f64,
        /// The hole length it was checked against.
        length: f64,
    },
}

/// Main error type for BenchKit
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a parameter error
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
