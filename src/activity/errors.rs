//! activity::errors — error type for the windowed bout aggregator.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias returned by activity-bout
//! routines, together with a conversion to Python exceptions for the
//! PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`BoutResult`] and [`BoutError`] as the canonical result and
//!   error types for intensity-series validation, bout parameters, and
//!   boutmetric selection.
//! - Attach human-readable `Display` messages that name the offending
//!   parameter and value.
//! - Implement `From<BoutError> for PyErr` (behind `python-bindings`) that
//!   maps every variant to `PyValueError`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every error is raised before any bout computation starts; a routine
//!   that returns `Err` has produced no partial result.
//! - "No qualifying bouts" is never an error; it yields zero bouts.
//!
//! Conventions
//! -----------
//! - Parameter names in messages use the accelerometry vocabulary
//!   (`threshold`, `window_length`, `min_bout_duration`, `bout_criterion`,
//!   `boutmetric`) so they line up with the Python keyword arguments.
//! - Indices are 0-based.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload. Validation paths are exercised in `validation` and `params`.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type BoutResult<T> = Result<T, BoutError>;

/// BoutError — failure conditions for activity-bout aggregation.
///
/// Variants
/// --------
/// - `EmptySignal`
///   The intensity series has zero windows.
/// - `NonFiniteSample { index, value }`
///   An intensity value is NaN or ±∞ and cannot be classified.
/// - `InvalidParameter { name, value, reason }`
///   A configuration scalar is out of range (non-positive window length,
///   negative duration, criterion outside `(0, 1]`, boutmetric code outside
///   `1..=5`, ...).
/// - `UnknownBoutMetric { name, reason }`
///   A boutmetric name that matches neither a code nor a variant name.
///
/// Notes
/// -----
/// - Clone + PartialEq, so tests can match on exact variants.
#[derive(Debug, Clone, PartialEq)]
pub enum BoutError {
    //------ Input validation errors ------
    EmptySignal,
    NonFiniteSample { index: usize, value: f64 },

    //------ Configuration errors ------
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },
    UnknownBoutMetric { name: String, reason: &'static str },
}

impl std::error::Error for BoutError {}

impl std::fmt::Display for BoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoutError::EmptySignal => {
                write!(f, "Intensity series is empty; at least one window is required.")
            }
            BoutError::NonFiniteSample { index, value } => {
                write!(f, "Intensity at window {index} is non-finite: {value}")
            }
            BoutError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid {name}: {value}. {reason}")
            }
            BoutError::UnknownBoutMetric { name, reason } => {
                write!(f, "Unknown boutmetric '{name}'. {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<BoutError> for PyErr {
    fn from(err: BoutError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
