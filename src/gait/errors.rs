//! gait::errors — error type for gait event validation and metrics.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for [`GaitEvents`](super::GaitEvents)
//! construction and per-event metric computation, wrapping segmentation
//! failures raised while labelling events from bout intervals.
//!
//! Conventions
//! -----------
//! - Indices in payloads are 0-based event positions.
//! - Segmentation failures are carried unchanged in `GaitError::Segment`.

use crate::segmentation::SegmentError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type GaitResult<T> = Result<T, GaitError>;

/// GaitError — failure conditions for gait event metrics.
///
/// Variants
/// --------
/// - `InvalidParameter { name, value, reason }`
///   Non-finite or non-positive sample period or leg length.
/// - `LengthMismatch { name, expected, got }`
///   An event array does not match the length of the initial contacts.
/// - `EventOrder { index, reason }`
///   Event `index` violates `IC <= FC opp foot <= FC`.
/// - `BoutOrder { index }`
///   Bout numbers decrease at event `index`.
/// - `Segment(SegmentError)`
///   The bout intervals used for labelling are malformed.
#[derive(Debug, Clone, PartialEq)]
pub enum GaitError {
    //------ Configuration errors ------
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    //------ Event validation errors ------
    LengthMismatch { name: &'static str, expected: usize, got: usize },
    EventOrder { index: usize, reason: &'static str },
    BoutOrder { index: usize },

    //------ Upstream errors ------
    Segment(SegmentError),
}

impl std::error::Error for GaitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GaitError::Segment(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for GaitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GaitError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid {name}: {value}. {reason}")
            }
            GaitError::LengthMismatch { name, expected, got } => {
                write!(f, "'{name}' has {got} events; expected {expected} to match 'IC'.")
            }
            GaitError::EventOrder { index, reason } => {
                write!(f, "Gait event {index} is out of order. {reason}")
            }
            GaitError::BoutOrder { index } => {
                write!(f, "Bout numbers decrease at event {index}; they must be non-decreasing.")
            }
            GaitError::Segment(err) => write!(f, "Bout intervals are invalid: {err}"),
        }
    }
}

impl From<SegmentError> for GaitError {
    fn from(err: SegmentError) -> Self {
        GaitError::Segment(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<GaitError> for PyErr {
    fn from(err: GaitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
