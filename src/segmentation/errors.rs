//! segmentation::errors — error type for the run-length bout segmenter.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for segmenter configuration,
//! precomputed run boundaries, and bout labelling, with a conversion to
//! Python exceptions for the PyO3-based bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - An empty classification is not an error; it segments to no bouts.
//! - Errors are raised before any merging; no partial result is returned.
//!
//! Conventions
//! -----------
//! - Indices in payloads are 0-based positions in the caller's arrays.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type SegmentResult<T> = Result<T, SegmentError>;

/// SegmentError — failure conditions for run-length segmentation.
///
/// Variants
/// --------
/// - `InvalidParameter { name, value, reason }`
///   Non-finite or out-of-range sample period, separation, or duration.
/// - `RunLengthMismatch { starts, stops }`
///   Precomputed run starts and stops have different lengths.
/// - `MalformedRun { index, start, stop, reason }`
///   Run `index` is empty or reversed, or starts before the previous run
///   stops.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentError {
    //------ Configuration errors ------
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    //------ Run boundary errors ------
    RunLengthMismatch { starts: usize, stops: usize },
    MalformedRun { index: usize, start: usize, stop: usize, reason: &'static str },
}

impl std::error::Error for SegmentError {}

impl std::fmt::Display for SegmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentError::InvalidParameter { name, value, reason } => {
                write!(f, "Invalid {name}: {value}. {reason}")
            }
            SegmentError::RunLengthMismatch { starts, stops } => {
                write!(f, "Got {starts} run starts but {stops} run stops; lengths must match.")
            }
            SegmentError::MalformedRun { index, start, stop, reason } => {
                write!(f, "Run {index} [{start}, {stop}) is malformed. {reason}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<SegmentError> for PyErr {
    fn from(err: SegmentError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
