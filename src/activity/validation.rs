//! activity::validation — shared input guards for bout parameters.
//!
//! Purpose
//! -------
//! Centralize the scalar checks used by [`BoutParams`](super::params::BoutParams)
//! and the flat [`aggregate_bout_time`](super::aggregate::aggregate_bout_time)
//! entry point, so every path reports the same [`BoutError`] for the same
//! violation.
//!
//! Invariants & assumptions
//! ------------------------
//! - `window_length` is finite and strictly positive.
//! - `min_bout_duration` is finite and non-negative.
//! - `bout_criterion` lies in `(0, 1]`.
//! - `threshold` is finite.
//!
//! Conventions
//! -----------
//! - Pure functions with no allocation beyond error construction.

use crate::activity::errors::{BoutError, BoutResult};

/// Validate the scalar configuration of the windowed bout aggregator.
///
/// Parameters
/// ----------
/// - `threshold`: `f64`
///   Intensity cutoff separating active (`>=`) from inactive windows.
/// - `window_length`: `f64`
///   Length of one intensity window; must be finite and `> 0`.
/// - `min_bout_duration`: `f64`
///   Minimum bout duration in the unit of `window_length`; must be finite
///   and `>= 0`.
/// - `bout_criterion`: `f64`
///   Minimum fraction of active windows within a bout; must lie in `(0, 1]`.
///
/// Returns
/// -------
/// `BoutResult<()>`
///   - `Ok(())` when all constraints hold.
///   - `Err(BoutError::InvalidParameter { .. })` naming the first violation,
///     checked in the order above.
///
/// Examples
/// --------
/// ```rust
/// # use rust_wearables::activity::validation::validate_bout_params;
/// # use rust_wearables::activity::BoutError;
/// assert!(validate_bout_params(0.1, 5.0, 60.0, 0.8).is_ok());
///
/// match validate_bout_params(0.1, 0.0, 60.0, 0.8) {
///     Err(BoutError::InvalidParameter { name: "window_length", .. }) => (),
///     other => panic!("expected window_length error, got {other:?}"),
/// }
/// ```
pub fn validate_bout_params(
    threshold: f64, window_length: f64, min_bout_duration: f64, bout_criterion: f64,
) -> BoutResult<()> {
    if !threshold.is_finite() {
        return Err(BoutError::InvalidParameter {
            name: "threshold",
            value: threshold,
            reason: "Must be a finite number.",
        });
    }

    if !window_length.is_finite() || window_length <= 0.0 {
        return Err(BoutError::InvalidParameter {
            name: "window_length",
            value: window_length,
            reason: "Must be finite and > 0.",
        });
    }

    if !min_bout_duration.is_finite() || min_bout_duration < 0.0 {
        return Err(BoutError::InvalidParameter {
            name: "min_bout_duration",
            value: min_bout_duration,
            reason: "Must be finite and >= 0.",
        });
    }

    if !(bout_criterion > 0.0 && bout_criterion <= 1.0) {
        return Err(BoutError::InvalidParameter {
            name: "bout_criterion",
            value: bout_criterion,
            reason: "Must lie in (0, 1].",
        });
    }

    Ok(())
}

/// Validate intensity values and return the number of windows.
///
/// Errors
/// ------
/// - `BoutError::EmptySignal` when `data` is empty.
/// - `BoutError::NonFiniteSample { index, value }` for the first NaN/±∞.
pub fn validate_intensity(data: &[f64]) -> BoutResult<usize> {
    if data.is_empty() {
        return Err(BoutError::EmptySignal);
    }

    for (index, &value) in data.iter().enumerate() {
        if !value.is_finite() {
            return Err(BoutError::NonFiniteSample { index, value });
        }
    }

    Ok(data.len())
}
