//! activity::params — validated configuration for bout qualification.
//!
//! Purpose
//! -------
//! Bundle the scalar parameter surface of the windowed bout aggregator
//! (`threshold`, `window_length`, `min_bout_duration`, `bout_criterion`,
//! `closed_bout`) into one validated value, and derive the quantities the
//! bout rules work with (minimum bout length in windows, effective
//! criterion slope).
//!
//! Key behaviors
//! -------------
//! - [`BoutParams::new`] validates all scalars via
//!   [`validate_bout_params`](super::validation::validate_bout_params).
//! - [`BoutParams::from_epoch_minutes`] accepts the accelerometry convention
//!   of second-long windows and minute-long bouts, and reports totals in
//!   minutes.
//! - [`BoutParams::min_bout_windows`] converts the minimum duration into a
//!   window count `n = max(1, ceil(min_bout_duration / window_length))`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Once constructed, every field satisfies the constraints documented in
//!   `validation`; the rules never re-check them.
//! - `window_length` and `min_bout_duration` share one time unit, and the
//!   aggregate total is reported in that unit.
//!
//! Conventions
//! -----------
//! - There are no defaults: every qualification-relevant value is passed
//!   explicitly so nothing changes bout semantics silently.

use crate::activity::{errors::BoutResult, validation::validate_bout_params};

/// Absolute slack applied to the duration/window ratio before rounding up,
/// so that e.g. `1 min / (5 s / 60)` yields 12 windows rather than 13.
const WINDOW_COUNT_TOL: f64 = 1e-9;

/// Slack subtracted from the bout criterion so that spans sitting exactly on
/// the criterion (e.g. 4 of 5 windows at 0.8) qualify despite rounding.
pub(crate) const CRITERION_TOL: f64 = 1e-9;

/// `BoutParams` — validated bout-qualification settings.
///
/// Fields
/// ------
/// - `threshold`: intensity at or above which a window is active.
/// - `window_length`: duration of one intensity window.
/// - `min_bout_duration`: minimum bout duration, same unit as `window_length`.
/// - `bout_criterion`: minimum active fraction in `(0, 1]`.
/// - `closed_bout`: when `true`, bouts are trimmed to start and end on active
///   windows and must span at least `min_bout_windows()`; when `false`, the
///   full qualifying span is credited and spans touching the recording edges
///   are exempt from the minimum length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoutParams {
    threshold: f64,
    window_length: f64,
    min_bout_duration: f64,
    bout_criterion: f64,
    closed_bout: bool,
}

impl BoutParams {
    /// Construct validated bout parameters.
    ///
    /// Parameters
    /// ----------
    /// - `threshold`: `f64`
    ///   Finite intensity cutoff (`mvpa_thresh`).
    /// - `window_length`: `f64`
    ///   Finite, strictly positive window length.
    /// - `min_bout_duration`: `f64`
    ///   Finite, non-negative minimum bout duration in the unit of
    ///   `window_length`.
    /// - `bout_criterion`: `f64`
    ///   Active-fraction criterion in `(0, 1]`.
    /// - `closed_bout`: `bool`
    ///   Boundary rule; see the type-level docs.
    ///
    /// Errors
    /// ------
    /// - `BoutError::InvalidParameter` for the first violated constraint.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_wearables::activity::BoutParams;
    /// let params = BoutParams::new(0.1, 5.0, 10.0, 0.8, false).unwrap();
    /// assert_eq!(params.min_bout_windows(), 2);
    /// ```
    pub fn new(
        threshold: f64, window_length: f64, min_bout_duration: f64, bout_criterion: f64,
        closed_bout: bool,
    ) -> BoutResult<Self> {
        validate_bout_params(threshold, window_length, min_bout_duration, bout_criterion)?;
        Ok(BoutParams { threshold, window_length, min_bout_duration, bout_criterion, closed_bout })
    }

    /// Construct parameters from window seconds and bout minutes.
    ///
    /// The resulting `window_length` is expressed in minutes, so totals from
    /// [`BoutSummary::total_time`](super::bout::BoutSummary::total_time) are
    /// minutes. With `wlen_seconds = 5` and `boutdur_minutes = 1` the bout
    /// spans 12 windows.
    ///
    /// Errors
    /// ------
    /// - `BoutError::InvalidParameter` exactly as in [`BoutParams::new`];
    ///   `wlen_seconds` is checked under the name `window_length`.
    pub fn from_epoch_minutes(
        threshold: f64, wlen_seconds: f64, boutdur_minutes: f64, bout_criterion: f64,
        closed_bout: bool,
    ) -> BoutResult<Self> {
        validate_bout_params(threshold, wlen_seconds, boutdur_minutes, bout_criterion)?;
        BoutParams::new(threshold, wlen_seconds / 60.0, boutdur_minutes, bout_criterion, closed_bout)
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn window_length(&self) -> f64 {
        self.window_length
    }

    pub fn min_bout_duration(&self) -> f64 {
        self.min_bout_duration
    }

    pub fn bout_criterion(&self) -> f64 {
        self.bout_criterion
    }

    pub fn closed_bout(&self) -> bool {
        self.closed_bout
    }

    /// Minimum bout length in windows, never less than one.
    pub fn min_bout_windows(&self) -> usize {
        let ratio = self.min_bout_duration / self.window_length - WINDOW_COUNT_TOL;
        ratio.ceil().max(1.0) as usize
    }

    /// Active fraction a span must reach, with rounding slack applied.
    pub(crate) fn effective_criterion(&self) -> f64 {
        self.bout_criterion - CRITERION_TOL
    }
}
