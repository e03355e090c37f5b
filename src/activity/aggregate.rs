//! activity::aggregate — public entry points of the windowed bout aggregator.
//!
//! Purpose
//! -------
//! Turn a per-window intensity series into bouts and total bout time under
//! one [`BoutMetric`]. Two layers are offered:
//!
//! - [`detect_bouts`] works on validated inputs ([`IntensitySeries`],
//!   [`BoutParams`]) and cannot fail; it returns the full
//!   [`BoutSummary`] (bouts, bridges, credited windows).
//! - [`aggregate_bout_time`] takes raw scalars and a numeric boutmetric code,
//!   validates everything up front, and returns only the total time.
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 <= total_time <= len × window_length` for every metric and boundary
//!   rule.
//! - Results depend only on the arguments; repeated calls are bit-identical.
//!
//! Conventions
//! -----------
//! - The total is reported in the unit of `window_length`.
//! - A `debug`-level `tracing` event summarizes each detection; nothing is
//!   emitted unless the caller installs a subscriber.

use crate::activity::{
    bout::BoutSummary, data::IntensitySeries, errors::BoutResult, metric::BoutMetric,
    params::BoutParams, scan::ActivityScan,
};

/// Detect bouts in a validated intensity series.
///
/// Parameters
/// ----------
/// - `series`: `&IntensitySeries`
///   Per-window intensities.
/// - `params`: `&BoutParams`
///   Threshold, window length, minimum duration, criterion, boundary rule.
/// - `metric`: `BoutMetric`
///   Qualification rule.
///
/// Returns
/// -------
/// `BoutSummary`
///   Bouts in window order plus bridge windows (bridged metric only).
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_wearables::activity::{BoutMetric, BoutParams, IntensitySeries, detect_bouts};
/// let series = IntensitySeries::new(array![0.0, 0.3, 0.4, 0.5, 0.0, 0.0]).unwrap();
/// let params = BoutParams::new(0.2, 1.0, 2.0, 0.8, true).unwrap();
///
/// let summary = detect_bouts(&series, &params, BoutMetric::GrowingSpan);
/// assert_eq!(summary.bouts.len(), 1);
/// assert_eq!(summary.total_time(), 3.0);
/// ```
pub fn detect_bouts(
    series: &IntensitySeries, params: &BoutParams, metric: BoutMetric,
) -> BoutSummary {
    let scan = ActivityScan::new(series, params);
    let (bouts, bridges) = metric.detect(&scan);

    let summary = BoutSummary {
        bouts,
        bridges,
        window_length: params.window_length(),
        signal_windows: series.len(),
    };

    tracing::debug!(
        metric = %metric,
        min_windows = scan.min_windows(),
        closed = params.closed_bout(),
        windows = summary.signal_windows,
        bouts = summary.bouts.len(),
        bridges = summary.bridges.len(),
        credited = summary.credited_windows(),
        "bout detection finished"
    );
    summary
}

/// Total bout time from raw inputs.
///
/// Parameters
/// ----------
/// - `intensity`: `&[f64]`
///   Per-window intensities; non-empty and finite.
/// - `threshold`, `window_length`, `min_bout_duration`, `bout_criterion`,
///   `closed_bout`
///   As in [`BoutParams::new`].
/// - `variant`: `u8`
///   Boutmetric code in `1..=5`.
///
/// Returns
/// -------
/// `BoutResult<f64>`
///   Total bout time in the unit of `window_length`.
///
/// Errors
/// ------
/// - `BoutError::InvalidParameter` for any out-of-range scalar or an unknown
///   `variant`; parameters are checked before the series.
/// - `BoutError::EmptySignal` / `BoutError::NonFiniteSample` for the series.
///
/// Examples
/// --------
/// ```rust
/// # use rust_wearables::activity::aggregate_bout_time;
/// let total = aggregate_bout_time(&[0.0, 0.5, 0.5, 0.5, 0.0], 0.1, 5.0, 10.0, 0.8, true, 1)
///     .unwrap();
/// assert_eq!(total, 15.0);
/// ```
pub fn aggregate_bout_time(
    intensity: &[f64], threshold: f64, window_length: f64, min_bout_duration: f64,
    bout_criterion: f64, closed_bout: bool, variant: u8,
) -> BoutResult<f64> {
    let params =
        BoutParams::new(threshold, window_length, min_bout_duration, bout_criterion, closed_bout)?;
    let metric = BoutMetric::try_from(variant)?;
    let series = IntensitySeries::from_slice(intensity)?;

    Ok(detect_bouts(&series, &params, metric).total_time())
}
