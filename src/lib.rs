//! rust_wearables — bout segmentation and aggregation for wearable-sensor
//! time series, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the bout engines to Python via the `_rust_wearables` extension
//! module. When the `python-bindings` feature is enabled, this module defines
//! the Python-facing functions, classes, and submodules used by the
//! `rust_wearables` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`activity`, `segmentation`, `gait`,
//!   `intervals`) as the public crate surface.
//! - Define `#[pyfunction]`/`#[pyclass]` wrappers and the `#[pymodule]`
//!   initializer for the `_rust_wearables` Python extension.
//! - Create and register Python submodules (`activity`, `gait`) under
//!   `rust_wearables` so that dot-notation imports work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All bout logic is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Python callers use the accelerometry conventions of established
//!   toolkits: window lengths in seconds, bout durations in minutes, totals
//!   in minutes, and gait times in seconds.
//!
//! Conventions
//! -----------
//! - Intervals cross the boundary as `(start, stop)` tuples of 0-based,
//!   half-open sample indices.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` (`ValueError`) values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_rust_wearables` and wraps its
//!   functions in user-facing APIs.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by the
//!   integration tests under `tests/`.
//! - The PyO3 layer is exercised from Python.

pub mod activity;
pub mod gait;
pub mod intervals;
pub mod segmentation;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::IntoPyArray;

#[cfg(feature = "python-bindings")]
use pyo3::{
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use crate::{
    activity::{BoutParams, BoutSummary, IntensitySeries, detect_bouts},
    gait::{GaitEvents, event_metrics as compute_event_metrics},
    segmentation::{BoutLabels, SegmentOptions, merge_runs, validate_runs},
    utils::{
        extract_bool_vec, extract_bout_metric, extract_f64_array, extract_f64_vec,
        extract_index_vec, intervals_from_pairs, intervals_to_pairs,
    },
};

/// ActivityBouts — Python-facing result of the windowed bout aggregator.
///
/// Purpose
/// -------
/// Run bout detection once on an acceleration-metric series and expose the
/// total as well as the individual bouts to Python.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `ActivityBouts(accm, mvpa_thresh, wlen, boutdur, boutcrit, closedbout, boutmetric=1)`:
/// - `accm`: array-like of `f64`
///   Per-window acceleration metric (e.g. ENMO), non-empty and finite.
/// - `mvpa_thresh`: `f64`
///   Intensity at or above which a window is active.
/// - `wlen`: `f64`
///   Window length in seconds.
/// - `boutdur`: `f64`
///   Minimum bout duration in minutes.
/// - `boutcrit`: `f64`
///   Active-fraction criterion in `(0, 1]`.
/// - `closedbout`: `bool`
///   Boundary rule.
/// - `boutmetric`: `int | str`
///   Code `1..=5` or metric name.
///
/// Fields
/// ------
/// - `inner`: [`BoutSummary`]
///   Bouts over window indices, bridges, and the window length in minutes.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_wearables.activity")]
pub struct ActivityBouts {
    inner: BoutSummary,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl ActivityBouts {
    #[new]
    #[pyo3(
        signature = (accm, mvpa_thresh, wlen, boutdur, boutcrit, closedbout, boutmetric = None),
        text_signature = "(accm, mvpa_thresh, wlen, boutdur, boutcrit, closedbout, /, boutmetric=1)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn new<'py>(
        py: Python<'py>, accm: &Bound<'py, PyAny>, mvpa_thresh: f64, wlen: f64, boutdur: f64,
        boutcrit: f64, closedbout: bool, boutmetric: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<Self> {
        let params = BoutParams::from_epoch_minutes(mvpa_thresh, wlen, boutdur, boutcrit, closedbout)?;
        let metric = match boutmetric {
            Some(raw) => extract_bout_metric(raw)?,
            None => activity::BoutMetric::GrowingSpan,
        };
        let arr = extract_f64_array(py, accm)?;
        let series = match arr.as_slice() {
            Ok(values) => IntensitySeries::from_slice(values)?,
            Err(_) => IntensitySeries::new(arr.as_array().to_owned())?,
        };

        Ok(ActivityBouts { inner: detect_bouts(&series, &params, metric) })
    }

    /// Total bout time in minutes.
    #[getter]
    pub fn total_minutes(&self) -> f64 {
        self.inner.total_time()
    }

    /// Bouts as `(start, stop)` window-index tuples.
    #[getter]
    pub fn bouts(&self) -> Vec<(usize, usize)> {
        intervals_to_pairs(&self.inner.intervals())
    }

    /// Window indices credited as bridges (boutmetric 5 only).
    #[getter]
    pub fn bridges(&self) -> Vec<usize> {
        self.inner.bridges.clone()
    }

    #[getter]
    pub fn credited_windows(&self) -> usize {
        self.inner.credited_windows()
    }
}

/// Total MVPA bout time in minutes.
///
/// Thin wrapper over [`ActivityBouts`] returning only `total_minutes`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (accm, mvpa_thresh, wlen, boutdur, boutcrit, closedbout, boutmetric = None),
    text_signature = "(accm, mvpa_thresh, wlen, boutdur, boutcrit, closedbout, /, boutmetric=1)"
)]
#[allow(clippy::too_many_arguments)]
fn get_activity_bouts<'py>(
    py: Python<'py>, accm: &Bound<'py, PyAny>, mvpa_thresh: f64, wlen: f64, boutdur: f64,
    boutcrit: f64, closedbout: bool, boutmetric: Option<&Bound<'py, PyAny>>,
) -> PyResult<f64> {
    let bouts =
        ActivityBouts::new(py, accm, mvpa_thresh, wlen, boutdur, boutcrit, closedbout, boutmetric)?;
    Ok(bouts.total_minutes())
}

/// Segment a boolean gait classification into bouts.
///
/// `dt`, `max_separation`, and `min_time` are in seconds. Returns
/// `(start, stop)` sample-index tuples.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(mask, dt, max_separation, min_time, /)")]
fn segment_bouts<'py>(
    mask: &Bound<'py, PyAny>, dt: f64, max_separation: f64, min_time: f64,
) -> PyResult<Vec<(usize, usize)>> {
    let options = SegmentOptions::new(dt, max_separation, min_time)?;
    let mask = extract_bool_vec(mask, "mask")?;
    Ok(intervals_to_pairs(&segmentation::segment_bouts(&mask, &options)))
}

/// Merge precomputed gait runs given as `starts`/`stops` into bouts.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(starts, stops, dt, max_separation, min_time, /)")]
fn get_gait_bouts<'py>(
    starts: &Bound<'py, PyAny>, stops: &Bound<'py, PyAny>, dt: f64, max_separation: f64,
    min_time: f64,
) -> PyResult<Vec<(usize, usize)>> {
    let options = SegmentOptions::new(dt, max_separation, min_time)?;
    let starts = extract_index_vec(starts, "starts")?;
    let stops = extract_index_vec(stops, "stops")?;
    Ok(intervals_to_pairs(&merge_runs(&starts, &stops, &options)?))
}

/// Bout number (1-based) of each event, or `None` outside every bout.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(events, bouts, /)")]
fn bout_numbers<'py>(
    events: &Bound<'py, PyAny>, bouts: Vec<(usize, usize)>,
) -> PyResult<Vec<Option<usize>>> {
    let intervals = intervals_from_pairs(&bouts);
    validate_runs(&intervals)?;
    let events = extract_index_vec(events, "events")?;
    Ok(BoutLabels::assign(&events, &intervals).into_vec())
}

/// Per-event gait metrics keyed by metric name.
///
/// Times are in seconds, lengths in the unit of `leg_length`, cadence in
/// steps per minute. Entries pairing events across bouts are NaN.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (ic, fc_opp_foot, fc, bout_n, dt, delta_h = None, leg_length = None),
    text_signature = "(ic, fc_opp_foot, fc, bout_n, dt, /, delta_h=None, leg_length=None)"
)]
#[allow(clippy::too_many_arguments)]
fn event_metrics<'py>(
    py: Python<'py>, ic: &Bound<'py, PyAny>, fc_opp_foot: &Bound<'py, PyAny>,
    fc: &Bound<'py, PyAny>, bout_n: &Bound<'py, PyAny>, dt: f64,
    delta_h: Option<&Bound<'py, PyAny>>, leg_length: Option<f64>,
) -> PyResult<Bound<'py, PyDict>> {
    let delta_h = delta_h.map(|raw| extract_f64_vec(py, raw, "delta_h")).transpose()?;
    let events = GaitEvents::new(
        extract_index_vec(ic, "ic")?,
        extract_index_vec(fc_opp_foot, "fc_opp_foot")?,
        extract_index_vec(fc, "fc")?,
        extract_index_vec(bout_n, "bout_n")?,
        delta_h,
    )?;

    let out = PyDict::new(py);
    for (metric, values) in compute_event_metrics(&events, dt, leg_length)? {
        out.set_item(metric.key(), values.into_pyarray(py))?;
    }
    Ok(out)
}

/// _rust_wearables — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_rust_wearables` Python module and register its `activity`
/// and `gait` submodules used by the public `rust_wearables` package.
///
/// Errors
/// ------
/// - `PyErr`
///   If creating submodules or manipulating `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_wearables<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let activity_mod = PyModule::new(_py, "activity")?;
    let gait_mod = PyModule::new(_py, "gait")?;
    activity_module(_py, m, &activity_mod)?;
    gait_module(_py, m, &gait_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?.getattr("modules")?.set_item("rust_wearables.activity", activity_mod)?;
    _py.import("sys")?.getattr("modules")?.set_item("rust_wearables.gait", gait_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn activity_module<'py>(
    _py: Python, rust_wearables: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<ActivityBouts>()?;
    m.add_function(wrap_pyfunction!(get_activity_bouts, m)?)?;
    rust_wearables.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn gait_module<'py>(
    _py: Python, rust_wearables: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(segment_bouts, m)?)?;
    m.add_function(wrap_pyfunction!(get_gait_bouts, m)?)?;
    m.add_function(wrap_pyfunction!(bout_numbers, m)?)?;
    m.add_function(wrap_pyfunction!(event_metrics, m)?)?;
    rust_wearables.add_submodule(m)?;
    Ok(())
}
