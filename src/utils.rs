//! utils — conversions between Python objects and the crate's input types.
//!
//! Every helper accepts NumPy arrays, pandas Series (via `to_numpy`), or
//! plain Python sequences, and reports shape or type problems as
//! `TypeError`/`ValueError` before any Rust-side validation runs.

#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::PyAny,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

use crate::intervals::Interval;

#[cfg(feature = "python-bindings")]
use crate::activity::BoutMetric;

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a float array-like into a `Vec<f64>`.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vec<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Vec<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(slice.to_vec())
}

/// Copy a boolean mask (bool array or sequence of bools) into a `Vec<bool>`.
#[cfg(feature = "python-bindings")]
pub fn extract_bool_vec(raw_data: &Bound<'_, PyAny>, name: &str) -> PyResult<Vec<bool>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<bool>>() {
        return Ok(arr_ro.as_array().to_vec());
    }
    raw_data.extract::<Vec<bool>>().map_err(|_| {
        PyTypeError::new_err(format!("{name} must be a 1-D boolean array or sequence of bools"))
    })
}

/// Copy non-negative sample indices (int64 array or sequence) into a
/// `Vec<usize>`.
#[cfg(feature = "python-bindings")]
pub fn extract_index_vec(raw_data: &Bound<'_, PyAny>, name: &str) -> PyResult<Vec<usize>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<i64>>() {
        return arr_ro
            .as_array()
            .iter()
            .map(|&value| {
                usize::try_from(value).map_err(|_| {
                    PyValueError::new_err(format!("{name} must hold non-negative indices, got {value}"))
                })
            })
            .collect();
    }
    raw_data.extract::<Vec<usize>>().map_err(|_| {
        PyTypeError::new_err(format!("{name} must be a 1-D array or sequence of non-negative ints"))
    })
}

/// Accept a boutmetric as an int code or a name.
#[cfg(feature = "python-bindings")]
pub fn extract_bout_metric(raw: &Bound<'_, PyAny>) -> PyResult<BoutMetric> {
    if let Ok(code) = raw.extract::<u8>() {
        return Ok(BoutMetric::try_from(code)?);
    }
    let name: String = raw
        .extract()
        .map_err(|_| PyTypeError::new_err("boutmetric must be an int in 1..=5 or a name"))?;
    Ok(name.parse::<BoutMetric>()?)
}

/// `(start, stop)` pairs from Python into intervals, unchecked.
#[cfg(feature = "python-bindings")]
pub fn intervals_from_pairs(pairs: &[(usize, usize)]) -> Vec<Interval> {
    pairs.iter().map(|&(start, stop)| Interval { start, stop }).collect()
}

/// Intervals back into `(start, stop)` pairs for Python.
pub fn intervals_to_pairs(intervals: &[Interval]) -> Vec<(usize, usize)> {
    intervals.iter().copied().map(<(usize, usize)>::from).collect()
}
