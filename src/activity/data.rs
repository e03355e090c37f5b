//! Intensity series container for the windowed bout aggregator.
//!
//! [`IntensitySeries`] plays the role of a validated input boundary: once
//! constructed, the series is non-empty and finite, so bout detection over
//! it cannot fail.

use crate::activity::{errors::BoutResult, validation::validate_intensity};
use ndarray::{Array1, ArrayView1};

/// `IntensitySeries` — one activity-intensity value per fixed-length window.
///
/// Invariants
/// ----------
/// - `data.len() > 0`.
/// - Every entry is finite.
///
/// Notes
/// -----
/// - Values are stored as produced upstream (e.g. ENMO in g); no clipping or
///   rescaling is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct IntensitySeries {
    data: Array1<f64>,
}

impl IntensitySeries {
    /// Validate and wrap a per-window intensity series.
    ///
    /// Errors
    /// ------
    /// - `BoutError::EmptySignal` when `data` is empty.
    /// - `BoutError::NonFiniteSample { index, value }` for the first NaN/±∞.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_wearables::activity::IntensitySeries;
    /// let series = IntensitySeries::new(array![0.0, 0.25, 0.3]).unwrap();
    /// assert_eq!(series.len(), 3);
    /// ```
    pub fn new(data: Array1<f64>) -> BoutResult<Self> {
        match data.as_slice() {
            Some(values) => validate_intensity(values)?,
            None => validate_intensity(&data.to_vec())?,
        };
        Ok(IntensitySeries { data })
    }

    /// Validate and copy a slice of intensities.
    pub fn from_slice(data: &[f64]) -> BoutResult<Self> {
        validate_intensity(data)?;
        Ok(IntensitySeries { data: Array1::from(data.to_vec()) })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false` for a constructed series; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    /// Per-window activity flags: `intensity >= threshold`.
    pub fn classify(&self, threshold: f64) -> Vec<bool> {
        self.data.iter().map(|&value| value >= threshold).collect()
    }
}
