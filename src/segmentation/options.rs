//! segmentation::options — validated segmenter configuration.
//!
//! [`SegmentOptions`] bundles the sample period with the two time-valued
//! thresholds of the segmenter. Both thresholds are compared in seconds (or
//! whatever unit the sample period carries) with a relative tolerance, so a
//! gap of `60 × 0.02 s` counts as exactly `1.2 s`.

use crate::segmentation::errors::{SegmentError, SegmentResult};

/// Relative tolerance for time comparisons.
const TIME_REL_TOL: f64 = 1e-9;

/// `SegmentOptions` — settings for merging and filtering true-runs.
///
/// Fields
/// ------
/// - `sample_period`: time between samples, `> 0`.
/// - `max_separation`: largest gap (in time) that still merges two runs.
/// - `min_duration`: shortest merged run (in time) that is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentOptions {
    sample_period: f64,
    max_separation: f64,
    min_duration: f64,
}

impl SegmentOptions {
    /// Construct validated options.
    ///
    /// Errors
    /// ------
    /// - `SegmentError::InvalidParameter` when `sample_period` is not finite
    ///   and positive, or either threshold is negative or non-finite.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_wearables::segmentation::SegmentOptions;
    /// let options = SegmentOptions::new(1.0 / 50.0, 0.5, 1.5).unwrap();
    /// assert!(options.merges_gap(25));
    /// assert!(!options.merges_gap(26));
    /// ```
    pub fn new(sample_period: f64, max_separation: f64, min_duration: f64) -> SegmentResult<Self> {
        if !sample_period.is_finite() || sample_period <= 0.0 {
            return Err(SegmentError::InvalidParameter {
                name: "sample_period",
                value: sample_period,
                reason: "Must be finite and > 0.",
            });
        }
        if !max_separation.is_finite() || max_separation < 0.0 {
            return Err(SegmentError::InvalidParameter {
                name: "max_separation",
                value: max_separation,
                reason: "Must be finite and >= 0.",
            });
        }
        if !min_duration.is_finite() || min_duration < 0.0 {
            return Err(SegmentError::InvalidParameter {
                name: "min_duration",
                value: min_duration,
                reason: "Must be finite and >= 0.",
            });
        }
        Ok(SegmentOptions { sample_period, max_separation, min_duration })
    }

    pub fn sample_period(&self) -> f64 {
        self.sample_period
    }

    pub fn max_separation(&self) -> f64 {
        self.max_separation
    }

    pub fn min_duration(&self) -> f64 {
        self.min_duration
    }

    /// Whether a gap of `samples` between two runs is short enough to merge.
    pub fn merges_gap(&self, samples: usize) -> bool {
        at_most(samples as f64 * self.sample_period, self.max_separation)
    }

    /// Whether a merged run of `samples` is long enough to keep.
    pub fn keeps_length(&self, samples: usize) -> bool {
        at_most(self.min_duration, samples as f64 * self.sample_period)
    }
}

/// `lhs <= rhs` up to a relative tolerance.
fn at_most(lhs: f64, rhs: f64) -> bool {
    lhs <= rhs + TIME_REL_TOL * lhs.abs().max(rhs.abs())
}
