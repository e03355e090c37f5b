//! segmentation::runs — maximal true-runs of a boolean classification.
//!
//! Runs come from two places: extracted from a per-sample mask here, or
//! supplied by an upstream classifier as parallel `starts`/`stops` arrays.
//! Either way the segmenter receives sorted, non-empty, non-overlapping
//! half-open [`Interval`]s.

use crate::{
    intervals::Interval,
    segmentation::errors::{SegmentError, SegmentResult},
};

/// Maximal runs of `true` in `mask`, in index order.
///
/// Examples
/// --------
/// ```rust
/// # use rust_wearables::{intervals::Interval, segmentation::extract_runs};
/// let runs = extract_runs(&[true, true, false, true]);
/// assert_eq!(runs, vec![Interval::new(0, 2), Interval::new(3, 4)]);
/// ```
pub fn extract_runs(mask: &[bool]) -> Vec<Interval> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;

    for (index, &flag) in mask.iter().enumerate() {
        match (flag, open) {
            (true, None) => open = Some(index),
            (false, Some(start)) => {
                runs.push(Interval::new(start, index));
                open = None;
            }
            _ => (),
        }
    }
    if let Some(start) = open {
        runs.push(Interval::new(start, mask.len()));
    }
    runs
}

/// Validate precomputed run boundaries and pair them into intervals.
///
/// Errors
/// ------
/// - `SegmentError::RunLengthMismatch` when `starts.len() != stops.len()`.
/// - `SegmentError::MalformedRun` as in [`validate_runs`].
pub fn runs_from_bounds(starts: &[usize], stops: &[usize]) -> SegmentResult<Vec<Interval>> {
    if starts.len() != stops.len() {
        return Err(SegmentError::RunLengthMismatch { starts: starts.len(), stops: stops.len() });
    }

    let runs: Vec<Interval> =
        starts.iter().zip(stops).map(|(&start, &stop)| Interval { start, stop }).collect();
    validate_runs(&runs)?;
    Ok(runs)
}

/// Check that runs are non-empty, sorted, and non-overlapping.
///
/// Errors
/// ------
/// - `SegmentError::MalformedRun` naming the first run that is empty or
///   reversed, or that starts before its predecessor stops.
pub fn validate_runs(runs: &[Interval]) -> SegmentResult<()> {
    for (index, run) in runs.iter().enumerate() {
        if run.stop <= run.start {
            return Err(SegmentError::MalformedRun {
                index,
                start: run.start,
                stop: run.stop,
                reason: "Stop must exceed start.",
            });
        }
        if index > 0 && run.start < runs[index - 1].stop {
            return Err(SegmentError::MalformedRun {
                index,
                start: run.start,
                stop: run.stop,
                reason: "Runs must be sorted and non-overlapping.",
            });
        }
    }
    Ok(())
}
