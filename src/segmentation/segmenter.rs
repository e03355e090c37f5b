//! segmentation::segmenter — merge and filter true-runs into bouts.
//!
//! Purpose
//! -------
//! Convert a per-sample boolean classification (e.g. gait / not gait) into
//! bout intervals: consecutive true-runs separated by short gaps are merged,
//! and merged runs that are too short are dropped.
//!
//! Key behaviors
//! -------------
//! - [`segment_bouts`] — from a boolean mask.
//! - [`merge_runs`] — from precomputed, validated run boundaries.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output intervals are sorted, non-overlapping, and half-open.
//! - Merging is a single left-to-right pass and is transitive: a chain of
//!   short gaps folds into one interval.
//! - Filtering happens after merging, so short runs survive when merged into
//!   a long enough bout.

use crate::{
    intervals::Interval,
    segmentation::{
        errors::SegmentResult,
        options::SegmentOptions,
        runs::{extract_runs, runs_from_bounds},
    },
};

/// Segment a boolean classification into bouts.
///
/// Parameters
/// ----------
/// - `mask`: `&[bool]`
///   Per-sample classification; may be empty.
/// - `options`: `&SegmentOptions`
///   Sample period, maximum separation, minimum duration.
///
/// Returns
/// -------
/// `Vec<Interval>`
///   Merged intervals in sample-index order; empty for an empty or
///   all-false mask.
///
/// Examples
/// --------
/// ```rust
/// # use rust_wearables::{intervals::Interval, segmentation::{SegmentOptions, segment_bouts}};
/// let mask = [true, true, true, false, true, true, false, false, false, true];
/// let options = SegmentOptions::new(1.0, 1.0, 3.0).unwrap();
///
/// assert_eq!(segment_bouts(&mask, &options), vec![Interval::new(0, 6)]);
/// ```
pub fn segment_bouts(mask: &[bool], options: &SegmentOptions) -> Vec<Interval> {
    merge_and_filter(&extract_runs(mask), options)
}

/// Merge and filter precomputed runs given as parallel `starts`/`stops`.
///
/// Errors
/// ------
/// - `SegmentError::RunLengthMismatch` / `SegmentError::MalformedRun` from
///   [`runs_from_bounds`].
pub fn merge_runs(
    starts: &[usize], stops: &[usize], options: &SegmentOptions,
) -> SegmentResult<Vec<Interval>> {
    let runs = runs_from_bounds(starts, stops)?;
    Ok(merge_and_filter(&runs, options))
}

fn merge_and_filter(runs: &[Interval], options: &SegmentOptions) -> Vec<Interval> {
    let mut merged: Vec<Interval> = Vec::with_capacity(runs.len());
    for &run in runs {
        match merged.last_mut() {
            Some(last) if options.merges_gap(last.gap_to(&run)) => last.stop = run.stop,
            _ => merged.push(run),
        }
    }
    let merged_count = merged.len();
    merged.retain(|bout| options.keeps_length(bout.len()));

    tracing::debug!(
        runs = runs.len(),
        merged = merged_count,
        kept = merged.len(),
        sample_period = options.sample_period(),
        "run-length segmentation finished"
    );
    merged
}
