//! segmentation — run-length bout segmentation and bout labelling.
//!
//! Purpose
//! -------
//! Turn a per-sample boolean classification into bout intervals and label
//! downstream events with the bout they fall in.
//!
//! Key behaviors
//! -------------
//! - Configure the segmenter once with [`SegmentOptions`] (sample period,
//!   maximum separation, minimum duration).
//! - Extract true-runs with [`extract_runs`] or accept precomputed
//!   boundaries via [`runs_from_bounds`] / [`validate_runs`].
//! - Merge and filter with [`segment_bouts`] / [`merge_runs`].
//! - Label events with [`BoutLabels::assign`] and build same-bout masks with
//!   [`same_bout_mask`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Produced intervals are sorted, non-overlapping, and half-open.
//! - Bout numbers are 1-based and contiguous; dropped runs never consume a
//!   number.
//!
//! Conventions
//! -----------
//! - Time-valued settings share the unit of the sample period (seconds in
//!   the Python bindings).
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; the four reference merge/filter
//!   cases run end to end in `tests/integration_segmentation.rs`.

pub mod errors;
pub mod labels;
pub mod options;
pub mod runs;
pub mod segmenter;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{SegmentError, SegmentResult};
pub use self::labels::{BoutLabels, same_bout_mask};
pub use self::options::SegmentOptions;
pub use self::runs::{extract_runs, runs_from_bounds, validate_runs};
pub use self::segmenter::{merge_runs, segment_bouts};

// ---- Optional convenience prelude for downstream crates ------------------

pub mod prelude {
    pub use super::errors::{SegmentError, SegmentResult};
    pub use super::labels::{BoutLabels, same_bout_mask};
    pub use super::options::SegmentOptions;
    pub use super::segmenter::{merge_runs, segment_bouts};
}
