//! intervals — half-open index intervals shared by the bout engines.
//!
//! Purpose
//! -------
//! Provide the single interval type used by both the windowed activity
//! aggregator (window indices) and the run-length segmenter (sample
//! indices), plus the binary-search lookup used to attach bout numbers to
//! events.
//!
//! Invariants & assumptions
//! ------------------------
//! - Intervals are half-open `[start, stop)` with `start <= stop`.
//! - Slices passed to [`locate`] are sorted by `start` and non-overlapping;
//!   every producer in this crate guarantees that ordering.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based (matches Rust/NumPy).
//! - Durations are `len() × period` in whatever unit `period` carries.

use std::fmt;

/// Half-open index interval `[start, stop)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    /// First index covered by the interval.
    pub start: usize,
    /// One past the last index covered by the interval.
    pub stop: usize,
}

impl Interval {
    /// Construct an interval from its bounds.
    ///
    /// Panics in debug builds if `start > stop`; callers in this crate only
    /// build intervals from ordered scans.
    pub fn new(start: usize, stop: usize) -> Self {
        debug_assert!(start <= stop, "interval start {start} exceeds stop {stop}");
        Interval { start, stop }
    }

    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.stop == self.start
    }

    /// Whether `index` falls inside `[start, stop)`.
    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.stop
    }

    /// Time spanned by the interval at the given sampling period.
    pub fn duration(&self, period: f64) -> f64 {
        self.len() as f64 * period
    }

    /// Number of indices strictly between `self` and a later interval.
    ///
    /// Returns `0` when the intervals touch or overlap.
    pub fn gap_to(&self, later: &Interval) -> usize {
        later.start.saturating_sub(self.stop)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}

impl From<Interval> for (usize, usize) {
    fn from(interval: Interval) -> (usize, usize) {
        (interval.start, interval.stop)
    }
}

/// Find the position of the interval containing `index`.
///
/// Parameters
/// ----------
/// - `intervals`: `&[Interval]`
///   Sorted, non-overlapping intervals.
/// - `index`: `usize`
///   Sample or window index to look up.
///
/// Returns
/// -------
/// `Option<usize>`
///   - `Some(k)` when `intervals[k].contains(index)`.
///   - `None` when `index` falls in a gap, before the first interval, or
///     after the last one.
///
/// Notes
/// -----
/// - Runs in `O(log m)` for `m` intervals via `partition_point`, so events
///   can be labelled independently and in any order.
pub fn locate(intervals: &[Interval], index: usize) -> Option<usize> {
    let k = intervals.partition_point(|interval| interval.stop <= index);
    match intervals.get(k) {
        Some(interval) if interval.contains(index) => Some(k),
        _ => None,
    }
}
