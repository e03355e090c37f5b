//! segmentation::labels — bout numbers for events and boundary checks.
//!
//! Purpose
//! -------
//! Attach 1-based bout numbers to event sample indices (e.g. gait initial
//! contacts) given the merged bout intervals, and answer whether two events
//! belong to the same bout. Downstream per-event metrics use
//! [`same_bout_mask`] to invalidate pairs that straddle a bout boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - Bout number `k + 1` belongs to `intervals[k]`; numbers are contiguous
//!   and increasing with the intervals.
//! - Events outside every interval carry no label and never share a bout
//!   with anything, themselves included.
//! - Each event is labelled independently by binary search, so events need
//!   not be sorted.

use crate::intervals::{Interval, locate};

/// Bout number per event, `None` outside every bout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoutLabels {
    labels: Vec<Option<usize>>,
}

impl BoutLabels {
    /// Label each event index with the number of the bout containing it.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_wearables::{intervals::Interval, segmentation::BoutLabels};
    /// let bouts = [Interval::new(0, 90), Interval::new(150, 240)];
    /// let labels = BoutLabels::assign(&[10, 120, 200], &bouts);
    ///
    /// assert_eq!(labels.as_slice(), &[Some(1), None, Some(2)]);
    /// assert!(labels.crosses_boundary(0, 2));
    /// ```
    pub fn assign(events: &[usize], intervals: &[Interval]) -> Self {
        let labels = events.iter().map(|&event| locate(intervals, event).map(|k| k + 1)).collect();
        BoutLabels { labels }
    }

    pub fn as_slice(&self) -> &[Option<usize>] {
        &self.labels
    }

    pub fn into_vec(self) -> Vec<Option<usize>> {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// `true` when events `i` and `j` are not in one bout: different labels,
    /// either unlabelled, or either index out of range.
    pub fn crosses_boundary(&self, i: usize, j: usize) -> bool {
        match (self.labels.get(i), self.labels.get(j)) {
            (Some(Some(a)), Some(Some(b))) => a != b,
            _ => true,
        }
    }

    pub fn same_bout_mask(&self, offset: usize) -> Vec<bool> {
        same_bout_mask(&self.labels, offset)
    }
}

/// Mask that is `true` at `i` when event `i + offset` exists and shares a
/// labelled bout with event `i`.
///
/// `offset = 0` marks labelled events.
pub fn same_bout_mask(labels: &[Option<usize>], offset: usize) -> Vec<bool> {
    (0..labels.len())
        .map(|i| match (labels[i], i.checked_add(offset).and_then(|j| labels.get(j))) {
            (Some(a), Some(Some(b))) => a == *b,
            _ => false,
        })
        .collect()
}
