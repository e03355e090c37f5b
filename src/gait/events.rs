//! gait::events — validated gait events grouped into bouts.
//!
//! Purpose
//! -------
//! Hold per-step contact events (sample indices) with their bout numbers so
//! per-event metrics can pair events without crossing a bout boundary.
//!
//! Invariants & assumptions
//! ------------------------
//! - All event arrays share one length.
//! - For each event, `IC <= FC opp foot <= FC`.
//! - Bout numbers are non-decreasing along the events.
//! - `delta_h`, when present, may hold NaN for steps without a height
//!   estimate; NaN propagates into spatial metrics.
//!
//! Conventions
//! -----------
//! - Event times are 0-based sample indices in the original recording.
//! - `IC` is the initial contact of a step, `FC opp foot` the final contact
//!   of the opposite foot, and `FC` the final contact of the same foot.

use crate::{
    gait::errors::{GaitError, GaitResult},
    intervals::Interval,
    segmentation::{BoutLabels, validate_runs},
};

/// `GaitEvents` — contact events with bout numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct GaitEvents {
    ic: Vec<usize>,
    fc_opp_foot: Vec<usize>,
    fc: Vec<usize>,
    bout: Vec<usize>,
    delta_h: Option<Vec<f64>>,
}

impl GaitEvents {
    /// Validate and wrap gait events with explicit bout numbers.
    ///
    /// Parameters
    /// ----------
    /// - `ic`, `fc_opp_foot`, `fc`: `Vec<usize>`
    ///   Contact sample indices, one entry per step.
    /// - `bout`: `Vec<usize>`
    ///   Bout number of each step; non-decreasing.
    /// - `delta_h`: `Option<Vec<f64>>`
    ///   Vertical excursion of the center of mass per step, in metres.
    ///
    /// Errors
    /// ------
    /// - `GaitError::LengthMismatch` when an array differs in length from `ic`.
    /// - `GaitError::EventOrder` for the first event violating
    ///   `IC <= FC opp foot <= FC`.
    /// - `GaitError::BoutOrder` where bout numbers decrease.
    pub fn new(
        ic: Vec<usize>, fc_opp_foot: Vec<usize>, fc: Vec<usize>, bout: Vec<usize>,
        delta_h: Option<Vec<f64>>,
    ) -> GaitResult<Self> {
        let expected = ic.len();
        let lengths = [
            ("FC opp foot", fc_opp_foot.len()),
            ("FC", fc.len()),
            ("Bout N", bout.len()),
            ("delta h", delta_h.as_ref().map_or(expected, Vec::len)),
        ];
        for (name, got) in lengths {
            if got != expected {
                return Err(GaitError::LengthMismatch { name, expected, got });
            }
        }

        for index in 0..expected {
            if fc_opp_foot[index] < ic[index] {
                return Err(GaitError::EventOrder {
                    index,
                    reason: "FC opp foot must not precede IC.",
                });
            }
            if fc[index] < fc_opp_foot[index] {
                return Err(GaitError::EventOrder {
                    index,
                    reason: "FC must not precede FC opp foot.",
                });
            }
        }

        if let Some(index) = (1..expected).find(|&i| bout[i] < bout[i - 1]) {
            return Err(GaitError::BoutOrder { index });
        }

        Ok(GaitEvents { ic, fc_opp_foot, fc, bout, delta_h })
    }

    /// Label events from bout intervals and keep only those inside a bout.
    ///
    /// Events are labelled by their initial contact. Events whose `IC` falls
    /// outside every interval are dropped together with their contacts and
    /// `delta_h` entry.
    ///
    /// Errors
    /// ------
    /// - `GaitError::Segment` when `bouts` are not sorted, non-empty, and
    ///   non-overlapping.
    /// - Any error from [`GaitEvents::new`], checked on the full event arrays
    ///   before filtering; `BoutOrder` when ICs are not sorted across bouts.
    pub fn from_bouts(
        ic: Vec<usize>, fc_opp_foot: Vec<usize>, fc: Vec<usize>, delta_h: Option<Vec<f64>>,
        bouts: &[Interval],
    ) -> GaitResult<Self> {
        validate_runs(bouts)?;
        let labels = BoutLabels::assign(&ic, bouts).into_vec();
        let unlabelled = GaitEvents::new(ic, fc_opp_foot, fc, vec![0; labels.len()], delta_h)?;

        let pick = |values: &[usize]| -> Vec<usize> {
            values.iter().zip(&labels).filter(|(_, label)| label.is_some()).map(|(&v, _)| v).collect()
        };
        let delta_h = unlabelled.delta_h.as_ref().map(|h| {
            h.iter().zip(&labels).filter(|(_, label)| label.is_some()).map(|(&v, _)| v).collect()
        });
        let bout = labels.iter().flatten().copied().collect();

        GaitEvents::new(
            pick(&unlabelled.ic),
            pick(&unlabelled.fc_opp_foot),
            pick(&unlabelled.fc),
            bout,
            delta_h,
        )
    }

    pub fn len(&self) -> usize {
        self.ic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ic.is_empty()
    }

    pub fn ic(&self) -> &[usize] {
        &self.ic
    }

    pub fn fc_opp_foot(&self) -> &[usize] {
        &self.fc_opp_foot
    }

    pub fn fc(&self) -> &[usize] {
        &self.fc
    }

    pub fn bout(&self) -> &[usize] {
        &self.bout
    }

    pub fn delta_h(&self) -> Option<&[f64]> {
        self.delta_h.as_deref()
    }

    /// Bout numbers as labels for [`same_bout_mask`](crate::segmentation::same_bout_mask).
    pub(crate) fn labels(&self) -> Vec<Option<usize>> {
        self.bout.iter().copied().map(Some).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmentation::SegmentError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Each validation branch of `GaitEvents::new`.
    // - Labelling and filtering in `GaitEvents::from_bouts`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that mismatched lengths, contact order, and bout order are
    // each reported.
    //
    // Given
    // -----
    // - A short FC array; FC opp foot before IC at event 1; bouts [1, 2, 1].
    //
    // Expect
    // ------
    // - `LengthMismatch { name: "FC" }`, `EventOrder { index: 1 }`,
    //   `BoutOrder { index: 2 }`.
    fn new_rejects_inconsistent_events() {
        assert_eq!(
            GaitEvents::new(vec![1, 2], vec![1, 2], vec![3], vec![1, 1], None),
            Err(GaitError::LengthMismatch { name: "FC", expected: 2, got: 1 })
        );
        assert!(matches!(
            GaitEvents::new(vec![1, 5], vec![2, 4], vec![3, 9], vec![1, 1], None),
            Err(GaitError::EventOrder { index: 1, .. })
        ));
        assert_eq!(
            GaitEvents::new(vec![1, 5, 9], vec![2, 6, 10], vec![3, 7, 11], vec![1, 2, 1], None),
            Err(GaitError::BoutOrder { index: 2 })
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure `from_bouts` labels by IC, drops events outside every bout, and
    // keeps the per-event arrays aligned.
    //
    // Given
    // -----
    // - Bouts [0, 100) and [200, 300); ICs at 10, 150, 210 with delta h
    //   [0.1, 0.2, 0.3].
    //
    // Expect
    // ------
    // - Two events, ICs [10, 210], bouts [1, 2], delta h [0.1, 0.3].
    fn from_bouts_labels_and_filters_events() {
        let bouts = [Interval::new(0, 100), Interval::new(200, 300)];

        let events = GaitEvents::from_bouts(
            vec![10, 150, 210],
            vec![15, 155, 215],
            vec![40, 180, 240],
            Some(vec![0.1, 0.2, 0.3]),
            &bouts,
        )
        .unwrap();

        assert_eq!(events.ic(), &[10, 210]);
        assert_eq!(events.fc(), &[40, 240]);
        assert_eq!(events.bout(), &[1, 2]);
        assert_eq!(events.delta_h(), Some(&[0.1, 0.3][..]));
    }

    #[test]
    // Purpose
    // -------
    // Verify overlapping bout intervals surface as a wrapped segmentation
    // error.
    //
    // Given
    // -----
    // - Bouts [0, 100) and [50, 150).
    //
    // Expect
    // ------
    // - `GaitError::Segment(SegmentError::MalformedRun { index: 1, .. })`.
    fn from_bouts_rejects_overlapping_intervals() {
        let bouts = [Interval::new(0, 100), Interval::new(50, 150)];

        let result = GaitEvents::from_bouts(vec![10], vec![15], vec![40], None, &bouts);

        assert!(matches!(
            result,
            Err(GaitError::Segment(SegmentError::MalformedRun { index: 1, .. }))
        ));
    }
}
