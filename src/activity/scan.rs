//! activity::scan — shared window classification and span qualification.
//!
//! Purpose
//! -------
//! Hold the per-call state every boutmetric rule works from: the active /
//! inactive flag of each window, a prefix count of active windows, the
//! minimum bout length in windows, and the boundary rule. Rules ask this
//! type whether a span meets the criterion, how a bout is seeded, and how a
//! finished span is trimmed; the rules themselves only decide how spans grow
//! and merge.
//!
//! Key behaviors
//! -------------
//! - [`ActivityScan::meets`] — active fraction of a span reaches the
//!   criterion (with at least one active window).
//! - [`ActivityScan::qualifies`] — `meets` plus the minimum-length rule;
//!   open bouts touching a recording edge are exempt from the length rule.
//! - [`ActivityScan::seed`] — the initial qualifying span anchored at an
//!   active window.
//! - [`ActivityScan::finish`] — apply the closed-bout trim and count active
//!   windows.
//!
//! Invariants & assumptions
//! ------------------------
//! - `prefix.len() == active.len() + 1`, `prefix[0] == 0`, and
//!   `prefix[i + 1] - prefix[i]` is 1 exactly when window `i` is active.
//! - `min_windows <= len + 1`, so index arithmetic on it cannot overflow.
//! - Spans handed to these methods lie within `[0, len)`.
//!
//! Performance
//! -----------
//! - Construction is O(len). `meets`/`qualifies`/`seed` are O(1);
//!   `finish` is linear in the span it trims.

use crate::{
    activity::{bout::Bout, data::IntensitySeries, params::BoutParams},
    intervals::Interval,
};

#[derive(Debug, Clone)]
pub(crate) struct ActivityScan {
    active: Vec<bool>,
    prefix: Vec<usize>,
    min_windows: usize,
    criterion: f64,
    closed: bool,
}

impl ActivityScan {
    pub(crate) fn new(series: &IntensitySeries, params: &BoutParams) -> Self {
        ActivityScan::from_flags(series.classify(params.threshold()), params)
    }

    /// `min_windows` is capped at `len + 1`: no span is that long, so the
    /// cap leaves every qualification unchanged.
    pub(crate) fn from_flags(active: Vec<bool>, params: &BoutParams) -> Self {
        let len = active.len();
        let mut prefix = Vec::with_capacity(len + 1);
        prefix.push(0);
        let mut running = 0usize;
        for &flag in &active {
            running += usize::from(flag);
            prefix.push(running);
        }

        ActivityScan {
            active,
            prefix,
            min_windows: params.min_bout_windows().min(len + 1),
            criterion: params.effective_criterion(),
            closed: params.closed_bout(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.active.len()
    }

    pub(crate) fn min_windows(&self) -> usize {
        self.min_windows
    }

    pub(crate) fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub(crate) fn active_in(&self, span: Interval) -> usize {
        self.prefix[span.stop] - self.prefix[span.start]
    }

    /// `prefix[e] - c·e`; a span `[s, e)` meets the criterion exactly when
    /// `slack(e) >= slack(s)`.
    pub(crate) fn slack(&self, index: usize) -> f64 {
        self.prefix[index] as f64 - self.criterion * index as f64
    }

    pub(crate) fn meets(&self, span: Interval) -> bool {
        let active = self.active_in(span);
        active > 0 && active as f64 >= self.criterion * span.len() as f64
    }

    fn touches_edge(&self, span: Interval) -> bool {
        span.start == 0 || span.stop == self.len()
    }

    pub(crate) fn qualifies(&self, span: Interval) -> bool {
        self.meets(span)
            && (span.len() >= self.min_windows || (!self.closed && self.touches_edge(span)))
    }

    /// First active window at or after `from`.
    pub(crate) fn next_active(&self, from: usize) -> Option<usize> {
        self.active.iter().skip(from).position(|&flag| flag).map(|offset| from + offset)
    }

    /// Initial qualifying span anchored at active window `start`.
    ///
    /// Tries, in order: the full `[start, start + n)` candidate; under open
    /// bouts, the candidate clipped at the end of the recording; under open
    /// bouts and `start == 0`, the single leading window.
    pub(crate) fn seed(&self, start: usize) -> Option<Interval> {
        let len = self.len();
        let stop = start.saturating_add(self.min_windows);

        if stop <= len {
            let full = Interval::new(start, stop);
            if self.qualifies(full) {
                return Some(full);
            }
        } else if !self.closed {
            let clipped = Interval::new(start, len);
            if self.qualifies(clipped) {
                return Some(clipped);
            }
        }

        if !self.closed && start == 0 && self.is_active(0) {
            return Some(Interval::new(0, 1));
        }
        None
    }

    /// Grow `span` one window at a time while `keep` accepts the extension.
    pub(crate) fn extend_while<F>(&self, span: Interval, keep: F) -> Interval
    where
        F: Fn(Interval) -> bool,
    {
        let mut stop = span.stop;
        while stop < self.len() && keep(Interval::new(span.start, stop + 1)) {
            stop += 1;
        }
        Interval::new(span.start, stop)
    }

    /// Turn a qualifying span into a bout, trimming inactive edges when
    /// bouts are closed.
    pub(crate) fn finish(&self, span: Interval) -> Bout {
        let span = if self.closed { self.trim(span) } else { span };
        Bout { span, active_windows: self.active_in(span) }
    }

    fn trim(&self, span: Interval) -> Interval {
        let first = (span.start..span.stop).find(|&i| self.active[i]);
        let last = (span.start..span.stop).rev().find(|&i| self.active[i]);
        match (first, last) {
            (Some(first), Some(last)) => Interval::new(first, last + 1),
            _ => Interval::new(span.start, span.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Criterion evaluation, including spans exactly on the criterion.
    // - Seeding under open and closed bouts near both recording edges.
    // - Closed-bout trimming in `finish`.
    // -------------------------------------------------------------------------

    fn flags(pattern: &str) -> Vec<bool> {
        pattern.chars().map(|c| c == '1').collect()
    }

    fn scan(pattern: &str, min_windows: f64, closed: bool) -> ActivityScan {
        let params = BoutParams::new(0.5, 1.0, min_windows, 0.8, closed).unwrap();
        ActivityScan::from_flags(flags(pattern), &params)
    }

    #[test]
    // Purpose
    // -------
    // Verify that a span sitting exactly on the criterion qualifies and an
    // all-inactive span never does.
    //
    // Given
    // -----
    // - Pattern 1111000000, criterion 0.8, n = 5.
    //
    // Expect
    // ------
    // - [0, 5) has 4/5 active and meets; [0, 6) has 4/6 and does not;
    //   [6, 10) has no active windows and does not.
    fn meets_accepts_spans_on_the_criterion() {
        let scan = scan("1111000000", 5.0, true);

        assert!(scan.meets(Interval::new(0, 5)));
        assert!(!scan.meets(Interval::new(0, 6)));
        assert!(!scan.meets(Interval::new(6, 10)));
        assert_eq!(scan.active_in(Interval::new(0, 10)), 4);
    }

    #[test]
    // Purpose
    // -------
    // Ensure seeding honors the boundary rule at both recording edges.
    //
    // Given
    // -----
    // - Pattern 1000000001 with n = 2.
    //
    // Expect
    // ------
    // - Open bouts: seed [0, 1) at the first window and [9, 10) at the last.
    // - Closed bouts: no seed at either window.
    fn seed_relaxes_length_only_for_open_bouts_at_edges() {
        let open = scan("1000000001", 2.0, false);
        let closed = scan("1000000001", 2.0, true);

        assert_eq!(open.seed(0), Some(Interval::new(0, 1)));
        assert_eq!(open.seed(9), Some(Interval::new(9, 10)));
        assert_eq!(closed.seed(0), None);
        assert_eq!(closed.seed(9), None);
    }

    #[test]
    // Purpose
    // -------
    // Verify interior seeds require the full minimum length regardless of
    // the boundary rule.
    //
    // Given
    // -----
    // - Pattern 0010011000 with n = 2.
    //
    // Expect
    // ------
    // - No seed at 2 (1/2 active); seed [5, 7) at 5.
    fn seed_requires_full_length_in_the_interior() {
        let open = scan("0010011000", 2.0, false);

        assert_eq!(open.seed(2), None);
        assert_eq!(open.seed(5), Some(Interval::new(5, 7)));
        assert_eq!(open.next_active(3), Some(5));
        assert_eq!(open.next_active(7), None);
    }

    #[test]
    // Purpose
    // -------
    // Verify closed bouts are trimmed to active edges while open bouts keep
    // the full span.
    //
    // Given
    // -----
    // - Pattern 0111101000 and span [1, 8).
    //
    // Expect
    // ------
    // - Closed: span [1, 7) with 5 active windows.
    // - Open: span [1, 8) with 5 active windows.
    fn finish_trims_only_closed_bouts() {
        let closed = scan("0111101000", 2.0, true);
        let open = scan("0111101000", 2.0, false);
        let span = Interval::new(1, 8);

        assert_eq!(closed.finish(span), Bout { span: Interval::new(1, 7), active_windows: 5 });
        assert_eq!(open.finish(span), Bout { span, active_windows: 5 });
    }

    #[test]
    // Purpose
    // -------
    // Ensure a minimum duration far beyond the recording is capped without
    // changing which spans qualify.
    //
    // Given
    // -----
    // - Pattern 011, minimum duration 1e20 unit windows.
    //
    // Expect
    // ------
    // - `min_windows` is 4.
    // - Open: seed at 1 clipped to [1, 3). Closed: no seed.
    fn huge_minimum_duration_is_capped() {
        let open = scan("011", 1e20, false);
        let closed = scan("011", 1e20, true);

        assert_eq!(open.min_windows(), 4);
        assert_eq!(open.seed(1), Some(Interval::new(1, 3)));
        assert_eq!(closed.seed(1), None);
    }
}
