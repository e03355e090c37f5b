//! Boutmetric 3: grow a seeded span while its trailing `n` windows meet the
//! criterion.
//!
//! Unlike the greedy rule, the overall fraction of a long bout may drift
//! below the criterion; only the most recent `n` windows are checked at
//! each step.

use crate::{
    activity::{bout::Bout, rules::seeded_bouts, scan::ActivityScan},
    intervals::Interval,
};

pub(crate) fn detect(scan: &ActivityScan) -> Vec<Bout> {
    let width = scan.min_windows();
    seeded_bouts(scan, |seed| {
        scan.extend_while(seed, |span| {
            let tail_start = span.start.max(span.stop.saturating_sub(width));
            scan.meets(Interval::new(tail_start, span.stop))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::rules::test_support::{scan, triples};

    #[test]
    // Purpose
    // -------
    // Verify the trailing window stops growth sooner than the greedy rule
    // when the bout is short relative to a gap.
    //
    // Given
    // -----
    // - Pattern 0011110100111110000, n = 2.
    //
    // Expect
    // ------
    // - [2, 6) and [10, 15) under both boundary rules: the trailing pairs
    //   [5, 7) and [14, 16) hold one active window each and stop growth.
    // - Window 7 cannot seed because [7, 9) is half active.
    fn lookback_stops_on_the_trailing_window() {
        let pattern = "0011110100111110000";

        assert_eq!(triples(&detect(&scan(pattern, 2, false))), vec![(2, 6, 4), (10, 15, 5)]);
        assert_eq!(triples(&detect(&scan(pattern, 2, true))), vec![(2, 6, 4), (10, 15, 5)]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a long bout keeps growing while recent windows stay active
    // even when earlier gaps pull the overall fraction down.
    //
    // Given
    // -----
    // - Pattern 1111000111111110000, n = 5.
    //
    // Expect
    // ------
    // - Open: [0, 5) and [7, 16). Closed: [0, 4) and [7, 15).
    fn lookback_tracks_recent_activity() {
        let pattern = "1111000111111110000";

        assert_eq!(triples(&detect(&scan(pattern, 5, false))), vec![(0, 5, 4), (7, 16, 8)]);
        assert_eq!(triples(&detect(&scan(pattern, 5, true))), vec![(0, 4, 4), (7, 15, 8)]);
    }
}
