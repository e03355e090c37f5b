//! Boutmetric 4: longest qualifying span from each seed.
//!
//! A span `[s, e)` meets the criterion exactly when `slack(e) >= slack(s)`
//! (see [`ActivityScan::slack`]). With `peaks[e] = max_{e' >= e} slack(e')`
//! non-increasing in `e`, the furthest qualifying stop is found by a binary
//! search over `peaks`, so the rule stays O(len log len) while looking past
//! any number of intermediate dips.

use crate::{
    activity::{bout::Bout, rules::seeded_bouts, scan::ActivityScan},
    intervals::Interval,
};

pub(crate) fn detect(scan: &ActivityScan) -> Vec<Bout> {
    let peaks = suffix_peaks(scan);
    seeded_bouts(scan, |seed| {
        let floor = scan.slack(seed.start);
        let reach = peaks[seed.stop..].partition_point(|&peak| peak >= floor);
        Interval::new(seed.start, seed.stop + reach.saturating_sub(1))
    })
}

/// `peaks[e]` is the largest slack at any index `>= e`, for `e` in `0..=len`.
fn suffix_peaks(scan: &ActivityScan) -> Vec<f64> {
    let mut peaks = vec![f64::NEG_INFINITY; scan.len() + 1];
    let mut running = f64::NEG_INFINITY;
    for index in (0..=scan.len()).rev() {
        running = running.max(scan.slack(index));
        peaks[index] = running;
    }
    peaks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::rules::test_support::{scan, triples};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Bridging gaps that stop the greedy rule when later activity restores
    //   the overall fraction.
    // - Agreement with the greedy rule when no such recovery exists.
    // - Monotonicity of the suffix peaks.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the longest span reaches past a gap that stops greedy growth.
    //
    // Given
    // -----
    // - Pattern 1111000111111110000 with n = 2 and n = 5.
    //
    // Expect
    // ------
    // - A single bout [0, 15) with 12 active windows (12/15 = 0.8) under
    //   both boundary rules.
    fn longest_reaches_past_recoverable_gaps() {
        let pattern = "1111000111111110000";

        for n in [2, 5] {
            for closed in [false, true] {
                assert_eq!(
                    triples(&detect(&scan(pattern, n, closed))),
                    vec![(0, 15, 12)],
                    "n = {n}, closed = {closed}"
                );
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the rule matches greedy growth when the tail cannot recover.
    //
    // Given
    // -----
    // - Pattern 0000111110111100000000, n = 2.
    //
    // Expect
    // ------
    // - Open: [4, 15). Closed: [4, 14).
    fn longest_matches_greedy_without_recovery() {
        let pattern = "0000111110111100000000";

        assert_eq!(triples(&detect(&scan(pattern, 2, false))), vec![(4, 15, 9)]);
        assert_eq!(triples(&detect(&scan(pattern, 2, true))), vec![(4, 14, 9)]);
    }

    #[test]
    // Purpose
    // -------
    // Verify suffix peaks are non-increasing and cover `len + 1` indices.
    //
    // Given
    // -----
    // - Pattern 00111101111001111000.
    //
    // Expect
    // ------
    // - 21 entries, each no smaller than its successor.
    fn suffix_peaks_are_non_increasing() {
        let peaks = suffix_peaks(&scan("00111101111001111000", 2, false));

        assert_eq!(peaks.len(), 21);
        assert!(peaks.windows(2).all(|pair| pair[0] >= pair[1]));
    }
}
