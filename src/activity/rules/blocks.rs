//! Boutmetric 2: fixed `n`-window blocks.
//!
//! The series is tiled into consecutive blocks `[k·n, (k+1)·n)`, the last
//! one clipped at the end of the recording. Each block qualifies on its own;
//! runs of adjacent qualifying blocks merge into one bout.
//!
//! Under open bouts, a failing block at either recording edge still credits
//! the active run touching that edge, as seeded rules do.

use crate::{
    activity::{bout::Bout, scan::ActivityScan},
    intervals::Interval,
};

pub(crate) fn detect(scan: &ActivityScan) -> Vec<Bout> {
    let len = scan.len();
    let width = scan.min_windows();
    let mut bouts = Vec::new();
    let mut run: Option<Interval> = None;

    for start in (0..len).step_by(width) {
        let block = Interval::new(start, (start + width).min(len));
        if scan.qualifies(block) {
            run = Some(match run {
                Some(open) => Interval::new(open.start, block.stop),
                None => block,
            });
        } else {
            if let Some(open) = run.take() {
                bouts.push(scan.finish(open));
            }
            bouts.extend(edge_runs(scan, block).into_iter().map(|span| scan.finish(span)));
        }
    }

    if let Some(open) = run {
        bouts.push(scan.finish(open));
    }
    bouts
}

/// Active runs of `block` touching the first or last window, kept only
/// when they qualify on their own. Always empty under closed bouts.
fn edge_runs(scan: &ActivityScan, block: Interval) -> Vec<Interval> {
    let mut runs = Vec::with_capacity(2);

    if block.start == 0 && scan.is_active(0) {
        let stop = (block.start..block.stop).find(|&i| !scan.is_active(i)).unwrap_or(block.stop);
        runs.push(Interval::new(0, stop));
    }
    if block.stop == scan.len() && scan.is_active(block.stop - 1) {
        let start = (block.start..block.stop)
            .rev()
            .find(|&i| !scan.is_active(i))
            .map_or(block.start, |i| i + 1);
        let tail = Interval::new(start, block.stop);
        if runs.last() != Some(&tail) {
            runs.push(tail);
        }
    }

    runs.retain(|&span| scan.qualifies(span));
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::rules::test_support::{scan, triples};

    #[test]
    // Purpose
    // -------
    // Verify that block alignment, not activity onset, decides which
    // windows are credited.
    //
    // Given
    // -----
    // - Pattern 0000111110111100000000, n = 5.
    //
    // Expect
    // ------
    // - Blocks [5, 10) and [10, 15) qualify and merge; [0, 5) has 1/5
    //   active and does not.
    // - Open: [5, 15) with 8 active. Closed: trimmed to [5, 14).
    fn blocks_follow_fixed_alignment() {
        let pattern = "0000111110111100000000";

        assert_eq!(triples(&detect(&scan(pattern, 5, false))), vec![(5, 15, 8)]);
        assert_eq!(triples(&detect(&scan(pattern, 5, true))), vec![(5, 14, 8)]);
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-qualifying blocks split bouts.
    //
    // Given
    // -----
    // - Pattern 00111101111001111000, n = 2.
    //
    // Expect
    // ------
    // - Bouts [2, 6), [8, 10) and [14, 16) under both boundary rules.
    fn blocks_split_on_failing_blocks() {
        let pattern = "00111101111001111000";
        let expected = vec![(2, 6, 4), (8, 10, 2), (14, 16, 2)];

        assert_eq!(triples(&detect(&scan(pattern, 2, false))), expected);
        assert_eq!(triples(&detect(&scan(pattern, 2, true))), expected);
    }

    #[test]
    // Purpose
    // -------
    // Verify the clipped final block follows the boundary rule.
    //
    // Given
    // -----
    // - Pattern 0000011, n = 3: the final block [6, 7) is a single active
    //   window.
    //
    // Expect
    // ------
    // - Open: the edge block qualifies, bout [6, 7).
    // - Closed: too short, no bouts.
    fn blocks_clipped_tail_obeys_boundary_rule() {
        assert_eq!(triples(&detect(&scan("0000011", 3, false))), vec![(6, 7, 1)]);
        assert!(detect(&scan("0000011", 3, true)).is_empty());
    }

    #[test]
    // Purpose
    // -------
    // Verify a failing block at a recording edge still credits its edge run
    // under open bouts.
    //
    // Given
    // -----
    // - Pattern 1000000001, n = 2: blocks [0, 2) and [8, 10) hold 1/2 active.
    // - Pattern 00000001, n = 4: the full-width last block holds 1/4 active.
    // - Pattern 1001, n = 5: one clipped block touching both edges.
    //
    // Expect
    // ------
    // - Open: bouts [0, 1) and [9, 10); [7, 8); [0, 1) and [3, 4).
    // - Closed: no bouts in any case.
    fn blocks_credit_edge_runs_under_open_bouts() {
        let cases: [(&str, usize, Vec<(usize, usize, usize)>); 3] = [
            ("1000000001", 2, vec![(0, 1, 1), (9, 10, 1)]),
            ("00000001", 4, vec![(7, 8, 1)]),
            ("1001", 5, vec![(0, 1, 1), (3, 4, 1)]),
        ];

        for (pattern, n, expected) in cases {
            assert_eq!(triples(&detect(&scan(pattern, n, false))), expected, "{pattern}");
            assert!(detect(&scan(pattern, n, true)).is_empty(), "{pattern}");
        }
    }
}
