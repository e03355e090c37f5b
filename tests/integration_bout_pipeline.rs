//! Integration tests for the windowed bout aggregator.
//!
//! Purpose
//! -------
//! - Validate the public activity pipeline end to end: raw intensities and
//!   scalar settings in, total bout time out, for every boutmetric.
//! - Pin the behavior that downstream accelerometry studies rely on:
//!   padding a recording with inactivity never changes the total, and
//!   activity at the recording edges follows the boundary rule.
//!
//! Coverage
//! --------
//! - `activity::aggregate_bout_time` across metrics 1..=5, n ∈ {1, 2},
//!   open and closed bouts.
//! - `activity::BoutParams::from_epoch_minutes` with 5 s windows and 1 or
//!   2 minute bouts, reporting minutes.
//! - `activity::detect_bouts` for bout spans and bridges.
//!
//! Exclusions
//! ----------
//! - Rule-level details (seeding, trimming, block alignment); these are
//!   covered by unit tests under `activity::rules`.
//! - Python bindings.
use approx::assert_relative_eq;
use rust_wearables::activity::{
    BoutMetric, BoutParams, IntensitySeries, aggregate_bout_time, detect_bouts,
};

const THRESHOLD: f64 = 0.1;
const CRITERION: f64 = 0.8;

/// Intensities from a `0`/`1` pattern: 0.25 g when active, 0.03 g when not.
fn intensities(pattern: &str) -> Vec<f64> {
    pattern.chars().map(|c| if c == '1' { 0.25 } else { 0.03 }).collect()
}

/// Total windows credited with unit windows and `n`-window bouts.
fn credited(pattern: &str, n: usize, closed: bool, variant: u8) -> f64 {
    aggregate_bout_time(&intensities(pattern), THRESHOLD, 1.0, n as f64, CRITERION, closed, variant)
        .unwrap()
}

#[test]
// Purpose
// -------
// Verify that interior-only activity is insensitive to extra inactive
// windows at either end of the recording.
//
// Given
// -----
// - Five patterns with no activity in the first or last window.
// - Padding of 2, 4 and 10 inactive windows on both sides.
// - n ∈ {1, 2}, open and closed bouts, metrics 1..=5.
//
// Expect
// ------
// - The padded total equals the unpadded total in every case.
fn totals_are_unchanged_by_inactive_padding() {
    let patterns = [
        "00111101111001111000",
        "0001101100",
        "0011110100111110000",
        "0000111110111100000000",
        "00101011100110",
    ];

    for pattern in patterns {
        for n in [1, 2] {
            for closed in [false, true] {
                for variant in 1u8..=5 {
                    let base = credited(pattern, n, closed, variant);
                    for pad in [2, 4, 10] {
                        let padded = format!("{0}{pattern}{0}", "0".repeat(pad));
                        assert_eq!(
                            credited(&padded, n, closed, variant),
                            base,
                            "pattern {pattern}, n {n}, closed {closed}, metric {variant}, pad {pad}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
// Purpose
// -------
// Check reference totals for one interior pattern across the sweep.
//
// Given
// -----
// - Pattern 00111101111001111000.
//
// Expect
// ------
// - n = 1 open: [15, 12, 12, 15, 15]; n = 1 closed: [13, 12, 12, 15, 13].
// - n = 2 open: [15, 8, 12, 15, 15]; n = 2 closed: [13, 8, 12, 15, 13].
fn reference_totals_for_interior_activity() {
    let pattern = "00111101111001111000";
    let cases = [
        (1, false, [15.0, 12.0, 12.0, 15.0, 15.0]),
        (1, true, [13.0, 12.0, 12.0, 15.0, 13.0]),
        (2, false, [15.0, 8.0, 12.0, 15.0, 15.0]),
        (2, true, [13.0, 8.0, 12.0, 15.0, 13.0]),
    ];

    for (n, closed, expected) in cases {
        for (variant, want) in (1u8..=5).zip(expected) {
            assert_eq!(credited(pattern, n, closed, variant), want, "n {n}, closed {closed}, metric {variant}");
        }
    }
}

#[test]
// Purpose
// -------
// Ensure single active windows at the recording edges are credited only
// with open bouts.
//
// Given
// -----
// - Pattern 1000000001, n = 2.
// - Pattern 1000, n = 2.
//
// Expect
// ------
// - Open: 2 windows for every metric, including fixed blocks whose edge
//   blocks are only half active.
// - Closed: 0 for every metric.
// - A leading-only active window is credited once by every metric under
//   open bouts.
fn edge_activity_follows_the_boundary_rule() {
    for variant in 1u8..=5 {
        assert_eq!(credited("1000000001", 2, false, variant), 2.0, "open, metric {variant}");
        assert_eq!(credited("1000000001", 2, true, variant), 0.0, "closed, metric {variant}");
        assert_eq!(credited("1000", 2, false, variant), 1.0, "leading, metric {variant}");
    }
}

#[test]
// Purpose
// -------
// Verify longer edge bouts are trimmed under closed bouts and keep their
// inactive tail under open bouts.
//
// Given
// -----
// - 30 active, 40 inactive, 30 active windows; 5 s windows; 1 minute
//   bouts (n = 12).
//
// Expect
// ------
// - Open totals [67, 52, 62, 67, 67] windows; closed [60, 48, 60, 60, 60],
//   each × 5/60 minutes.
fn long_edge_bouts_are_trimmed_when_closed() {
    let pattern = format!("{}{}{}", "1".repeat(30), "0".repeat(40), "1".repeat(30));
    let series = IntensitySeries::from_slice(&intensities(&pattern)).unwrap();
    let open = BoutParams::from_epoch_minutes(THRESHOLD, 5.0, 1.0, CRITERION, false).unwrap();
    let closed = BoutParams::from_epoch_minutes(THRESHOLD, 5.0, 1.0, CRITERION, true).unwrap();
    let expected_open = [67.0, 52.0, 62.0, 67.0, 67.0];
    let expected_closed = [60.0, 48.0, 60.0, 60.0, 60.0];

    for ((metric, want_open), want_closed) in
        BoutMetric::ALL.into_iter().zip(expected_open).zip(expected_closed)
    {
        let minutes_open = detect_bouts(&series, &open, metric).total_time();
        let minutes_closed = detect_bouts(&series, &closed, metric).total_time();

        assert_relative_eq!(minutes_open, want_open * 5.0 / 60.0, epsilon = 1e-9);
        assert_relative_eq!(minutes_closed, want_closed * 5.0 / 60.0, epsilon = 1e-9);
    }
}

#[test]
// Purpose
// -------
// Check epoch-minute totals for 1 and 2 minute bouts over 5 s windows.
//
// Given
// -----
// - 20 inactive, 14 active, 1 inactive, 15 active, 25 inactive, 26 active,
//   20 inactive windows; open bouts.
//
// Expect
// ------
// - 1 minute (n = 12): [68, 36, 60, 68, 68] windows.
// - 2 minutes (n = 24): [68, 48, 63, 68, 68] windows.
// - Growing-span bouts [20, 56) and [75, 107) in both cases.
fn epoch_minute_totals() {
    let pattern = format!(
        "{}{}0{}{}{}{}",
        "0".repeat(20),
        "1".repeat(14),
        "1".repeat(15),
        "0".repeat(25),
        "1".repeat(26),
        "0".repeat(20)
    );
    let series = IntensitySeries::from_slice(&intensities(&pattern)).unwrap();
    let cases = [(1.0, [68.0, 36.0, 60.0, 68.0, 68.0]), (2.0, [68.0, 48.0, 63.0, 68.0, 68.0])];

    for (boutdur, expected) in cases {
        let params = BoutParams::from_epoch_minutes(THRESHOLD, 5.0, boutdur, CRITERION, false).unwrap();
        for (metric, windows) in BoutMetric::ALL.into_iter().zip(expected) {
            let summary = detect_bouts(&series, &params, metric);
            assert_relative_eq!(summary.total_time(), windows * 5.0 / 60.0, epsilon = 1e-9);
        }

        let growing = detect_bouts(&series, &params, BoutMetric::GrowingSpan);
        let spans: Vec<(usize, usize)> = growing.intervals().into_iter().map(Into::into).collect();
        assert_eq!(spans, vec![(20, 56), (75, 107)]);
    }
}

#[test]
// Purpose
// -------
// Verify a dense recording is credited exactly once and that repeated
// calls agree exactly.
//
// Given
// -----
// - An all-active recording of 36 windows, n ∈ {1, 4, 12}, both rules.
//   Every n divides 36 so fixed blocks tile the recording.
//
// Expect
// ------
// - Every metric credits exactly 36 windows; a second call returns the
//   same value bit for bit.
fn dense_recording_is_fully_credited_once() {
    let pattern = "1".repeat(36);

    for n in [1, 4, 12] {
        for closed in [false, true] {
            for variant in 1u8..=5 {
                let first = credited(&pattern, n, closed, variant);
                let second = credited(&pattern, n, closed, variant);

                assert_eq!(first, 36.0, "n {n}, closed {closed}, metric {variant}");
                assert_eq!(first.to_bits(), second.to_bits());
            }
        }
    }
}
