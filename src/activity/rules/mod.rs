//! activity::rules — span-growth rules behind each boutmetric.
//!
//! Purpose
//! -------
//! Implement the five bout-qualification rules selected by
//! [`BoutMetric`](super::metric::BoutMetric). Every rule works on a shared
//! [`ActivityScan`] and returns bouts in window order; the scan owns the
//! criterion, minimum-length, and boundary logic, while each rule decides
//! only how a qualifying span grows or merges.
//!
//! Key behaviors
//! -------------
//! - [`greedy`] — grow from a seed while the whole span meets the criterion.
//! - [`blocks`] — tile the series into `n`-window blocks and merge adjacent
//!   qualifying blocks.
//! - [`lookback`] — grow while the trailing `n`-window stretch meets the
//!   criterion.
//! - [`longest`] — take the longest span from the seed start that meets the
//!   criterion overall.
//! - [`bridged`] — greedy bouts plus single inactive windows that join two
//!   adjacent bouts into a combined span meeting the criterion.
//!
//! Invariants & assumptions
//! ------------------------
//! - Returned bouts are sorted, pairwise disjoint, and lie in `[0, len)`.
//! - Every returned bout has at least one active window.
//! - Seeded rules resume scanning at the stop of the previous bout, so no
//!   window is credited twice.

pub(crate) mod blocks;
pub(crate) mod bridged;
pub(crate) mod greedy;
pub(crate) mod longest;
pub(crate) mod lookback;

use crate::{
    activity::{bout::Bout, scan::ActivityScan},
    intervals::Interval,
};

/// Shared driver for seeded rules.
///
/// Walks active windows left to right; at each one tries to seed a bout,
/// hands the seed to `grow`, records the finished bout, and resumes after
/// the grown span. Active windows that cannot seed are skipped one by one.
pub(crate) fn seeded_bouts<G>(scan: &ActivityScan, grow: G) -> Vec<Bout>
where
    G: Fn(Interval) -> Interval,
{
    let mut bouts = Vec::new();
    let mut cursor = 0;

    while let Some(start) = scan.next_active(cursor) {
        match scan.seed(start) {
            Some(seed) => {
                let span = grow(seed);
                bouts.push(scan.finish(span));
                cursor = span.stop;
            }
            None => cursor = start + 1,
        }
    }
    bouts
}
