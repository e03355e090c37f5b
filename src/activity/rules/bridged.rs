//! Boutmetric 5: greedy bouts plus bridging windows.
//!
//! After greedy detection, a single inactive window separating two adjacent
//! bouts is credited as a bridge when the span from the first bout's start
//! to the second bout's stop meets the criterion. The bouts themselves stay
//! distinct; each bridge window is credited once and lies outside every
//! bout.

use crate::{
    activity::{bout::Bout, rules::greedy, scan::ActivityScan},
    intervals::Interval,
};

pub(crate) fn detect(scan: &ActivityScan) -> (Vec<Bout>, Vec<usize>) {
    let bouts = greedy::detect(scan);
    let bridges = bouts
        .windows(2)
        .filter_map(|pair| {
            let (left, right) = (pair[0].span, pair[1].span);
            let joined = Interval::new(left.start, right.stop);
            let bridges =
                left.gap_to(&right) == 1 && !scan.is_active(left.stop) && scan.meets(joined);
            bridges.then_some(left.stop)
        })
        .collect();
    (bouts, bridges)
}
