//! Boutmetric 1: grow a seeded span while the whole span meets the
//! criterion.

use crate::activity::{bout::Bout, rules::seeded_bouts, scan::ActivityScan};

pub(crate) fn detect(scan: &ActivityScan) -> Vec<Bout> {
    seeded_bouts(scan, |seed| scan.extend_while(seed, |span| scan.meets(span)))
}
