//! activity::metric — boutmetric selection and dispatch.
//!
//! [`BoutMetric`] is the single dispatch point between the public aggregator
//! and the rule modules under [`rules`](super::rules). It accepts the numeric
//! codes `1..=5` used by the accelerometry literature as well as descriptive
//! names.

use std::{fmt, str::FromStr};

use crate::activity::{
    bout::Bout,
    errors::{BoutError, BoutResult},
    rules::{blocks, bridged, greedy, longest, lookback},
    scan::ActivityScan,
};

/// Bout qualification convention.
///
/// - `GrowingSpan` (1): grow while the whole span meets the criterion.
/// - `FixedBlocks` (2): tile into `n`-window blocks and merge qualifying
///   neighbours.
/// - `TrailingWindow` (3): grow while the trailing `n` windows meet the
///   criterion.
/// - `LongestSpan` (4): longest span from the seed that meets the criterion.
/// - `Bridged` (5): `GrowingSpan` bouts plus single-window bridges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoutMetric {
    GrowingSpan,
    FixedBlocks,
    TrailingWindow,
    LongestSpan,
    Bridged,
}

impl BoutMetric {
    pub const ALL: [BoutMetric; 5] = [
        BoutMetric::GrowingSpan,
        BoutMetric::FixedBlocks,
        BoutMetric::TrailingWindow,
        BoutMetric::LongestSpan,
        BoutMetric::Bridged,
    ];

    /// Numeric boutmetric code in `1..=5`.
    pub fn code(&self) -> u8 {
        match self {
            BoutMetric::GrowingSpan => 1,
            BoutMetric::FixedBlocks => 2,
            BoutMetric::TrailingWindow => 3,
            BoutMetric::LongestSpan => 4,
            BoutMetric::Bridged => 5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BoutMetric::GrowingSpan => "growing",
            BoutMetric::FixedBlocks => "blocks",
            BoutMetric::TrailingWindow => "trailing",
            BoutMetric::LongestSpan => "longest",
            BoutMetric::Bridged => "bridged",
        }
    }

    /// Run the selected rule; returns bouts and bridge windows.
    pub(crate) fn detect(&self, scan: &ActivityScan) -> (Vec<Bout>, Vec<usize>) {
        match self {
            BoutMetric::GrowingSpan => (greedy::detect(scan), Vec::new()),
            BoutMetric::FixedBlocks => (blocks::detect(scan), Vec::new()),
            BoutMetric::TrailingWindow => (lookback::detect(scan), Vec::new()),
            BoutMetric::LongestSpan => (longest::detect(scan), Vec::new()),
            BoutMetric::Bridged => bridged::detect(scan),
        }
    }
}

impl TryFrom<u8> for BoutMetric {
    type Error = BoutError;

    fn try_from(code: u8) -> BoutResult<Self> {
        match code {
            1 => Ok(BoutMetric::GrowingSpan),
            2 => Ok(BoutMetric::FixedBlocks),
            3 => Ok(BoutMetric::TrailingWindow),
            4 => Ok(BoutMetric::LongestSpan),
            5 => Ok(BoutMetric::Bridged),
            _ => Err(BoutError::InvalidParameter {
                name: "boutmetric",
                value: code as f64,
                reason: "Must be one of 1, 2, 3, 4, 5.",
            }),
        }
    }
}

impl FromStr for BoutMetric {
    type Err = BoutError;

    /// Parse a boutmetric from its code (`"1"`..`"5"`) or name
    /// (case-insensitive `"growing"`, `"blocks"`, `"trailing"`, `"longest"`,
    /// `"bridged"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u8>() {
            return BoutMetric::try_from(code);
        }
        let lowered = trimmed.to_lowercase();
        BoutMetric::ALL.into_iter().find(|metric| metric.name() == lowered).ok_or_else(|| {
            BoutError::UnknownBoutMetric {
                name: s.to_string(),
                reason: "Valid options are 1-5 or case insensitive 'growing', 'blocks', \
                         'trailing', 'longest', 'bridged'.",
            }
        })
    }
}

impl fmt::Display for BoutMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}
