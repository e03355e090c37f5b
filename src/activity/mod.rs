//! activity — windowed bout aggregation for per-window activity intensity.
//!
//! Purpose
//! -------
//! Quantify time spent in sustained moderate-to-vigorous physical activity
//! (MVPA) bouts. A per-window intensity series (e.g. ENMO) is classified
//! against a threshold, candidate bouts are qualified under one of five
//! boutmetric conventions, and the total credited time is reported.
//!
//! Key behaviors
//! -------------
//! - Validate inputs once: [`IntensitySeries`] for the signal,
//!   [`BoutParams`] for the scalar configuration, [`BoutMetric`] for the
//!   rule choice.
//! - Detect bouts with [`detect_bouts`], returning a [`BoutSummary`] with the
//!   individual [`Bout`]s and any bridge windows.
//! - Offer a flat, fully validating entry point [`aggregate_bout_time`] that
//!   returns the total only.
//!
//! Invariants & assumptions
//! ------------------------
//! - Bouts never overlap and every bout holds at least one active window.
//! - Total bout time never exceeds `len × window_length`.
//! - Under closed bouts every bout starts and ends on an active window and
//!   spans at least the minimum number of windows.
//! - Under open bouts, spans touching either end of the recording are exempt
//!   from the minimum length.
//!
//! Conventions
//! -----------
//! - Windows are indexed from 0; spans are half-open
//!   [`Interval`](crate::intervals::Interval)s over window indices.
//! - `window_length` and `min_bout_duration` share a unit; totals come back
//!   in that unit. [`BoutParams::from_epoch_minutes`] covers the common
//!   seconds-windows/minutes-bouts convention.
//!
//! Testing notes
//! -------------
//! - Each rule is unit-tested in its own module under `rules` on small
//!   `0`/`1` patterns.
//! - `aggregate` tests error ordering, per-metric totals, and the upper
//!   bound on totals.
//! - `tests/integration_bout_pipeline.rs` covers edge insensitivity, edge
//!   crediting, and epoch-minute totals end to end.

pub mod aggregate;
pub mod bout;
pub mod data;
pub mod errors;
pub mod metric;
pub mod params;
pub(crate) mod rules;
pub(crate) mod scan;
pub mod validation;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::aggregate::{aggregate_bout_time, detect_bouts};
pub use self::bout::{Bout, BoutSummary};
pub use self::data::IntensitySeries;
pub use self::errors::{BoutError, BoutResult};
pub use self::metric::BoutMetric;
pub use self::params::BoutParams;

// ---- Optional convenience prelude for downstream crates ------------------

pub mod prelude {
    pub use super::aggregate::{aggregate_bout_time, detect_bouts};
    pub use super::bout::{Bout, BoutSummary};
    pub use super::data::IntensitySeries;
    pub use super::errors::{BoutError, BoutResult};
    pub use super::metric::BoutMetric;
    pub use super::params::BoutParams;
}
