//! gait — per-event gait metrics that respect bout boundaries.
//!
//! Purpose
//! -------
//! Consume bout intervals from [`segmentation`](crate::segmentation) and
//! contact events from an upstream event detector, and compute per-step
//! temporal and spatial gait metrics without ever pairing events from two
//! different bouts.
//!
//! Key behaviors
//! -------------
//! - Validate events with [`GaitEvents::new`], or label them from bout
//!   intervals with [`GaitEvents::from_bouts`].
//! - Evaluate single metrics via [`GaitMetric::compute`] or all of them via
//!   [`event_metrics`].
//!
//! Invariants & assumptions
//! ------------------------
//! - A metric pairing event `i` with event `i + k` is NaN when the pair
//!   crosses a bout boundary or runs past the last event.
//!
//! Testing notes
//! -------------
//! - `metrics` tests use a five-step reference bout repeated twice, so each
//!   metric's NaN placement is checked at the bout boundary as well as at
//!   the end of the events.

pub mod errors;
pub mod events;
pub mod metrics;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{GaitError, GaitResult};
pub use self::events::GaitEvents;
pub use self::metrics::{GaitMetric, event_metrics};

// ---- Optional convenience prelude for downstream crates ------------------

pub mod prelude {
    pub use super::errors::{GaitError, GaitResult};
    pub use super::events::GaitEvents;
    pub use super::metrics::{GaitMetric, event_metrics};
}
