//! gait::metrics — per-event temporal and spatial gait metrics.
//!
//! Purpose
//! -------
//! Compute stride/step timing, support phases, and inverted-pendulum step
//! lengths from contact events, one value per event. Any metric that pairs
//! event `i` with event `i + k` is NaN when the pair leaves the bout of
//! event `i` or runs past the last event.
//!
//! Key behaviors
//! -------------
//! - [`GaitMetric`] enumerates the metrics, their result keys, and their
//!   event offsets.
//! - [`GaitMetric::compute`] evaluates one metric.
//! - [`event_metrics`] validates the scalars and evaluates every metric.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every output array has one entry per event.
//! - Spatial metrics are all-NaN when the leg length or `delta_h` is
//!   missing.
//!
//! Conventions
//! -----------
//! - Times are in the unit of `sample_period` (seconds in the bindings);
//!   lengths in the unit of `leg_length` (metres); cadence in steps/minute.

use ndarray::Array1;

use crate::{
    gait::{
        errors::{GaitError, GaitResult},
        events::GaitEvents,
    },
    segmentation::same_bout_mask,
};

/// Per-event gait metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaitMetric {
    StrideTime,
    StanceTime,
    SwingTime,
    StepTime,
    InitialDoubleSupport,
    TerminalDoubleSupport,
    DoubleSupport,
    SingleSupport,
    StepLength,
    StrideLength,
    GaitSpeed,
    Cadence,
}

impl GaitMetric {
    pub const ALL: [GaitMetric; 12] = [
        GaitMetric::StrideTime,
        GaitMetric::StanceTime,
        GaitMetric::SwingTime,
        GaitMetric::StepTime,
        GaitMetric::InitialDoubleSupport,
        GaitMetric::TerminalDoubleSupport,
        GaitMetric::DoubleSupport,
        GaitMetric::SingleSupport,
        GaitMetric::StepLength,
        GaitMetric::StrideLength,
        GaitMetric::GaitSpeed,
        GaitMetric::Cadence,
    ];

    /// Result key, e.g. `"stride time"`.
    pub fn key(&self) -> &'static str {
        match self {
            GaitMetric::StrideTime => "stride time",
            GaitMetric::StanceTime => "stance time",
            GaitMetric::SwingTime => "swing time",
            GaitMetric::StepTime => "step time",
            GaitMetric::InitialDoubleSupport => "initial double support",
            GaitMetric::TerminalDoubleSupport => "terminal double support",
            GaitMetric::DoubleSupport => "double support",
            GaitMetric::SingleSupport => "single support",
            GaitMetric::StepLength => "step length",
            GaitMetric::StrideLength => "stride length",
            GaitMetric::GaitSpeed => "gait speed",
            GaitMetric::Cadence => "cadence",
        }
    }

    /// Furthest event a metric pairs with: `i + offset`.
    pub fn offset(&self) -> usize {
        match self {
            GaitMetric::StanceTime | GaitMetric::InitialDoubleSupport | GaitMetric::StepLength => 0,
            GaitMetric::StepTime
            | GaitMetric::TerminalDoubleSupport
            | GaitMetric::DoubleSupport
            | GaitMetric::SingleSupport
            | GaitMetric::StrideLength
            | GaitMetric::Cadence => 1,
            GaitMetric::StrideTime | GaitMetric::SwingTime | GaitMetric::GaitSpeed => 2,
        }
    }

    /// Evaluate this metric for every event.
    ///
    /// `sample_period` and `leg_length` are assumed valid; [`event_metrics`]
    /// checks them.
    pub fn compute(
        &self, events: &GaitEvents, sample_period: f64, leg_length: Option<f64>,
    ) -> Array1<f64> {
        let span = |to: &[usize], j: usize, from: &[usize], i: usize| {
            (to[j] as f64 - from[i] as f64) * sample_period
        };
        let (ic, fc_opp, fc) = (events.ic(), events.fc_opp_foot(), events.fc());

        match self {
            GaitMetric::StrideTime => paired(events, 2, |i| span(ic, i + 2, ic, i)),
            GaitMetric::StanceTime => paired(events, 0, |i| span(fc, i, ic, i)),
            GaitMetric::SwingTime => paired(events, 2, |i| span(ic, i + 2, fc, i)),
            GaitMetric::StepTime => paired(events, 1, |i| span(ic, i + 1, ic, i)),
            GaitMetric::InitialDoubleSupport => paired(events, 0, |i| span(fc_opp, i, ic, i)),
            GaitMetric::TerminalDoubleSupport => {
                paired(events, 1, |i| span(fc_opp, i + 1, ic, i + 1))
            }
            GaitMetric::DoubleSupport => {
                GaitMetric::InitialDoubleSupport.compute(events, sample_period, leg_length)
                    + GaitMetric::TerminalDoubleSupport.compute(events, sample_period, leg_length)
            }
            GaitMetric::SingleSupport => paired(events, 1, |i| span(ic, i + 1, fc_opp, i)),
            GaitMetric::StepLength => step_lengths(events, leg_length),
            GaitMetric::StrideLength => {
                let steps = step_lengths(events, leg_length);
                paired(events, 1, |i| steps[i] + steps[i + 1])
            }
            GaitMetric::GaitSpeed => {
                GaitMetric::StrideLength.compute(events, sample_period, leg_length)
                    / GaitMetric::StrideTime.compute(events, sample_period, leg_length)
            }
            GaitMetric::Cadence => {
                GaitMetric::StepTime.compute(events, sample_period, leg_length).mapv(|t| 60.0 / t)
            }
        }
    }
}

/// `value(i)` where event `i + offset` shares a bout with event `i`, NaN
/// elsewhere.
fn paired<F>(events: &GaitEvents, offset: usize, value: F) -> Array1<f64>
where
    F: Fn(usize) -> f64,
{
    let mask = same_bout_mask(&events.labels(), offset);
    mask.iter().enumerate().map(|(i, &same)| if same { value(i) } else { f64::NAN }).collect()
}

/// Inverted-pendulum step length `2·sqrt(2·L·h − h²)`.
fn step_lengths(events: &GaitEvents, leg_length: Option<f64>) -> Array1<f64> {
    match (leg_length, events.delta_h()) {
        (Some(leg), Some(delta_h)) => {
            delta_h.iter().map(|&h| 2.0 * (2.0 * leg * h - h * h).sqrt()).collect()
        }
        _ => Array1::from_elem(events.len(), f64::NAN),
    }
}

/// Evaluate every [`GaitMetric`] for a set of events.
///
/// Parameters
/// ----------
/// - `events`: `&GaitEvents`
///   Validated contact events with bout numbers.
/// - `sample_period`: `f64`
///   Time between samples; finite and `> 0`.
/// - `leg_length`: `Option<f64>`
///   Leg length for spatial metrics; finite and `> 0` when given.
///
/// Returns
/// -------
/// `GaitResult<Vec<(GaitMetric, Array1<f64>)>>`
///   One array per metric, in [`GaitMetric::ALL`] order.
///
/// Errors
/// ------
/// - `GaitError::InvalidParameter` for an invalid `sample_period` or
///   `leg_length`.
pub fn event_metrics(
    events: &GaitEvents, sample_period: f64, leg_length: Option<f64>,
) -> GaitResult<Vec<(GaitMetric, Array1<f64>)>> {
    if !sample_period.is_finite() || sample_period <= 0.0 {
        return Err(GaitError::InvalidParameter {
            name: "sample_period",
            value: sample_period,
            reason: "Must be finite and > 0.",
        });
    }
    if let Some(leg) = leg_length {
        if !leg.is_finite() || leg <= 0.0 {
            return Err(GaitError::InvalidParameter {
                name: "leg_length",
                value: leg,
                reason: "Must be finite and > 0.",
            });
        }
    }

    Ok(GaitMetric::ALL
        .iter()
        .map(|&metric| (metric, metric.compute(events, sample_period, leg_length)))
        .collect())
}
