//! Next-reading forecast.
//!
//! The model is a one-step linear recurrence with bounded noise:
//!
//! ```text
//! trend      = current - history[len - 2]      (0 with fewer than 2 readings)
//! prediction = clamp(current + trend + jitter, 0, 100)
//! ```
//!
//! [`forecast`] is read-only.  [`predict_next`] additionally records the
//! prediction as a new history reading, so calling it twice yields two
//! different, both-recorded readings.

use tracing::debug;

use wr_core::{PlannerRng, ZoneId};

use crate::{History, MAX_WASTE, ZoneRegistry, ZoneResult};

/// The outcome of one forecast.
#[derive(Clone, Debug, PartialEq)]
pub struct Prediction {
    pub zone:           ZoneId,
    /// Level at the time of the forecast.
    pub current:        u8,
    pub trend:          i32,
    /// Noise term actually drawn.
    pub jitter:         i32,
    /// Predicted next level, 0..=100.
    pub value:          u8,
    /// Highest reading in the history window before this forecast.
    pub max_recent:     Option<u8>,
    /// Mean of the history window before this forecast.
    pub average_recent: f64,
}

/// Short-term trend: current level minus the second-to-last reading.
pub fn trend(history: &History, current: u8) -> i32 {
    history
        .second_to_last()
        .map_or(0, |prev| i32::from(current) - i32::from(prev))
}

/// Pure prediction step.
pub fn compute_prediction(current: u8, trend: i32, jitter: i32) -> u8 {
    (i32::from(current) + trend + jitter).clamp(0, i32::from(MAX_WASTE)) as u8
}

fn mean(history: &History) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let sum: u32 = history.iter().map(u32::from).sum();
    f64::from(sum) / history.len() as f64
}

/// Forecast the next reading for `id` without changing any zone state.
///
/// Advances `rng` by one draw.
pub fn forecast(
    registry:     &ZoneRegistry,
    id:           ZoneId,
    rng:          &mut PlannerRng,
    jitter_bound: u8,
) -> ZoneResult<Prediction> {
    let zone = registry.get(id)?;
    let current = zone.waste();
    let trend = trend(zone.history(), current);
    let jitter = rng.jitter(jitter_bound);
    Ok(Prediction {
        zone: id,
        current,
        trend,
        jitter,
        value: compute_prediction(current, trend, jitter),
        max_recent: zone.history_max(),
        average_recent: mean(zone.history()),
    })
}

/// Forecast the next reading for `id` and record it in the zone's history.
///
/// The range-max index is rebuilt as part of recording.
pub fn predict_next(
    registry:     &mut ZoneRegistry,
    id:           ZoneId,
    rng:          &mut PlannerRng,
    jitter_bound: u8,
) -> ZoneResult<Prediction> {
    let prediction = forecast(registry, id, rng, jitter_bound)?;
    registry.record_reading(id, i32::from(prediction.value))?;
    debug!(
        zone = %id,
        current = prediction.current,
        trend = prediction.trend,
        predicted = prediction.value,
        "prediction recorded"
    );
    Ok(prediction)
}
