//! Multi-day waste-generation simulation.
//!
//! Each simulated day every zone except the depot grows by
//!
//! ```text
//! floor(level * growth_percent / 100) + uniform(0..5)
//! ```
//!
//! clamped to 100, and the new level is recorded in the zone's history.

use tracing::{debug, info};

use wr_core::{PlannerRng, ZoneId};
use wr_zone::ZoneRegistry;

use crate::{GenerationObserver, PlannerError, PlannerResult};

/// Longest run accepted, in days.
pub const MAX_DAYS: u32 = 30;

/// Highest daily growth rate accepted, in percent.
pub const MAX_GROWTH_PERCENT: f64 = 20.0;

/// Exclusive upper bound of the random daily increment.
const NOISE_BOUND: u32 = 5;

/// Start and end level of one zone over a simulation run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ZoneGrowth {
    pub zone:    ZoneId,
    pub initial: u8,
    pub last:    u8,
}

impl ZoneGrowth {
    pub fn change(&self) -> i32 {
        i32::from(self.last) - i32::from(self.initial)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationReport {
    pub days:           u32,
    pub growth_percent: f64,
    /// One entry per simulated zone, id order.  The depot is omitted.
    pub zones:          Vec<ZoneGrowth>,
}

/// Run the generation model for `days` days.
///
/// `days` must be in `1..=30` and `growth_percent` in `0..=20`, otherwise
/// [`PlannerError::InvalidSimulation`] is returned and nothing changes.
pub fn simulate_generation(
    zones:          &mut ZoneRegistry,
    depot:          Option<ZoneId>,
    days:           u32,
    growth_percent: f64,
    rng:            &mut PlannerRng,
    observer:       &mut impl GenerationObserver,
) -> PlannerResult<GenerationReport> {
    if !(1..=MAX_DAYS).contains(&days) {
        return Err(PlannerError::InvalidSimulation(format!(
            "days must be in 1..={MAX_DAYS}, got {days}"
        )));
    }
    if !(0.0..=MAX_GROWTH_PERCENT).contains(&growth_percent) {
        return Err(PlannerError::InvalidSimulation(format!(
            "growth rate must be in 0..={MAX_GROWTH_PERCENT}%, got {growth_percent}"
        )));
    }

    let rate = growth_percent / 100.0;
    let simulated: Vec<ZoneId> = zones.ids().filter(|z| Some(*z) != depot).collect();
    let initial: Vec<u8> = simulated
        .iter()
        .map(|z| zones.waste(*z))
        .collect::<Result<_, _>>()?;

    for day in 1..=days {
        for &zone in &simulated {
            let level = zones.waste(zone)?;
            let growth = (f64::from(level) * rate).floor() as u32;
            let noise = rng.gen_range(0..NOISE_BOUND);
            zones.raise_waste(zone, growth + noise)?;
        }
        debug!(day, "generation day simulated");
        observer.on_day_end(day, zones);
    }
    observer.on_simulation_end(days);

    let growth = simulated
        .iter()
        .zip(initial)
        .map(|(&zone, initial)| -> PlannerResult<ZoneGrowth> {
            Ok(ZoneGrowth { zone, initial, last: zones.waste(zone)? })
        })
        .collect::<PlannerResult<Vec<_>>>()?;

    info!(days, growth_percent, zones = growth.len(), "generation simulation complete");
    Ok(GenerationReport { days, growth_percent, zones: growth })
}
