//! Planner configuration.
//!
//! All tunable constants of the collection model live here.  The defaults
//! describe the reference fleet: a 200-unit truck doing 3 km per litre of
//! fuel at 100 per litre, with a 100-reading history window per zone.

use crate::{CoreError, CoreResult};

/// Top-level planner configuration.
///
/// Typically built in code or deserialized from JSON by the application
/// (feature `serde`), then handed to the planner builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Load at which the capacity builder forces a depot detour.
    pub truck_capacity: u32,

    /// Fuel price per litre.
    pub fuel_price: f64,

    /// Distance units covered per litre of fuel.
    pub truck_mileage: f64,

    /// Maximum readings kept per zone before the oldest is evicted.
    pub max_history: usize,

    /// Forecast jitter bound.  Jitter is drawn from
    /// `-forecast_jitter..=forecast_jitter`.
    pub forecast_jitter: u8,

    /// Waste points added per BFS layer by the spread simulation.
    pub spread_step: u8,

    /// Master RNG seed.  The same seed always produces identical forecasts
    /// and generation runs.
    pub seed: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            truck_capacity:  200,
            fuel_price:      100.0,
            truck_mileage:   3.0,
            max_history:     100,
            forecast_jitter: 10,
            spread_step:     10,
            seed:            42,
        }
    }
}

impl PlannerConfig {
    /// Check that every field describes a usable fleet.
    pub fn validate(&self) -> CoreResult<()> {
        if self.truck_capacity == 0 {
            return Err(CoreError::Config("truck_capacity must be positive".into()));
        }
        if !(self.truck_mileage.is_finite() && self.truck_mileage > 0.0) {
            return Err(CoreError::Config(format!(
                "truck_mileage must be a positive number, got {}",
                self.truck_mileage
            )));
        }
        if !(self.fuel_price.is_finite() && self.fuel_price >= 0.0) {
            return Err(CoreError::Config(format!(
                "fuel_price must be a non-negative number, got {}",
                self.fuel_price
            )));
        }
        if self.max_history == 0 {
            return Err(CoreError::Config("max_history must be at least 1".into()));
        }
        Ok(())
    }
}
