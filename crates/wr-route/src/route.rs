//! The `Route` value and its cost model.

use std::fmt;

use wr_core::{PlannerConfig, ZoneId};
use wr_zone::{ZoneRegistry, ZoneResult};

/// Which builder produced a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    Greedy,
    Capacity,
    Priority,
    /// Today's scheduled collection run.
    Daily,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Greedy   => "greedy",
            Strategy::Capacity => "capacity",
            Strategy::Priority => "priority",
            Strategy::Daily    => "daily",
        };
        f.write_str(label)
    }
}

// ── CostModel ─────────────────────────────────────────────────────────────────

/// Converts distance to money: `distance / mileage * fuel_price`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    pub fuel_price: f64,
    pub mileage:    f64,
}

impl CostModel {
    pub fn new(fuel_price: f64, mileage: f64) -> Self {
        Self { fuel_price, mileage }
    }

    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.fuel_price, config.truck_mileage)
    }

    /// Litres of fuel needed for `distance`.
    #[inline]
    pub fn fuel(&self, distance: u32) -> f64 {
        f64::from(distance) / self.mileage
    }

    #[inline]
    pub fn cost(&self, distance: u32) -> f64 {
        self.fuel(distance) * self.fuel_price
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered visitation sequence with its aggregates.
///
/// A route is a snapshot: it owns its data and does not change when the
/// registry does.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub strategy:       Strategy,
    /// Visited zones in order, starting with the start zone.  Depot
    /// detours appear as depot entries.
    pub path:           Vec<ZoneId>,
    /// Sum of matrix distances between consecutive path entries.
    pub total_distance: u32,
    pub total_cost:     f64,
    /// Waste levels read along the path.
    pub total_waste:    u32,
    /// Forced returns to the depot (capacity routes only).
    pub depot_visits:   u32,
    /// Candidates the builder could not reach from where it was.
    pub unreached:      Vec<ZoneId>,
}

impl Route {
    /// Number of entries in the path, start included.
    pub fn stops(&self) -> usize {
        self.path.len()
    }

    pub fn start(&self) -> Option<ZoneId> {
        self.path.first().copied()
    }

    /// Where the vehicle ends up.
    pub fn finish(&self) -> Option<ZoneId> {
        self.path.last().copied()
    }

    /// `true` when every candidate was visited.
    pub fn is_complete(&self) -> bool {
        self.unreached.is_empty()
    }
}

// ── RouteDraft ────────────────────────────────────────────────────────────────

/// Mutable accumulator used by the builders while walking.
pub(crate) struct RouteDraft {
    path:         Vec<ZoneId>,
    distance:     u32,
    waste:        u32,
    depot_visits: u32,
    unreached:    Vec<ZoneId>,
}

impl RouteDraft {
    pub(crate) fn new(start: ZoneId) -> Self {
        Self {
            path:         vec![start],
            distance:     0,
            waste:        0,
            depot_visits: 0,
            unreached:    Vec::new(),
        }
    }

    /// Append `zone` reached over a leg of length `leg`.
    pub(crate) fn step(&mut self, zone: ZoneId, leg: u32) {
        self.path.push(zone);
        self.distance = self.distance.saturating_add(leg);
    }

    pub(crate) fn detour(&mut self, depot: ZoneId, leg: u32) {
        self.step(depot, leg);
        self.depot_visits += 1;
    }

    pub(crate) fn add_waste(&mut self, level: u8) {
        self.waste += u32::from(level);
    }

    pub(crate) fn mark_unreached(&mut self, zone: ZoneId) {
        self.unreached.push(zone);
    }

    /// Add the current level of every zone on the path.
    pub(crate) fn read_path_waste(&mut self, zones: &ZoneRegistry) -> ZoneResult<()> {
        for &z in &self.path {
            self.waste += u32::from(zones.waste(z)?);
        }
        Ok(())
    }

    pub(crate) fn finish(self, strategy: Strategy, cost: &CostModel) -> Route {
        Route {
            strategy,
            total_cost: cost.cost(self.distance),
            path: self.path,
            total_distance: self.distance,
            total_waste: self.waste,
            depot_visits: self.depot_visits,
            unreached: self.unreached,
        }
    }
}
