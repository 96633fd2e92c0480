//! Capacity-constrained multi-trip route construction.
//!
//! The truck starts at `start` with an empty load and sweeps candidates by
//! nearest neighbour.  Every newly visited zone other than the depot is
//! collected: its level is added to the load and the zone is emptied in the
//! registry.  Once the load reaches the capacity the truck drives to the
//! depot, unloads, and resumes the sweep from there.
//!
//! ```text
//! loop:
//!     collect current (once, never the depot)
//!     if load >= capacity and current != depot: detour to depot, load = 0
//!     move to nearest unvisited non-depot candidate, or stop
//! ```
//!
//! The route ends at the last zone collected; there is no final return to
//! the depot.  A full truck that cannot reach the depot ends the sweep, and
//! every candidate not yet collected is reported as unreached.

use tracing::{debug, info, warn};

use wr_core::ZoneId;
use wr_graph::DistanceMatrix;
use wr_zone::{ZoneError, ZoneRegistry};

use crate::builder::{ascending_candidates, check_inputs, nearest};
use crate::route::RouteDraft;
use crate::{CostModel, Route, RouteBuilder, RouteResult, Strategy};

#[derive(Copy, Clone, Debug)]
pub struct CapacityBuilder {
    /// Load at which the truck must unload.
    pub capacity: u32,
    /// Unload point.  Never collected and never picked as a regular stop.
    pub depot:    ZoneId,
    pub cost:     CostModel,
}

impl CapacityBuilder {
    pub fn new(capacity: u32, depot: ZoneId, cost: CostModel) -> Self {
        Self { capacity, depot, cost }
    }
}

impl RouteBuilder for CapacityBuilder {
    fn strategy(&self) -> Strategy {
        Strategy::Capacity
    }

    fn build(
        &self,
        start:   ZoneId,
        targets: &[ZoneId],
        matrix:  &DistanceMatrix,
        zones:   &mut ZoneRegistry,
    ) -> RouteResult<Route> {
        check_inputs(start, targets, matrix, zones)?;
        if !zones.contains(self.depot) {
            return Err(ZoneError::NotFound(self.depot).into());
        }

        let mut candidates = ascending_candidates(start, targets);
        candidates.retain(|c| *c != self.depot);

        let mut visited = vec![false; zones.len()];
        let mut draft = RouteDraft::new(start);
        let mut current = start;
        let mut load: u32 = 0;

        loop {
            if current != self.depot && !visited[current.index()] {
                let level = zones.collect(current)?;
                visited[current.index()] = true;
                load += u32::from(level);
                draft.add_waste(level);
            }

            if load >= self.capacity && current != self.depot {
                let Some(leg) = matrix.distance(current, self.depot) else {
                    warn!(
                        from = %current,
                        depot = %self.depot,
                        load,
                        "truck full and depot unreachable, ending sweep"
                    );
                    break;
                };
                debug!(from = %current, load, distance = leg, "truck full, returning to depot");
                draft.detour(self.depot, leg);
                current = self.depot;
                load = 0;
            }

            let open = candidates.iter().copied().filter(|c| !visited[c.index()]);
            let Some((next, leg)) = nearest(current, open, matrix) else {
                break;
            };
            draft.step(next, leg);
            current = next;
        }

        for c in candidates.into_iter().filter(|c| !visited[c.index()]) {
            draft.mark_unreached(c);
        }

        let route = draft.finish(Strategy::Capacity, &self.cost);
        info!(
            strategy = %route.strategy,
            stops = route.stops(),
            distance = route.total_distance,
            depot_visits = route.depot_visits,
            collected = route.total_waste,
            "route built"
        );
        Ok(route)
    }
}
