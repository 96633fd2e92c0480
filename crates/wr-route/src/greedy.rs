//! Nearest-neighbour route construction.

use tracing::info;

use wr_core::ZoneId;
use wr_graph::DistanceMatrix;
use wr_zone::ZoneRegistry;

use crate::builder::{ascending_candidates, check_inputs, nearest};
use crate::route::RouteDraft;
use crate::{CostModel, Route, RouteBuilder, RouteResult, Strategy};

/// Repeatedly move to the closest unvisited candidate.
///
/// Candidates are scanned in ascending id order and only a strictly
/// shorter distance replaces the current best, so equal distances resolve
/// to the lowest id.  Candidates with no path from the current position at
/// the moment the sweep stalls end up in [`Route::unreached`].
///
/// Does not modify the registry.  `total_waste` sums the current levels of
/// every zone on the path, start included.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedyBuilder {
    pub cost: CostModel,
}

impl GreedyBuilder {
    pub fn new(cost: CostModel) -> Self {
        Self { cost }
    }
}

impl RouteBuilder for GreedyBuilder {
    fn strategy(&self) -> Strategy {
        Strategy::Greedy
    }

    fn build(
        &self,
        start:   ZoneId,
        targets: &[ZoneId],
        matrix:  &DistanceMatrix,
        zones:   &mut ZoneRegistry,
    ) -> RouteResult<Route> {
        check_inputs(start, targets, matrix, zones)?;

        let mut remaining = ascending_candidates(start, targets);
        let mut draft = RouteDraft::new(start);
        let mut current = start;

        while let Some((next, leg)) = nearest(current, remaining.iter().copied(), matrix) {
            draft.step(next, leg);
            remaining.retain(|z| *z != next);
            current = next;
        }
        for z in remaining {
            draft.mark_unreached(z);
        }
        draft.read_path_waste(zones)?;

        let route = draft.finish(Strategy::Greedy, &self.cost);
        info!(
            strategy = %route.strategy,
            stops = route.stops(),
            distance = route.total_distance,
            unreached = route.unreached.len(),
            "route built"
        );
        Ok(route)
    }
}
