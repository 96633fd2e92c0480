//! Priority-ordered route construction.

use std::cmp::Reverse;

use tracing::info;

use wr_core::ZoneId;
use wr_graph::{DistanceMatrix, MinHeap};
use wr_zone::ZoneRegistry;

use crate::builder::check_inputs;
use crate::route::RouteDraft;
use crate::{CostModel, Route, RouteBuilder, RouteResult, Strategy};

/// Visit candidates fullest first, ignoring distance.
///
/// Candidates are sorted once by descending current level; the sort is
/// stable, so equal levels keep the caller's order.  Duplicates and the
/// start zone are dropped.  A candidate with no path from the previous stop
/// is skipped and listed in [`Route::unreached`]; the next leg starts from
/// the last zone actually reached.
#[derive(Copy, Clone, Debug, Default)]
pub struct PriorityBuilder {
    pub cost: CostModel,
}

impl PriorityBuilder {
    pub fn new(cost: CostModel) -> Self {
        Self { cost }
    }
}

impl RouteBuilder for PriorityBuilder {
    fn strategy(&self) -> Strategy {
        Strategy::Priority
    }

    fn build(
        &self,
        start:   ZoneId,
        targets: &[ZoneId],
        matrix:  &DistanceMatrix,
        zones:   &mut ZoneRegistry,
    ) -> RouteResult<Route> {
        check_inputs(start, targets, matrix, zones)?;

        let mut order: Vec<(ZoneId, u8)> = Vec::with_capacity(targets.len());
        for &t in targets {
            if t != start && !order.iter().any(|(z, _)| *z == t) {
                order.push((t, zones.waste(t)?));
            }
        }
        order.sort_by(|a, b| b.1.cmp(&a.1));

        let mut draft = RouteDraft::new(start);
        let mut current = start;
        for (zone, _) in order {
            match matrix.distance(current, zone) {
                Some(leg) => {
                    draft.step(zone, leg);
                    current = zone;
                }
                None => draft.mark_unreached(zone),
            }
        }
        draft.read_path_waste(zones)?;

        let route = draft.finish(Strategy::Priority, &self.cost);
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

/// Rank every zone fullest first by draining a heap keyed on
/// `(Reverse(level), id)`.  Produces the same order as
/// [`ZoneRegistry::ranked_by_waste`].
pub fn heap_ranking(zones: &ZoneRegistry) -> Vec<ZoneId> {
    let mut heap = MinHeap::with_capacity(zones.len());
    for zone in zones.iter() {
        heap.push((Reverse(zone.waste()), zone.id));
    }
    std::iter::from_fn(|| heap.pop()).map(|(_, id)| id).collect()
}
