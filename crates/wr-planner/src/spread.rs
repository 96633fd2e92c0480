//! Breadth-first waste spread.
//!
//! Waste pushed out from a source zone raises every zone reachable from it
//! in proportion to its hop distance:
//!
//! ```text
//! increase(zone) = layer(zone) * step        (clamped to 100)
//! ```
//!
//! Layers count hops, not road weight, and BFS assigns each zone its
//! minimum hop count.  The source (layer 0) is left unchanged.

use std::collections::VecDeque;

use tracing::info;

use wr_core::ZoneId;
use wr_graph::{GraphError, ZoneGraph};
use wr_zone::ZoneRegistry;

use crate::PlannerResult;

/// One zone whose level the spread changed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpreadHit {
    pub zone:   ZoneId,
    /// Hop count from the source.
    pub layer:  u32,
    pub before: u8,
    pub after:  u8,
}

/// Spread waste from `source` over `graph`, `step` points per layer.
///
/// Returns the zones whose level actually changed, in BFS order.  A zone
/// already at 100 is still visited and recorded in history but is not
/// reported.
pub fn spread(
    graph:  &ZoneGraph,
    zones:  &mut ZoneRegistry,
    source: ZoneId,
    step:   u8,
) -> PlannerResult<Vec<SpreadHit>> {
    if !graph.contains(source) {
        return Err(GraphError::NodeNotFound(source).into());
    }
    zones.get(source)?;

    let mut layer: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut queue = VecDeque::new();
    layer[source.index()] = Some(0);
    queue.push_back(source);

    let mut hits = Vec::new();
    while let Some(zone) = queue.pop_front() {
        let depth = layer[zone.index()].unwrap_or_default();
        if depth > 0 {
            let before = zones.waste(zone)?;
            let after = zones.raise_waste(zone, depth.saturating_mul(u32::from(step)))?;
            if after != before {
                hits.push(SpreadHit { zone, layer: depth, before, after });
            }
        }
        for (next, _) in graph.neighbors(zone) {
            let slot = &mut layer[next.index()];
            if slot.is_none() {
                *slot = Some(depth + 1);
                queue.push_back(next);
            }
        }
    }

    info!(source = %source, affected = hits.len(), "spread complete");
    Ok(hits)
}
