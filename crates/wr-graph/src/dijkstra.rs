//! Single-source shortest paths (Dijkstra).
//!
//! Independent of the precomputed [`DistanceMatrix`](crate::DistanceMatrix):
//! use it for ad hoc point-to-point queries without rebuilding the full
//! table.

use wr_core::ZoneId;

use crate::{GraphError, GraphResult, MinHeap, UNREACHABLE, ZoneGraph};

/// Distances and predecessor links from one source zone.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    pub source: ZoneId,
    /// `dist[v]` = shortest distance from `source`, or [`UNREACHABLE`].
    pub dist:   Vec<u32>,
    /// `prev[v]` = zone preceding `v` on a shortest path; `INVALID` for the
    /// source and unreached zones.
    prev:       Vec<ZoneId>,
}

impl ShortestPaths {
    /// Shortest distance to `target`, `None` if unreachable or unknown.
    pub fn distance_to(&self, target: ZoneId) -> Option<u32> {
        self.dist.get(target.index()).copied().filter(|d| *d != UNREACHABLE)
    }

    pub fn is_reachable(&self, target: ZoneId) -> bool {
        self.distance_to(target).is_some()
    }

    /// Zones on a shortest path from the source to `target`, both ends
    /// included.  `None` if `target` is unreachable.
    pub fn path_to(&self, target: ZoneId) -> Option<Vec<ZoneId>> {
        self.distance_to(target)?;
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.prev[cur.index()];
            if cur == ZoneId::INVALID {
                return None;
            }
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    pub fn into_distances(self) -> Vec<u32> {
        self.dist
    }
}

/// Run Dijkstra from `source` over `graph`.
///
/// Fails only if `source` is not a node of `graph`.
pub fn shortest_paths(graph: &ZoneGraph, source: ZoneId) -> GraphResult<ShortestPaths> {
    if !graph.contains(source) {
        return Err(GraphError::NodeNotFound(source));
    }

    let n = graph.node_count();
    let mut dist    = vec![UNREACHABLE; n];
    let mut prev    = vec![ZoneId::INVALID; n];
    let mut visited = vec![false; n];

    dist[source.index()] = 0;

    // Keyed by (distance, zone): equal distances settle in ascending id order.
    let mut heap: MinHeap<(u32, ZoneId)> = MinHeap::with_capacity(n);
    heap.push((0, source));

    while let Some((d, node)) = heap.pop() {
        // Stale entry for an already-settled zone.
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;

        for (next, weight) in graph.neighbors(node) {
            if visited[next.index()] {
                continue;
            }
            let Some(candidate) = d.checked_add(weight).filter(|c| *c != UNREACHABLE) else {
                continue;
            };
            if candidate < dist[next.index()] {
                dist[next.index()] = candidate;
                prev[next.index()] = node;
                heap.push((candidate, next));
            }
        }
    }

    Ok(ShortestPaths { source, dist, prev })
}
