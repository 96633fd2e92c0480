//! All-pairs distance matrix.
//!
//! # Construction
//!
//! [`DistanceMatrix::floyd_warshall`] is the default: O(n³), recomputed in
//! full whenever the graph changes.  Zone counts are in the tens, so a full
//! rebuild costs microseconds.  [`DistanceMatrix::from_dijkstra`] produces
//! the same table by running Dijkstra once per source, which scales better
//! on sparse graphs and parallelises over sources with the `parallel`
//! feature.
//!
//! # Layout
//!
//! Row-major `n × n` `u32` cells; `cells[i * n + j]` is the distance from
//! zone `i` to zone `j`, or [`UNREACHABLE`].

use tracing::info;

use wr_core::ZoneId;

use crate::{GraphError, GraphResult, UNREACHABLE, ZoneGraph, shortest_paths};

/// Dense table of shortest distances between every pair of zones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceMatrix {
    size:  usize,
    cells: Vec<u32>,
}

impl DistanceMatrix {
    /// All-pairs shortest paths by Floyd–Warshall.
    ///
    /// Parallel edges keep the lighter weight.  Relaxation is skipped when
    /// either leg is [`UNREACHABLE`] or the sum would overflow.
    pub fn floyd_warshall(graph: &ZoneGraph) -> GraphResult<Self> {
        let n = graph.node_count();
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut cells = vec![UNREACHABLE; n * n];
        for i in 0..n {
            cells[i * n + i] = 0;
        }
        for e in 0..graph.edge_count() {
            let (u, v) = (graph.edge_from[e].index(), graph.edge_to[e].index());
            let cell = &mut cells[u * n + v];
            *cell = (*cell).min(graph.edge_weight[e]);
        }

        for k in 0..n {
            for i in 0..n {
                let ik = cells[i * n + k];
                if ik == UNREACHABLE {
                    continue;
                }
                for j in 0..n {
                    let kj = cells[k * n + j];
                    if kj == UNREACHABLE {
                        continue;
                    }
                    if let Some(via) = ik.checked_add(kj).filter(|d| *d != UNREACHABLE) {
                        let cell = &mut cells[i * n + j];
                        if via < *cell {
                            *cell = via;
                        }
                    }
                }
            }
        }

        info!(zones = n, edges = graph.edge_count(), "distance matrix rebuilt (Floyd-Warshall)");
        Ok(Self { size: n, cells })
    }

    /// All-pairs shortest paths by one Dijkstra run per source.
    pub fn from_dijkstra(graph: &ZoneGraph) -> GraphResult<Self> {
        let n = graph.node_count();
        if n == 0 {
            return Err(GraphError::EmptyGraph);
        }

        #[cfg(feature = "parallel")]
        let rows: Vec<Vec<u32>> = {
            use rayon::prelude::*;
            (0..n)
                .into_par_iter()
                .map(|s| shortest_paths(graph, ZoneId(s as u32)).map(|sp| sp.into_distances()))
                .collect::<GraphResult<_>>()?
        };

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<Vec<u32>> = (0..n)
            .map(|s| shortest_paths(graph, ZoneId(s as u32)).map(|sp| sp.into_distances()))
            .collect::<GraphResult<_>>()?;

        info!(zones = n, edges = graph.edge_count(), "distance matrix rebuilt (Dijkstra per source)");
        Ok(Self { size: n, cells: rows.concat() })
    }

    /// Number of zones (rows = columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, zone: ZoneId) -> bool {
        zone.index() < self.size
    }

    /// Raw cell, [`UNREACHABLE`] included.  `None` only for ids outside the
    /// matrix.
    #[inline]
    pub fn raw(&self, from: ZoneId, to: ZoneId) -> Option<u32> {
        if self.contains(from) && self.contains(to) {
            Some(self.cells[from.index() * self.size + to.index()])
        } else {
            None
        }
    }

    /// Shortest distance, or `None` when unreachable or out of range.
    #[inline]
    pub fn distance(&self, from: ZoneId, to: ZoneId) -> Option<u32> {
        self.raw(from, to).filter(|d| *d != UNREACHABLE)
    }

    /// The full row of distances from `from`.
    pub fn row(&self, from: ZoneId) -> Option<&[u32]> {
        if !self.contains(from) {
            return None;
        }
        let start = from.index() * self.size;
        Some(&self.cells[start..start + self.size])
    }

    /// `true` if `d(i, j) == d(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size;
        (0..n).all(|i| (i + 1..n).all(|j| self.cells[i * n + j] == self.cells[j * n + i]))
    }
}
