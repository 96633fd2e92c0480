//! Zone road graph and builder.
//!
//! # Data layout
//!
//! Outgoing edges are stored in **Compressed Sparse Row (CSR)** form.  The
//! edges of zone `n` occupy indices
//!
//! ```text
//! node_out_start[n] .. node_out_start[n+1]
//! ```
//!
//! of `edge_to` / `edge_weight`.  Edges keep their insertion order within a
//! zone, so BFS and Dijkstra visit neighbours deterministically.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps planar `(x, y)` positions to the nearest
//! zone, for snapping a reported location onto the network.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use wr_core::{Point, ZoneId};

use crate::{GraphError, GraphResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f64; 2],
    id:    ZoneId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── RoadSpec ──────────────────────────────────────────────────────────────────

/// A two-way road segment as supplied by an external loader.
///
/// The weight is signed so a malformed input can be reported instead of
/// silently wrapped; [`ZoneGraphBuilder::add_road_spec`] rejects negatives.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadSpec {
    pub a:      ZoneId,
    pub b:      ZoneId,
    pub weight: i64,
}

impl RoadSpec {
    pub fn new(a: ZoneId, b: ZoneId, weight: i64) -> Self {
        Self { a, b, weight }
    }
}

// ── ZoneGraph ─────────────────────────────────────────────────────────────────

/// Directed weighted graph over zones, plus a spatial index.
///
/// Zone `i` of the registry is node `i` here.  The graph is a derived view:
/// rebuild it through [`ZoneGraphBuilder`] whenever the zone set changes.
#[derive(Debug)]
pub struct ZoneGraph {
    /// Position of each zone.  Indexed by `ZoneId`.
    pub node_pos: Vec<Point>,

    /// CSR row pointer.  Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source zone of each edge.
    pub edge_from: Vec<ZoneId>,

    /// Destination zone of each edge.
    pub edge_to: Vec<ZoneId>,

    /// Non-negative distance of each edge.
    pub edge_weight: Vec<u32>,

    spatial_idx: RTree<NodeEntry>,
}

impl ZoneGraph {
    /// A graph with no zones and no roads.
    pub fn empty() -> Self {
        ZoneGraph {
            node_pos:       Vec::new(),
            node_out_start: vec![0],
            edge_from:      Vec::new(),
            edge_to:        Vec::new(),
            edge_weight:    Vec::new(),
            spatial_idx:    RTree::new(),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    #[inline]
    pub fn contains(&self, node: ZoneId) -> bool {
        node.index() < self.node_count()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Index range of `node`'s outgoing edges.  Empty for unknown nodes.
    #[inline]
    fn edge_range(&self, node: ZoneId) -> std::ops::Range<usize> {
        if !self.contains(node) {
            return 0..0;
        }
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        start..end
    }

    /// `(neighbour, weight)` for every outgoing edge of `node`.
    #[inline]
    pub fn neighbors(&self, node: ZoneId) -> impl Iterator<Item = (ZoneId, u32)> + '_ {
        self.edge_range(node).map(move |e| (self.edge_to[e], self.edge_weight[e]))
    }

    #[inline]
    pub fn out_degree(&self, node: ZoneId) -> usize {
        self.edge_range(node).len()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The zone closest to `pos`.  `None` only for an empty graph.
    pub fn nearest_zone(&self, pos: Point) -> Option<ZoneId> {
        self.spatial_idx.nearest_neighbor(&[pos.x, pos.y]).map(|e| e.id)
    }

    /// Up to `k` zones closest to `pos`, nearest first.
    pub fn k_nearest_zones(&self, pos: Point, k: usize) -> Vec<ZoneId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .take(k)
            .map(|e| e.id)
            .collect()
    }
}

impl Default for ZoneGraph {
    fn default() -> Self {
        Self::empty()
    }
}

// ── ZoneGraphBuilder ──────────────────────────────────────────────────────────

/// Collect zones and edges in any order, then call [`build`](Self::build).
///
/// ```
/// use wr_core::Point;
/// use wr_graph::ZoneGraphBuilder;
///
/// let mut b = ZoneGraphBuilder::new();
/// let depot = b.add_node(Point::new(0.0, 0.0));
/// let park  = b.add_node(Point::new(1.0, 0.0));
/// b.add_road(depot, park, 4);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.edge_count(), 2); // two-way
/// ```
pub struct ZoneGraphBuilder {
    nodes:     Vec<Point>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:   ZoneId,
    to:     ZoneId,
    weight: u32,
}

impl ZoneGraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Vec::new(), raw_edges: Vec::new() }
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes:     Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a zone and return its id (sequential from 0).
    pub fn add_node(&mut self, pos: Point) -> ZoneId {
        let id = ZoneId(self.nodes.len() as u32);
        self.nodes.push(pos);
        id
    }

    /// Add a **directed** edge.
    pub fn add_directed_edge(&mut self, from: ZoneId, to: ZoneId, weight: u32) {
        self.raw_edges.push(RawEdge { from, to, weight });
    }

    /// Add a two-way road: two directed edges of equal weight.
    pub fn add_road(&mut self, a: ZoneId, b: ZoneId, weight: u32) {
        self.add_directed_edge(a, b, weight);
        self.add_directed_edge(b, a, weight);
    }

    /// Add a loader-supplied road, rejecting weights outside `0..=u32::MAX - 1`.
    pub fn add_road_spec(&mut self, road: RoadSpec) -> GraphResult<()> {
        let RoadSpec { a, b, weight } = road;
        if weight < 0 {
            return Err(GraphError::NegativeWeight { from: a, to: b, weight });
        }
        let w = u32::try_from(weight)
            .ok()
            .filter(|w| *w != crate::UNREACHABLE)
            .ok_or(GraphError::WeightTooLarge { from: a, to: b, weight })?;
        self.add_road(a, b, w);
        Ok(())
    }

    pub fn node_count(&self) -> usize { self.nodes.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`ZoneGraph`].
    ///
    /// Fails with [`GraphError::NodeNotFound`] if any edge names a zone
    /// that was never added.
    pub fn build(self) -> GraphResult<ZoneGraph> {
        let node_count = self.nodes.len();

        if let Some(bad) = self
            .raw_edges
            .iter()
            .flat_map(|e| [e.from, e.to])
            .find(|id| id.index() >= node_count)
        {
            return Err(GraphError::NodeNotFound(bad));
        }

        // Stable sort keeps per-zone insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<ZoneId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<ZoneId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<u32>    = raw.iter().map(|e| e.weight).collect();

        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, raw.len());

        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, pos)| NodeEntry { point: [pos.x, pos.y], id: ZoneId(i as u32) })
            .collect();

        Ok(ZoneGraph {
            node_pos: self.nodes,
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
            spatial_idx: RTree::bulk_load(entries),
        })
    }
}

impl Default for ZoneGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
