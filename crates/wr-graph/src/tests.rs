//! Unit tests for wr-graph.
//!
//! All tests use hand-built or seeded-random graphs.

#[cfg(test)]
mod helpers {
    use wr_core::{PlannerRng, Point, ZoneId};

    use crate::{ZoneGraph, ZoneGraphBuilder};

    /// Small grid of zones.
    ///
    /// ```text
    ///   0 ──1── 1 ──1── 2
    ///   │               │
    ///   5               1
    ///   │               │
    ///   3 ──────1────── 4
    /// ```
    ///
    /// Shortest 0→4 is 0→1→2→4 = 3; the 0→3→4 detour costs 6.
    pub fn grid_graph() -> (ZoneGraph, [ZoneId; 5]) {
        let mut b = ZoneGraphBuilder::new();
        let n0 = b.add_node(Point::new(0.0, 0.0));
        let n1 = b.add_node(Point::new(1.0, 0.0));
        let n2 = b.add_node(Point::new(2.0, 0.0));
        let n3 = b.add_node(Point::new(0.0, 1.0));
        let n4 = b.add_node(Point::new(2.0, 1.0));
        b.add_road(n0, n1, 1);
        b.add_road(n1, n2, 1);
        b.add_road(n2, n4, 1);
        b.add_road(n0, n3, 5);
        b.add_road(n3, n4, 1);
        (b.build().unwrap(), [n0, n1, n2, n3, n4])
    }

    /// Random symmetric graph: `n` zones, each pair joined with
    /// probability ~`density` percent, weights 0..=20.
    pub fn random_graph(rng: &mut PlannerRng, n: usize, density: u32) -> ZoneGraph {
        let mut b = ZoneGraphBuilder::new();
        let ids: Vec<ZoneId> = (0..n)
            .map(|i| b.add_node(Point::new(i as f64, 0.0)))
            .collect();
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_range(0..100u32) < density {
                    b.add_road(ids[i], ids[j], rng.gen_range(0..=20u32));
                }
            }
        }
        b.build().unwrap()
    }
}

// ── Builder & network structure ───────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use wr_core::{Point, ZoneId};

    use crate::{GraphError, RoadSpec, ZoneGraphBuilder};

    #[test]
    fn empty_build() {
        let g = ZoneGraphBuilder::new().build().unwrap();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn road_is_two_directed_edges() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        b.add_road(a, c, 7);
        let g = b.build().unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.neighbors(a).collect::<Vec<_>>(), vec![(c, 7)]);
        assert_eq!(g.neighbors(c).collect::<Vec<_>>(), vec![(a, 7)]);
    }

    #[test]
    fn csr_degrees() {
        let (g, [n0, n1, n2, n3, n4]) = super::helpers::grid_graph();
        assert_eq!(g.out_degree(n0), 2);
        assert_eq!(g.out_degree(n1), 2);
        assert_eq!(g.out_degree(n2), 2);
        assert_eq!(g.out_degree(n3), 2);
        assert_eq!(g.out_degree(n4), 2);
        for e in 0..g.edge_count() {
            let from = g.edge_from[e];
            assert!(g.neighbors(from).any(|(to, _)| to == g.edge_to[e]));
        }
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let mut b = ZoneGraphBuilder::new();
        let hub = b.add_node(Point::default());
        let x = b.add_node(Point::default());
        let y = b.add_node(Point::default());
        let z = b.add_node(Point::default());
        b.add_road(hub, z, 1);
        b.add_road(hub, x, 1);
        b.add_road(hub, y, 1);
        let g = b.build().unwrap();
        let order: Vec<ZoneId> = g.neighbors(hub).map(|(n, _)| n).collect();
        assert_eq!(order, vec![z, x, y]);
    }

    #[test]
    fn directed_only_edge() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        b.add_directed_edge(a, c, 3);
        let g = b.build().unwrap();
        assert_eq!(g.out_degree(a), 1);
        assert_eq!(g.out_degree(c), 0);
    }

    #[test]
    fn edge_to_unknown_zone_rejected() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        b.add_road(a, ZoneId(5), 1);
        assert!(matches!(b.build(), Err(GraphError::NodeNotFound(ZoneId(5)))));
    }

    #[test]
    fn negative_weight_rejected() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        let err = b.add_road_spec(RoadSpec::new(a, c, -2)).unwrap_err();
        assert!(matches!(err, GraphError::NegativeWeight { weight: -2, .. }));
        assert_eq!(b.edge_count(), 0);
        assert!(b.add_road_spec(RoadSpec::new(a, c, i64::from(u32::MAX))).is_err());
        b.add_road_spec(RoadSpec::new(a, c, 0)).unwrap();
        assert_eq!(b.edge_count(), 2);
    }

    #[test]
    fn unknown_node_has_no_neighbors() {
        let (g, _) = super::helpers::grid_graph();
        assert_eq!(g.neighbors(ZoneId(99)).count(), 0);
        assert_eq!(g.out_degree(ZoneId(99)), 0);
    }
}

// ── Spatial snap ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snap {
    use wr_core::Point;

    use crate::ZoneGraph;

    #[test]
    fn nearest_zone() {
        let (g, [n0, n1, ..]) = super::helpers::grid_graph();
        assert_eq!(g.nearest_zone(Point::new(0.0, 0.0)), Some(n0));
        assert_eq!(g.nearest_zone(Point::new(0.4, 0.0)), Some(n0));
        assert_eq!(g.nearest_zone(Point::new(0.6, 0.0)), Some(n1));
    }

    #[test]
    fn k_nearest_order() {
        let (g, [n0, n1, n2, n3, _]) = super::helpers::grid_graph();
        let nearest = g.k_nearest_zones(Point::new(0.0, 0.0), 3);
        assert_eq!(nearest[0], n0);
        // n1 and n3 are both at distance 1.
        assert!(nearest[1..].contains(&n1) && nearest[1..].contains(&n3));
        assert!(!nearest.contains(&n2));
    }

    #[test]
    fn empty_graph_has_no_nearest() {
        assert_eq!(ZoneGraph::empty().nearest_zone(Point::default()), None);
    }
}

// ── Min-heap ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod heap {
    use wr_core::PlannerRng;

    use crate::MinHeap;

    #[test]
    fn pops_in_ascending_order() {
        let mut rng = PlannerRng::new(17);
        let mut heap = MinHeap::new();
        let mut values: Vec<u32> = (0..200).map(|_| rng.gen_range(0..1_000u32)).collect();
        for &v in &values {
            heap.push(v);
        }
        values.sort_unstable();
        let popped: Vec<u32> = std::iter::from_fn(|| heap.pop()).collect();
        assert_eq!(popped, values);
        assert!(heap.is_empty());
    }

    #[test]
    fn ties_break_on_second_key() {
        let mut heap = MinHeap::new();
        heap.push((5u32, 3u32));
        heap.push((5, 1));
        heap.push((2, 9));
        assert_eq!(heap.peek(), Some(&(2, 9)));
        assert_eq!(heap.pop(), Some((2, 9)));
        assert_eq!(heap.pop(), Some((5, 1)));
        assert_eq!(heap.pop(), Some((5, 3)));
        assert_eq!(heap.pop(), None);
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use wr_core::{Point, ZoneId};

    use crate::{GraphError, UNREACHABLE, ZoneGraphBuilder, shortest_paths};

    #[test]
    fn distances_on_grid() {
        let (g, [n0, n1, n2, n3, n4]) = super::helpers::grid_graph();
        let sp = shortest_paths(&g, n0).unwrap();
        assert_eq!(sp.distance_to(n0), Some(0));
        assert_eq!(sp.distance_to(n1), Some(1));
        assert_eq!(sp.distance_to(n2), Some(2));
        assert_eq!(sp.distance_to(n4), Some(3));
        // 0→1→2→4→3 (4) beats the direct 0→3 road (5).
        assert_eq!(sp.distance_to(n3), Some(4));
    }

    #[test]
    fn path_reconstruction() {
        let (g, [n0, n1, n2, n3, n4]) = super::helpers::grid_graph();
        let sp = shortest_paths(&g, n0).unwrap();
        assert_eq!(sp.path_to(n4), Some(vec![n0, n1, n2, n4]));
        assert_eq!(sp.path_to(n3), Some(vec![n0, n1, n2, n4, n3]));
        assert_eq!(sp.path_to(n0), Some(vec![n0]));
    }

    #[test]
    fn unreachable_stays_at_sentinel() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        let g = b.build().unwrap();
        let sp = shortest_paths(&g, a).unwrap();
        assert_eq!(sp.dist[c.index()], UNREACHABLE);
        assert_eq!(sp.distance_to(c), None);
        assert_eq!(sp.path_to(c), None);
    }

    #[test]
    fn one_way_road_blocks_return() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        b.add_directed_edge(a, c, 2);
        let g = b.build().unwrap();
        assert!(shortest_paths(&g, a).unwrap().is_reachable(c));
        assert!(!shortest_paths(&g, c).unwrap().is_reachable(a));
    }

    #[test]
    fn unknown_source_errors() {
        let (g, _) = super::helpers::grid_graph();
        assert!(matches!(shortest_paths(&g, ZoneId(42)), Err(GraphError::NodeNotFound(_))));
    }

    #[test]
    fn zero_weight_self_loop_is_harmless() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        b.add_directed_edge(a, a, 0);
        b.add_road(a, c, 4);
        let g = b.build().unwrap();
        let sp = shortest_paths(&g, a).unwrap();
        assert_eq!(sp.distance_to(a), Some(0));
        assert_eq!(sp.distance_to(c), Some(4));
    }
}

// ── Distance matrix ───────────────────────────────────────────────────────────

#[cfg(test)]
mod matrix {
    use wr_core::{PlannerRng, Point, ZoneId};

    use crate::{DistanceMatrix, GraphError, UNREACHABLE, ZoneGraph, ZoneGraphBuilder, shortest_paths};

    #[test]
    fn diagonal_zero_and_symmetric() {
        let (g, _) = super::helpers::grid_graph();
        let m = DistanceMatrix::floyd_warshall(&g).unwrap();
        for i in 0..m.size() {
            let id = ZoneId(i as u32);
            assert_eq!(m.distance(id, id), Some(0));
        }
        assert!(m.is_symmetric());
    }

    #[test]
    fn symmetric_on_random_graphs() {
        let mut rng = PlannerRng::new(2024);
        for _ in 0..20 {
            let g = super::helpers::random_graph(&mut rng, 12, 25);
            let m = DistanceMatrix::floyd_warshall(&g).unwrap();
            assert!(m.is_symmetric());
            for i in 0..12 {
                assert_eq!(m.raw(ZoneId(i), ZoneId(i)), Some(0));
            }
        }
    }

    #[test]
    fn floyd_warshall_matches_dijkstra() {
        let mut rng = PlannerRng::new(7);
        for round in 0..25 {
            let g = super::helpers::random_graph(&mut rng, 15, 10 + round * 3);
            let m = DistanceMatrix::floyd_warshall(&g).unwrap();
            for s in 0..g.node_count() {
                let src = ZoneId(s as u32);
                let sp = shortest_paths(&g, src).unwrap();
                assert_eq!(m.row(src).unwrap(), sp.dist.as_slice(), "round {round}, source {s}");
            }
        }
    }

    #[test]
    fn from_dijkstra_equals_floyd_warshall() {
        let mut rng = PlannerRng::new(99);
        for _ in 0..10 {
            let g = super::helpers::random_graph(&mut rng, 10, 30);
            assert_eq!(
                DistanceMatrix::floyd_warshall(&g).unwrap(),
                DistanceMatrix::from_dijkstra(&g).unwrap()
            );
        }
    }

    #[test]
    fn rebuild_is_idempotent() {
        let (g, _) = super::helpers::grid_graph();
        let first = DistanceMatrix::floyd_warshall(&g).unwrap();
        let second = DistanceMatrix::floyd_warshall(&g).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn disconnected_pairs_hold_sentinel() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        let d = b.add_node(Point::default());
        b.add_road(a, c, 2);
        let g = b.build().unwrap();
        let m = DistanceMatrix::floyd_warshall(&g).unwrap();
        assert_eq!(m.raw(a, d), Some(UNREACHABLE));
        assert_eq!(m.distance(a, d), None);
        assert_eq!(m.distance(a, c), Some(2));
        assert_eq!(m.raw(a, ZoneId(7)), None);
    }

    #[test]
    fn parallel_edges_keep_lighter_weight() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        b.add_road(a, c, 9);
        b.add_road(a, c, 4);
        let g = b.build().unwrap();
        assert_eq!(DistanceMatrix::floyd_warshall(&g).unwrap().distance(a, c), Some(4));
    }

    #[test]
    fn empty_graph_is_fatal() {
        assert!(matches!(
            DistanceMatrix::floyd_warshall(&ZoneGraph::empty()),
            Err(GraphError::EmptyGraph)
        ));
        assert!(DistanceMatrix::from_dijkstra(&ZoneGraph::empty()).is_err());
    }

    #[test]
    fn large_weights_do_not_overflow() {
        let mut b = ZoneGraphBuilder::new();
        let a = b.add_node(Point::default());
        let c = b.add_node(Point::default());
        let d = b.add_node(Point::default());
        b.add_road(a, c, u32::MAX - 1);
        b.add_road(c, d, u32::MAX - 1);
        let g = b.build().unwrap();
        let m = DistanceMatrix::floyd_warshall(&g).unwrap();
        assert_eq!(m.distance(a, c), Some(u32::MAX - 1));
        assert_eq!(m.distance(a, d), None);
    }
}
