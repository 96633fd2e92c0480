//! The `Planner` facade.

use tracing::{info, warn};

use wr_core::{PlannerConfig, PlannerRng, Point, ZoneId};
use wr_graph::{DistanceMatrix, RoadSpec, ShortestPaths, ZoneGraph, ZoneGraphBuilder, shortest_paths};
use wr_route::{
    CapacityBuilder, CollectionSchedule, CostEstimate, CostModel, DriverPay, Efficiency,
    GreedyBuilder, PriorityBuilder, Route, RouteBuilder, RouteComparison, RouteHistory, Weekday,
    collect_today,
};
use wr_zone::{
    HistoryStats, Prediction, Priority, WasteSummary, ZoneError, ZoneRegistry, ZoneTrend,
    forecast, predict_next, trend_report,
};

use crate::{
    GenerationObserver, GenerationReport, NoopObserver, PlannerError, PlannerResult, SpreadHit,
    ZoneSpec, generation, spread,
};

/// Greedy and priority routes over the same candidates, side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategyComparison {
    pub greedy:     Route,
    pub priority:   Route,
    pub comparison: RouteComparison,
}

/// Owns all planner state and exposes every planning operation.
///
/// The zone registry is the single source of truth.  The graph and distance
/// matrix are derived from it and the road list, and are rebuilt whenever
/// either changes, so route builders always see a current matrix.
///
/// Create via [`PlannerBuilder`](crate::PlannerBuilder).
#[derive(Debug)]
pub struct Planner {
    config: PlannerConfig,
    zones:  ZoneRegistry,
    roads:  Vec<RoadSpec>,
    graph:  ZoneGraph,
    matrix: DistanceMatrix,
    depot:  Option<ZoneId>,
    cost:   CostModel,
    rng:    PlannerRng,
    routes: RouteHistory,
}

// ── Derived-state construction ────────────────────────────────────────────────

pub(crate) fn register_zones(specs: &[ZoneSpec], max_history: usize) -> PlannerResult<ZoneRegistry> {
    let mut zones = ZoneRegistry::new(max_history);
    for spec in specs {
        zones.add_zone(spec.name.clone(), spec.initial_waste, spec.pos)?;
    }
    Ok(zones)
}

/// Build the graph and distance matrix for `zones` and `roads`.
pub(crate) fn derive_network(
    zones: &ZoneRegistry,
    roads: &[RoadSpec],
) -> PlannerResult<(ZoneGraph, DistanceMatrix)> {
    let mut b = ZoneGraphBuilder::with_capacity(zones.len(), roads.len() * 2);
    for zone in zones.iter() {
        b.add_node(zone.pos);
    }
    for &road in roads {
        b.add_road_spec(road)?;
    }
    let graph = b.build()?;

    #[cfg(feature = "parallel")]
    let matrix = DistanceMatrix::from_dijkstra(&graph)?;
    #[cfg(not(feature = "parallel"))]
    let matrix = DistanceMatrix::floyd_warshall(&graph)?;

    Ok((graph, matrix))
}

impl Planner {
    pub(crate) fn from_parts(
        config: PlannerConfig,
        zones:  ZoneRegistry,
        roads:  Vec<RoadSpec>,
        graph:  ZoneGraph,
        matrix: DistanceMatrix,
    ) -> Self {
        Self {
            cost: CostModel::from_config(&config),
            rng: PlannerRng::new(config.seed),
            config,
            zones,
            roads,
            graph,
            matrix,
            depot: None,
            routes: RouteHistory::new(),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn zones(&self) -> &ZoneRegistry {
        &self.zones
    }

    pub fn graph(&self) -> &ZoneGraph {
        &self.graph
    }

    pub fn roads(&self) -> &[RoadSpec] {
        &self.roads
    }

    pub fn depot(&self) -> Option<ZoneId> {
        self.depot
    }

    pub fn cost_model(&self) -> &CostModel {
        &self.cost
    }

    pub fn waste(&self, id: ZoneId) -> PlannerResult<u8> {
        Ok(self.zones.waste(id)?)
    }

    pub fn priority(&self, id: ZoneId) -> PlannerResult<Priority> {
        Ok(self.zones.priority(id)?)
    }

    pub fn history_len(&self, id: ZoneId) -> PlannerResult<usize> {
        Ok(self.zones.history_len(id)?)
    }

    /// Exact, case-insensitive name lookup.
    pub fn find_zone(&self, name: &str) -> Option<ZoneId> {
        self.zones.find_by_name(name)
    }

    /// Zone closest to a planar position.
    pub fn nearest_zone(&self, pos: Point) -> Option<ZoneId> {
        self.graph.nearest_zone(pos)
    }

    pub fn summary(&self) -> WasteSummary {
        WasteSummary::of(&self.zones)
    }

    pub fn trend_report(&self) -> Vec<ZoneTrend> {
        trend_report(&self.zones)
    }

    /// Every zone, fullest first.
    pub fn priority_ranking(&self) -> Vec<ZoneId> {
        self.zones.ranked_by_waste()
    }

    pub fn cost_estimate(&self) -> CostEstimate {
        CostEstimate::of(&self.zones, &self.cost)
    }

    /// `None` when the zone has fewer than two readings.
    pub fn history_stats(&self, id: ZoneId) -> PlannerResult<Option<HistoryStats>> {
        Ok(HistoryStats::of(self.zones.history(id)?))
    }

    // ── Network changes ───────────────────────────────────────────────────

    /// Replace every zone and road and rebuild the graph and matrix.
    ///
    /// On error the planner is left unchanged.  A depot id that no longer
    /// exists is cleared.
    pub fn load_graph(&mut self, zones: &[ZoneSpec], roads: &[RoadSpec]) -> PlannerResult<()> {
        let registry = register_zones(zones, self.config.max_history)?;
        let (graph, matrix) = derive_network(&registry, roads)?;
        self.zones = registry;
        self.roads = roads.to_vec();
        self.graph = graph;
        self.matrix = matrix;
        if let Some(depot) = self.depot.filter(|d| !self.zones.contains(*d)) {
            warn!(depot = %depot, "depot no longer exists, cleared");
            self.depot = None;
        }
        info!(zones = self.zones.len(), roads = self.roads.len(), "graph loaded");
        Ok(())
    }

    /// Register a new zone.  It starts with no roads.
    pub fn add_zone(
        &mut self,
        name:          impl Into<String>,
        initial_waste: i32,
        pos:           Point,
    ) -> PlannerResult<ZoneId> {
        let id = self.zones.add_zone(name, initial_waste, pos)?;
        self.rebuild()?;
        Ok(id)
    }

    /// Add a two-way road and rebuild the matrix.  On error nothing changes.
    pub fn add_road(&mut self, a: ZoneId, b: ZoneId, weight: i64) -> PlannerResult<()> {
        let mut roads = self.roads.clone();
        roads.push(RoadSpec::new(a, b, weight));
        let (graph, matrix) = derive_network(&self.zones, &roads)?;
        self.roads = roads;
        self.graph = graph;
        self.matrix = matrix;
        Ok(())
    }

    pub fn set_depot(&mut self, depot: ZoneId) -> PlannerResult<()> {
        if !self.zones.contains(depot) {
            return Err(ZoneError::NotFound(depot).into());
        }
        self.depot = Some(depot);
        Ok(())
    }

    fn rebuild(&mut self) -> PlannerResult<()> {
        let (graph, matrix) = derive_network(&self.zones, &self.roads)?;
        self.graph = graph;
        self.matrix = matrix;
        Ok(())
    }

    // ── Distances ─────────────────────────────────────────────────────────

    /// The current all-pairs matrix.  Always in sync with the registry.
    pub fn all_pairs_distances(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Dijkstra from `source`, independent of the matrix.
    pub fn shortest_path_from(&self, source: ZoneId) -> PlannerResult<ShortestPaths> {
        Ok(shortest_paths(&self.graph, source)?)
    }

    // ── Routing ───────────────────────────────────────────────────────────

    pub fn build_greedy_route(&mut self, start: ZoneId, targets: &[ZoneId]) -> PlannerResult<Route> {
        self.run_builder(&GreedyBuilder::new(self.cost), start, targets)
    }

    /// Capacity route over every zone, unloading at the depot.
    ///
    /// Empties every zone it visits.
    pub fn build_capacity_route(&mut self, start: ZoneId) -> PlannerResult<Route> {
        let depot = self.depot.ok_or(PlannerError::NoDepot)?;
        let builder = CapacityBuilder::new(self.config.truck_capacity, depot, self.cost);
        let targets: Vec<ZoneId> = self.zones.ids().collect();
        self.run_builder(&builder, start, &targets)
    }

    pub fn build_priority_route(&mut self, start: ZoneId, targets: &[ZoneId]) -> PlannerResult<Route> {
        self.run_builder(&PriorityBuilder::new(self.cost), start, targets)
    }

    fn run_builder(
        &mut self,
        builder: &impl RouteBuilder,
        start:   ZoneId,
        targets: &[ZoneId],
    ) -> PlannerResult<Route> {
        Ok(builder.build(start, targets, &self.matrix, &mut self.zones)?)
    }

    /// Build greedy and priority routes over the same candidates and
    /// compare them.  Neither route mutates zone state.
    pub fn compare_strategies(
        &mut self,
        start:   ZoneId,
        targets: &[ZoneId],
    ) -> PlannerResult<StrategyComparison> {
        let greedy = self.build_greedy_route(start, targets)?;
        let priority = self.build_priority_route(start, targets)?;
        let comparison = RouteComparison::of(&greedy, &priority);
        Ok(StrategyComparison { greedy, priority, comparison })
    }

    /// Today/tomorrow split at current levels.
    pub fn schedule(&self) -> CollectionSchedule {
        CollectionSchedule::plan(&self.zones)
    }

    /// Zones on the weekly rota for `day`.
    pub fn rota(&self, day: Weekday) -> Vec<ZoneId> {
        CollectionSchedule::for_day(&self.zones, day)
    }

    /// Drive today's run from `start` and empty every zone reached.
    pub fn collect_today(&mut self, start: ZoneId) -> PlannerResult<Route> {
        Ok(collect_today(start, &self.matrix, &mut self.zones, &self.cost)?)
    }

    // ── Saved routes ──────────────────────────────────────────────────────

    /// Keep `route` for later comparison; returns its index.
    pub fn save_route(&mut self, route: Route) -> usize {
        self.routes.push(route)
    }

    pub fn route_history(&self) -> &RouteHistory {
        &self.routes
    }

    pub fn efficiency(&self, index: usize) -> Option<Efficiency> {
        self.routes.get(index).and_then(Efficiency::of)
    }

    /// Pay for driving saved route `index` over `hours`.
    pub fn driver_pay(&self, index: usize, hours: f64) -> PlannerResult<Option<DriverPay>> {
        match self.routes.get(index) {
            Some(route) => Ok(Some(DriverPay::for_route(route, hours)?)),
            None => Ok(None),
        }
    }

    // ── Zone state ────────────────────────────────────────────────────────

    /// Operator reading.  Rejects values outside 0..=100.
    pub fn update_waste(&mut self, id: ZoneId, value: i32) -> PlannerResult<()> {
        Ok(self.zones.update_waste(id, value)?)
    }

    /// Append a reading without changing the current level.
    pub fn record_reading(&mut self, id: ZoneId, value: i32) -> PlannerResult<()> {
        Ok(self.zones.record_reading(id, value)?)
    }

    // ── Simulation & forecasting ──────────────────────────────────────────

    /// Breadth-first waste spread from `start`; see [`spread`].
    pub fn spread_from(&mut self, start: ZoneId) -> PlannerResult<Vec<SpreadHit>> {
        spread(&self.graph, &mut self.zones, start, self.config.spread_step)
    }

    /// Forecast the next reading without recording it.
    pub fn forecast(&mut self, id: ZoneId) -> PlannerResult<Prediction> {
        Ok(forecast(&self.zones, id, &mut self.rng, self.config.forecast_jitter)?)
    }

    /// Forecast the next reading and record it in history.
    pub fn predict_next(&mut self, id: ZoneId) -> PlannerResult<Prediction> {
        Ok(predict_next(&mut self.zones, id, &mut self.rng, self.config.forecast_jitter)?)
    }

    pub fn simulate_generation(&mut self, days: u32, growth_percent: f64) -> PlannerResult<GenerationReport> {
        self.simulate_generation_with(days, growth_percent, &mut NoopObserver)
    }

    pub fn simulate_generation_with(
        &mut self,
        days:           u32,
        growth_percent: f64,
        observer:       &mut impl GenerationObserver,
    ) -> PlannerResult<GenerationReport> {
        generation::simulate_generation(
            &mut self.zones,
            self.depot,
            days,
            growth_percent,
            &mut self.rng,
            observer,
        )
    }
}
