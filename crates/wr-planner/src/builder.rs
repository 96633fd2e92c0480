//! Fluent builder for constructing a [`Planner`].

use tracing::info;

use wr_core::{PlannerConfig, Point, ZoneId};
use wr_graph::RoadSpec;

use crate::planner::{derive_network, register_zones};
use crate::{Planner, PlannerError, PlannerResult};

/// One zone as supplied by an external loader.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneSpec {
    pub name:          String,
    /// Clamped into 0..=100 on registration.
    pub initial_waste: i32,
    pub pos:           Point,
}

impl ZoneSpec {
    pub fn new(name: impl Into<String>, initial_waste: i32, pos: Point) -> Self {
        Self { name: name.into(), initial_waste, pos }
    }
}

/// Fluent builder for [`Planner`].
///
/// Zones get ids in the order they are added, starting at 0.  Roads may
/// name their endpoints by id ([`roads`](Self::roads)) or by zone name
/// ([`road`](Self::road)); names are resolved case-insensitively at
/// [`build`](Self::build) time.
///
/// # Optional inputs
///
/// | Method         | Default                                         |
/// |----------------|-------------------------------------------------|
/// | `.roads(v)`    | no roads (every zone isolated)                  |
/// | `.depot(name)` | none: capacity routes fail with `NoDepot`       |
///
/// # Example
///
/// ```rust,ignore
/// let planner = PlannerBuilder::new(config)
///     .zones(loader.zones())
///     .roads(loader.roads())
///     .depot("DUMP_YARD")
///     .build()?;
/// ```
pub struct PlannerBuilder {
    config:      PlannerConfig,
    zones:       Vec<ZoneSpec>,
    roads:       Vec<RoadSpec>,
    named_roads: Vec<(String, String, i64)>,
    depot:       Option<String>,
}

impl PlannerBuilder {
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            config,
            zones:       Vec::new(),
            roads:       Vec::new(),
            named_roads: Vec::new(),
            depot:       None,
        }
    }

    pub fn zones(mut self, zones: impl IntoIterator<Item = ZoneSpec>) -> Self {
        self.zones.extend(zones);
        self
    }

    pub fn zone(mut self, name: impl Into<String>, initial_waste: i32, pos: Point) -> Self {
        self.zones.push(ZoneSpec::new(name, initial_waste, pos));
        self
    }

    /// Two-way roads between zone ids.
    pub fn roads(mut self, roads: impl IntoIterator<Item = RoadSpec>) -> Self {
        self.roads.extend(roads);
        self
    }

    /// A two-way road between two named zones.
    pub fn road(mut self, a: impl Into<String>, b: impl Into<String>, weight: i64) -> Self {
        self.named_roads.push((a.into(), b.into(), weight));
        self
    }

    /// Name the zone capacity routes unload at.
    pub fn depot(mut self, name: impl Into<String>) -> Self {
        self.depot = Some(name.into());
        self
    }

    /// Validate the configuration, register every zone, resolve named
    /// roads and the depot, and build the graph and distance matrix.
    ///
    /// # Errors
    ///
    /// * [`PlannerError::Core`] if the configuration is invalid.
    /// * [`PlannerError::Zone`] on a duplicate zone name.
    /// * [`PlannerError::UnknownZone`] if a road or the depot names a zone
    ///   that was never added.
    /// * [`PlannerError::Graph`] on a bad road or an empty zone list.
    pub fn build(self) -> PlannerResult<Planner> {
        self.config.validate()?;

        let mut named = Vec::with_capacity(self.named_roads.len());
        for (a, b, weight) in &self.named_roads {
            named.push(RoadSpec::new(self.position_of(a)?, self.position_of(b)?, *weight));
        }
        let mut roads = self.roads;
        roads.extend(named);

        let zones = register_zones(&self.zones, self.config.max_history)?;
        let (graph, matrix) = derive_network(&zones, &roads)?;
        info!(zones = zones.len(), roads = roads.len(), "planner built");
        let mut planner = Planner::from_parts(self.config, zones, roads, graph, matrix);

        if let Some(name) = &self.depot {
            let depot = planner
                .zones()
                .find_by_name(name)
                .ok_or_else(|| PlannerError::UnknownZone(name.clone()))?;
            planner.set_depot(depot)?;
        }
        Ok(planner)
    }

    /// Id the zone called `name` will receive.
    fn position_of(&self, name: &str) -> PlannerResult<ZoneId> {
        let key = name.to_uppercase();
        self.zones
            .iter()
            .position(|z| z.name.to_uppercase() == key)
            .and_then(|i| ZoneId::try_from(i).ok())
            .ok_or_else(|| PlannerError::UnknownZone(name.to_owned()))
    }
}
