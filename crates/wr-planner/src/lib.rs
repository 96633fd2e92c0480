//! `wr-planner`: the planner facade.
//!
//! Owns the zone registry, the road list, the derived graph and distance
//! matrix, the planner RNG and the saved routes, and exposes every planning
//! operation through one [`Planner`] value.
//!
//! # Derived state
//!
//! ```text
//! ZoneRegistry + roads ──► ZoneGraph ──► DistanceMatrix ──► route builders
//!        ▲                                                        │
//!        └──────────── collection / spread / forecast ◄───────────┘
//! ```
//!
//! The graph and matrix are rebuilt in full whenever zones or roads change.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wr_core::{PlannerConfig, Point};
//! use wr_planner::PlannerBuilder;
//!
//! let mut planner = PlannerBuilder::new(PlannerConfig::default())
//!     .zone("DEPOT", 0, Point::new(0.0, 0.0))
//!     .zone("MARKET", 70, Point::new(1.0, 0.0))
//!     .road("DEPOT", "MARKET", 3)
//!     .depot("DEPOT")
//!     .build()?;
//! let route = planner.build_capacity_route(planner.depot().unwrap())?;
//! ```

pub mod builder;
pub mod error;
pub mod generation;
pub mod observer;
pub mod planner;
pub mod spread;


pub use builder::{PlannerBuilder, ZoneSpec};
pub use error::{PlannerError, PlannerResult};
pub use generation::{GenerationReport, ZoneGrowth, simulate_generation};
pub use observer::{GenerationObserver, NoopObserver};
pub use planner::{Planner, StrategyComparison};
pub use spread::{SpreadHit, spread};
