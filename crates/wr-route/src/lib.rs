//! `wr-route`: collection route construction.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`route`]    | `Route`, `Strategy`, `CostModel`                               |
//! | [`builder`]  | `RouteBuilder` trait, shared input checks                      |
//! | [`greedy`]   | `GreedyBuilder`: nearest-neighbour sweep                      |
//! | [`capacity`] | `CapacityBuilder`: multi-trip with forced depot detours       |
//! | [`priority`] | `PriorityBuilder`: fullest zone first, `heap_ranking`         |
//! | [`compare`]  | `RouteComparison`, `Efficiency`, `Rating`                      |
//! | [`estimate`] | `CostEstimate`: route-free network cost projection             |
//! | [`pay`]      | `DriverPay`: daily driver pay                                  |
//! | [`history`]  | `RouteHistory`: saved routes and best-of queries              |
//! | [`schedule`] | `CollectionSchedule`, `Weekday`, daily collection run          |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                                 |
//!
//! # Distances
//!
//! Every builder reads leg lengths from a precomputed
//! [`DistanceMatrix`](wr_graph::DistanceMatrix).  The matrix must describe
//! the same zone set as the registry; builders check its size and fail
//! with [`RouteError::StaleMatrix`] otherwise.  Unreachable candidates are
//! never an error: they are listed in [`Route::unreached`].

pub mod builder;
pub mod capacity;
pub mod compare;
pub mod error;
pub mod estimate;
pub mod greedy;
pub mod history;
pub mod pay;
pub mod priority;
pub mod route;
pub mod schedule;


pub use builder::RouteBuilder;
pub use capacity::CapacityBuilder;
pub use compare::{Efficiency, Rating, RouteComparison};
pub use error::{RouteError, RouteResult};
pub use estimate::{CostEstimate, Recommendation};
pub use greedy::GreedyBuilder;
pub use history::RouteHistory;
pub use pay::DriverPay;
pub use priority::{PriorityBuilder, heap_ranking};
pub use route::{CostModel, Route, Strategy};
pub use schedule::{CollectionSchedule, Weekday, collect_today};
