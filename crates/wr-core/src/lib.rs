//! `wr-core`: foundational types for the wasteroute collection planner.
//!
//! Every other `wr-*` crate depends on this one.  It has no `wr-*`
//! dependencies and minimal external ones (`rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `ZoneId`                                          |
//! | [`geo`]    | planar `Point`                                    |
//! | [`config`] | `PlannerConfig` and its defaults                  |
//! | [`rng`]    | `PlannerRng`                                      |
//! | [`error`]  | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PlannerConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use ids::ZoneId;
pub use rng::PlannerRng;
