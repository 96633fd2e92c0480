//! `wr-graph`: road graph and shortest paths.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`network`]  | `ZoneGraph` (CSR + R-tree), `ZoneGraphBuilder`, `RoadSpec`   |
//! | [`heap`]     | `MinHeap`: binary min-heap used by Dijkstra                 |
//! | [`dijkstra`] | `shortest_paths`, `ShortestPaths`                            |
//! | [`matrix`]   | `DistanceMatrix` (Floyd–Warshall or Dijkstra-per-source)     |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                               |
//!
//! # Unreachable pairs
//!
//! Distances are `u32`.  A pair with no path holds [`UNREACHABLE`]
//! (`u32::MAX`); it is a value, not an error.  The `Option`-returning
//! accessors map it to `None`.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | `DistanceMatrix::from_dijkstra` runs sources on Rayon.   |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `RoadSpec`.          |

pub mod dijkstra;
pub mod error;
pub mod heap;
pub mod matrix;
pub mod network;

#[cfg(test)]
mod tests;

pub use dijkstra::{ShortestPaths, shortest_paths};
pub use error::{GraphError, GraphResult};
pub use heap::MinHeap;
pub use matrix::DistanceMatrix;
pub use network::{RoadSpec, ZoneGraph, ZoneGraphBuilder};

/// Sentinel distance for "no path".
pub const UNREACHABLE: u32 = u32::MAX;
