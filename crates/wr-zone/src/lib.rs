//! `wr-zone`: per-zone state for the wasteroute planner.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`zone`]        | `Zone`, `Priority`                                        |
//! | [`history`]     | `History` (bounded, oldest-evicted reading window)        |
//! | [`range_max`]   | `RangeMaxIndex` (segment tree, range-max queries)         |
//! | [`registry`]    | `ZoneRegistry`: the single owner of all zone records     |
//! | [`forecast`]    | trend + jitter next-reading prediction                    |
//! | [`stats`]       | `WasteSummary`, `HistoryStats`, `ZoneTrend`               |
//! | [`error`]       | `ZoneError`, `ZoneResult<T>`                              |
//!
//! # Mutation discipline
//!
//! Nothing outside [`ZoneRegistry`] can change a zone's waste level or
//! history.  Every level change goes through one private mutator that also
//! re-derives [`Priority`], so the priority invariant holds after any call.

pub mod error;
pub mod forecast;
pub mod history;
pub mod range_max;
pub mod registry;
pub mod stats;
pub mod zone;

#[cfg(test)]
mod tests;

pub use error::{ZoneError, ZoneResult};
pub use forecast::{Prediction, compute_prediction, forecast, predict_next, trend};
pub use history::History;
pub use range_max::RangeMaxIndex;
pub use registry::ZoneRegistry;
pub use stats::{HistoryStats, WasteSummary, ZoneTrend, trend_report};
pub use zone::{MAX_WASTE, Priority, Zone};
