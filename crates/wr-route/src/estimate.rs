//! Collection cost estimate for the whole network.
//!
//! A quick, route-free projection: every zone above the collection
//! threshold is charged a flat distance, and fuel and cost follow from the
//! [`CostModel`].  Useful before any route has been built.

use std::fmt;

use wr_core::ZoneId;
use wr_zone::{WasteSummary, ZoneRegistry};

use crate::CostModel;

/// Distance charged per zone that needs collection.
pub const DISTANCE_PER_COLLECTION: u32 = 5;

/// Zones strictly above this level need collection.
pub const COLLECTION_THRESHOLD: u8 = 50;

/// Share of critical zones above which collection is urgent.
pub const URGENT_CRITICAL_SHARE: f64 = 0.3;

/// What the estimate suggests doing next.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recommendation {
    /// More than 30% of zones are critical.
    Immediate,
    /// At least one zone is critical.
    Soon,
    Regular,
}

impl Recommendation {
    pub fn of(critical: usize, zones: usize) -> Self {
        if critical as f64 > zones as f64 * URGENT_CRITICAL_SHARE {
            Recommendation::Immediate
        } else if critical > 0 {
            Recommendation::Soon
        } else {
            Recommendation::Regular
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Recommendation::Immediate => "immediate action required",
            Recommendation::Soon      => "schedule collection soon",
            Recommendation::Regular   => "regular collection sufficient",
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostEstimate {
    pub zones:          usize,
    pub average_waste:  f64,
    pub critical:       usize,
    /// Zones above [`COLLECTION_THRESHOLD`], in id order.
    pub collections:    Vec<ZoneId>,
    pub distance:       u32,
    pub fuel:           f64,
    pub cost:           f64,
    /// Cost of one flat-distance collection.
    pub cost_per_zone:  f64,
    pub recommendation: Recommendation,
}

impl CostEstimate {
    pub fn of(zones: &ZoneRegistry, cost: &CostModel) -> Self {
        let summary = WasteSummary::of(zones);
        let collections = zones.needing_collection(COLLECTION_THRESHOLD);
        let distance = u32::try_from(collections.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(DISTANCE_PER_COLLECTION);

        Self {
            zones:          summary.zones,
            average_waste:  summary.average,
            critical:       summary.critical,
            collections,
            distance,
            fuel:           cost.fuel(distance),
            cost:           cost.cost(distance),
            cost_per_zone:  cost.cost(DISTANCE_PER_COLLECTION),
            recommendation: Recommendation::of(summary.critical, summary.zones),
        }
    }
}
