//! Side-by-side route comparison and per-route efficiency.

use std::cmp::Ordering;
use std::fmt;

use crate::{Route, Strategy};

/// Difference between two routes over the same candidates.
///
/// Deltas are `second - first`: a positive `distance_delta` means the
/// first route is shorter.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteComparison {
    pub first:          Strategy,
    pub second:         Strategy,
    pub distance_delta: i64,
    pub cost_delta:     f64,
    pub waste_delta:    i64,
}

impl RouteComparison {
    pub fn of(first: &Route, second: &Route) -> Self {
        Self {
            first:          first.strategy,
            second:         second.strategy,
            distance_delta: i64::from(second.total_distance) - i64::from(first.total_distance),
            cost_delta:     second.total_cost - first.total_cost,
            waste_delta:    i64::from(second.total_waste) - i64::from(first.total_waste),
        }
    }

    /// The strategy with the shorter route, `None` on a tie.
    pub fn shorter(&self) -> Option<Strategy> {
        match self.distance_delta.cmp(&0) {
            Ordering::Greater => Some(self.first),
            Ordering::Less    => Some(self.second),
            Ordering::Equal   => None,
        }
    }

    /// How much shorter the winning route is.
    pub fn distance_saved(&self) -> u64 {
        self.distance_delta.unsigned_abs()
    }
}

// ── Efficiency ────────────────────────────────────────────────────────────────

/// Efficiency class derived from waste collected per unit of currency.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Rating {
    /// `> 5.0` excellent, `> 3.0` good, `> 1.5` average, otherwise poor.
    pub fn from_ratio(waste_per_cost: f64) -> Self {
        if waste_per_cost > 5.0 {
            Rating::Excellent
        } else if waste_per_cost > 3.0 {
            Rating::Good
        } else if waste_per_cost > 1.5 {
            Rating::Average
        } else {
            Rating::Poor
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Excellent => "EXCELLENT",
            Rating::Good      => "GOOD",
            Rating::Average   => "AVERAGE",
            Rating::Poor      => "POOR",
        };
        f.write_str(label)
    }
}

/// Efficiency indicators of one route.
///
/// Every ratio divides by `max(1, denominator)`, so a zero-distance or
/// zero-cost route yields finite numbers.
#[derive(Clone, Debug, PartialEq)]
pub struct Efficiency {
    pub waste_per_distance: f64,
    pub cost_per_waste:     f64,
    pub waste_per_cost:     f64,
    pub rating:             Rating,
}

impl Efficiency {
    /// `None` for a route with an empty path.
    pub fn of(route: &Route) -> Option<Self> {
        if route.path.is_empty() {
            return None;
        }
        let waste = f64::from(route.total_waste);
        let waste_per_cost = waste / route.total_cost.max(1.0);
        Some(Self {
            waste_per_distance: waste / f64::from(route.total_distance).max(1.0),
            cost_per_waste:     route.total_cost / waste.max(1.0),
            waste_per_cost,
            rating:             Rating::from_ratio(waste_per_cost),
        })
    }
}
