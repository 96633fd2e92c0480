//! Saved routes.

use crate::Route;

/// Append-only list of routes kept for later comparison.
///
/// Queries return `(index, route)`; indices are stable because routes are
/// never removed.  Ties go to the earliest saved route.
#[derive(Clone, Debug, Default)]
pub struct RouteHistory {
    routes: Vec<Route>,
}

impl RouteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `route` and return its index.
    pub fn push(&mut self, route: Route) -> usize {
        self.routes.push(route);
        self.routes.len() - 1
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter()
    }

    pub fn best_by_distance(&self) -> Option<(usize, &Route)> {
        self.best_by(|candidate, best| candidate.total_distance < best.total_distance)
    }

    pub fn best_by_cost(&self) -> Option<(usize, &Route)> {
        self.best_by(|candidate, best| candidate.total_cost < best.total_cost)
    }

    pub fn most_waste(&self) -> Option<(usize, &Route)> {
        self.best_by(|candidate, best| candidate.total_waste > best.total_waste)
    }

    /// First route for which no later route `beats` it.
    fn best_by(&self, beats: impl Fn(&Route, &Route) -> bool) -> Option<(usize, &Route)> {
        let mut iter = self.routes.iter().enumerate();
        let mut best = iter.next()?;
        for (i, r) in iter {
            if beats(r, best.1) {
                best = (i, r);
            }
        }
        Some(best)
    }
}
