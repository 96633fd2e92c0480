//! The `RouteBuilder` trait and helpers shared by every policy.

use wr_core::ZoneId;
use wr_graph::DistanceMatrix;
use wr_zone::{ZoneError, ZoneRegistry};

use crate::{Route, RouteError, RouteResult, Strategy};

/// A route construction policy.
///
/// All policies share one signature: a start zone, a candidate list, the
/// current distance matrix and the zone registry.  The registry is taken
/// mutably because a policy may collect waste as it goes; only
/// [`CapacityBuilder`](crate::CapacityBuilder) does.
///
/// # Errors
///
/// * [`RouteError::NoCandidates`] if `targets` is empty.
/// * [`RouteError::StaleMatrix`] if `matrix` was built for another zone set.
/// * [`RouteError::Zone`] if `start` or a target is not registered.
pub trait RouteBuilder {
    fn strategy(&self) -> Strategy;

    fn build(
        &self,
        start:   ZoneId,
        targets: &[ZoneId],
        matrix:  &DistanceMatrix,
        zones:   &mut ZoneRegistry,
    ) -> RouteResult<Route>;
}

/// Validate builder inputs against the registry and matrix.
pub(crate) fn check_inputs(
    start:   ZoneId,
    targets: &[ZoneId],
    matrix:  &DistanceMatrix,
    zones:   &ZoneRegistry,
) -> RouteResult<()> {
    if matrix.size() != zones.len() {
        return Err(RouteError::StaleMatrix { matrix: matrix.size(), registry: zones.len() });
    }
    if !zones.contains(start) {
        return Err(ZoneError::NotFound(start).into());
    }
    if targets.is_empty() {
        return Err(RouteError::NoCandidates);
    }
    if let Some(&bad) = targets.iter().find(|t| !zones.contains(**t)) {
        return Err(ZoneError::NotFound(bad).into());
    }
    Ok(())
}

/// Targets sorted ascending, duplicates and `start` removed.
pub(crate) fn ascending_candidates(start: ZoneId, targets: &[ZoneId]) -> Vec<ZoneId> {
    let mut out: Vec<ZoneId> = targets.iter().copied().filter(|t| *t != start).collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Nearest reachable zone from `from` among `candidates`.
///
/// Ties go to the first candidate in iteration order.
pub(crate) fn nearest(
    from:       ZoneId,
    candidates: impl IntoIterator<Item = ZoneId>,
    matrix:     &DistanceMatrix,
) -> Option<(ZoneId, u32)> {
    let mut best: Option<(ZoneId, u32)> = None;
    for c in candidates {
        let Some(d) = matrix.distance(from, c) else {
            continue;
        };
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((c, d));
        }
    }
    best
}
