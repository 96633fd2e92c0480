//! Route-subsystem error type.

use thiserror::Error;

use wr_zone::ZoneError;

/// Errors produced by `wr-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route has no candidate zones")]
    NoCandidates,

    #[error("distance matrix covers {matrix} zones but the registry holds {registry}")]
    StaleMatrix { matrix: usize, registry: usize },

    #[error("invalid shift: {km} km over {hours} h")]
    InvalidShift { km: f64, hours: f64 },

    #[error(transparent)]
    Zone(#[from] ZoneError),
}

pub type RouteResult<T> = Result<T, RouteError>;
