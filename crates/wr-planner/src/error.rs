use thiserror::Error;

use wr_core::CoreError;
use wr_graph::GraphError;
use wr_route::RouteError;
use wr_zone::ZoneError;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("no depot zone is configured")]
    NoDepot,

    #[error("no zone named {0:?}")]
    UnknownZone(String),

    #[error("invalid simulation parameters: {0}")]
    InvalidSimulation(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Route(#[from] RouteError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
