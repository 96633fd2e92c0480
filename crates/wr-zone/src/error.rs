//! Zone-subsystem error type.

use thiserror::Error;

use wr_core::{CoreError, ZoneId};

/// Errors produced by `wr-zone`.
#[derive(Debug, Error)]
pub enum ZoneError {
    #[error("zone {0} not found in registry")]
    NotFound(ZoneId),

    #[error("zone name {0:?} is already registered")]
    DuplicateName(String),

    #[error("waste level {value} for zone {zone} is outside 0..=100")]
    WasteOutOfRange { zone: ZoneId, value: i32 },

    #[error("history position {pos} out of range for length {len}")]
    HistoryIndex { pos: usize, len: usize },

    #[error("too many zones for a 32-bit zone id")]
    IdSpaceExhausted,

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ZoneResult<T> = Result<T, ZoneError>;
