//! Strongly typed zone identifier.
//!
//! Zone ids are dense and zero-based: the registry assigns them in load
//! order and never reuses or reassigns one.  The inner integer is `pub` so
//! per-zone `Vec`s can be indexed directly, but prefer `.index()`.

use std::fmt;

/// Index of a collection zone in the registry, the graph, and every
/// row/column of the distance matrix.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneId(pub u32);

impl ZoneId {
    /// Predecessor sentinel for path reconstruction; never assigned to a zone.
    pub const INVALID: ZoneId = ZoneId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for ZoneId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZoneId({})", self.0)
    }
}

/// Registry position to id; fails once the `u32` id space is exhausted.
impl TryFrom<usize> for ZoneId {
    type Error = std::num::TryFromIntError;

    fn try_from(n: usize) -> Result<ZoneId, Self::Error> {
        u32::try_from(n).map(ZoneId)
    }
}
