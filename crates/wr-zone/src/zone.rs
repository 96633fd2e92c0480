//! The zone record and its derived priority class.

use std::fmt;

use wr_core::{Point, ZoneId};

use crate::{History, RangeMaxIndex};

/// Upper bound of a zone's waste level, in percent.
pub const MAX_WASTE: u8 = 100;

/// Collection urgency derived from the current waste level.
///
/// Ordered most urgent first, so sorting ascending by `Priority` puts
/// critical zones at the front.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Priority {
    /// Above 80 %.
    Critical = 1,
    /// Above 50 %, up to 80 %.
    Warning = 2,
    /// 50 % or below.
    Healthy = 3,
}

impl Priority {
    pub fn from_waste(level: u8) -> Self {
        if level > 80 {
            Priority::Critical
        } else if level > 50 {
            Priority::Warning
        } else {
            Priority::Healthy
        }
    }

    /// Numeric class: 1 = critical, 2 = warning, 3 = healthy.
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::Critical => "CRITICAL",
            Priority::Warning  => "WARNING",
            Priority::Healthy  => "HEALTHY",
        };
        f.write_str(label)
    }
}

/// One collection zone.
///
/// `id`, `name` and `pos` are fixed at registration.  Waste level, priority
/// and history are private: read them through the accessors, change them
/// through [`ZoneRegistry`](crate::ZoneRegistry).
#[derive(Clone, Debug)]
pub struct Zone {
    pub id:   ZoneId,
    pub name: String,
    pub pos:  Point,

    waste:    u8,
    priority: Priority,
    history:  History,
    /// Range-max index over `history`, rebuilt on every append.
    index:    RangeMaxIndex<u8>,
}

impl Zone {
    pub(crate) fn new(id: ZoneId, name: String, pos: Point, waste: u8, max_history: usize) -> Self {
        let history = History::new(max_history, waste);
        let index = RangeMaxIndex::build(&history.to_vec());
        Self {
            id,
            name,
            pos,
            waste,
            priority: Priority::from_waste(waste),
            history,
            index,
        }
    }

    /// Current waste level, 0..=100.
    #[inline]
    pub fn waste(&self) -> u8 {
        self.waste
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn range_index(&self) -> &RangeMaxIndex<u8> {
        &self.index
    }

    /// Highest reading in the whole history window.
    pub fn history_max(&self) -> Option<u8> {
        self.index.max()
    }

    /// Highest reading in history positions `lo..=hi` (0 = oldest).
    pub fn history_max_in(&self, lo: usize, hi: usize) -> Option<u8> {
        self.index.query(lo, hi)
    }

    /// Set the level and re-derive priority.  Callers clamp beforehand.
    pub(crate) fn set_level(&mut self, level: u8) {
        debug_assert!(level <= MAX_WASTE);
        self.waste = level;
        self.priority = Priority::from_waste(level);
    }

    /// Append a reading and rebuild the range-max index.
    pub(crate) fn push_reading(&mut self, value: u8) {
        self.history.push(value);
        self.index = RangeMaxIndex::build(&self.history.to_vec());
    }
}
