//! Bounded per-zone reading history.
//!
//! Readings are appended at the back.  Once the window holds `capacity`
//! readings, each append evicts the oldest one, so the window always covers
//! the most recent `capacity` readings in chronological order.

use std::collections::VecDeque;

/// Chronological, bounded sequence of waste-level readings.
///
/// Never empty: it is seeded with the zone's initial level at construction
/// and eviction only happens on append.
#[derive(Clone, Debug)]
pub struct History {
    readings: VecDeque<u8>,
    capacity: usize,
}

impl History {
    /// Create a window seeded with one reading.  `capacity` is raised to 1
    /// if zero.
    pub fn new(capacity: usize, initial: u8) -> Self {
        let capacity = capacity.max(1);
        let mut readings = VecDeque::with_capacity(capacity);
        readings.push_back(initial);
        Self { readings, capacity }
    }

    /// Append a reading, returning the evicted one if the window was full.
    pub fn push(&mut self, value: u8) -> Option<u8> {
        let evicted = if self.readings.len() >= self.capacity {
            self.readings.pop_front()
        } else {
            None
        };
        self.readings.push_back(value);
        evicted
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Always `false` for a constructed history; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent reading.
    pub fn last(&self) -> Option<u8> {
        self.readings.back().copied()
    }

    /// Oldest reading still in the window.
    pub fn first(&self) -> Option<u8> {
        self.readings.front().copied()
    }

    /// Reading just before the most recent one.
    pub fn second_to_last(&self) -> Option<u8> {
        let n = self.readings.len();
        if n < 2 { None } else { self.readings.get(n - 2).copied() }
    }

    pub fn get(&self, pos: usize) -> Option<u8> {
        self.readings.get(pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.readings.iter().copied()
    }

    /// The last `n` readings, oldest first.
    pub fn recent(&self, n: usize) -> Vec<u8> {
        let skip = self.readings.len().saturating_sub(n);
        self.readings.iter().skip(skip).copied().collect()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.readings.iter().copied().collect()
    }
}
