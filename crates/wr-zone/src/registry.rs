//! `ZoneRegistry`: exclusive owner of every zone record.
//!
//! Graphs, distance matrices and routes refer to zones by [`ZoneId`] only.
//! All waste-level writes funnel through [`ZoneRegistry::apply_level`],
//! which clamps, stores and re-derives priority in one place.

use rustc_hash::FxHashMap;
use tracing::debug;

use wr_core::{Point, ZoneId};

use crate::{History, MAX_WASTE, Priority, Zone, ZoneError, ZoneResult};

/// Clamp an arbitrary integer into the valid waste range.
#[inline]
fn clamp_waste(value: i64) -> u8 {
    value.clamp(0, i64::from(MAX_WASTE)) as u8
}

/// Dense, id-indexed store of zone records with a name lookup table.
#[derive(Debug)]
pub struct ZoneRegistry {
    zones:       Vec<Zone>,
    /// Upper-cased name → id.
    by_name:     FxHashMap<String, ZoneId>,
    max_history: usize,
}

impl ZoneRegistry {
    /// Create an empty registry whose zones keep at most `max_history`
    /// readings.
    pub fn new(max_history: usize) -> Self {
        Self {
            zones: Vec::new(),
            by_name: FxHashMap::default(),
            max_history,
        }
    }

    /// Register a zone and return its id (sequential from 0).
    ///
    /// `initial_waste` is clamped into 0..=100 and seeds the history.  Names
    /// are unique, compared case-insensitively.
    pub fn add_zone(
        &mut self,
        name:          impl Into<String>,
        initial_waste: i32,
        pos:           Point,
    ) -> ZoneResult<ZoneId> {
        let name = name.into();
        let key = name.to_uppercase();
        if self.by_name.contains_key(&key) {
            return Err(ZoneError::DuplicateName(name));
        }
        let id = ZoneId::try_from(self.zones.len()).map_err(|_| ZoneError::IdSpaceExhausted)?;
        let level = clamp_waste(i64::from(initial_waste));
        self.zones.push(Zone::new(id, name, pos, level, self.max_history));
        self.by_name.insert(key, id);
        debug!(zone = %id, level, "zone registered");
        Ok(id)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }

    #[inline]
    pub fn contains(&self, id: ZoneId) -> bool {
        id.index() < self.zones.len()
    }

    // ── Read access ───────────────────────────────────────────────────────

    pub fn get(&self, id: ZoneId) -> ZoneResult<&Zone> {
        self.zones.get(id.index()).ok_or(ZoneError::NotFound(id))
    }

    fn get_mut(&mut self, id: ZoneId) -> ZoneResult<&mut Zone> {
        self.zones.get_mut(id.index()).ok_or(ZoneError::NotFound(id))
    }

    /// All zones in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> + '_ {
        self.zones.iter()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ZoneId> + '_ {
        self.zones.iter().map(|z| z.id)
    }

    pub fn waste(&self, id: ZoneId) -> ZoneResult<u8> {
        self.get(id).map(Zone::waste)
    }

    pub fn priority(&self, id: ZoneId) -> ZoneResult<Priority> {
        self.get(id).map(Zone::priority)
    }

    pub fn history(&self, id: ZoneId) -> ZoneResult<&History> {
        self.get(id).map(Zone::history)
    }

    pub fn history_len(&self, id: ZoneId) -> ZoneResult<usize> {
        self.get(id).map(|z| z.history().len())
    }

    pub fn name(&self, id: ZoneId) -> ZoneResult<&str> {
        self.get(id).map(|z| z.name.as_str())
    }

    /// Exact, case-insensitive name lookup.
    pub fn find_by_name(&self, name: &str) -> Option<ZoneId> {
        self.by_name.get(&name.to_uppercase()).copied()
    }

    /// Current level of every zone, indexed by id.
    pub fn levels(&self) -> Vec<u8> {
        self.zones.iter().map(Zone::waste).collect()
    }

    // ── Filters ───────────────────────────────────────────────────────────

    /// Zones whose level lies in `lo..=hi`.
    pub fn in_waste_range(&self, lo: u8, hi: u8) -> Vec<ZoneId> {
        self.select(|z| (lo..=hi).contains(&z.waste()))
    }

    pub fn with_priority(&self, priority: Priority) -> Vec<ZoneId> {
        self.select(|z| z.priority() == priority)
    }

    pub fn critical(&self) -> Vec<ZoneId> {
        self.with_priority(Priority::Critical)
    }

    /// Zones whose level is strictly above `threshold`.
    pub fn needing_collection(&self, threshold: u8) -> Vec<ZoneId> {
        self.select(|z| z.waste() > threshold)
    }

    /// Every zone, fullest first.  Equal levels stay in id order.
    pub fn ranked_by_waste(&self) -> Vec<ZoneId> {
        let mut ranked: Vec<&Zone> = self.zones.iter().collect();
        ranked.sort_by(|a, b| b.waste().cmp(&a.waste()));
        ranked.into_iter().map(|z| z.id).collect()
    }

    fn select(&self, pred: impl Fn(&Zone) -> bool) -> Vec<ZoneId> {
        self.zones.iter().filter(|z| pred(z)).map(|z| z.id).collect()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// The single level mutator.  Stores `level`, re-derives priority and,
    /// when `record` is set, appends the new level to history.
    fn apply_level(&mut self, id: ZoneId, level: u8, record: bool) -> ZoneResult<()> {
        let zone = self.get_mut(id)?;
        zone.set_level(level);
        if record {
            zone.push_reading(level);
        }
        Ok(())
    }

    /// Set a zone's level from an operator reading.
    ///
    /// Unlike the internal mutators this does not clamp: a value outside
    /// 0..=100 is rejected with [`ZoneError::WasteOutOfRange`].
    pub fn update_waste(&mut self, id: ZoneId, value: i32) -> ZoneResult<()> {
        if !self.contains(id) {
            return Err(ZoneError::NotFound(id));
        }
        let level = u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX_WASTE)
            .ok_or(ZoneError::WasteOutOfRange { zone: id, value })?;
        self.apply_level(id, level, true)?;
        debug!(zone = %id, level, "waste level updated");
        Ok(())
    }

    /// Raise a zone's level by `delta`, clamped at 100, and record the new
    /// level.  Returns the new level.
    pub fn raise_waste(&mut self, id: ZoneId, delta: u32) -> ZoneResult<u8> {
        let current = self.waste(id)?;
        let level = clamp_waste(i64::from(current) + i64::from(delta));
        self.apply_level(id, level, true)?;
        Ok(level)
    }

    /// Empty a zone.  Returns the level it held before collection.
    ///
    /// Collection is not a reading, so history is left untouched.
    pub fn collect(&mut self, id: ZoneId) -> ZoneResult<u8> {
        let previous = self.waste(id)?;
        self.apply_level(id, 0, false)?;
        Ok(previous)
    }

    /// Append a reading to history without touching the current level.
    /// `value` is clamped into 0..=100.
    pub fn record_reading(&mut self, id: ZoneId, value: i32) -> ZoneResult<()> {
        let value = clamp_waste(i64::from(value));
        self.get_mut(id)?.push_reading(value);
        Ok(())
    }
}
