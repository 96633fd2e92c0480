//! Registry-wide and per-zone waste statistics.

use wr_core::ZoneId;

use crate::{History, Priority, ZoneRegistry, trend};

/// Snapshot of the waste distribution across all zones.
#[derive(Clone, Debug, PartialEq)]
pub struct WasteSummary {
    pub zones:    usize,
    pub total:    u32,
    /// Mean level; 0.0 for an empty registry.
    pub average:  f64,
    pub min:      Option<u8>,
    pub max:      Option<u8>,
    pub critical: usize,
    pub warning:  usize,
    pub healthy:  usize,
}

impl WasteSummary {
    pub fn of(registry: &ZoneRegistry) -> Self {
        let mut summary = WasteSummary {
            zones:    registry.len(),
            total:    0,
            average:  0.0,
            min:      None,
            max:      None,
            critical: 0,
            warning:  0,
            healthy:  0,
        };
        for zone in registry.iter() {
            let level = zone.waste();
            summary.total += u32::from(level);
            summary.min = Some(summary.min.map_or(level, |m| m.min(level)));
            summary.max = Some(summary.max.map_or(level, |m| m.max(level)));
            match zone.priority() {
                Priority::Critical => summary.critical += 1,
                Priority::Warning  => summary.warning += 1,
                Priority::Healthy  => summary.healthy += 1,
            }
        }
        if summary.zones > 0 {
            summary.average = f64::from(summary.total) / summary.zones as f64;
        }
        summary
    }
}

/// Descriptive statistics over one zone's history window.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryStats {
    pub records: usize,
    pub min:     u8,
    pub max:     u8,
    pub average: f64,
    /// Mean change per reading from the oldest to the newest reading.
    pub trend_per_reading: f64,
    /// Up to the 10 most recent readings, oldest first.
    pub recent:  Vec<u8>,
}

impl HistoryStats {
    /// Readings reported in [`recent`](Self::recent).
    pub const RECENT: usize = 10;

    /// `None` when fewer than two readings exist.
    pub fn of(history: &History) -> Option<Self> {
        let records = history.len();
        if records < 2 {
            return None;
        }
        let min = history.iter().min()?;
        let max = history.iter().max()?;
        let sum: u32 = history.iter().map(u32::from).sum();
        let first = history.first()?;
        let last = history.last()?;
        Some(HistoryStats {
            records,
            min,
            max,
            average: f64::from(sum) / records as f64,
            trend_per_reading: (f64::from(last) - f64::from(first)) / (records - 1) as f64,
            recent: history.recent(Self::RECENT),
        })
    }
}

/// One row of the trend report.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneTrend {
    pub zone:           ZoneId,
    pub current:        u8,
    /// Highest reading in history, from the range-max index.  `None` when
    /// the zone has a single reading.
    pub historical_max: Option<u8>,
    /// `None` when the zone has a single reading.
    pub trend:          Option<i32>,
}

/// Current level, historical maximum and short-term trend for every zone.
pub fn trend_report(registry: &ZoneRegistry) -> Vec<ZoneTrend> {
    registry
        .iter()
        .map(|zone| {
            let enough = zone.history().len() > 1;
            ZoneTrend {
                zone:           zone.id,
                current:        zone.waste(),
                historical_max: if enough { zone.history_max() } else { None },
                trend:          enough.then(|| trend(zone.history(), zone.waste())),
            }
        })
        .collect()
}
