//! Collection scheduling: today/tomorrow split and the weekly rota.
//!
//! # Weekly rule
//!
//! | Level    | Collected on                                  |
//! |----------|-----------------------------------------------|
//! | > 50     | every working day                             |
//! | 30..=50  | Monday, Wednesday, Friday, Saturday           |
//! | < 30     | Monday, Thursday                              |
//!
//! Sunday is a rest day: nothing is collected.

use std::fmt;

use tracing::info;

use wr_core::ZoneId;
use wr_graph::DistanceMatrix;
use wr_zone::{ZoneError, ZoneRegistry};

use crate::route::RouteDraft;
use crate::{CostModel, Route, RouteError, RouteResult, Strategy};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// 0 = Monday … 6 = Sunday.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    /// Lenient day-name parse: case-insensitive, matched on the first three
    /// letters ("mon", "Monday", "THU").
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        let day = match s.get(..3)? {
            "mon" => Weekday::Monday,
            "tue" => Weekday::Tuesday,
            "wed" => Weekday::Wednesday,
            "thu" | "thr" => Weekday::Thursday,
            "fri" => Weekday::Friday,
            "sat" => Weekday::Saturday,
            "sun" => Weekday::Sunday,
            _ => return None,
        };
        Some(day)
    }

    pub fn is_rest_day(self) -> bool {
        self == Weekday::Sunday
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday    => "Monday",
            Weekday::Tuesday   => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday  => "Thursday",
            Weekday::Friday    => "Friday",
            Weekday::Saturday  => "Saturday",
            Weekday::Sunday    => "Sunday",
        };
        f.pad(name)
    }
}

// ── CollectionSchedule ────────────────────────────────────────────────────────

/// Zones split into today's run and the ones that can wait.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionSchedule {
    /// Level at or above [`TODAY_THRESHOLD`](Self::TODAY_THRESHOLD), id order.
    pub today:    Vec<ZoneId>,
    pub tomorrow: Vec<ZoneId>,
}

impl CollectionSchedule {
    pub const TODAY_THRESHOLD: u8 = 50;

    pub fn plan(zones: &ZoneRegistry) -> Self {
        let (today, tomorrow) = zones
            .iter()
            .map(|z| (z.id, z.waste()))
            .partition::<Vec<_>, _>(|(_, w)| *w >= Self::TODAY_THRESHOLD);
        Self {
            today:    today.into_iter().map(|(id, _)| id).collect(),
            tomorrow: tomorrow.into_iter().map(|(id, _)| id).collect(),
        }
    }

    /// Whether a zone at `level` is on the rota for `day`.
    pub fn collects_on(level: u8, day: Weekday) -> bool {
        if day.is_rest_day() {
            return false;
        }
        match level {
            51..=u8::MAX => true,
            30..=50 => day.index() % 2 == 0,
            _ => matches!(day, Weekday::Monday | Weekday::Thursday),
        }
    }

    /// Zones on the rota for `day`, in id order.
    pub fn for_day(zones: &ZoneRegistry, day: Weekday) -> Vec<ZoneId> {
        zones
            .iter()
            .filter(|z| Self::collects_on(z.waste(), day))
            .map(|z| z.id)
            .collect()
    }

    /// The rota for every day of the week at current levels.
    pub fn week(zones: &ZoneRegistry) -> Vec<(Weekday, Vec<ZoneId>)> {
        Weekday::ALL.iter().map(|&d| (d, Self::for_day(zones, d))).collect()
    }
}

/// Drive today's run from `start` in id order and empty every zone reached.
///
/// Zones with no path from the previous stop are skipped, left full, and
/// listed in [`Route::unreached`].  `total_waste` is the amount collected.
pub fn collect_today(
    start:  ZoneId,
    matrix: &DistanceMatrix,
    zones:  &mut ZoneRegistry,
    cost:   &CostModel,
) -> RouteResult<Route> {
    if matrix.size() != zones.len() {
        return Err(RouteError::StaleMatrix { matrix: matrix.size(), registry: zones.len() });
    }
    if !zones.contains(start) {
        return Err(ZoneError::NotFound(start).into());
    }

    let schedule = CollectionSchedule::plan(zones);
    let mut draft = RouteDraft::new(start);
    let mut current = start;
    for zone in schedule.today {
        if zone != current {
            let Some(leg) = matrix.distance(current, zone) else {
                draft.mark_unreached(zone);
                continue;
            };
            draft.step(zone, leg);
            current = zone;
        }
        draft.add_waste(zones.collect(zone)?);
    }

    let route = draft.finish(Strategy::Daily, cost);
    info!(
        stops = route.stops(),
        distance = route.total_distance,
        collected = route.total_waste,
        "daily collection complete"
    );
    Ok(route)
}
