//! Daily driver pay.

use crate::{Route, RouteError, RouteResult};

pub const BASE_PAY: f64 = 500.0;
pub const PAY_PER_KM: f64 = 10.0;

/// Bonus paid once the day's distance exceeds [`LONG_HAUL_KM`].
pub const LONG_HAUL_BONUS: f64 = 500.0;
pub const LONG_HAUL_KM: f64 = 100.0;

/// Bonus paid once the day's hours exceed [`OVERTIME_HOURS`].
pub const OVERTIME_BONUS: f64 = 300.0;
pub const OVERTIME_HOURS: f64 = 7.0;

/// Breakdown of one driver's pay for one day.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverPay {
    pub base:           f64,
    pub distance_pay:   f64,
    pub mileage_bonus:  f64,
    pub overtime_bonus: f64,
    pub total:          f64,
}

impl DriverPay {
    /// Pay for a day of `km` driven over `hours` worked.  Both bonus
    /// thresholds are strict.
    pub fn calculate(km: f64, hours: f64) -> RouteResult<Self> {
        if !(km.is_finite() && km >= 0.0 && hours.is_finite() && hours >= 0.0) {
            return Err(RouteError::InvalidShift { km, hours });
        }
        let distance_pay = km * PAY_PER_KM;
        let mileage_bonus = if km > LONG_HAUL_KM { LONG_HAUL_BONUS } else { 0.0 };
        let overtime_bonus = if hours > OVERTIME_HOURS { OVERTIME_BONUS } else { 0.0 };
        Ok(Self {
            base: BASE_PAY,
            distance_pay,
            mileage_bonus,
            overtime_bonus,
            total: BASE_PAY + distance_pay + mileage_bonus + overtime_bonus,
        })
    }

    /// Pay for driving `route`, one distance unit per kilometre.
    pub fn for_route(route: &Route, hours: f64) -> RouteResult<Self> {
        Self::calculate(f64::from(route.total_distance), hours)
    }
}
