//! Observer trait for the waste-generation simulation.

use wr_zone::ZoneRegistry;

/// Callbacks invoked by [`simulate_generation`](crate::simulate_generation).
///
/// All methods default to no-ops.
///
/// # Example: daily total printer
///
/// ```rust,ignore
/// struct DailyTotals;
///
/// impl GenerationObserver for DailyTotals {
///     fn on_day_end(&mut self, day: u32, zones: &ZoneRegistry) {
///         println!("day {day}: {}", WasteSummary::of(zones).total);
///     }
/// }
/// ```
pub trait GenerationObserver {
    /// Called after every zone has grown for `day` (1-based).
    fn on_day_end(&mut self, _day: u32, _zones: &ZoneRegistry) {}

    /// Called once after the last day.
    fn on_simulation_end(&mut self, _days: u32) {}
}

/// A [`GenerationObserver`] that does nothing.
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {}
