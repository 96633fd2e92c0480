//! azam_nagar: one planning day over the Azam Nagar collection network.
//!
//! Usage: `azam_nagar [config.json]`
//!
//! The optional JSON file overrides any `PlannerConfig` field; missing
//! fields keep their defaults.  Set `RUST_LOG=debug` for per-zone events.

mod network;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wr_core::{PlannerConfig, ZoneId};
use wr_planner::{GenerationObserver, Planner, PlannerBuilder};
use wr_route::{Route, Weekday};
use wr_zone::{WasteSummary, ZoneRegistry};

use network::{CIRCLE, azam_nagar};

// ── Constants ─────────────────────────────────────────────────────────────────

const SIM_DAYS:       u32 = 7;
const GROWTH_PERCENT: f64 = 8.0;
const SPREAD_SOURCE:  &str = "GARDEN";

// ── Generation progress ───────────────────────────────────────────────────────

struct DailyTotals;

impl GenerationObserver for DailyTotals {
    fn on_day_end(&mut self, day: u32, zones: &ZoneRegistry) {
        let s = WasteSummary::of(zones);
        println!(
            "  day {day:>2}: total {:>5}  avg {:>5.1}%  critical {}",
            s.total, s.average, s.critical
        );
    }
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: PlannerConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

fn zone_name(planner: &Planner, id: ZoneId) -> &str {
    planner.zones().name(id).unwrap_or("?")
}

fn print_route(planner: &Planner, title: &str, route: &Route) {
    println!("{title}");
    let stops: Vec<&str> = route.path.iter().map(|&z| zone_name(planner, z)).collect();
    println!("  path      : {}", stops.join(" -> "));
    println!("  stops     : {}", route.stops());
    println!("  distance  : {} km", route.total_distance);
    println!("  cost      : Rs. {:.2}", route.total_cost);
    println!("  waste     : {} units", route.total_waste);
    if route.depot_visits > 0 {
        println!("  depot runs: {}", route.depot_visits);
    }
    if !route.unreached.is_empty() {
        let missed: Vec<&str> = route.unreached.iter().map(|&z| zone_name(planner, z)).collect();
        println!("  unreached : {}", missed.join(", "));
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;

    println!("=== azam_nagar: waste collection planner ===");
    println!(
        "Truck: {} units  |  Fuel: Rs. {:.2}/l  |  Mileage: {} km/l  |  Seed: {}",
        config.truck_capacity, config.fuel_price, config.truck_mileage, config.seed
    );
    println!();

    // 1. Build the planner over the city map.
    let mut planner = azam_nagar(PlannerBuilder::new(config)).build()?;
    let circle = planner
        .find_zone(CIRCLE)
        .context("network has no circle zone")?;
    info!(zones = planner.zones().len(), roads = planner.roads().len(), "city map loaded");

    let s = planner.summary();
    println!(
        "Zones: {}  |  Total waste: {}  |  Critical: {}  Warning: {}  Healthy: {}",
        s.zones, s.total, s.critical, s.warning, s.healthy
    );
    let top: Vec<&str> = planner
        .priority_ranking()
        .into_iter()
        .take(5)
        .map(|z| zone_name(&planner, z))
        .collect();
    println!("Fullest zones: {}", top.join(", "));
    let est = planner.cost_estimate();
    println!(
        "Estimate: {} collections, {} km, {:.2} l, Rs. {:.2} ({})",
        est.collections.len(),
        est.distance,
        est.fuel,
        est.cost,
        est.recommendation
    );
    println!();

    // 2. Greedy vs priority over every zone needing collection.
    let targets = planner.zones().needing_collection(50);
    let cmp = planner.compare_strategies(circle, &targets)?;
    print_route(&planner, "Greedy route (zones above 50%)", &cmp.greedy);
    print_route(&planner, "Priority route (zones above 50%)", &cmp.priority);
    match cmp.comparison.shorter() {
        Some(strategy) => println!(
            "{strategy} route is shorter by {} km\n",
            cmp.comparison.distance_saved()
        ),
        None => println!("Both routes have equal distance\n"),
    }
    let greedy_idx = planner.save_route(cmp.greedy);
    planner.save_route(cmp.priority);
    if let Some(e) = planner.efficiency(greedy_idx) {
        println!(
            "Greedy efficiency: {:.3} units/km, Rs. {:.2}/unit, {:.3} units/Rs. ({})\n",
            e.waste_per_distance, e.cost_per_waste, e.waste_per_cost, e.rating
        );
    }
    if let Some(pay) = planner.driver_pay(greedy_idx, 8.0)? {
        println!(
            "Driver pay for the greedy route over 8 h: Rs. {:.2} (bonuses Rs. {:.2})\n",
            pay.total,
            pay.mileage_bonus + pay.overtime_bonus
        );
    }

    // 3. Today's rota and the week ahead.
    let plan = planner.schedule();
    println!("Today: {} zones  |  Tomorrow: {} zones", plan.today.len(), plan.tomorrow.len());
    for day in Weekday::ALL {
        let rota = planner.rota(day);
        if day.is_rest_day() {
            println!("  {day:<9}: rest day");
        } else {
            println!("  {day:<9}: {} zones", rota.len());
        }
    }
    println!();

    // 4. Spread from the garden, then forecast the worst zone.
    let source = planner
        .find_zone(SPREAD_SOURCE)
        .context("network has no spread source")?;
    let hits = planner.spread_from(source)?;
    println!("Spread from {SPREAD_SOURCE}: {} zones affected", hits.len());
    for h in &hits {
        println!(
            "  {:<22} layer {}  {:>3}% -> {:>3}%",
            zone_name(&planner, h.zone), h.layer, h.before, h.after
        );
    }
    println!();

    if let Some(worst) = planner.zones().iter().max_by_key(|z| z.waste()).map(|z| z.id) {
        let pred = planner.predict_next(worst)?;
        println!(
            "Forecast for {}: current {}%, trend {:+}, next {}%",
            zone_name(&planner, worst), pred.current, pred.trend, pred.value
        );
        println!();
    }

    // 5. A week of waste generation.
    println!("Simulating {SIM_DAYS} days at {GROWTH_PERCENT}% daily growth:");
    planner.simulate_generation_with(SIM_DAYS, GROWTH_PERCENT, &mut DailyTotals)?;
    println!();

    // 6. Capacity sweep from the circle, unloading at the dumping yard.
    let route = planner.build_capacity_route(circle)?;
    print_route(&planner, "Capacity route (all zones)", &route);
    planner.save_route(route);

    if let Some((i, best)) = planner.route_history().best_by_distance() {
        println!("Shortest saved route: #{} ({}, {} km)", i + 1, best.strategy, best.total_distance);
    }
    println!("Remaining waste after collection: {}", planner.summary().total);
    Ok(())
}
