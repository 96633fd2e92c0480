//! Azam Nagar collection network.
//!
//! 25 zones around the Azam Nagar circle with the dumping yard as depot.
//! Road weights are in km.  Positions are schematic planar coordinates.

use wr_core::Point;
use wr_planner::{PlannerBuilder, ZoneSpec};

pub const DEPOT:  &str = "DUMPING_YARD";
pub const CIRCLE: &str = "AZAM_NAGAR_CIRCLE";

/// `(name, initial waste %, x, y)`.
const ZONES: &[(&str, i32, f64, f64)] = &[
    ("AZAM_NAGAR_1ST_CROSS", 45, 0.0, 8.0),
    ("AZAM_NAGAR_2ND_CROSS", 62, 1.0, 8.0),
    ("AZAM_NAGAR_3RD_CROSS", 38, 4.0, 8.0),
    ("AZAM_NAGAR_4TH_CROSS", 71, 5.0, 8.0),
    ("AZAM_NAGAR_5TH_CROSS", 55, 6.0, 8.0),
    ("AZAM_NAGAR_CIRCLE",    30, 6.0, 6.0),
    ("GARDEN",               20, 0.0, 6.0),
    ("DAMRO",                60, 2.0, 4.0),
    ("DHABA_POINT",          85, 9.0, 9.0),
    ("CROSS_6",              40, 7.0, 7.0),
    ("CROSS_7",              52, 8.0, 6.0),
    ("CROSS_8",              25, 9.0, 5.0),
    ("JUNCTION_0",           33, 7.0, 5.0),
    ("JUNCTION_1",           47, 8.0, 4.0),
    ("JUNCTION_2",           66, 9.0, 4.0),
    ("JUNCTION_3",           18, 9.0, 3.0),
    ("JUNCTION_4",           74, 9.0, -5.0),
    ("JUNCTION_5",           29, 4.0, -5.0),
    ("SAMATH",               90, 6.0, -6.0),
    ("DATT",                 58, 7.0, -6.0),
    ("VANDAN_COLONY",        43, 8.0, -6.0),
    ("STEAM_OFFICE",         35, 12.0, 6.0),
    ("TRAINING_CENTER",      12, 13.0, 6.0),
    ("KALMESHWAR",           81, 12.0, 2.0),
    ("DUMPING_YARD",          0, 0.0, 0.0),
];

/// Two-way roads `(a, b, km)`.
const ROADS: &[(&str, &str, i64)] = &[
    ("AZAM_NAGAR_1ST_CROSS", "AZAM_NAGAR_2ND_CROSS", 1),
    ("AZAM_NAGAR_2ND_CROSS", "AZAM_NAGAR_3RD_CROSS", 3),
    ("AZAM_NAGAR_3RD_CROSS", "AZAM_NAGAR_4TH_CROSS", 1),
    ("AZAM_NAGAR_4TH_CROSS", "AZAM_NAGAR_5TH_CROSS", 1),
    ("AZAM_NAGAR_5TH_CROSS", "AZAM_NAGAR_CIRCLE",    2),
    ("AZAM_NAGAR_1ST_CROSS", "GARDEN",               2),
    ("GARDEN",               "DAMRO",                3),
    ("DAMRO",                "AZAM_NAGAR_CIRCLE",    4),
    ("DHABA_POINT",          "CROSS_6",              1),
    ("DHABA_POINT",          "CROSS_7",              2),
    ("DHABA_POINT",          "CROSS_8",              4),
    ("CROSS_6",              "AZAM_NAGAR_CIRCLE",    1),
    ("CROSS_7",              "AZAM_NAGAR_CIRCLE",    1),
    ("CROSS_8",              "AZAM_NAGAR_CIRCLE",    8),
    ("AZAM_NAGAR_CIRCLE",    "JUNCTION_0",           1),
    ("JUNCTION_0",           "JUNCTION_1",           2),
    ("JUNCTION_1",           "JUNCTION_2",           1),
    ("JUNCTION_2",           "JUNCTION_3",           1),
    ("JUNCTION_3",           "JUNCTION_4",           8),
    ("JUNCTION_4",           "JUNCTION_5",           5),
    ("JUNCTION_0",           "CROSS_6",              1),
    ("JUNCTION_1",           "CROSS_7",              1),
    ("JUNCTION_2",           "CROSS_8",              1),
    ("JUNCTION_4",           "SAMATH",               2),
    ("SAMATH",               "DATT",                 1),
    ("DATT",                 "VANDAN_COLONY",        1),
    ("SAMATH",               "JUNCTION_5",           1),
    ("AZAM_NAGAR_CIRCLE",    "STEAM_OFFICE",         6),
    ("STEAM_OFFICE",         "TRAINING_CENTER",      1),
    ("STEAM_OFFICE",         "KALMESHWAR",           4),
    ("KALMESHWAR",           "JUNCTION_4",           8),
    ("JUNCTION_3",           "DAMRO",                8),
    ("DAMRO",                "DUMPING_YARD",         8),
    ("DUMPING_YARD",         "AZAM_NAGAR_CIRCLE",   10),
];

/// Seed `builder` with every zone and road and name the depot.
pub fn azam_nagar(builder: PlannerBuilder) -> PlannerBuilder {
    let zones = ZONES
        .iter()
        .map(|&(name, waste, x, y)| ZoneSpec::new(name, waste, Point::new(x, y)));
    ROADS
        .iter()
        .fold(builder.zones(zones), |b, &(a, c, km)| b.road(a, c, km))
        .depot(DEPOT)
}
