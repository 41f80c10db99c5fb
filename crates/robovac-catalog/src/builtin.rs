//! Built-in catalog tables.
//!
//! The shipped model tables: series membership, per-series feature lists,
//! per-series fan-speed vocabularies, and the cross-series capability sets.
//! Adding support for a new model means editing these tables and rerunning
//! the generator.

use crate::catalog::{Catalog, SeriesEntry};
use crate::features::RobovacFeature;
use crate::series::Series;

const C_MODELS: &[&str] = &[
    "T2103", "T2117", "T2118", "T2119", "T2120", "T2123", "T2128", "T2130", "T2132",
];

const G_MODELS: &[&str] = &[
    "T1250", "T2250", "T2251", "T2252", "T2253", "T2254", "T2150", "T2255", "T2256", "T2257",
    "T2258", "T2259", "T2270", "T2272", "T2273",
];

const L_MODELS: &[&str] = &["T2181", "T2182", "T2190", "T2192", "T2193", "T2194"];

const X_MODELS: &[&str] = &["T2261", "T2262", "T2320"];

/// Map-capable models outside the L and X series, every member of which
/// has a map.
const EXTRA_MAP_MODELS: &[&str] = &["T2253"];

/// Models that report consumable wear levels.
const CONSUMABLES_MODELS: &[&str] = &[
    "T1250", "T2181", "T2182", "T2190", "T2193", "T2194", "T2253", "T2256", "T2258", "T2261",
    "T2273", "T2320",
];

/// Feature list shared by the L and X series.
const L_X_FEATURES: &[RobovacFeature] = &[
    RobovacFeature::CleaningTime,
    RobovacFeature::CleaningArea,
    RobovacFeature::DoNotDisturb,
    RobovacFeature::AutoReturn,
    RobovacFeature::Room,
    RobovacFeature::Zone,
    RobovacFeature::BoostIq,
];

fn entry(
    series: Series,
    models: &[&str],
    features: &[RobovacFeature],
    fan_speeds: &[&str],
) -> SeriesEntry {
    SeriesEntry {
        series,
        models: models.iter().map(|m| m.to_string()).collect(),
        features: features.to_vec(),
        fan_speeds: fan_speeds.iter().map(|s| s.to_string()).collect(),
    }
}

/// The shipped catalog covering every supported model.
pub fn builtin_catalog() -> Catalog {
    let series = vec![
        entry(
            Series::C,
            C_MODELS,
            &[RobovacFeature::Edge, RobovacFeature::SmallRoom],
            &["No_Suction", "Standard", "Boost_IQ", "Max"],
        ),
        entry(
            Series::G,
            G_MODELS,
            &[
                RobovacFeature::CleaningTime,
                RobovacFeature::CleaningArea,
                RobovacFeature::DoNotDisturb,
                RobovacFeature::AutoReturn,
            ],
            &["Standard", "Turbo", "Max", "Boost_IQ"],
        ),
        entry(
            Series::L,
            L_MODELS,
            L_X_FEATURES,
            &["Quiet", "Standard", "Turbo", "Max"],
        ),
        entry(
            Series::X,
            X_MODELS,
            L_X_FEATURES,
            &["Pure", "Standard", "Turbo", "Max"],
        ),
    ];

    let map_capable = EXTRA_MAP_MODELS
        .iter()
        .chain(L_MODELS)
        .chain(X_MODELS)
        .map(|m| m.to_string())
        .collect();

    let consumables_capable = CONSUMABLES_MODELS.iter().map(|m| m.to_string()).collect();

    Catalog::new(series, map_capable, consumables_capable)
}
