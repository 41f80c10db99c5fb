//! The catalog: series membership tables and cross-series capability sets.

use serde::{Deserialize, Serialize};

use crate::features::RobovacFeature;
use crate::series::Series;

/// Errors raised by catalog consistency checks.
///
/// The shipped tables are compile-time constants, so any of these is a
/// table-editing mistake rather than a runtime condition.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A model identifier is listed under two series.
    #[error("model {model} is listed in both series {first} and series {second}")]
    DuplicateModel {
        model: String,
        first: Series,
        second: Series,
    },

    /// A capability set references a model no series declares.
    #[error("{set} capability set references unknown model {model}")]
    UnknownCapabilityModel { set: &'static str, model: String },

    /// A series declares the wrong number of fan-speed labels.
    #[error("series {series} declares {count} fan-speed labels, expected 4")]
    FanSpeedCount { series: Series, count: usize },
}

/// One series' slice of the tables: member models, base device-internal
/// feature list, and fan-speed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesEntry {
    pub series: Series,
    /// Member models, in declaration order.
    pub models: Vec<String>,
    /// Base device-internal features shared by every member.
    pub features: Vec<RobovacFeature>,
    /// Fan-speed labels, exactly four, series-specific wording.
    pub fan_speeds: Vec<String>,
}

/// Immutable catalog of everything the generator needs to know about the
/// supported models.
///
/// Constructed once (normally via [`crate::builtin_catalog`]) and passed
/// into the generator; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    series: Vec<SeriesEntry>,
    map_capable: Vec<String>,
    consumables_capable: Vec<String>,
}

impl Catalog {
    pub fn new(
        series: Vec<SeriesEntry>,
        map_capable: Vec<String>,
        consumables_capable: Vec<String>,
    ) -> Self {
        Self {
            series,
            map_capable,
            consumables_capable,
        }
    }

    /// Series entries in declaration order.
    pub fn series(&self) -> &[SeriesEntry] {
        &self.series
    }

    /// Whether the model carries map support.
    pub fn is_map_capable(&self, model: &str) -> bool {
        self.map_capable.iter().any(|m| m == model)
    }

    /// Whether the model reports consumable wear levels.
    pub fn has_consumables(&self, model: &str) -> bool {
        self.consumables_capable.iter().any(|m| m == model)
    }

    /// Every model with its series entry, in overall declaration order.
    pub fn models(&self) -> impl Iterator<Item = (&SeriesEntry, &str)> + '_ {
        self.series
            .iter()
            .flat_map(|entry| entry.models.iter().map(move |m| (entry, m.as_str())))
    }

    /// Series entry a model belongs to, if any.
    pub fn series_of(&self, model: &str) -> Option<&SeriesEntry> {
        self.series
            .iter()
            .find(|entry| entry.models.iter().any(|m| m == model))
    }

    /// Check table consistency: unique series membership, known capability
    /// models, exactly four fan speeds per series.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen: Vec<(&str, Series)> = Vec::new();
        for entry in &self.series {
            if entry.fan_speeds.len() != 4 {
                return Err(CatalogError::FanSpeedCount {
                    series: entry.series,
                    count: entry.fan_speeds.len(),
                });
            }
            for model in &entry.models {
                if let Some((_, first)) = seen.iter().find(|(m, _)| *m == model.as_str()) {
                    return Err(CatalogError::DuplicateModel {
                        model: model.clone(),
                        first: *first,
                        second: entry.series,
                    });
                }
                seen.push((model.as_str(), entry.series));
            }
        }

        for (set, members) in [
            ("map", &self.map_capable),
            ("consumables", &self.consumables_capable),
        ] {
            for model in members {
                if !seen.iter().any(|(m, _)| *m == model.as_str()) {
                    return Err(CatalogError::UnknownCapabilityModel {
                        set,
                        model: model.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}
