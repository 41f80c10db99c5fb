//! Per-model descriptor derivation.
//!
//! A descriptor is everything the generator renders for one model: both
//! feature sets and the command mapping. Derivation is a pure function of
//! the catalog tables; feature sets are built in append order (series base
//! list, then map, then consumables), never sorted.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, SeriesEntry};
use crate::command::{CommandEntry, RobovacCommand, MODEL_SPECIFIC_COMMANDS};
use crate::features::{RobovacFeature, VacuumFeature, BASE_VACUUM_FEATURES};
use crate::series::Series;

/// Directional values accepted by the DIRECTION command on every model.
const DIRECTION_VALUES: [&str; 4] = ["forward", "back", "left", "right"];

/// Cleaning modes accepted by the MODE command on every model.
const MODE_VALUES: [&str; 5] = ["auto", "SmallRoom", "Spot", "Edge", "Nosweep"];

/// Derived description of one model, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Model identifier, e.g. "T2103".
    pub model: String,
    /// Series the model belongs to.
    pub series: Series,
    /// Home Assistant entity features, baseline order then map.
    pub homeassistant_features: Vec<VacuumFeature>,
    /// Device-internal features, series order then map then consumables.
    pub robovac_features: Vec<RobovacFeature>,
    /// Command mapping: the nine invariant entries followed by pending
    /// entries for the model-specific commands the model supports.
    pub commands: Vec<CommandEntry>,
}

impl ModelDescriptor {
    /// Pending commands, in mapping order.
    pub fn pending_commands(&self) -> Vec<RobovacCommand> {
        self.commands
            .iter()
            .filter(|entry| entry.code().is_none())
            .map(|entry| entry.command)
            .collect()
    }
}

impl Catalog {
    /// Derive descriptors for every model, in declaration order.
    pub fn descriptors(&self) -> Vec<ModelDescriptor> {
        self.models()
            .map(|(entry, model)| self.derive(entry, model))
            .collect()
    }

    /// Derive the descriptor for a single model, if the catalog knows it.
    pub fn descriptor_for(&self, model: &str) -> Option<ModelDescriptor> {
        self.series_of(model).map(|entry| self.derive(entry, model))
    }

    fn derive(&self, entry: &SeriesEntry, model: &str) -> ModelDescriptor {
        let map_capable = self.is_map_capable(model);

        let mut robovac_features = entry.features.clone();
        if map_capable {
            robovac_features.push(RobovacFeature::Map);
        }
        if self.has_consumables(model) {
            robovac_features.push(RobovacFeature::Consumables);
        }

        let mut homeassistant_features = BASE_VACUUM_FEATURES.to_vec();
        if map_capable {
            homeassistant_features.push(VacuumFeature::Map);
        }

        let mut commands = vec![
            CommandEntry::assigned(RobovacCommand::Pause, 2),
            CommandEntry::assigned_with_values(RobovacCommand::Direction, 3, DIRECTION_VALUES),
            CommandEntry::assigned_with_values(RobovacCommand::Mode, 5, MODE_VALUES),
            CommandEntry::assigned(RobovacCommand::Status, 15),
            CommandEntry::assigned(RobovacCommand::ReturnHome, 101),
            CommandEntry::assigned_with_values(
                RobovacCommand::FanSpeed,
                102,
                entry.fan_speeds.iter().cloned(),
            ),
            CommandEntry::assigned(RobovacCommand::Locate, 103),
            CommandEntry::assigned(RobovacCommand::Battery, 104),
            CommandEntry::assigned(RobovacCommand::Error, 106),
        ];

        for command in MODEL_SPECIFIC_COMMANDS {
            let Some(feature) = command.required_feature() else {
                continue;
            };
            if robovac_features.contains(&feature) {
                commands.push(CommandEntry::pending(command));
            }
        }

        ModelDescriptor {
            model: model.to_string(),
            series: entry.series,
            homeassistant_features,
            robovac_features,
            commands,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_catalog;
    use crate::command::CommandBinding;

    fn descriptor(model: &str) -> ModelDescriptor {
        builtin_catalog()
            .descriptor_for(model)
            .expect("model must exist")
    }

    fn assigned_code(descriptor: &ModelDescriptor, command: RobovacCommand) -> Option<u8> {
        descriptor
            .commands
            .iter()
            .find(|entry| entry.command == command)
            .and_then(CommandEntry::code)
    }

    #[test]
    fn test_invariant_command_codes() {
        for d in builtin_catalog().descriptors() {
            assert_eq!(assigned_code(&d, RobovacCommand::Pause), Some(2), "{}", d.model);
            assert_eq!(assigned_code(&d, RobovacCommand::Direction), Some(3));
            assert_eq!(assigned_code(&d, RobovacCommand::Mode), Some(5));
            assert_eq!(assigned_code(&d, RobovacCommand::Status), Some(15));
            assert_eq!(assigned_code(&d, RobovacCommand::ReturnHome), Some(101));
            assert_eq!(assigned_code(&d, RobovacCommand::FanSpeed), Some(102));
            assert_eq!(assigned_code(&d, RobovacCommand::Locate), Some(103));
            assert_eq!(assigned_code(&d, RobovacCommand::Battery), Some(104));
            assert_eq!(assigned_code(&d, RobovacCommand::Error), Some(106));
        }
    }

    #[test]
    fn test_c_series_descriptor() {
        let d = descriptor("T2103");

        assert_eq!(d.series, Series::C);
        assert_eq!(d.homeassistant_features, BASE_VACUUM_FEATURES.to_vec());
        assert_eq!(
            d.robovac_features,
            vec![RobovacFeature::Edge, RobovacFeature::SmallRoom]
        );
        // C models support none of the model-specific commands
        assert!(d.pending_commands().is_empty());
        assert_eq!(d.commands.len(), 9);
    }

    #[test]
    fn test_map_capable_model_gets_map_in_both_sets() {
        let d = descriptor("T2181");
        assert!(d.homeassistant_features.contains(&VacuumFeature::Map));
        assert!(d.robovac_features.contains(&RobovacFeature::Map));

        // map tag is appended after the baseline
        assert_eq!(d.homeassistant_features.last(), Some(&VacuumFeature::Map));

        let d = descriptor("T2103");
        assert!(!d.homeassistant_features.contains(&VacuumFeature::Map));
        assert!(!d.robovac_features.contains(&RobovacFeature::Map));
    }

    #[test]
    fn test_g_series_exception_model() {
        // T2253 is the only G model with a map, and has consumables too
        let d = descriptor("T2253");
        assert_eq!(d.series, Series::G);
        assert_eq!(
            d.robovac_features,
            vec![
                RobovacFeature::CleaningTime,
                RobovacFeature::CleaningArea,
                RobovacFeature::DoNotDisturb,
                RobovacFeature::AutoReturn,
                RobovacFeature::Map,
                RobovacFeature::Consumables,
            ]
        );
        // G's feature list excludes BOOST_IQ, so no pending entry for it
        assert_eq!(
            d.pending_commands(),
            vec![
                RobovacCommand::CleaningArea,
                RobovacCommand::CleaningTime,
                RobovacCommand::AutoReturn,
                RobovacCommand::DoNotDisturb,
                RobovacCommand::Consumables,
            ]
        );
    }

    #[test]
    fn test_l_series_consumables_model_gets_all_six_pending() {
        let d = descriptor("T2181");
        assert_eq!(
            d.pending_commands(),
            vec![
                RobovacCommand::CleaningArea,
                RobovacCommand::CleaningTime,
                RobovacCommand::AutoReturn,
                RobovacCommand::DoNotDisturb,
                RobovacCommand::BoostIq,
                RobovacCommand::Consumables,
            ]
        );
    }

    #[test]
    fn test_x_series_model_without_consumables() {
        let d = descriptor("T2262");
        assert!(!d.robovac_features.contains(&RobovacFeature::Consumables));
        assert!(!d.pending_commands().contains(&RobovacCommand::Consumables));
        assert!(d.pending_commands().contains(&RobovacCommand::BoostIq));
    }

    #[test]
    fn test_fan_speed_values_follow_series() {
        let d = descriptor("T2181");
        let fan_speed = d
            .commands
            .iter()
            .find(|entry| entry.command == RobovacCommand::FanSpeed)
            .unwrap();
        match &fan_speed.binding {
            CommandBinding::Assigned { values: Some(values), .. } => {
                assert_eq!(values, &["Quiet", "Standard", "Turbo", "Max"]);
            }
            other => panic!("unexpected binding: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_model_has_no_descriptor() {
        assert!(builtin_catalog().descriptor_for("T9999").is_none());
    }

    #[test]
    fn test_descriptor_serde_round_trip() {
        let d = descriptor("T2253");
        let json = serde_json::to_string(&d).unwrap();
        let back: ModelDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
