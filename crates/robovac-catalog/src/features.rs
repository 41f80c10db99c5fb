//! Feature tag vocabularies.
//!
//! Two parallel vocabularies describe what a model can do. `VacuumFeature`
//! holds the Home Assistant `VacuumEntityFeature` flags enabled for the
//! vacuum entity; `RobovacFeature` holds the integration's own
//! `RoboVacEntityFeature` flags consumed by the device abstraction. Shared
//! capabilities (map, consumables) exist in both vocabularies under the
//! same identifier.

use serde::{Deserialize, Serialize};

/// Home Assistant vacuum entity feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VacuumFeature {
    Battery,
    CleanSpot,
    FanSpeed,
    Locate,
    Pause,
    ReturnHome,
    SendCommand,
    Start,
    State,
    Stop,
    Map,
}

/// Flags every model advertises to Home Assistant regardless of series.
/// `Map` is appended after these for map-capable models.
pub const BASE_VACUUM_FEATURES: [VacuumFeature; 10] = [
    VacuumFeature::Battery,
    VacuumFeature::CleanSpot,
    VacuumFeature::FanSpeed,
    VacuumFeature::Locate,
    VacuumFeature::Pause,
    VacuumFeature::ReturnHome,
    VacuumFeature::SendCommand,
    VacuumFeature::Start,
    VacuumFeature::State,
    VacuumFeature::Stop,
];

impl VacuumFeature {
    /// Python identifier of this flag on `VacuumEntityFeature`.
    pub fn ident(&self) -> &'static str {
        match self {
            VacuumFeature::Battery => "BATTERY",
            VacuumFeature::CleanSpot => "CLEAN_SPOT",
            VacuumFeature::FanSpeed => "FAN_SPEED",
            VacuumFeature::Locate => "LOCATE",
            VacuumFeature::Pause => "PAUSE",
            VacuumFeature::ReturnHome => "RETURN_HOME",
            VacuumFeature::SendCommand => "SEND_COMMAND",
            VacuumFeature::Start => "START",
            VacuumFeature::State => "STATE",
            VacuumFeature::Stop => "STOP",
            VacuumFeature::Map => "MAP",
        }
    }
}

impl std::fmt::Display for VacuumFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ident())
    }
}

/// Device-internal feature flags (`RoboVacEntityFeature`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RobovacFeature {
    Edge,
    SmallRoom,
    CleaningTime,
    CleaningArea,
    DoNotDisturb,
    AutoReturn,
    Consumables,
    Room,
    Zone,
    Map,
    BoostIq,
}

impl RobovacFeature {
    /// Python identifier of this flag on `RoboVacEntityFeature`.
    pub fn ident(&self) -> &'static str {
        match self {
            RobovacFeature::Edge => "EDGE",
            RobovacFeature::SmallRoom => "SMALL_ROOM",
            RobovacFeature::CleaningTime => "CLEANING_TIME",
            RobovacFeature::CleaningArea => "CLEANING_AREA",
            RobovacFeature::DoNotDisturb => "DO_NOT_DISTURB",
            RobovacFeature::AutoReturn => "AUTO_RETURN",
            RobovacFeature::Consumables => "CONSUMABLES",
            RobovacFeature::Room => "ROOM",
            RobovacFeature::Zone => "ZONE",
            RobovacFeature::Map => "MAP",
            RobovacFeature::BoostIq => "BOOST_IQ",
        }
    }
}

impl std::fmt::Display for RobovacFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ident())
    }
}
