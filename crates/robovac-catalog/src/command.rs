//! Protocol command vocabulary and command-mapping entries.

use serde::{Deserialize, Serialize};

use crate::features::RobovacFeature;

/// Logical commands in the device protocol vocabulary (`RobovacCommand`).
///
/// The first nine are wired identically on every model. The remaining six
/// only exist on models whose device-internal feature set includes the
/// matching capability, and their protocol codes are captured per model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RobovacCommand {
    Pause,
    Direction,
    Mode,
    Status,
    ReturnHome,
    FanSpeed,
    Locate,
    Battery,
    Error,
    CleaningArea,
    CleaningTime,
    AutoReturn,
    DoNotDisturb,
    BoostIq,
    Consumables,
}

/// Commands that require model-specific protocol codes. Declaration order
/// fixes the order their pending entries appear in generated modules.
pub const MODEL_SPECIFIC_COMMANDS: [RobovacCommand; 6] = [
    RobovacCommand::CleaningArea,
    RobovacCommand::CleaningTime,
    RobovacCommand::AutoReturn,
    RobovacCommand::DoNotDisturb,
    RobovacCommand::BoostIq,
    RobovacCommand::Consumables,
];

impl RobovacCommand {
    /// Python identifier of this command on `RobovacCommand`.
    pub fn ident(&self) -> &'static str {
        match self {
            RobovacCommand::Pause => "PAUSE",
            RobovacCommand::Direction => "DIRECTION",
            RobovacCommand::Mode => "MODE",
            RobovacCommand::Status => "STATUS",
            RobovacCommand::ReturnHome => "RETURN_HOME",
            RobovacCommand::FanSpeed => "FAN_SPEED",
            RobovacCommand::Locate => "LOCATE",
            RobovacCommand::Battery => "BATTERY",
            RobovacCommand::Error => "ERROR",
            RobovacCommand::CleaningArea => "CLEANING_AREA",
            RobovacCommand::CleaningTime => "CLEANING_TIME",
            RobovacCommand::AutoReturn => "AUTO_RETURN",
            RobovacCommand::DoNotDisturb => "DO_NOT_DISTURB",
            RobovacCommand::BoostIq => "BOOST_IQ",
            RobovacCommand::Consumables => "CONSUMABLES",
        }
    }

    /// Device-internal feature a model must carry for this command to be
    /// part of its mapping. `None` for the unconditional core commands.
    pub fn required_feature(&self) -> Option<RobovacFeature> {
        match self {
            RobovacCommand::CleaningArea => Some(RobovacFeature::CleaningArea),
            RobovacCommand::CleaningTime => Some(RobovacFeature::CleaningTime),
            RobovacCommand::AutoReturn => Some(RobovacFeature::AutoReturn),
            RobovacCommand::DoNotDisturb => Some(RobovacFeature::DoNotDisturb),
            RobovacCommand::BoostIq => Some(RobovacFeature::BoostIq),
            RobovacCommand::Consumables => Some(RobovacFeature::Consumables),
            _ => None,
        }
    }
}

impl std::fmt::Display for RobovacCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ident())
    }
}

/// Protocol binding of one logical command in a model's mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandBinding {
    /// Wired to a protocol code, optionally with the permitted value
    /// strings the device accepts for it.
    Assigned {
        code: u8,
        values: Option<Vec<String>>,
    },
    /// Known to exist for the model, but the protocol code has not been
    /// captured yet. Rendered disabled so it cannot be used by accident.
    Pending,
}

/// One entry of a model's command mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub command: RobovacCommand,
    pub binding: CommandBinding,
}

impl CommandEntry {
    /// Entry with a bare protocol code.
    pub fn assigned(command: RobovacCommand, code: u8) -> Self {
        Self {
            command,
            binding: CommandBinding::Assigned { code, values: None },
        }
    }

    /// Entry with a protocol code and a permitted value set.
    pub fn assigned_with_values<I, S>(command: RobovacCommand, code: u8, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command,
            binding: CommandBinding::Assigned {
                code,
                values: Some(values.into_iter().map(Into::into).collect()),
            },
        }
    }

    /// Entry awaiting a manually captured protocol code.
    pub fn pending(command: RobovacCommand) -> Self {
        Self {
            command,
            binding: CommandBinding::Pending,
        }
    }

    /// Protocol code, if one is assigned.
    pub fn code(&self) -> Option<u8> {
        match self.binding {
            CommandBinding::Assigned { code, .. } => Some(code),
            CommandBinding::Pending => None,
        }
    }
}
