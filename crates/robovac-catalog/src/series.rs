//! Product series enumeration.

use serde::{Deserialize, Serialize};

/// Product family a model belongs to.
///
/// Membership fixes the base device-internal feature list and the fan-speed
/// vocabulary; every model belongs to exactly one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Series {
    C,
    G,
    L,
    X,
}

impl Series {
    /// Series identifier as it appears in the product tables.
    pub fn id(&self) -> &'static str {
        match self {
            Series::C => "C",
            Series::G => "G",
            Series::L => "L",
            Series::X => "X",
        }
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
