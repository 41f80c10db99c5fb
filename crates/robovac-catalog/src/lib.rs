//! RoboVac Device Catalog
//!
//! Static description of every supported RoboVac model: product series
//! membership, the feature vocabularies understood by Home Assistant and by
//! the integration itself, the cross-series capability sets, and the
//! protocol command vocabulary. On top of the tables sits the derivation of
//! per-model descriptors that the code generator renders into Python
//! modules.
//!
//! ## Architecture
//!
//! ```text
//! Catalog (series tables + capability sets)
//! ├─ Series membership  ──────→  one ModelDescriptor per model
//! ├─ Feature lists      ──────→  homeassistant_features / robovac_features
//! └─ Fan-speed labels   ──────→  FAN_SPEED command value set
//! ```
//!
//! The catalog is plain immutable data. `builtin_catalog()` returns the
//! shipped tables; tests build modified catalogs through the same public
//! types.

pub mod builtin;
pub mod catalog;
pub mod command;
pub mod descriptor;
pub mod features;
pub mod series;

// Re-exports for convenience
pub use builtin::builtin_catalog;
pub use catalog::{Catalog, CatalogError, SeriesEntry};
pub use command::{CommandBinding, CommandEntry, RobovacCommand, MODEL_SPECIFIC_COMMANDS};
pub use descriptor::ModelDescriptor;
pub use features::{RobovacFeature, VacuumFeature, BASE_VACUUM_FEATURES};
pub use series::Series;
