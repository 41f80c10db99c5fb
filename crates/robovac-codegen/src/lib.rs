//! RoboVac Model Module Generator
//!
//! Renders the static device catalog from [`robovac_catalog`] into the
//! Python modules the Home Assistant integration imports: one module per
//! model under `custom_components/robovac/vacuums/`, plus the `__init__.py`
//! index with the `ROBOVAC_MODELS` lookup table.
//!
//! The pass is a pure function of the catalog followed by independent file
//! writes; running it twice over the same catalog produces byte-identical
//! output.

pub mod error;
pub mod generator;
pub mod python;

pub use error::{CodegenError, Result};
pub use generator::{GenerationReport, ModelGenerator, DEFAULT_OUTPUT_DIR, INDEX_FILE};
pub use python::{render_index, render_model_module};
