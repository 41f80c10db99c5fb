//! The generation pass: derive, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use robovac_catalog::Catalog;
use tracing::{debug, info};

use crate::error::{CodegenError, Result};
use crate::python::{render_index, render_model_module};

/// File name of the aggregating index module.
pub const INDEX_FILE: &str = "__init__.py";

/// Default destination inside the integration source tree.
pub const DEFAULT_OUTPUT_DIR: &str = "custom_components/robovac/vacuums";

/// One-shot generator writing a module per catalog model plus the index.
///
/// Every output file is fully replaced on each run and never read back.
/// The destination directory must already exist; a missing directory
/// surfaces as the write error of the first module.
pub struct ModelGenerator {
    catalog: Catalog,
    output_dir: PathBuf,
}

/// Outcome of a generation pass.
#[derive(Debug)]
pub struct GenerationReport {
    /// Number of model modules written.
    pub models: usize,
    /// Every file written, index last.
    pub files: Vec<PathBuf>,
}

impl ModelGenerator {
    pub fn new(catalog: Catalog, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            output_dir: output_dir.into(),
        }
    }

    /// Run the pass: one file per model, then the index.
    ///
    /// Aborts on the first write failure; files already written are left
    /// in place since each is independently regenerable.
    pub fn generate(&self) -> Result<GenerationReport> {
        self.catalog.validate()?;

        let descriptors = self.catalog.descriptors();
        let mut files = Vec::with_capacity(descriptors.len() + 1);

        for descriptor in &descriptors {
            let path = self.output_dir.join(format!("{}.py", descriptor.model));
            write_file(&path, &render_model_module(descriptor))?;
            debug!(model = %descriptor.model, path = %path.display(), "wrote model module");
            files.push(path);
        }

        let index_path = self.output_dir.join(INDEX_FILE);
        write_file(&index_path, &render_index(&descriptors))?;
        files.push(index_path);

        info!(
            models = descriptors.len(),
            dir = %self.output_dir.display(),
            "generated model modules"
        );

        Ok(GenerationReport {
            models: descriptors.len(),
            files,
        })
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| CodegenError::Write {
        path: path.to_path_buf(),
        source,
    })
}
