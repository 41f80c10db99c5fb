//! Generator error types.

use std::path::PathBuf;

use robovac_catalog::CatalogError;

/// Errors surfaced by a generation pass.
///
/// There is no partial-success mode: the first failure aborts the run, and
/// files already written stay on disk (each is regenerated on the next run
/// anyway).
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Writing a generated module failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog tables failed their consistency checks.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, CodegenError>;
