//! Artifact store port
//!
//! Persists a compiled report. Implementations must be all-or-nothing: a
//! failed store leaves no partial artifact behind.

use docsage_domain::ReportArtifact;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while storing an artifact
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to write artifact: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for compiled reports.
pub trait ArtifactStore: Send + Sync {
    /// Persist the artifact, returning where it landed.
    fn store(&self, artifact: &ReportArtifact) -> Result<PathBuf, StoreError>;
}
