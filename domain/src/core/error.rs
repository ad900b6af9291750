//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No documents in session")]
    NoDocuments,

    #[error("Invalid document name: {0}")]
    InvalidDocumentName(String),

    #[error("Unknown record id: {0}")]
    UnknownRecord(String),

    #[error("Report layout error: {0}")]
    LayoutError(String),
}
