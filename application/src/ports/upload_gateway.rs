//! Upload Gateway port
//!
//! One multipart exchange with the backend's upload endpoint, yielding the
//! document refs the session accumulates.

use async_trait::async_trait;
use docsage_domain::DocumentRef;
use thiserror::Error;

/// Errors that can occur during an upload
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("Backend rejected upload: {0}")]
    Server(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Empty upload: no files given")]
    NoFiles,
}

/// A file staged for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Original filename, kept as the document's display name
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Gateway for document uploads.
#[async_trait]
pub trait UploadGateway: Send + Sync {
    /// Upload the given files, returning one [`DocumentRef`] per file in
    /// upload order.
    async fn upload(&self, files: &[UploadFile]) -> Result<Vec<DocumentRef>, UploadError>;
}
