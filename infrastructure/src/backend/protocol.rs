//! Wire types for the backend HTTP contract.
//!
//! The backend speaks two endpoints: `POST /api/query` (JSON in, JSON out)
//! and `POST /api/upload` (multipart in, JSON out). Both responses carry
//! legacy field variants that older backend builds still emit.

use docsage_domain::DocumentRef;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/query`
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    pub message: &'a str,
    pub document_ids: Vec<String>,
}

/// Response of `POST /api/query`
///
/// Current backends answer in `answer`; `reply` is the legacy field name.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub reply: Option<String>,
}

impl QueryResponse {
    /// The answer text, preferring the current field over the legacy one.
    pub fn into_answer(self) -> Option<String> {
        self.answer.or(self.reply)
    }
}

/// Structured error payload the backend returns on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Response of `POST /api/upload`
///
/// Multi-file uploads return parallel id/filename arrays; the legacy
/// single-document shape is still accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Many {
        #[serde(rename = "documentIds")]
        document_ids: Vec<String>,
        filenames: Vec<String>,
    },
    Single {
        #[serde(rename = "documentId")]
        document_id: String,
        filename: String,
    },
}

impl UploadResponse {
    /// Normalize either shape into document refs, pairing ids with
    /// filenames positionally.
    pub fn into_documents(self) -> Vec<DocumentRef> {
        match self {
            UploadResponse::Many {
                document_ids,
                filenames,
            } => document_ids
                .into_iter()
                .zip(filenames)
                .map(|(id, name)| DocumentRef::new(id, name))
                .collect(),
            UploadResponse::Single {
                document_id,
                filename,
            } => vec![DocumentRef::new(document_id, filename)],
        }
    }
}
