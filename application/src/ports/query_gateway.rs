//! Query Gateway port
//!
//! Defines the single request/response exchange with the backend: ask a
//! question about a set of document ids, with a caller-specified deadline.

use async_trait::async_trait;
use docsage_domain::DocumentId;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during a backend query
#[derive(Error, Debug, Clone)]
pub enum QueryError {
    /// Transport deadline exceeded
    #[error("Request timeout")]
    Timeout,

    /// The backend returned a structured error payload
    #[error("Backend error: {0}")]
    Server(String),

    /// Any other network failure
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Gateway for question/answer exchanges with the backend.
///
/// One call, one outcome: the gateway never retries on its own; retry is a
/// caller decision. On success the backend's answer text is returned
/// verbatim, never reformatted locally. Referentially transparent given
/// identical inputs, no side effects beyond the network call.
#[async_trait]
pub trait QueryGateway: Send + Sync {
    /// Ask `question` about the given documents, failing after `timeout`.
    ///
    /// `document_ids` holds one id for a per-document query or the full
    /// session set for comparison and chat queries.
    async fn ask(
        &self,
        question: &str,
        document_ids: &[DocumentId],
        timeout: Duration,
    ) -> Result<String, QueryError>;
}
