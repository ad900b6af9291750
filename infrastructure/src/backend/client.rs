//! HTTP adapter for the backend's query and upload endpoints.

use crate::backend::protocol::{ErrorBody, QueryRequest, QueryResponse, UploadResponse};
use async_trait::async_trait;
use docsage_application::ports::query_gateway::{QueryError, QueryGateway};
use docsage_application::ports::upload_gateway::{UploadError, UploadFile, UploadGateway};
use docsage_domain::{DocumentId, DocumentRef};
use reqwest::multipart;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the document-QA backend.
///
/// One instance per session; the underlying `reqwest::Client` pools
/// connections. Timeouts are set per request so each call class can carry
/// its own deadline.
pub struct HttpBackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Map a reqwest failure onto the gateway error taxonomy.
    fn classify(e: reqwest::Error) -> QueryError {
        if e.is_timeout() {
            QueryError::Timeout
        } else {
            QueryError::Transport(e.to_string())
        }
    }

    /// Extract the structured error message from a non-2xx body, falling
    /// back to the HTTP status line.
    async fn server_error(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        }
    }
}

#[async_trait]
impl QueryGateway for HttpBackendClient {
    async fn ask(
        &self,
        question: &str,
        document_ids: &[DocumentId],
        timeout: Duration,
    ) -> Result<String, QueryError> {
        let request = QueryRequest {
            message: question,
            document_ids: document_ids.iter().map(|id| id.to_string()).collect(),
        };

        debug!(
            "Querying backend about {} document(s), timeout {:?}",
            document_ids.len(),
            timeout
        );

        let response = self
            .client
            .post(self.endpoint("/api/query"))
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(Self::classify)?;

        if !response.status().is_success() {
            let message = Self::server_error(response).await;
            warn!("Backend rejected query: {}", message);
            return Err(QueryError::Server(message));
        }

        let body: QueryResponse = response
            .json()
            .await
            .map_err(|e| QueryError::Transport(format!("malformed query response: {}", e)))?;

        // An absent answer field is a degenerate-but-successful response;
        // the caller decides what placeholder to show.
        Ok(body.into_answer().unwrap_or_default())
    }
}

#[async_trait]
impl UploadGateway for HttpBackendClient {
    async fn upload(&self, files: &[UploadFile]) -> Result<Vec<DocumentRef>, UploadError> {
        if files.is_empty() {
            return Err(UploadError::NoFiles);
        }

        let mut form = multipart::Form::new();
        for (index, file) in files.iter().enumerate() {
            let part = multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone());
            form = form.part(format!("file{}", index), part);
        }

        debug!("Uploading {} file(s)", files.len());

        let response = self
            .client
            .post(self.endpoint("/api/upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let message = Self::server_error(response).await;
            warn!("Backend rejected upload: {}", message);
            return Err(UploadError::Server(message));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Transport(format!("malformed upload response: {}", e)))?;

        Ok(body.into_documents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = HttpBackendClient::new("http://localhost:5000/");
        assert_eq!(
            client.endpoint("/api/query"),
            "http://localhost:5000/api/query"
        );
    }

    #[test]
    fn endpoint_joins_bare_base() {
        let client = HttpBackendClient::new("http://localhost:5000");
        assert_eq!(
            client.endpoint("/api/upload"),
            "http://localhost:5000/api/upload"
        );
    }
}
