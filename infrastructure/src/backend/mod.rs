//! Backend HTTP adapter.
//!
//! [`HttpBackendClient`] implements the application's query and upload
//! gateway ports against the document-QA backend's two endpoints.

mod client;
pub mod protocol;

pub use client::HttpBackendClient;
