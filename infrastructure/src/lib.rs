//! Infrastructure layer for docsage
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod artifact;
pub mod backend;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use artifact::FileArtifactStore;
pub use backend::HttpBackendClient;
pub use config::{ConfigLoader, FileBackendConfig, FileConfig, FileReportConfig};
pub use logging::JsonlConversationLogger;
