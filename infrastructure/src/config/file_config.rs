//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//!
//! Example configuration:
//!
//! ```toml
//! [backend]
//! base_url = "http://localhost:5000"
//! summary_timeout_secs = 120
//! comparison_timeout_secs = 180
//! chat_timeout_secs = 180
//!
//! [report]
//! output_dir = "reports"
//!
//! [log]
//! conversation_log = "docsage.conversation.jsonl"
//! ```

use docsage_application::QueryTimeouts;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend endpoint and per-call-class timeouts
    pub backend: FileBackendConfig,
    /// Report export settings
    pub report: FileReportConfig,
    /// Structured logging settings
    pub log: FileLogConfig,
}

/// Backend connection configuration (`[backend]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the document-QA backend
    pub base_url: String,
    /// Deadline for one per-document summary query
    pub summary_timeout_secs: u64,
    /// Deadline for the cross-document comparison query
    pub comparison_timeout_secs: u64,
    /// Deadline for an interactive chat turn
    pub chat_timeout_secs: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            summary_timeout_secs: 120,
            comparison_timeout_secs: 180,
            chat_timeout_secs: 180,
        }
    }
}

impl FileBackendConfig {
    /// Convert the raw seconds into application-layer timeouts.
    pub fn timeouts(&self) -> QueryTimeouts {
        QueryTimeouts::from_secs(
            self.summary_timeout_secs,
            self.comparison_timeout_secs,
            self.chat_timeout_secs,
        )
    }
}

/// Report export configuration (`[report]` section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReportConfig {
    /// Directory artifacts are written into; the working directory if unset
    pub output_dir: Option<String>,
}

/// Structured logging configuration (`[log]` section)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Path of the JSONL conversation log; logging is off when unset
    pub conversation_log: Option<String>,
}
