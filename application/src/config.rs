//! Application-level configuration.
//!
//! Per-call-class timeouts for backend queries. Summarization of a larger
//! context takes longer than a short chat turn, so each call class carries
//! its own deadline.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timeouts for the three backend call classes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QueryTimeouts {
    /// Per-document summary query
    pub summary: Duration,
    /// Cross-document comparison query (full session context)
    pub comparison: Duration,
    /// Interactive chat turn
    pub chat: Duration,
}

impl Default for QueryTimeouts {
    fn default() -> Self {
        Self {
            summary: Duration::from_secs(120),
            comparison: Duration::from_secs(180),
            chat: Duration::from_secs(180),
        }
    }
}

impl QueryTimeouts {
    pub fn from_secs(summary: u64, comparison: u64, chat: u64) -> Self {
        Self {
            summary: Duration::from_secs(summary),
            comparison: Duration::from_secs(comparison),
            chat: Duration::from_secs(chat),
        }
    }
}
