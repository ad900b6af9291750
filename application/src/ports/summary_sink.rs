//! Summary update observer port.
//!
//! Components that need the current summary records (report compilation,
//! conversation logging) subscribe here instead of being threaded a
//! callback through every layer. The orchestrator notifies all sinks each
//! time a reload settles.

use docsage_domain::SummaryRecord;

/// Observer of settled summary reloads.
pub trait SummarySink: Send + Sync {
    /// Called with the full replacement record list after a reload settles.
    fn on_summaries_updated(&self, records: &[SummaryRecord]);
}

/// No-op sink for tests and minimal wirings.
pub struct NoSummarySink;

impl SummarySink for NoSummarySink {
    fn on_summaries_updated(&self, _records: &[SummaryRecord]) {}
}
