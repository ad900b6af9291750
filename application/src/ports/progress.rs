//! Progress notification port
//!
//! Defines the interface for reporting progress during a summary reload.

use docsage_domain::DocumentRef;

/// Callback for progress updates while summaries load.
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console bars, plain text, etc.)
pub trait SummaryProgress: Send + Sync {
    /// Called when a reload begins, with the number of per-document calls.
    fn on_load_start(&self, total_documents: usize);

    /// Called when one per-document call settles.
    fn on_document_complete(&self, doc: &DocumentRef, success: bool);

    /// Called when the comparison call starts (multi-document sessions only).
    fn on_comparison_start(&self) {}

    /// Called when the comparison call settles.
    fn on_comparison_complete(&self, _success: bool) {}

    /// Called when the reload settles, with the final record count.
    fn on_load_complete(&self, record_count: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SummaryProgress for NoProgress {
    fn on_load_start(&self, _total_documents: usize) {}
    fn on_document_complete(&self, _doc: &DocumentRef, _success: bool) {}
    fn on_load_complete(&self, _record_count: usize) {}
}
