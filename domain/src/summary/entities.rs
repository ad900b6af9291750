//! Summary record entities

use crate::document::DocumentRef;
use crate::summary::COMPARISON_ID;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a summary record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryKind {
    /// Summary of a single document
    Individual,
    /// Cross-document synthesis over the full session set
    Comparison,
}

/// One entry in the summary panel (Entity)
///
/// Failed records carry a user-facing fallback text instead of model output;
/// they still occupy their slot and participate in retry. The whole list is
/// replaced on reload, never patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Document id, or [`COMPARISON_ID`] for the comparison record
    pub id: String,
    /// Display name (the document's filename, or a comparison title)
    pub name: String,
    /// Model output, or fallback text when `failed`
    pub text: String,
    pub kind: SummaryKind,
    pub failed: bool,
    pub produced_at: DateTime<Utc>,
}

impl SummaryRecord {
    /// Creates a successful per-document summary.
    pub fn individual(doc: &DocumentRef, text: impl Into<String>) -> Self {
        Self {
            id: doc.id.to_string(),
            name: doc.name.clone(),
            text: text.into(),
            kind: SummaryKind::Individual,
            failed: false,
            produced_at: Utc::now(),
        }
    }

    /// Creates a failed per-document summary carrying fallback text.
    ///
    /// The record keeps its slot so a failure never shrinks the list.
    pub fn failure(doc: &DocumentRef, fallback: impl Into<String>) -> Self {
        Self {
            id: doc.id.to_string(),
            name: doc.name.clone(),
            text: fallback.into(),
            kind: SummaryKind::Individual,
            failed: true,
            produced_at: Utc::now(),
        }
    }

    /// Creates the cross-document comparison record.
    pub fn comparison(document_count: usize, text: impl Into<String>) -> Self {
        Self {
            id: COMPARISON_ID.to_string(),
            name: format!("Comparison of {} Documents", document_count),
            text: text.into(),
            kind: SummaryKind::Comparison,
            failed: false,
            produced_at: Utc::now(),
        }
    }

    pub fn is_comparison(&self) -> bool {
        self.kind == SummaryKind::Comparison
    }
}

/// Check the batch invariant: at most one comparison record, and if present
/// it is in the last position.
pub fn batch_is_well_formed(records: &[SummaryRecord]) -> bool {
    let comparisons = records.iter().filter(|r| r.is_comparison()).count();
    match comparisons {
        0 => true,
        1 => records.last().is_some_and(|r| r.is_comparison()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentRef;

    #[test]
    fn test_individual_record() {
        let doc = DocumentRef::new("1", "a.pdf");
        let record = SummaryRecord::individual(&doc, "Key points...");

        assert_eq!(record.id, "1");
        assert_eq!(record.name, "a.pdf");
        assert_eq!(record.kind, SummaryKind::Individual);
        assert!(!record.failed);
    }

    #[test]
    fn test_failure_record_keeps_identity() {
        let doc = DocumentRef::new("1", "a.pdf");
        let record = SummaryRecord::failure(&doc, "Failed to load summary. Please try again.");

        assert_eq!(record.id, "1");
        assert!(record.failed);
        assert!(record.text.contains("Failed to load summary"));
    }

    #[test]
    fn test_comparison_record() {
        let record = SummaryRecord::comparison(3, "All three documents...");

        assert_eq!(record.id, COMPARISON_ID);
        assert_eq!(record.name, "Comparison of 3 Documents");
        assert!(record.is_comparison());
    }

    #[test]
    fn test_batch_invariant() {
        let doc = DocumentRef::new("1", "a.pdf");
        let individual = SummaryRecord::individual(&doc, "text");
        let comparison = SummaryRecord::comparison(2, "text");

        assert!(batch_is_well_formed(&[]));
        assert!(batch_is_well_formed(&[individual.clone()]));
        assert!(batch_is_well_formed(&[
            individual.clone(),
            comparison.clone()
        ]));
        // Comparison not last
        assert!(!batch_is_well_formed(&[comparison.clone(), individual]));
        // Two comparisons
        assert!(!batch_is_well_formed(&[comparison.clone(), comparison]));
    }
}
