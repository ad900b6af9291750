//! Expand/collapse state for the summary panel.

use crate::summary::entities::SummaryRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of record ids currently shown expanded.
///
/// Pure UI state: mutated only by explicit user toggles (or the auto-expand
/// rule after a reload settles) and never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`. Returns `true` if the record is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    /// Apply the post-reload auto-expand rule, replacing any prior state.
    ///
    /// Exactly one record is expanded when a natural candidate exists: the
    /// sole record of a single-record batch, otherwise the comparison record
    /// if present. A multi-document batch whose comparison call failed gets
    /// nothing auto-expanded.
    pub fn auto_expand(&mut self, records: &[SummaryRecord]) {
        self.expanded.clear();
        let candidate = match records {
            [only] => Some(only.id.as_str()),
            _ => records
                .iter()
                .find(|r| r.is_comparison())
                .map(|r| r.id.as_str()),
        };
        if let Some(id) = candidate {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}
