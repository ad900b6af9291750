//! Document identity and the per-session document set.
//!
//! - [`DocumentId`]: opaque backend-assigned identifier (Value Object)
//! - [`DocumentRef`]: id + display name for one uploaded document (Entity)
//! - [`DocumentSet`]: insertion-ordered, id-deduplicated collection owned
//!   by the session

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the backend on upload (Value Object)
///
/// Identity of a document is its id, never its name; two uploads of the
/// same file yield distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        DocumentId::new(s)
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        DocumentId::new(s)
    }
}

/// One uploaded document: backend id plus the original filename (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: DocumentId,
    pub name: String,
}

impl DocumentRef {
    pub fn new(id: impl Into<DocumentId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The session's document collection.
///
/// Preserves upload order and silently drops re-inserted ids: repeated
/// uploads before the first reset grow one session rather than replacing it.
/// Cleared whole on session reset, never per item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentSet {
    documents: Vec<DocumentRef>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document, returning `true` if it was new.
    ///
    /// A duplicate id is silently dropped; the existing entry (and its
    /// position) wins.
    pub fn insert(&mut self, doc: DocumentRef) -> bool {
        if self.documents.iter().any(|d| d.id == doc.id) {
            return false;
        }
        self.documents.push(doc);
        true
    }

    /// Insert many, preserving order, deduplicating by id.
    pub fn extend(&mut self, docs: impl IntoIterator<Item = DocumentRef>) -> usize {
        docs.into_iter().filter(|d| self.insert(d.clone())).count()
    }

    pub fn clear(&mut self) {
        self.documents.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentRef> {
        self.documents.iter()
    }

    pub fn ids(&self) -> Vec<DocumentId> {
        self.documents.iter().map(|d| d.id.clone()).collect()
    }

    pub fn names(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.name.clone()).collect()
    }

    pub fn contains(&self, id: &DocumentId) -> bool {
        self.documents.iter().any(|d| &d.id == id)
    }
}
