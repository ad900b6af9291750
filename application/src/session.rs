//! Session Controller
//!
//! Owns the two-phase session state machine and the data both the Summary
//! Orchestrator and the Report Compiler draw from: the document set and the
//! conversation transcript. Never calls the backend itself.

use docsage_domain::{DocumentRef, DocumentSet, Transcript};
use tracing::info;

/// The two screens of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Collecting documents; no conversation yet
    Uploading,
    /// Conversing about the accumulated document set
    Chatting,
}

/// Owner of the session's document set and transcript.
pub struct SessionController {
    phase: SessionPhase,
    documents: DocumentSet,
    transcript: Transcript,
}

impl SessionController {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Uploading,
            documents: DocumentSet::new(),
            transcript: Transcript::new(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn documents(&self) -> &DocumentSet {
        &self.documents
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Accumulate a successful upload into the session.
    ///
    /// New refs extend the existing set (dedup by id, duplicates silently
    /// dropped) rather than replacing it: repeated uploads grow one session.
    /// Any successful upload moves the session to `Chatting`.
    /// Returns how many documents were actually new.
    pub fn on_upload_success(&mut self, docs: Vec<DocumentRef>) -> usize {
        let added = self.documents.extend(docs);
        if !self.documents.is_empty() {
            self.phase = SessionPhase::Chatting;
        }
        info!(
            "Session now holds {} document(s) ({} new)",
            self.documents.len(),
            added
        );
        added
    }

    /// Hard reset back to the upload screen.
    ///
    /// Unconditionally clears the document set and the conversation; there
    /// is no partial carry-over. The caller is responsible for resetting
    /// the Summary Orchestrator alongside.
    pub fn reset(&mut self) {
        self.documents.clear();
        self.transcript.clear();
        self.phase = SessionPhase::Uploading;
        info!("Session reset");
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}
