//! Compile Report use case
//!
//! Lays out a snapshot of the conversation or the summary records into a
//! paginated artifact and hands it to the artifact store. Compilation is
//! all-or-nothing: the artifact is built completely in memory and stored in
//! one step, so a failure never leaves a partial report behind.

use crate::ports::artifact_store::{ArtifactStore, StoreError};
use chrono::{DateTime, Local};
use docsage_domain::report::layout::{LayoutError, ReportLayout};
use docsage_domain::{
    ChatMessage, PageLayout, PromptTemplate, ReportArtifact, ReportKind, SummaryRecord,
};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Errors fatal to a single export attempt.
///
/// Prior state (conversation, summaries) is untouched by any of these; the
/// user may simply retry the export.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Failed to store report: {0}")]
    Store(#[from] StoreError),
}

/// Snapshot input for one report compilation.
///
/// The compiler only reads these; the caller keeps ownership of the live
/// transcript and records.
#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub kind: ReportKind,
    pub transcript: &'a [ChatMessage],
    pub summaries: &'a [SummaryRecord],
    pub document_names: &'a [String],
    pub generated_at: DateTime<Local>,
}

/// Use case for compiling and exporting a paginated report.
pub struct CompileReportUseCase {
    layout: PageLayout,
}

impl CompileReportUseCase {
    pub fn new() -> Self {
        Self {
            layout: PageLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Lay the snapshot out into a complete artifact.
    pub fn compile(&self, input: &ReportInput<'_>) -> Result<ReportArtifact, ReportError> {
        let mut engine = ReportLayout::new(self.layout)?;

        // Fixed header block, always on page 1.
        engine.emit_label(match input.kind {
            ReportKind::Chat => "Chat Report",
            ReportKind::Summary => "Document Summary Report",
        });
        engine.emit_body(&format!(
            "Documents: {}",
            input.document_names.join(", ")
        ));
        engine.emit_body(&format!(
            "Generated: {}",
            input.generated_at.format("%Y-%m-%d %H:%M")
        ));
        engine.end_item();

        match input.kind {
            ReportKind::Chat => {
                for message in input.transcript {
                    engine.emit_label(&format!(
                        "{} - {}",
                        message.sender,
                        message.timestamp.format("%Y-%m-%d %H:%M:%S")
                    ));
                    engine.emit_body(&message.text);
                    engine.end_item();
                }
            }
            ReportKind::Summary => {
                if input.summaries.is_empty() {
                    engine.emit_body(PromptTemplate::no_summaries_available());
                    engine.end_item();
                } else {
                    for record in input.summaries {
                        engine.emit_label(&record.name);
                        engine.emit_body(&record.text);
                        engine.end_item();
                    }
                }
            }
        }

        Ok(ReportArtifact {
            kind: input.kind,
            file_name: ReportArtifact::file_name_for(
                input.kind,
                input.generated_at.date_naive(),
            ),
            pages: engine.finish(),
        })
    }

    /// Compile the snapshot and persist it through the store.
    pub fn export(
        &self,
        input: &ReportInput<'_>,
        store: &dyn ArtifactStore,
    ) -> Result<PathBuf, ReportError> {
        let artifact = self.compile(input)?;
        let path = store.store(&artifact)?;
        info!(
            "Exported {} report ({} pages) to {}",
            artifact.kind,
            artifact.page_count(),
            path.display()
        );
        Ok(path)
    }
}

impl Default for CompileReportUseCase {
    fn default() -> Self {
        Self::new()
    }
}
