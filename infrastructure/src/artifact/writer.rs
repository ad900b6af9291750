//! Plain-text artifact writer.
//!
//! Renders every page of a [`ReportArtifact`] into one string and writes it
//! with a single `fs::write`, so a failed export never leaves a partial
//! file behind.

use docsage_application::ports::artifact_store::{ArtifactStore, StoreError};
use docsage_domain::{LineKind, ReportArtifact};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes report artifacts into a directory on the local filesystem.
pub struct FileArtifactStore {
    output_dir: PathBuf,
}

impl FileArtifactStore {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Render all pages into the final text form.
    ///
    /// Label lines carry bold markers; pages are separated by a numbered
    /// rule so the pagination survives into the flat file.
    fn render(artifact: &ReportArtifact) -> String {
        let total = artifact.pages.len();
        let mut out = String::new();

        for (index, page) in artifact.pages.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&format!("===== Page {} of {} =====\n\n", index + 1, total));
            for line in &page.lines {
                match line.kind {
                    LineKind::Label => out.push_str(&format!("**{}**\n", line.text)),
                    LineKind::Body => {
                        out.push_str(&line.text);
                        out.push('\n');
                    }
                }
            }
        }
        out
    }
}

impl ArtifactStore for FileArtifactStore {
    fn store(&self, artifact: &ReportArtifact) -> Result<PathBuf, StoreError> {
        fs::create_dir_all(&self.output_dir)?;

        let rendered = Self::render(artifact);
        let path = self.output_dir.join(&artifact.file_name);
        fs::write(&path, rendered)?;

        debug!("Wrote artifact {}", path.display());
        Ok(path)
    }
}
