//! Paginated report documents.
//!
//! The layout engine in [`layout`] turns an ordered sequence of labelled
//! text items into pages using fixed cursor arithmetic; the resulting
//! [`ReportArtifact`] is handed to an artifact store for writing.

pub mod layout;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which body source a report draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// The conversation transcript
    Chat,
    /// The aggregated summary records
    Summary,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Chat => "chat",
            ReportKind::Summary => "summary",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chat" => Ok(ReportKind::Chat),
            "summary" => Ok(ReportKind::Summary),
            other => Err(format!("unknown report kind: {}", other)),
        }
    }
}

/// Role of a laid-out line, used by renderers to style labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Item label (sender + timestamp, or document name); rendered bold
    Label,
    /// Wrapped body text
    Body,
}

/// One laid-out line on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn label(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Label,
            text: text.into(),
        }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Body,
            text: text.into(),
        }
    }
}

/// One page of a compiled report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub lines: Vec<Line>,
}

/// A fully compiled report, ready to be stored.
///
/// Produced whole or not at all; the compiler never emits partial artifacts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportArtifact {
    pub kind: ReportKind,
    pub file_name: String,
    pub pages: Vec<Page>,
}

impl ReportArtifact {
    /// Deterministic artifact name: `<kind>-report-<ISO-date>.txt`.
    pub fn file_name_for(kind: ReportKind, date: NaiveDate) -> String {
        format!("{}-report-{}.txt", kind, date.format("%Y-%m-%d"))
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Fixed page geometry, in millimetres on A4.
///
/// The break check compares the cursor against `break_threshold` before any
/// line is placed, so a page never receives a line past the threshold but a
/// single long item may span several pages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageLayout {
    /// Cursor position at the top of every page
    pub top_margin: f32,
    /// Near-bottom limit; a cursor beyond this forces a page break
    pub break_threshold: f32,
    /// Vertical advance per emitted line
    pub line_height: f32,
    /// Vertical advance after each item
    pub item_gap: f32,
    /// Content width in characters for word wrapping
    pub wrap_width: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            top_margin: 20.0,
            break_threshold: 270.0,
            line_height: 7.0,
            item_gap: 5.0,
            wrap_width: 90,
        }
    }
}
