//! Cursor-driven page layout.
//!
//! The engine walks a vertical cursor down the page. Before placing any
//! line, label or wrapped body line alike, it checks the cursor against
//! the near-bottom threshold and starts a fresh page when exceeded. After
//! each item the cursor advances by the inter-item gap.

use super::{Line, Page, PageLayout};
use thiserror::Error;

/// Errors detected while laying out a report
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),
}

/// Incremental layout engine producing a list of [`Page`]s.
pub struct ReportLayout {
    layout: PageLayout,
    pages: Vec<Page>,
    current: Page,
    cursor: f32,
}

impl ReportLayout {
    /// Create an engine for the given geometry.
    ///
    /// Malformed geometry (zero wrap width, non-positive line height, a
    /// threshold above the top margin missing) is rejected here so that a
    /// compile either runs to completion or produces nothing.
    pub fn new(layout: PageLayout) -> Result<Self, LayoutError> {
        if layout.wrap_width == 0 {
            return Err(LayoutError::InvalidGeometry("wrap width is zero".into()));
        }
        if layout.line_height <= 0.0 {
            return Err(LayoutError::InvalidGeometry(format!(
                "line height {} is not positive",
                layout.line_height
            )));
        }
        if layout.break_threshold <= layout.top_margin {
            return Err(LayoutError::InvalidGeometry(format!(
                "break threshold {} does not leave room below top margin {}",
                layout.break_threshold, layout.top_margin
            )));
        }
        Ok(Self {
            layout,
            pages: Vec::new(),
            current: Page::default(),
            cursor: layout.top_margin,
        })
    }

    pub fn with_defaults() -> Self {
        // Default geometry always validates
        Self::new(PageLayout::default()).unwrap_or_else(|_| unreachable!())
    }

    fn place(&mut self, line: Line) {
        if self.cursor > self.layout.break_threshold {
            self.break_page();
        }
        self.current.lines.push(line);
        self.cursor += self.layout.line_height;
    }

    fn break_page(&mut self) {
        let full = std::mem::take(&mut self.current);
        self.pages.push(full);
        self.cursor = self.layout.top_margin;
    }

    /// Emit an item label line (rendered bold by the artifact writer).
    pub fn emit_label(&mut self, text: &str) {
        self.place(Line::label(text));
    }

    /// Emit body text, word-wrapped to the content width.
    ///
    /// Each wrapped line gets its own break check, so one long body may
    /// legitimately span multiple pages.
    pub fn emit_body(&mut self, text: &str) {
        for wrapped in wrap_text(text, self.layout.wrap_width) {
            self.place(Line::body(wrapped));
        }
    }

    /// Advance the cursor past the current item.
    pub fn end_item(&mut self) {
        self.cursor += self.layout.item_gap;
    }

    /// Finish layout, returning all pages. Always yields at least one page.
    pub fn finish(mut self) -> Vec<Page> {
        self.pages.push(self.current);
        self.pages
    }
}

/// Greedy word wrap to `width` characters.
///
/// Input newlines are respected; words longer than the width are hard-split.
/// Empty input still yields one (empty) line so an item is never invisible.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for raw_line in text.lines() {
        if raw_line.trim().is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let mut word = word;
            // Hard-split words that cannot fit any line
            while word.chars().count() > width {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let split_at = word
                    .char_indices()
                    .nth(width)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                let (head, tail) = word.split_at(split_at);
                lines.push(head.to_string());
                word = tail;
            }

            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
