//! Summary markup rendering.
//!
//! The backend emits summaries in a lightweight markdown dialect: `#`/`##`
//! headings, `**bold**` spans, bullet lines, and `--- Document: name ---`
//! separators. This module is the isolated formatting collaborator that
//! turns that markup into styled terminal text; nothing else in the client
//! interprets summary bodies.

use colored::Colorize;
use regex::Regex;

/// Renders backend summary markup for the terminal.
pub struct SummaryRenderer {
    bold_span: Regex,
    doc_separator: Regex,
}

impl SummaryRenderer {
    pub fn new() -> Self {
        Self {
            // Both are fixed patterns; failure here would be a programming
            // error caught by the constructor tests.
            bold_span: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            doc_separator: Regex::new(r"^--- Document: (.+?) ---$").unwrap(),
        }
    }

    /// Render one summary body into styled lines.
    pub fn render(&self, text: &str) -> String {
        text.lines()
            .map(|line| self.render_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_line(&self, line: &str) -> String {
        let trimmed = line.trim_end();

        if let Some(title) = trimmed.strip_prefix("# ") {
            return strip_markup(title).to_uppercase().bold().cyan().to_string();
        }
        if let Some(section) = trimmed.strip_prefix("## ") {
            return strip_markup(section).bold().cyan().to_string();
        }
        if let Some(sub) = trimmed.strip_prefix("### ") {
            return strip_markup(sub).bold().to_string();
        }
        if let Some(captures) = self.doc_separator.captures(trimmed) {
            return format!("--- {} ---", &captures[1]).yellow().to_string();
        }
        if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
            .or_else(|| trimmed.strip_prefix("• "))
        {
            return format!("  • {}", self.render_spans(item));
        }

        self.render_spans(trimmed)
    }

    /// Replace `**bold**` spans with terminal bold.
    fn render_spans(&self, line: &str) -> String {
        self.bold_span
            .replace_all(line, |captures: &regex::Captures<'_>| {
                captures[1].bold().to_string()
            })
            .into_owned()
    }
}

/// Drop residual `**` markers from heading text.
fn strip_markup(text: &str) -> String {
    text.replace("**", "")
}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> SummaryRenderer {
        colored::control::set_override(false);
        SummaryRenderer::new()
    }

    #[test]
    fn renders_top_heading_uppercase() {
        let renderer = plain();
        assert_eq!(renderer.render("# Document Summary"), "DOCUMENT SUMMARY");
    }

    #[test]
    fn renders_section_heading_as_is() {
        let renderer = plain();
        assert_eq!(renderer.render("## Key Findings"), "Key Findings");
    }

    #[test]
    fn renders_bullets_with_indent() {
        let renderer = plain();
        assert_eq!(renderer.render("- first point"), "  • first point");
        assert_eq!(renderer.render("• second point"), "  • second point");
    }

    #[test]
    fn renders_bold_spans_inline() {
        let renderer = plain();
        assert_eq!(
            renderer.render("the **important** part"),
            "the important part"
        );
    }

    #[test]
    fn renders_document_separator() {
        let renderer = plain();
        assert_eq!(
            renderer.render("--- Document: lease.pdf ---"),
            "--- lease.pdf ---"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        let renderer = plain();
        let text = "Two plain lines\nstay as they are";
        assert_eq!(renderer.render(text), text);
    }
}
