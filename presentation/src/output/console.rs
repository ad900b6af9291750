//! Console output formatter for the summary panel

use crate::output::render::SummaryRenderer;
use colored::Colorize;
use docsage_application::{SummarySnapshot, SummaryStatus};
use docsage_domain::SummaryRecord;

/// Formats summary state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the whole summary panel: header, count, and each record
    /// honoring its expand/collapse state.
    pub fn format_summaries(snapshot: &SummarySnapshot, document_count: usize) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "Document Summaries".bold().cyan()));
        output.push_str(&format!(
            "{}\n\n",
            Self::count_line(snapshot, document_count)
        ));

        match &snapshot.status {
            SummaryStatus::Idle => {
                output.push_str("No documents uploaded yet.\n");
                output.push_str("Upload documents to see their summaries here.\n");
                return output;
            }
            SummaryStatus::Loading => {
                output.push_str("Generating summaries... this may take a few moments.\n");
                return output;
            }
            SummaryStatus::Failed(message) => {
                output.push_str(&format!("{} {}\n", "Error:".red().bold(), message));
                output.push_str("Use /summaries to retry.\n");
                return output;
            }
            SummaryStatus::Ready => {}
        }

        let renderer = SummaryRenderer::new();
        for record in &snapshot.records {
            let expanded = snapshot.expansion.is_expanded(&record.id);
            output.push_str(&Self::record_header(record, expanded));
            if expanded {
                output.push('\n');
                output.push_str(&Self::record_body(record, &renderer));
                output.push('\n');
            }
        }

        output
    }

    fn count_line(snapshot: &SummarySnapshot, document_count: usize) -> String {
        if snapshot.records.iter().any(|r| r.is_comparison()) {
            format!("{} documents + comparison", document_count)
        } else {
            format!("{} document(s)", document_count)
        }
    }

    fn record_header(record: &SummaryRecord, expanded: bool) -> String {
        let marker = if expanded { "v" } else { ">" };
        let name = if record.failed {
            format!("{} {}", record.name, "[failed]".red())
        } else {
            record.name.clone()
        };
        format!(
            "{} {} {}\n",
            marker.cyan(),
            Self::icon_for(&record.name),
            name.bold()
        )
    }

    fn record_body(record: &SummaryRecord, renderer: &SummaryRenderer) -> String {
        if record.failed {
            let mut body = String::new();
            body.push_str(&format!("  {}\n", record.text.red()));
            body.push_str("  The document might be too large or in an unsupported format.\n");
            body.push_str("  Use /summaries to retry.\n");
            return body;
        }

        renderer
            .render(&record.text)
            .lines()
            .map(|line| format!("  {}\n", line))
            .collect()
    }

    /// Short type tag derived from the filename extension.
    fn icon_for(name: &str) -> &'static str {
        match name.rsplit('.').next().map(str::to_lowercase).as_deref() {
            Some("pdf") => "[pdf]",
            Some("doc") | Some("docx") => "[doc]",
            Some("txt") => "[txt]",
            Some("xls") | Some("xlsx") => "[xls]",
            Some("ppt") | Some("pptx") => "[ppt]",
            _ => "[doc]",
        }
    }
}
