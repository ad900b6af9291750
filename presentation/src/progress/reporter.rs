//! Progress reporting for summary loading

use colored::Colorize;
use docsage_application::ports::progress::SummaryProgress;
use docsage_domain::DocumentRef;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports summary loading progress with a progress bar
pub struct ProgressReporter {
    multi: MultiProgress,
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryProgress for ProgressReporter {
    fn on_load_start(&self, total_documents: usize) {
        let pb = self.multi.add(ProgressBar::new(total_documents as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix("Summarizing");
        pb.set_message("Starting...");

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_document_complete(&self, doc: &DocumentRef, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), doc.name)
            } else {
                format!("{} {}", "x".red(), doc.name)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_comparison_start(&self) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_message("Comparing documents...".to_string());
        }
    }

    fn on_comparison_complete(&self, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} comparison", "v".green())
            } else {
                format!("{} comparison", "x".red())
            };
            pb.set_message(status);
        }
    }

    fn on_load_complete(&self, record_count: usize) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!(
                "{} ({} record(s))",
                "done".green(),
                record_count
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SummaryProgress for SimpleProgress {
    fn on_load_start(&self, total_documents: usize) {
        println!(
            "{} Summarizing {} document(s)...",
            "->".cyan(),
            total_documents
        );
    }

    fn on_document_complete(&self, doc: &DocumentRef, success: bool) {
        if success {
            println!("  {} {}", "v".green(), doc.name);
        } else {
            println!("  {} {} (failed)", "x".red(), doc.name);
        }
    }

    fn on_comparison_start(&self) {
        println!("{} Comparing documents...", "->".cyan());
    }

    fn on_comparison_complete(&self, success: bool) {
        if success {
            println!("  {} comparison", "v".green());
        } else {
            println!("  {} comparison (failed)", "x".red());
        }
    }

    fn on_load_complete(&self, _record_count: usize) {
        println!();
    }
}
