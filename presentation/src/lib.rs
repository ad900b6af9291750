//! Presentation layer for docsage
//!
//! This crate contains CLI definitions, console output formatters,
//! progress reporters, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use output::render::SummaryRenderer;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
