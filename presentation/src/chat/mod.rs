//! Interactive chat module
//!
//! Provides a readline-based interactive session: conversation turns plus
//! slash commands for the summary panel and report export.

mod repl;

pub use repl::ChatRepl;
