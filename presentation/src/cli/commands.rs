//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for docsage
#[derive(Parser, Debug)]
#[command(name = "docsage")]
#[command(author, version, about = "Chat with your documents and export summary reports")]
#[command(long_about = r#"
docsage uploads documents to a document-QA backend, then lets you converse
about their contents, browse per-document and cross-document summaries, and
export paginated reports.

Sessions accumulate: uploading more files before a reset grows the same
session instead of replacing it.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./docsage.toml      Project-level config
3. ~/.config/docsage/config.toml   Global config

Example:
  docsage lease.pdf                 Upload one document and chat about it
  docsage a.pdf b.docx --summarize  Print all summaries and exit
  docsage a.pdf b.docx --summarize --export summary
"#)]
pub struct Cli {
    /// Documents to upload into the session
    pub files: Vec<PathBuf>,

    /// Load and print summaries instead of starting the chat
    #[arg(short, long)]
    pub summarize: bool,

    /// Export a report after summarizing (chat or summary)
    #[arg(long, value_name = "KIND")]
    pub export: Option<String>,

    /// Directory reports are written into (overrides config)
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Backend base URL (overrides config)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
