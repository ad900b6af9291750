//! CLI entrypoint for docsage
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;
use docsage_application::{
    ArtifactStore, ChatTurnUseCase, CompileReportUseCase, ConversationEvent, ConversationLogger,
    NoConversationLogger, ReportInput, SessionController, SummaryOrchestrator, SummarySink,
    UploadFile, UploadGateway,
};
use docsage_domain::{ReportKind, SummaryRecord};
use docsage_infrastructure::{
    ConfigLoader, FileArtifactStore, HttpBackendClient, JsonlConversationLogger,
};
use docsage_presentation::{ChatRepl, Cli, ConsoleFormatter, ProgressReporter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sink that mirrors settled summary reloads into the conversation log.
struct SummaryLogSink {
    logger: Arc<dyn ConversationLogger>,
}

impl SummarySink for SummaryLogSink {
    fn on_summaries_updated(&self, records: &[SummaryRecord]) {
        self.logger.log(ConversationEvent::new(
            "summaries_loaded",
            serde_json::json!({
                "records": records.len(),
                "failed": records.iter().filter(|r| r.failed).count(),
            }),
        ));
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let base_url = cli
        .base_url
        .clone()
        .unwrap_or_else(|| config.backend.base_url.clone());
    let timeouts = config.backend.timeouts();

    if cli.files.is_empty() {
        bail!("At least one document is required. Example: docsage lease.pdf");
    }

    info!("Starting docsage against {}", base_url);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpBackendClient::new(base_url));

    let logger: Arc<dyn ConversationLogger> = match &config.log.conversation_log {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(jsonl) => Arc::new(jsonl),
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let output_dir = cli
        .output_dir
        .clone()
        .or_else(|| config.report.output_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let artifact_store: Arc<dyn ArtifactStore> = Arc::new(FileArtifactStore::new(output_dir));

    let orchestrator = Arc::new(
        SummaryOrchestrator::new(Arc::clone(&gateway))
            .with_timeouts(timeouts)
            .with_sink(Arc::new(SummaryLogSink {
                logger: Arc::clone(&logger),
            })),
    );

    // Upload the documents and open the session
    let mut files = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        files.push(UploadFile::new(name, bytes));
    }

    let uploaded = gateway
        .upload(&files)
        .await
        .context("Failed to upload documents")?;

    let mut session = SessionController::new();
    session.on_upload_success(uploaded);

    if !cli.quiet {
        println!(
            "Uploaded {} document(s): {}",
            session.documents().len(),
            session.documents().names().join(", ")
        );
    }

    // One-shot summarize mode
    if cli.summarize {
        if cli.quiet {
            orchestrator
                .reload(session.documents(), &docsage_application::NoProgress)
                .await;
        } else {
            let progress = ProgressReporter::new();
            orchestrator.reload(session.documents(), &progress).await;
        }

        let snapshot = orchestrator.snapshot();
        println!(
            "{}",
            ConsoleFormatter::format_summaries(&snapshot, session.documents().len())
        );

        if let Some(kind) = &cli.export {
            let kind: ReportKind = kind
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid --export kind")?;
            let document_names = session.documents().names();
            let input = ReportInput {
                kind,
                transcript: session.transcript().messages(),
                summaries: &snapshot.records,
                document_names: &document_names,
                generated_at: Local::now(),
            };
            let path = CompileReportUseCase::new()
                .export(&input, artifact_store.as_ref())
                .context("Failed to export report")?;
            println!("Exported {} report to {}", kind, path.display());
        }

        return Ok(());
    }

    // Interactive chat mode
    let chat = ChatTurnUseCase::new(Arc::clone(&gateway)).with_timeouts(timeouts);
    let mut repl = ChatRepl::new(gateway, orchestrator, session, artifact_store, logger)
        .with_progress(!cli.quiet)
        .with_chat_use_case(chat);

    repl.run().await?;

    Ok(())
}
