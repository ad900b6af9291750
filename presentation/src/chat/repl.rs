//! REPL (Read-Eval-Print Loop) for interactive document chat

use crate::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use chrono::Local;
use colored::Colorize;
use docsage_application::{
    ArtifactStore, ChatTurnOutcome, ChatTurnUseCase, CompileReportUseCase, ConversationEvent,
    ConversationLogger, QueryGateway, ReportInput, SessionController, SummaryOrchestrator,
};
use docsage_domain::{ReportKind, Sender};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive chat REPL
pub struct ChatRepl<G: QueryGateway + 'static> {
    orchestrator: Arc<SummaryOrchestrator<G>>,
    chat: ChatTurnUseCase<G>,
    report: CompileReportUseCase,
    artifact_store: Arc<dyn ArtifactStore>,
    logger: Arc<dyn ConversationLogger>,
    session: SessionController,
    show_progress: bool,
}

impl<G: QueryGateway + 'static> ChatRepl<G> {
    pub fn new(
        gateway: Arc<G>,
        orchestrator: Arc<SummaryOrchestrator<G>>,
        session: SessionController,
        artifact_store: Arc<dyn ArtifactStore>,
        logger: Arc<dyn ConversationLogger>,
    ) -> Self {
        Self {
            orchestrator,
            chat: ChatTurnUseCase::new(gateway),
            report: CompileReportUseCase::new(),
            artifact_store,
            logger,
            session,
            show_progress: true,
        }
    }

    /// Set whether to show progress bars
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the chat use case (for custom timeouts)
    pub fn with_chat_use_case(mut self, chat: ChatTurnUseCase<G>) -> Self {
        self.chat = chat;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("docsage").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    // Add to history
                    let _ = rl.add_history_entry(line);

                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    async fn process_question(&mut self, question: &str) {
        if self.session.documents().is_empty() {
            println!(
                "No documents in this session. Restart with files to upload, e.g. `docsage a.pdf`."
            );
            return;
        }

        println!("{}", "Thinking...".dimmed());
        let documents = self.session.documents().clone();
        let outcome = self
            .chat
            .execute(question, &documents, self.session.transcript_mut())
            .await;

        if let Some(reply) = self
            .session
            .transcript()
            .messages()
            .iter()
            .rev()
            .find(|m| m.sender == Sender::Bot)
        {
            println!("\n{}\n", reply.text);
        }

        self.logger.log(ConversationEvent::new(
            "chat_turn",
            serde_json::json!({
                "question": question,
                "answered": outcome == ChatTurnOutcome::Answered,
            }),
        ));
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, cmd: &str) -> bool {
        let mut parts = cmd.split_whitespace();
        let command = parts.next().unwrap_or(cmd);

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                self.print_help();
                false
            }
            "/docs" => {
                println!();
                println!("Documents in this session:");
                for doc in self.session.documents().iter() {
                    println!("  {} {} ({})", "-".cyan(), doc.name, doc.id);
                }
                println!();
                false
            }
            "/summaries" | "/s" => {
                self.reload_summaries().await;
                self.print_summaries();
                false
            }
            "/toggle" | "/t" => {
                match parts.next() {
                    Some(id) => {
                        self.orchestrator.toggle(id);
                        self.print_summaries();
                    }
                    None => println!("Usage: /toggle <record-id>  (ids are shown by /docs; the comparison record is `comparison`)"),
                }
                false
            }
            "/export" | "/e" => {
                match parts.next().map(str::parse::<ReportKind>) {
                    Some(Ok(kind)) => self.export_report(kind),
                    _ => println!("Usage: /export <chat|summary>"),
                }
                false
            }
            "/back" => {
                self.session.reset();
                self.orchestrator.reset();
                self.logger
                    .log(ConversationEvent::new("session_reset", serde_json::json!({})));
                println!("Session cleared. Restart docsage with files to start a new one.");
                false
            }
            _ => {
                println!("Unknown command: {}. Try /help.", command);
                false
            }
        }
    }

    async fn reload_summaries(&self) {
        if self.session.documents().is_empty() {
            println!("No documents in this session.");
            return;
        }

        if self.show_progress {
            let progress = ProgressReporter::new();
            self.orchestrator
                .reload(self.session.documents(), &progress)
                .await;
        } else {
            self.orchestrator
                .reload(self.session.documents(), &SimpleProgress)
                .await;
        }
    }

    fn print_summaries(&self) {
        let snapshot = self.orchestrator.snapshot();
        println!();
        println!(
            "{}",
            ConsoleFormatter::format_summaries(&snapshot, self.session.documents().len())
        );
    }

    fn export_report(&self, kind: ReportKind) {
        let snapshot = self.orchestrator.snapshot();
        let document_names = self.session.documents().names();
        let input = ReportInput {
            kind,
            transcript: self.session.transcript().messages(),
            summaries: &snapshot.records,
            document_names: &document_names,
            generated_at: Local::now(),
        };

        match self.report.export(&input, self.artifact_store.as_ref()) {
            Ok(path) => {
                println!("Exported {} report to {}", kind, path.display());
                self.logger.log(ConversationEvent::new(
                    "report_exported",
                    serde_json::json!({
                        "kind": kind.as_str(),
                        "path": path.display().to_string(),
                    }),
                ));
            }
            Err(e) => {
                // Prior state is untouched; the export can simply be retried.
                eprintln!("{} {}", "Export failed:".red().bold(), e);
            }
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("+---------------------------------------------+");
        println!("|            docsage - Document Chat          |");
        println!("+---------------------------------------------+");
        println!();
        println!(
            "Documents: {}",
            self.session.documents().names().join(", ")
        );
        println!();
        println!("Ask anything about your documents, or use a command:");
        println!("  /summaries  - Load and show document summaries");
        println!("  /help       - Show all commands");
        println!();
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  /help, /h, /?       - Show this help");
        println!("  /docs               - List documents in this session");
        println!("  /summaries, /s      - Reload and show summaries");
        println!("  /toggle <id>, /t    - Expand/collapse one summary record");
        println!("  /export <kind>, /e  - Export a chat or summary report");
        println!("  /back               - Reset the session (clears everything)");
        println!("  /quit, /exit, /q    - Exit");
        println!();
    }
}
