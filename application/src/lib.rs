//! Application layer for docsage
//!
//! This crate contains use cases, port definitions, the summary
//! orchestrator, and the session controller. It depends only on the domain
//! layer.

pub mod config;
pub mod orchestrator;
pub mod ports;
pub mod session;
pub mod use_cases;

// Re-export commonly used types
pub use config::QueryTimeouts;
pub use orchestrator::{ReloadOutcome, SummaryOrchestrator, SummarySnapshot, SummaryStatus};
pub use ports::{
    artifact_store::{ArtifactStore, StoreError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{NoProgress, SummaryProgress},
    query_gateway::{QueryError, QueryGateway},
    summary_sink::{NoSummarySink, SummarySink},
    upload_gateway::{UploadError, UploadFile, UploadGateway},
};
pub use session::{SessionController, SessionPhase};
pub use use_cases::chat_turn::{ChatTurnOutcome, ChatTurnUseCase};
pub use use_cases::compile_report::{CompileReportUseCase, ReportError, ReportInput};
pub use use_cases::load_summaries::{
    LoadSummariesError, LoadSummariesInput, LoadSummariesUseCase,
};
