//! Chat Turn use case
//!
//! One question/answer exchange about the session's documents. The user
//! message is appended before the backend is asked, and stays appended no
//! matter how the call resolves; a failed call appends a fallback bot
//! message instead of an answer.

use crate::config::QueryTimeouts;
use crate::ports::query_gateway::QueryGateway;
use docsage_domain::{ChatMessage, DocumentSet, PromptTemplate, Transcript};
use std::sync::Arc;
use tracing::{debug, warn};

/// How a chat turn resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatTurnOutcome {
    Answered,
    /// The backend call failed; the fallback message was appended
    Failed,
}

/// Use case for a single conversational exchange.
pub struct ChatTurnUseCase<G: QueryGateway + 'static> {
    gateway: Arc<G>,
    timeouts: QueryTimeouts,
}

impl<G: QueryGateway + 'static> ChatTurnUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            timeouts: QueryTimeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: QueryTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Ask `question` about the session's documents and append both sides
    /// of the exchange to the transcript.
    pub async fn execute(
        &self,
        question: &str,
        documents: &DocumentSet,
        transcript: &mut Transcript,
    ) -> ChatTurnOutcome {
        transcript.push(ChatMessage::user(question));

        let ids = documents.ids();
        match self.gateway.ask(question, &ids, self.timeouts.chat).await {
            Ok(answer) => {
                debug!("Chat turn answered ({} bytes)", answer.len());
                let text = if answer.trim().is_empty() {
                    "I'm still learning!".to_string()
                } else {
                    answer
                };
                transcript.push(ChatMessage::bot(text));
                ChatTurnOutcome::Answered
            }
            Err(e) => {
                warn!("Chat turn failed: {}", e);
                transcript.push(ChatMessage::bot(PromptTemplate::chat_failure()));
                ChatTurnOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::query_gateway::QueryError;
    use async_trait::async_trait;
    use docsage_domain::{DocumentId, DocumentRef, Sender};
    use std::time::Duration;

    struct FixedGateway {
        response: Result<String, QueryError>,
    }

    #[async_trait]
    impl QueryGateway for FixedGateway {
        async fn ask(
            &self,
            _question: &str,
            _document_ids: &[DocumentId],
            _timeout: Duration,
        ) -> Result<String, QueryError> {
            self.response.clone()
        }
    }

    fn one_doc() -> DocumentSet {
        let mut set = DocumentSet::new();
        set.insert(DocumentRef::new("1", "a.pdf"));
        set
    }

    #[tokio::test]
    async fn answered_turn_appends_both_messages() {
        let use_case = ChatTurnUseCase::new(Arc::new(FixedGateway {
            response: Ok("Clause 4 covers termination.".to_string()),
        }));
        let mut transcript = Transcript::new();

        let outcome = use_case
            .execute("What is clause 4?", &one_doc(), &mut transcript)
            .await;

        assert_eq!(outcome, ChatTurnOutcome::Answered);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].sender, Sender::User);
        assert_eq!(transcript.messages()[1].text, "Clause 4 covers termination.");
    }

    #[tokio::test]
    async fn failed_turn_keeps_user_message_and_appends_fallback() {
        let use_case = ChatTurnUseCase::new(Arc::new(FixedGateway {
            response: Err(QueryError::Timeout),
        }));
        let mut transcript = Transcript::new();

        let outcome = use_case
            .execute("What is clause 4?", &one_doc(), &mut transcript)
            .await;

        assert_eq!(outcome, ChatTurnOutcome::Failed);
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].text, "What is clause 4?");
        assert_eq!(
            transcript.messages()[1].text,
            "Something went wrong. Please try again."
        );
    }

    #[tokio::test]
    async fn empty_answer_gets_placeholder_reply() {
        let use_case = ChatTurnUseCase::new(Arc::new(FixedGateway {
            response: Ok("".to_string()),
        }));
        let mut transcript = Transcript::new();

        use_case.execute("Hello?", &one_doc(), &mut transcript).await;

        assert_eq!(transcript.messages()[1].text, "I'm still learning!");
    }
}
