//! Load Summaries use case
//!
//! Orchestrates the fan-out/fan-in summary flow: one backend query per
//! document, concurrently in flight, joined by an all-settle barrier, then
//! a single cross-document comparison query for multi-document sessions.

use crate::config::QueryTimeouts;
use crate::ports::progress::SummaryProgress;
use crate::ports::query_gateway::QueryGateway;
use docsage_domain::{DocumentRef, PromptTemplate, SummaryRecord};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur during a summary load.
///
/// Per-call failures are not errors at this level: a failed per-document
/// query degrades to a `failed` record, a failed comparison query is
/// omitted. Only catastrophic conditions outside the per-call scope
/// surface here.
#[derive(Error, Debug)]
pub enum LoadSummariesError {
    #[error("No documents to summarize")]
    NoDocuments,

    #[error("Summary worker for document {0} died before reporting a result")]
    MissingSlot(String),
}

/// Input for the LoadSummaries use case
#[derive(Debug, Clone)]
pub struct LoadSummariesInput {
    /// Documents in upload order; record order follows this exactly
    pub documents: Vec<DocumentRef>,
    /// Per-call-class deadlines
    pub timeouts: QueryTimeouts,
}

impl LoadSummariesInput {
    pub fn new(documents: Vec<DocumentRef>) -> Self {
        Self {
            documents,
            timeouts: QueryTimeouts::default(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: QueryTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

/// Use case for loading the full summary batch of a session.
pub struct LoadSummariesUseCase<G: QueryGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: QueryGateway + 'static> LoadSummariesUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Execute the full load: per-document fan-out, comparison, aggregation.
    ///
    /// The returned list holds one record per input document in input order,
    /// with the comparison record (if the set has more than one document and
    /// the comparison call succeeded) appended last.
    pub async fn execute(
        &self,
        input: LoadSummariesInput,
        progress: &dyn SummaryProgress,
    ) -> Result<Vec<SummaryRecord>, LoadSummariesError> {
        if input.documents.is_empty() {
            return Err(LoadSummariesError::NoDocuments);
        }

        info!(
            "Loading summaries for {} document(s)",
            input.documents.len()
        );
        progress.on_load_start(input.documents.len());

        let mut records = self.phase_individual(&input, progress).await?;

        if input.documents.len() > 1 {
            if let Some(comparison) = self.phase_comparison(&input, progress).await {
                records.push(comparison);
            }
        }

        progress.on_load_complete(records.len());
        Ok(records)
    }

    /// Fan-out one query per document; fan-in preserving input order.
    ///
    /// All calls settle before this returns: one document's failure must
    /// not cancel or delay the others, and a failure occupies its slot as a
    /// `failed` record instead of dropping it.
    async fn phase_individual(
        &self,
        input: &LoadSummariesInput,
        progress: &dyn SummaryProgress,
    ) -> Result<Vec<SummaryRecord>, LoadSummariesError> {
        let mut join_set = JoinSet::new();

        for (index, doc) in input.documents.iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let doc = doc.clone();
            let timeout = input.timeouts.summary;

            join_set.spawn(async move {
                let result = gateway
                    .ask(
                        PromptTemplate::individual_summary(),
                        std::slice::from_ref(&doc.id),
                        timeout,
                    )
                    .await;
                (index, doc, result)
            });
        }

        let mut slots: Vec<Option<SummaryRecord>> = vec![None; input.documents.len()];

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, doc, Ok(answer))) => {
                    debug!("Summary for {} loaded", doc.name);
                    progress.on_document_complete(&doc, true);
                    let text = if answer.trim().is_empty() {
                        PromptTemplate::individual_empty().to_string()
                    } else {
                        answer
                    };
                    slots[index] = Some(SummaryRecord::individual(&doc, text));
                }
                Ok((index, doc, Err(e))) => {
                    warn!("Summary for document {} failed: {}", doc.id, e);
                    progress.on_document_complete(&doc, false);
                    slots[index] =
                        Some(SummaryRecord::failure(&doc, PromptTemplate::individual_failure()));
                }
                Err(e) => {
                    // A worker died without yielding its slot; which one is
                    // only known once the survivors are collected.
                    warn!("Summary task join error: {}", e);
                }
            }
        }

        let mut records = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(record) => records.push(record),
                None => {
                    let id = input.documents[index].id.to_string();
                    return Err(LoadSummariesError::MissingSlot(id));
                }
            }
        }
        Ok(records)
    }

    /// One comparison query over the full document set.
    ///
    /// Always attempted for multi-document sessions regardless of how the
    /// individual calls fared. A failure degrades to an omitted record,
    /// never a placeholder.
    async fn phase_comparison(
        &self,
        input: &LoadSummariesInput,
        progress: &dyn SummaryProgress,
    ) -> Option<SummaryRecord> {
        let ids: Vec<_> = input.documents.iter().map(|d| d.id.clone()).collect();

        info!("Loading comparison across {} documents", ids.len());
        progress.on_comparison_start();

        match self
            .gateway
            .ask(
                PromptTemplate::comparison_summary(),
                &ids,
                input.timeouts.comparison,
            )
            .await
        {
            Ok(answer) => {
                progress.on_comparison_complete(true);
                let text = if answer.trim().is_empty() {
                    PromptTemplate::comparison_empty().to_string()
                } else {
                    answer
                };
                Some(SummaryRecord::comparison(input.documents.len(), text))
            }
            Err(e) => {
                warn!("Comparison summary failed: {}", e);
                progress.on_comparison_complete(false);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::query_gateway::QueryError;
    use async_trait::async_trait;
    use docsage_domain::{DocumentId, SummaryKind};
    use std::collections::HashMap;
    use std::time::Duration;

    /// Gateway scripted per document-id set.
    ///
    /// The key is the comma-joined id list, so per-document calls and the
    /// comparison call can be scripted independently.
    struct ScriptedGateway {
        answers: HashMap<String, Result<String, QueryError>>,
    }

    impl ScriptedGateway {
        fn new() -> Self {
            Self {
                answers: HashMap::new(),
            }
        }

        fn answer(mut self, ids: &str, text: &str) -> Self {
            self.answers.insert(ids.to_string(), Ok(text.to_string()));
            self
        }

        fn fail(mut self, ids: &str, error: QueryError) -> Self {
            self.answers.insert(ids.to_string(), Err(error));
            self
        }

        fn key(ids: &[DocumentId]) -> String {
            ids.iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(",")
        }
    }

    #[async_trait]
    impl QueryGateway for ScriptedGateway {
        async fn ask(
            &self,
            _question: &str,
            document_ids: &[DocumentId],
            _timeout: Duration,
        ) -> Result<String, QueryError> {
            self.answers
                .get(&Self::key(document_ids))
                .cloned()
                .unwrap_or_else(|| Err(QueryError::Transport("unscripted call".into())))
        }
    }

    fn docs(names: &[&str]) -> Vec<DocumentRef> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| DocumentRef::new((i + 1).to_string(), *name))
            .collect()
    }

    #[tokio::test]
    async fn single_document_yields_one_record() {
        let gateway = Arc::new(ScriptedGateway::new().answer("1", "the summary"));
        let use_case = LoadSummariesUseCase::new(gateway);

        let records = use_case
            .execute(LoadSummariesInput::new(docs(&["a.pdf"])), &NoProgress)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].kind, SummaryKind::Individual);
        assert_eq!(records[0].text, "the summary");
    }

    #[tokio::test]
    async fn multi_document_appends_comparison_last() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .answer("1", "first")
                .answer("2", "second")
                .answer("1,2", "compared"),
        );
        let use_case = LoadSummariesUseCase::new(gateway);

        let records = use_case
            .execute(
                LoadSummariesInput::new(docs(&["a.pdf", "b.docx"])),
                &NoProgress,
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "2");
        assert_eq!(records[2].kind, SummaryKind::Comparison);
        assert_eq!(records[2].id, "comparison");
        assert!(docsage_domain::summary::entities::batch_is_well_formed(
            &records
        ));
    }

    #[tokio::test]
    async fn individual_failure_keeps_its_slot() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .answer("1", "first")
                .fail("2", QueryError::Timeout)
                .answer("1,2", "compared"),
        );
        let use_case = LoadSummariesUseCase::new(gateway);

        let records = use_case
            .execute(
                LoadSummariesInput::new(docs(&["a.pdf", "b.docx"])),
                &NoProgress,
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 3);
        assert!(!records[0].failed);
        assert!(records[1].failed);
        assert_eq!(records[1].id, "2");
        assert!(records[1].text.contains("Failed to load summary"));
    }

    #[tokio::test]
    async fn single_document_timeout_keeps_one_failed_record() {
        let gateway = Arc::new(ScriptedGateway::new().fail("1", QueryError::Timeout));
        let use_case = LoadSummariesUseCase::new(gateway);

        let records = use_case
            .execute(LoadSummariesInput::new(docs(&["a.pdf"])), &NoProgress)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert!(records[0].failed);
        assert!(records[0].text.contains("Failed to load summary"));
    }

    #[tokio::test]
    async fn comparison_failure_is_omitted_not_replaced() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .answer("1", "first")
                .answer("2", "second")
                .fail("1,2", QueryError::Server("model overloaded".into())),
        );
        let use_case = LoadSummariesUseCase::new(gateway);

        let records = use_case
            .execute(
                LoadSummariesInput::new(docs(&["a.pdf", "b.docx"])),
                &NoProgress,
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.kind == SummaryKind::Individual));
    }

    #[tokio::test]
    async fn comparison_attempted_even_when_all_individuals_fail() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .fail("1", QueryError::Timeout)
                .fail("2", QueryError::Timeout)
                .answer("1,2", "compared anyway"),
        );
        let use_case = LoadSummariesUseCase::new(gateway);

        let records = use_case
            .execute(
                LoadSummariesInput::new(docs(&["a.pdf", "b.docx"])),
                &NoProgress,
            )
            .await
            .unwrap();

        assert_eq!(records.len(), 3);
        assert!(records[0].failed);
        assert!(records[1].failed);
        assert_eq!(records[2].text, "compared anyway");
    }

    #[tokio::test]
    async fn empty_answer_falls_back_to_placeholder_text() {
        let gateway = Arc::new(ScriptedGateway::new().answer("1", "   "));
        let use_case = LoadSummariesUseCase::new(gateway);

        let records = use_case
            .execute(LoadSummariesInput::new(docs(&["a.pdf"])), &NoProgress)
            .await
            .unwrap();

        assert_eq!(records[0].text, "Summary not available");
        assert!(!records[0].failed);
    }

    #[tokio::test]
    async fn empty_document_set_is_rejected() {
        let gateway = Arc::new(ScriptedGateway::new());
        let use_case = LoadSummariesUseCase::new(gateway);

        let result = use_case
            .execute(LoadSummariesInput::new(vec![]), &NoProgress)
            .await;

        assert!(matches!(result, Err(LoadSummariesError::NoDocuments)));
    }

    #[tokio::test(start_paused = true)]
    async fn fan_in_preserves_input_order_despite_completion_order() {
        // The first document answers last; its record must still come first.
        struct SlowFirstGateway;

        #[async_trait]
        impl QueryGateway for SlowFirstGateway {
            async fn ask(
                &self,
                _question: &str,
                document_ids: &[DocumentId],
                _timeout: Duration,
            ) -> Result<String, QueryError> {
                if document_ids.len() > 1 {
                    return Ok("compared".to_string());
                }
                let id = document_ids[0].to_string();
                if id == "1" {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                }
                Ok(format!("sum-{}", id))
            }
        }

        let use_case = LoadSummariesUseCase::new(Arc::new(SlowFirstGateway));
        let records = use_case
            .execute(
                LoadSummariesInput::new(docs(&["a.pdf", "b.docx", "c.txt"])),
                &NoProgress,
            )
            .await
            .unwrap();

        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "comparison"]);
        assert_eq!(records[0].text, "sum-1");
    }

    #[tokio::test]
    async fn reload_is_idempotent_in_shape() {
        let gateway = Arc::new(
            ScriptedGateway::new()
                .answer("1", "first")
                .answer("2", "second")
                .answer("1,2", "compared"),
        );
        let use_case = LoadSummariesUseCase::new(gateway);
        let input = LoadSummariesInput::new(docs(&["a.pdf", "b.docx"]));

        let first = use_case.execute(input.clone(), &NoProgress).await.unwrap();
        let second = use_case.execute(input, &NoProgress).await.unwrap();

        let shape = |records: &[SummaryRecord]| {
            records
                .iter()
                .map(|r| (r.id.clone(), r.kind, r.failed, r.text.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(shape(&first), shape(&second));
    }
}
