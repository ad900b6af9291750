//! Summary Orchestrator
//!
//! Sole owner of a session's summary state: the record list, the load
//! state machine, and the expand/collapse set. Reloads run the
//! [`LoadSummariesUseCase`] and apply the result here; overlapping reloads
//! are serialized with a generation counter so a reload that settles late
//! discards its results instead of overwriting newer state.

use crate::config::QueryTimeouts;
use crate::ports::progress::SummaryProgress;
use crate::ports::query_gateway::QueryGateway;
use crate::ports::summary_sink::SummarySink;
use crate::use_cases::load_summaries::{LoadSummariesInput, LoadSummariesUseCase};
use docsage_domain::{DocumentSet, ExpansionState, SummaryRecord};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// Load state machine: `Idle -> Loading -> {Ready, Failed}`, re-entered
/// via `reload()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryStatus {
    /// Nothing loaded yet (or the session has no documents)
    Idle,
    Loading,
    /// Records are populated, possibly with failed entries
    Ready,
    /// The load itself broke down; no records survived
    Failed(String),
}

/// How a `reload()` call resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    /// Results were applied to the summary state
    Applied,
    /// A newer reload (or a reset) superseded this one; results discarded
    Stale,
    /// The document set was empty; state stayed `Idle`
    EmptySet,
}

/// Point-in-time view of the summary state, handed to renderers and the
/// report compiler. Never a live reference: consumers cannot mutate the
/// orchestrator's state through it.
#[derive(Debug, Clone)]
pub struct SummarySnapshot {
    pub status: SummaryStatus,
    pub records: Vec<SummaryRecord>,
    pub expansion: ExpansionState,
}

struct SummaryState {
    status: SummaryStatus,
    records: Vec<SummaryRecord>,
    expansion: ExpansionState,
}

/// Fan-out/fan-in coordinator and owner of all summary state.
pub struct SummaryOrchestrator<G: QueryGateway + 'static> {
    use_case: LoadSummariesUseCase<G>,
    timeouts: QueryTimeouts,
    state: Mutex<SummaryState>,
    generation: AtomicU64,
    sinks: Vec<Arc<dyn SummarySink>>,
}

impl<G: QueryGateway + 'static> SummaryOrchestrator<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            use_case: LoadSummariesUseCase::new(gateway),
            timeouts: QueryTimeouts::default(),
            state: Mutex::new(SummaryState {
                status: SummaryStatus::Idle,
                records: Vec::new(),
                expansion: ExpansionState::new(),
            }),
            generation: AtomicU64::new(0),
            sinks: Vec::new(),
        }
    }

    pub fn with_timeouts(mut self, timeouts: QueryTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    /// Subscribe an observer to settled reloads.
    pub fn with_sink(mut self, sink: Arc<dyn SummarySink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Reload every summary for the given document set.
    ///
    /// Always re-issues every call; there is no partial retry of only the
    /// failed records. The returned outcome says whether this reload's
    /// results made it into the state.
    pub async fn reload(
        &self,
        documents: &DocumentSet,
        progress: &dyn SummaryProgress,
    ) -> ReloadOutcome {
        if documents.is_empty() {
            debug!("Reload requested with no documents; staying idle");
            return ReloadOutcome::EmptySet;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.lock().unwrap().status = SummaryStatus::Loading;

        let input = LoadSummariesInput::new(documents.iter().cloned().collect())
            .with_timeouts(self.timeouts);
        let result = self.use_case.execute(input, progress).await;

        let notified_records = {
            let mut state = self.state.lock().unwrap();

            // A newer reload or a reset claimed the state while this one
            // was in flight; its results win.
            if self.generation.load(Ordering::SeqCst) != generation {
                debug!("Discarding stale reload (generation {})", generation);
                return ReloadOutcome::Stale;
            }

            match result {
                Ok(records) => {
                    info!("Summaries ready: {} record(s)", records.len());
                    state.expansion.auto_expand(&records);
                    state.records = records;
                    state.status = SummaryStatus::Ready;
                    state.records.clone()
                }
                Err(e) => {
                    warn!("Summary load failed: {}", e);
                    state.records.clear();
                    state.expansion.clear();
                    state.status = SummaryStatus::Failed(
                        "Failed to load document summaries. Please try again.".to_string(),
                    );
                    return ReloadOutcome::Applied;
                }
            }
        };

        for sink in &self.sinks {
            sink.on_summaries_updated(&notified_records);
        }
        ReloadOutcome::Applied
    }

    /// Flip the expand/collapse state of one record. Pure UI state, no
    /// backend interaction. Returns whether the record is now expanded.
    pub fn toggle(&self, id: &str) -> bool {
        self.state.lock().unwrap().expansion.toggle(id)
    }

    /// Drop all summary state back to `Idle`.
    ///
    /// Bumps the generation so any reload still in flight discards its
    /// results instead of resurrecting the cleared state.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut state = self.state.lock().unwrap();
        state.records.clear();
        state.expansion.clear();
        state.status = SummaryStatus::Idle;
    }

    pub fn snapshot(&self) -> SummarySnapshot {
        let state = self.state.lock().unwrap();
        SummarySnapshot {
            status: state.status.clone(),
            records: state.records.clone(),
            expansion: state.expansion.clone(),
        }
    }

    pub fn status(&self) -> SummaryStatus {
        self.state.lock().unwrap().status.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::query_gateway::QueryError;
    use async_trait::async_trait;
    use docsage_domain::{DocumentId, DocumentRef};
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn document_set(names: &[&str]) -> DocumentSet {
        let mut set = DocumentSet::new();
        for (i, name) in names.iter().enumerate() {
            set.insert(DocumentRef::new((i + 1).to_string(), *name));
        }
        set
    }

    /// Answers every query with the same text.
    struct EchoGateway {
        text: String,
    }

    #[async_trait]
    impl QueryGateway for EchoGateway {
        async fn ask(
            &self,
            _question: &str,
            _document_ids: &[DocumentId],
            _timeout: Duration,
        ) -> Result<String, QueryError> {
            Ok(self.text.clone())
        }
    }

    /// The first call signals `entered`, then blocks on `gate`; later calls
    /// answer immediately with the call's sequence number.
    struct GatedGateway {
        gate: Arc<Notify>,
        entered: Arc<Notify>,
        calls: AtomicUsize,
    }

    impl GatedGateway {
        fn new(gate: Arc<Notify>, entered: Arc<Notify>) -> Self {
            Self {
                gate,
                entered,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl QueryGateway for GatedGateway {
        async fn ask(
            &self,
            _question: &str,
            _document_ids: &[DocumentId],
            _timeout: Duration,
        ) -> Result<String, QueryError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                self.entered.notify_one();
                self.gate.notified().await;
            }
            Ok(format!("answer-{}", call))
        }
    }

    #[tokio::test]
    async fn empty_set_stays_idle() {
        let orchestrator = SummaryOrchestrator::new(Arc::new(EchoGateway {
            text: "unused".into(),
        }));

        let outcome = orchestrator.reload(&DocumentSet::new(), &NoProgress).await;

        assert_eq!(outcome, ReloadOutcome::EmptySet);
        assert_eq!(orchestrator.status(), SummaryStatus::Idle);
        assert!(orchestrator.snapshot().records.is_empty());
    }

    #[tokio::test]
    async fn reload_applies_records_and_auto_expands() {
        let orchestrator = SummaryOrchestrator::new(Arc::new(EchoGateway {
            text: "summary text".into(),
        }));
        let docs = document_set(&["a.pdf", "b.docx"]);

        let outcome = orchestrator.reload(&docs, &NoProgress).await;

        assert_eq!(outcome, ReloadOutcome::Applied);
        let snapshot = orchestrator.snapshot();
        assert_eq!(snapshot.status, SummaryStatus::Ready);
        assert_eq!(snapshot.records.len(), 3);
        assert!(snapshot.expansion.is_expanded("comparison"));
        assert!(!snapshot.expansion.is_expanded("1"));
    }

    #[tokio::test]
    async fn single_document_auto_expands_sole_record() {
        let orchestrator = SummaryOrchestrator::new(Arc::new(EchoGateway {
            text: "summary text".into(),
        }));
        let docs = document_set(&["a.pdf"]);

        orchestrator.reload(&docs, &NoProgress).await;

        let snapshot = orchestrator.snapshot();
        assert_eq!(snapshot.records.len(), 1);
        assert!(snapshot.expansion.is_expanded("1"));
    }

    #[tokio::test]
    async fn toggle_flips_expansion() {
        let orchestrator = SummaryOrchestrator::new(Arc::new(EchoGateway {
            text: "summary text".into(),
        }));
        orchestrator
            .reload(&document_set(&["a.pdf"]), &NoProgress)
            .await;

        assert!(!orchestrator.toggle("1"));
        assert!(orchestrator.toggle("1"));
    }

    #[tokio::test]
    async fn stale_reload_discards_results() {
        let gate = Arc::new(Notify::new());
        let entered = Arc::new(Notify::new());
        let gateway = Arc::new(GatedGateway::new(Arc::clone(&gate), Arc::clone(&entered)));
        let orchestrator = Arc::new(SummaryOrchestrator::new(gateway));
        let docs = document_set(&["a.pdf"]);

        // First reload blocks inside its only gateway call.
        let first = {
            let orchestrator = Arc::clone(&orchestrator);
            let docs = docs.clone();
            tokio::spawn(async move { orchestrator.reload(&docs, &NoProgress).await })
        };
        entered.notified().await;

        // Second reload completes immediately and wins.
        let second = orchestrator.reload(&docs, &NoProgress).await;
        assert_eq!(second, ReloadOutcome::Applied);
        let winner = orchestrator.snapshot().records[0].text.clone();

        // Release the first reload; it must discard its results.
        gate.notify_waiters();
        let first = first.await.unwrap();
        assert_eq!(first, ReloadOutcome::Stale);
        assert_eq!(orchestrator.snapshot().records[0].text, winner);
    }

    #[tokio::test]
    async fn reset_invalidates_inflight_reload() {
        let gate = Arc::new(Notify::new());
        let entered = Arc::new(Notify::new());
        let gateway = Arc::new(GatedGateway::new(Arc::clone(&gate), Arc::clone(&entered)));
        let orchestrator = Arc::new(SummaryOrchestrator::new(gateway));
        let docs = document_set(&["a.pdf"]);

        let inflight = {
            let orchestrator = Arc::clone(&orchestrator);
            let docs = docs.clone();
            tokio::spawn(async move { orchestrator.reload(&docs, &NoProgress).await })
        };
        entered.notified().await;

        orchestrator.reset();
        gate.notify_waiters();

        assert_eq!(inflight.await.unwrap(), ReloadOutcome::Stale);
        assert_eq!(orchestrator.status(), SummaryStatus::Idle);
        assert!(orchestrator.snapshot().records.is_empty());
    }

    #[tokio::test]
    async fn sinks_see_settled_records() {
        struct CountingSink {
            seen: AtomicUsize,
        }
        impl SummarySink for CountingSink {
            fn on_summaries_updated(&self, records: &[SummaryRecord]) {
                self.seen.store(records.len(), Ordering::SeqCst);
            }
        }

        let sink = Arc::new(CountingSink {
            seen: AtomicUsize::new(0),
        });
        let orchestrator = SummaryOrchestrator::new(Arc::new(EchoGateway {
            text: "summary".into(),
        }))
        .with_sink(Arc::clone(&sink) as Arc<dyn SummarySink>);

        orchestrator
            .reload(&document_set(&["a.pdf", "b.docx"]), &NoProgress)
            .await;

        assert_eq!(sink.seen.load(Ordering::SeqCst), 3);
    }
}
