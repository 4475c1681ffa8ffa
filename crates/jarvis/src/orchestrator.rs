//! Runs each command through classification and dispatch on its own task.

use std::sync::Arc;

use tokio::sync::{oneshot, watch, Semaphore};
use tokio_util::sync::CancellationToken;
use tokio_util::task::AbortOnDropHandle;
use uuid::Uuid;

use crate::action::{ActionKind, ExecutionOutcome};
use crate::classifier::IntentClassifier;
use crate::dispatch::Dispatcher;

const DEFAULT_MAX_CONCURRENT: usize = 8;
const CANCELLED: &str = "Cancelled";

/// Lifecycle of a single submission. `Completed` is terminal and reached
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Classifying,
    Dispatching,
    Completed,
}

/// Handle to one in-flight command.
pub struct Submission {
    id: String,
    state: watch::Receiver<SubmissionState>,
    outcome: oneshot::Receiver<ExecutionOutcome>,
}

impl Submission {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// Receiver that observes every later state change.
    pub fn watch_state(&self) -> watch::Receiver<SubmissionState> {
        self.state.clone()
    }

    /// Wait for the result. A task that vanished without reporting counts
    /// as cancelled.
    pub async fn outcome(self) -> ExecutionOutcome {
        self.outcome
            .await
            .unwrap_or_else(|_| ExecutionOutcome::failure(CANCELLED))
    }
}

pub struct Orchestrator {
    classifier: Arc<dyn IntentClassifier>,
    dispatcher: Dispatcher,
    permits: Arc<Semaphore>,
    shutdown: CancellationToken,
}

impl Orchestrator {
    pub fn new(classifier: Arc<dyn IntentClassifier>, dispatcher: Dispatcher) -> Self {
        Self {
            classifier,
            dispatcher,
            permits: Arc::new(Semaphore::new(DEFAULT_MAX_CONCURRENT)),
            shutdown: CancellationToken::new(),
        }
    }

    /// Cap on submissions classifying or dispatching at once. Extra
    /// submissions wait for a slot.
    pub fn with_max_concurrent(mut self, limit: usize) -> Self {
        self.permits = Arc::new(Semaphore::new(limit.max(1)));
        self
    }

    pub fn submit(&self, text: impl Into<String>) -> Submission {
        let text = text.into();
        let id = Uuid::now_v7().to_string();
        let (state_tx, state_rx) = watch::channel(SubmissionState::Idle);
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let submission = Submission {
            id: id.clone(),
            state: state_rx,
            outcome: outcome_rx,
        };

        if self.shutdown.is_cancelled() {
            tracing::info!("submission {id} rejected after shutdown");
            state_tx.send_replace(SubmissionState::Completed);
            let _ = outcome_tx.send(ExecutionOutcome::failure(CANCELLED));
            return submission;
        }

        let classifier = self.classifier.clone();
        let dispatcher = self.dispatcher.clone();
        let permits = self.permits.clone();
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            let work = run_pipeline(&id, &text, classifier, dispatcher, permits, &state_tx);
            let outcome = tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    tracing::info!("submission {id} cancelled");
                    ExecutionOutcome::failure(CANCELLED)
                }
                outcome = work => outcome,
            };

            state_tx.send_replace(SubmissionState::Completed);
            tracing::info!(
                "submission {id} completed: succeeded={} message={}",
                outcome.succeeded,
                outcome.message
            );
            if outcome_tx.send(outcome).is_err() {
                tracing::debug!("submission {id} result dropped by caller");
            }
        });

        submission
    }

    /// Callback form of [`Orchestrator::submit`]. `on_result` runs exactly
    /// once with `(succeeded, message)`. Returns the submission id.
    pub fn submit_with<F>(&self, text: impl Into<String>, on_result: F) -> String
    where
        F: FnOnce(bool, String) + Send + 'static,
    {
        let submission = self.submit(text);
        let id = submission.id().to_string();
        tokio::spawn(async move {
            let outcome = submission.outcome().await;
            on_result(outcome.succeeded, outcome.message);
        });
        id
    }

    /// Cancel every outstanding submission. Each still reports once, as
    /// cancelled, and later submissions are cancelled immediately.
    pub fn shutdown(&self) {
        tracing::info!("orchestrator shutting down");
        self.shutdown.cancel();
        self.permits.close();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl Drop for Orchestrator {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn run_pipeline(
    id: &str,
    text: &str,
    classifier: Arc<dyn IntentClassifier>,
    dispatcher: Dispatcher,
    permits: Arc<Semaphore>,
    state: &watch::Sender<SubmissionState>,
) -> ExecutionOutcome {
    let _permit = match permits.acquire_owned().await {
        Ok(permit) => permit,
        Err(_) => return ExecutionOutcome::failure(CANCELLED),
    };

    state.send_replace(SubmissionState::Classifying);
    tracing::debug!("submission {id} classifying with {}", classifier.name());
    let owned_text = text.to_string();
    let classify = AbortOnDropHandle::new(tokio::spawn(async move {
        classifier.classify(&owned_text).await
    }));
    let decision = match classify.await {
        Ok(decision) => decision,
        Err(error) => {
            tracing::warn!("submission {id} classifier task failed: {error}");
            return ExecutionOutcome::failure(format!(
                "Failed to execute: {} (internal error: classifier task failed: {error})",
                ActionKind::Unknown
            ));
        }
    };

    state.send_replace(SubmissionState::Dispatching);
    tracing::debug!("submission {id} dispatching {}", decision.kind());
    dispatcher.dispatch(decision).await
}
