use std::sync::Arc;

use crate::action::{ActionDecision, ExecutionOutcome, ProviderOutcome};
use crate::capability::CapabilityRegistry;
use crate::error::JarvisError;

const COMPLETED_FALLBACK: &str = "Action completed successfully";
const USER_ACTION_FALLBACK: &str = "Action requires your attention";

/// Routes a decision to its provider and turns the result into an
/// [`ExecutionOutcome`].
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<CapabilityRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CapabilityRegistry>) -> Self {
        Self { registry }
    }

    pub async fn dispatch(&self, decision: ActionDecision) -> ExecutionOutcome {
        let kind = decision.kind();
        let provider = match self.registry.get(kind) {
            Some(provider) if !kind.is_unknown() => provider,
            _ => {
                tracing::info!("no provider for {kind}: {}", decision.explanation());
                return failed(&decision, None);
            }
        };

        let provider_id = provider.id().to_string();
        let task_decision = decision.clone();
        let result = tokio::task::spawn_blocking(move || provider.perform(&task_decision))
            .await
            .map_err(|error| JarvisError::Internal(format!("{provider_id} task failed: {error}")))
            .and_then(|result| result);

        let outcome = match result {
            Ok(outcome) => normalize(&decision, outcome),
            Err(error) => {
                tracing::warn!("provider {provider_id} failed for {kind}: {error}");
                failed(&decision, Some(error.to_string()))
            }
        };
        tracing::info!(
            "dispatched {kind} via {provider_id}: succeeded={} requires_user_action={}",
            outcome.succeeded,
            outcome.requires_user_action
        );
        outcome
    }
}

fn normalize(decision: &ActionDecision, outcome: ProviderOutcome) -> ExecutionOutcome {
    match outcome {
        ProviderOutcome::Completed { message } => ExecutionOutcome::success(
            non_empty(decision.explanation())
                .or(message.as_deref().and_then(non_empty))
                .unwrap_or(COMPLETED_FALLBACK),
        ),
        ProviderOutcome::RequiresUserAction { message } => ExecutionOutcome::user_action(
            message
                .as_deref()
                .and_then(non_empty)
                .or(non_empty(decision.explanation()))
                .unwrap_or(USER_ACTION_FALLBACK),
        ),
        ProviderOutcome::Failed { reason } => failed(decision, reason),
    }
}

fn failed(decision: &ActionDecision, reason: Option<String>) -> ExecutionOutcome {
    let wire = decision.kind().as_wire();
    match reason.filter(|reason| !reason.trim().is_empty()) {
        Some(reason) => ExecutionOutcome::failure(format!("Failed to execute: {wire} ({reason})")),
        None => ExecutionOutcome::failure(format!("Failed to execute: {wire}")),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
