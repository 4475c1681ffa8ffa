//! Interpreting a service reply as an [`ActionDecision`].

use crate::action::ActionDecision;

use super::fallback::classify_by_keyword;
use super::protocol::GenerateContentResponse;
use super::transport::TransportReply;

/// Remove surrounding whitespace and a Markdown code fence, if present.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Decode candidate text, falling back to keyword matching on the raw text.
pub fn decision_from_text(text: &str) -> ActionDecision {
    match ActionDecision::from_json(strip_code_fence(text)) {
        Ok(decision) => decision,
        Err(error) => {
            tracing::warn!("classifier reply is not a decision ({error}); using keyword fallback");
            classify_by_keyword(text)
        }
    }
}

/// Map a complete transport reply onto a decision.
///
/// Service-level failures become `unknown` with the cause preserved in the
/// explanation; only undecodable candidate text goes to the fallback.
pub fn decision_from_reply(reply: &TransportReply) -> ActionDecision {
    if !reply.is_success() {
        return ActionDecision::unknown(format!("API request failed: {}", reply.status));
    }

    let response: GenerateContentResponse = match serde_json::from_str(&reply.body) {
        Ok(response) => response,
        Err(error) => {
            return ActionDecision::unknown(format!("Error: invalid response body: {error}"));
        }
    };

    if let Some(error) = &response.error {
        return ActionDecision::unknown(format!("API Error: {}", error.message));
    }

    decision_from_text(response.first_text().unwrap_or_default())
}
