use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::kind::ActionKind;

/// A validated decision about what to do for one command.
///
/// Built fresh per command and never mutated afterwards; the dispatcher
/// consumes it by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDecision {
    kind: ActionKind,
    target: Option<String>,
    query: Option<String>,
    explanation: String,
    parameters: BTreeMap<String, String>,
}

impl ActionDecision {
    pub fn new(kind: ActionKind) -> Self {
        Self {
            kind,
            target: None,
            query: None,
            explanation: String::new(),
            parameters: BTreeMap::new(),
        }
    }

    /// An `unknown` decision carrying the reason it could not be resolved.
    pub fn unknown(explanation: impl Into<String>) -> Self {
        Self::new(ActionKind::Unknown).with_explanation(explanation)
    }

    /// Blank strings are stored as absent.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = non_blank(target.into());
        self
    }

    /// Blank strings are stored as absent.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = non_blank(query.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    /// Decode the JSON object a classifier reply is expected to contain.
    ///
    /// Missing or `null` keys take their defaults; only text that is not a
    /// JSON object of this shape at all is an error.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        // Go through a map so positional arrays are rejected instead of
        // filling fields in declaration order.
        let object: Map<String, Value> = serde_json::from_str(text)?;
        let wire: WireDecision = serde_json::from_value(Value::Object(object))?;
        Ok(wire.into())
    }
}

/// The field-keyed shape the remote service is instructed to reply with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireDecision {
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub target_app_package: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub parameters: Option<Map<String, Value>>,
}

impl From<WireDecision> for ActionDecision {
    fn from(wire: WireDecision) -> Self {
        let kind = ActionKind::from_wire(wire.action_type.as_deref().unwrap_or_default());
        let mut decision = ActionDecision::new(kind)
            .with_target(wire.target_app_package.unwrap_or_default())
            .with_query(wire.search_query.unwrap_or_default())
            .with_explanation(wire.explanation.unwrap_or_default());
        for (key, value) in wire.parameters.unwrap_or_default() {
            decision = decision.with_parameter(key, parameter_text(value));
        }
        decision
    }
}

fn parameter_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
