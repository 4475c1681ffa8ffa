//! Offline keyword classifier used when a remote reply cannot be decoded.
//!
//! Deliberately coarse: plain substring checks on the lowercased text,
//! evaluated top to bottom, first match wins.

use async_trait::async_trait;

use crate::action::{ActionDecision, ActionKind};

use super::IntentClassifier;

const NOT_UNDERSTOOD: &str = "Could not understand command";

enum Matcher {
    /// Every keyword must appear.
    All(&'static [&'static str]),
    /// At least one keyword must appear.
    Any(&'static [&'static str]),
}

impl Matcher {
    fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::All(keywords) => keywords.iter().all(|keyword| text.contains(keyword)),
            Matcher::Any(keywords) => keywords.iter().any(|keyword| text.contains(keyword)),
        }
    }
}

struct KeywordRule {
    matcher: Matcher,
    kind: ActionKind,
    explanation: &'static str,
}

const RULES: &[KeywordRule] = &[
    KeywordRule {
        matcher: Matcher::All(&["flashlight", "on"]),
        kind: ActionKind::FlashlightOn,
        explanation: "Turning on flashlight",
    },
    KeywordRule {
        matcher: Matcher::All(&["flashlight", "off"]),
        kind: ActionKind::FlashlightOff,
        explanation: "Turning off flashlight",
    },
    KeywordRule {
        matcher: Matcher::All(&["wifi", "on"]),
        kind: ActionKind::WifiOn,
        explanation: "Enabling WiFi",
    },
    KeywordRule {
        matcher: Matcher::All(&["wifi", "off"]),
        kind: ActionKind::WifiOff,
        explanation: "Disabling WiFi",
    },
    KeywordRule {
        matcher: Matcher::All(&["bluetooth", "on"]),
        kind: ActionKind::BluetoothOn,
        explanation: "Enabling Bluetooth",
    },
    KeywordRule {
        matcher: Matcher::All(&["bluetooth", "off"]),
        kind: ActionKind::BluetoothOff,
        explanation: "Disabling Bluetooth",
    },
    KeywordRule {
        matcher: Matcher::Any(&["do not disturb", "dnd"]),
        kind: ActionKind::DoNotDisturbOn,
        explanation: "Enabling Do Not Disturb",
    },
    KeywordRule {
        matcher: Matcher::Any(&["lock"]),
        kind: ActionKind::LockDevice,
        explanation: "Locking device",
    },
];

/// Classify `text` by keyword. Never fails; unmatched text is `unknown`.
pub fn classify_by_keyword(text: &str) -> ActionDecision {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matcher.matches(&lowered))
        .map(|rule| ActionDecision::new(rule.kind).with_explanation(rule.explanation))
        .unwrap_or_else(|| ActionDecision::unknown(NOT_UNDERSTOOD))
}

/// [`classify_by_keyword`] behind the classifier trait, for running without
/// a remote service.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordClassifier;

#[async_trait]
impl IntentClassifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> ActionDecision {
        classify_by_keyword(text)
    }

    fn name(&self) -> &str {
        "keyword"
    }
}
