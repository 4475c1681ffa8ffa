//! Turns free text into an [`ActionDecision`].

pub mod fallback;
pub mod prompt;
pub mod protocol;
pub mod remote;
pub mod reply;
pub mod settings;
pub mod transport;

use async_trait::async_trait;

use crate::action::ActionDecision;

pub use fallback::{classify_by_keyword, KeywordClassifier};
pub use prompt::PromptTemplate;
pub use remote::RemoteClassifier;
pub use settings::GeminiSettings;
pub use transport::{GeminiTransport, GenerationTransport, TransportReply};

/// Anything that can resolve a command into a decision.
///
/// Implementations never fail: problems are reported as an `unknown`
/// decision whose explanation carries the cause.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> ActionDecision;

    fn name(&self) -> &str;
}
