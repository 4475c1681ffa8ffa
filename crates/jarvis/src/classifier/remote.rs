use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::action::ActionDecision;
use crate::error::JarvisError;

use super::prompt::PromptTemplate;
use super::protocol::{GenerateContentRequest, GenerationConfig};
use super::reply::decision_from_reply;
use super::settings::GeminiSettings;
use super::transport::GenerationTransport;
use super::IntentClassifier;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Classifier backed by a remote content-generation service.
pub struct RemoteClassifier {
    transport: Arc<dyn GenerationTransport>,
    prompt: PromptTemplate,
    generation: GenerationConfig,
    timeout: Duration,
}

impl RemoteClassifier {
    pub fn new(transport: Arc<dyn GenerationTransport>, settings: &GeminiSettings) -> Self {
        Self {
            transport,
            prompt: PromptTemplate::default(),
            generation: GenerationConfig {
                temperature: settings.temperature,
                max_output_tokens: settings.max_output_tokens,
                top_p: settings.top_p,
                top_k: settings.top_k,
            },
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn build_request(&self, text: &str) -> GenerateContentRequest {
        GenerateContentRequest::from_text(self.prompt.render(text), self.generation.clone())
    }
}

#[async_trait]
impl IntentClassifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> ActionDecision {
        let request = self.build_request(text);
        let reply = match tokio::time::timeout(self.timeout, self.transport.generate(&request)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(error)) => {
                tracing::warn!("classifier transport failed: {error}");
                return ActionDecision::unknown(format!("Error: {error}"));
            }
            Err(_) => {
                let error = JarvisError::Timeout(self.timeout);
                tracing::warn!("classifier transport failed: {error}");
                return ActionDecision::unknown(format!("Error: {error}"));
            }
        };

        let decision = decision_from_reply(&reply);
        tracing::info!(
            "classified command status={} kind={}",
            reply.status,
            decision.kind()
        );
        decision
    }

    fn name(&self) -> &str {
        "remote"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::action::ActionKind;
    use crate::classifier::transport::TransportReply;
    use crate::error::JarvisResult;

    enum Script {
        Reply(TransportReply),
        Fail(JarvisError),
        Hang,
    }

    struct FakeTransport {
        script: Script,
        requests: Mutex<Vec<GenerateContentRequest>>,
    }

    impl FakeTransport {
        fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn candidate(text: &str) -> Arc<Self> {
            Self::new(Script::Reply(TransportReply {
                status: 200,
                body: json!({
                    "candidates": [{ "content": { "parts": [{ "text": text }] } }]
                })
                .to_string(),
            }))
        }
    }

    #[async_trait]
    impl GenerationTransport for FakeTransport {
        async fn generate(&self, request: &GenerateContentRequest) -> JarvisResult<TransportReply> {
            self.requests.lock().expect("lock").push(request.clone());
            match &self.script {
                Script::Reply(reply) => Ok(reply.clone()),
                Script::Fail(error) => Err(error.clone()),
                Script::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Err(JarvisError::Internal("unreachable".to_string()))
                }
            }
        }
    }

    fn classifier(transport: Arc<FakeTransport>) -> RemoteClassifier {
        RemoteClassifier::new(transport, &GeminiSettings::default())
    }

    #[tokio::test]
    async fn too_dark_scenario_resolves_to_flashlight_on() {
        let transport = FakeTransport::candidate(
            r#"{"action_type":"flashlight_on","explanation":"Turning on flashlight"}"#,
        );
        let decision = classifier(transport.clone())
            .classify("It's too dark in here")
            .await;

        assert_eq!(decision.kind(), ActionKind::FlashlightOn);
        assert_eq!(decision.explanation(), "Turning on flashlight");

        let requests = transport.requests.lock().expect("lock");
        assert_eq!(requests.len(), 1);
        let text = &requests[0].contents[0].parts[0].text;
        assert!(text.ends_with("User command: It's too dark in here"));
        let config = requests[0].generation_config.as_ref().expect("config");
        assert_eq!(config.temperature, 0.3);
    }

    #[tokio::test]
    async fn http_500_becomes_unknown() {
        let transport = FakeTransport::new(Script::Reply(TransportReply {
            status: 500,
            body: String::new(),
        }));
        let decision = classifier(transport).classify("open maps").await;

        assert_eq!(decision.kind(), ActionKind::Unknown);
        assert_eq!(decision.explanation(), "API request failed: 500");
    }

    #[tokio::test]
    async fn transport_error_is_preserved() {
        let transport = FakeTransport::new(Script::Fail(JarvisError::Transport(
            "connection refused".to_string(),
        )));
        let decision = classifier(transport).classify("open maps").await;

        assert_eq!(decision.kind(), ActionKind::Unknown);
        assert_eq!(
            decision.explanation(),
            "Error: transport error: connection refused"
        );
    }

    #[tokio::test]
    async fn unparseable_reply_uses_keyword_fallback() {
        let transport = FakeTransport::candidate("Sure, turning off your bluetooth now");
        let decision = classifier(transport).classify("bluetooth off").await;
        assert_eq!(decision.kind(), ActionKind::BluetoothOff);
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let transport = FakeTransport::new(Script::Hang);
        let decision = classifier(transport)
            .with_timeout(Duration::from_millis(20))
            .classify("open maps")
            .await;

        assert_eq!(decision.kind(), ActionKind::Unknown);
        assert_eq!(decision.explanation(), "Error: request timed out after 20ms");
    }

    #[tokio::test]
    async fn custom_prompt_is_used() {
        let transport = FakeTransport::candidate("{}");
        classifier(transport.clone())
            .with_prompt(PromptTemplate::new("Only JSON."))
            .classify("hello")
            .await;

        let requests = transport.requests.lock().expect("lock");
        assert_eq!(
            requests[0].contents[0].parts[0].text,
            "Only JSON.\n\nUser command: hello"
        );
    }
}
