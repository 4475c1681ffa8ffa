use async_trait::async_trait;

use crate::error::{JarvisError, JarvisResult};

use super::protocol::GenerateContentRequest;
use super::settings::GeminiSettings;

/// Raw HTTP-level reply from the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one generation request and returns the unparsed reply.
///
/// Non-2xx statuses are replies, not errors; `Err` means no reply arrived.
#[async_trait]
pub trait GenerationTransport: Send + Sync {
    async fn generate(&self, request: &GenerateContentRequest) -> JarvisResult<TransportReply>;
}

/// `generateContent` over HTTPS with `reqwest`.
pub struct GeminiTransport {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl GeminiTransport {
    pub fn new(settings: &GeminiSettings) -> JarvisResult<Self> {
        let api_key = settings
            .api_key
            .clone()
            .ok_or_else(|| JarvisError::Config("missing Gemini API key".to_string()))?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| JarvisError::Config(format!("failed to build http client: {error}")))?;
        Ok(Self {
            client,
            endpoint: settings.endpoint(),
            api_key,
        })
    }
}

#[async_trait]
impl GenerationTransport for GeminiTransport {
    async fn generate(&self, request: &GenerateContentRequest) -> JarvisResult<TransportReply> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!("gemini reply status={} body_len={}", status, body.len());
        Ok(TransportReply { status, body })
    }
}
