use crate::error::{JarvisError, JarvisResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-pro";
const DEFAULT_TEMPERATURE: f64 = 0.3;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 512;
const DEFAULT_TOP_P: f64 = 0.8;
const DEFAULT_TOP_K: u32 = 40;

/// Connection and sampling settings for the remote classifier.
#[derive(Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
    pub top_p: f64,
    pub top_k: u32,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl GeminiSettings {
    pub fn from_env() -> JarvisResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> JarvisResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("JARVIS_GEMINI_BASE_URL")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let api_key = lookup("JARVIS_GEMINI_API_KEY")
            .or_else(|| lookup("GEMINI_API_KEY"))
            .filter(|value| !value.is_empty());
        let model = lookup("JARVIS_GEMINI_MODEL")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let temperature = lookup("JARVIS_LLM_TEMPERATURE")
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(DEFAULT_TEMPERATURE);
        let max_output_tokens = lookup("JARVIS_LLM_MAX_OUTPUT_TOKENS")
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS);
        let top_p = lookup("JARVIS_LLM_TOP_P")
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(DEFAULT_TOP_P);
        let top_k = lookup("JARVIS_LLM_TOP_K")
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(DEFAULT_TOP_K);

        if !(0.0..=2.0).contains(&temperature) {
            return Err(JarvisError::Config(format!(
                "temperature must be within 0.0..=2.0, got {temperature}"
            )));
        }

        Ok(Self {
            base_url,
            api_key,
            model,
            temperature,
            max_output_tokens,
            top_p,
            top_k,
        })
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl std::fmt::Debug for GeminiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSettings")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("top_p", &self.top_p)
            .field("top_k", &self.top_k)
            .finish()
    }
}
