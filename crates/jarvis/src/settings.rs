use std::path::PathBuf;
use std::time::Duration;

use crate::classifier::GeminiSettings;
use crate::error::JarvisResult;

const DEFAULT_CLASSIFY_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONCURRENT_SUBMISSIONS: usize = 8;

/// Everything the assistant reads from its environment at startup.
#[derive(Debug, Clone)]
pub struct AssistantSettings {
    pub gemini: GeminiSettings,
    /// Replaces the embedded classifier preamble when set.
    pub prompt_path: Option<PathBuf>,
    pub classify_timeout: Duration,
    pub max_concurrent_submissions: usize,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            gemini: GeminiSettings::default(),
            prompt_path: None,
            classify_timeout: Duration::from_secs(DEFAULT_CLASSIFY_TIMEOUT_SECS),
            max_concurrent_submissions: DEFAULT_MAX_CONCURRENT_SUBMISSIONS,
        }
    }
}

impl AssistantSettings {
    pub fn from_env() -> JarvisResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> JarvisResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let gemini = GeminiSettings::from_lookup(&lookup)?;
        let prompt_path = lookup("JARVIS_PROMPT_PATH")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let classify_timeout = Duration::from_secs(read_limit(
            &lookup,
            "JARVIS_CLASSIFY_TIMEOUT_SECS",
            DEFAULT_CLASSIFY_TIMEOUT_SECS as usize,
        ) as u64);
        let max_concurrent_submissions = read_limit(
            &lookup,
            "JARVIS_MAX_CONCURRENT_SUBMISSIONS",
            DEFAULT_MAX_CONCURRENT_SUBMISSIONS,
        );

        Ok(Self {
            gemini,
            prompt_path,
            classify_timeout,
            max_concurrent_submissions,
        })
    }
}

fn read_limit<F>(lookup: &F, name: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}
