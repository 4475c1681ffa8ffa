use crate::action::{ActionDecision, ProviderOutcome};
use crate::error::{JarvisError, JarvisResult};
use crate::platform::SharedPlatform;

use super::CapabilityProvider;

const WEB_SEARCH_URL: &str = "https://www.google.com/search?q=";
const VIDEO_APP_PACKAGE: &str = "com.google.android.youtube";
const VIDEO_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

fn require_query(decision: &ActionDecision) -> JarvisResult<&str> {
    decision
        .query()
        .ok_or_else(|| JarvisError::InvalidInput("no search query".to_string()))
}

/// Opens a web search for the decision's query in the default browser.
pub struct WebSearchProvider {
    platform: SharedPlatform,
}

impl WebSearchProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for WebSearchProvider {
    fn id(&self) -> &str {
        "web-search"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let query = require_query(decision)?;
        let url = format!("{WEB_SEARCH_URL}{}", urlencoding::encode(query));
        self.platform.open_url(&url)?;
        Ok(ProviderOutcome::completed_with(format!("Searching for {query}")))
    }
}

/// Searches the video app, falling back to its website when the app is
/// unavailable.
pub struct VideoSearchProvider {
    platform: SharedPlatform,
}

impl VideoSearchProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for VideoSearchProvider {
    fn id(&self) -> &str {
        "video-search"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let query = require_query(decision)?;
        if let Err(error) = self.platform.search_in_app(VIDEO_APP_PACKAGE, query) {
            tracing::debug!("in-app video search unavailable, using web: {error}");
            let url = format!("{VIDEO_SEARCH_URL}{}", urlencoding::encode(query));
            self.platform.open_url(&url)?;
        }
        Ok(ProviderOutcome::completed_with(format!(
            "Searching videos for {query}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::action::ActionKind;
    use crate::platform::FakePlatform;

    #[test]
    fn web_search_percent_encodes_query() {
        let platform = Arc::new(FakePlatform::new());
        let provider = WebSearchProvider::new(platform.clone());
        let decision = ActionDecision::new(ActionKind::SearchWeb).with_query("rust & tokio");

        provider.perform(&decision).expect("outcome");
        assert_eq!(
            platform.calls(),
            vec!["open_url(https://www.google.com/search?q=rust%20%26%20tokio)"]
        );
    }

    #[test]
    fn empty_query_makes_no_platform_call() {
        let platform = Arc::new(FakePlatform::new());
        let web = WebSearchProvider::new(platform.clone());
        let video = VideoSearchProvider::new(platform.clone());

        assert!(web
            .perform(&ActionDecision::new(ActionKind::SearchWeb))
            .is_err());
        assert!(video
            .perform(&ActionDecision::new(ActionKind::SearchVideo).with_query(""))
            .is_err());
        assert!(platform.calls().is_empty());
    }

    #[test]
    fn video_search_prefers_the_app() {
        let platform = Arc::new(FakePlatform::new());
        let provider = VideoSearchProvider::new(platform.clone());
        let decision = ActionDecision::new(ActionKind::SearchVideo).with_query("lofi beats");

        provider.perform(&decision).expect("outcome");
        assert_eq!(
            platform.calls(),
            vec!["search_in_app(com.google.android.youtube, lofi beats)"]
        );
    }

    #[test]
    fn video_search_falls_back_to_web() {
        let platform = Arc::new(FakePlatform::new().failing("search_in_app"));
        let provider = VideoSearchProvider::new(platform.clone());
        let decision = ActionDecision::new(ActionKind::SearchVideo).with_query("lofi beats");

        let outcome = provider.perform(&decision).expect("outcome");
        assert!(matches!(outcome, ProviderOutcome::Completed { .. }));
        assert_eq!(
            platform.calls(),
            vec![
                "search_in_app(com.google.android.youtube, lofi beats)",
                "open_url(https://www.youtube.com/results?search_query=lofi%20beats)",
            ]
        );
    }

    #[test]
    fn video_search_fails_when_both_paths_fail() {
        let platform = Arc::new(
            FakePlatform::new()
                .failing("search_in_app")
                .failing("open_url"),
        );
        let provider = VideoSearchProvider::new(platform);
        let decision = ActionDecision::new(ActionKind::SearchVideo).with_query("cats");
        assert!(provider.perform(&decision).is_err());
    }
}
