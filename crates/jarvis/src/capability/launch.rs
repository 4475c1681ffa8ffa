use crate::action::{ActionDecision, ProviderOutcome};
use crate::error::{JarvisError, JarvisResult};
use crate::platform::SharedPlatform;

use super::CapabilityProvider;

/// Package or app id as a host launcher receives it. Only ASCII
/// alphanumerics and `._-` are allowed, never a leading dash.
fn is_package_name(target: &str) -> bool {
    !target.starts_with('-')
        && target
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
}

/// Launches the app named by the decision's target package.
pub struct AppLaunchProvider {
    platform: SharedPlatform,
}

impl AppLaunchProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for AppLaunchProvider {
    fn id(&self) -> &str {
        "launch"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let package = decision
            .target()
            .ok_or_else(|| JarvisError::InvalidInput("no app to open".to_string()))?;
        if !is_package_name(package) {
            return Err(JarvisError::InvalidInput(format!(
                "not a valid app package: {package:?}"
            )));
        }
        self.platform.launch_app(package)?;
        Ok(ProviderOutcome::completed_with(format!("Opened {package}")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::action::ActionKind;
    use crate::platform::FakePlatform;

    #[test]
    fn launches_target_package() {
        let platform = Arc::new(FakePlatform::new());
        let provider = AppLaunchProvider::new(platform.clone());
        let decision =
            ActionDecision::new(ActionKind::OpenApp).with_target("com.spotify.music");

        let outcome = provider.perform(&decision).expect("outcome");
        assert_eq!(outcome, ProviderOutcome::completed_with("Opened com.spotify.music"));
        assert_eq!(platform.calls(), vec!["launch_app(com.spotify.music)"]);
    }

    #[test]
    fn empty_target_makes_no_platform_call() {
        let platform = Arc::new(FakePlatform::new());
        let provider = AppLaunchProvider::new(platform.clone());
        let decision = ActionDecision::new(ActionKind::OpenApp).with_target("  ");

        let result = provider.perform(&decision);
        assert!(matches!(result, Err(JarvisError::InvalidInput(_))));
        assert!(platform.calls().is_empty());
    }

    #[test]
    fn malformed_targets_make_no_platform_call() {
        let platform = Arc::new(FakePlatform::new());
        let provider = AppLaunchProvider::new(platform.clone());

        for target in ["x & calc", "notes|whoami", "a^b", "--help", "app name", "$(id)"] {
            let decision = ActionDecision::new(ActionKind::OpenApp).with_target(target);
            assert!(
                matches!(provider.perform(&decision), Err(JarvisError::InvalidInput(_))),
                "target {target:?} should be rejected"
            );
        }
        assert!(platform.calls().is_empty());
    }

    #[test]
    fn package_names_accept_ids_and_names() {
        assert!(is_package_name("com.spotify.music"));
        assert!(is_package_name("firefox"));
        assert!(is_package_name("org.gnome.Nautilus"));
        assert!(is_package_name("my_app-2"));
        assert!(!is_package_name("-rf"));
    }

    #[test]
    fn launch_errors_propagate() {
        let platform = Arc::new(FakePlatform::new().failing("launch_app"));
        let provider = AppLaunchProvider::new(platform);
        let decision = ActionDecision::new(ActionKind::OpenApp).with_target("com.example");

        let error = provider.perform(&decision).expect_err("launch should fail");
        assert_eq!(error.to_string(), "internal error: launch_app failed");
    }
}
