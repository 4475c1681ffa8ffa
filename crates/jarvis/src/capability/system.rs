use crate::action::{ActionDecision, ActionKind, ProviderOutcome};
use crate::error::{JarvisError, JarvisResult};
use crate::platform::{SettingsSurface, SharedPlatform, VolumeDirection};

use super::CapabilityProvider;

/// Moves the media stream volume one step.
pub struct VolumeProvider {
    platform: SharedPlatform,
}

impl VolumeProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for VolumeProvider {
    fn id(&self) -> &str {
        "volume"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let (direction, message) = match decision.kind() {
            ActionKind::VolumeUp => (VolumeDirection::Raise, "Volume up"),
            ActionKind::VolumeDown => (VolumeDirection::Lower, "Volume down"),
            other => {
                return Err(JarvisError::InvalidInput(format!(
                    "volume cannot handle {other}"
                )))
            }
        };
        self.platform.adjust_volume(direction)?;
        Ok(ProviderOutcome::completed_with(message))
    }
}

/// Apps cannot stop other apps, so the user is sent to the app list.
pub struct BackgroundAppsProvider {
    platform: SharedPlatform,
}

impl BackgroundAppsProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for BackgroundAppsProvider {
    fn id(&self) -> &str {
        "background-apps"
    }

    fn perform(&self, _decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        self.platform.open_settings(SettingsSurface::Applications)?;
        tracing::info!("background app cleanup handed to settings");
        Ok(ProviderOutcome::requires_user_action(
            "Close the apps you no longer need from application settings",
        ))
    }
}

pub struct ScreenshotProvider {
    platform: SharedPlatform,
}

impl ScreenshotProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for ScreenshotProvider {
    fn id(&self) -> &str {
        "screenshot"
    }

    fn perform(&self, _decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let message = match self.platform.capture_screenshot()? {
            Some(path) => format!("Screenshot saved to {}", path.display()),
            None => "Screenshot taken".to_string(),
        };
        Ok(ProviderOutcome::completed_with(message))
    }
}
