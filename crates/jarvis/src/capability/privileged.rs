//! Providers gated on an elevated grant. Without the grant they start the
//! grant flow and fail the current call; the user repeats the command after
//! granting.

use crate::action::{ActionDecision, ActionKind, ProviderOutcome};
use crate::error::{JarvisError, JarvisResult};
use crate::platform::{Grant, SharedPlatform};

use super::CapabilityProvider;

const BRIGHTNESS_STEP: u8 = 30;
const DEFAULT_BRIGHTNESS: u8 = 128;

fn request(platform: &SharedPlatform, grant: Grant) -> JarvisResult<ProviderOutcome> {
    platform.request_grant(grant)?;
    tracing::info!("requested {grant}");
    Ok(ProviderOutcome::failed(format!(
        "{grant} is required, grant it and try again"
    )))
}

/// Steps screen brightness up or down on a 0..=255 scale.
pub struct BrightnessProvider {
    platform: SharedPlatform,
}

impl BrightnessProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for BrightnessProvider {
    fn id(&self) -> &str {
        "brightness"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let raise = match decision.kind() {
            ActionKind::BrightnessUp => true,
            ActionKind::BrightnessDown => false,
            other => {
                return Err(JarvisError::InvalidInput(format!(
                    "brightness cannot handle {other}"
                )))
            }
        };
        if !self.platform.is_granted(Grant::WriteSettings) {
            return request(&self.platform, Grant::WriteSettings);
        }

        let current = self
            .platform
            .screen_brightness()?
            .unwrap_or(DEFAULT_BRIGHTNESS);
        let level = if raise {
            current.saturating_add(BRIGHTNESS_STEP)
        } else {
            current.saturating_sub(BRIGHTNESS_STEP)
        };
        self.platform.set_screen_brightness(level)?;
        Ok(ProviderOutcome::completed_with(format!(
            "Brightness set to {level}"
        )))
    }
}

pub struct DeviceLockProvider {
    platform: SharedPlatform,
}

impl DeviceLockProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for DeviceLockProvider {
    fn id(&self) -> &str {
        "lock"
    }

    fn perform(&self, _decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        if !self.platform.is_granted(Grant::DeviceAdmin) {
            return request(&self.platform, Grant::DeviceAdmin);
        }
        self.platform.lock_now()?;
        Ok(ProviderOutcome::completed_with("Device locked"))
    }
}
