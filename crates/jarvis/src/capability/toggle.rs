//! On/off switches for radios, the torch and the interruption filter.

use crate::action::{ActionDecision, ActionKind, ProviderOutcome};
use crate::error::{JarvisError, JarvisResult};
use crate::platform::{Grant, SettingsSurface, SharedPlatform};

use super::{below_level, CapabilityProvider};

/// Last platform level that lets apps switch Wi-Fi directly.
const WIFI_DIRECT_BELOW: u32 = 29;
const BLUETOOTH_DIRECT_BELOW: u32 = 31;
const DND_MIN_LEVEL: u32 = 23;

fn switch_state(
    provider: &str,
    decision: &ActionDecision,
    on: ActionKind,
    off: ActionKind,
) -> JarvisResult<bool> {
    match decision.kind() {
        kind if kind == on => Ok(true),
        kind if kind == off => Ok(false),
        other => Err(JarvisError::InvalidInput(format!(
            "{provider} cannot handle {other}"
        ))),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}

pub struct FlashlightProvider {
    platform: SharedPlatform,
}

impl FlashlightProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for FlashlightProvider {
    fn id(&self) -> &str {
        "flashlight"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let enabled = switch_state(
            self.id(),
            decision,
            ActionKind::FlashlightOn,
            ActionKind::FlashlightOff,
        )?;
        self.platform.set_torch(enabled)?;
        Ok(ProviderOutcome::completed_with(format!(
            "Flashlight {}",
            on_off(enabled)
        )))
    }
}

/// Switches Wi-Fi directly on older hosts, otherwise opens the Wi-Fi panel.
pub struct WifiProvider {
    platform: SharedPlatform,
}

impl WifiProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for WifiProvider {
    fn id(&self) -> &str {
        "wifi"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let enabled = switch_state(self.id(), decision, ActionKind::WifiOn, ActionKind::WifiOff)?;
        if below_level(&self.platform, WIFI_DIRECT_BELOW) {
            self.platform.set_wifi(enabled)?;
            return Ok(ProviderOutcome::completed_with(format!(
                "WiFi {}",
                on_off(enabled)
            )));
        }

        self.platform.open_settings(SettingsSurface::WifiPanel)?;
        tracing::info!("wifi toggle handed to the settings panel");
        Ok(ProviderOutcome::requires_user_action(format!(
            "Turn WiFi {} in the panel that just opened",
            on_off(enabled)
        )))
    }
}

pub struct BluetoothProvider {
    platform: SharedPlatform,
}

impl BluetoothProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for BluetoothProvider {
    fn id(&self) -> &str {
        "bluetooth"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let enabled = switch_state(
            self.id(),
            decision,
            ActionKind::BluetoothOn,
            ActionKind::BluetoothOff,
        )?;
        if !self.platform.has_bluetooth() {
            return Ok(ProviderOutcome::failed(
                "Bluetooth is not available on this device",
            ));
        }
        if below_level(&self.platform, BLUETOOTH_DIRECT_BELOW) {
            self.platform.set_bluetooth(enabled)?;
            return Ok(ProviderOutcome::completed_with(format!(
                "Bluetooth {}",
                on_off(enabled)
            )));
        }

        self.platform.open_settings(SettingsSurface::Bluetooth)?;
        tracing::info!("bluetooth toggle handed to settings");
        Ok(ProviderOutcome::requires_user_action(format!(
            "Turn Bluetooth {} in the settings that just opened",
            on_off(enabled)
        )))
    }
}

/// Apps cannot switch mobile data, so this always opens network settings.
pub struct MobileDataProvider {
    platform: SharedPlatform,
}

impl MobileDataProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for MobileDataProvider {
    fn id(&self) -> &str {
        "mobile-data"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let enabled = switch_state(
            self.id(),
            decision,
            ActionKind::MobileDataOn,
            ActionKind::MobileDataOff,
        )?;
        self.platform.open_settings(SettingsSurface::MobileNetwork)?;
        tracing::info!("mobile data toggle handed to settings");
        Ok(ProviderOutcome::requires_user_action(format!(
            "Turn mobile data {} in the settings that just opened",
            on_off(enabled)
        )))
    }
}

/// Sets the interruption filter once notification-policy access is granted.
pub struct DoNotDisturbProvider {
    platform: SharedPlatform,
}

impl DoNotDisturbProvider {
    pub fn new(platform: SharedPlatform) -> Self {
        Self { platform }
    }
}

impl CapabilityProvider for DoNotDisturbProvider {
    fn id(&self) -> &str {
        "do-not-disturb"
    }

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome> {
        let enabled = switch_state(
            self.id(),
            decision,
            ActionKind::DoNotDisturbOn,
            ActionKind::DoNotDisturbOff,
        )?;
        if below_level(&self.platform, DND_MIN_LEVEL) {
            return Ok(ProviderOutcome::failed(format!(
                "Do Not Disturb needs platform level {DND_MIN_LEVEL} or newer"
            )));
        }
        if !self.platform.is_granted(Grant::NotificationPolicy) {
            self.platform
                .open_settings(SettingsSurface::NotificationPolicyAccess)?;
            tracing::info!("requested {} for do-not-disturb", Grant::NotificationPolicy);
            return Ok(ProviderOutcome::requires_user_action(
                "Allow Do Not Disturb access, then try again",
            ));
        }

        self.platform.set_do_not_disturb(enabled)?;
        Ok(ProviderOutcome::completed_with(format!(
            "Do Not Disturb {}",
            on_off(enabled)
        )))
    }
}
