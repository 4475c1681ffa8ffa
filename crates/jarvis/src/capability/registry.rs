use std::collections::HashMap;
use std::sync::Arc;

use crate::action::ActionKind;
use crate::error::{JarvisError, JarvisResult};
use crate::platform::SharedPlatform;

use super::launch::AppLaunchProvider;
use super::privileged::{BrightnessProvider, DeviceLockProvider};
use super::search::{VideoSearchProvider, WebSearchProvider};
use super::system::{BackgroundAppsProvider, ScreenshotProvider, VolumeProvider};
use super::toggle::{
    BluetoothProvider, DoNotDisturbProvider, FlashlightProvider, MobileDataProvider, WifiProvider,
};
use super::CapabilityProvider;

/// Maps each action kind to the provider that carries it out.
#[derive(Default)]
pub struct CapabilityRegistry {
    providers: HashMap<ActionKind, Arc<dyn CapabilityProvider>>,
}

impl CapabilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with a provider for every actionable kind, all sharing
    /// `platform`.
    pub fn with_defaults(platform: SharedPlatform) -> Self {
        let flashlight: Arc<dyn CapabilityProvider> =
            Arc::new(FlashlightProvider::new(platform.clone()));
        let wifi: Arc<dyn CapabilityProvider> = Arc::new(WifiProvider::new(platform.clone()));
        let bluetooth: Arc<dyn CapabilityProvider> =
            Arc::new(BluetoothProvider::new(platform.clone()));
        let mobile_data: Arc<dyn CapabilityProvider> =
            Arc::new(MobileDataProvider::new(platform.clone()));
        let dnd: Arc<dyn CapabilityProvider> =
            Arc::new(DoNotDisturbProvider::new(platform.clone()));
        let brightness: Arc<dyn CapabilityProvider> =
            Arc::new(BrightnessProvider::new(platform.clone()));
        let volume: Arc<dyn CapabilityProvider> = Arc::new(VolumeProvider::new(platform.clone()));

        let entries: Vec<(ActionKind, Arc<dyn CapabilityProvider>)> = vec![
            (
                ActionKind::OpenApp,
                Arc::new(AppLaunchProvider::new(platform.clone())) as Arc<dyn CapabilityProvider>,
            ),
            (
                ActionKind::SearchWeb,
                Arc::new(WebSearchProvider::new(platform.clone())) as Arc<dyn CapabilityProvider>,
            ),
            (
                ActionKind::SearchVideo,
                Arc::new(VideoSearchProvider::new(platform.clone())) as Arc<dyn CapabilityProvider>,
            ),
            (ActionKind::FlashlightOn, flashlight.clone()),
            (ActionKind::FlashlightOff, flashlight),
            (ActionKind::WifiOn, wifi.clone()),
            (ActionKind::WifiOff, wifi),
            (ActionKind::BluetoothOn, bluetooth.clone()),
            (ActionKind::BluetoothOff, bluetooth),
            (ActionKind::MobileDataOn, mobile_data.clone()),
            (ActionKind::MobileDataOff, mobile_data),
            (ActionKind::DoNotDisturbOn, dnd.clone()),
            (ActionKind::DoNotDisturbOff, dnd),
            (ActionKind::BrightnessUp, brightness.clone()),
            (ActionKind::BrightnessDown, brightness),
            (ActionKind::VolumeUp, volume.clone()),
            (ActionKind::VolumeDown, volume),
            (
                ActionKind::LockDevice,
                Arc::new(DeviceLockProvider::new(platform.clone())) as Arc<dyn CapabilityProvider>,
            ),
            (
                ActionKind::KillBackgroundApps,
                Arc::new(BackgroundAppsProvider::new(platform.clone())) as Arc<dyn CapabilityProvider>,
            ),
            (
                ActionKind::TakeScreenshot,
                Arc::new(ScreenshotProvider::new(platform)) as Arc<dyn CapabilityProvider>,
            ),
        ];

        Self {
            providers: entries.into_iter().collect(),
        }
    }

    /// Registers `provider` for `kind`, returning the provider it replaced.
    /// `unknown` cannot carry a provider and is rejected.
    pub fn register(
        &mut self,
        kind: ActionKind,
        provider: Arc<dyn CapabilityProvider>,
    ) -> JarvisResult<Option<Arc<dyn CapabilityProvider>>> {
        if kind.is_unknown() {
            tracing::warn!("refusing to register provider {} for unknown", provider.id());
            return Err(JarvisError::InvalidInput(format!(
                "provider {} cannot be registered for unknown",
                provider.id()
            )));
        }
        Ok(self.providers.insert(kind, provider))
    }

    pub fn get(&self, kind: ActionKind) -> Option<Arc<dyn CapabilityProvider>> {
        self.providers.get(&kind).cloned()
    }

    pub fn kinds(&self) -> Vec<ActionKind> {
        let mut kinds: Vec<ActionKind> = self.providers.keys().copied().collect();
        kinds.sort();
        kinds
    }
}
