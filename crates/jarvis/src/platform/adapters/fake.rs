use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Mutex;

use super::Platform;
use crate::error::{JarvisError, JarvisResult};
use crate::platform::types::{Grant, SettingsSurface, VolumeDirection};

/// Recording platform for tests. Every host call is appended to `calls` as a
/// short string such as `"set_torch(true)"`.
#[derive(Debug, Default)]
pub struct FakePlatform {
    api_level: Option<u32>,
    torch: bool,
    bluetooth: bool,
    grants: HashSet<Grant>,
    brightness: Option<u8>,
    screenshot: Option<PathBuf>,
    failing: HashSet<&'static str>,
    calls: Mutex<Vec<String>>,
}

impl FakePlatform {
    pub fn new() -> Self {
        Self {
            torch: true,
            bluetooth: true,
            ..Self::default()
        }
    }

    pub fn with_api_level(mut self, level: u32) -> Self {
        self.api_level = Some(level);
        self
    }

    pub fn without_torch(mut self) -> Self {
        self.torch = false;
        self
    }

    pub fn without_bluetooth(mut self) -> Self {
        self.bluetooth = false;
        self
    }

    pub fn with_grant(mut self, grant: Grant) -> Self {
        self.grants.insert(grant);
        self
    }

    pub fn with_brightness(mut self, level: u8) -> Self {
        self.brightness = Some(level);
        self
    }

    pub fn with_screenshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.screenshot = Some(path.into());
        self
    }

    /// Make the named operation return an error.
    pub fn failing(mut self, operation: &'static str) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, operation: &'static str, call: String) -> JarvisResult<()> {
        self.calls.lock().expect("calls lock").push(call);
        if self.failing.contains(operation) {
            Err(JarvisError::Internal(format!("{operation} failed")))
        } else {
            Ok(())
        }
    }
}

impl Platform for FakePlatform {
    fn id(&self) -> &str {
        "fake"
    }

    fn api_level(&self) -> Option<u32> {
        self.api_level
    }

    fn launch_app(&self, package: &str) -> JarvisResult<()> {
        self.record("launch_app", format!("launch_app({package})"))
    }

    fn open_url(&self, url: &str) -> JarvisResult<()> {
        self.record("open_url", format!("open_url({url})"))
    }

    fn search_in_app(&self, package: &str, query: &str) -> JarvisResult<()> {
        self.record("search_in_app", format!("search_in_app({package}, {query})"))
    }

    fn set_torch(&self, enabled: bool) -> JarvisResult<()> {
        if !self.torch {
            self.calls
                .lock()
                .expect("calls lock")
                .push(format!("set_torch({enabled})"));
            return Err(JarvisError::Unsupported("no torch".to_string()));
        }
        self.record("set_torch", format!("set_torch({enabled})"))
    }

    fn set_wifi(&self, enabled: bool) -> JarvisResult<()> {
        self.record("set_wifi", format!("set_wifi({enabled})"))
    }

    fn has_bluetooth(&self) -> bool {
        self.bluetooth
    }

    fn set_bluetooth(&self, enabled: bool) -> JarvisResult<()> {
        self.record("set_bluetooth", format!("set_bluetooth({enabled})"))
    }

    fn set_do_not_disturb(&self, enabled: bool) -> JarvisResult<()> {
        self.record("set_do_not_disturb", format!("set_do_not_disturb({enabled})"))
    }

    fn is_granted(&self, grant: Grant) -> bool {
        self.grants.contains(&grant)
    }

    fn request_grant(&self, grant: Grant) -> JarvisResult<()> {
        self.record("request_grant", format!("request_grant({grant:?})"))
    }

    fn open_settings(&self, surface: SettingsSurface) -> JarvisResult<()> {
        self.record("open_settings", format!("open_settings({surface:?})"))
    }

    fn screen_brightness(&self) -> JarvisResult<Option<u8>> {
        self.record("screen_brightness", "screen_brightness()".to_string())?;
        Ok(self.brightness)
    }

    fn set_screen_brightness(&self, level: u8) -> JarvisResult<()> {
        self.record(
            "set_screen_brightness",
            format!("set_screen_brightness({level})"),
        )
    }

    fn adjust_volume(&self, direction: VolumeDirection) -> JarvisResult<()> {
        self.record("adjust_volume", format!("adjust_volume({direction:?})"))
    }

    fn lock_now(&self) -> JarvisResult<()> {
        self.record("lock_now", "lock_now()".to_string())
    }

    fn capture_screenshot(&self) -> JarvisResult<Option<PathBuf>> {
        self.record("capture_screenshot", "capture_screenshot()".to_string())?;
        Ok(self.screenshot.clone())
    }
}
