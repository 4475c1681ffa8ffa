use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{JarvisError, JarvisResult};

use super::types::{Grant, SettingsSurface, VolumeDirection};

/// Host operations the capability providers are built on.
///
/// Every method defaults to "not implemented" so adapters only override what
/// their host supports. Implementations are shared across concurrent
/// submissions and must not assume exclusive ownership of host state.
pub trait Platform: Send + Sync {
    fn id(&self) -> &str {
        "unsupported"
    }

    /// Host API level for version-gated operations; `None` when the host is
    /// not versioned that way.
    fn api_level(&self) -> Option<u32> {
        None
    }

    fn launch_app(&self, _package: &str) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    fn open_url(&self, _url: &str) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    fn search_in_app(&self, _package: &str, _query: &str) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }

    fn set_torch(&self, _enabled: bool) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    fn set_wifi(&self, _enabled: bool) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    fn has_bluetooth(&self) -> bool {
        false
    }
    fn set_bluetooth(&self, _enabled: bool) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    fn set_do_not_disturb(&self, _enabled: bool) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }

    fn is_granted(&self, _grant: Grant) -> bool {
        false
    }
    /// Start the host flow that asks the user for `grant`.
    fn request_grant(&self, _grant: Grant) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    fn open_settings(&self, _surface: SettingsSurface) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }

    /// Current brightness on a 0..=255 scale, `None` if the host has no value.
    fn screen_brightness(&self) -> JarvisResult<Option<u8>> {
        Err(JarvisError::NotImplemented)
    }
    fn set_screen_brightness(&self, _level: u8) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    fn adjust_volume(&self, _direction: VolumeDirection) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    fn lock_now(&self) -> JarvisResult<()> {
        Err(JarvisError::NotImplemented)
    }
    /// Capture the screen; returns where the image was saved when known.
    fn capture_screenshot(&self) -> JarvisResult<Option<PathBuf>> {
        Err(JarvisError::NotImplemented)
    }
}

pub type SharedPlatform = Arc<dyn Platform>;

#[cfg(test)]
pub mod fake;
pub mod portable;
