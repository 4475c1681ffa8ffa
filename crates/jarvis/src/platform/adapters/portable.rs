use std::process::{Command, ExitStatus};

use super::Platform;
use crate::error::{JarvisError, JarvisResult};
use crate::platform::types::{Grant, SettingsSurface, VolumeDirection};

/// Desktop adapter: can open URLs and launch apps through the host's opener,
/// everything device-specific is unsupported.
#[derive(Debug, Default)]
pub struct PortablePlatform;

impl PortablePlatform {
    pub fn new() -> Self {
        Self
    }
}

impl Platform for PortablePlatform {
    fn id(&self) -> &str {
        "portable"
    }

    fn launch_app(&self, package: &str) -> JarvisResult<()> {
        launch_app_native(package)
    }

    fn open_url(&self, url: &str) -> JarvisResult<()> {
        open_native(url)
    }

    fn search_in_app(&self, _package: &str, _query: &str) -> JarvisResult<()> {
        Err(not_supported("search_in_app"))
    }

    fn set_torch(&self, _enabled: bool) -> JarvisResult<()> {
        Err(not_supported("set_torch"))
    }

    fn set_wifi(&self, _enabled: bool) -> JarvisResult<()> {
        Err(not_supported("set_wifi"))
    }

    fn set_bluetooth(&self, _enabled: bool) -> JarvisResult<()> {
        Err(not_supported("set_bluetooth"))
    }

    fn set_do_not_disturb(&self, _enabled: bool) -> JarvisResult<()> {
        Err(not_supported("set_do_not_disturb"))
    }

    fn request_grant(&self, grant: Grant) -> JarvisResult<()> {
        Err(JarvisError::Unsupported(format!(
            "{grant} cannot be requested on this platform"
        )))
    }

    fn open_settings(&self, surface: SettingsSurface) -> JarvisResult<()> {
        Err(JarvisError::Unsupported(format!(
            "{surface} are not available on this platform"
        )))
    }

    fn screen_brightness(&self) -> JarvisResult<Option<u8>> {
        Err(not_supported("screen_brightness"))
    }

    fn set_screen_brightness(&self, _level: u8) -> JarvisResult<()> {
        Err(not_supported("set_screen_brightness"))
    }

    fn adjust_volume(&self, _direction: VolumeDirection) -> JarvisResult<()> {
        Err(not_supported("adjust_volume"))
    }

    fn lock_now(&self) -> JarvisResult<()> {
        Err(not_supported("lock_now"))
    }

    fn capture_screenshot(&self) -> JarvisResult<Option<std::path::PathBuf>> {
        Err(not_supported("capture_screenshot"))
    }
}

fn not_supported(operation: &str) -> JarvisError {
    JarvisError::Unsupported(format!("{operation} is not supported on this platform"))
}

fn ensure_command_success(status: ExitStatus, command_label: &str) -> JarvisResult<()> {
    if status.success() {
        Ok(())
    } else {
        Err(JarvisError::Internal(format!(
            "{command_label} failed with status {status}"
        )))
    }
}

fn run(mut command: Command, command_label: &str) -> JarvisResult<()> {
    let status = command
        .status()
        .map_err(|error| JarvisError::Internal(format!("failed to run {command_label}: {error}")))?;
    ensure_command_success(status, command_label)
}

#[cfg(target_os = "macos")]
fn open_native(target: &str) -> JarvisResult<()> {
    let mut command = Command::new("open");
    command.arg(target);
    run(command, "open")
}

#[cfg(target_os = "linux")]
fn open_native(target: &str) -> JarvisResult<()> {
    let mut command = Command::new("xdg-open");
    command.arg(target);
    run(command, "xdg-open")
}

#[cfg(target_os = "windows")]
fn open_native(target: &str) -> JarvisResult<()> {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("").arg(target);
    run(command, "start")
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn open_native(_target: &str) -> JarvisResult<()> {
    Err(not_supported("open_url"))
}

#[cfg(target_os = "macos")]
fn launch_app_native(app: &str) -> JarvisResult<()> {
    let mut command = Command::new("open");
    command.arg("-a").arg(app);
    run(command, "open -a")
}

#[cfg(target_os = "linux")]
fn launch_app_native(app: &str) -> JarvisResult<()> {
    let mut command = Command::new("gtk-launch");
    command.arg(app);
    run(command, "gtk-launch")
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn launch_app_native(app: &str) -> JarvisResult<()> {
    open_native(app)
}
