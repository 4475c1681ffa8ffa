use std::fmt;

/// Elevated grants a capability may need before it can act directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grant {
    /// Permission to change the interruption filter.
    NotificationPolicy,
    /// Permission to write system settings such as brightness.
    WriteSettings,
    /// Device-administrator activation, needed to lock the screen.
    DeviceAdmin,
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grant::NotificationPolicy => write!(f, "notification-policy access"),
            Grant::WriteSettings => write!(f, "write-settings permission"),
            Grant::DeviceAdmin => write!(f, "device-admin access"),
        }
    }
}

/// User-facing settings screens a provider can hand the user off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsSurface {
    WifiPanel,
    Bluetooth,
    MobileNetwork,
    NotificationPolicyAccess,
    Applications,
}

impl fmt::Display for SettingsSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsSurface::WifiPanel => write!(f, "Wi-Fi settings"),
            SettingsSurface::Bluetooth => write!(f, "Bluetooth settings"),
            SettingsSurface::MobileNetwork => write!(f, "mobile network settings"),
            SettingsSurface::NotificationPolicyAccess => write!(f, "Do Not Disturb access settings"),
            SettingsSurface::Applications => write!(f, "application settings"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeDirection {
    Raise,
    Lower,
}
