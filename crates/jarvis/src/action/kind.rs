use std::fmt;

/// Closed set of actions the assistant knows how to perform.
///
/// Any `action_type` outside this catalog is coerced to [`ActionKind::Unknown`]
/// when a decision is decoded, so raw strings never travel past the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    OpenApp,
    SearchWeb,
    SearchVideo,
    FlashlightOn,
    FlashlightOff,
    WifiOn,
    WifiOff,
    BluetoothOn,
    BluetoothOff,
    MobileDataOn,
    MobileDataOff,
    DoNotDisturbOn,
    DoNotDisturbOff,
    BrightnessUp,
    BrightnessDown,
    VolumeUp,
    VolumeDown,
    LockDevice,
    KillBackgroundApps,
    TakeScreenshot,
    Unknown,
}

impl ActionKind {
    /// Every kind, in catalog order.
    pub const ALL: [ActionKind; 21] = [
        ActionKind::OpenApp,
        ActionKind::SearchWeb,
        ActionKind::SearchVideo,
        ActionKind::FlashlightOn,
        ActionKind::FlashlightOff,
        ActionKind::WifiOn,
        ActionKind::WifiOff,
        ActionKind::BluetoothOn,
        ActionKind::BluetoothOff,
        ActionKind::MobileDataOn,
        ActionKind::MobileDataOff,
        ActionKind::DoNotDisturbOn,
        ActionKind::DoNotDisturbOff,
        ActionKind::BrightnessUp,
        ActionKind::BrightnessDown,
        ActionKind::VolumeUp,
        ActionKind::VolumeDown,
        ActionKind::LockDevice,
        ActionKind::KillBackgroundApps,
        ActionKind::TakeScreenshot,
        ActionKind::Unknown,
    ];

    /// The `action_type` string used on the wire.
    pub fn as_wire(&self) -> &'static str {
        match self {
            ActionKind::OpenApp => "open_app",
            ActionKind::SearchWeb => "search_web",
            ActionKind::SearchVideo => "search_youtube",
            ActionKind::FlashlightOn => "flashlight_on",
            ActionKind::FlashlightOff => "flashlight_off",
            ActionKind::WifiOn => "wifi_on",
            ActionKind::WifiOff => "wifi_off",
            ActionKind::BluetoothOn => "bluetooth_on",
            ActionKind::BluetoothOff => "bluetooth_off",
            ActionKind::MobileDataOn => "mobile_data_on",
            ActionKind::MobileDataOff => "mobile_data_off",
            ActionKind::DoNotDisturbOn => "dnd_on",
            ActionKind::DoNotDisturbOff => "dnd_off",
            ActionKind::BrightnessUp => "brightness_up",
            ActionKind::BrightnessDown => "brightness_down",
            ActionKind::VolumeUp => "volume_up",
            ActionKind::VolumeDown => "volume_down",
            ActionKind::LockDevice => "lock_device",
            ActionKind::KillBackgroundApps => "kill_apps",
            ActionKind::TakeScreenshot => "screenshot",
            ActionKind::Unknown => "unknown",
        }
    }

    /// Resolve a wire string, coercing anything outside the catalog to `Unknown`.
    pub fn from_wire(value: &str) -> ActionKind {
        let normalized = value.trim().to_ascii_lowercase();
        ActionKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_wire() == normalized)
            .unwrap_or(ActionKind::Unknown)
    }

    pub fn requires_target(&self) -> bool {
        matches!(self, ActionKind::OpenApp)
    }

    pub fn requires_query(&self) -> bool {
        matches!(self, ActionKind::SearchWeb | ActionKind::SearchVideo)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ActionKind::Unknown)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}
