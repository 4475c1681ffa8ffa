mod adapters;
pub mod factory;
pub mod types;

pub use adapters::{Platform, SharedPlatform};
pub use factory::default_platform;
pub use types::{Grant, SettingsSurface, VolumeDirection};

#[cfg(test)]
pub(crate) use adapters::fake::FakePlatform;
