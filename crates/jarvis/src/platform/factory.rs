use std::sync::Arc;

use super::adapters::SharedPlatform;

/// The platform adapter for the host this binary was built for.
pub fn default_platform() -> SharedPlatform {
    Arc::new(super::adapters::portable::PortablePlatform::new())
}
