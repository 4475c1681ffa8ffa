//! Capability providers: the side-effecting half of the pipeline.

pub mod launch;
pub mod privileged;
pub mod registry;
pub mod search;
pub mod system;
pub mod toggle;

use crate::action::{ActionDecision, ProviderOutcome};
use crate::error::JarvisResult;
use crate::platform::SharedPlatform;

pub use registry::CapabilityRegistry;

/// One independently-failable host capability.
///
/// `perform` blocks on host calls; the dispatcher runs it on the blocking
/// pool. An `Err` is reported to the user as a failure with the error text.
pub trait CapabilityProvider: Send + Sync {
    fn id(&self) -> &str;

    fn perform(&self, decision: &ActionDecision) -> JarvisResult<ProviderOutcome>;
}

/// True when the host reports a platform level strictly below `level`.
/// Hosts without a level are treated as current.
pub(crate) fn below_level(platform: &SharedPlatform, level: u32) -> bool {
    platform.api_level().is_some_and(|current| current < level)
}
