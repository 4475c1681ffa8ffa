pub mod error;
pub mod settings;

pub mod action;
pub mod capability;
pub mod classifier;
pub mod dispatch;
pub mod orchestrator;
pub mod platform;

pub use crate::action::{ActionDecision, ActionKind, ExecutionOutcome};
pub use crate::dispatch::Dispatcher;
pub use crate::error::{JarvisError, JarvisResult};
pub use crate::orchestrator::{Orchestrator, Submission, SubmissionState};
pub use crate::settings::AssistantSettings;
