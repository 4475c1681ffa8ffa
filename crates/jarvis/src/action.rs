//! Action decision model shared by the classifiers and the dispatcher.

pub mod decision;
pub mod kind;
pub mod outcome;

pub use decision::{ActionDecision, WireDecision};
pub use kind::ActionKind;
pub use outcome::{ExecutionOutcome, ProviderOutcome};
