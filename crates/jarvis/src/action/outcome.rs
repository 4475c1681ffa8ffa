/// What a capability provider reports for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderOutcome {
    /// The side effect happened.
    Completed { message: Option<String> },
    /// The user was routed to a settings surface to finish the change.
    RequiresUserAction { message: Option<String> },
    /// The side effect did not happen.
    Failed { reason: Option<String> },
}

impl ProviderOutcome {
    pub fn completed() -> Self {
        ProviderOutcome::Completed { message: None }
    }

    pub fn completed_with(message: impl Into<String>) -> Self {
        ProviderOutcome::Completed {
            message: Some(message.into()),
        }
    }

    pub fn requires_user_action(message: impl Into<String>) -> Self {
        ProviderOutcome::RequiresUserAction {
            message: Some(message.into()),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        ProviderOutcome::Failed {
            reason: Some(reason.into()),
        }
    }
}

/// Normalized result of dispatching one decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub succeeded: bool,
    pub message: String,
    pub requires_user_action: bool,
}

impl ExecutionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            requires_user_action: false,
        }
    }

    pub fn user_action(message: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            requires_user_action: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            requires_user_action: false,
        }
    }
}
