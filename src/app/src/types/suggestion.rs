use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Password returned by the suggestion endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SuggestedPassword {
    // An empty password is a failed suggestion: the form keeps its password
    // and the error notification is shown.
    #[validate(min_length = 1)]
    pub password: String,
}

/// Two-state machine guarding an asynchronous action against re-entry
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ActionState {
    #[default]
    Idle,
    Pending,
}

impl ActionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
