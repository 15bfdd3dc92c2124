use serde::{Deserialize, Serialize};

use crate::commands::delay::DelayOutput;
use crate::types::*;

/// Form field bindings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SetSsid(String),
    SetPassword(String),
    SelectDevice(String),
    TogglePasswordVisibility,
    Reset,
}

/// Password suggestion action
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SuggestionEvent {
    SuggestPassword,

    #[serde(skip)]
    SuggestPasswordResponse(Result<SuggestedPassword, String>),
}

/// Simulated credential transmission
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum SendEvent {
    Submit,

    // Delay resolution, carries the outcome rolled at submit time
    #[serde(skip)]
    Settled {
        output: DelayOutput,
        outcome: SendOutcome,
    },
}

/// UI actions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    DismissNotification,
}

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    Initialize,
    Form(FormEvent),
    Suggestion(SuggestionEvent),
    Send(SendEvent),
    Ui(UiEvent),
}
