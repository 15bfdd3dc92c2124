use serde::{Deserialize, Serialize};

use crate::types::*;

/// Application Model - the complete state
/// Also serves as the ViewModel when serialized
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Model {
    // Form state
    pub form: CredentialForm,
    pub errors: FieldErrors,
    pub password_visible: bool,
    /// Fields revalidate on every change once a submit was attempted
    pub submit_attempted: bool,

    // Action state
    pub suggestion: ActionState,
    pub send: SendState,

    // UI state
    pub notification: Option<Notification>,
}

impl Model {
    /// Re-run the rule of a single field and record its message
    pub fn revalidate(&mut self, field: FormField) {
        match self.form.validate_field(field) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(message) => {
                self.errors.insert(field, message);
            }
        }
    }

    /// Restore empty defaults and forget previous validation
    pub fn reset_form(&mut self) {
        self.form = CredentialForm::default();
        self.errors.clear();
        self.submit_attempted = false;
    }

    /// Show a notification, replacing the current one
    pub fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub fn is_suggesting(&self) -> bool {
        self.suggestion.is_pending()
    }

    pub fn is_sending(&self) -> bool {
        self.send.is_sending()
    }
}
