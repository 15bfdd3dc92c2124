use crux_core::{render::render, Command};

use crate::events::{Event, FormEvent};
use crate::model::Model;
use crate::types::FormField;
use crate::update_field;
use crate::Effect;

/// Handle form field bindings
pub fn handle(event: FormEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FormEvent::SetSsid(ssid) => set_field(FormField::Ssid, ssid, model),
        FormEvent::SetPassword(password) => set_field(FormField::Password, password, model),
        FormEvent::SelectDevice(device) => set_field(FormField::Device, device, model),
        FormEvent::TogglePasswordVisibility => {
            update_field!(model.password_visible, !model.password_visible)
        }
        FormEvent::Reset => {
            model.reset_form();
            render()
        }
    }
}

/// Store a field value. Validation follows the value only after the first
/// submit attempt, before that the user is not interrupted while typing.
fn set_field(field: FormField, value: String, model: &mut Model) -> Command<Effect, Event> {
    let current = model.form.value_mut(field);
    if *current == value {
        return Command::done();
    }
    *current = value;

    if model.submit_attempted {
        model.revalidate(field);
    }

    render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEVICE_UNKNOWN, PASSWORD_TOO_SHORT, SSID_REQUIRED};

    #[test]
    fn set_fields_store_values() {
        let mut model = Model::default();

        let _ = handle(FormEvent::SetSsid("Home".to_string()), &mut model);
        let _ = handle(FormEvent::SetPassword("Password123!".to_string()), &mut model);
        let _ = handle(FormEvent::SelectDevice("RPi".to_string()), &mut model);

        assert_eq!(model.form.ssid, "Home");
        assert_eq!(model.form.password, "Password123!");
        assert_eq!(model.form.device, "RPi");
        assert!(model.errors.is_empty());
    }

    #[test]
    fn edits_before_submit_do_not_report_errors() {
        let mut model = Model::default();

        let _ = handle(FormEvent::SetPassword("short".to_string()), &mut model);

        assert!(model.errors.is_empty());
    }

    #[test]
    fn edits_after_submit_revalidate_field() {
        let mut model = Model {
            submit_attempted: true,
            ..Default::default()
        };

        let _ = handle(FormEvent::SetPassword("short".to_string()), &mut model);
        assert_eq!(model.errors[&FormField::Password], PASSWORD_TOO_SHORT);

        let _ = handle(FormEvent::SetPassword("long enough".to_string()), &mut model);
        assert!(!model.errors.contains_key(&FormField::Password));
    }

    #[test]
    fn unknown_device_is_rejected_after_submit() {
        let mut model = Model {
            submit_attempted: true,
            ..Default::default()
        };

        let _ = handle(FormEvent::SelectDevice("Toaster".to_string()), &mut model);

        assert_eq!(model.errors[&FormField::Device], DEVICE_UNKNOWN);
    }

    #[test]
    fn clearing_ssid_after_submit_reports_required() {
        let mut model = Model {
            submit_attempted: true,
            ..Default::default()
        };
        model.form.ssid = "Home".to_string();

        let _ = handle(FormEvent::SetSsid(String::new()), &mut model);

        assert_eq!(model.errors[&FormField::Ssid], SSID_REQUIRED);
    }

    #[test]
    fn toggle_password_visibility() {
        let mut model = Model::default();

        let _ = handle(FormEvent::TogglePasswordVisibility, &mut model);
        assert!(model.password_visible);

        let _ = handle(FormEvent::TogglePasswordVisibility, &mut model);
        assert!(!model.password_visible);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut model = Model {
            submit_attempted: true,
            ..Default::default()
        };
        model.form.ssid = "Home".to_string();
        model
            .errors
            .insert(FormField::Password, PASSWORD_TOO_SHORT.to_string());

        let _ = handle(FormEvent::Reset, &mut model);

        assert_eq!(model.form, crate::types::CredentialForm::default());
        assert!(model.errors.is_empty());
        assert!(!model.submit_attempted);
    }
}
