use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::events::{Event, SuggestionEvent};
use crate::model::Model;
use crate::types::{ActionState, FormField, Notification, SuggestedPassword};
use crate::unauth_post;
use crate::Effect;

pub const SUGGESTION_FAILED: &str = "Failed to generate a password. Please try again.";

/// Handle password suggestion events
pub fn handle(event: SuggestionEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SuggestionEvent::SuggestPassword => {
            if model.is_suggesting() {
                log::debug!("password suggestion already in flight");
                return Command::done();
            }

            model.suggestion = ActionState::Pending;
            unauth_post!(Suggestion, SuggestionEvent, "/suggest-password", SuggestPasswordResponse, "Suggest password",
                expect_json: SuggestedPassword
            )
        }

        SuggestionEvent::SuggestPasswordResponse(result) => {
            model.suggestion = ActionState::Idle;

            let result = result.and_then(|suggested| {
                suggested
                    .validate()
                    .map(|_| suggested)
                    .map_err(|e| format!("Suggest password: invalid response: {e}"))
            });

            match result {
                Ok(suggested) => {
                    model.form.password = suggested.password;
                    model.revalidate(FormField::Password);
                    model.notify(Notification::success(
                        "Password Generated",
                        "A new strong password has been generated.",
                    ));
                }
                Err(e) => {
                    log::error!("password generation failed: {e}");
                    model.notify(Notification::error("Error", SUGGESTION_FAILED));
                }
            }

            render()
        }
    }
}
