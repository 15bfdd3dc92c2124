mod form;
mod send;
mod suggestion;
mod ui;

use crux_core::{render::render, Command};

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => render(),
        Event::Form(event) => form::handle(event, model),
        Event::Suggestion(event) => suggestion::handle(event, model),
        Event::Send(event) => send::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
