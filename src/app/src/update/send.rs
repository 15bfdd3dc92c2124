use crux_core::{render::render, Command};

use crate::commands::delay::DelayOutput;
use crate::events::{Event, SendEvent};
use crate::model::Model;
use crate::types::{Device, Notification, SendOutcome, SendState, SEND_DELAY_MILLIS};
use crate::{DelayCmd, Effect};

/// Handle the simulated credential transmission
pub fn handle(event: SendEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SendEvent::Submit => handle_submit(model),
        SendEvent::Settled { output, outcome } => handle_settled(output, outcome, model),
    }
}

fn handle_submit(model: &mut Model) -> Command<Effect, Event> {
    if model.is_sending() {
        log::debug!("send already in flight");
        return Command::done();
    }

    model.submit_attempted = true;

    let credentials = match model.form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => {
            model.errors = errors;
            return render();
        }
    };
    model.errors.clear();

    let outcome = roll_outcome(credentials.device, getrandom::u32());
    log::debug!(
        "simulated send of {:?} to {} will be {}",
        credentials.ssid,
        credentials.device,
        if outcome.is_delivered() { "delivered" } else { "failed" }
    );

    model.send = SendState::Sending { credentials };

    Command::all([
        render(),
        DelayCmd::millis(SEND_DELAY_MILLIS)
            .build()
            .then_send(move |output| Event::Send(SendEvent::Settled { output, outcome })),
    ])
}

fn handle_settled(
    output: DelayOutput,
    outcome: SendOutcome,
    model: &mut Model,
) -> Command<Effect, Event> {
    if !model.is_sending() {
        log::warn!("ignoring settled send without pending transmission");
        return Command::done();
    }

    model.send = SendState::Idle;

    if output == DelayOutput::Cancelled {
        log::debug!("send to {} cancelled before settling", outcome.device());
        return render();
    }

    match outcome {
        SendOutcome::Delivered { device } => {
            model.reset_form();
            model.notify(Notification::success(
                "Success!",
                format!("WiFi credentials sent to {device}."),
            ));
        }
        SendOutcome::Failed { device } => {
            model.notify(Notification::error(
                "Failed to Send",
                format!("Could not establish a connection to {device}."),
            ));
        }
    }

    render()
}

/// Roll the simulated outcome from a uniform sample.
/// Without a sample the send fails.
fn roll_outcome(device: Device, sample: Result<u32, getrandom::Error>) -> SendOutcome {
    match sample {
        Ok(sample) => SendOutcome::roll(device, sample),
        Err(e) => {
            log::error!("failed to draw random sample: {e}");
            SendOutcome::Failed { device }
        }
    }
}
