//! Delay command definitions.
//!
//! The Core cannot sleep on its own. It asks the Shell to start a timer and
//! receives the outcome once the timer fired or was torn down.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Timer the Shell needs to run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DelayOperation {
    pub millis: u64,
}

// What happened to the timer (shell tells us)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DelayOutput {
    Elapsed,
    /// The shell cleared the timer before it fired, e.g. on teardown
    Cancelled,
}

impl Operation for DelayOperation {
    type Output = DelayOutput;
}

/// Command-based Delay API
pub struct Delay<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Delay<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DelayOperation>> + 'static,
    Event: Send + 'static,
{
    /// Wait for the given number of milliseconds
    pub fn millis(millis: u64) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(DelayOperation { millis })
    }
}

/// Request builder for Delay operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: DelayOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<DelayOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: DelayOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = DelayOutput>> {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
