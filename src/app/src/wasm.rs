//! WebAssembly FFI bindings for the Crux Core
//!
//! The web shell serializes events and effect outputs with bincode, hands them
//! to these functions and receives bincode-serialized effect requests back.

use lazy_static::lazy_static;
use wasm_bindgen::prelude::wasm_bindgen;

use crux_core::{bridge::Bridge, Core};

use crate::App;

lazy_static! {
    static ref CORE: Bridge<App> = Bridge::new(Core::new());
}

/// Route the core's `log` output to the browser console.
///
/// Runs automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn init_wasm() {
    // A logger may already be installed when the module is re-initialized
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }
}

/// Process a serialized `Event`, e.g. a field edit or "Send Credentials".
///
/// Malformed input is logged and yields no effects, so the form stays usable.
#[wasm_bindgen]
pub fn process_event(event_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.update(event_bytes, &mut effects) {
        log::error!("failed to process event: {e}");
        effects.clear();
    }
    effects
}

/// Current view model: form values, validation messages, pending flags and
/// the notification to show.
#[wasm_bindgen]
pub fn view() -> Vec<u8> {
    let mut view = Vec::new();
    if let Err(e) = CORE.view(&mut view) {
        log::error!("failed to serialize view model: {e}");
        view.clear();
    }
    view
}

/// Resolve an effect (HTTP response or elapsed/cancelled delay) by its id.
#[wasm_bindgen]
pub fn handle_response(id: u32, response_bytes: &[u8]) -> Vec<u8> {
    let mut effects = Vec::new();
    if let Err(e) = CORE.resolve(
        crux_core::bridge::EffectId(id),
        response_bytes,
        &mut effects,
    ) {
        log::error!("failed to resolve effect {id}: {e}");
        effects.clear();
    }
    effects
}
