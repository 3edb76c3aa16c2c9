//! EventLedger admin panel frontend.
//!
//! Pure Rust + WASM rendition of the event-admin page: binds the fixed
//! DOM surface, wires the action buttons, and drives the submission
//! workflow in `el-client` against the Freighter extension and a Horizon
//! endpoint.

pub mod dom;
pub mod events;
pub mod freighter;
pub mod render;
pub mod state;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let els = dom::Elements::bind()?;
    events::bind_events(&els);

    // Initialize the event list on page load
    events::refresh_event_list(&els).await;

    Ok(())
}
