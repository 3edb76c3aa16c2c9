//! Click handler wiring for the admin panel.
//!
//! Each handler reads the form, hands the action to the shared
//! `EventAdminClient`, and reflects the result back into the list. The
//! client's single-slot guard turns overlapping clicks into `Busy`
//! errors instead of duplicate wallet prompts.

use crate::dom::{self, Elements};
use crate::freighter::FreighterWallet;
use crate::render;
use crate::state;
use el_api_types::{Address, EventStatus};
use el_chain_client::ChainError;
use el_chain_horizon::{HorizonClient, TESTNET_PASSPHRASE};
use el_client::view;
use el_client::{ClientContext, EventAdminClient, EventFields};
use gloo_console::{error, log};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Contract receiving the per-action fee payment.
const FEE_DESTINATION: &str = "CCOHUQED4CBJ27GZP7QE4SWJ6JATDYJTJLMPFPXH4RKZWYBD6WYDAL5B";

thread_local! {
    static CLIENT: Rc<EventAdminClient<FreighterWallet, HorizonClient>> = Rc::new(
        EventAdminClient::new(
            ClientContext::new(
                TESTNET_PASSPHRASE,
                Some(Address(FEE_DESTINATION.to_owned())),
            ),
            FreighterWallet,
            HorizonClient::default(),
        ),
    );
}

fn client() -> Rc<EventAdminClient<FreighterWallet, HorizonClient>> {
    CLIENT.with(Rc::clone)
}

/// Helper: attach async click handler to an HtmlElement.
macro_rules! on_click_async {
    ($el:expr, $els:expr, $handler:expr) => {{
        let els = $els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let els2 = els.clone();
            wasm_bindgen_futures::spawn_local(async move {
                $handler(&els2).await;
            });
        }) as Box<dyn FnMut(_)>);
        $el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    on_click_async!(els.create_event_btn, els, on_create_event);
    on_click_async!(els.update_event_btn, els, on_update_event);
    on_click_async!(els.delete_event_btn, els, on_delete_event);

    {
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            render::clear_form(&els2);
        }) as Box<dyn FnMut(_)>);
        els.new_event_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
            .unwrap();
        cb.forget();
    }
}

/// Re-fetch events from the ledger and re-render the list.
pub async fn refresh_event_list(els: &Elements) {
    match client().list_events().await {
        Ok(events) => {
            state::set_events(events);
            state::set_selected(None);
            render::render_event_list(els);
        }
        Err(err) => error!(format!("failed to fetch events: {err}")),
    }
}

fn read_fields(els: &Elements) -> Option<EventFields> {
    let start_date = view::epoch_secs(&dom::get_input_value(&els.start_date))?;
    let end_date = view::epoch_secs(&dom::get_input_value(&els.end_date))?;
    Some(EventFields {
        name: dom::get_input_value(&els.event_name),
        description: dom::get_input_value(&els.description),
        start_date,
        end_date,
    })
}

fn read_event_id(els: &Elements) -> Option<u32> {
    dom::get_input_value(&els.event_id).parse().ok()
}

async fn on_create_event(els: &Elements) {
    let Some(fields) = read_fields(els) else {
        error!("start and end dates must be valid calendar dates");
        return;
    };

    match client().create_event(fields).await {
        Ok(result) => {
            log!(format!("event created: {}", result.hash));
            refresh_event_list(els).await;
        }
        Err(ChainError::Busy) => log!("another action is in flight"),
        Err(err) => error!(format!("create failed: {err}")),
    }
}

async fn on_update_event(els: &Elements) {
    let Some(event_id) = read_event_id(els) else {
        error!("select an event to update");
        return;
    };
    let Some(fields) = read_fields(els) else {
        error!("start and end dates must be valid calendar dates");
        return;
    };
    let status = EventStatus::from_marker(&dom::get_select_value(&els.status))
        .unwrap_or(EventStatus::Active);

    match client().update_event(event_id, fields, status).await {
        Ok(result) => {
            log!(format!("event updated: {}", result.hash));
            refresh_event_list(els).await;
        }
        Err(ChainError::Busy) => log!("another action is in flight"),
        Err(err) => error!(format!("update failed: {err}")),
    }
}

async fn on_delete_event(els: &Elements) {
    let Some(event_id) = read_event_id(els) else {
        error!("select an event to delete");
        return;
    };

    match client().delete_event(event_id).await {
        Ok(result) => {
            log!(format!("event deleted: {}", result.hash));
            refresh_event_list(els).await;
        }
        Err(ChainError::Busy) => log!("another action is in flight"),
        Err(err) => error!(format!("delete failed: {err}")),
    }
}
