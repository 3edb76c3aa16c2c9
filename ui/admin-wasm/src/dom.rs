//! DOM element bindings.
//!
//! All fields resolve once at startup against the fixed id surface of
//! the admin page. To add new UI elements, add a field here and bind it
//! in `Elements::bind()`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

// ── Helpers ──

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn get_input_value(el: &HtmlInputElement) -> String {
    el.value().trim().to_string()
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn set_select_value(el: &HtmlSelectElement, val: &str) {
    el.set_value(val);
}

pub fn set_inner_html(el: &Element, html: &str) {
    el.set_inner_html(html);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

// ── Elements struct ──

/// All DOM element references used by the admin panel.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Form inputs
    pub event_id: HtmlInputElement,
    pub event_name: HtmlInputElement,
    pub start_date: HtmlInputElement,
    pub end_date: HtmlInputElement,
    pub description: HtmlInputElement,
    pub status: HtmlSelectElement,

    // List container
    pub event_list: Element,

    // Action buttons
    pub create_event_btn: HtmlElement,
    pub update_event_btn: HtmlElement,
    pub delete_event_btn: HtmlElement,
    pub new_event_btn: HtmlElement,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_input {
    ($id:expr) => {
        by_id_typed::<HtmlInputElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing input #{}", $id)))?
    };
}

macro_rules! get_select {
    ($id:expr) => {
        by_id_typed::<HtmlSelectElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing select #{}", $id)))?
    };
}

macro_rules! get_html {
    ($id:expr) => {
        by_id_typed::<HtmlElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing html element #{}", $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            event_id: get_input!("event-id"),
            event_name: get_input!("event-name"),
            start_date: get_input!("start-date"),
            end_date: get_input!("end-date"),
            description: get_input!("description"),
            status: get_select!("status"),

            event_list: get_el!("event-list"),

            create_event_btn: get_html!("create-event"),
            update_event_btn: get_html!("update-event"),
            delete_event_btn: get_html!("delete-event"),
            new_event_btn: get_html!("new-event"),
        })
    }
}
