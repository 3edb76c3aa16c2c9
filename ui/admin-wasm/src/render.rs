//! Event list rendering and selection.
//!
//! The list is replaced wholesale on each render from the pure view
//! models in `el_client::view`; this module only moves them into the DOM.

use crate::dom::{self, Elements};
use crate::state;
use el_client::view::{self, FormModel};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Re-render the whole list from current state.
pub fn render_event_list(els: &Elements) {
    let container = &els.event_list;
    dom::set_inner_html(container, "");

    let events = state::events();
    let rows = match state::selected() {
        Some(event_id) => view::select(&events, event_id).0,
        None => view::rows(&events),
    };

    for row in &rows {
        let item = dom::create_element("li");
        let class = if row.selected {
            "event-item selected"
        } else {
            "event-item"
        };
        item.set_attribute("class", class).unwrap();

        let html = format!(
            r#"
            <div class="event-id">Event ID: <span>{}</span></div>
            <div class="event-name">Event Name: <span>{}</span></div>
            <div class="event-description">Description: <span>{}</span></div>
            <div class="event-dates">Start Date: <span>{}</span> | End Date: <span>{}</span></div>
            <div class="event-status">{}</div>
            "#,
            row.event_id, row.name, row.description, row.start_date, row.end_date, row.status_label,
        );
        dom::set_inner_html(&item, &html);

        {
            let els2 = els.clone();
            let event_id = row.event_id;
            let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
                select_event(&els2, event_id);
            }) as Box<dyn FnMut(_)>);
            item.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
                .unwrap();
            cb.forget();
        }

        els.event_list.append_child(&item).unwrap();
    }
}

/// Mark one entry selected and mirror its fields into the form.
pub fn select_event(els: &Elements, event_id: u32) {
    state::set_selected(Some(event_id));
    let (_, form) = view::select(&state::events(), event_id);
    apply_form(els, &form);
    render_event_list(els);
}

pub fn apply_form(els: &Elements, form: &FormModel) {
    els.event_id.set_value(&form.event_id);
    els.event_name.set_value(&form.name);
    els.start_date.set_value(&form.start_date);
    els.end_date.set_value(&form.end_date);
    els.description.set_value(&form.description);
    dom::set_select_value(&els.status, &form.status_value);
}

/// Reset the form and drop any selection.
pub fn clear_form(els: &Elements) {
    state::set_selected(None);
    apply_form(els, &view::clear());
    render_event_list(els);
}
