//! Global application state.
//!
//! Uses a `RefCell`-wrapped `thread_local!` (WASM is single-threaded).
//! No state persists across page loads: events are always re-fetched.

use el_api_types::Event;
use std::cell::RefCell;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub events: Vec<Event>,
    pub selected: Option<u32>,
}

thread_local! {
    static STATE: RefCell<AppState> = RefCell::new(AppState::default());
}

pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&AppState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut AppState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn events() -> Vec<Event> {
    with(|s| s.events.clone())
}

pub fn set_events(events: Vec<Event>) {
    with_mut(|s| s.events = events);
}

pub fn selected() -> Option<u32> {
    with(|s| s.selected)
}

pub fn set_selected(event_id: Option<u32>) {
    with_mut(|s| s.selected = event_id);
}
