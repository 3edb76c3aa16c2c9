//! Reconstructing event records from raw account data entries.
//!
//! The on-ledger schema is the `event_<id>_<field>` naming convention;
//! values arrive base64-encoded from the RPC server. Entries that do not
//! match the convention or fail to decode are skipped with a warning,
//! never fatal.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use el_api_types::{Event, EventStatus};
use el_chain_client::AccountRecord;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Default)]
struct PartialEvent {
    name: Option<String>,
    description: Option<String>,
    start_date: Option<i64>,
    end_date: Option<i64>,
    status: Option<EventStatus>,
}

impl PartialEvent {
    fn into_event(self, event_id: u32) -> Option<Event> {
        Some(Event {
            event_id,
            name: self.name?,
            description: self.description?,
            start_date: self.start_date?,
            end_date: self.end_date?,
            // Status entry only exists once an update has run.
            status: self.status.unwrap_or(EventStatus::Active),
        })
    }
}

/// Decode the account's data entries into events, sorted by id.
pub fn events_from_account(account: &AccountRecord) -> Vec<Event> {
    let mut partial: BTreeMap<u32, PartialEvent> = BTreeMap::new();

    for (key, raw) in &account.data {
        let Some((event_id, field)) = parse_entry_key(key) else {
            continue;
        };
        let Some(value) = decode_entry_value(raw) else {
            warn!("skipping undecodable data entry '{key}'");
            continue;
        };

        let entry = partial.entry(event_id).or_default();
        match field {
            "name" => entry.name = Some(value),
            "description" => entry.description = Some(value),
            "start_date" => entry.start_date = value.parse().ok(),
            "end_date" => entry.end_date = value.parse().ok(),
            "status" => entry.status = EventStatus::from_marker(&value),
            _ => {}
        }
    }

    partial
        .into_iter()
        .filter_map(|(event_id, event)| event.into_event(event_id))
        .collect()
}

/// Split `event_<id>_<field>` into its id and field name. Keys without a
/// numeric id segment (including the un-prefixed create-form entries) are
/// not listable events.
fn parse_entry_key(key: &str) -> Option<(u32, &str)> {
    let rest = key.strip_prefix("event_")?;
    let (id_part, field) = rest.split_once('_')?;
    let event_id = id_part.parse().ok()?;
    Some((event_id, field))
}

fn decode_entry_value(raw: &str) -> Option<String> {
    let bytes = STANDARD.decode(raw).ok()?;
    String::from_utf8(bytes).ok()
}
