//! Pure view-model layer.
//!
//! Maps event records to list rows and form field values without
//! touching any DOM, so selection and rendering semantics are testable
//! off-browser. Dates round-trip as ISO calendar strings here and as
//! epoch seconds everywhere else.

use chrono::{DateTime, NaiveDate};
use el_api_types::{Event, EventStatus};

/// One rendered list entry. At most one row carries `selected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub event_id: u32,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub status_label: String,
    pub selected: bool,
}

/// Mirror of the editable form inputs. All values are strings, as the
/// form holds them; `status_value` matches the status select ("0"/"1").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormModel {
    pub event_id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub status_value: String,
}

/// Render the full list, nothing selected.
pub fn rows(events: &[Event]) -> Vec<EventRow> {
    events.iter().map(|event| row(event, false)).collect()
}

/// Render the list with exactly the matching row selected, and mirror
/// that record into the form model. An unknown id selects nothing and
/// leaves the form cleared.
pub fn select(events: &[Event], event_id: u32) -> (Vec<EventRow>, FormModel) {
    let rows = events
        .iter()
        .map(|event| row(event, event.event_id == event_id))
        .collect();

    let form = events
        .iter()
        .find(|event| event.event_id == event_id)
        .map(|event| FormModel {
            event_id: event.event_id.to_string(),
            name: event.name.clone(),
            start_date: iso_date(event.start_date),
            end_date: iso_date(event.end_date),
            description: event.description.clone(),
            status_value: event.status.marker().to_owned(),
        })
        .unwrap_or_else(clear);

    (rows, form)
}

/// Reset every form field to its empty/default value.
pub fn clear() -> FormModel {
    FormModel {
        status_value: EventStatus::Active.marker().to_owned(),
        ..FormModel::default()
    }
}

fn row(event: &Event, selected: bool) -> EventRow {
    EventRow {
        event_id: event.event_id,
        name: event.name.clone(),
        description: event.description.clone(),
        start_date: iso_date(event.start_date),
        end_date: iso_date(event.end_date),
        status_label: event.status.label().to_owned(),
        selected,
    }
}

/// Epoch seconds to an ISO calendar date (`YYYY-MM-DD`, UTC).
pub fn iso_date(epoch_secs: i64) -> String {
    DateTime::from_timestamp(epoch_secs, 0)
        .map(|datetime| datetime.date_naive().to_string())
        .unwrap_or_default()
}

/// ISO calendar date back to epoch seconds at UTC midnight.
pub fn epoch_secs(iso: &str) -> Option<i64> {
    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(midnight.and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events() -> Vec<Event> {
        vec![
            Event {
                event_id: 1,
                name: "Meetup".to_owned(),
                description: "desc".to_owned(),
                start_date: 1_700_000_000,
                end_date: 1_700_003_600,
                status: EventStatus::Active,
            },
            Event {
                event_id: 2,
                name: "Hackathon".to_owned(),
                description: "later".to_owned(),
                start_date: 1_700_100_000,
                end_date: 1_700_186_400,
                status: EventStatus::Completed,
            },
        ]
    }

    #[test]
    fn selection_marks_exactly_one_row() {
        let (rows, _) = select(&events(), 2);
        let selected: Vec<_> = rows.iter().filter(|row| row.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].event_id, 2);
    }

    #[test]
    fn selection_mirrors_all_five_form_fields() {
        let (_, form) = select(&events(), 1);
        assert_eq!(form.event_id, "1");
        assert_eq!(form.name, "Meetup");
        assert_eq!(form.description, "desc");
        assert_eq!(form.start_date, "2023-11-14");
        assert_eq!(form.end_date, "2023-11-14");
        assert_eq!(form.status_value, "0");
    }

    #[test]
    fn selecting_unknown_id_marks_nothing_and_clears_form() {
        let (rows, form) = select(&events(), 99);
        assert!(rows.iter().all(|row| !row.selected));
        assert_eq!(form, clear());
    }

    #[test]
    fn clear_resets_every_field() {
        let form = clear();
        assert!(form.event_id.is_empty());
        assert!(form.name.is_empty());
        assert!(form.start_date.is_empty());
        assert!(form.end_date.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.status_value, "0");
    }

    #[test]
    fn dates_round_trip_through_iso_strings() {
        let iso = iso_date(1_700_000_000);
        assert_eq!(iso, "2023-11-14");
        assert_eq!(epoch_secs("2023-11-14"), Some(1_699_920_000));
        assert_eq!(epoch_secs("not-a-date"), None);
    }

    #[test]
    fn status_labels_render_words_not_markers() {
        let rows = rows(&events());
        assert_eq!(rows[0].status_label, "Active");
        assert_eq!(rows[1].status_label, "Completed");
        assert!(rows.iter().all(|row| !row.selected));
    }
}
