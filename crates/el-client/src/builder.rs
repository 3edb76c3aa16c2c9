//! Pure mapping from a logical event action to its ordered operation set.
//!
//! One data-mutation instruction per field, in a fixed order, optionally
//! followed by exactly one native-asset payment signalling the fee to the
//! contract when a fee destination is configured. No operation depends on
//! another's result within the same build.

use el_api_types::{Address, EventStatus};
use el_txn::{NATIVE_ASSET, Operation};

pub const CREATE_PAYMENT_AMOUNT: &str = "100";
pub const UPDATE_PAYMENT_AMOUNT: &str = "50";
pub const DELETE_PAYMENT_AMOUNT: &str = "10";

/// Field set shared by create and update. Timestamps are epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub name: String,
    pub description: String,
    pub start_date: i64,
    pub end_date: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventAction {
    Create(EventFields),
    Update {
        event_id: u32,
        fields: EventFields,
        status: EventStatus,
    },
    Delete {
        event_id: u32,
    },
}

impl EventAction {
    pub fn tag(&self) -> &'static str {
        match self {
            EventAction::Create(_) => "create",
            EventAction::Update { .. } => "update",
            EventAction::Delete { .. } => "delete",
        }
    }

    fn payment_amount(&self) -> &'static str {
        match self {
            EventAction::Create(_) => CREATE_PAYMENT_AMOUNT,
            EventAction::Update { .. } => UPDATE_PAYMENT_AMOUNT,
            EventAction::Delete { .. } => DELETE_PAYMENT_AMOUNT,
        }
    }
}

/// Build the ordered operation set for one action. Deterministic: the
/// same action always yields the same instructions in the same order.
pub fn build_operations(action: &EventAction, fee_destination: Option<&Address>) -> Vec<Operation> {
    let mut operations = match action {
        EventAction::Create(fields) => vec![
            Operation::data_entry("event_name", fields.name.clone()),
            Operation::data_entry("event_description", fields.description.clone()),
            Operation::data_entry("start_date", fields.start_date.to_string()),
            Operation::data_entry("end_date", fields.end_date.to_string()),
        ],
        EventAction::Update {
            event_id,
            fields,
            status,
        } => vec![
            Operation::data_entry(format!("event_{event_id}_name"), fields.name.clone()),
            Operation::data_entry(
                format!("event_{event_id}_description"),
                fields.description.clone(),
            ),
            Operation::data_entry(
                format!("event_{event_id}_start_date"),
                fields.start_date.to_string(),
            ),
            Operation::data_entry(
                format!("event_{event_id}_end_date"),
                fields.end_date.to_string(),
            ),
            Operation::data_entry(format!("event_{event_id}_status"), status.marker()),
        ],
        // Removing the data entry is the deletion signal.
        EventAction::Delete { event_id } => {
            vec![Operation::delete_entry(format!("event_{event_id}_delete"))]
        }
    };

    if let Some(destination) = fee_destination {
        operations.push(Operation::Payment {
            destination: destination.clone(),
            asset: NATIVE_ASSET.to_owned(),
            amount: action.payment_amount().to_owned(),
        });
    }

    operations
}
