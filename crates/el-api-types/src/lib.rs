use serde::{Deserialize, Serialize};

/// A Stellar account address in strkey form (the `G...` public key string).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address(pub String);

impl Address {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Two-valued event lifecycle status. Persists on the ledger as a
/// single-character marker, not the literal word.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Active,
    Completed,
}

impl EventStatus {
    /// Wire marker stored in the account data entry.
    pub fn marker(&self) -> &'static str {
        match self {
            EventStatus::Active => "0",
            EventStatus::Completed => "1",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "0" => Some(EventStatus::Active),
            "1" => Some(EventStatus::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Active => "Active",
            EventStatus::Completed => "Completed",
        }
    }
}

/// One event record as reconstructed from the ledger.
/// Timestamps are seconds since epoch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub event_id: u32,
    pub name: String,
    pub description: String,
    pub start_date: i64,
    pub end_date: i64,
    pub status: EventStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_marker_roundtrip() {
        assert_eq!(EventStatus::Active.marker(), "0");
        assert_eq!(EventStatus::Completed.marker(), "1");
        assert_eq!(EventStatus::from_marker("1"), Some(EventStatus::Completed));
        assert_eq!(EventStatus::from_marker("0"), Some(EventStatus::Active));
        assert_eq!(EventStatus::from_marker("Completed"), None);
    }
}
