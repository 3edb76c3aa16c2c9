//! Transaction primitives: named operations, the envelope that batches
//! them atomically, and the builder that assembles one from loaded
//! account state.
//!
//! The envelope serializes deterministically (fixed field order JSON,
//! then base64) so the bytes the wallet signs are reproducible. The
//! transaction hash commits to the network passphrase the same way the
//! signature does.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use el_api_types::Address;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Fee charged per operation, in stroops.
pub const BASE_FEE: u32 = 100;

/// Validity window applied to every envelope, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u32 = 30;

pub const NATIVE_ASSET: &str = "native";

/// A single named instruction within an envelope. A `ManageData` entry
/// with `value: None` deletes the named data entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Operation {
    ManageData {
        name: String,
        value: Option<String>,
    },
    Payment {
        destination: Address,
        asset: String,
        amount: String,
    },
}

impl Operation {
    pub fn data_entry(name: impl Into<String>, value: impl Into<String>) -> Self {
        Operation::ManageData {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn delete_entry(name: impl Into<String>) -> Self {
        Operation::ManageData {
            name: name.into(),
            value: None,
        }
    }
}

/// One atomic batch of operations, applied sequentially and
/// all-or-nothing by the remote ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionEnvelope {
    pub source: Address,
    pub sequence: i64,
    pub fee: u32,
    pub timeout_secs: u32,
    pub operations: Vec<Operation>,
}

#[derive(Debug, Error)]
pub enum TxnError {
    #[error("transaction requires at least one operation")]
    Empty,
    #[error("envelope encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct TransactionBuilder {
    source: Address,
    current_sequence: i64,
    timeout_secs: u32,
    operations: Vec<Operation>,
}

impl TransactionBuilder {
    /// `current_sequence` is the account's sequence as loaded from the
    /// ledger; the envelope consumes the next value.
    pub fn new(source: Address, current_sequence: i64) -> Self {
        Self {
            source,
            current_sequence,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            operations: Vec::new(),
        }
    }

    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn add_operations(mut self, operations: impl IntoIterator<Item = Operation>) -> Self {
        self.operations.extend(operations);
        self
    }

    pub fn set_timeout(mut self, secs: u32) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<TransactionEnvelope, TxnError> {
        if self.operations.is_empty() {
            return Err(TxnError::Empty);
        }

        let fee = BASE_FEE * self.operations.len() as u32;
        Ok(TransactionEnvelope {
            source: self.source,
            sequence: self.current_sequence + 1,
            fee,
            timeout_secs: self.timeout_secs,
            operations: self.operations,
        })
    }
}

impl TransactionEnvelope {
    /// Serialized form handed to the wallet for signing.
    pub fn to_base64(&self) -> Result<String, TxnError> {
        Ok(STANDARD.encode(serde_json::to_vec(self)?))
    }

    /// Hex transaction hash: SHA-256 over the passphrase digest followed
    /// by the envelope bytes, so the same envelope hashes differently on
    /// different networks.
    pub fn hash_hex(&self, network_passphrase: &str) -> Result<String, TxnError> {
        let mut hasher = Sha256::new();
        hasher.update(Sha256::digest(network_passphrase.as_bytes()));
        hasher.update(serde_json::to_vec(self)?);
        Ok(to_hex(&hasher.finalize()))
    }
}

fn to_hex(input: &[u8]) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for byte in input {
        output.push_str(&format!("{byte:02x}"));
    }
    output
}
