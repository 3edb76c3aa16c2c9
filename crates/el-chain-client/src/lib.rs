//! Trait seams over the two external collaborators: the browser-extension
//! wallet (key custody and signing) and the ledger RPC server (account
//! state and transaction submission).
//!
//! Futures are deliberately `?Send`: the whole workflow is a sequential
//! chain of suspend points on a single UI thread.

use async_trait::async_trait;
use el_api_types::Address;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Terminal failure categories for one user-triggered action.
/// None of these are retried.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("wallet permission not granted")]
    PermissionDenied,
    #[error("invalid account address: {0}")]
    InvalidAddress(String),
    #[error("network failure: {0}")]
    Network(String),
    #[error("signing rejected by wallet: {0}")]
    SigningRejected(String),
    #[error("transaction rejected by ledger: {0}")]
    Rejected(String),
    #[error("envelope construction failed: {0}")]
    Envelope(String),
    #[error("wallet provider failure: {0}")]
    Wallet(String),
    #[error("another action is already in flight")]
    Busy,
}

/// On-ledger account state needed to build a transaction: the replay
/// counter plus the raw data entries (values base64-encoded, as returned
/// by the RPC server).
#[derive(Debug, Clone)]
pub struct AccountRecord {
    pub account_id: Address,
    pub sequence: i64,
    pub data: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResult {
    pub hash: String,
}

/// The external wallet extension. `sign_transaction` takes the serialized
/// envelope and the network passphrase the signature must commit to.
#[async_trait(?Send)]
pub trait WalletProvider {
    async fn is_connected(&self) -> Result<bool, ChainError>;
    async fn set_allowed(&self) -> Result<bool, ChainError>;
    async fn get_address(&self) -> Result<Address, ChainError>;
    async fn sign_transaction(
        &self,
        envelope_b64: &str,
        network_passphrase: &str,
    ) -> Result<String, ChainError>;
}

/// The remote ledger RPC server.
#[async_trait(?Send)]
pub trait LedgerRpc {
    async fn load_account(&self, address: &Address) -> Result<AccountRecord, ChainError>;
    async fn submit_transaction(
        &self,
        signed_envelope_b64: &str,
    ) -> Result<SubmitResult, ChainError>;
}

/// Connect to the wallet and return the signer's address.
///
/// Checks connection permission first and requests it if absent; a decline
/// is `PermissionDenied`. May suspend on a browser permission prompt.
pub async fn connect<W: WalletProvider>(wallet: &W) -> Result<Address, ChainError> {
    if !wallet.is_connected().await? {
        if !wallet.set_allowed().await? {
            warn!("wallet permission not granted");
            return Err(ChainError::PermissionDenied);
        }
    }
    wallet.get_address().await
}
