//! Event-admin core: the submission workflow tying the wallet connector,
//! account loader, operation builder and transaction submitter together.
//!
//! Every operation takes the explicit [`ClientContext`] constructed by
//! the embedder; there is no global session state. Failures surface as
//! typed [`ChainError`] kinds for the UI to present.

pub mod builder;
pub mod data;
pub mod guard;
pub mod view;

pub use builder::{EventAction, EventFields};

use el_api_types::{Address, Event, EventStatus};
use el_chain_client::{
    AccountRecord, ChainError, LedgerRpc, SubmitResult, WalletProvider, connect,
};
use el_txn::{DEFAULT_TIMEOUT_SECS, TransactionBuilder};
use tracing::{info, warn};

/// Per-client configuration: which network signatures commit to, and
/// where the optional contract fee payment goes.
#[derive(Debug, Clone)]
pub struct ClientContext {
    pub network_passphrase: String,
    pub fee_destination: Option<Address>,
}

impl ClientContext {
    pub fn new(network_passphrase: impl Into<String>, fee_destination: Option<Address>) -> Self {
        Self {
            network_passphrase: network_passphrase.into(),
            fee_destination,
        }
    }
}

pub struct EventAdminClient<W, L> {
    context: ClientContext,
    wallet: W,
    ledger: L,
    guard: guard::InFlight,
}

impl<W, L> EventAdminClient<W, L>
where
    W: WalletProvider,
    L: LedgerRpc,
{
    pub fn new(context: ClientContext, wallet: W, ledger: L) -> Self {
        Self {
            context,
            wallet,
            ledger,
            guard: guard::InFlight::default(),
        }
    }

    pub fn context(&self) -> &ClientContext {
        &self.context
    }

    pub async fn create_event(&self, fields: EventFields) -> Result<SubmitResult, ChainError> {
        self.run_action(EventAction::Create(fields)).await
    }

    pub async fn update_event(
        &self,
        event_id: u32,
        fields: EventFields,
        status: EventStatus,
    ) -> Result<SubmitResult, ChainError> {
        self.run_action(EventAction::Update {
            event_id,
            fields,
            status,
        })
        .await
    }

    pub async fn delete_event(&self, event_id: u32) -> Result<SubmitResult, ChainError> {
        self.run_action(EventAction::Delete { event_id }).await
    }

    /// Read the signer's account data entries back into event records.
    pub async fn list_events(&self) -> Result<Vec<Event>, ChainError> {
        let _slot = self.guard.try_begin()?;
        let signer = connect(&self.wallet).await?;
        let account = self.load_account(&signer).await?;
        Ok(data::events_from_account(&account))
    }

    /// Fetch current account state, failing fast on a malformed address
    /// without a network round-trip.
    pub async fn load_account(&self, address: &Address) -> Result<AccountRecord, ChainError> {
        if !el_strkey::is_valid_public_key(address.as_str()) {
            warn!("invalid public key format: {}", address.as_str());
            return Err(ChainError::InvalidAddress(address.0.clone()));
        }
        self.ledger.load_account(address).await
    }

    /// Connect the wallet, load account state, build the operation set,
    /// request a signature, submit. Holds the in-flight slot for the
    /// whole chain of suspend points.
    async fn run_action(&self, action: EventAction) -> Result<SubmitResult, ChainError> {
        let _slot = self.guard.try_begin()?;

        let signer = connect(&self.wallet).await?;
        let account = self.load_account(&signer).await?;

        let operations = builder::build_operations(&action, self.context.fee_destination.as_ref());
        let envelope = TransactionBuilder::new(account.account_id, account.sequence)
            .add_operations(operations)
            .set_timeout(DEFAULT_TIMEOUT_SECS)
            .build()
            .map_err(|err| ChainError::Envelope(err.to_string()))?;
        let envelope_b64 = envelope
            .to_base64()
            .map_err(|err| ChainError::Envelope(err.to_string()))?;

        let signed = self
            .wallet
            .sign_transaction(&envelope_b64, &self.context.network_passphrase)
            .await?;

        let result = self.ledger.submit_transaction(&signed).await?;
        info!(action = action.tag(), hash = %result.hash, "transaction submitted");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use el_txn::{Operation, TransactionEnvelope};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    const SIGNER: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";

    #[derive(Default)]
    struct MockWallet {
        reject_signing: bool,
        signed_envelopes: RefCell<Vec<String>>,
        address: Option<String>,
    }

    #[async_trait(?Send)]
    impl WalletProvider for MockWallet {
        async fn is_connected(&self) -> Result<bool, ChainError> {
            Ok(true)
        }

        async fn set_allowed(&self) -> Result<bool, ChainError> {
            Ok(true)
        }

        async fn get_address(&self) -> Result<Address, ChainError> {
            Ok(Address(
                self.address.clone().unwrap_or_else(|| SIGNER.to_owned()),
            ))
        }

        async fn sign_transaction(
            &self,
            envelope_b64: &str,
            _network_passphrase: &str,
        ) -> Result<String, ChainError> {
            if self.reject_signing {
                return Err(ChainError::SigningRejected("user declined".to_owned()));
            }
            self.signed_envelopes
                .borrow_mut()
                .push(envelope_b64.to_owned());
            Ok(format!("signed:{envelope_b64}"))
        }
    }

    #[derive(Default)]
    struct MockLedger {
        data: HashMap<String, String>,
        load_calls: Cell<u32>,
        submitted: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl LedgerRpc for MockLedger {
        async fn load_account(&self, address: &Address) -> Result<AccountRecord, ChainError> {
            self.load_calls.set(self.load_calls.get() + 1);
            Ok(AccountRecord {
                account_id: address.clone(),
                sequence: 7_000,
                data: self.data.clone(),
            })
        }

        async fn submit_transaction(
            &self,
            signed_envelope_b64: &str,
        ) -> Result<SubmitResult, ChainError> {
            self.submitted
                .borrow_mut()
                .push(signed_envelope_b64.to_owned());
            Ok(SubmitResult {
                hash: "abc123".to_owned(),
            })
        }
    }

    fn client(wallet: MockWallet, ledger: MockLedger) -> EventAdminClient<MockWallet, MockLedger> {
        EventAdminClient::new(
            ClientContext::new("Test SDF Network ; September 2015", None),
            wallet,
            ledger,
        )
    }

    fn fields() -> EventFields {
        EventFields {
            name: "Meetup".to_owned(),
            description: "desc".to_owned(),
            start_date: 1_700_000_000,
            end_date: 1_700_003_600,
        }
    }

    #[tokio::test]
    async fn create_signs_and_submits_the_built_envelope() -> anyhow::Result<()> {
        let admin = client(MockWallet::default(), MockLedger::default());

        let result = admin.create_event(fields()).await?;
        assert_eq!(result.hash, "abc123");

        let submitted = admin.ledger.submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert!(submitted[0].starts_with("signed:"));

        // The wallet saw the envelope the builder produced.
        let signed = admin.wallet.signed_envelopes.borrow();
        let raw = STANDARD.decode(&signed[0])?;
        let envelope: TransactionEnvelope = serde_json::from_slice(&raw)?;
        assert_eq!(envelope.sequence, 7_001);
        assert_eq!(envelope.timeout_secs, 30);
        assert_eq!(envelope.operations.len(), 4);
        assert!(matches!(
            &envelope.operations[0],
            Operation::ManageData { name, .. } if name == "event_name"
        ));
        Ok(())
    }

    #[tokio::test]
    async fn signing_rejection_submits_nothing() {
        let wallet = MockWallet {
            reject_signing: true,
            ..MockWallet::default()
        };
        let admin = client(wallet, MockLedger::default());

        let result = admin.delete_event(7).await;
        assert!(matches!(result, Err(ChainError::SigningRejected(_))));
        assert!(admin.ledger.submitted.borrow().is_empty());
    }

    #[tokio::test]
    async fn malformed_address_never_reaches_the_network() {
        let wallet = MockWallet {
            address: Some("not-a-strkey".to_owned()),
            ..MockWallet::default()
        };
        let admin = client(wallet, MockLedger::default());

        let result = admin.create_event(fields()).await;
        assert!(matches!(result, Err(ChainError::InvalidAddress(_))));
        assert_eq!(admin.ledger.load_calls.get(), 0);
        assert!(admin.ledger.submitted.borrow().is_empty());
    }

    #[tokio::test]
    async fn list_events_decodes_account_entries() -> anyhow::Result<()> {
        let mut data = HashMap::new();
        data.insert("event_5_name".to_owned(), STANDARD.encode("Meetup"));
        data.insert("event_5_description".to_owned(), STANDARD.encode("desc"));
        data.insert(
            "event_5_start_date".to_owned(),
            STANDARD.encode("1700000000"),
        );
        data.insert("event_5_end_date".to_owned(), STANDARD.encode("1700003600"));
        data.insert("event_5_status".to_owned(), STANDARD.encode("1"));

        let admin = client(
            MockWallet::default(),
            MockLedger {
                data,
                ..MockLedger::default()
            },
        );

        let events = admin.list_events().await?;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_id, 5);
        assert_eq!(events[0].status, EventStatus::Completed);
        Ok(())
    }

    #[tokio::test]
    async fn actions_release_the_guard_on_both_paths() -> anyhow::Result<()> {
        let admin = client(MockWallet::default(), MockLedger::default());

        admin.create_event(fields()).await?;
        admin.delete_event(1).await?;

        let rejecting = client(
            MockWallet {
                reject_signing: true,
                ..MockWallet::default()
            },
            MockLedger::default(),
        );
        assert!(rejecting.update_event(1, fields(), EventStatus::Active).await.is_err());
        // Error path released the slot; the next action may start.
        assert!(rejecting.list_events().await.is_ok());
        Ok(())
    }
}
